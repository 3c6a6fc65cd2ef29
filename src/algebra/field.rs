use core::hash::Hash;

use super::ring::Ring;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`, if it exists.
    ///
    /// For a true field:
    /// - `self == ZERO`  ⇒  `None`
    /// - otherwise       ⇒  `Some(a⁻¹)`
    fn inverse(self) -> Option<Self>;

    /// Safe division: returns `None` on division by zero.
    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}

/// A finite field with a canonical total order on its elements.
///
/// The order is fixed by [`FiniteField::from_index`]: element `i` is the
/// `i`-th element for `i` in `0..ORDER`. Everything that walks the field
/// (point grids, interpolation nodes) goes through this order, so an
/// implementation must satisfy
/// `from_index(i).next() == Some(from_index(i + 1))` and
/// `from_index(0) == ZERO`.
pub trait FiniteField: Field + Hash {
    /// Number of elements `q`.
    const ORDER: u64;

    /// The prime `p` with `q = p^k`.
    const CHARACTERISTIC: u64;

    /// Check that the type parameters describe an actual field.
    ///
    /// Types like `Fp<15>` compile but are not fields; code constructors
    /// call this before doing anything else.
    fn validate() -> Result<(), &'static str>;

    /// The `index`-th element in canonical order. `index` is reduced mod `ORDER`.
    fn from_index(index: u64) -> Self;

    /// Position of `self` in canonical order, in `0..ORDER`.
    fn index(self) -> u64;

    #[inline]
    fn first() -> Self {
        Self::from_index(0)
    }

    #[inline]
    fn last() -> Self {
        Self::from_index(Self::ORDER - 1)
    }

    /// Successor in canonical order, `None` after [`FiniteField::last`].
    #[inline]
    fn next(self) -> Option<Self> {
        let i = self.index() + 1;
        (i < Self::ORDER).then(|| Self::from_index(i))
    }

    /// All elements in canonical order.
    fn elements() -> Elements<Self> {
        Elements {
            current: Some(Self::first()),
        }
    }
}

/// Iterator over the elements of a finite field, see [`FiniteField::elements`].
#[derive(Debug, Clone)]
pub struct Elements<F> {
    current: Option<F>,
}

impl<F: FiniteField> Iterator for Elements<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        let item = self.current?;
        self.current = item.next();
        Some(item)
    }
}
