//! Reed-Muller codes over finite fields.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use log::debug;

use crate::algebra::field::FiniteField;
use crate::codes::grid;
use crate::codes::interpolation::interpolate;
use crate::codes::monomials::Monomials;
use crate::codes::parameters::{CodeParameters, Regime};
use crate::codes::polynomial_encoder::ReedMullerPolynomialEncoder;
use crate::codes::vector_encoder::ReedMullerVectorEncoder;
use crate::error::{Error, Result};
use crate::structures::f2m::F2;

/// The Reed-Muller code of `order` in `num_vars` variables over `F`: the
/// evaluations on `F^m` of all polynomials of total degree at most `order`.
///
/// A code is an immutable value. Two codes are equal when they share field
/// size, order and number of variables.
///
/// # Example
///
/// ```
/// use muller::codes::ReedMullerCode;
/// use muller::Fp;
///
/// let code = ReedMullerCode::<Fp<59>>::new(2, 4).unwrap();
/// assert_eq!(code.dimension(), 15);
/// assert_eq!(
///     code.to_string(),
///     "59-ary Reed Muller Code of order 2 and number of variables 4"
/// );
/// ```
pub struct ReedMullerCode<F> {
    order: usize,
    num_vars: usize,
    regime: Regime,
    params: CodeParameters,
    _field: PhantomData<fn() -> F>,
}

/// Binary Reed-Muller codes, `RM(r, m)` over GF(2).
///
/// `BinaryReedMullerCode::new(r, m)` picks the binary formulas.
pub type BinaryReedMullerCode = ReedMullerCode<F2>;

impl<F: FiniteField> ReedMullerCode<F> {
    /// Build the code, choosing the binary formulas when `F` has two
    /// elements and the q-ary ones otherwise.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidField`] if `F` is not a valid field.
    /// - [`Error::OrderTooLarge`] if `order >= q` (q-ary) or
    ///   `order > num_vars` (binary).
    /// - [`Error::InvalidParameter`] if the code length overflows `usize`.
    pub fn new(order: usize, num_vars: usize) -> Result<Self> {
        if F::ORDER == 2 {
            Self::binary(order, num_vars)
        } else {
            Self::qary(order, num_vars)
        }
    }

    /// Build the code with the q-ary formulas; requires `order < q`.
    pub fn qary(order: usize, num_vars: usize) -> Result<Self> {
        validate_field::<F>()?;
        let params = CodeParameters::qary(F::ORDER, order, num_vars)?;
        Ok(Self::with_params(order, num_vars, Regime::QAry, params))
    }

    /// Build the code with the binary formulas; requires `q = 2` and
    /// `order <= num_vars`.
    pub fn binary(order: usize, num_vars: usize) -> Result<Self> {
        validate_field::<F>()?;
        if F::ORDER != 2 {
            return Err(Error::InvalidField {
                reason: "binary Reed-Muller codes need a field with two elements",
            });
        }
        let params = CodeParameters::binary(order, num_vars)?;
        Ok(Self::with_params(order, num_vars, Regime::Binary, params))
    }

    fn with_params(order: usize, num_vars: usize, regime: Regime, params: CodeParameters) -> Self {
        debug!(
            "built {:?} Reed-Muller code over GF({}): r={} m={} n={} k={} d={}",
            regime,
            F::ORDER,
            order,
            num_vars,
            params.length,
            params.dimension,
            params.minimum_distance
        );
        Self {
            order,
            num_vars,
            regime,
            params,
            _field: PhantomData,
        }
    }

    /// Degree bound `r`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of variables `m`.
    pub fn number_of_variables(&self) -> usize {
        self.num_vars
    }

    /// Field size `q`.
    pub fn field_size(&self) -> u64 {
        F::ORDER
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn parameters(&self) -> CodeParameters {
        self.params
    }

    /// `q^m`.
    pub fn length(&self) -> usize {
        self.params.length
    }

    pub fn dimension(&self) -> usize {
        self.params.dimension
    }

    pub fn minimum_distance(&self) -> usize {
        self.params.minimum_distance
    }

    /// The monomial basis, in the order of the generator matrix rows.
    pub fn monomials(&self) -> Monomials {
        Monomials::new(self.num_vars, self.order, F::ORDER)
    }

    /// Whether `word` is a codeword.
    ///
    /// Words of the wrong length are never codewords.
    pub fn contains(&self, word: &[F]) -> bool {
        if word.len() != self.length() {
            return false;
        }
        // the interpolated polynomial always has total degree <= order
        match interpolate(word, self.num_vars, self.order) {
            Ok(p) => grid::evaluate(&p, self.num_vars) == word,
            Err(_) => false,
        }
    }

    /// Encoder taking message vectors of length `dimension`.
    pub fn vector_encoder(&self) -> ReedMullerVectorEncoder<F> {
        ReedMullerVectorEncoder::new(self.clone())
    }

    /// Encoder taking polynomials of total degree at most `order`.
    pub fn polynomial_encoder(&self) -> ReedMullerPolynomialEncoder<F> {
        ReedMullerPolynomialEncoder::new(self.clone())
    }
}

fn validate_field<F: FiniteField>() -> Result<()> {
    F::validate().map_err(|reason| Error::InvalidField { reason })
}

impl<F> Clone for ReedMullerCode<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ReedMullerCode<F> {}

impl<F> PartialEq for ReedMullerCode<F> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.num_vars == other.num_vars
    }
}

impl<F> Eq for ReedMullerCode<F> {}

impl<F> Hash for ReedMullerCode<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order.hash(state);
        self.num_vars.hash(state);
    }
}

impl<F: FiniteField> fmt::Debug for ReedMullerCode<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReedMullerCode")
            .field("field_size", &F::ORDER)
            .field("order", &self.order)
            .field("num_vars", &self.num_vars)
            .field("regime", &self.regime)
            .finish()
    }
}

impl<F: FiniteField> fmt::Display for ReedMullerCode<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.regime {
            Regime::QAry => write!(
                f,
                "{}-ary Reed Muller Code of order {} and number of variables {}",
                F::ORDER,
                self.order,
                self.num_vars
            ),
            Regime::Binary => write!(
                f,
                "Binary Reed Muller Code of order {} and number of variables {}",
                self.order, self.num_vars
            ),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CodeRepr {
    field_size: u64,
    order: usize,
    num_vars: usize,
}

#[cfg(feature = "serde")]
impl<F: FiniteField> serde::Serialize for ReedMullerCode<F> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        CodeRepr {
            field_size: F::ORDER,
            order: self.order,
            num_vars: self.num_vars,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: FiniteField> serde::Deserialize<'de> for ReedMullerCode<F> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = CodeRepr::deserialize(deserializer)?;
        if repr.field_size != F::ORDER {
            return Err(serde::de::Error::custom(Error::InvalidField {
                reason: "serialized field size differs from the field type",
            }));
        }
        Self::new(repr.order, repr.num_vars).map_err(serde::de::Error::custom)
    }
}
