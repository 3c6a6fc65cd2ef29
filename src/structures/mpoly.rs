//! Multivariate polynomials and the polynomial rings they live in.
//!
//! An [`MPoly`] is a sparse map from exponent vectors to non-zero
//! coefficients. A [`PolyRing`] fixes the number of variables and their
//! names; it plays the role of the message space of the polynomial encoder.

use alloc::collections::btree_map::Entry;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::field::FiniteField;
use crate::algebra::ring::Ring;

/// Sparse multivariate polynomial over `F` in `num_vars` variables.
///
/// Exponent vectors always have exactly `num_vars` entries and zero
/// coefficients are never stored, so structural equality is polynomial
/// equality.
///
/// # Example
///
/// ```
/// use muller::{Fp, MPoly, Ring};
///
/// type F3 = Fp<3>;
///
/// let x0 = MPoly::<F3>::var(2, 0).unwrap();
/// let x1 = MPoly::<F3>::var(2, 1).unwrap();
/// let p = MPoly::constant(2, F3::ONE) + x0.clone() + x1.clone() * x1.clone() + x0 * x1;
/// assert_eq!(p.total_degree(), Some(2));
/// assert_eq!(p.to_string(), "x0*x1 + x1^2 + x0 + 1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MPoly<F> {
    num_vars: usize,
    terms: BTreeMap<Vec<usize>, F>,
}

impl<F: Ring> MPoly<F> {
    /// The zero polynomial in `num_vars` variables.
    pub fn zero(num_vars: usize) -> Self {
        Self {
            num_vars,
            terms: BTreeMap::new(),
        }
    }

    /// The constant polynomial `c`.
    pub fn constant(num_vars: usize, c: F) -> Self {
        Self::from_terms(num_vars, [(vec![0; num_vars], c)])
    }

    /// The variable `x_i`, or `None` if `i >= num_vars`.
    pub fn var(num_vars: usize, i: usize) -> Option<Self> {
        if i >= num_vars {
            return None;
        }
        let mut exponents = vec![0; num_vars];
        exponents[i] = 1;
        Some(Self::term(exponents, F::ONE))
    }

    /// The single term `c * x^exponents`; the variable count is `exponents.len()`.
    pub fn term(exponents: Vec<usize>, c: F) -> Self {
        let num_vars = exponents.len();
        Self::from_terms(num_vars, [(exponents, c)])
    }

    /// Sum of the given terms.
    ///
    /// Repeated exponent vectors are added together. An exponent vector
    /// longer than `num_vars` widens the polynomial to that many variables;
    /// shorter ones are padded with zero exponents.
    pub fn from_terms<I>(num_vars: usize, terms: I) -> Self
    where
        I: IntoIterator<Item = (Vec<usize>, F)>,
    {
        let terms: Vec<(Vec<usize>, F)> = terms.into_iter().collect();
        let num_vars = terms
            .iter()
            .map(|(e, _)| e.len())
            .fold(num_vars, usize::max);

        let mut poly = Self::zero(num_vars);
        for (mut exponents, c) in terms {
            exponents.resize(num_vars, 0);
            poly.add_term(exponents, c);
        }
        poly
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of non-zero terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Total degree, `None` for the zero polynomial.
    pub fn total_degree(&self) -> Option<usize> {
        self.terms.keys().map(|e| e.iter().sum()).max()
    }

    /// Coefficient of `x^exponents`; zero for absent terms or a wrong-length vector.
    pub fn coeff(&self, exponents: &[usize]) -> F {
        self.terms.get(exponents).copied().unwrap_or(F::ZERO)
    }

    /// Non-zero terms in ascending lexicographic order of exponent vectors.
    pub fn terms(&self) -> impl Iterator<Item = (&[usize], F)> + '_ {
        self.terms.iter().map(|(e, &c)| (e.as_slice(), c))
    }

    /// Evaluate at `point`; coordinates past the end of `point` count as zero.
    pub fn eval(&self, point: &[F]) -> F {
        self.terms.iter().fold(F::ZERO, |acc, (exponents, &c)| {
            let monomial = exponents.iter().enumerate().fold(F::ONE, |m, (j, &e)| {
                if e == 0 {
                    m
                } else {
                    m * point.get(j).copied().unwrap_or(F::ZERO).pow(e as u64)
                }
            });
            acc + c * monomial
        })
    }

    fn add_term(&mut self, exponents: Vec<usize>, c: F) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(exponents) {
            Entry::Vacant(slot) => {
                slot.insert(c);
            }
            Entry::Occupied(mut slot) => {
                let sum = *slot.get() + c;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// The same polynomial viewed in `num_vars` variables (never fewer than now).
    fn widened(mut self, num_vars: usize) -> Self {
        if num_vars > self.num_vars {
            self.terms = core::mem::take(&mut self.terms)
                .into_iter()
                .map(|(mut e, c)| {
                    e.resize(num_vars, 0);
                    (e, c)
                })
                .collect();
            self.num_vars = num_vars;
        }
        self
    }

    fn add_scaled(mut self, rhs: &Self, scale: F) -> Self {
        let num_vars = self.num_vars.max(rhs.num_vars);
        self = self.widened(num_vars);
        for (e, &c) in &rhs.terms {
            let mut e = e.clone();
            e.resize(num_vars, 0);
            self.add_term(e, c * scale);
        }
        self
    }

    /// Terms sorted by descending total degree, ties by descending exponent vector.
    fn graded_terms(&self) -> Vec<(&Vec<usize>, F)> {
        let mut terms: Vec<_> = self.terms.iter().map(|(e, &c)| (e, c)).collect();
        terms.sort_by(|(a, _), (b, _)| {
            let (da, db): (usize, usize) = (a.iter().sum(), b.iter().sum());
            db.cmp(&da).then_with(|| b.cmp(a))
        });
        terms
    }

    fn write_with<N>(&self, f: &mut fmt::Formatter<'_>, name: N) -> fmt::Result
    where
        N: Fn(usize) -> String,
    {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (k, (exponents, c)) in self.graded_terms().into_iter().enumerate() {
            if k > 0 {
                write!(f, " + ")?;
            }

            let factors: Vec<String> = exponents
                .iter()
                .enumerate()
                .filter(|(_, &e)| e > 0)
                .map(|(j, &e)| match e {
                    1 => name(j),
                    _ => format!("{}^{}", name(j), e),
                })
                .collect();

            match (factors.is_empty(), c.is_one()) {
                (true, _) => write!(f, "{}", c)?,
                (false, true) => write!(f, "{}", factors.join("*"))?,
                (false, false) => write!(f, "{}*{}", c, factors.join("*"))?,
            }
        }
        Ok(())
    }
}

/* ---- Arithmetic operators ---- */

impl<F: Ring> Add for MPoly<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_scaled(&rhs, F::ONE)
    }
}

impl<F: Ring> Add<&MPoly<F>> for MPoly<F> {
    type Output = Self;

    fn add(self, rhs: &MPoly<F>) -> Self::Output {
        self.add_scaled(rhs, F::ONE)
    }
}

impl<F: Ring> Sub for MPoly<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_scaled(&rhs, -F::ONE)
    }
}

impl<F: Ring> Sub<&MPoly<F>> for MPoly<F> {
    type Output = Self;

    fn sub(self, rhs: &MPoly<F>) -> Self::Output {
        self.add_scaled(rhs, -F::ONE)
    }
}

impl<F: Ring> Neg for MPoly<F> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for c in self.terms.values_mut() {
            *c = -*c;
        }
        self
    }
}

impl<F: Ring> Mul<&MPoly<F>> for MPoly<F> {
    type Output = Self;

    fn mul(self, rhs: &MPoly<F>) -> Self::Output {
        let num_vars = self.num_vars.max(rhs.num_vars);
        let mut product = Self::zero(num_vars);
        for (a, &ca) in &self.terms {
            for (b, &cb) in &rhs.terms {
                let exponents = (0..num_vars)
                    .map(|j| a.get(j).copied().unwrap_or(0) + b.get(j).copied().unwrap_or(0))
                    .collect();
                product.add_term(exponents, ca * cb);
            }
        }
        product
    }
}

impl<F: Ring> Mul for MPoly<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

/// Scalar multiplication: polynomial * field element
impl<F: Ring> Mul<F> for MPoly<F> {
    type Output = Self;

    fn mul(mut self, rhs: F) -> Self::Output {
        if rhs.is_zero() {
            return Self::zero(self.num_vars);
        }
        for c in self.terms.values_mut() {
            *c = *c * rhs;
        }
        // a field has no zero divisors, but a general ring may
        self.terms.retain(|_, c| !c.is_zero());
        self
    }
}

impl<F: Ring> fmt::Debug for MPoly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |j| format!("x{}", j))
    }
}

impl<F: Ring> fmt::Display for MPoly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MPolyRepr<F> {
    num_vars: usize,
    terms: Vec<(Vec<usize>, F)>,
}

#[cfg(feature = "serde")]
impl<F: Ring + serde::Serialize> serde::Serialize for MPoly<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MPolyRepr {
            num_vars: self.num_vars,
            terms: self.terms.iter().map(|(e, &c)| (e.clone(), c)).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: Ring + serde::Deserialize<'de>> serde::Deserialize<'de> for MPoly<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = MPolyRepr::<F>::deserialize(deserializer)?;
        if repr.terms.iter().any(|(e, _)| e.len() != repr.num_vars) {
            return Err(serde::de::Error::custom(
                "exponent vector length differs from num_vars",
            ));
        }
        Ok(Self::from_terms(repr.num_vars, repr.terms))
    }
}

/// A multivariate polynomial ring `F[x_0, …, x_{m-1}]` with named variables.
///
/// Membership is decided by variable count: two rings over the same field
/// with the same number of variables accept the same polynomials whatever
/// the variables are called.
///
/// # Example
///
/// ```
/// use muller::{Fp, PolyRing};
///
/// let ring = PolyRing::<Fp<3>>::new(2);
/// assert_eq!(
///     ring.to_string(),
///     "Multivariate Polynomial Ring in x0, x1 over Finite Field of size 3"
/// );
/// ```
pub struct PolyRing<F> {
    names: Vec<String>,
    _field: PhantomData<fn() -> F>,
}

impl<F: Ring> PolyRing<F> {
    /// Ring with variables named `x0, …, x{m-1}`.
    pub fn new(num_vars: usize) -> Self {
        Self::with_names((0..num_vars).map(|i| format!("x{}", i)))
    }

    /// Ring whose variables carry the given names, in order.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            _field: PhantomData,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Generator `x_i`, or `None` if `i` is out of range.
    pub fn gen(&self, i: usize) -> Option<MPoly<F>> {
        MPoly::var(self.num_vars(), i)
    }

    /// All generators in order.
    pub fn gens(&self) -> Vec<MPoly<F>> {
        (0..self.num_vars()).filter_map(|i| self.gen(i)).collect()
    }

    pub fn zero(&self) -> MPoly<F> {
        MPoly::zero(self.num_vars())
    }

    pub fn one(&self) -> MPoly<F> {
        MPoly::constant(self.num_vars(), F::ONE)
    }

    pub fn constant(&self, c: F) -> MPoly<F> {
        MPoly::constant(self.num_vars(), c)
    }

    /// Whether `p` is an element of this ring.
    pub fn contains(&self, p: &MPoly<F>) -> bool {
        p.num_vars() == self.num_vars()
    }

    /// Render `p` using this ring's variable names.
    pub fn format<'a>(&'a self, p: &'a MPoly<F>) -> impl fmt::Display + 'a {
        Named { ring: self, poly: p }
    }
}

struct Named<'a, F> {
    ring: &'a PolyRing<F>,
    poly: &'a MPoly<F>,
}

impl<F: Ring> fmt::Display for Named<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = &self.ring.names;
        self.poly.write_with(f, |j| {
            names.get(j).cloned().unwrap_or_else(|| format!("x{}", j))
        })
    }
}

impl<F> Clone for PolyRing<F> {
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
            _field: PhantomData,
        }
    }
}

impl<F> PartialEq for PolyRing<F> {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl<F> Eq for PolyRing<F> {}

impl<F: FiniteField> fmt::Debug for PolyRing<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyRing")
            .field("field_size", &F::ORDER)
            .field("names", &self.names)
            .finish()
    }
}

impl<F: FiniteField> fmt::Display for PolyRing<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multivariate Polynomial Ring in {} over Finite Field of size {}",
            self.names.join(", "),
            F::ORDER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::f2m::F2;
    use crate::structures::fp::Fp;
    use alloc::string::ToString;

    type F3 = Fp<3>;
    type F5 = Fp<5>;

    fn sample() -> MPoly<F3> {
        // 1 + x0 + x1 + x1^2 + x0*x1
        MPoly::from_terms(
            2,
            [
                (vec![0, 0], F3::ONE),
                (vec![1, 0], F3::ONE),
                (vec![0, 1], F3::ONE),
                (vec![0, 2], F3::ONE),
                (vec![1, 1], F3::ONE),
            ],
        )
    }

    #[test]
    fn zero_has_no_degree() {
        let z = MPoly::<F3>::zero(3);
        assert!(z.is_zero());
        assert_eq!(z.total_degree(), None);
        assert_eq!(z.num_vars(), 3);
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn constant_zero_is_zero() {
        assert!(MPoly::constant(2, F3::ZERO).is_zero());
        assert_eq!(MPoly::constant(2, F3::new(2)).total_degree(), Some(0));
    }

    #[test]
    fn var_out_of_range() {
        assert!(MPoly::<F3>::var(2, 2).is_none());
        assert_eq!(MPoly::<F3>::var(2, 1).unwrap().total_degree(), Some(1));
    }

    #[test]
    fn from_terms_merges_and_cancels() {
        let p = MPoly::from_terms(
            2,
            [
                (vec![1, 0], F3::ONE),
                (vec![1, 0], F3::new(2)),
                (vec![0, 1], F3::new(2)),
            ],
        );
        assert_eq!(p.num_terms(), 1);
        assert_eq!(p.coeff(&[0, 1]), F3::new(2));
        assert_eq!(p.coeff(&[1, 0]), F3::ZERO);
    }

    #[test]
    fn from_terms_widens_for_long_exponents() {
        let p = MPoly::from_terms(1, [(vec![0, 0, 2], F5::ONE)]);
        assert_eq!(p.num_vars(), 3);
        assert_eq!(p.total_degree(), Some(2));
    }

    #[test]
    fn display_graded_order() {
        assert_eq!(sample().to_string(), "x0*x1 + x1^2 + x0 + x1 + 1");
        let q = MPoly::from_terms(2, [(vec![1, 1], F3::new(2)), (vec![0, 0], F3::ONE)]);
        assert_eq!(q.to_string(), "2*x0*x1 + 1");
    }

    #[test]
    fn eval_matches_hand_computation() {
        let p = sample();
        // p(1, 2) = 1 + 1 + 2 + 4 + 2 = 10 ≡ 1
        assert_eq!(p.eval(&[F3::new(1), F3::new(2)]), F3::ONE);
        // p(0, 0) = 1
        assert_eq!(p.eval(&[F3::ZERO, F3::ZERO]), F3::ONE);
    }

    #[test]
    fn arithmetic_agrees_with_evaluation() {
        let p = sample();
        let q = MPoly::from_terms(2, [(vec![2, 0], F3::new(2)), (vec![0, 1], F3::ONE)]);
        for a in 0..3 {
            for b in 0..3 {
                let pt = [F3::new(a), F3::new(b)];
                assert_eq!((p.clone() + &q).eval(&pt), p.eval(&pt) + q.eval(&pt));
                assert_eq!((p.clone() - &q).eval(&pt), p.eval(&pt) - q.eval(&pt));
                assert_eq!((p.clone() * &q).eval(&pt), p.eval(&pt) * q.eval(&pt));
                assert_eq!((-p.clone()).eval(&pt), -p.eval(&pt));
                assert_eq!((p.clone() * F3::new(2)).eval(&pt), p.eval(&pt) * F3::new(2));
            }
        }
    }

    #[test]
    fn sub_self_is_zero() {
        let p = sample();
        assert!((p.clone() - p).is_zero());
    }

    #[test]
    fn mixed_variable_counts_embed() {
        let x0 = MPoly::<F3>::var(1, 0).unwrap();
        let y1 = MPoly::<F3>::var(2, 1).unwrap();
        let s = x0 * y1;
        assert_eq!(s.num_vars(), 2);
        assert_eq!(s.coeff(&[1, 1]), F3::ONE);
    }

    #[test]
    fn binary_cancellation() {
        let x = MPoly::<F2>::var(1, 0).unwrap();
        assert!((x.clone() + x).is_zero());
    }

    #[test]
    fn ring_generators_and_membership() {
        let ring = PolyRing::<F3>::new(2);
        assert_eq!(ring.gens().len(), 2);
        assert!(ring.gen(2).is_none());
        assert!(ring.contains(&sample()));
        assert!(!ring.contains(&MPoly::zero(3)));
        assert_eq!(ring.one(), ring.constant(F3::ONE));
        assert!(ring.zero().is_zero());
    }

    #[test]
    fn ring_display_and_named_format() {
        let ring = PolyRing::<F3>::with_names(["y", "z"]);
        assert_eq!(
            ring.to_string(),
            "Multivariate Polynomial Ring in y, z over Finite Field of size 3"
        );
        assert_eq!(ring.format(&sample()).to_string(), "y*z + z^2 + y + z + 1");
    }
}
