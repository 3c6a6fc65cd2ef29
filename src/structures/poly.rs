use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;

/// Univariate polynomial over a field `F`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The zero polynomial is represented as an empty coefficient vector.
#[derive(Clone, PartialEq, Eq)]
pub struct Poly<F> {
    coeffs: Vec<F>,
}

impl<F: Ring> Poly<F> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`.
    /// Trailing zeros are automatically removed.
    ///
    /// # Example
    ///
    /// ```
    /// use muller::{Fp, Poly};
    ///
    /// type F17 = Fp<17>;
    ///
    /// // 3 + 2x + x^2
    /// let p = Poly::new(vec![F17::new(3), F17::new(2), F17::new(1)]);
    /// assert_eq!(p.degree(), Some(2));
    /// ```
    pub fn new(coeffs: Vec<F>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Create a constant polynomial.
    pub fn constant(c: F) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { coeffs: vec![c] }
        }
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![F::ZERO, F::ONE],
        }
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: F, n: usize) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![F::ZERO; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise
    /// where `n` is the highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<F> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree, so callers can
    /// read a fixed number of coefficients without padding.
    pub fn coeff(&self, i: usize) -> F {
        self.coeffs.get(i).copied().unwrap_or(F::ZERO)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use muller::{Fp, Poly};
    ///
    /// type F17 = Fp<17>;
    ///
    /// // p(x) = 1 + 2x + 3x^2
    /// let p = Poly::new(vec![F17::new(1), F17::new(2), F17::new(3)]);
    ///
    /// // p(2) = 1 + 4 + 12 = 17 ≡ 0 (mod 17)
    /// assert_eq!(p.eval(F17::new(2)), F17::new(0));
    /// ```
    pub fn eval(&self, x: F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::ZERO, |acc, &coeff| acc * x + coeff)
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    pub fn from_roots(roots: &[F]) -> Self {
        roots.iter().fold(Self::constant(F::ONE), |acc, &r| {
            acc * Self::new(vec![-r, F::ONE])
        })
    }

    /// Add `c * rhs` into `self` in place.
    fn add_scaled(&mut self, rhs: &Self, c: F) {
        if self.coeffs.len() < rhs.coeffs.len() {
            self.coeffs.resize(rhs.coeffs.len(), F::ZERO);
        }
        for (a, &b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a = *a + b * c;
        }
        self.normalize();
    }
}

impl<F: Field> Poly<F> {
    /// Lagrange interpolation: find the unique polynomial of degree < n
    /// passing through the given points.
    ///
    /// Returns `None` if any x-coordinates are duplicated.
    ///
    /// # Example
    ///
    /// ```
    /// use muller::{Fp, Poly};
    ///
    /// type F17 = Fp<17>;
    ///
    /// // Find polynomial passing through (0, 1), (1, 3), (2, 7)
    /// let points = [
    ///     (F17::new(0), F17::new(1)),
    ///     (F17::new(1), F17::new(3)),
    ///     (F17::new(2), F17::new(7)),
    /// ];
    /// let p = Poly::interpolate(&points).unwrap();
    ///
    /// for (x, y) in &points {
    ///     assert_eq!(p.eval(*x), *y);
    /// }
    /// ```
    pub fn interpolate(points: &[(F, F)]) -> Option<Self> {
        let nodes: Vec<F> = points.iter().map(|&(x, _)| x).collect();
        let values: Vec<F> = points.iter().map(|&(_, y)| y).collect();
        Some(LagrangeBasis::new(&nodes)?.interpolate(&values))
    }
}

/// Lagrange basis for a fixed set of distinct nodes `x_0, …, x_{n-1}`.
///
/// `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`, so `L_i(x_j) = [i == j]`.
/// Building the basis costs the inversions once; every later
/// [`LagrangeBasis::interpolate`] call is a linear combination of the
/// basis polynomials.
#[derive(Clone)]
pub struct LagrangeBasis<F> {
    nodes: Vec<F>,
    basis: Vec<Poly<F>>,
}

impl<F: Field> LagrangeBasis<F> {
    /// Build the basis, or `None` if two nodes coincide.
    pub fn new(nodes: &[F]) -> Option<Self> {
        let n = nodes.len();
        let mut basis = Vec::with_capacity(n);

        for (i, &xi) in nodes.iter().enumerate() {
            let others: Vec<F> = nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| xj)
                .collect();
            let denom = others.iter().fold(F::ONE, |acc, &xj| acc * (xi - xj));
            basis.push(Poly::from_roots(&others) * denom.inverse()?);
        }

        Some(Self {
            nodes: nodes.to_vec(),
            basis,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The polynomial of degree `< len()` taking `values[i]` at `nodes[i]`.
    ///
    /// Missing trailing values are treated as zero; extra values are ignored.
    pub fn interpolate(&self, values: &[F]) -> Poly<F> {
        let mut result = Poly::zero();
        for (basis, &y) in self.basis.iter().zip(values) {
            if !y.is_zero() {
                result.add_scaled(basis, y);
            }
        }
        result
    }
}

impl<F: Ring> fmt::Debug for LagrangeBasis<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LagrangeBasis")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

/* ---- Arithmetic operators ---- */

impl<F: Ring> Add for Poly<F> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_scaled(&rhs, F::ONE);
        self
    }
}

impl<F: Ring> Add<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn add(mut self, rhs: &Poly<F>) -> Self::Output {
        self.add_scaled(rhs, F::ONE);
        self
    }
}

impl<F: Ring> Neg for Poly<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let coeffs = self.coeffs.into_iter().map(|c| -c).collect();
        Self { coeffs }
    }
}

impl<F: Ring> Sub for Poly<F> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.add_scaled(&rhs, -F::ONE);
        self
    }
}

impl<F: Ring> Sub<&Poly<F>> for Poly<F> {
    type Output = Self;

    fn sub(mut self, rhs: &Poly<F>) -> Self::Output {
        self.add_scaled(rhs, -F::ONE);
        self
    }
}

impl<F: Ring> Mul for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

impl<F: Ring> Mul<&Poly<F>> for Poly<F> {
    type Output = Self;

    /// Polynomial multiplication using naive O(n*m) convolution.
    fn mul(self, rhs: &Poly<F>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![F::ZERO; n + m - 1];

        for i in 0..n {
            for j in 0..m {
                coeffs[i + j] = coeffs[i + j] + self.coeffs[i] * rhs.coeffs[j];
            }
        }

        Self::new(coeffs)
    }
}

/// Scalar multiplication: polynomial * field element
impl<F: Ring> Mul<F> for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self::Output {
        if rhs.is_zero() {
            return Self::zero();
        }
        let coeffs = self.coeffs.into_iter().map(|c| c * rhs).collect();
        Self::new(coeffs)
    }
}

impl<F: Ring> fmt::Debug for Poly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff.is_one() => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff.is_one() => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

impl<F: Ring> fmt::Display for Poly<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl<F: Ring + serde::Serialize> serde::Serialize for Poly<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: Ring + serde::Deserialize<'de>> serde::Deserialize<'de> for Poly<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<F>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}
