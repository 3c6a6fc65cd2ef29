//! Encoding message vectors through the generator matrix.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use once_cell::race::OnceBox;

use crate::algebra::field::FiniteField;
use crate::codes::grid::{eval_monomial, Grid};
use crate::codes::interpolation::interpolate;
use crate::codes::reed_muller::ReedMullerCode;
use crate::codes::Encoder;
use crate::error::{Error, Result};
use crate::structures::matrix::Matrix;

/// Encoder mapping a length-`dimension` vector `v` to `v · G`, where row
/// `i` of the generator matrix `G` holds the values of the `i`-th basis
/// monomial on the grid.
///
/// `G` is built on first use and shared by every later call on the same
/// encoder.
///
/// # Example
///
/// ```
/// use muller::codes::{Encoder, ReedMullerCode};
/// use muller::Fp;
///
/// type F3 = Fp<3>;
///
/// let code = ReedMullerCode::<F3>::new(2, 2).unwrap();
/// let encoder = code.vector_encoder();
/// assert_eq!(encoder.generator_matrix().nrows(), 6);
///
/// let message = vec![F3::new(1), F3::new(0), F3::new(0), F3::new(0), F3::new(0), F3::new(2)];
/// let word = encoder.encode(&message).unwrap();
/// assert_eq!(encoder.unencode(&word).unwrap(), message);
/// ```
pub struct ReedMullerVectorEncoder<F> {
    code: ReedMullerCode<F>,
    generator: OnceBox<Matrix<F>>,
}

impl<F: FiniteField> ReedMullerVectorEncoder<F> {
    pub fn new(code: ReedMullerCode<F>) -> Self {
        Self {
            code,
            generator: OnceBox::new(),
        }
    }

    /// The `dimension × length` generator matrix.
    ///
    /// Computed once per encoder; every call returns the same matrix. If two
    /// threads race on the first call, both may compute it but only one
    /// result is kept.
    pub fn generator_matrix(&self) -> &Matrix<F> {
        self.generator
            .get_or_init(|| Box::new(generator_matrix(&self.code)))
    }

    /// A uniformly random message vector.
    #[cfg(feature = "rand")]
    pub fn random_message<R>(&self, rng: &mut R) -> Vec<F>
    where
        R: rand::Rng + ?Sized,
        rand::distributions::Standard: rand::distributions::Distribution<F>,
    {
        (0..self.code.dimension()).map(|_| rng.gen()).collect()
    }
}

/// Row `i` holds the values of the `i`-th basis monomial at every grid point.
fn generator_matrix<F: FiniteField>(code: &ReedMullerCode<F>) -> Matrix<F> {
    debug!(
        "building {} x {} generator matrix for {}",
        code.dimension(),
        code.length(),
        code
    );
    let points: Vec<Vec<F>> = Grid::new(code.number_of_variables()).collect();
    let entries = code.monomials().flat_map(|exponents| {
        points
            .iter()
            .map(move |point| eval_monomial(&exponents, point))
            .collect::<Vec<F>>()
    });
    Matrix::init(code.dimension(), code.length(), entries)
}

impl<F: FiniteField> Encoder<F> for ReedMullerVectorEncoder<F> {
    type Message = Vec<F>;

    fn code(&self) -> &ReedMullerCode<F> {
        &self.code
    }

    /// `message · G`.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `message` has
    /// `dimension` entries.
    fn encode(&self, message: &Vec<F>) -> Result<Vec<F>> {
        if message.len() != self.code.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.code.dimension(),
                got: message.len(),
            });
        }
        self.generator_matrix().vec_mul(message)
    }

    /// Coefficients of the interpolated polynomial, read in basis order.
    fn unencode_nocheck(&self, word: &[F]) -> Result<Vec<F>> {
        let p = interpolate(word, self.code.number_of_variables(), self.code.order())?;
        Ok(self
            .code
            .monomials()
            .map(|exponents| p.coeff(&exponents))
            .collect())
    }
}

impl<F: FiniteField> Clone for ReedMullerVectorEncoder<F> {
    fn clone(&self) -> Self {
        let clone = Self::new(self.code);
        if let Some(matrix) = self.generator.get() {
            // the fresh cell is empty, so this cannot fail
            let _ = clone.generator.set(Box::new(matrix.clone()));
        }
        clone
    }
}

impl<F> PartialEq for ReedMullerVectorEncoder<F> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<F> Eq for ReedMullerVectorEncoder<F> {}

impl<F: FiniteField> fmt::Debug for ReedMullerVectorEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReedMullerVectorEncoder")
            .field("code", &self.code)
            .field("cached", &self.generator.get().is_some())
            .finish()
    }
}

impl<F: FiniteField> fmt::Display for ReedMullerVectorEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluation vector-style encoder for {}", self.code)
    }
}
