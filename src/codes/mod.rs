//! Reed-Muller codes and their encoders.
//!
//! A [`ReedMullerCode`] fixes the field, the degree bound and the number of
//! variables. Two encoders turn messages into codewords:
//!
//! - [`ReedMullerVectorEncoder`]: coefficient vectors, multiplied by the
//!   generator matrix.
//! - [`ReedMullerPolynomialEncoder`]: polynomials, evaluated on the grid.
//!
//! Both invert through [`interpolate`].

pub mod grid;
pub mod interpolation;
pub mod monomials;
pub mod parameters;
pub mod polynomial_encoder;
pub mod reed_muller;
pub mod vector_encoder;

use alloc::vec::Vec;

use crate::algebra::field::FiniteField;
use crate::error::{Error, Result};

pub use grid::Grid;
pub use interpolation::interpolate;
pub use monomials::Monomials;
pub use parameters::{CodeParameters, Regime};
pub use polynomial_encoder::ReedMullerPolynomialEncoder;
pub use reed_muller::{BinaryReedMullerCode, ReedMullerCode};
pub use vector_encoder::ReedMullerVectorEncoder;

/// Maps messages to codewords of a [`ReedMullerCode`] and back.
pub trait Encoder<F: FiniteField> {
    type Message: PartialEq;

    /// The code this encoder produces words of.
    fn code(&self) -> &ReedMullerCode<F>;

    /// The codeword of `message`.
    fn encode(&self, message: &Self::Message) -> Result<Vec<F>>;

    /// The message of `word`, assuming without checking that it is a codeword.
    ///
    /// Fails only on a malformed call ([`Error::LengthMismatch`]); a
    /// non-codeword yields an unspecified message.
    fn unencode_nocheck(&self, word: &[F]) -> Result<Self::Message>;

    /// The message of `word`, or [`Error::NotACodeword`] if `word` is not in
    /// the code.
    fn unencode(&self, word: &[F]) -> Result<Self::Message> {
        let message = self.unencode_nocheck(word)?;
        if self.encode(&message)? != word {
            return Err(Error::NotACodeword);
        }
        Ok(message)
    }
}
