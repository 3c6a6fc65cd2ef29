//! Error type shared by code construction, encoding and decoding.

use alloc::string::String;

/// Failures reported by the Reed-Muller engine.
///
/// Every operation validates eagerly and either succeeds completely or
/// returns one of these without touching any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The base structure is not a usable finite field.
    #[error("the base field is not a valid finite field: {reason}")]
    InvalidField { reason: &'static str },

    /// `order` or `num_vars` cannot describe a code (e.g. `q^m` overflows).
    #[error("invalid code parameter: {reason}")]
    InvalidParameter { reason: String },

    /// q-ary: `order >= q`. Binary: `order > num_vars`.
    #[error("the order must be {bound}, got {order}")]
    OrderTooLarge { order: usize, bound: String },

    /// A polynomial domain disagrees with the code's variable count or field.
    #[error("the polynomial ring should be over a field of size {field_size} with {expected} variables, got {got} variables")]
    DomainMismatch {
        field_size: u64,
        expected: usize,
        got: usize,
    },

    /// A polynomial to encode does not belong to the encoder's domain.
    #[error("the value to encode must be in a polynomial ring with {expected} variables, got one with {got}")]
    WrongDomain { expected: usize, got: usize },

    /// The polynomial's total degree exceeds the code order.
    #[error("the polynomial to encode must have degree at most {order}, got {degree}")]
    DegreeTooHigh { order: usize, degree: usize },

    /// A message vector does not have `dimension` entries.
    #[error("the message must have length {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A received word does not have `length` entries.
    #[error("the received word must have length {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// The received word is not in the code.
    #[error("the received word is not a codeword")]
    NotACodeword,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
