#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algebra;
pub mod codes;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::field::{Field, FiniteField};
pub use algebra::ring::Ring;

pub use structures::f2m;
pub use structures::f2m::{F2m, F2};
pub use structures::fp::Fp;
pub use structures::matrix::Matrix;
pub use structures::mpoly::{MPoly, PolyRing};
pub use structures::poly::{LagrangeBasis, Poly};

pub use codes::{
    BinaryReedMullerCode, CodeParameters, Encoder, ReedMullerCode, ReedMullerPolynomialEncoder,
    ReedMullerVectorEncoder, Regime,
};
pub use error::{Error, Result};
pub use utils::{binomial, binomial_sum, gcd, is_prime};
