//! Encoding polynomials by evaluating them on the grid.

use alloc::vec::Vec;
use core::fmt;

use crate::algebra::field::FiniteField;
use crate::codes::grid;
use crate::codes::interpolation::interpolate;
use crate::codes::reed_muller::ReedMullerCode;
use crate::codes::Encoder;
use crate::error::{Error, Result};
use crate::structures::mpoly::{MPoly, PolyRing};

/// Encoder whose messages are polynomials of total degree at most `order`
/// in the code's variables; the codeword is the polynomial's value at each
/// grid point.
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
/// let encoder = code.polynomial_encoder();
/// let ring = encoder.polynomial_ring();
/// let (x0, x1) = (ring.gen(0).unwrap(), ring.gen(1).unwrap());
///
/// let p = ring.one() + x0.clone() + x1.clone() + x1.clone() * &x1 + x0 * &x1;
/// let word = encoder.encode(&p).unwrap();
/// assert_eq!(
///     word.iter().map(|x| x.value()).collect::<Vec<_>>(),
///     [1, 2, 0, 0, 2, 1, 1, 1, 1]
/// );
/// assert_eq!(encoder.unencode_nocheck(&word).unwrap(), p);
/// ```
#[derive(Clone)]
pub struct ReedMullerPolynomialEncoder<F> {
    code: ReedMullerCode<F>,
    ring: PolyRing<F>,
}

impl<F: FiniteField> ReedMullerPolynomialEncoder<F> {
    /// Encoder over the default ring with variables `x0, …, x{m-1}`.
    pub fn new(code: ReedMullerCode<F>) -> Self {
        let ring = PolyRing::new(code.number_of_variables());
        Self { code, ring }
    }

    /// Encoder over a caller-supplied ring.
    ///
    /// Fails with [`Error::DomainMismatch`] if the ring does not have the
    /// code's number of variables.
    pub fn with_ring(code: ReedMullerCode<F>, ring: PolyRing<F>) -> Result<Self> {
        if ring.num_vars() != code.number_of_variables() {
            return Err(Error::DomainMismatch {
                field_size: F::ORDER,
                expected: code.number_of_variables(),
                got: ring.num_vars(),
            });
        }
        Ok(Self { code, ring })
    }

    /// The ring messages are taken from.
    pub fn message_space(&self) -> &PolyRing<F> {
        &self.ring
    }

    pub fn polynomial_ring(&self) -> &PolyRing<F> {
        &self.ring
    }

    /// A random message: every basis monomial gets a uniform coefficient.
    #[cfg(feature = "rand")]
    pub fn random_message<R>(&self, rng: &mut R) -> MPoly<F>
    where
        R: rand::Rng + ?Sized,
        rand::distributions::Standard: rand::distributions::Distribution<F>,
    {
        let num_vars = self.code.number_of_variables();
        MPoly::from_terms(
            num_vars,
            self.code
                .monomials()
                .map(|exponents| (exponents, rng.gen::<F>())),
        )
    }
}

impl<F: FiniteField> Encoder<F> for ReedMullerPolynomialEncoder<F> {
    type Message = MPoly<F>;

    fn code(&self) -> &ReedMullerCode<F> {
        &self.code
    }

    /// Values of `p` on the grid.
    ///
    /// Only the total degree is checked, so in the binary regime `p` may
    /// carry a variable squared. Since `x^2 = x` on GF(2), decoding then
    /// returns the reduced polynomial with every such exponent lowered to 1:
    /// `x0^2` encodes like `x0` and decodes as `x0`.
    ///
    /// # Errors
    ///
    /// - [`Error::WrongDomain`] if `p` is not in [`Self::polynomial_ring`].
    /// - [`Error::DegreeTooHigh`] if `p` has total degree above `order`.
    fn encode(&self, p: &MPoly<F>) -> Result<Vec<F>> {
        if !self.ring.contains(p) {
            return Err(Error::WrongDomain {
                expected: self.ring.num_vars(),
                got: p.num_vars(),
            });
        }
        if let Some(degree) = p.total_degree().filter(|&d| d > self.code.order()) {
            return Err(Error::DegreeTooHigh {
                order: self.code.order(),
                degree,
            });
        }
        Ok(grid::evaluate(p, self.code.number_of_variables()))
    }

    /// Interpolate `word` without checking that it is a codeword.
    ///
    /// For a non-codeword the result is deterministic but otherwise
    /// unspecified.
    fn unencode_nocheck(&self, word: &[F]) -> Result<MPoly<F>> {
        interpolate(word, self.code.number_of_variables(), self.code.order())
    }
}

impl<F> PartialEq for ReedMullerPolynomialEncoder<F> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<F> Eq for ReedMullerPolynomialEncoder<F> {}

impl<F: FiniteField> fmt::Debug for ReedMullerPolynomialEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReedMullerPolynomialEncoder")
            .field("code", &self.code)
            .field("ring", &self.ring)
            .finish()
    }
}

impl<F: FiniteField> fmt::Display for ReedMullerPolynomialEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluation polynomial-style encoder for {}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::ring::Ring;
    use crate::codes::reed_muller::BinaryReedMullerCode;
    use crate::structures::fp::Fp;
    use alloc::string::ToString;
    use alloc::vec;

    type F3 = Fp<3>;

    fn f3(values: &[u64]) -> Vec<F3> {
        values.iter().map(|&v| F3::new(v)).collect()
    }

    fn encoder() -> ReedMullerPolynomialEncoder<F3> {
        ReedMullerCode::<F3>::new(2, 2).unwrap().polynomial_encoder()
    }

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
    fn encode_scenario() {
        assert_eq!(
            encoder().encode(&sample()).unwrap(),
            f3(&[1, 2, 0, 0, 2, 1, 1, 1, 1])
        );
    }

    #[test]
    fn decode_scenario() {
        let p = encoder()
            .unencode_nocheck(&f3(&[1, 2, 0, 0, 2, 1, 1, 1, 1]))
            .unwrap();
        assert_eq!(p, sample());
        assert_eq!(p.to_string(), "x0*x1 + x1^2 + x0 + x1 + 1");
    }

    #[test]
    fn decode_non_codeword() {
        let e = encoder();
        let bad = f3(&[1, 2, 0, 0, 2, 1, 0, 1, 1]);
        let p = e.unencode_nocheck(&bad).unwrap();
        assert_eq!(p.to_string(), "2*x0*x1 + 2*x1^2 + x0 + 1");
        assert_ne!(e.encode(&p).unwrap(), bad);
        assert_eq!(e.unencode(&bad), Err(Error::NotACodeword));
    }

    #[test]
    fn degree_too_high() {
        let x1 = MPoly::<F3>::var(2, 1).unwrap();
        let p = x1.clone() * &x1 * &x1;
        assert_eq!(
            encoder().encode(&p),
            Err(Error::DegreeTooHigh {
                order: 2,
                degree: 3
            })
        );
    }

    #[test]
    fn binary_round_trip_reduces_squares() {
        use crate::structures::f2m::F2;

        let e = BinaryReedMullerCode::new(2, 4).unwrap().polynomial_encoder();
        let ring = e.polynomial_ring();
        let x: Vec<MPoly<F2>> = ring.gens();
        let p = x[0].clone() * &x[0] + x[1].clone() * &x[2];
        let reduced = x[0].clone() + x[1].clone() * &x[2];

        let word = e.encode(&p).unwrap();
        assert_eq!(word, e.encode(&reduced).unwrap());
        assert_eq!(e.unencode(&word).unwrap(), reduced);
        assert_ne!(e.unencode(&word).unwrap(), p);
    }

    #[test]
    fn wrong_domain() {
        let p = MPoly::<F3>::var(3, 0).unwrap();
        assert_eq!(
            encoder().encode(&p),
            Err(Error::WrongDomain {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn zero_polynomial_encodes_to_zero() {
        assert_eq!(encoder().encode(&MPoly::zero(2)).unwrap(), vec![F3::ZERO; 9]);
    }

    #[test]
    fn custom_ring() {
        let code = ReedMullerCode::<F3>::new(2, 2).unwrap();
        let e = ReedMullerPolynomialEncoder::with_ring(code, PolyRing::with_names(["y", "z"]))
            .unwrap();
        assert_eq!(e.polynomial_ring().names(), ["y", "z"]);
        assert_eq!(e.message_space(), e.polynomial_ring());
        assert_eq!(e, encoder());

        assert_eq!(
            ReedMullerPolynomialEncoder::with_ring(code, PolyRing::new(3)).unwrap_err(),
            Error::DomainMismatch {
                field_size: 3,
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn display_and_message_space() {
        let e = BinaryReedMullerCode::new(2, 4).unwrap().polynomial_encoder();
        assert_eq!(
            e.to_string(),
            "Evaluation polynomial-style encoder for Binary Reed Muller Code of order 2 and number of variables 4"
        );
        assert_eq!(
            e.message_space().to_string(),
            "Multivariate Polynomial Ring in x0, x1, x2, x3 over Finite Field of size 2"
        );
    }

    #[test]
    fn wrong_word_length() {
        assert_eq!(
            encoder().unencode_nocheck(&f3(&[1, 2, 0])),
            Err(Error::LengthMismatch {
                expected: 9,
                got: 3
            })
        );
    }
}
