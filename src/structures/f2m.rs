//! Binary fields GF(2^K).
//!
//! `Fp` relies on Montgomery arithmetic, which needs an odd modulus, so the
//! characteristic-2 fields get their own representation: an element is a
//! bitmask whose bit `i` is the coefficient of `α^i`, where `α` is a root of
//! the reduction polynomial returned by [`binary_field_poly`].

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;

/// Largest supported extension degree.
pub const MAX_DEGREE: usize = 8;

/// Standard irreducible polynomials for binary fields GF(2^n).
///
/// Returns coefficients as a bitmask where bit i represents x^i, or `None`
/// when no polynomial is tabulated for `n`.
///
/// # Example
///
/// ```
/// use muller::f2m::binary_field_poly;
///
/// // AES field: GF(2^8) with x^8 + x^4 + x^3 + x + 1
/// assert_eq!(binary_field_poly(8), Some(0b100011011));
/// assert_eq!(binary_field_poly(9), None);
/// ```
pub const fn binary_field_poly(n: usize) -> Option<u16> {
    match n {
        1 => Some(0b11),        // x + 1
        2 => Some(0b111),       // x^2 + x + 1
        3 => Some(0b1011),      // x^3 + x + 1
        4 => Some(0b10011),     // x^4 + x + 1
        5 => Some(0b100101),    // x^5 + x^2 + 1
        6 => Some(0b1000011),   // x^6 + x + 1
        7 => Some(0b10000011),  // x^7 + x + 1
        8 => Some(0b100011011), // x^8 + x^4 + x^3 + x + 1 (AES)
        _ => None,
    }
}

/// Element of GF(2^K), `1 <= K <= 8`.
///
/// Canonical element order is the integer value of the bitmask, so
/// `from_index(0)` is zero and `from_index(1)` is one.
///
/// # Example
///
/// ```
/// use muller::{F2m, Ring};
///
/// type F4 = F2m<2>;
///
/// let a = F4::new(0b10); // α
/// assert_eq!(a * a, F4::new(0b11)); // α^2 = α + 1
/// assert_eq!(a + a, F4::ZERO);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct F2m<const K: usize> {
    bits: u8,
}

/// The binary field GF(2), over which binary Reed-Muller codes live.
pub type F2 = F2m<1>;

impl<const K: usize> F2m<K> {
    const POLY: u16 = match binary_field_poly(K) {
        Some(poly) => poly,
        None => 0,
    };

    const MASK: u16 = if K < 16 { (1u16 << K) - 1 } else { 0 };

    /// Create an element from its bitmask; bits at or above `K` are dropped.
    pub fn new(bits: u8) -> Self {
        debug_assert!(
            (1..=MAX_DEGREE).contains(&K),
            "F2m degree K={} outside 1..={}",
            K,
            MAX_DEGREE
        );
        Self {
            bits: (bits as u16 & Self::MASK) as u8,
        }
    }

    /// The bitmask representation.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Carry-less product of two bitmasks, at most `2K - 1` bits wide.
    fn clmul(a: u8, b: u8) -> u16 {
        (0..K).fold(0u16, |acc, i| {
            if (b >> i) & 1 == 1 {
                acc ^ ((a as u16) << i)
            } else {
                acc
            }
        })
    }

    /// Reduce a product modulo the field polynomial, high bits first.
    fn reduce(mut wide: u16) -> u8 {
        for i in (K..2 * K).rev() {
            if (wide >> i) & 1 == 1 {
                wide ^= Self::POLY << (i - K);
            }
        }
        wide as u8
    }

    fn mul_reduce(a: u8, b: u8) -> u8 {
        Self::reduce(Self::clmul(a, b))
    }
}

#[cfg(feature = "rand")]
impl<const K: usize> rand::distributions::Distribution<F2m<K>> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> F2m<K> {
        F2m::new(rng.gen::<u8>())
    }
}

#[cfg(feature = "serde")]
impl<const K: usize> serde::Serialize for F2m<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const K: usize> serde::Deserialize<'de> for F2m<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        if (bits as u16) & !Self::MASK != 0 {
            return Err(serde::de::Error::custom("field element out of range"));
        }
        Ok(Self::new(bits))
    }
}

impl<const K: usize> fmt::Debug for F2m<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F2m<{}>({:#b})", K, self.bits)
    }
}

impl<const K: usize> fmt::Display for F2m<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits)
    }
}

/* ---- arithmetic: addition is XOR, so + and - coincide ---- */

impl<const K: usize> Add for F2m<K> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits ^ rhs.bits,
        }
    }
}

impl<const K: usize> Sub for F2m<K> {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl<const K: usize> Neg for F2m<K> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self
    }
}

impl<const K: usize> Mul for F2m<K> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            bits: Self::mul_reduce(self.bits, rhs.bits),
        }
    }
}

impl<const K: usize> Div for F2m<K> {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse().expect("division by zero in F2m")
    }
}

impl<const K: usize> Ring for F2m<K> {
    const ZERO: Self = Self { bits: 0 };
    const ONE: Self = Self { bits: 1 };
}

impl<const K: usize> Field for F2m<K> {
    /// `a^(2^K - 2)`, since the multiplicative group has order `2^K - 1`.
    fn inverse(self) -> Option<Self> {
        if self.bits == 0 {
            return None;
        }
        Some(self.pow(Self::ORDER - 2))
    }
}

impl<const K: usize> FiniteField for F2m<K> {
    const ORDER: u64 = if K < 64 { 1u64 << K } else { 0 };
    const CHARACTERISTIC: u64 = 2;

    fn validate() -> Result<(), &'static str> {
        if K == 0 || K > MAX_DEGREE {
            return Err("F2m supports extension degrees 1..=8 only");
        }
        Ok(())
    }

    #[inline]
    fn from_index(index: u64) -> Self {
        Self::new((index % Self::ORDER) as u8)
    }

    #[inline]
    fn index(self) -> u64 {
        self.bits as u64
    }
}
