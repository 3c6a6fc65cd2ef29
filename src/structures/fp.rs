use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::utils::is_prime;

/// `-P^(-1) mod 2^64` by Newton iteration; each step doubles the correct bits.
const fn compute_p_inv(p: u64) -> u64 {
    let mut x: u64 = 1;
    let mut i = 0;
    while i < 6 {
        x = x.wrapping_mul(2u64.wrapping_sub(p.wrapping_mul(x)));
        i += 1;
    }
    x.wrapping_neg()
}

/// `2^64 mod P`.
const fn compute_r_mod_p(p: u64) -> u64 {
    ((1u128 << 64) % (p as u128)) as u64
}

/// `2^128 mod P`.
const fn compute_r2_mod_p(p: u64) -> u64 {
    let r = (1u128 << 64) % (p as u128);
    ((r * r) % (p as u128)) as u64
}

/// Montgomery constants for a given prime P.
struct MontgomeryParams<const P: u64>;

impl<const P: u64> MontgomeryParams<P> {
    const P_INV: u64 = compute_p_inv(P);
    const R: u64 = compute_r_mod_p(P);
    const R2: u64 = compute_r2_mod_p(P);
}

/// Montgomery reduction: given T < P * R, compute T * R^(-1) mod P.
#[inline]
const fn montgomery_reduce<const P: u64>(t: u128) -> u64 {
    let m = (t as u64).wrapping_mul(MontgomeryParams::<P>::P_INV);
    let t = ((t + (m as u128) * (P as u128)) >> 64) as u64;
    if t >= P {
        t - P
    } else {
        t
    }
}

#[inline]
const fn to_montgomery<const P: u64>(a: u64) -> u64 {
    montgomery_reduce::<P>((a as u128) * (MontgomeryParams::<P>::R2 as u128))
}

#[inline]
const fn from_montgomery<const P: u64>(a_mont: u64) -> u64 {
    montgomery_reduce::<P>(a_mont as u128)
}

/// Prime field GF(p) where `p` is an odd `u64`-sized prime.
///
/// Internally uses Montgomery representation for efficient multiplication.
/// `Fp<P>` type-checks for any `P`, so code over it calls
/// [`FiniteField::validate`] before use; a composite or even `P` is
/// rejected there rather than producing garbage arithmetic.
///
/// Canonical element order is `0, 1, …, P - 1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fp<const P: u64> {
    /// Value stored in Montgomery form: value = aR mod P
    mont: u64,
}

#[cfg(feature = "rand")]
impl<const P: u64> rand::distributions::Distribution<Fp<P>> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Fp<P> {
        Fp::new(rng.gen_range(0..P))
    }
}

#[cfg(feature = "serde")]
impl<const P: u64> serde::Serialize for Fp<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const P: u64> serde::Deserialize<'de> for Fp<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        if value >= P {
            return Err(serde::de::Error::custom("field element out of range"));
        }
        Ok(Self::new(value))
    }
}

impl<const P: u64> Fp<P> {
    /// Create a new field element from a standard integer, reduced mod `P`.
    ///
    /// In debug builds, this asserts that `P` is an odd prime.
    ///
    /// # Example
    ///
    /// ```
    /// use muller::Fp;
    ///
    /// type F17 = Fp<17>;
    /// assert_eq!(F17::new(20).value(), 3);
    /// ```
    pub fn new(value: u64) -> Self {
        debug_assert!(is_prime(P), "Fp modulus P={} is not prime", P);
        debug_assert!(P % 2 == 1, "Fp modulus P={} must be odd for Montgomery", P);
        Self {
            mont: to_montgomery::<P>(value % P),
        }
    }

    #[inline]
    const fn from_mont(mont: u64) -> Self {
        Self { mont }
    }

    /// Get the representative in `[0, P-1]`.
    pub const fn value(self) -> u64 {
        from_montgomery::<P>(self.mont)
    }

    /// Validate that the modulus `P` is a valid odd prime.
    ///
    /// # Example
    ///
    /// ```
    /// use muller::Fp;
    ///
    /// assert!(Fp::<17>::validate_prime().is_ok());
    /// assert!(Fp::<15>::validate_prime().is_err());
    /// assert!(Fp::<2>::validate_prime().is_err());
    /// ```
    pub const fn validate_prime() -> Result<(), &'static str> {
        if P == 2 {
            return Err("modulus P=2 is not supported by Fp (use F2)");
        }
        if !is_prime(P) {
            return Err("modulus P is not prime");
        }
        Ok(())
    }
}

impl<const P: u64> fmt::Debug for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp<{}>({})", P, self.value())
    }
}

impl<const P: u64> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<const P: u64> From<u64> for Fp<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<Fp<P>> for u64 {
    fn from(fp: Fp<P>) -> Self {
        fp.value()
    }
}

/* ---- standard arithmetic operators ---- */

impl<const P: u64> Add for Fp<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.mont + rhs.mont;
        if sum >= P {
            sum -= P;
        }
        Self::from_mont(sum)
    }
}

impl<const P: u64> Sub for Fp<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        if self.mont >= rhs.mont {
            Self::from_mont(self.mont - rhs.mont)
        } else {
            Self::from_mont(self.mont + P - rhs.mont)
        }
    }
}

impl<const P: u64> Mul for Fp<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        // (aR) * (bR) = abR^2, then reduce to get abR
        let prod = (self.mont as u128) * (rhs.mont as u128);
        Self::from_mont(montgomery_reduce::<P>(prod))
    }
}

impl<const P: u64> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.mont == 0 {
            self
        } else {
            Self::from_mont(P - self.mont)
        }
    }
}

/// Division implemented via multiplicative inverse.
impl<const P: u64> Div for Fp<P> {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse().expect("division by zero in Fp")
    }
}

impl<const P: u64> Ring for Fp<P> {
    // 0 in Montgomery form is still 0
    const ZERO: Self = Self { mont: 0 };
    const ONE: Self = Self {
        mont: MontgomeryParams::<P>::R,
    };
}

impl<const P: u64> Field for Fp<P> {
    fn inverse(self) -> Option<Self> {
        if self.mont == 0 {
            return None;
        }

        let (g, x, _) = egcd(self.value() as i128, P as i128);
        if g != 1 {
            return None;
        }
        Some(Self::new(x.rem_euclid(P as i128) as u64))
    }
}

impl<const P: u64> FiniteField for Fp<P> {
    const ORDER: u64 = P;
    const CHARACTERISTIC: u64 = P;

    fn validate() -> Result<(), &'static str> {
        Self::validate_prime()
    }

    #[inline]
    fn from_index(index: u64) -> Self {
        Self::new(index)
    }

    #[inline]
    fn index(self) -> u64 {
        self.value()
    }

    #[inline]
    fn next(self) -> Option<Self> {
        (self.value() + 1 < P).then(|| self + Self::ONE)
    }
}

/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a*x + b*y = g`.
fn egcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x1, y1) = egcd(b, a % b);
        (g, y1, x1 - (a / b) * y1)
    }
}
