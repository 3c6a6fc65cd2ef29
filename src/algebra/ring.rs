use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity ZERO
/// - (R, ·) is a commutative monoid with identity ONE
/// - multiplication distributes over addition.
pub trait Ring:
    Sized
    + Copy
    + Eq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// `self^exp` by square-and-multiply. `x^0 = 1` for every `x`, including zero.
    fn pow(self, exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::ONE;
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }
}
