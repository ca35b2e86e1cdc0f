//! Unbounded non-negative token amount.

use core::fmt;
use core::ops::{Add, Mul};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::Rounding;

/// A raw token amount in the smallest unit of its asset.
///
/// Backed by an arbitrary-precision [`BigUint`], so reserve products and the
/// `× 1_000_000` invariant scaling never wrap.  Addition and multiplication
/// (on references) are total; subtraction and division are checked and
/// return `None` on underflow or division by zero.
///
/// # Examples
///
/// ```
/// use swap_pair::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(&a + &b, Amount::new(300));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.checked_sub(&b), None);
/// assert_eq!(Amount::new(10).checked_div(&Amount::new(3), Rounding::Up), Some(Amount::new(4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(BigUint);

impl Amount {
    /// Zero amount.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Creates a new `Amount` from a `u128`.
    pub fn new(value: u128) -> Self {
        Self(BigUint::from(value))
    }

    /// Wraps an existing big integer.
    pub const fn from_biguint(value: BigUint) -> Self {
        Self(value)
    }

    /// Converts a signed value, returning `None` if it is negative.
    #[must_use]
    pub fn from_signed(value: &BigInt) -> Option<Self> {
        match value.sign() {
            Sign::Minus => None,
            _ => value.to_biguint().map(Self),
        }
    }

    /// Returns the underlying big integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns the value as a signed big integer.
    #[must_use]
    pub fn to_signed(&self) -> BigInt {
        BigInt::from(self.0.clone())
    }

    /// Returns the value as `u128` if it fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        self.0.to_u128()
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked subtraction.  Returns `None` if `other > self`.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            None
        } else {
            Some(Self(&self.0 - &other.0))
        }
    }

    /// Multiplication by a small scalar.
    pub fn scale(&self, factor: u32) -> Self {
        Self(&self.0 * BigUint::from(factor))
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: truncating division.
    /// - [`Rounding::Up`]: ceiling division.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0.is_zero() {
            return None;
        }
        let (q, r) = self.0.div_rem(&divisor.0);
        match rounding {
            Rounding::Down => Some(Self(q)),
            Rounding::Up if r.is_zero() => Some(Self(q)),
            Rounding::Up => Some(Self(q + 1u32)),
        }
    }
}

impl Add for &Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl Mul for &Amount {
    type Output = Amount;

    fn mul(self, rhs: Self) -> Amount {
        Amount(&self.0 * &rhs.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
