//! Integer square root.
//!
//! Feeds directly into minted liquidity amounts, so the result must be
//! bit-exact across implementations: Newton's method over exact truncating
//! integer division, never floating point.
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigInt;
//! use swap_pair::math::isqrt;
//!
//! assert_eq!(isqrt(&BigInt::from(4_000_000)), Ok(BigInt::from(2_000)));
//! assert_eq!(isqrt(&BigInt::from(15)), Ok(BigInt::from(3)));
//! assert!(isqrt(&BigInt::from(-1)).is_err());
//! ```

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::domain::Amount;
use crate::error::AmmError;

/// Returns `floor(√y)`.
///
/// - `y == 0` → `0`
/// - `y ∈ {1, 2, 3}` → `1`
/// - `y > 3` → Newton iteration from `x₀ = y/2 + 1`,
///   `xₙ₊₁ = (y/xₙ + xₙ)/2`, stopping at the first non-decreasing step and
///   returning the last strictly-decreasing value.
///
/// # Errors
///
/// Returns [`AmmError::InvalidArgument`] if `y` is negative.
pub fn isqrt(y: &BigInt) -> Result<BigInt, AmmError> {
    if y.sign() == Sign::Minus {
        return Err(AmmError::InvalidArgument(
            "square root of a negative number",
        ));
    }
    Ok(BigInt::from(newton_floor(y.magnitude())))
}

/// `floor(√y)` for a non-negative [`Amount`].  Infallible.
pub fn isqrt_amount(y: &Amount) -> Amount {
    Amount::from_biguint(newton_floor(y.as_biguint()))
}

fn newton_floor(y: &BigUint) -> BigUint {
    if *y > BigUint::from(3u32) {
        let mut z = y.clone();
        let mut x = y / 2u32 + 1u32;
        while x < z {
            let next = (y / &x + &x) / 2u32;
            z = x;
            x = next;
        }
        z
    } else if y.is_zero() {
        BigUint::zero()
    } else {
        BigUint::one()
    }
}
