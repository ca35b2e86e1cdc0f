//! Pricing helpers for callers preparing a swap.
//!
//! The pair itself never prices a trade: it only checks that the
//! fee-adjusted invariant holds afterwards.  These helpers compute the
//! amounts that make that check pass, with the fee taken from the input:
//!
//! ```text
//! amount_out = amount_in·997·reserve_out / (reserve_in·1000 + amount_in·997)   (floor)
//! amount_in  = reserve_in·amount_out·1000 / ((reserve_out − amount_out)·997) + 1
//! ```

use crate::constants::{FEE_SCALE, SWAP_FEE};
use crate::domain::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Output obtainable for an exact `amount_in`.
///
/// Rounds down, so the resulting swap always satisfies the invariant check.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use swap_pair::domain::Amount;
/// use swap_pair::math::quote;
///
/// let out = quote::amount_out(&Amount::new(100), &Amount::new(1_000), &Amount::new(1_000));
/// assert_eq!(out, Ok(Amount::new(90)));
/// ```
pub fn amount_out(
    amount_in: &Amount,
    reserve_in: &Amount,
    reserve_out: &Amount,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let amount_in_with_fee = amount_in.scale(FEE_SCALE - SWAP_FEE);
    let numerator = &amount_in_with_fee * reserve_out;
    let denominator = &reserve_in.scale(FEE_SCALE) + &amount_in_with_fee;
    numerator.safe_div(&denominator, Rounding::Down)
}

/// Input required to receive an exact `amount_out`.
///
/// Rounds up (plus one unit), so the resulting swap always satisfies the
/// invariant check.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
pub fn amount_in(
    amount_out: &Amount,
    reserve_in: &Amount,
    reserve_out: &Amount,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let numerator = (reserve_in * amount_out).scale(FEE_SCALE);
    let remaining = reserve_out.safe_sub(amount_out)?;
    let denominator = remaining.scale(FEE_SCALE - SWAP_FEE);
    let quotient = numerator.safe_div(&denominator, Rounding::Down)?;
    Ok(&quotient + &Amount::new(1))
}
