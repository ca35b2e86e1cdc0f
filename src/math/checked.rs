//! Checked arithmetic for [`Amount`].
//!
//! [`Amount`] addition and multiplication cannot overflow, so the fallible
//! cases are subtraction below zero and division by zero.  The
//! [`CheckedArithmetic`] trait turns both into [`AmmError`] values so
//! settlement code can propagate them with `?`.
//!
//! # Examples
//!
//! ```
//! use swap_pair::domain::{Amount, Rounding};
//! use swap_pair::math::CheckedArithmetic;
//!
//! let pro_rata = Amount::new(500).mul_div(&Amount::new(3_000), &Amount::new(1_000), Rounding::Down);
//! assert_eq!(pro_rata, Ok(Amount::new(1_500)));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic on domain amounts.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: underflow is reported, never clamped to zero.
pub trait CheckedArithmetic: Sized {
    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;

    /// Computes `self × numerator / denominator` without intermediate
    /// truncation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    fn mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.checked_div(other, rounding)
            .ok_or(AmmError::DivisionByZero)
    }

    fn mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        (self * numerator).safe_div(denominator, rounding)
    }
}
