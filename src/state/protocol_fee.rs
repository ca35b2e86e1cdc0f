//! Optional protocol fee skim.
//!
//! When a fee recipient is configured the pair records `kLast`, the reserve
//! product after the last fee-affecting mint or burn.  On the next mint or
//! burn the growth of `√K` since then is measured and the recipient receives
//! new liquidity:
//!
//! ```text
//! liquidity = √(totalSupply · (√K − √kLast)) / (5·√K + √kLast)
//! ```
//!
//! Every root is a floor.  With a supply close to `√K` the result truncates
//! to zero unless `√K` grew by a large multiple.
//!
//! Swaps never touch this account.

use crate::constants::PROTOCOL_FEE_DIVISOR;
use crate::domain::{Address, Amount, Reserves, Rounding};
use crate::error::AmmError;
use crate::math::{isqrt_amount, CheckedArithmetic};
use crate::traits::LiquidityToken;

use super::LiquiditySupplyLedger;

/// Holds `kLast`; zero means "not recorded".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProtocolFeeAccount {
    k_last: Amount,
}

impl ProtocolFeeAccount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_k_last(k_last: Amount) -> Self {
        Self { k_last }
    }

    /// Reserve product recorded at the last fee-affecting mint or burn.
    #[must_use]
    pub const fn k_last(&self) -> &Amount {
        &self.k_last
    }

    /// Liquidity owed to the fee recipient for growth from `kLast` to the
    /// product of `reserves`.  Zero when nothing is owed.
    ///
    /// # Errors
    ///
    /// Propagates checked-arithmetic failures; none occur for a non-zero
    /// `kLast`.
    pub fn accrued(
        &self,
        reserves: &Reserves,
        total_supply: &Amount,
    ) -> Result<Amount, AmmError> {
        if self.k_last.is_zero() {
            return Ok(Amount::zero());
        }
        let root_k = isqrt_amount(&reserves.product());
        let root_k_last = isqrt_amount(&self.k_last);
        if root_k <= root_k_last {
            return Ok(Amount::zero());
        }
        let numerator = isqrt_amount(&(total_supply * &root_k.safe_sub(&root_k_last)?));
        let denominator = &root_k.scale(PROTOCOL_FEE_DIVISOR) + &root_k_last;
        numerator.safe_div(&denominator, Rounding::Down)
    }

    /// Runs the skim against the pre-update `reserves` and reports whether
    /// fees are on.
    ///
    /// With no recipient a recorded `kLast` is cleared.  With a recipient,
    /// any accrued liquidity is minted to it through `supply`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the liquidity token refuses
    /// the fee mint.
    pub fn mint_fee(
        &mut self,
        fee_to: Option<Address>,
        reserves: &Reserves,
        supply: &mut LiquiditySupplyLedger,
        token: &mut dyn LiquidityToken,
    ) -> Result<bool, AmmError> {
        let Some(fee_to) = fee_to else {
            if !self.k_last.is_zero() {
                self.k_last = Amount::zero();
            }
            return Ok(false);
        };
        let liquidity = self.accrued(reserves, supply.total_supply())?;
        if !liquidity.is_zero() {
            tracing::debug!(%fee_to, %liquidity, "minting protocol fee");
            supply.mint(token, &fee_to, &liquidity)?;
        }
        Ok(true)
    }

    /// Records `kLast` from the post-update reserves.
    pub fn record(&mut self, reserves: &Reserves) {
        self.k_last = reserves.product();
    }
}
