//! Total outstanding liquidity-token supply.

use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::LiquidityToken;

/// Tracks total supply and keeps it equal to the sum of holder balances.
///
/// Holder balances live in the [`LiquidityToken`]; every supply change made
/// here is paired with exactly one `mint` or `burn` call on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LiquiditySupplyLedger {
    total_supply: Amount,
}

impl LiquiditySupplyLedger {
    /// A ledger with zero supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a ledger from a persisted total.
    #[must_use]
    pub const fn from_total_supply(total_supply: Amount) -> Self {
        Self { total_supply }
    }

    /// Total outstanding liquidity units.
    #[must_use]
    pub const fn total_supply(&self) -> &Amount {
        &self.total_supply
    }

    /// Mints `amount` to `to` and raises the total supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the token refuses the mint.
    pub fn mint(
        &mut self,
        token: &mut dyn LiquidityToken,
        to: &Address,
        amount: &Amount,
    ) -> Result<(), AmmError> {
        if !token.mint(to, amount) {
            return Err(AmmError::TransferFailed("liquidity token mint"));
        }
        self.total_supply = &self.total_supply + amount;
        Ok(())
    }

    /// Burns `amount` held by `from` and lowers the total supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if `amount` exceeds the total supply.
    /// - [`AmmError::TransferFailed`] if the token refuses the burn.
    pub fn burn(
        &mut self,
        token: &mut dyn LiquidityToken,
        from: &Address,
        amount: &Amount,
    ) -> Result<(), AmmError> {
        let remaining = self.total_supply.safe_sub(amount)?;
        if !token.burn(from, amount) {
            return Err(AmmError::TransferFailed("liquidity token burn"));
        }
        self.total_supply = remaining;
        Ok(())
    }
}
