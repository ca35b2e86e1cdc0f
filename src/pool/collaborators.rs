//! The host-provided services an engine operation runs against.

use crate::config::PairConfig;
use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::traits::{AuthorizationCheck, Clock, EventSink, FungibleAsset, LiquidityToken};

/// Borrowed collaborators for a single engine call.
///
/// The engine holds none of these between calls; the host wires them up
/// for each transaction.  `asset0`/`asset1` must be the configured assets
/// in canonical order and `liquidity` must be the pair's own token,
/// identified by the pool address.
pub struct Collaborators<'a> {
    pub asset0: &'a mut dyn FungibleAsset,
    pub asset1: &'a mut dyn FungibleAsset,
    pub liquidity: &'a mut dyn LiquidityToken,
    pub authorization: &'a dyn AuthorizationCheck,
    pub clock: &'a dyn Clock,
    pub events: &'a mut dyn EventSink,
}

impl Collaborators<'_> {
    /// Checks the wiring against `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if a token collaborator
    /// does not carry the identity the configuration expects.
    pub fn check_wiring(&self, config: &PairConfig) -> Result<(), AmmError> {
        if self.asset0.id() != config.assets().asset0() {
            return Err(AmmError::InvalidConfiguration(
                "asset0 collaborator does not match the configured asset",
            ));
        }
        if self.asset1.id() != config.assets().asset1() {
            return Err(AmmError::InvalidConfiguration(
                "asset1 collaborator does not match the configured asset",
            ));
        }
        if self.liquidity.id() != config.pool() {
            return Err(AmmError::InvalidConfiguration(
                "liquidity token is not the pool's own token",
            ));
        }
        Ok(())
    }

    /// Balances of both reserve assets held by `owner`.
    pub(crate) fn balances_of(&self, owner: &Address) -> (Amount, Amount) {
        (self.asset0.balance_of(owner), self.asset1.balance_of(owner))
    }
}

/// Moves `amount` of `asset` and turns a refusal into
/// [`AmmError::TransferFailed`].
pub(crate) fn transfer_out(
    asset: &mut dyn FungibleAsset,
    from: &Address,
    to: &Address,
    amount: &Amount,
    what: &'static str,
) -> Result<(), AmmError> {
    if asset.transfer(from, to, amount) {
        Ok(())
    } else {
        Err(AmmError::TransferFailed(what))
    }
}
