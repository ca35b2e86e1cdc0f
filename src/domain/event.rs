//! Domain events raised by committed pair operations.

use core::fmt;

use super::{Address, Amount};

/// A structured notification emitted after a successful state transition.
///
/// Events are fire-and-forget: the core never reads them back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Reserves were overwritten with the pool's actual balances.
    Synced {
        /// New reserve of asset0.
        reserve0: Amount,
        /// New reserve of asset1.
        reserve1: Amount,
    },
    /// Liquidity was added.
    Minted {
        /// The caller that invoked mint.
        sender: Address,
        /// Asset0 deposited since the previous commit.
        amount0: Amount,
        /// Asset1 deposited since the previous commit.
        amount1: Amount,
    },
    /// Liquidity was removed.
    Burned {
        /// The caller that invoked burn.
        sender: Address,
        /// Asset0 paid out.
        amount0: Amount,
        /// Asset1 paid out.
        amount1: Amount,
        /// Recipient of the payout.
        to: Address,
    },
    /// Assets were exchanged.
    Swapped {
        /// The caller that invoked swap.
        sender: Address,
        /// Asset0 paid in.
        amount0_in: Amount,
        /// Asset1 paid in.
        amount1_in: Amount,
        /// Asset0 paid out.
        amount0_out: Amount,
        /// Asset1 paid out.
        amount1_out: Amount,
        /// Recipient of the output.
        to: Address,
    },
}

impl PoolEvent {
    /// The event's name as surfaced to hosts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Synced { .. } => "Synced",
            Self::Minted { .. } => "Minted",
            Self::Burned { .. } => "Burned",
            Self::Swapped { .. } => "Swapped",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synced { reserve0, reserve1 } => write!(f, "Synced({reserve0}, {reserve1})"),
            Self::Minted {
                sender,
                amount0,
                amount1,
            } => write!(f, "Minted({sender}, {amount0}, {amount1})"),
            Self::Burned {
                sender,
                amount0,
                amount1,
                to,
            } => write!(f, "Burned({sender}, {amount0}, {amount1}, {to})"),
            Self::Swapped {
                sender,
                amount0_in,
                amount1_in,
                amount0_out,
                amount1_out,
                to,
            } => write!(
                f,
                "Swapped({sender}, {amount0_in}, {amount1_in}, {amount0_out}, {amount1_out}, {to})"
            ),
        }
    }
}
