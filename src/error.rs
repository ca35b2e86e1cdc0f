//! Unified error types for the pair settlement core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is fatal to the operation that raised it:
//! nothing is retried and no partial state is committed.

use thiserror::Error;

/// Every way a pair operation can be rejected.
///
/// Business-rule rejections (e.g. [`InsufficientOutputAmount`]) and
/// collaborator failures (e.g. [`TransferFailed`]) abort identically.
///
/// [`InsufficientOutputAmount`]: AmmError::InsufficientOutputAmount
/// [`TransferFailed`]: AmmError::TransferFailed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A numeric argument was outside the function's domain
    /// (e.g. a negative square-root input).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The caller is not an authorized router.
    #[error("unauthorized caller: {0}")]
    Unauthorized(&'static str),

    /// Swap outputs were both zero or both non-zero.
    #[error("insufficient output amount: exactly one output must be positive")]
    InsufficientOutputAmount,

    /// Requested output would drain a reserve, or a reserve is empty.
    #[error("insufficient liquidity: output must be strictly below the reserve")]
    InsufficientLiquidity,

    /// Swap destination is one of the pair's own asset contracts.
    #[error("invalid destination: cannot send to an asset contract")]
    InvalidDestination,

    /// No input was deposited before the swap.
    #[error("insufficient input amount: no asset was paid in")]
    InsufficientInputAmount,

    /// The fee-adjusted product of balances fell below the previous invariant.
    #[error("invariant violation: fee-adjusted balance product below reserve product")]
    InvariantViolation,

    /// A mint would create zero (or negative) liquidity.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A burn would pay out zero of either asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A collaborator refused a transfer, mint or burn.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A holder tried to move more than it owns.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Checked subtraction would go below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl AmmError {
    /// Returns a stable short code suitable for logs and host fault messages.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InsufficientOutputAmount => "INSUFFICIENT_OUTPUT_AMOUNT",
            Self::InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
            Self::InvalidDestination => "INVALID_TO",
            Self::InsufficientInputAmount => "INSUFFICIENT_INPUT_AMOUNT",
            Self::InvariantViolation => "K",
            Self::InsufficientLiquidityMinted => "INSUFFICIENT_LIQUIDITY_MINTED",
            Self::InsufficientLiquidityBurned => "INSUFFICIENT_LIQUIDITY_BURNED",
            Self::TransferFailed(_) => "TRANSFER_FAILED",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::Underflow(_) => "UNDERFLOW",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
