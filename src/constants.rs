//! Fixed protocol parameters.

/// Liquidity permanently locked at the zero address by the first deposit.
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Scale applied to balances in the fee-adjusted invariant check.
pub const FEE_SCALE: u32 = 1_000;

/// Swap fee charged on the input leg, in units of [`FEE_SCALE`] (0.3%).
pub const SWAP_FEE: u32 = 3;

/// `FEE_SCALE²`: scale of the reserve product in the invariant check.
pub const INVARIANT_SCALE: u32 = FEE_SCALE * FEE_SCALE;

/// Denominator term of the protocol fee: the recipient receives
/// `1 / (PROTOCOL_FEE_DIVISOR + 1)` of the growth in `√K`.
pub const PROTOCOL_FEE_DIVISOR: u32 = 5;
