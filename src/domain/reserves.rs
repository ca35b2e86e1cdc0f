//! Snapshot of the pair's tracked reserves.

use core::fmt;

use super::Amount;

/// The pair's self-tracked reserve quantities and the time they were last
/// committed.
///
/// Between operations both reserves equal the pool's actual balance of the
/// corresponding asset.
///
/// # Examples
///
/// ```
/// use swap_pair::domain::{Amount, Reserves};
///
/// let r = Reserves::new(Amount::new(1_000), Amount::new(4_000), 7);
/// assert_eq!(r.product(), Amount::new(4_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    reserve0: Amount,
    reserve1: Amount,
    block_timestamp_last: u64,
}

impl Reserves {
    /// Creates a reserve snapshot.
    pub const fn new(reserve0: Amount, reserve1: Amount, block_timestamp_last: u64) -> Self {
        Self {
            reserve0,
            reserve1,
            block_timestamp_last,
        }
    }

    /// Reserve of asset0.
    pub const fn reserve0(&self) -> &Amount {
        &self.reserve0
    }

    /// Reserve of asset1.
    pub const fn reserve1(&self) -> &Amount {
        &self.reserve1
    }

    /// Timestamp of the last commit.
    #[must_use]
    pub const fn block_timestamp_last(&self) -> u64 {
        self.block_timestamp_last
    }

    /// The invariant `K = reserve0 × reserve1`.
    pub fn product(&self) -> Amount {
        &self.reserve0 * &self.reserve1
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserve0.is_zero() || self.reserve1.is_zero()
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) @ {}",
            self.reserve0, self.reserve1, self.block_timestamp_last
        )
    }
}
