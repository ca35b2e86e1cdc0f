//! Ordered pair of distinct reserve assets.

use super::Address;
use crate::error::AmmError;

/// The two asset contracts a pair holds, canonically sorted by address.
///
/// `asset0` is always the lower address, so `(A, B)` and `(B, A)` describe
/// the same pair and `reserve0` always refers to the same asset.
///
/// # Examples
///
/// ```
/// use swap_pair::domain::{Address, AssetPair};
///
/// let a = Address::from_bytes([1u8; 20]);
/// let b = Address::from_bytes([2u8; 20]);
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset0: Address,
    asset1: Address,
}

impl AssetPair {
    /// Creates a canonically-ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both addresses are equal
    /// or either is the zero address.
    pub fn new(first: Address, second: Address) -> Result<Self, AmmError> {
        if first == second {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct addresses",
            ));
        }
        if first.is_zero() || second.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "asset address cannot be zero",
            ));
        }
        let (asset0, asset1) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { asset0, asset1 })
    }

    /// Returns the lower-address asset.
    #[must_use]
    pub const fn asset0(&self) -> Address {
        self.asset0
    }

    /// Returns the higher-address asset.
    #[must_use]
    pub const fn asset1(&self) -> Address {
        self.asset1
    }

    /// Returns `true` if `address` is one of the two assets.
    #[must_use]
    pub fn contains(&self, address: &Address) -> bool {
        self.asset0 == *address || self.asset1 == *address
    }
}
