//! Descriptive metadata of the pair's liquidity token.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Maximum allowed decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places used to display liquidity-token amounts.
///
/// Valid range is `0..=18`.  Decimals never influence settlement math;
/// every computation runs on raw units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts whole units to raw units: `whole × 10^decimals`.
    pub fn scale_up(&self, whole: u64) -> Amount {
        &Amount::from(whole) * &Amount::new(10u128.pow(u32::from(self.0)))
    }
}

impl Default for Decimals {
    fn default() -> Self {
        Self(8)
    }
}

/// Name, symbol and decimals of the liquidity token.
///
/// # Examples
///
/// ```
/// use swap_pair::domain::{Decimals, TokenMetadata};
///
/// let meta = TokenMetadata::new("Pair LP", "PLP", Decimals::new(8).expect("valid"))
///     .expect("valid metadata");
/// assert_eq!(meta.symbol(), "PLP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenMetadata {
    name: String,
    symbol: String,
    decimals: Decimals,
}

impl TokenMetadata {
    /// Creates validated metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the name or symbol is
    /// empty, or the symbol contains whitespace.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> Result<Self, AmmError> {
        let meta = Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Validates name and symbol.
    ///
    /// # Errors
    ///
    /// See [`TokenMetadata::new`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.name.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration("token name cannot be empty"));
        }
        if self.symbol.is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "token symbol cannot be empty",
            ));
        }
        if self.symbol.chars().any(char::is_whitespace) {
            return Err(AmmError::InvalidConfiguration(
                "token symbol cannot contain whitespace",
            ));
        }
        Ok(())
    }

    /// Returns the token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "Swap Pair Liquidity".to_owned(),
            symbol: "SPL".to_owned(),
            decimals: Decimals::default(),
        }
    }
}

impl fmt::Display for TokenMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} decimals)", self.name, self.symbol, self.decimals.0)
    }
}
