//! Map-backed fungible token.

use std::collections::BTreeMap;

use crate::domain::{Address, Amount};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::{FungibleAsset, LiquidityToken};

/// A fungible token whose balances live in a `BTreeMap`.
///
/// Serves both as a reserve asset and as the pair's liquidity token.
/// Movements are refused (the trait methods return `false`) when the
/// sender is short or when failure injection is armed with
/// [`set_failing`](InMemoryToken::set_failing).
///
/// # Examples
///
/// ```
/// use swap_pair::domain::{Address, Amount};
/// use swap_pair::sandbox::InMemoryToken;
/// use swap_pair::traits::FungibleAsset;
///
/// let alice = Address::from_bytes([1; 20]);
/// let bob = Address::from_bytes([2; 20]);
/// let mut token = InMemoryToken::new(Address::from_bytes([9; 20]))
///     .with_balance(alice, Amount::new(100));
/// assert!(token.transfer(&alice, &bob, &Amount::new(40)));
/// assert!(!token.transfer(&alice, &bob, &Amount::new(61)));
/// assert_eq!(token.balance_of(&bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryToken {
    id: Address,
    balances: BTreeMap<Address, Amount>,
    failing: bool,
}

impl InMemoryToken {
    #[must_use]
    pub fn new(id: Address) -> Self {
        Self {
            id,
            balances: BTreeMap::new(),
            failing: false,
        }
    }

    /// Builder form of [`credit`](Self::credit).
    #[must_use]
    pub fn with_balance(mut self, owner: Address, amount: Amount) -> Self {
        self.credit(&owner, &amount);
        self
    }

    /// Adds `amount` to `owner` out of thin air.
    pub fn credit(&mut self, owner: &Address, amount: &Amount) {
        let balance = self.balances.entry(*owner).or_default();
        *balance = &*balance + amount;
    }

    /// Removes `amount` from `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `owner` holds less.
    pub fn debit(&mut self, owner: &Address, amount: &Amount) -> Result<(), AmmError> {
        let remaining = self
            .balance_of(owner)
            .safe_sub(amount)
            .map_err(|_| AmmError::InsufficientBalance)?;
        if remaining.is_zero() {
            self.balances.remove(owner);
        } else {
            self.balances.insert(*owner, remaining);
        }
        Ok(())
    }

    /// Arms or disarms failure injection.  While armed every transfer,
    /// mint and burn is refused.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    #[must_use]
    pub const fn is_failing(&self) -> bool {
        self.failing
    }

    /// Sum of all balances.
    pub fn circulating(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::zero(), |acc, balance| &acc + balance)
    }

    /// Non-zero holders in address order.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }
}

impl FungibleAsset for InMemoryToken {
    fn id(&self) -> Address {
        self.id
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).cloned().unwrap_or_default()
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: &Amount) -> bool {
        if self.failing {
            return false;
        }
        if self.debit(from, amount).is_err() {
            return false;
        }
        self.credit(to, amount);
        true
    }
}

impl LiquidityToken for InMemoryToken {
    fn mint(&mut self, to: &Address, amount: &Amount) -> bool {
        if self.failing {
            return false;
        }
        self.credit(to, amount);
        true
    }

    fn burn(&mut self, from: &Address, amount: &Amount) -> bool {
        !self.failing && self.debit(from, amount).is_ok()
    }
}
