//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the pair.
///
/// Settlement always rounds against the counterparty: minted liquidity and
/// burned payouts use [`Rounding::Down`], the input a quote asks for uses
/// [`Rounding::Up`].
///
/// # Examples
///
/// ```
/// use swap_pair::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Truncate (floor for non-negative values).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
