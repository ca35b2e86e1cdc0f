//! Time source for reserve commits.

/// Monotonically non-decreasing timestamp source.
///
/// Used only to stamp [`Reserves`](crate::domain::Reserves) on commit.
pub trait Clock {
    /// Current host time.
    #[must_use]
    fn current_time(&self) -> u64;
}
