//! Caller gate for settlement operations.

use crate::domain::Address;

/// Answers whether a caller belongs to the whitelisted router class.
///
/// Consulted only when the pair runs with
/// [`RouterPolicy::RouterOnly`](crate::config::RouterPolicy).
pub trait AuthorizationCheck {
    /// Returns `true` if `caller` may invoke mint, burn and swap.
    #[must_use]
    fn is_authorized_router(&self, caller: &Address) -> bool;
}

impl<F> AuthorizationCheck for F
where
    F: Fn(&Address) -> bool,
{
    fn is_authorized_router(&self, caller: &Address) -> bool {
        self(caller)
    }
}
