//! Integer arithmetic for settlement.
//!
//! Everything here is exact: unbounded integers, truncating division with
//! an explicit [`Rounding`](crate::domain::Rounding), and a Newton integer
//! square root.  No floating point is used anywhere in the crate.

mod checked;
pub mod quote;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use sqrt::{isqrt, isqrt_amount};
