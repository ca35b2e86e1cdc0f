//! Interfaces of the collaborators the settlement core calls into.
//!
//! The pair owns only its ledgers; assets, caller authorization, time and
//! event delivery are provided by the host through these traits:
//!
//! | Trait | Role |
//! |-------|------|
//! | [`FungibleAsset`] | balance query and transfer for each reserve asset |
//! | [`LiquidityToken`] | holder balances of the claim token, plus mint/burn |
//! | [`AuthorizationCheck`] | router whitelist |
//! | [`Clock`] | commit timestamps |
//! | [`EventSink`] | fire-and-forget event delivery |
//!
//! [`FromConfig`] is the construction trait for the engine itself.

mod authorization;
mod clock;
mod event_sink;
mod from_config;
mod fungible_asset;

pub use authorization::AuthorizationCheck;
pub use clock::Clock;
pub use event_sink::{EventSink, TracingEventSink};
pub use from_config::FromConfig;
pub use fungible_asset::{FungibleAsset, LiquidityToken};
