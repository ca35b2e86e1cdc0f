//! # Swap Pair
//!
//! Settlement core of a two-asset constant-product AMM pair (`x · y = k`).
//!
//! The pair holds two reserve assets and issues a liquidity token for
//! proportional ownership of them.  On every mint, burn and swap it works
//! out the exact integer amounts to move, adjusts the liquidity supply, and
//! re-establishes the fee-adjusted invariant before anything is committed.
//!
//! All amounts are unbounded integers; no floating point is involved.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | `Serialize`/`Deserialize` for configuration, state and events |
//!
//! # Quick Start
//!
//! ```rust
//! use swap_pair::config::{PairConfig, RouterPolicy};
//! use swap_pair::domain::{Address, Amount, AssetPair};
//! use swap_pair::math::quote;
//! use swap_pair::sandbox::Sandbox;
//!
//! let (usdc, weth) = (Address::from_bytes([1; 20]), Address::from_bytes([2; 20]));
//! let (pool, lp, trader) = (
//!     Address::from_bytes([9; 20]),
//!     Address::from_bytes([0xa1; 20]),
//!     Address::from_bytes([0xb0; 20]),
//! );
//!
//! // 1. Configure an open pair
//! let assets = AssetPair::new(usdc, weth).expect("distinct assets");
//! let cfg = PairConfig::new(assets, pool, RouterPolicy::Open).expect("valid config");
//! let mut pair = Sandbox::new(cfg).expect("sandbox");
//! for holder in [lp, trader] {
//!     pair.faucet(&usdc, &holder, &Amount::new(1_000_000)).expect("known asset");
//!     pair.faucet(&weth, &holder, &Amount::new(1_000_000)).expect("known asset");
//! }
//!
//! // 2. Provide liquidity: deposit first, then mint
//! pair.deposit(&usdc, &lp, &Amount::new(100_000)).expect("funded");
//! pair.deposit(&weth, &lp, &Amount::new(100_000)).expect("funded");
//! let minted = pair.mint(&lp, &lp).expect("mint");
//! assert_eq!(minted, Amount::new(99_000));
//!
//! // 3. Swap 1 000 USDC for WETH
//! let reserves = pair.engine().get_reserves().clone();
//! let out = quote::amount_out(&Amount::new(1_000), reserves.reserve0(), reserves.reserve1())
//!     .expect("quote");
//! pair.deposit(&usdc, &trader, &Amount::new(1_000)).expect("funded");
//! pair.swap(&trader, &Amount::zero(), &out, &trader).expect("swap");
//! assert!(pair.engine().get_reserves().product() > reserves.product());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host     │  dispatch, rollback, storage (Sandbox in memory)
//! └──────┬───────┘
//!        │ mint / burn / swap + Collaborators
//!        ▼
//! ┌──────────────┐
//! │  PoolEngine  │  router gate, working copy, commit-or-drop
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    State     │  ReserveLedger, LiquiditySupplyLedger, ProtocolFeeAccount
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │ Domain/Math  │  Amount, Reserves, isqrt, checked arithmetic
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Address`](domain::Address), [`Reserves`](domain::Reserves), [`PoolEvent`](domain::PoolEvent), etc. |
//! | [`traits`] | Collaborator interfaces: [`FungibleAsset`](traits::FungibleAsset), [`LiquidityToken`](traits::LiquidityToken), [`AuthorizationCheck`](traits::AuthorizationCheck), [`Clock`](traits::Clock), [`EventSink`](traits::EventSink) |
//! | [`config`] | [`PairConfig`](config::PairConfig) and [`RouterPolicy`](config::RouterPolicy) |
//! | [`state`]  | Persisted ledgers grouped in [`PoolState`](state::PoolState) |
//! | [`pool`]   | [`PoolEngine`](pool::PoolEngine): mint, burn, swap |
//! | [`sandbox`] | In-memory collaborators and a transactional host |
//! | [`math`]   | Integer square root, checked arithmetic, swap quotes |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod sandbox;
pub mod state;
pub mod traits;
