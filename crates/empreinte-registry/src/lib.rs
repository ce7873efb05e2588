//! `empreinte-registry` — Runtime strategy selection for Empreinte.
//!
//! Holds the process's active [`HashStrategy`](empreinte_core::HashStrategy)
//! in a single atomically swappable slot and wires it up from an explicit
//! startup configuration value.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod holder;

pub use config::StrategyConfig;
pub use error::RegistryError;
pub use holder::StrategyHolder;
