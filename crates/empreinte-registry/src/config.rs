//! Startup strategy selection.
//!
//! This module provides:
//! - [`StrategyConfig`] — a serializable "which algorithm, with which
//!   parameters" value, decided once at process startup
//!
//! Strategy selection is an explicit configuration value passed to a
//! constructor, decoupled from any injection framework: deserialize a
//! `StrategyConfig` from the application's config file, then
//! [`install_into`](StrategyConfig::install_into) the process-wide
//! [`StrategyHolder`]. A typo'd algorithm name fails loudly at this
//! boundary ([`RegistryError::UnknownAlgorithm`]) — configuration errors
//! are boot-time bugs, not runtime conditions.

use std::sync::Arc;

use empreinte_core::{
    Algorithm, Argon2Params, Argon2Strategy, BcryptParams, BcryptStrategy, HashStrategy,
    Pbkdf2Params, Pbkdf2Strategy,
};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::holder::StrategyHolder;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Algorithm choice plus constructor parameters, as stored in application
/// configuration.
///
/// Serialized form is internally tagged:
///
/// ```json
/// { "algorithm": "bcrypt", "cost": 12 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum StrategyConfig {
    /// bcrypt with [`BcryptParams`].
    Bcrypt(BcryptParams),
    /// Argon2id with [`Argon2Params`].
    Argon2(Argon2Params),
    /// PBKDF2 with [`Pbkdf2Params`].
    Pbkdf2(Pbkdf2Params),
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl StrategyConfig {
    /// Config for `name` with that algorithm's default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownAlgorithm`] if `name` is not
    /// `bcrypt`, `argon2`, or `pbkdf2`.
    pub fn for_algorithm(name: &str) -> Result<Self, RegistryError> {
        match name {
            "bcrypt" => Ok(Self::Bcrypt(BcryptParams::default())),
            "argon2" => Ok(Self::Argon2(Argon2Params::default())),
            "pbkdf2" => Ok(Self::Pbkdf2(Pbkdf2Params::default())),
            other => Err(RegistryError::UnknownAlgorithm(other.to_owned())),
        }
    }

    /// Which algorithm this config selects.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bcrypt(_) => Algorithm::Bcrypt,
            Self::Argon2(_) => Algorithm::Argon2,
            Self::Pbkdf2(_) => Algorithm::Pbkdf2,
        }
    }

    /// Build the configured strategy.
    #[must_use]
    pub fn build(&self) -> Arc<dyn HashStrategy> {
        match self {
            Self::Bcrypt(params) => Arc::new(BcryptStrategy::new(params.clone())),
            Self::Argon2(params) => Arc::new(Argon2Strategy::new(params.clone())),
            Self::Pbkdf2(params) => Arc::new(Pbkdf2Strategy::new(params.clone())),
        }
    }

    /// Build the configured strategy and install it into `holder`.
    ///
    /// This is the process-startup wiring call: decide once, install once,
    /// then route all hashing through the holder.
    pub fn install_into(&self, holder: &StrategyHolder) {
        tracing::info!(algorithm = %self.algorithm(), "configuring hashing strategy");
        holder.install(self.build());
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
