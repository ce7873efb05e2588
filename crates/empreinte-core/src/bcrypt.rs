//! bcrypt password hashing.
//!
//! This module provides:
//! - [`BcryptStrategy`] — [`HashStrategy`] implementation over the `bcrypt` crate
//! - [`BcryptParams`] — constructor defaults (cost factor, optional pinned salt)
//! - [`BcryptOptions`] — per-call overrides for [`BcryptStrategy::hash_with`]
//!
//! Output is the modular-crypt format `$2b$<cost>$<salt+digest>` with the
//! salt and cost embedded in the digest, so verification needs no stored
//! parameters. The salt is random per call unless pinned; a pinned salt
//! makes `hash` deterministic (tests, cross-system fixtures) at the price of
//! rainbow-table resistance, so production callers should leave it unset.

use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::strategy::{Algorithm, HashStrategy};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// bcrypt salt length in bytes (fixed by the algorithm).
pub const SALT_LEN: usize = 16;

/// Minimum cost factor accepted by the algorithm.
pub const MIN_COST: u32 = 4;

/// Maximum cost factor accepted by the algorithm.
pub const MAX_COST: u32 = 31;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Constructor defaults for [`BcryptStrategy`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BcryptParams {
    /// Cost factor (work = 2^cost). Valid range 4..=31. Accepted under the
    /// legacy name `rounds` in serialized form.
    #[serde(alias = "rounds")]
    pub cost: u32,
    /// Pinned 16-byte salt. `None` (the default) generates a random salt
    /// per call.
    pub salt: Option<[u8; SALT_LEN]>,
}

impl Default for BcryptParams {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
            salt: None,
        }
    }
}

/// Per-call overrides for [`BcryptStrategy::hash_with`].
///
/// Fields left `None` fall back to the constructor defaults. Overrides never
/// mutate the stored defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BcryptOptions {
    /// Override the cost factor for this call.
    pub cost: Option<u32>,
    /// Override the salt for this call.
    pub salt: Option<[u8; SALT_LEN]>,
}

/// bcrypt [`HashStrategy`] implementation.
#[derive(Clone, Debug, Default)]
pub struct BcryptStrategy {
    params: BcryptParams,
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

impl BcryptStrategy {
    /// Create a strategy with the given constructor defaults.
    #[must_use]
    pub const fn new(params: BcryptParams) -> Self {
        Self { params }
    }

    /// Return the constructor defaults.
    #[must_use]
    pub const fn params(&self) -> &BcryptParams {
        &self.params
    }

    /// Hash `data` with per-call overrides taking precedence over the
    /// constructor defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] if the effective cost factor is
    /// outside 4..=31.
    pub fn hash_with(&self, data: &[u8], options: &BcryptOptions) -> Result<String, HashError> {
        let cost = options.cost.unwrap_or(self.params.cost);
        let salt = options.salt.or(self.params.salt);

        match salt {
            Some(salt) => {
                let parts = bcrypt::hash_with_salt(data, cost, salt)
                    .map_err(|e| HashError::Validation(format!("bcrypt hash failed: {e}")))?;
                Ok(parts.format_for_version(bcrypt::Version::TwoB))
            }
            None => bcrypt::hash(data, cost)
                .map_err(|e| HashError::Validation(format!("bcrypt hash failed: {e}"))),
        }
    }
}

impl HashStrategy for BcryptStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bcrypt
    }

    fn hash(&self, data: &[u8]) -> Result<String, HashError> {
        self.hash_with(data, &BcryptOptions::default())
    }

    fn verify(&self, data: &[u8], digest: &str) -> Result<bool, HashError> {
        // Cost and salt are recovered from the digest itself; a digest that
        // cannot be parsed is malformed input, not a mismatch.
        bcrypt::verify(data, digest)
            .map_err(|e| HashError::Validation(format!("malformed bcrypt digest: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
