//! Argon2id password hashing with PHC-string output.
//!
//! This module provides:
//! - [`Argon2Strategy`] — [`HashStrategy`] implementation over the `argon2` crate
//! - [`Argon2Params`] — memory/time/parallelism cost set (the `argon2` crate
//!   convention: `m_cost` in KiB, `t_cost` iterations, `p_cost` lanes)
//! - [`Argon2Options`] — per-call overrides for [`Argon2Strategy::hash_with`]
//!
//! Output is the PHC string `$argon2id$v=19$m=...,t=...,p=...$<salt>$<tag>`.
//! All parameters and the salt are embedded in the digest, so verification
//! recovers them from the digest itself and needs no stored configuration —
//! a strategy constructed with different costs still verifies digests
//! produced under the old costs.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{PasswordHash, PasswordHasher, PasswordVerifier};
use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::strategy::{Algorithm, HashStrategy};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Argon2id parameter set.
///
/// Fields use the `argon2` crate convention:
/// - `m_cost`: memory in KiB (NOT bytes, NOT MB)
/// - `t_cost`: number of iterations
/// - `p_cost`: degree of parallelism
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Params {
    /// Memory cost in kibibytes.
    pub m_cost: u32,
    /// Number of iterations (time cost).
    pub t_cost: u32,
    /// Degree of parallelism (number of lanes).
    pub p_cost: u32,
    /// Tag length in bytes. `None` uses the library default (32).
    pub output_len: Option<usize>,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            m_cost: argon2::Params::DEFAULT_M_COST,
            t_cost: argon2::Params::DEFAULT_T_COST,
            p_cost: argon2::Params::DEFAULT_P_COST,
            output_len: None,
        }
    }
}

/// Per-call overrides for [`Argon2Strategy::hash_with`].
///
/// Fields left `None` fall back to the constructor defaults. Overrides never
/// mutate the stored defaults. Verification needs no overrides — every
/// parameter is recovered from the digest itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Options {
    /// Override the memory cost (KiB) for this call.
    pub m_cost: Option<u32>,
    /// Override the iteration count for this call.
    pub t_cost: Option<u32>,
    /// Override the parallelism for this call.
    pub p_cost: Option<u32>,
    /// Override the tag length for this call.
    pub output_len: Option<usize>,
}

/// Argon2id [`HashStrategy`] implementation.
#[derive(Clone, Debug, Default)]
pub struct Argon2Strategy {
    params: Argon2Params,
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

impl Argon2Strategy {
    /// Create a strategy with the given cost parameters.
    #[must_use]
    pub const fn new(params: Argon2Params) -> Self {
        Self { params }
    }

    /// Return the constructor defaults.
    #[must_use]
    pub const fn params(&self) -> &Argon2Params {
        &self.params
    }

    /// Hash `data` with per-call overrides taking precedence over the
    /// constructor defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] if the effective parameters are
    /// rejected by the `argon2` crate.
    pub fn hash_with(&self, data: &[u8], options: &Argon2Options) -> Result<String, HashError> {
        let hasher = self.hasher(options)?;
        let salt = SaltString::generate(&mut OsRng);
        let digest = hasher
            .hash_password(data, &salt)
            .map_err(|e| HashError::Validation(format!("argon2id hashing failed: {e}")))?;
        Ok(digest.to_string())
    }

    fn hasher(&self, options: &Argon2Options) -> Result<argon2::Argon2<'static>, HashError> {
        let params = argon2::Params::new(
            options.m_cost.unwrap_or(self.params.m_cost),
            options.t_cost.unwrap_or(self.params.t_cost),
            options.p_cost.unwrap_or(self.params.p_cost),
            options.output_len.or(self.params.output_len),
        )
        .map_err(|e| HashError::Validation(format!("invalid argon2 params: {e}")))?;

        Ok(argon2::Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}

impl HashStrategy for Argon2Strategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Argon2
    }

    fn hash(&self, data: &[u8]) -> Result<String, HashError> {
        self.hash_with(data, &Argon2Options::default())
    }

    fn verify(&self, data: &[u8], digest: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| HashError::Validation(format!("malformed PHC string: {e}")))?;

        // Costs and salt come from the digest, not from self.params.
        match argon2::Argon2::default().verify_password(data, &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::Validation(format!(
                "argon2id verification failed: {e}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
