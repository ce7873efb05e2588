//! The common strategy contract shared by all digest algorithms.
//!
//! This module provides:
//! - [`HashStrategy`] — object-safe hash/verify trait implemented by
//!   [`BcryptStrategy`](crate::bcrypt::BcryptStrategy),
//!   [`Argon2Strategy`](crate::argon2::Argon2Strategy), and
//!   [`Pbkdf2Strategy`](crate::pbkdf2::Pbkdf2Strategy)
//! - [`Algorithm`] — identifier enum for the three digest algorithms
//!
//! RSA is deliberately not part of this contract: it is an encrypt/decrypt
//! pair, not a hash/verify pair (see [`crate::rsa`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HashError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Identifier for a digest algorithm exposed through [`HashStrategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// bcrypt modular-crypt digests (`$2b$<cost>$...`).
    Bcrypt,
    /// Argon2id PHC-string digests (`$argon2id$v=19$...`).
    Argon2,
    /// PBKDF2 derived keys, base64 text (not self-describing).
    Pbkdf2,
}

impl Algorithm {
    /// Return the canonical lowercase name for this algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Argon2 => "argon2",
            Self::Pbkdf2 => "pbkdf2",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" => Ok(Self::Argon2),
            "pbkdf2" => Ok(Self::Pbkdf2),
            other => Err(HashError::Validation(format!(
                "unknown algorithm name: {other:?}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// A concrete digest algorithm behind the common hash/verify contract.
///
/// Implementations are stateless apart from their immutable
/// constructor-supplied defaults, so independent calls on one instance may
/// run concurrently. Per-call parameter overrides are inherent
/// `hash_with`/`verify_with` methods on the concrete types; the trait
/// surface always uses the constructor defaults.
pub trait HashStrategy: Send + Sync {
    /// Which algorithm this strategy implements.
    fn algorithm(&self) -> Algorithm;

    /// Hash `data`, returning the digest in the algorithm's text encoding.
    ///
    /// Algorithms with randomized salt (bcrypt, Argon2, PBKDF2 without a
    /// pinned salt) produce distinct digests for identical input across
    /// calls; callers must not assert digest equality unless the salt is
    /// pinned at construction.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] if the configured parameters are
    /// rejected by the underlying primitive.
    fn hash(&self, data: &[u8]) -> Result<String, HashError>;

    /// Check `data` against a previously produced `digest`.
    ///
    /// A well-formed digest that does not match yields `Ok(false)`, never an
    /// error; only a malformed digest (corrupt encoding) or invalid
    /// parameters yield [`HashError::Validation`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] on malformed digests or parameters.
    fn verify(&self, data: &[u8], digest: &str) -> Result<bool, HashError>;
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
