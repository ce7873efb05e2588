//! Schema-level "this value is already hashed" validation.
//!
//! [`Prehashed`] is a newtype over a password-grade digest (bcrypt or
//! Argon2 — see [`is_password_hash`]). It only constructs from text that
//! classifies as one, so a config or DTO field typed `Prehashed` cannot be
//! populated with a plaintext password: deserialization itself rejects it.
//!
//! The MD5/SHA hex formats are deliberately not accepted — a stored
//! credential must be password-grade, and an unsalted fast digest is not.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HashError;
use crate::format::is_password_hash;

/// A string validated to already be a password-grade hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Prehashed(String);

impl Prehashed {
    /// Wrap `value` after validating it is a password-grade hash.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] if `value` is not a bcrypt or
    /// Argon2 digest. The rejected value is not echoed into the error — it
    /// may be a plaintext password.
    pub fn new(value: String) -> Result<Self, HashError> {
        if is_password_hash(&value) {
            Ok(Self(value))
        } else {
            Err(HashError::Validation(
                "value is not a password-grade hash (expected bcrypt or argon2)".into(),
            ))
        }
    }

    /// View the digest text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the digest text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Prehashed {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Prehashed {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl fmt::Display for Prehashed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prehashed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Prehashed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(D::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
