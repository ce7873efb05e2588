//! Textual hash-format recognition.
//!
//! This module provides:
//! - [`is_bcrypt`], [`is_argon2`], [`is_md5`], [`is_sha1`], [`is_sha256`] —
//!   one anchored-regex predicate per digest encoding
//! - [`HashFormat`] — typed format selector with [`HashFormat::matches`]
//! - [`matches_format`] — name-dispatched classification
//! - [`is_password_hash`] — the default "password-grade hash" check
//!
//! Classification is heuristic pattern matching over an opaque string —
//! typically used to decide whether a persisted value is already hashed
//! before accepting it as a stored credential. The patterns are anchored
//! with exact lengths; no content-based disambiguation is attempted beyond
//! them. Absence of a match is a normal result, never an error: every
//! predicate is total and returns `false` for anything it does not
//! recognize, including non-UTF-8 byte input.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::HashError;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// bcrypt modular-crypt format: `$2$`/`$2a$`/`$2b$`/`$2x$`/`$2y$`, a
/// two-digit cost in 04..=31, and 53 chars of bcrypt-base64 salt+digest.
static BCRYPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$2[abxy]?\$(0[4-9]|[12][0-9]|3[01])\$[./0-9A-Za-z]{53}$")
        .expect("hard-coded bcrypt pattern must compile")
});

/// Argon2id PHC string, optionally carrying `keyid`/`data` fields.
/// Matching is case-insensitive, tolerating uppercased stored values.
static ARGON2: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\$argon2id\$v=(16|19)\$m=\d{1,10},t=\d{1,10},p=\d{1,3}(,keyid=[A-Za-z0-9+/]{0,11}(,data=[A-Za-z0-9+/]{0,43})?)?\$[A-Za-z0-9+/]{11,64}\$[A-Za-z0-9+/]{16,86}$",
    )
    .expect("hard-coded argon2 pattern must compile")
});

/// MD5: exactly 32 hex characters.
static MD5: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{32}$").expect("hard-coded md5 pattern must compile"));

/// SHA-1: exactly 40 hex characters.
static SHA1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Fa-f0-9]{40}$").expect("hard-coded sha1 pattern must compile"));

/// SHA-256: exactly 64 hex characters.
static SHA256: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Fa-f0-9]{64}$").expect("hard-coded sha256 pattern must compile"));

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// True iff `value` is a bcrypt modular-crypt digest.
#[must_use]
pub fn is_bcrypt(value: &str) -> bool {
    BCRYPT.is_match(value)
}

/// True iff `value` is an Argon2id PHC string.
#[must_use]
pub fn is_argon2(value: &str) -> bool {
    ARGON2.is_match(value)
}

/// True iff `value` is 32 hex characters (an MD5 digest).
#[must_use]
pub fn is_md5(value: &str) -> bool {
    MD5.is_match(value)
}

/// True iff `value` is 40 hex characters (a SHA-1 digest).
#[must_use]
pub fn is_sha1(value: &str) -> bool {
    SHA1.is_match(value)
}

/// True iff `value` is 64 hex characters (a SHA-256 digest).
#[must_use]
pub fn is_sha256(value: &str) -> bool {
    SHA256.is_match(value)
}

/// True iff `value` is a password-grade hash (bcrypt or Argon2).
///
/// This is the default check — deliberately narrower than "any recognized
/// format": unsalted MD5/SHA digests are not password-grade and do not
/// count.
#[must_use]
pub fn is_password_hash(value: &str) -> bool {
    is_bcrypt(value) || is_argon2(value)
}

// ---------------------------------------------------------------------------
// Typed dispatch
// ---------------------------------------------------------------------------

/// A recognizable digest encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFormat {
    /// bcrypt modular-crypt format.
    Bcrypt,
    /// Argon2id PHC string.
    Argon2,
    /// 32 hex characters.
    Md5,
    /// 40 hex characters.
    Sha1,
    /// 64 hex characters.
    Sha256,
}

/// All recognized formats, in classification order.
pub const ALL_FORMATS: [HashFormat; 5] = [
    HashFormat::Bcrypt,
    HashFormat::Argon2,
    HashFormat::Md5,
    HashFormat::Sha1,
    HashFormat::Sha256,
];

impl HashFormat {
    /// True iff `value` matches this format's pattern.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Bcrypt => is_bcrypt(value),
            Self::Argon2 => is_argon2(value),
            Self::Md5 => is_md5(value),
            Self::Sha1 => is_sha1(value),
            Self::Sha256 => is_sha256(value),
        }
    }

    /// Byte-sequence form of [`HashFormat::matches`].
    ///
    /// The bytes are interpreted as UTF-8 text before matching; no base64 or
    /// hex decoding of ambiguous input is attempted. Non-UTF-8 input is
    /// simply not a textual digest and yields `false`.
    #[must_use]
    pub fn matches_bytes(self, value: &[u8]) -> bool {
        std::str::from_utf8(value).is_ok_and(|text| self.matches(text))
    }

    /// Return the canonical lowercase name for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Argon2 => "argon2",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFormat {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" => Ok(Self::Argon2),
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(HashError::Validation(format!(
                "unknown hash format name: {other:?}"
            ))),
        }
    }
}

/// Name-dispatched classification: `matches_format("bcrypt", v)` is
/// `is_bcrypt(v)`.
///
/// An unrecognized `name` yields `false`, not an error — callers probing
/// "is this value a hash of format X" get a plain no for formats this
/// module has never heard of. Callers that want a typo to be loud should
/// parse a [`HashFormat`] first and use [`HashFormat::matches`].
#[must_use]
pub fn matches_format(name: &str, value: &str) -> bool {
    HashFormat::from_str(name).is_ok_and(|format| format.matches(value))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
