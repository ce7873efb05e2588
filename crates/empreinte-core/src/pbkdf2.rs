//! PBKDF2 key derivation with base64 text output.
//!
//! This module provides:
//! - [`Pbkdf2Strategy`] — [`HashStrategy`] implementation over the `pbkdf2` crate
//! - [`Pbkdf2Params`] — salt / iterations / key length / digest defaults
//! - [`Pbkdf2Options`] — per-call overrides
//! - [`Pbkdf2Digest`] — the HMAC digest family selector
//!
//! Unlike bcrypt and Argon2, the output is NOT self-describing: it is the
//! base64 of the raw derived key, with no embedded salt or iteration count.
//! Callers must store the parameters alongside the digest and resupply them
//! at verification time. Verifying through a strategy with no pinned salt is
//! a [`HashError::Validation`] error rather than a silent mismatch.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::HashError;
use crate::strategy::{Algorithm, HashStrategy};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Generated salt length in bytes when no salt is supplied.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Default iteration count.
pub const DEFAULT_ITERATIONS: u32 = 1_000;

/// Default derived key length in bytes.
pub const DEFAULT_KEY_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// HMAC digest family used by the derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pbkdf2Digest {
    /// HMAC-SHA-1 (legacy interop only).
    Sha1,
    /// HMAC-SHA-256 (the default).
    #[default]
    Sha256,
    /// HMAC-SHA-512.
    Sha512,
}

impl Pbkdf2Digest {
    /// Return the canonical lowercase name for this digest.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

/// Constructor defaults for [`Pbkdf2Strategy`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pbkdf2Params {
    /// Pinned salt bytes. `None` (the default) generates a random 16-byte
    /// salt per `hash` call — which makes later verification through this
    /// strategy impossible, since the salt is not embedded in the output.
    pub salt: Option<Vec<u8>>,
    /// Iteration count. Must be non-zero.
    pub iterations: u32,
    /// Derived key length in bytes. Must be non-zero. Accepted under the
    /// legacy name `keylen` in serialized form.
    #[serde(alias = "keylen")]
    pub key_len: usize,
    /// HMAC digest family.
    pub digest: Pbkdf2Digest,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            salt: None,
            iterations: DEFAULT_ITERATIONS,
            key_len: DEFAULT_KEY_LEN,
            digest: Pbkdf2Digest::default(),
        }
    }
}

/// Per-call overrides for [`Pbkdf2Strategy::hash_with`] and
/// [`Pbkdf2Strategy::verify_with`].
///
/// Fields left `None` fall back to the constructor defaults. Overrides never
/// mutate the stored defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pbkdf2Options {
    /// Override the salt for this call.
    pub salt: Option<Vec<u8>>,
    /// Override the iteration count for this call.
    pub iterations: Option<u32>,
    /// Override the derived key length for this call.
    pub key_len: Option<usize>,
    /// Override the HMAC digest family for this call.
    pub digest: Option<Pbkdf2Digest>,
}

/// PBKDF2 [`HashStrategy`] implementation.
#[derive(Clone, Debug, Default)]
pub struct Pbkdf2Strategy {
    params: Pbkdf2Params,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

fn derive(
    data: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
    digest: Pbkdf2Digest,
) -> Result<Vec<u8>, HashError> {
    if iterations == 0 {
        return Err(HashError::Validation(
            "pbkdf2 iteration count must be non-zero".into(),
        ));
    }
    if key_len == 0 {
        return Err(HashError::Validation(
            "pbkdf2 key length must be non-zero".into(),
        ));
    }

    let mut out = vec![0u8; key_len];
    match digest {
        Pbkdf2Digest::Sha1 => pbkdf2::pbkdf2_hmac::<sha1::Sha1>(data, salt, iterations, &mut out),
        Pbkdf2Digest::Sha256 => {
            pbkdf2::pbkdf2_hmac::<sha2::Sha256>(data, salt, iterations, &mut out);
        }
        Pbkdf2Digest::Sha512 => {
            pbkdf2::pbkdf2_hmac::<sha2::Sha512>(data, salt, iterations, &mut out);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

impl Pbkdf2Strategy {
    /// Create a strategy with the given constructor defaults.
    #[must_use]
    pub const fn new(params: Pbkdf2Params) -> Self {
        Self { params }
    }

    /// Return the constructor defaults.
    #[must_use]
    pub const fn params(&self) -> &Pbkdf2Params {
        &self.params
    }

    /// Hash `data` with per-call overrides taking precedence over the
    /// constructor defaults.
    ///
    /// When neither the options nor the constructor pin a salt, a random
    /// 16-byte salt is generated for this call — the caller then has no way
    /// to verify the digest later, since the salt is not part of the output.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] if the effective iteration count or
    /// key length is zero.
    pub fn hash_with(&self, data: &[u8], options: &Pbkdf2Options) -> Result<String, HashError> {
        let iterations = options.iterations.unwrap_or(self.params.iterations);
        let key_len = options.key_len.unwrap_or(self.params.key_len);
        let digest = options.digest.unwrap_or(self.params.digest);

        let mut derived = match options.salt.as_deref().or(self.params.salt.as_deref()) {
            Some(salt) => derive(data, salt, iterations, key_len, digest)?,
            None => {
                let mut salt = [0u8; DEFAULT_SALT_LEN];
                OsRng.fill_bytes(&mut salt);
                derive(data, &salt, iterations, key_len, digest)?
            }
        };

        let encoded = BASE64.encode(&derived);
        derived.zeroize();
        Ok(encoded)
    }

    /// Check `data` against `digest` using per-call overrides.
    ///
    /// The salt, iteration count, key length, and digest family must equal
    /// those used to produce `digest` — the output embeds none of them.
    /// Comparison is constant-time.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Validation`] if no salt is available (neither
    /// pinned at construction nor supplied per call), if the effective
    /// parameters are invalid, or if `digest` is not valid base64.
    pub fn verify_with(
        &self,
        data: &[u8],
        digest: &str,
        options: &Pbkdf2Options,
    ) -> Result<bool, HashError> {
        let salt = options
            .salt
            .as_deref()
            .or(self.params.salt.as_deref())
            .ok_or_else(|| {
                HashError::Validation(
                    "pbkdf2 verification requires the original salt (output is not self-describing)"
                        .into(),
                )
            })?;
        let iterations = options.iterations.unwrap_or(self.params.iterations);
        let key_len = options.key_len.unwrap_or(self.params.key_len);
        let digest_kind = options.digest.unwrap_or(self.params.digest);

        let mut expected = BASE64
            .decode(digest)
            .map_err(|e| HashError::Validation(format!("malformed pbkdf2 digest: {e}")))?;
        let mut candidate = derive(data, salt, iterations, key_len, digest_kind)?;

        // ct_eq yields false for differing lengths without early exit on content.
        let matches = bool::from(candidate.ct_eq(&expected));
        candidate.zeroize();
        expected.zeroize();
        Ok(matches)
    }
}

impl HashStrategy for Pbkdf2Strategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Pbkdf2
    }

    fn hash(&self, data: &[u8]) -> Result<String, HashError> {
        self.hash_with(data, &Pbkdf2Options::default())
    }

    fn verify(&self, data: &[u8], digest: &str) -> Result<bool, HashError> {
        self.verify_with(data, digest, &Pbkdf2Options::default())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SALT: &[u8] = b"0123456789abcdef";

    fn pinned_strategy() -> Pbkdf2Strategy {
        Pbkdf2Strategy::new(Pbkdf2Params {
            salt: Some(TEST_SALT.to_vec()),
            iterations: 10,
            key_len: 32,
            digest: Pbkdf2Digest::Sha256,
        })
    }

    #[test]
    fn hash_verify_roundtrip_with_pinned_salt() {
        let strategy = pinned_strategy();
        let digest = strategy.hash(b"passphrase").expect("hash should succeed");
        let matches = strategy
            .verify(b"passphrase", &digest)
            .expect("verify should succeed");
        assert!(matches);
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let strategy = pinned_strategy();
        let digest = strategy.hash(b"passphrase").expect("hash should succeed");
        let matches = strategy
            .verify(b"wrong", &digest)
            .expect("verify should succeed");
        assert!(!matches, "wrong password should yield Ok(false)");
    }

    #[test]
    fn pinned_salt_is_deterministic() {
        let strategy = pinned_strategy();
        let a = strategy.hash(b"same input").expect("hash should succeed");
        let b = strategy.hash(b"same input").expect("hash should succeed");
        assert_eq!(a, b);
    }

    #[test]
    fn unpinned_salt_produces_distinct_digests() {
        let strategy = Pbkdf2Strategy::new(Pbkdf2Params {
            salt: None,
            iterations: 10,
            key_len: 32,
            digest: Pbkdf2Digest::Sha256,
        });
        let a = strategy.hash(b"same input").expect("hash should succeed");
        let b = strategy.hash(b"same input").expect("hash should succeed");
        assert_ne!(a, b, "random salts should produce distinct digests");
    }

    #[test]
    fn distinct_salts_produce_distinct_digests() {
        let strategy = Pbkdf2Strategy::new(Pbkdf2Params {
            iterations: 10,
            key_len: 32,
            ..Pbkdf2Params::default()
        });
        let a = strategy
            .hash_with(
                b"data",
                &Pbkdf2Options {
                    salt: Some(b"salt-aaaaaaaaaaa".to_vec()),
                    ..Pbkdf2Options::default()
                },
            )
            .expect("hash should succeed");
        let b = strategy
            .hash_with(
                b"data",
                &Pbkdf2Options {
                    salt: Some(b"salt-bbbbbbbbbbb".to_vec()),
                    ..Pbkdf2Options::default()
                },
            )
            .expect("hash should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn same_options_both_sides_roundtrip() {
        let strategy = Pbkdf2Strategy::default();
        let options = Pbkdf2Options {
            salt: Some(b"per-call-salt-16".to_vec()),
            iterations: Some(25),
            key_len: Some(48),
            digest: Some(Pbkdf2Digest::Sha512),
        };
        let digest = strategy
            .hash_with(b"data", &options)
            .expect("hash should succeed");
        let matches = strategy
            .verify_with(b"data", &digest, &options)
            .expect("verify should succeed");
        assert!(matches);
    }

    #[test]
    fn differing_iterations_fail_verification() {
        let strategy = pinned_strategy();
        let digest = strategy.hash(b"data").expect("hash should succeed");
        let matches = strategy
            .verify_with(
                b"data",
                &digest,
                &Pbkdf2Options {
                    iterations: Some(11),
                    ..Pbkdf2Options::default()
                },
            )
            .expect("verify should succeed");
        assert!(!matches, "different iteration count should not match");
    }

    #[test]
    fn verify_without_salt_is_validation_error() {
        let strategy = Pbkdf2Strategy::default();
        let result = strategy.verify(b"data", "AAAA");
        assert!(
            matches!(result, Err(HashError::Validation(_))),
            "verification without a salt should yield HashError::Validation"
        );
    }

    #[test]
    fn verify_rejects_corrupt_base64() {
        let strategy = pinned_strategy();
        let result = strategy.verify(b"data", "not valid base64!!!");
        assert!(
            matches!(result, Err(HashError::Validation(_))),
            "corrupt base64 should yield HashError::Validation"
        );
    }

    #[test]
    fn truncated_digest_is_mismatch_not_error() {
        let strategy = pinned_strategy();
        let digest = strategy.hash(b"data").expect("hash should succeed");
        // Drop one 4-char base64 block: still well-formed, no longer matching.
        let truncated = &digest[..digest.len() - 4];
        let matches = strategy
            .verify(b"data", truncated)
            .expect("verify should succeed");
        assert!(!matches);
    }

    #[test]
    fn zero_iterations_is_validation_error() {
        let strategy = Pbkdf2Strategy::new(Pbkdf2Params {
            salt: Some(TEST_SALT.to_vec()),
            iterations: 0,
            key_len: 32,
            digest: Pbkdf2Digest::Sha256,
        });
        let result = strategy.hash(b"data");
        assert!(
            matches!(result, Err(HashError::Validation(_))),
            "zero iterations should yield HashError::Validation"
        );
    }

    #[test]
    fn zero_key_len_is_validation_error() {
        let strategy = Pbkdf2Strategy::new(Pbkdf2Params {
            salt: Some(TEST_SALT.to_vec()),
            iterations: 10,
            key_len: 0,
            digest: Pbkdf2Digest::Sha256,
        });
        let result = strategy.hash(b"data");
        assert!(
            matches!(result, Err(HashError::Validation(_))),
            "zero key length should yield HashError::Validation"
        );
    }

    #[test]
    fn default_key_len_is_64_bytes_of_base64() {
        let strategy = Pbkdf2Strategy::new(Pbkdf2Params {
            salt: Some(TEST_SALT.to_vec()),
            iterations: 10,
            ..Pbkdf2Params::default()
        });
        let digest = strategy.hash(b"data").expect("hash should succeed");
        let decoded = BASE64.decode(&digest).expect("digest should be base64");
        assert_eq!(decoded.len(), DEFAULT_KEY_LEN);
    }

    #[test]
    fn each_digest_family_derives_distinct_keys() {
        let strategy = Pbkdf2Strategy::new(Pbkdf2Params {
            salt: Some(TEST_SALT.to_vec()),
            iterations: 10,
            key_len: 20,
            digest: Pbkdf2Digest::Sha256,
        });
        let sha1 = strategy
            .hash_with(
                b"data",
                &Pbkdf2Options {
                    digest: Some(Pbkdf2Digest::Sha1),
                    ..Pbkdf2Options::default()
                },
            )
            .expect("hash should succeed");
        let sha256 = strategy.hash(b"data").expect("hash should succeed");
        let sha512 = strategy
            .hash_with(
                b"data",
                &Pbkdf2Options {
                    digest: Some(Pbkdf2Digest::Sha512),
                    ..Pbkdf2Options::default()
                },
            )
            .expect("hash should succeed");
        assert_ne!(sha1, sha256);
        assert_ne!(sha256, sha512);
        assert_ne!(sha1, sha512);
    }

    #[test]
    fn digest_as_str() {
        assert_eq!(Pbkdf2Digest::Sha1.as_str(), "sha1");
        assert_eq!(Pbkdf2Digest::Sha256.as_str(), "sha256");
        assert_eq!(Pbkdf2Digest::Sha512.as_str(), "sha512");
    }

    #[test]
    fn params_serde_roundtrip() {
        let params = Pbkdf2Params {
            salt: Some(TEST_SALT.to_vec()),
            iterations: 600_000,
            key_len: 32,
            digest: Pbkdf2Digest::Sha512,
        };
        let json = serde_json::to_string(&params).expect("serialize should succeed");
        let deserialized: Pbkdf2Params =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(deserialized, params);
    }

    #[test]
    fn params_deserialize_from_empty_object_uses_defaults() {
        let params: Pbkdf2Params = serde_json::from_str("{}").expect("deserialize should succeed");
        assert_eq!(params, Pbkdf2Params::default());
    }
}
