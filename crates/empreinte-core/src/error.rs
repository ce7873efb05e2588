//! Error types for `empreinte-core`.

use thiserror::Error;

/// Errors produced by hashing and asymmetric operations.
#[derive(Debug, Error)]
pub enum HashError {
    /// Malformed hashing parameters or a corrupt digest encoding
    /// (invalid cost factor, zero iterations, digest that is not valid
    /// base64 / modular-crypt / PHC text).
    #[error("invalid hashing input: {0}")]
    Validation(String),

    /// RSA key pair generation failure (RNG failure, unsupported modulus).
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// RSA encrypt/decrypt failure — wrong key, corrupt ciphertext, or
    /// malformed PEM. Carries no detail from the underlying primitive.
    #[error("asymmetric operation failed")]
    Operation,
}
