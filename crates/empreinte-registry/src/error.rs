//! Error types for `empreinte-registry`.

use empreinte_core::HashError;
use thiserror::Error;

/// Errors produced by strategy selection and the holder.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A strategy was requested before any was installed. This is a wiring
    /// bug: fail fast at process startup, never fall back to a silent
    /// default algorithm.
    #[error("no hashing strategy configured")]
    NotConfigured,

    /// Startup configuration named an algorithm the registry cannot build.
    #[error("unknown hashing algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A hashing operation routed through the holder failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}
