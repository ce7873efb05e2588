//! The single-slot strategy holder.
//!
//! This module provides:
//! - [`StrategyHolder`] — one atomically swappable slot for the process's
//!   active [`HashStrategy`]
//!
//! The holder stores and retrieves; it never validates. Installing replaces
//! the previous strategy unconditionally (last write wins) — if the old
//! strategy held resources, releasing them is the caller's job. Reading an
//! empty slot is [`RegistryError::NotConfigured`], not a silent default.
//!
//! The slot is a lock-free atomic pointer swap, so `install` racing with
//! `current` observes either the old strategy or the new one, never a torn
//! value. In-flight operations on the old strategy complete on their own
//! `Arc` clone.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use empreinte_core::{Algorithm, HashStrategy};

use crate::error::RegistryError;

/// Sized wrapper so the trait object can live behind the atomic pointer.
struct Slot(Arc<dyn HashStrategy>);

/// Single-slot holder for the currently active [`HashStrategy`].
#[derive(Default)]
pub struct StrategyHolder {
    slot: ArcSwapOption<Slot>,
}

impl StrategyHolder {
    /// Create an empty holder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::empty(),
        }
    }

    /// Install `strategy` as the active strategy, replacing any previous
    /// one. Always succeeds.
    pub fn install(&self, strategy: Arc<dyn HashStrategy>) {
        tracing::debug!(algorithm = %strategy.algorithm(), "hashing strategy installed");
        self.slot.store(Some(Arc::new(Slot(strategy))));
    }

    /// Build a strategy with `factory` and install it immediately.
    ///
    /// This is the constructor-instead-of-instance form: the factory runs
    /// exactly once, at install time.
    pub fn install_with<F>(&self, factory: F)
    where
        F: FnOnce() -> Arc<dyn HashStrategy>,
    {
        self.install(factory());
    }

    /// Return the currently active strategy.
    ///
    /// The returned `Arc` is the installed instance itself (identity is
    /// preserved), and stays valid even if another thread swaps the slot
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotConfigured`] if nothing was installed.
    pub fn current(&self) -> Result<Arc<dyn HashStrategy>, RegistryError> {
        self.slot
            .load_full()
            .map(|slot| Arc::clone(&slot.0))
            .ok_or(RegistryError::NotConfigured)
    }

    /// Which algorithm the active strategy implements.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotConfigured`] if nothing was installed.
    pub fn algorithm(&self) -> Result<Algorithm, RegistryError> {
        Ok(self.current()?.algorithm())
    }

    /// Hash `data` with the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotConfigured`] if nothing was installed,
    /// or the strategy's own error.
    pub fn hash(&self, data: &[u8]) -> Result<String, RegistryError> {
        Ok(self.current()?.hash(data)?)
    }

    /// Check `data` against `digest` with the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotConfigured`] if nothing was installed,
    /// or the strategy's own error.
    pub fn verify(&self, data: &[u8], digest: &str) -> Result<bool, RegistryError> {
        Ok(self.current()?.verify(data, digest)?)
    }
}

impl fmt::Debug for StrategyHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = self.slot.load().as_ref().map(|slot| slot.0.algorithm());
        f.debug_struct("StrategyHolder")
            .field("algorithm", &algorithm)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
