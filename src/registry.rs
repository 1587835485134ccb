//! Algorithm name registry.
//!
//! A [`CrcRegistry`] owns the namespace of known algorithms: the standard
//! catalogue plus anything the caller registers at runtime. Registration is
//! expected during startup/configuration; lookups happen on computation
//! paths, so the map sits behind a read/write lock and readers never block
//! each other.

use std::collections::BTreeMap;
use std::sync::{OnceLock, RwLock};

use crate::catalog::STANDARD_CATALOG;
use crate::engine::CrcEngine;
use crate::params::{CrcParams, MAX_WIDTH};
use crate::{CrcError, CrcResult};

/// Mapping from algorithm name to its parameter set.
///
/// Safe to share across threads: lookups take the read lock, registration
/// takes the write lock. Engines handed out by [`CrcRegistry::engine`] hold
/// a parameter snapshot and are independent of the registry afterwards.
#[derive(Debug, Default)]
pub struct CrcRegistry {
    algorithms: RwLock<BTreeMap<String, CrcParams>>,
}

impl CrcRegistry {
    /// An empty registry with no algorithms.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-seeded with the full standard catalogue.
    pub fn with_standard_catalog() -> Self {
        let registry = Self::new();
        {
            let mut algorithms = registry.algorithms.write().unwrap();
            for entry in STANDARD_CATALOG {
                algorithms.insert(entry.name.to_owned(), entry.params);
            }
        }
        registry
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.read().unwrap().contains_key(name)
    }

    /// Snapshot of all registered names, lexicographically sorted.
    pub fn names(&self) -> Vec<String> {
        self.algorithms.read().unwrap().keys().cloned().collect()
    }

    /// Register a custom algorithm under `name`.
    ///
    /// # Errors
    /// Returns [`CrcError::InvalidWidth`] for widths above 32 and
    /// [`CrcError::DuplicateName`] if `name` is already taken. Nothing is
    /// inserted on failure.
    pub fn register(&self, name: &str, params: CrcParams) -> CrcResult<()> {
        if params.width > MAX_WIDTH {
            return Err(CrcError::InvalidWidth(params.width));
        }
        let mut algorithms = self.algorithms.write().unwrap();
        if algorithms.contains_key(name) {
            return Err(CrcError::DuplicateName(name.to_owned()));
        }
        algorithms.insert(name.to_owned(), params);
        Ok(())
    }

    /// Look up the parameters registered under `name`.
    ///
    /// # Errors
    /// Returns [`CrcError::UnknownAlgorithm`] if the name is absent.
    pub fn get(&self, name: &str) -> CrcResult<CrcParams> {
        self.algorithms
            .read()
            .unwrap()
            .get(name)
            .copied()
            .ok_or_else(|| CrcError::UnknownAlgorithm(name.to_owned()))
    }

    /// Construct a fresh engine for the named algorithm.
    ///
    /// # Errors
    /// Returns [`CrcError::UnknownAlgorithm`] if the name is absent.
    pub fn engine(&self, name: &str) -> CrcResult<CrcEngine> {
        Ok(CrcEngine::new(self.get(name)?))
    }

    /// Compute the named CRC of `data` in one call.
    ///
    /// # Errors
    /// Returns [`CrcError::UnknownAlgorithm`] if the name is absent.
    pub fn checksum(&self, name: &str, data: impl AsRef<[u8]>) -> CrcResult<String> {
        let mut engine = self.engine(name)?;
        engine.update(data);
        Ok(engine.finalize())
    }
}

/// The process-wide default registry, seeded with the standard catalogue
/// exactly once on first access.
pub fn default_registry() -> &'static CrcRegistry {
    static DEFAULT: OnceLock<CrcRegistry> = OnceLock::new();
    DEFAULT.get_or_init(CrcRegistry::with_standard_catalog)
}
