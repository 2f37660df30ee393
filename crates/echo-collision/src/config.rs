// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision tuning and the port it is persisted through.
//!
//! The crate ships only an in-process store; hosts that keep settings
//! elsewhere implement [`ConfigStore`] over their own storage.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning knobs applied to entity sweep queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollisionConfig {
    /// Extra proximity margin added to every query, in blocks. Covers targets
    /// whose boxes reach farther from their anchor than the mover can see.
    pub extend_radius: f64,
}

impl CollisionConfig {
    /// Store key the config is persisted under.
    pub const KEY: &'static str = "entity-collision";

    /// Checks that every field is usable by a query.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.extend_radius.is_finite() || self.extend_radius < 0.0 {
            return Err(ConfigError::Invalid("extend_radius"));
        }
        Ok(())
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates and renders the config as pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        self.validate()?;
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self { extend_radius: 0.0 }
    }
}

/// Failures while loading or saving [`CollisionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The stored document is not valid JSON for the config.
    #[error("malformed collision config: {0}")]
    Serde(#[from] serde_json::Error),
    /// A field is out of range.
    #[error("invalid config field: {0}")]
    Invalid(&'static str),
    /// The backing store failed.
    #[error("config store: {0}")]
    Store(String),
}

/// Where serialized collision configs live, keyed by name.
pub trait ConfigStore {
    /// Raw document for `key`, or `None` if nothing was saved.
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Replaces the document for `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Loads and saves [`CollisionConfig`] through a [`ConfigStore`].
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Stored config, or the default when none was saved or the document is
    /// empty.
    pub fn load(&self) -> Result<CollisionConfig, ConfigError> {
        match self.store.load_raw(CollisionConfig::KEY)? {
            Some(bytes) if !bytes.is_empty() => CollisionConfig::from_json(&bytes),
            _ => Ok(CollisionConfig::default()),
        }
    }

    /// Validates and persists `config`.
    pub fn save(&self, config: &CollisionConfig) -> Result<(), ConfigError> {
        let data = config.to_json()?;
        self.store.save_raw(CollisionConfig::KEY, &data)
    }
}

/// In-process [`ConfigStore`] for tests and embedded hosts.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    docs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        let docs = self
            .docs
            .lock()
            .map_err(|_| ConfigError::Store("lock poisoned".into()))?;
        Ok(docs.get(key).cloned())
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut docs = self
            .docs
            .lock()
            .map_err(|_| ConfigError::Store("lock poisoned".into()))?;
        docs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
