//! Name-keyed registry of installed reaction networks
//!
//! Engines select a model by a short stable key rather than linking the
//! concrete type. Networks are stateless once built, so the registry holds
//! one boxed instance per key and hands out shared borrows; a single
//! registry serves any number of concurrent trajectories.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::error::Result;
use crate::network::{BirthDeath, LacGfp8, ModelInfo, ReactionNetwork};

/// Registry key of the builtin [`LacGfp8`] model
pub const KEY_LACGFP8: &str = "lacgfp8";
/// Registry key of the builtin [`BirthDeath`] model
pub const KEY_BIRTH_DEATH: &str = "birth-death";

/// Maps stable string keys to installed model instances
#[derive(Default)]
pub struct NetworkRegistry {
    models: BTreeMap<String, Box<dyn ReactionNetwork>>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    /// Create a registry with every builtin model installed
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(KEY_LACGFP8, Box::new(LacGfp8::new()?));
        registry.register(KEY_BIRTH_DEATH, Box::new(BirthDeath::new()?));
        Ok(registry)
    }

    /// Install a model under `key`, replacing any previous holder
    pub fn register(&mut self, key: &str, model: Box<dyn ReactionNetwork>) {
        if self.models.contains_key(key) {
            warn!("replacing model registered under '{}'", key);
        }
        debug!("registering '{}' -> {}", key, model.name());
        self.models.insert(key.to_string(), model);
    }

    /// Look up a model by key
    pub fn get(&self, key: &str) -> Option<&dyn ReactionNetwork> {
        self.models.get(key).map(|model| model.as_ref())
    }

    /// Metadata for the model under `key`, if installed
    pub fn info(&self, key: &str) -> Option<ModelInfo> {
        self.models.get(key).map(|model| model.info())
    }

    /// Check whether a key is installed
    pub fn contains(&self, key: &str) -> bool {
        self.models.contains_key(key)
    }

    /// Installed keys in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Number of installed models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for NetworkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkRegistry")
            .field("models", &self.names())
            .finish()
    }
}
