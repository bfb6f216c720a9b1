//! Class registry: name-based class resolution
//!
//! The registry maps run-time class names to [`ClassDef`]s. Resolving a name
//! is the entry point of every reflective pathway; a name that does not
//! resolve fails with `ClassNotFound` before any construction or invocation
//! takes place.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::class::ClassDef;
use crate::error::{ReflectError, Result};
use crate::object::Instance;

/// Registry of classes indexed by run-time name.
///
/// Registration takes `&self`; the table is behind an `RwLock` so a shared
/// registry can be populated and queried from anywhere without external
/// synchronization.
pub struct ClassRegistry {
    classes: RwLock<FxHashMap<String, Arc<ClassDef>>>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: RwLock::new(FxHashMap::default()),
        }
    }

    /// Register a class definition, replacing any previous definition of the
    /// same name. Returns the shared handle to the stored definition.
    pub fn register(&self, class: ClassDef) -> Arc<ClassDef> {
        let class = Arc::new(class);
        self.classes
            .write()
            .insert(class.name().to_string(), class.clone());
        class
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<Arc<ClassDef>> {
        self.classes.read().get(name).cloned()
    }

    /// Resolve a class by name, failing with `ClassNotFound` if absent
    pub fn resolve(&self, name: &str) -> Result<Arc<ClassDef>> {
        self.get(name)
            .ok_or_else(|| ReflectError::ClassNotFound(name.to_string()))
    }

    /// Resolve a class by name and default-construct an instance of it
    pub fn instantiate(&self, name: &str) -> Result<Instance> {
        self.resolve(name)?.new_instance()
    }

    /// Check if a class is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.read().contains_key(name)
    }

    /// Names of all registered classes
    pub fn class_names(&self) -> Vec<String> {
        self.classes.read().keys().cloned().collect()
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("count", &self.len())
            .finish()
    }
}
