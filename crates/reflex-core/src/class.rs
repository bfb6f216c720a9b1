//! Class definitions for reflection
//!
//! A [`ClassDef`] stores the reflection metadata for one class: its run-time
//! name, an optional zero-argument constructor, and a method table keyed by
//! name. Definitions are assembled with [`ClassBuilder`] and then registered
//! in a [`ClassRegistry`](crate::ClassRegistry).

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{ReflectError, Result};
use crate::handle::{ConstructorHandle, MethodHandle};
use crate::object::{Instance, Reflect};

/// Constructor implementation: produces a fresh instance or an error message
pub(crate) type ConstructorFn =
    Arc<dyn Fn() -> std::result::Result<Instance, String> + Send + Sync>;

/// Method implementation: runs against a dynamic receiver
pub(crate) type MethodFn =
    Arc<dyn Fn(&dyn Reflect) -> std::result::Result<(), String> + Send + Sync>;

/// Visibility of a class member.
///
/// Resolution primitives (`method`, `constructor`, `new_instance`) only hand
/// out handles to public members; looking up a private member fails with
/// `AccessDenied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Resolvable through the registry
    Public,
    /// Registered but not resolvable
    Private,
}

pub(crate) struct ConstructorDef {
    pub(crate) visibility: Visibility,
    pub(crate) func: ConstructorFn,
}

pub(crate) struct MethodDef {
    pub(crate) visibility: Visibility,
    pub(crate) func: MethodFn,
}

/// Reflection metadata for a single class
pub struct ClassDef {
    name: String,
    constructor: Option<ConstructorDef>,
    methods: FxHashMap<String, MethodDef>,
}

impl ClassDef {
    /// Start building a class definition with the given run-time name
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            constructor: None,
            methods: FxHashMap::default(),
        }
    }

    /// Run-time name of this class
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if a method is registered (regardless of visibility)
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names of all registered methods
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(|s| s.as_str()).collect()
    }

    /// Resolve a public zero-argument method by name.
    ///
    /// The returned [`MethodHandle`] is independent of any instance and can
    /// be invoked against any object of this class.
    pub fn method(&self, name: &str) -> Result<MethodHandle> {
        let def = self
            .methods
            .get(name)
            .ok_or_else(|| ReflectError::MethodNotFound {
                class: self.name.clone(),
                method: name.to_string(),
            })?;
        if def.visibility != Visibility::Public {
            return Err(ReflectError::AccessDenied {
                class: self.name.clone(),
                member: name.to_string(),
            });
        }
        Ok(MethodHandle::new(
            self.name.clone(),
            name.to_string(),
            def.func.clone(),
        ))
    }

    /// Resolve the explicit zero-argument constructor of this class
    pub fn constructor(&self) -> Result<ConstructorHandle> {
        let def = self
            .constructor
            .as_ref()
            .ok_or_else(|| ReflectError::NoConstructor(self.name.clone()))?;
        if def.visibility != Visibility::Public {
            return Err(ReflectError::AccessDenied {
                class: self.name.clone(),
                member: "constructor".to_string(),
            });
        }
        Ok(ConstructorHandle::new(self.name.clone(), def.func.clone()))
    }

    /// Default-construction shortcut: resolve the constructor and invoke it
    /// in one step
    pub fn new_instance(&self) -> Result<Instance> {
        self.constructor()?.new_instance()
    }
}

impl std::fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("has_constructor", &self.constructor.is_some())
            .field("method_count", &self.methods.len())
            .finish()
    }
}

/// Fluent builder for [`ClassDef`]
pub struct ClassBuilder {
    name: String,
    constructor: Option<ConstructorDef>,
    methods: FxHashMap<String, MethodDef>,
}

impl ClassBuilder {
    /// Register a public zero-argument constructor
    pub fn constructor(
        self,
        f: impl Fn() -> std::result::Result<Instance, String> + Send + Sync + 'static,
    ) -> Self {
        self.constructor_with(Visibility::Public, f)
    }

    /// Register a zero-argument constructor with explicit visibility
    pub fn constructor_with(
        mut self,
        visibility: Visibility,
        f: impl Fn() -> std::result::Result<Instance, String> + Send + Sync + 'static,
    ) -> Self {
        self.constructor = Some(ConstructorDef {
            visibility,
            func: Arc::new(f),
        });
        self
    }

    /// Register a public constructor backed by the type's `Default` impl
    pub fn default_constructor<T: Reflect + Default>(self) -> Self {
        self.constructor(|| Ok(Box::new(T::default())))
    }

    /// Register a public method
    pub fn method(
        self,
        name: impl Into<String>,
        f: impl Fn(&dyn Reflect) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.method_with(name, Visibility::Public, f)
    }

    /// Register a method with explicit visibility
    pub fn method_with(
        mut self,
        name: impl Into<String>,
        visibility: Visibility,
        f: impl Fn(&dyn Reflect) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.methods.insert(
            name.into(),
            MethodDef {
                visibility,
                func: Arc::new(f),
            },
        );
        self
    }

    /// Finish building the class definition
    pub fn build(self) -> ClassDef {
        ClassDef {
            name: self.name,
            constructor: self.constructor,
            methods: self.methods,
        }
    }
}
