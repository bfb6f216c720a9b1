//! Method and constructor handles
//!
//! A handle is an opaque reference to one callable member, obtained by name
//! lookup on a [`ClassDef`](crate::ClassDef) and independent of any
//! particular instance. Handles own an `Arc` of the implementation, so they
//! stay valid after the registry or class definition is dropped.

use crate::class::{ConstructorFn, MethodFn};
use crate::error::{ReflectError, Result};
use crate::object::{Instance, Reflect};

/// Handle to a public zero-argument method of a registered class
pub struct MethodHandle {
    class_name: String,
    name: String,
    func: MethodFn,
}

impl MethodHandle {
    pub(crate) fn new(class_name: String, name: String, func: MethodFn) -> Self {
        Self {
            class_name,
            name,
            func,
        }
    }

    /// Name of the class this handle was resolved on
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the method against an instance.
    ///
    /// The receiver must be an instance of the declaring class; anything else
    /// fails with `TypeMismatch` before the method body runs. An error from
    /// the body itself surfaces as `InvocationFailure`.
    pub fn invoke(&self, recv: &dyn Reflect) -> Result<()> {
        if recv.class_name() != self.class_name {
            return Err(ReflectError::TypeMismatch {
                expected: self.class_name.clone(),
                got: recv.class_name().to_string(),
            });
        }
        (self.func)(recv).map_err(|message| ReflectError::InvocationFailure {
            class: self.class_name.clone(),
            method: self.name.clone(),
            message,
        })
    }
}

impl std::fmt::Debug for MethodHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodHandle")
            .field("class", &self.class_name)
            .field("name", &self.name)
            .finish()
    }
}

/// Handle to the zero-argument constructor of a registered class
pub struct ConstructorHandle {
    class_name: String,
    func: ConstructorFn,
}

impl ConstructorHandle {
    pub(crate) fn new(class_name: String, func: ConstructorFn) -> Self {
        Self { class_name, func }
    }

    /// Name of the class this handle constructs
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Construct a fresh instance.
    ///
    /// An error from the constructor body surfaces as `InstantiationFailure`.
    pub fn new_instance(&self) -> Result<Instance> {
        (self.func)().map_err(|message| ReflectError::InstantiationFailure {
            class: self.class_name.clone(),
            message,
        })
    }
}

impl std::fmt::Debug for ConstructorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructorHandle")
            .field("class", &self.class_name)
            .finish()
    }
}
