//! Reflex - runtime class registry with reflective invocation
//!
//! This crate provides the minimal machinery for looking up a type by name at
//! run time, constructing an instance of it, and invoking a method on that
//! instance through a dynamically resolved handle.
//!
//! A class participates by implementing [`Reflect`] and registering a
//! [`ClassDef`] describing its constructor and methods:
//!
//! ```ignore
//! use reflex_core::{ClassDef, ClassRegistry, Reflect};
//!
//! struct Greeter;
//!
//! impl Reflect for Greeter {
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//!     fn class_name(&self) -> &str { "Greeter" }
//! }
//!
//! let registry = ClassRegistry::new();
//! registry.register(
//!     ClassDef::builder("Greeter")
//!         .constructor(|| Ok(Box::new(Greeter)))
//!         .method("greet", |recv| {
//!             println!("hello");
//!             Ok(())
//!         })
//!         .build(),
//! );
//!
//! let obj = registry.instantiate("Greeter")?;
//! let handle = registry.resolve("Greeter")?.method("greet")?;
//! handle.invoke(obj.as_ref())?;
//! ```

#![warn(missing_docs)]

mod class;
mod error;
mod handle;
mod object;
mod registry;

pub use class::{ClassBuilder, ClassDef, Visibility};
pub use error::{ReflectError, Result};
pub use handle::{ConstructorHandle, MethodHandle};
pub use object::{downcast_ref, Instance, Reflect};
pub use registry::ClassRegistry;
