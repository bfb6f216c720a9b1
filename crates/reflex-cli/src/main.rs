//! Reflective invocation demonstrator
//!
//! Constructs an instance of the registered class `A` through three
//! independent pathways and invokes its `method` on each, printing `here`
//! once per pathway:
//!
//! 1. resolve by name, default-construct, look up a method handle, invoke it
//! 2. resolve by name, default-construct, downcast, call statically
//! 3. resolve an explicit constructor handle, construct, call statically
//!
//! Command-line arguments are accepted and ignored. Any failing reflective
//! step aborts the process with a non-zero status and a diagnostic naming
//! the step.

use std::any::Any;

use anyhow::Context;
use reflex_core::{downcast_ref, ClassDef, ClassRegistry, Reflect};

struct A;

impl A {
    fn method(&self) {
        println!("here");
    }
}

impl Reflect for A {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn class_name(&self) -> &str {
        "A"
    }
}

fn demo_registry() -> ClassRegistry {
    let registry = ClassRegistry::new();
    registry.register(
        ClassDef::builder("A")
            .constructor(|| Ok(Box::new(A)))
            .method("method", |recv| {
                downcast_ref::<A>(recv).map_err(|e| e.to_string())?.method();
                Ok(())
            })
            .build(),
    );
    registry
}

fn run(registry: &ClassRegistry) -> anyhow::Result<()> {
    // Path 1: dynamic method lookup and dynamic invocation
    let class = registry
        .resolve("A")
        .context("path 1: resolving class by name")?;
    let obj = class
        .new_instance()
        .context("path 1: default-constructing instance")?;
    let handle = class
        .method("method")
        .context("path 1: resolving method handle")?;
    handle
        .invoke(obj.as_ref())
        .context("path 1: invoking method handle")?;

    // Path 2: dynamic construction, static call after downcast
    let obj = registry
        .instantiate("A")
        .context("path 2: instantiating class by name")?;
    let a: &A = downcast_ref(obj.as_ref()).context("path 2: downcasting instance")?;
    a.method();

    // Path 3: explicit constructor handle, static call
    let ctor = class
        .constructor()
        .context("path 3: resolving constructor handle")?;
    let obj = ctor
        .new_instance()
        .context("path 3: constructing through handle")?;
    downcast_ref::<A>(obj.as_ref())
        .context("path 3: downcasting instance")?
        .method();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    run(&demo_registry())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_registry_contents() {
        let registry = demo_registry();
        assert!(registry.contains("A"));

        let class = registry.resolve("A").unwrap();
        assert!(class.has_method("method"));
        assert!(class.constructor().is_ok());
    }

    #[test]
    fn test_all_paths_succeed() {
        run(&demo_registry()).unwrap();
    }

    #[test]
    fn test_instances_answer_to_class_name() {
        let registry = demo_registry();
        let obj = registry.instantiate("A").unwrap();
        assert_eq!(obj.class_name(), "A");
        assert!(downcast_ref::<A>(obj.as_ref()).is_ok());
    }
}
