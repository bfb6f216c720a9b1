//! Integration tests for the three reflective invocation pathways
//!
//! A probe class records every invocation into a shared log, so the tests can
//! assert that all pathways produce identical observable effects in order.

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use reflex_core::{downcast_ref, ClassDef, ClassRegistry, Reflect, ReflectError};

type Log = Arc<Mutex<Vec<String>>>;

struct Probe {
    log: Log,
}

impl Probe {
    fn speak(&self) {
        self.log.lock().push("here".to_string());
    }
}

impl Reflect for Probe {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn class_name(&self) -> &str {
        "Probe"
    }
}

fn probe_registry(log: Log) -> ClassRegistry {
    let registry = ClassRegistry::new();
    let ctor_log = log;
    registry.register(
        ClassDef::builder("Probe")
            .constructor(move || {
                Ok(Box::new(Probe {
                    log: ctor_log.clone(),
                }))
            })
            .method("speak", |recv| {
                let probe = downcast_ref::<Probe>(recv).map_err(|e| e.to_string())?;
                probe.speak();
                Ok(())
            })
            .build(),
    );
    registry
}

/// Path 1: resolve the class, default-construct, resolve a method handle by
/// name, invoke the handle against the instance.
fn path_dynamic_lookup(registry: &ClassRegistry) -> reflex_core::Result<()> {
    let class = registry.resolve("Probe")?;
    let obj = class.new_instance()?;
    let handle = class.method("speak")?;
    handle.invoke(obj.as_ref())
}

/// Path 2: resolve and default-construct, then downcast to the concrete type
/// and call the method through static binding.
fn path_static_cast(registry: &ClassRegistry) -> reflex_core::Result<()> {
    let obj = registry.instantiate("Probe")?;
    let probe: &Probe = downcast_ref(obj.as_ref())?;
    probe.speak();
    Ok(())
}

/// Path 3: resolve an explicit constructor handle, construct through it, then
/// call the method through static binding.
fn path_constructor_handle(registry: &ClassRegistry) -> reflex_core::Result<()> {
    let class = registry.resolve("Probe")?;
    let ctor = class.constructor()?;
    let obj = ctor.new_instance()?;
    downcast_ref::<Probe>(obj.as_ref())?.speak();
    Ok(())
}

#[test]
fn three_paths_produce_identical_output() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let registry = probe_registry(log.clone());

    path_dynamic_lookup(&registry).unwrap();
    path_static_cast(&registry).unwrap();
    path_constructor_handle(&registry).unwrap();

    let entries = log.lock();
    assert_eq!(entries.as_slice(), ["here", "here", "here"]);
}

#[test]
fn unknown_class_fails_before_any_output() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let registry = probe_registry(log.clone());

    let err = registry.resolve("Missing").unwrap_err();
    assert!(matches!(err, ReflectError::ClassNotFound(_)));
    assert!(log.lock().is_empty());
}

#[test]
fn missing_method_breaks_dynamic_lookup_only() {
    // Class resolvable, but the method was never registered: the dynamic
    // lookup path fails while statically bound calls are unaffected.
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let registry = ClassRegistry::new();
    let ctor_log = log.clone();
    registry.register(
        ClassDef::builder("Probe")
            .constructor(move || {
                Ok(Box::new(Probe {
                    log: ctor_log.clone(),
                }))
            })
            .build(),
    );

    let err = path_dynamic_lookup(&registry).unwrap_err();
    assert!(matches!(err, ReflectError::MethodNotFound { .. }));
    assert!(log.lock().is_empty());

    path_static_cast(&registry).unwrap();
    assert_eq!(log.lock().as_slice(), ["here"]);
}

#[test]
fn each_path_constructs_a_fresh_instance() {
    struct Tally;

    impl Reflect for Tally {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn class_name(&self) -> &str {
            "Tally"
        }
    }

    let constructed: Log = Arc::new(Mutex::new(Vec::new()));
    let registry = ClassRegistry::new();
    let ctor_log = constructed.clone();
    registry.register(
        ClassDef::builder("Tally")
            .constructor(move || {
                ctor_log.lock().push("new".to_string());
                Ok(Box::new(Tally))
            })
            .method("noop", |_recv| Ok(()))
            .build(),
    );

    let class = registry.resolve("Tally").unwrap();
    let a = class.new_instance().unwrap();
    let b = registry.instantiate("Tally").unwrap();
    let c = class.constructor().unwrap().new_instance().unwrap();
    drop((a, b, c));

    assert_eq!(constructed.lock().len(), 3);
}
