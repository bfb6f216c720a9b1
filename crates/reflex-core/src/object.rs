//! Instance model for reflectively constructed objects
//!
//! Constructors produce `Box<dyn Reflect>` values. Callers either keep them
//! dynamic (and dispatch through a [`MethodHandle`](crate::MethodHandle)) or
//! recover the concrete type with [`downcast_ref`] and call methods directly.

use std::any::Any;

use crate::error::{ReflectError, Result};

/// Trait implemented by types that participate in the class registry.
///
/// `as_any` is the downcast seam; `class_name` is the name the instance
/// answers to at run time and must match the name its
/// [`ClassDef`](crate::ClassDef) was registered under.
pub trait Reflect: Any + Send + Sync {
    /// Upcast to `Any` for downcasting to the concrete type
    fn as_any(&self) -> &dyn Any;

    /// Run-time class name of this instance
    fn class_name(&self) -> &str;
}

/// An object produced by reflective construction
pub type Instance = Box<dyn Reflect>;

/// Downcast a dynamic instance to its statically-known concrete type.
///
/// Fails with [`ReflectError::TypeMismatch`] if the instance is of a
/// different type.
pub fn downcast_ref<T: Reflect>(obj: &dyn Reflect) -> Result<&T> {
    obj.as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| ReflectError::TypeMismatch {
            expected: std::any::type_name::<T>().to_string(),
            got: obj.class_name().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Point {
        x: i32,
    }

    impl Reflect for Point {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn class_name(&self) -> &str {
            "Point"
        }
    }

    struct Other;

    impl Reflect for Other {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn class_name(&self) -> &str {
            "Other"
        }
    }

    #[test]
    fn test_downcast_ref_matching_type() {
        let obj: Instance = Box::new(Point { x: 7 });
        let point = downcast_ref::<Point>(obj.as_ref()).unwrap();
        assert_eq!(point.x, 7);
    }

    #[test]
    fn test_downcast_ref_wrong_type() {
        let obj: Instance = Box::new(Other);
        let err = downcast_ref::<Point>(obj.as_ref()).unwrap_err();
        match err {
            ReflectError::TypeMismatch { got, .. } => assert_eq!(got, "Other"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
