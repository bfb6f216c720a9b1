//! Error types for reflective operations

/// Result type for reflective operations
pub type Result<T> = std::result::Result<T, ReflectError>;

/// Errors raised by class resolution, construction, and invocation.
///
/// Each variant corresponds to one reflective step category. None are
/// recovered inside this crate; callers propagate them to the process
/// boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReflectError {
    /// No class registered under the given name
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// Class exists but has no method of the given name
    #[error("no such method `{method}` on class `{class}`")]
    MethodNotFound {
        /// Declaring class name
        class: String,
        /// Requested method name
        method: String,
    },

    /// Class was registered without a zero-argument constructor
    #[error("class `{0}` has no constructor")]
    NoConstructor(String),

    /// Member exists but is not public
    #[error("access denied: `{member}` of class `{class}` is not public")]
    AccessDenied {
        /// Declaring class name
        class: String,
        /// Member name (method name, or `constructor`)
        member: String,
    },

    /// Constructor ran and reported an error
    #[error("instantiation of class `{class}` failed: {message}")]
    InstantiationFailure {
        /// Class being constructed
        class: String,
        /// Error reported by the constructor
        message: String,
    },

    /// Method body ran and reported an error
    #[error("invocation of `{class}.{method}` failed: {message}")]
    InvocationFailure {
        /// Declaring class name
        class: String,
        /// Invoked method name
        method: String,
        /// Error reported by the method body
        message: String,
    },

    /// Downcast or receiver check failed
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },
}
