//! DeepEq Core - structural equality for object graphs
//!
//! This crate decides whether two values have the same public structure,
//! including:
//! - Type classification into scalar, sequence and composite kinds
//! - Comparators for each kind with null handling and numeric tolerance
//! - Ignore lists of simple field names applied at every depth
//! - Cycle and depth guards for arbitrary object graphs
//! - A mismatch trace emitted through the structured logging facility
//! - `Inspect` impls for std types and `serde_json::Value` documents
//!
//! ```
//! use deepeq_core::{deep_eq, deep_eq_ignoring, inspect_composite};
//!
//! #[derive(Debug)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     roles: Vec<String>,
//! }
//!
//! inspect_composite!(User {
//!     id: u64,
//!     name: String,
//!     roles: Vec<String>,
//! });
//!
//! let a = User { id: 1, name: "ada".into(), roles: vec!["admin".into()] };
//! let b = User { id: 2, name: "ada".into(), roles: vec!["admin".into()] };
//! assert!(!deep_eq(&a, &b));
//! assert!(deep_eq_ignoring(&a, &b, ["id"]));
//! ```

pub mod classify;
pub mod compare;
pub mod errors;
pub mod inspect;
pub mod logging_facility;
pub mod options;

mod macros;

pub use deepeq_core_types as core_types;

// Re-export commonly used types
pub use classify::{classify, Capabilities, TypeInfo, TypeKind};
pub use compare::{compare_objects, deep_eq, deep_eq_ignoring, Comparer, Outcome};
pub use errors::{DeepEqError, ExError, ExErrorKind, Result};
pub use inspect::{DynEq, DynOrd, FieldDescriptor, Inspect, Scalar};
pub use options::{CompareOptions, CyclePolicy, IgnoreSet};
