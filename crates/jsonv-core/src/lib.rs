//! # jsonv-core
//!
//! The value core of a JSON document library: one polymorphic [`Value`] type
//! holding exactly one of null, boolean, 64-bit integer, decimal, string,
//! array or object, with deep-copy value semantics, structural equality and
//! ordering, and compact JSON text output.
//!
//! Objects keep their keys sorted. Iteration, comparison and serialization
//! all see entries in ascending key order, never in insertion order.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonv_core::{array_from, object, Value};
//!
//! let mut doc = object();
//! doc.insert("tags", array_from(["rust", "json"])).unwrap();
//! doc.insert("id", 7).unwrap();
//! assert_eq!(doc.to_string(), r#"{"id":7,"tags":["rust","json"]}"#);
//!
//! // First write wins.
//! assert!(!doc.insert("id", 8).unwrap());
//! assert_eq!(doc.at("id").unwrap().as_integer().unwrap(), 7);
//!
//! // Moving out leaves null behind.
//! let mut src = Value::from("text");
//! let dst = src.take();
//! assert!(src.is_null());
//! assert_eq!(dst.as_str().unwrap(), "text");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tagged union and its free constructors
//! - [`kind`] — `Kind` discriminant and the `check_kind` guard
//! - [`object`] — key-sorted `Object` storage
//! - [`array`] — ordered `Array` storage
//! - [`cursor`] — bidirectional cursors over object entries
//! - [`view`] — borrowed, mutable and owning views over object entries
//! - [`writer`] — JSON text output behind `Display`
//! - [`escape`] — JSON string escaping
//! - [`error`] — error types

pub mod array;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod kind;
pub mod object;
pub mod value;
pub mod view;
pub mod writer;

#[cfg(feature = "serde")]
mod interop;

pub use array::Array;
pub use cursor::{ObjectCursor, ObjectCursorMut, ObjectPosition};
pub use error::{Error, Result};
pub use kind::{check_kind, describe, kind_is_valid, Kind};
pub use object::Object;
pub use value::{array, array_from, object, object_from, Value};
pub use view::{ConstObjectView, ObjectView, OwningObjectView};
pub use writer::to_json_string;
