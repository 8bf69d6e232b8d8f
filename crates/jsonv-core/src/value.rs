//! The polymorphic JSON value.
//!
//! [`Value`] holds exactly one of the seven [`Kind`]s. Scalars live inline;
//! strings, arrays and objects own a single heap payload that is never shared
//! with another value. Copying a value deep-clones its whole sub-tree, moving
//! it out with [`Value::take`] leaves `Null` behind.
//!
//! # Example
//! ```
//! use jsonv_core::{object, Kind, Value};
//!
//! let mut doc = object();
//! doc.insert("b", 2).unwrap();
//! doc.insert("a", "one").unwrap();
//! assert_eq!(doc.kind(), Kind::Object);
//! assert_eq!(doc.to_string(), r#"{"a":"one","b":2}"#);
//!
//! let copy = doc.clone();
//! *doc.entry("a").unwrap() = Value::Null;
//! assert_eq!(copy.at("a").unwrap().as_str().unwrap(), "one");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;
use std::ptr;

use crate::array::Array;
use crate::cursor::ObjectCursor;
use crate::error::{Error, Result};
use crate::kind::{check_kind, Kind};
use crate::object::Object;
use crate::view::{ConstObjectView, ObjectView, OwningObjectView};
use crate::writer;

/// A JSON value: null, boolean, integer, decimal, string, array or object.
#[derive(Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    Array(Box<Array>),
    Object(Box<Object>),
}

/// An empty object-kind value.
pub fn object() -> Value {
    Value::Object(Box::default())
}

/// An object-kind value built from `pairs`. On duplicate keys the first
/// occurrence wins.
pub fn object_from<I, K, V>(pairs: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    Value::Object(Box::new(pairs.into_iter().collect()))
}

/// An empty array-kind value.
pub fn array() -> Value {
    Value::Array(Box::default())
}

/// An array-kind value holding `items` in order.
pub fn array_from<I, V>(items: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Value::Array(Box::new(items.into_iter().collect()))
}

impl Value {
    /// The discriminant of the active payload.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Decimal(_) => Kind::Decimal,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Fail with [`Error::TypeMismatch`] unless this value is of `kind`.
    pub fn expect_kind(&self, kind: Kind) -> Result<()> {
        check_kind(kind, self.kind())
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    // ------------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------------

    pub fn as_boolean(&self) -> Result<bool> {
        match *self {
            Value::Boolean(b) => Ok(b),
            _ => Err(self.mismatch(Kind::Boolean)),
        }
    }

    pub fn as_boolean_mut(&mut self) -> Result<&mut bool> {
        match self {
            Value::Boolean(b) => Ok(b),
            _ => Err(self.mismatch(Kind::Boolean)),
        }
    }

    /// The integer payload. A decimal value is a mismatch even when it holds
    /// a whole number.
    pub fn as_integer(&self) -> Result<i64> {
        match *self {
            Value::Integer(i) => Ok(i),
            _ => Err(self.mismatch(Kind::Integer)),
        }
    }

    pub fn as_integer_mut(&mut self) -> Result<&mut i64> {
        match self {
            Value::Integer(i) => Ok(i),
            _ => Err(self.mismatch(Kind::Integer)),
        }
    }

    pub fn as_decimal(&self) -> Result<f64> {
        match *self {
            Value::Decimal(d) => Ok(d),
            _ => Err(self.mismatch(Kind::Decimal)),
        }
    }

    pub fn as_decimal_mut(&mut self) -> Result<&mut f64> {
        match self {
            Value::Decimal(d) => Ok(d),
            _ => Err(self.mismatch(Kind::Decimal)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    // ------------------------------------------------------------------------
    // Copy and move
    // ------------------------------------------------------------------------

    /// Deep copy that reports a failed buffer reservation instead of
    /// aborting.
    ///
    /// String bytes, array slots and object entry tables are reserved with
    /// `try_reserve`, and a failure there comes back as
    /// [`Error::Allocation`]. The small fixed-size box that wraps each nested
    /// array or object is still allocated with `Box::new`, which aborts on
    /// out-of-memory like any other std allocation.
    pub fn try_clone(&self) -> Result<Value> {
        Ok(match self {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Integer(i) => Value::Integer(*i),
            Value::Decimal(d) => Value::Decimal(*d),
            Value::String(s) => Value::String(try_clone_str(s)?),
            Value::Array(a) => Value::Array(Box::new(a.try_clone()?)),
            Value::Object(o) => Value::Object(Box::new(o.try_clone()?)),
        })
    }

    /// Replace this value with a deep copy of `source`.
    ///
    /// The current payload is released before the copy starts. If a buffer
    /// reservation fails (see [`try_clone`](Self::try_clone)), `self` is left
    /// as `Null` and the error is returned.
    pub fn assign_from(&mut self, source: &Value) -> Result<()> {
        *self = Value::Null;
        match source.try_clone() {
            Ok(copy) => {
                *self = copy;
                Ok(())
            }
            Err(err) => {
                log::debug!("copy of {} value failed, destination reset to null: {err}", source.kind());
                Err(err)
            }
        }
    }

    /// Move the payload out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Take over the payload of `source`, leaving `source` as `Null`.
    pub fn move_from(&mut self, source: &mut Value) {
        *self = mem::take(source);
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    /// Three-way structural comparison.
    ///
    /// Values of different kinds order by kind. Arrays compare element-wise
    /// then by length; objects compare entry-wise in key order, see
    /// [`Object::compare`].
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.compare(b),
            (Value::Object(a), Value::Object(b)) => a.compare(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    // ------------------------------------------------------------------------
    // Object access
    // ------------------------------------------------------------------------

    /// Strict lookup of `key` in an object value.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.as_object()?.at(key)
    }

    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?.at_mut(key)
    }

    /// Insert-or-get: the value under `key`, inserting `Null` first if the
    /// key is absent.
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        Ok(self.as_object_mut()?.entry(key))
    }

    pub fn count(&self, key: &str) -> Result<usize> {
        Ok(self.as_object()?.count(key))
    }

    pub fn find(&self, key: &str) -> Result<ObjectCursor<'_>> {
        Ok(self.as_object()?.find(key))
    }

    /// Insert unless `key` is already present. Returns whether the insert
    /// happened.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<bool> {
        let (_, inserted) = self.as_object_mut()?.insert(key, value);
        Ok(inserted)
    }

    /// Remove `key`, returning how many entries were removed (0 or 1).
    pub fn erase(&mut self, key: &str) -> Result<usize> {
        Ok(self.as_object_mut()?.erase(key))
    }

    pub fn begin_object(&self) -> Result<ObjectCursor<'_>> {
        Ok(self.as_object()?.cursor_front())
    }

    pub fn end_object(&self) -> Result<ObjectCursor<'_>> {
        Ok(self.as_object()?.cursor_end())
    }

    /// Read-only view over the entries of an object value.
    pub fn object_view(&self) -> Result<ConstObjectView<'_>> {
        Ok(self.as_object()?.view())
    }

    /// Mutable view over the entries of an object value.
    pub fn object_view_mut(&mut self) -> Result<ObjectView<'_>> {
        Ok(self.as_object_mut()?.view_mut())
    }

    /// Consume an object value into a view that owns it.
    pub fn into_object_view(self) -> Result<OwningObjectView> {
        match self {
            Value::Object(object) => Ok(OwningObjectView::new(object)),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    // ------------------------------------------------------------------------
    // Array access
    // ------------------------------------------------------------------------

    /// Append to an array value.
    pub fn push_back(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_array_mut()?.push_back(value);
        Ok(())
    }

    /// Strict positional lookup in an array value.
    pub fn at_index(&self, index: usize) -> Result<&Value> {
        self.as_array()?.at(index)
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Write the JSON text of this value to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

fn try_clone_str(source: &str) -> Result<String> {
    let mut copy = String::new();
    copy.try_reserve_exact(source.len())?;
    copy.push_str(source);
    Ok(copy)
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Integer(i) => Value::Integer(*i),
            Value::Decimal(d) => Value::Decimal(*d),
            Value::String(s) => Value::String(s.clone()),
            Value::Array(a) => Value::Array(a.clone()),
            Value::Object(o) => Value::Object(o.clone()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Release first: a copy that panics part-way leaves `self` as Null.
        *self = Value::Null;
        *self = source.clone();
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        // Same instance is always equal, even for a NaN decimal.
        if ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_value(f, self)
    }
}

// ----------------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Integer(i64::from(i))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Decimal(d)
    }
}

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Decimal(f64::from(d))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(Box::new(a))
    }
}

/// Deep clone of the whole array.
impl From<&Array> for Value {
    fn from(a: &Array) -> Self {
        Value::Array(Box::new(a.clone()))
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(Box::new(o))
    }
}

/// Deep clone of the whole object.
impl From<&Object> for Value {
    fn from(o: &Object) -> Self {
        Value::Object(Box::new(o.clone()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        array_from(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
