//! The closed set of value kinds and the guards built on it.

use std::fmt;

use crate::error::{Error, Result};

/// Discriminant identifying which payload a [`Value`](crate::Value) holds.
///
/// The declaration order is the cross-kind sort order used by
/// [`Value::compare`](crate::Value::compare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Kind {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    Decimal = 3,
    String = 4,
    Array = 5,
    Object = 6,
}

impl Kind {
    /// Every kind, in discriminant order.
    pub const ALL: [Kind; 7] = [
        Kind::Null,
        Kind::Boolean,
        Kind::Integer,
        Kind::Decimal,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ];

    /// Diagnostic name for this kind, used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Decimal => "decimal",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Whether this kind stores its payload on the heap.
    pub fn is_heap(self) -> bool {
        matches!(self, Kind::String | Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        Kind::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(Error::InvalidKindState(raw))
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> u8 {
        kind as u8
    }
}

/// Diagnostic name for `kind`.
pub fn describe(kind: Kind) -> &'static str {
    kind.describe()
}

/// Whether `raw` is the discriminant of one of the seven kinds.
///
/// A [`Kind`] is valid by construction; this guards raw tags coming from
/// outside the type system (FFI, persisted bytes).
pub fn kind_is_valid(raw: u8) -> bool {
    Kind::try_from(raw).is_ok()
}

/// Fail with [`Error::TypeMismatch`] unless `actual` is `expected`.
///
/// Every typed accessor runs this before touching a payload.
pub fn check_kind(expected: Kind, actual: Kind) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::TypeMismatch { expected, actual })
    }
}
