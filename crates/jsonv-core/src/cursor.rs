//! Positional cursors over object entries.
//!
//! A cursor is the object counterpart of a bidirectional iterator: it sits on
//! one entry (or one past the last), moves forward and back, and reads the
//! entry under it. Cursors borrow the object, so the borrow checker rules out
//! using one after a structural change to its object.
//!
//! [`ObjectCursorMut`] converts into [`ObjectCursor`]; there is no way back.
//!
//! [`ObjectPosition`] is a detached, copyable form of a cursor's place. It
//! holds no borrow, which is what lets `Object::erase_at` and friends take
//! one while the object is borrowed mutably. A position is only meaningful
//! for the object it came from, until that object is next changed.

use std::fmt;
use std::ptr;

use crate::value::Value;

/// Detached place within an object's key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ObjectPosition(usize);

impl ObjectPosition {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

fn same_sequence(a: &[(String, Value)], b: &[(String, Value)]) -> bool {
    ptr::eq(a.as_ptr(), b.as_ptr()) && a.len() == b.len()
}

/// Read-only cursor over an object's entries.
///
/// The default cursor is a placeholder over no entries: it is already at
/// the end and reads nothing.
#[derive(Clone, Copy, Default)]
pub struct ObjectCursor<'a> {
    entries: &'a [(String, Value)],
    index: usize,
}

impl<'a> ObjectCursor<'a> {
    pub(crate) fn new(entries: &'a [(String, Value)], index: usize) -> Self {
        debug_assert!(index <= entries.len());
        Self { entries, index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn entries(&self) -> &'a [(String, Value)] {
        self.entries
    }

    pub fn is_end(&self) -> bool {
        self.index >= self.entries.len()
    }

    pub fn is_begin(&self) -> bool {
        self.index == 0
    }

    /// Step to the next entry.
    ///
    /// Advancing an end cursor is a contract violation. Debug builds panic;
    /// release builds leave the cursor at the end.
    pub fn move_next(&mut self) {
        debug_assert!(!self.is_end(), "advanced an object cursor past the end");
        if !self.is_end() {
            self.index += 1;
        }
    }

    /// Step to the previous entry.
    ///
    /// Retreating from the first entry is a contract violation. Debug builds
    /// panic; release builds leave the cursor where it is.
    pub fn move_prev(&mut self) {
        debug_assert!(!self.is_begin(), "moved an object cursor before the first entry");
        self.index = self.index.saturating_sub(1);
    }

    /// The entry under the cursor, or `None` at the end.
    pub fn entry(&self) -> Option<(&'a str, &'a Value)> {
        self.entries.get(self.index).map(|(k, v)| (k.as_str(), v))
    }

    pub fn key(&self) -> Option<&'a str> {
        self.entry().map(|(k, _)| k)
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.entry().map(|(_, v)| v)
    }

    /// Detached copy of this cursor's place.
    pub fn position(&self) -> ObjectPosition {
        ObjectPosition::new(self.index)
    }
}

/// Cursors compare equal when they sit at the same place. Comparing cursors
/// from different objects is a contract violation and panics in debug builds.
impl PartialEq for ObjectCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            same_sequence(self.entries, other.entries),
            "compared cursors from different objects"
        );
        self.index == other.index
    }
}

impl Eq for ObjectCursor<'_> {}

impl fmt::Debug for ObjectCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCursor")
            .field("index", &self.index)
            .field("key", &self.key())
            .finish()
    }
}

/// Cursor over an object's entries that can change the values it visits.
///
/// Keys are never handed out mutably; the key order is owned by the object.
#[derive(Default)]
pub struct ObjectCursorMut<'a> {
    entries: &'a mut [(String, Value)],
    index: usize,
}

impl<'a> ObjectCursorMut<'a> {
    pub(crate) fn new(entries: &'a mut [(String, Value)], index: usize) -> Self {
        debug_assert!(index <= entries.len());
        Self { entries, index }
    }

    pub fn is_end(&self) -> bool {
        self.index >= self.entries.len()
    }

    pub fn is_begin(&self) -> bool {
        self.index == 0
    }

    /// See [`ObjectCursor::move_next`].
    pub fn move_next(&mut self) {
        debug_assert!(!self.is_end(), "advanced an object cursor past the end");
        if !self.is_end() {
            self.index += 1;
        }
    }

    /// See [`ObjectCursor::move_prev`].
    pub fn move_prev(&mut self) {
        debug_assert!(!self.is_begin(), "moved an object cursor before the first entry");
        self.index = self.index.saturating_sub(1);
    }

    pub fn key(&self) -> Option<&str> {
        self.entries.get(self.index).map(|(k, _)| k.as_str())
    }

    pub fn value(&self) -> Option<&Value> {
        self.entries.get(self.index).map(|(_, v)| v)
    }

    pub fn value_mut(&mut self) -> Option<&mut Value> {
        self.entries.get_mut(self.index).map(|(_, v)| v)
    }

    /// The entry under the cursor with its value writable.
    pub fn entry_mut(&mut self) -> Option<(&str, &mut Value)> {
        self.entries.get_mut(self.index).map(|(k, v)| (k.as_str(), v))
    }

    /// Give up the cursor for a reference to the value it sits on.
    pub fn into_value_mut(self) -> Option<&'a mut Value> {
        let Self { entries, index } = self;
        entries.get_mut(index).map(|(_, v)| v)
    }

    pub fn position(&self) -> ObjectPosition {
        ObjectPosition::new(self.index)
    }

    /// Read-only cursor at the same place, borrowing from this one.
    pub fn as_cursor(&self) -> ObjectCursor<'_> {
        ObjectCursor::new(self.entries, self.index)
    }
}

impl<'a> From<ObjectCursorMut<'a>> for ObjectCursor<'a> {
    fn from(cursor: ObjectCursorMut<'a>) -> Self {
        ObjectCursor::new(cursor.entries, cursor.index)
    }
}

impl fmt::Debug for ObjectCursorMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCursorMut")
            .field("index", &self.index)
            .field("key", &self.key())
            .finish()
    }
}
