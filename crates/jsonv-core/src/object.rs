//! Key-sorted object storage.
//!
//! Entries are kept in a vector sorted by key, so iteration, comparison and
//! serialization all walk keys in ascending order regardless of the order in
//! which they were inserted. Keys are unique.
//!
//! Lookups are binary searches. Positional operations (`find`, `erase_at`,
//! `insert_with_hint`) speak in [`ObjectCursor`]s and [`ObjectPosition`]s so
//! the backing container never shows up in the public API.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use crate::cursor::{ObjectCursor, ObjectCursorMut, ObjectPosition};
use crate::error::{Error, Result};
use crate::value::Value;
use crate::view::{ConstObjectView, ObjectView};
use crate::writer;

static NULL: Value = Value::Null;

/// Ordered mapping from string keys to [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `Ok(index)` of `key`, or `Err(index)` where it would be inserted.
    fn search(&self, key: &str) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| k.as_str().cmp(key))
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.search(key).ok().map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.search(key) {
            Ok(i) => Some(&mut self.entries[i].1),
            Err(_) => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_ok()
    }

    /// Number of entries under `key`: 0 or 1.
    pub fn count(&self, key: &str) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Strict lookup. Never inserts.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        match self.search(key) {
            Ok(i) => Ok(&mut self.entries[i].1),
            Err(_) => Err(Error::KeyNotFound(key.to_owned())),
        }
    }

    /// Insert-or-get: the value under `key`, inserting `Null` first if the
    /// key is absent.
    pub fn entry(&mut self, key: &str) -> &mut Value {
        let index = match self.search(key) {
            Ok(i) => i,
            Err(i) => {
                self.entries.insert(i, (key.to_owned(), Value::Null));
                i
            }
        };
        &mut self.entries[index].1
    }

    /// Cursor at `key`, or the end cursor if the key is absent.
    pub fn find(&self, key: &str) -> ObjectCursor<'_> {
        let index = self.search(key).unwrap_or(self.entries.len());
        ObjectCursor::new(&self.entries, index)
    }

    pub fn find_mut(&mut self, key: &str) -> ObjectCursorMut<'_> {
        let index = self.search(key).unwrap_or(self.entries.len());
        ObjectCursorMut::new(&mut self.entries, index)
    }

    // ------------------------------------------------------------------------
    // Insertion
    // ------------------------------------------------------------------------

    /// Insert `value` under `key` unless the key is already present.
    ///
    /// Returns the position of the entry for `key` and whether the insert
    /// happened. An existing value is never overwritten.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> (ObjectPosition, bool) {
        let key = key.into();
        match self.search(&key) {
            Ok(i) => {
                log::trace!("key {key:?} already present, keeping existing value");
                (ObjectPosition::new(i), false)
            }
            Err(i) => {
                self.entries.insert(i, (key, value.into()));
                (ObjectPosition::new(i), true)
            }
        }
    }

    /// Insert with a position hint.
    ///
    /// When `hint` is where `key` belongs the search is skipped. The outcome
    /// is the same as [`insert`](Self::insert) either way: the returned
    /// position is that of the entry for `key`, existing or new.
    pub fn insert_with_hint(
        &mut self,
        hint: ObjectPosition,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> ObjectPosition {
        let key = key.into();
        let h = hint.index();
        let after_prev = h == 0 || self.entries.get(h - 1).is_some_and(|(k, _)| k.as_str() < key.as_str());
        let before_next = self.entries.get(h).map_or(h == self.entries.len(), |(k, _)| key.as_str() < k.as_str());
        if after_prev && before_next {
            self.entries.insert(h, (key, value.into()));
            return ObjectPosition::new(h);
        }
        self.insert(key, value).0
    }

    /// Insert every pair, first write wins.
    pub fn insert_all<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    /// Remove `key` if present. Returns the number of entries removed.
    pub fn erase(&mut self, key: &str) -> usize {
        match self.search(key) {
            Ok(i) => {
                self.entries.remove(i);
                1
            }
            Err(_) => 0,
        }
    }

    /// Remove the entry at `position`, returning the position that follows it.
    ///
    /// # Panics
    /// Panics if `position` is the end position or was taken from a
    /// different object.
    pub fn erase_at(&mut self, position: ObjectPosition) -> ObjectPosition {
        self.entries.remove(position.index());
        position
    }

    /// Remove entries in `[first, last)`, returning the position that follows
    /// the removed range.
    ///
    /// # Panics
    /// Panics if the range is out of order or out of bounds.
    pub fn erase_range(&mut self, first: ObjectPosition, last: ObjectPosition) -> ObjectPosition {
        self.entries.drain(first.index()..last.index());
        first
    }

    /// Remove `key` and return its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.search(key).ok().map(|i| self.entries.remove(i).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ------------------------------------------------------------------------
    // Cursors and views
    // ------------------------------------------------------------------------

    pub fn cursor_front(&self) -> ObjectCursor<'_> {
        ObjectCursor::new(&self.entries, 0)
    }

    pub fn cursor_end(&self) -> ObjectCursor<'_> {
        ObjectCursor::new(&self.entries, self.entries.len())
    }

    pub fn cursor_front_mut(&mut self) -> ObjectCursorMut<'_> {
        ObjectCursorMut::new(&mut self.entries, 0)
    }

    pub fn cursor_end_mut(&mut self) -> ObjectCursorMut<'_> {
        let end = self.entries.len();
        ObjectCursorMut::new(&mut self.entries, end)
    }

    /// Cursor at a position previously taken from this object.
    pub fn cursor_at(&self, position: ObjectPosition) -> ObjectCursor<'_> {
        debug_assert!(position.index() <= self.entries.len(), "stale object position");
        ObjectCursor::new(&self.entries, position.index())
    }

    pub fn view(&self) -> ConstObjectView<'_> {
        ConstObjectView::new(self.cursor_front(), self.cursor_end())
    }

    pub fn view_mut(&mut self) -> ObjectView<'_> {
        ObjectView::new(&mut self.entries)
    }

    // ------------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------------

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.entries)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(&mut self.entries)
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    // ------------------------------------------------------------------------
    // Copy and compare
    // ------------------------------------------------------------------------

    /// Deep copy that reports a failed buffer reservation instead of
    /// aborting. See [`Value::try_clone`] for what stays infallible.
    pub fn try_clone(&self) -> Result<Object> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(self.entries.len())?;
        for (key, value) in &self.entries {
            let mut k = String::new();
            k.try_reserve_exact(key.len())?;
            k.push_str(key);
            entries.push((k, value.try_clone()?));
        }
        Ok(Object { entries })
    }

    /// Three-way structural comparison.
    ///
    /// Walks both objects in key order in lockstep. The first differing key
    /// decides, then the first differing value. If one object runs out of
    /// entries first it sorts as less.
    pub fn compare(&self, other: &Object) -> Ordering {
        for ((self_key, self_value), (other_key, other_value)) in self.entries.iter().zip(&other.entries) {
            match self_key.cmp(other_key) {
                Ordering::Equal => {}
                ord => return ord,
            }
            match self_value.compare(other_value) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.entries.len().cmp(&other.entries.len())
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Object) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_object(f, self)
    }
}

/// Missing keys read as `Null`. Use [`Object::at`] for a strict lookup.
impl Index<&str> for Object {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Insert-or-get, like [`Object::entry`].
impl IndexMut<&str> for Object {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.entry(key)
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        self.insert_all(pairs);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut object = Object::new();
        object.insert_all(pairs);
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

// ----------------------------------------------------------------------------
// Iterators
// ----------------------------------------------------------------------------

/// Borrowing iterator over object entries in key order.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, Value)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(entries: &'a [(String, Value)]) -> Self {
        Self { inner: entries.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator over object entries with mutable values. Keys stay read-only so
/// the sort order cannot be broken.
pub struct IterMut<'a> {
    inner: slice::IterMut<'a, (String, Value)>,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(entries: &'a mut [(String, Value)]) -> Self {
        Self {
            inner: entries.iter_mut(),
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for IterMut<'_> {}
impl FusedIterator for IterMut<'_> {}

/// Owning iterator over object entries in key order.
pub struct IntoIter {
    inner: vec::IntoIter<(String, Value)>,
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}
