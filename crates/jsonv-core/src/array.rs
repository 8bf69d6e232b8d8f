//! Ordered array storage.
//!
//! Insertion order is the iteration and serialization order. Backed by a
//! ring buffer so both ends take cheap pushes and pops.

use std::cmp::Ordering;
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::error::{Error, Result};
use crate::value::Value;
use crate::writer;

/// Ordered sequence of [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    items: VecDeque<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Strict positional lookup.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let len = self.items.len();
        self.items.get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.back()
    }

    pub fn push_back(&mut self, value: impl Into<Value>) {
        self.items.push_back(value.into());
    }

    pub fn push_front(&mut self, value: impl Into<Value>) {
        self.items.push_front(value.into());
    }

    pub fn pop_back(&mut self) -> Option<Value> {
        self.items.pop_back()
    }

    pub fn pop_front(&mut self) -> Option<Value> {
        self.items.pop_front()
    }

    /// Insert `value` before `index`. Fails if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.items.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.items.insert(index, value.into());
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.items.remove(index)
    }

    /// Remove the elements in `range`. Returns the index now holding the
    /// element that followed the range.
    pub fn erase_range(&mut self, range: Range<usize>) -> Result<usize> {
        let len = self.items.len();
        if range.start > range.end || range.end > len {
            return Err(Error::IndexOutOfRange { index: range.end, len });
        }
        let start = range.start;
        self.items.drain(range);
        Ok(start)
    }

    /// Grow with `fill` or shrink to `new_len` elements.
    pub fn resize(&mut self, new_len: usize, fill: Value) {
        self.items.resize(new_len, fill);
    }

    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Deep copy that reports a failed buffer reservation instead of
    /// aborting. See [`Value::try_clone`] for what stays infallible.
    pub fn try_clone(&self) -> Result<Array> {
        let mut items = VecDeque::new();
        items.try_reserve_exact(self.items.len())?;
        for item in &self.items {
            items.push_back(item.try_clone()?);
        }
        Ok(Array { items })
    }

    /// Lexicographic comparison by element, then by length.
    pub fn compare(&self, other: &Array) -> Ordering {
        for (a, b) in self.items.iter().zip(&other.items) {
            match a.compare(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.items.len().cmp(&other.items.len())
    }
}

impl PartialOrd for Array {
    fn partial_cmp(&self, other: &Array) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_array(f, self)
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, items: I) {
        self.items.extend(items.into_iter().map(Into::into));
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(items: I) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = vec_deque::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = vec_deque::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = vec_deque::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
