//! Begin/end views over object entries.
//!
//! - [`ConstObjectView`]: read-only pair of cursors borrowed from an object.
//! - [`ObjectView`]: live mutable view; values can change, the key set cannot.
//! - [`OwningObjectView`]: owns the object it walks, so the entries live as
//!   long as the view does.
//!
//! Borrowed views hold the object's borrow for their whole lifetime, so no
//! insert, erase or reassignment can happen while one is alive.

use crate::cursor::{ObjectCursor, ObjectCursorMut};
use crate::object::{IntoIter, Iter, IterMut, Object};
use crate::value::Value;

fn search(entries: &[(String, Value)], key: &str) -> Option<usize> {
    entries.binary_search_by(|(k, _)| k.as_str().cmp(key)).ok()
}

/// Read-only view over a range of object entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstObjectView<'a> {
    begin: ObjectCursor<'a>,
    end: ObjectCursor<'a>,
}

impl<'a> ConstObjectView<'a> {
    /// View over `[begin, end)`. Both cursors must come from the same object.
    ///
    /// # Panics
    /// Panics if `begin` is after `end`.
    pub fn new(begin: ObjectCursor<'a>, end: ObjectCursor<'a>) -> Self {
        assert!(begin.index() <= end.index(), "view begins after it ends");
        debug_assert!(
            std::ptr::eq(begin.entries().as_ptr(), end.entries().as_ptr()),
            "view cursors come from different objects"
        );
        Self { begin, end }
    }

    fn entries(&self) -> &'a [(String, Value)] {
        &self.begin.entries()[self.begin.index()..self.end.index()]
    }

    pub fn begin(&self) -> ObjectCursor<'a> {
        self.begin
    }

    pub fn end(&self) -> ObjectCursor<'a> {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end.index().saturating_sub(self.begin.index())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let entries = self.entries();
        search(entries, key).map(|i| &entries[i].1)
    }

    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.entries())
    }
}

impl<'a> IntoIterator for ConstObjectView<'a> {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &ConstObjectView<'a> {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Mutable view over all entries of a borrowed object.
#[derive(Debug)]
pub struct ObjectView<'a> {
    entries: &'a mut [(String, Value)],
}

impl<'a> ObjectView<'a> {
    pub(crate) fn new(entries: &'a mut [(String, Value)]) -> Self {
        Self { entries }
    }

    pub fn begin(&self) -> ObjectCursor<'_> {
        ObjectCursor::new(self.entries, 0)
    }

    pub fn end(&self) -> ObjectCursor<'_> {
        ObjectCursor::new(self.entries, self.entries.len())
    }

    pub fn begin_mut(&mut self) -> ObjectCursorMut<'_> {
        ObjectCursorMut::new(self.entries, 0)
    }

    pub fn end_mut(&mut self) -> ObjectCursorMut<'_> {
        let end = self.entries.len();
        ObjectCursorMut::new(self.entries, end)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        search(self.entries, key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        search(self.entries, key).map(|i| &mut self.entries[i].1)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.entries)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self.entries)
    }

    /// Read-only view borrowing from this one.
    pub fn as_const(&self) -> ConstObjectView<'_> {
        ConstObjectView::new(self.begin(), self.end())
    }
}

impl<'a> From<ObjectView<'a>> for ConstObjectView<'a> {
    fn from(view: ObjectView<'a>) -> Self {
        let entries: &'a [(String, Value)] = view.entries;
        ConstObjectView::new(ObjectCursor::new(entries, 0), ObjectCursor::new(entries, entries.len()))
    }
}

impl<'a> IntoIterator for ObjectView<'a> {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        IterMut::new(self.entries)
    }
}

impl<'a, 'b> IntoIterator for &'b ObjectView<'a> {
    type Item = (&'b str, &'b Value);
    type IntoIter = Iter<'b>;

    fn into_iter(self) -> Iter<'b> {
        self.iter()
    }
}

impl<'a, 'b> IntoIterator for &'b mut ObjectView<'a> {
    type Item = (&'b str, &'b mut Value);
    type IntoIter = IterMut<'b>;

    fn into_iter(self) -> IterMut<'b> {
        self.iter_mut()
    }
}

/// View that owns the object it walks.
///
/// Built by [`Value::into_object_view`](crate::Value::into_object_view),
/// which moves the object payload in without copying it.
#[derive(Debug, Clone, PartialEq)]
pub struct OwningObjectView {
    object: Box<Object>,
}

impl OwningObjectView {
    pub(crate) fn new(object: Box<Object>) -> Self {
        Self { object }
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn begin(&self) -> ObjectCursor<'_> {
        self.object.cursor_front()
    }

    pub fn end(&self) -> ObjectCursor<'_> {
        self.object.cursor_end()
    }

    pub fn begin_mut(&mut self) -> ObjectCursorMut<'_> {
        self.object.cursor_front_mut()
    }

    pub fn len(&self) -> usize {
        self.object.len()
    }

    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.object.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.object.iter_mut()
    }

    pub fn view(&self) -> ConstObjectView<'_> {
        self.object.view()
    }

    pub fn view_mut(&mut self) -> ObjectView<'_> {
        self.object.view_mut()
    }

    /// Hand the object back as a value.
    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

impl IntoIterator for OwningObjectView {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        (*self.object).into_iter()
    }
}

impl<'a> IntoIterator for &'a OwningObjectView {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
