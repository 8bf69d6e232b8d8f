//! Fallible copy under a refusing allocator: a failed buffer reservation
//! surfaces as `Error::Allocation` and leaves the destination `Null`.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use jsonv_core::{array_from, object_from, Error, Kind, Value};

/// Byte length of the payload whose allocation is refused.
const REFUSED_LEN: usize = 4099;

thread_local! {
    static REFUSE_SIZE: Cell<usize> = const { Cell::new(0) };
}

/// Delegates to the system allocator, except that on a thread with a refusal
/// armed any request of exactly that size returns null.
struct RefusingAlloc;

unsafe impl GlobalAlloc for RefusingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let refused = REFUSE_SIZE.try_with(|size| size.get() == layout.size()).unwrap_or(false);
        if refused {
            return std::ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: RefusingAlloc = RefusingAlloc;

/// Refuses allocations of `size` bytes on this thread until dropped.
struct Refusal;

impl Refusal {
    fn arm(size: usize) -> Self {
        REFUSE_SIZE.with(|s| s.set(size));
        Refusal
    }
}

impl Drop for Refusal {
    fn drop(&mut self) {
        REFUSE_SIZE.with(|s| s.set(0));
    }
}

fn long_text() -> String {
    "x".repeat(REFUSED_LEN)
}

// ============================================================================
// try_clone
// ============================================================================

#[test]
fn try_clone_reports_refused_string_buffer() {
    let source = Value::from(long_text());
    let result = {
        let _refusal = Refusal::arm(REFUSED_LEN);
        source.try_clone()
    };
    assert!(matches!(result, Err(Error::Allocation(_))));
    assert_eq!(source.as_str().unwrap().len(), REFUSED_LEN);
}

#[test]
fn try_clone_succeeds_when_nothing_is_refused() {
    let source = array_from([Value::from(long_text()), Value::from(1)]);
    let copy = source.try_clone().unwrap();
    assert_eq!(copy, source);
}

// ============================================================================
// assign_from
// ============================================================================

#[test]
fn assign_from_string_leaves_null_on_failure() {
    let source = Value::from(long_text());
    let mut dest = Value::from("previous");
    let result = {
        let _refusal = Refusal::arm(REFUSED_LEN);
        dest.assign_from(&source)
    };
    assert!(result.is_err());
    assert!(matches!(result, Err(Error::Allocation(_))));
    assert_eq!(dest.kind(), Kind::Null);
    assert_eq!(source.as_str().unwrap().len(), REFUSED_LEN);
}

#[test]
fn assign_from_nested_array_leaves_null_on_failure() {
    let source = array_from([Value::from(1), Value::from(long_text())]);
    let mut dest = object_from([("kept", 1)]);
    let result = {
        let _refusal = Refusal::arm(REFUSED_LEN);
        dest.assign_from(&source)
    };
    assert!(result.is_err());
    assert_eq!(dest.kind(), Kind::Null);
    assert_eq!(source.as_array().unwrap().len(), 2);
}

#[test]
fn assign_from_nested_object_leaves_null_on_failure() {
    let source = object_from([("a", Value::from(true)), ("b", Value::from(long_text()))]);
    let mut dest = Value::from(7);
    let result = {
        let _refusal = Refusal::arm(REFUSED_LEN);
        dest.assign_from(&source)
    };
    assert!(matches!(result, Err(Error::Allocation(_))));
    assert_eq!(dest.kind(), Kind::Null);
    assert_eq!(source.at("b").unwrap().as_str().unwrap().len(), REFUSED_LEN);
}

#[test]
fn assign_from_succeeds_after_refusal_is_lifted() {
    let source = Value::from(long_text());
    let mut dest = Value::Null;
    {
        let _refusal = Refusal::arm(REFUSED_LEN);
        assert!(dest.assign_from(&source).is_err());
    }
    dest.assign_from(&source).unwrap();
    assert_eq!(dest, source);
}
