//! Array storage contract tests.

use std::cmp::Ordering;

use jsonv_core::{array_from, Array, Error, Value};

fn numbers(arr: &Array) -> Vec<i64> {
    arr.iter().map(|v| v.as_integer().unwrap()).collect()
}

#[test]
fn push_preserves_insertion_order() {
    let mut arr = Array::new();
    arr.push_back(2);
    arr.push_back(1);
    arr.push_front(3);
    assert_eq!(numbers(&arr), [3, 2, 1]);
    assert_eq!(arr.first(), Some(&Value::from(3)));
    assert_eq!(arr.last(), Some(&Value::from(1)));
}

#[test]
fn pop_from_both_ends() {
    let mut arr: Array = [1, 2, 3].into_iter().collect();
    assert_eq!(arr.pop_front(), Some(Value::from(1)));
    assert_eq!(arr.pop_back(), Some(Value::from(3)));
    assert_eq!(numbers(&arr), [2]);
    arr.clear();
    assert_eq!(arr.pop_back(), None);
}

#[test]
fn positional_insert_and_remove() {
    let mut arr: Array = [1, 3].into_iter().collect();
    arr.insert(1, 2).unwrap();
    arr.insert(3, 4).unwrap();
    assert_eq!(numbers(&arr), [1, 2, 3, 4]);
    assert_eq!(arr.insert(9, 0), Err(Error::IndexOutOfRange { index: 9, len: 4 }));
    assert_eq!(arr.remove(0), Some(Value::from(1)));
    assert_eq!(arr.remove(10), None);
}

#[test]
fn erase_range_returns_following_index() {
    let mut arr: Array = (0..6).collect();
    let next = arr.erase_range(1..4).unwrap();
    assert_eq!(next, 1);
    assert_eq!(numbers(&arr), [0, 4, 5]);
    assert!(arr.erase_range(2..9).is_err());
}

#[test]
fn strict_and_optional_access() {
    let mut arr: Array = ["a", "b"].into_iter().collect();
    assert_eq!(arr.at(1).unwrap().as_str().unwrap(), "b");
    assert_eq!(arr.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    assert!(arr.get(5).is_none());
    *arr.at_mut(0).unwrap() = Value::Null;
    assert!(arr[0].is_null());
    arr[1] = Value::from(true);
    assert_eq!(arr.get_mut(1).map(|v| v.kind()), Some(jsonv_core::Kind::Boolean));
}

#[test]
fn resize_fills_and_truncates() {
    let mut arr = Array::new();
    arr.resize(3, Value::from(0));
    assert_eq!(numbers(&arr), [0, 0, 0]);
    arr.resize(1, Value::Null);
    assert_eq!(arr.len(), 1);
    arr.truncate(0);
    assert!(arr.is_empty());
}

#[test]
fn comparison_is_lexicographic_then_by_length() {
    let a: Array = [1, 2].into_iter().collect();
    let b: Array = [1, 2, 3].into_iter().collect();
    let c: Array = [1, 5].into_iter().collect();
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&c), Ordering::Less);
    assert_eq!(c.compare(&a), Ordering::Greater);
    assert_eq!(a.compare(&a.clone()), Ordering::Equal);
}

#[test]
fn clone_is_deep() {
    let original: Array = [array_from([1])].into_iter().collect();
    let mut copy = original.clone();
    copy[0].push_back(2).unwrap();
    assert_eq!(original[0], array_from([1]));
    assert_eq!(copy[0], array_from([1, 2]));
}

#[test]
fn iter_mut_updates_in_place() {
    let mut arr: Array = [1, 2, 3].into_iter().collect();
    for v in &mut arr {
        *v.as_integer_mut().unwrap() *= 10;
    }
    assert_eq!(numbers(&arr), [10, 20, 30]);
}

#[test]
fn owned_iteration_yields_values_in_order() {
    let arr: Array = ["x", "y"].into_iter().collect();
    let collected: Vec<Value> = arr.into_iter().collect();
    assert_eq!(collected, [Value::from("x"), Value::from("y")]);
}
