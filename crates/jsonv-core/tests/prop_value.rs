//! Property-based tests for the value core.
//!
//! Strategies generate arbitrary value trees (up to a few levels deep) and
//! check the invariants that must hold for any of them: reflexive equality,
//! deep-copy independence, move safety, ordering antisymmetry and key-sorted
//! output.

use std::cmp::Ordering;

use jsonv_core::{Kind, Object, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // Finite decimals only: NaN is reflexive per instance but not across copies.
        (-1.0e9f64..1.0e9f64).prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(jsonv_core::array_from),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(jsonv_core::object_from),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Object> {
    prop::collection::vec((arb_key(), arb_scalar()), 0..8).prop_map(|pairs| pairs.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn equality_is_reflexive(v in arb_value()) {
        prop_assert!(v == v);
        prop_assert_eq!(v.compare(&v), Ordering::Equal);
    }

    #[test]
    fn clone_is_equal_and_independent(v in arb_value()) {
        let snapshot = v.to_string();
        let mut copy = v.clone();
        prop_assert_eq!(&copy, &v);

        match &mut copy {
            Value::Array(a) => { a.push_back("extra"); }
            Value::Object(o) => { *o.entry("~extra") = Value::from(1); }
            Value::String(s) => s.push('!'),
            other => *other = Value::from("replaced"),
        }
        prop_assert_ne!(&copy, &v);
        prop_assert_eq!(v.to_string(), snapshot);
    }

    #[test]
    fn take_moves_payload_and_leaves_null(v in arb_value()) {
        let snapshot = v.clone();
        let mut source = v;
        let moved = source.take();
        prop_assert_eq!(source.kind(), Kind::Null);
        prop_assert_eq!(moved, snapshot);
    }

    #[test]
    fn try_clone_agrees_with_clone(v in arb_value()) {
        prop_assert_eq!(v.try_clone().unwrap(), v.clone());
    }

    #[test]
    fn compare_is_antisymmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn compare_equal_iff_eq(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn object_keys_come_out_sorted(obj in arb_object()) {
        let keys: Vec<&str> = obj.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn object_output_parses_back_with_same_keys(obj in arb_object()) {
        let text = Value::from(&obj).to_string();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let parsed_keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        let keys: Vec<&str> = obj.keys().collect();
        prop_assert_eq!(parsed_keys, keys);
    }

    #[test]
    fn insert_never_overwrites(obj in arb_object(), key in arb_key()) {
        let mut obj = obj;
        let before = obj.get(&key).cloned();
        let (_, inserted) = obj.insert(key.clone(), "new");
        prop_assert_eq!(inserted, before.is_none());
        if let Some(old) = before {
            prop_assert_eq!(obj.at(&key).unwrap(), &old);
        }
    }

    #[test]
    fn erase_twice_removes_once(obj in arb_object(), key in arb_key()) {
        let mut obj = obj;
        let had = obj.count(&key);
        prop_assert_eq!(obj.erase(&key), had);
        prop_assert_eq!(obj.erase(&key), 0);
    }
}
