//! Property-based tests for matcher semantics.
//!
//! Generated plain data (scalars, lists and maps, no identity-bearing
//! values) is used to check:
//! 1. Combinators agree with the corresponding iterator adaptors
//! 2. `value(d)` accepts exactly the data structurally equal to `d`
//! 3. `hashwise` implies `sub_hash`, and extra keys separate them
//! 4. `sorted` is invariant under permutation of the subject
//! 5. Rebuilt containers are equivalent but not identical

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use smatch::{
    address, all, any, hashwise, matches, none, one, sorted, sub_hash, value, Pattern, Value,
};

// -- Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undef),
        proptest::arbitrary::any::<bool>().prop_map(Value::Bool),
        (-20i64..20).prop_map(Value::Int),
        Just(Value::Int((1 << 53) + 1)),
        Just(Value::Float(9_007_199_254_740_992.0)),
        (-20i32..20).prop_map(|n| Value::Float(f64::from(n) / 2.0)),
        "[a-c]{0,3}".prop_map(|s| Value::string(s)),
    ]
}

/// Acyclic plain data up to a few levels deep.
fn data_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::btree_map("[a-c]{1,2}", inner, 0..4).prop_map(Value::map),
        ]
    })
}

fn int_map_strategy() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map("[a-e]", -5i64..5, 0..5)
}

// -- Reference models --

/// Structural equality with numeric comparison across ints and floats.
fn model_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undef, Value::Undef) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            a.numeric_cmp(b) == Some(std::cmp::Ordering::Equal)
        }
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| model_eq(p, q))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.keys().eq(y.keys()) && x.values().zip(y.values()).all(|(p, q)| model_eq(p, q))
        }
        _ => false,
    }
}

/// Deep copy into fresh storage.
fn rebuild(v: &Value) -> Value {
    match v {
        Value::List(items) => Value::list(items.iter().map(rebuild).collect()),
        Value::Map(entries) => {
            Value::map(entries.iter().map(|(k, v)| (k.clone(), rebuild(v))).collect())
        }
        other => other.clone(),
    }
}

fn int_value_map(map: &BTreeMap<String, i64>) -> Value {
    Value::map_from(map.iter().map(|(k, v)| (k.as_str(), Value::Int(*v))))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_combinators_agree_with_iterators(
        options in prop::collection::vec(-3i64..3, 0..5),
        subject in -3i64..3,
    ) {
        let subject = Value::Int(subject);
        let patterns = || options.iter().map(|n| Pattern::from(Value::Int(*n)));
        let hits = options
            .iter()
            .filter(|n| matches(&subject, Value::Int(**n)))
            .count();

        prop_assert_eq!(any(patterns()).test(&subject), hits > 0);
        prop_assert_eq!(all(patterns()).test(&subject), hits == options.len());
        prop_assert_eq!(none(patterns()).test(&subject), hits == 0);
        prop_assert_eq!(one(patterns()).test(&subject), hits == 1);
    }

    #[test]
    fn prop_value_matches_itself(data in data_strategy()) {
        let m = value(&data).unwrap();
        prop_assert!(m.test(&data));
        prop_assert!(m.test(&rebuild(&data)));
    }

    #[test]
    fn prop_value_agrees_with_structural_model(a in data_strategy(), b in data_strategy()) {
        let m = value(&a).unwrap();
        prop_assert_eq!(m.test(&b), model_eq(&a, &b));
        prop_assert_eq!(matches(&b, &a), model_eq(&a, &b));
    }

    #[test]
    fn prop_hashwise_implies_sub_hash(
        reference in int_map_strategy(),
        subject in int_map_strategy(),
    ) {
        let subject = int_value_map(&subject);
        let whole = hashwise(reference.iter().map(|(k, v)| (k.as_str(), Value::Int(*v))));
        let part = sub_hash(reference.iter().map(|(k, v)| (k.as_str(), Value::Int(*v))));
        if whole.test(&subject) {
            prop_assert!(part.test(&subject));
        }
    }

    #[test]
    fn prop_extra_keys_separate_sub_hash_from_hashwise(map in int_map_strategy()) {
        let reference = || map.iter().map(|(k, v)| (k.clone(), Value::Int(*v)));
        let exact = int_value_map(&map);
        prop_assert!(hashwise(reference()).test(&exact));
        prop_assert!(sub_hash(reference()).test(&exact));

        let mut wider = map.clone();
        wider.insert("extra".to_owned(), 0);
        let wider = int_value_map(&wider);
        prop_assert!(sub_hash(reference()).test(&wider));
        prop_assert!(!hashwise(reference()).test(&wider));
    }

    #[test]
    fn prop_sorted_is_permutation_invariant(
        (original, shuffled) in prop::collection::vec(-50i64..50, 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let mut ordered = original.clone();
        ordered.sort_unstable();
        let expected = Value::list(ordered.into_iter().map(Value::Int).collect());
        let subject = Value::list(shuffled.into_iter().map(Value::Int).collect());
        let m = sorted(value(&expected).unwrap());
        prop_assert!(m.test(&subject));

        let as_given = Value::list(original.into_iter().map(Value::Int).collect());
        prop_assert_eq!(m.test(&subject), m.test(&as_given));
    }

    #[test]
    fn prop_rebuilt_containers_are_equal_but_distinct(
        items in prop::collection::vec(data_strategy(), 0..4),
    ) {
        let original = Value::list(items);
        let copy = rebuild(&original);
        prop_assert!(!address(&original).test(&copy));
        prop_assert!(address(&original).test(&original.clone()));
        prop_assert!(value(&original).unwrap().test(&copy));
    }
}
