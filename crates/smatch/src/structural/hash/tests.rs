use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{int_list, str_map};
use crate::{any, number, sequence, string};

fn abc() -> Value {
    Value::map_from([
        ("a", Value::Int(1)),
        ("b", Value::Int(2)),
        ("c", Value::Int(3)),
    ])
}

#[test]
fn hash_accepts_unblessed_maps() {
    assert!(hash().test(&str_map(&[])));
    assert!(!hash().test(&int_list(&[])));
}

#[test]
fn keys_are_sorted_strings() {
    let subject = Value::map_from([("b", Value::Int(2)), ("a", Value::Int(1))]);
    let expected = Value::list(vec![Value::string("a"), Value::string("b")]);
    assert!(hash_keys(expected).test(&subject));
    assert!(hash_keys(sequence(string())).test(&subject));
    assert!(!hash_keys(int_list(&[])).test(&int_list(&[])));
}

#[test]
fn values_follow_key_order() {
    assert!(hash_values(int_list(&[1, 2, 3])).test(&abc()));
    assert!(!hash_values(int_list(&[3, 2, 1])).test(&abc()));
    assert!(hash_values(sequence(number())).test(&abc()));
}

#[test]
fn sub_hash_is_a_subset_test() {
    let m = sub_hash([("a", 1)]);
    assert!(m.test(&Value::map_from([("a", Value::Int(1)), ("b", Value::Int(2))])));
    assert!(m.test(&Value::map_from([("a", Value::Float(1.0))])));
    assert!(!m.test(&Value::map_from([("a", Value::Int(2))])));
    assert!(!m.test(&Value::map_from([("b", Value::Int(1))])));
    assert!(!m.test(&int_list(&[1])));
}

#[test]
fn sub_hash_requires_reference_keys_even_for_undef() {
    let m = sub_hash([("a", Value::Undef)]);
    assert!(!m.test(&str_map(&[])));
    assert!(m.test(&Value::map_from([("a", Value::Undef)])));
}

#[test]
fn hashwise_requires_equal_key_sets() {
    let m = hashwise([("a", 1)]);
    assert!(m.test(&Value::map_from([("a", Value::Int(1))])));
    assert!(!m.test(&Value::map_from([("a", Value::Int(1)), ("b", Value::Int(2))])));
    assert!(!m.test(&Value::map_from([("b", Value::Int(1))])));
    assert!(!m.test(&str_map(&[])));
}

#[test]
fn reference_patterns_can_be_matchers() {
    let m = hashwise([("a", any([1, 2])), ("b", any([3]))]);
    assert!(m.test(&Value::map_from([("a", Value::Int(2)), ("b", Value::Int(3))])));
    assert!(!m.test(&Value::map_from([("a", Value::Int(3)), ("b", Value::Int(3))])));
}

#[test]
fn duplicate_reference_keys_keep_the_last() {
    let m = hashwise([("a", 1), ("a", 2)]);
    assert!(m.test(&Value::map_from([("a", Value::Int(2))])));
    assert!(!m.test(&Value::map_from([("a", Value::Int(1))])));
}

#[test]
fn empty_reference() {
    let empty: [(&str, i32); 0] = [];
    assert!(hashwise(empty).test(&str_map(&[])));
    assert!(!hashwise(empty).test(&abc()));
    assert!(sub_hash(empty).test(&abc()));
    assert_eq!(hashwise(empty).label(), "hashwise");
}
