use super::*;
use crate::test_helpers::int_list;
use crate::{any, binding_depth, current_subject, instance_of, number, object, Matcher};

#[test]
fn matches_accepts_matchers_and_values() {
    assert!(matches(&Value::Int(2), any([1, 2, 3])));
    assert!(!matches(&Value::Int(5), any([1, 2, 3])));
    assert!(matches(&Value::Int(2), 2));
    assert!(matches(&int_list(&[1, 2]), int_list(&[1, 2])));
}

#[test]
fn right_matcher_is_the_rule() {
    assert!(smartmatch(Value::Int(2), any([1, 2])));
    assert!(!smartmatch(Value::Int(3), any([1, 2])));
}

#[test]
fn left_matcher_is_the_rule() {
    assert!(smartmatch(any([1, 2]), Value::Int(2)));
    assert!(!smartmatch(any([1, 2]), 3));
}

#[test]
fn two_matchers_test_the_left_one_as_a_value() {
    assert!(smartmatch(object(), object()));
    assert!(smartmatch(any([1]), instance_of("Matcher")));
    assert!(!smartmatch(any([1]), any([1])));
    assert!(!smartmatch(any([1]), number()));
}

#[test]
fn right_matcher_sees_the_left_matcher() {
    let left = any([1, 2]).labelled("small");
    let unwraps_left = Matcher::new(|v| {
        Matcher::from_value(v).is_some_and(|m| m.label() == "small" && m.test(&Value::Int(2)))
    });
    assert!(smartmatch(&left, &unwraps_left));
    // roles do not swap: the left matcher never sees the right one
    assert!(!smartmatch(&unwraps_left, &left));
}

#[test]
fn two_values_use_equivalence() {
    assert!(smartmatch(2, 2.0));
    assert!(smartmatch("a", "a"));
    assert!(!smartmatch("a", 1));
    assert!(smartmatch(int_list(&[1]), int_list(&[1])));
}

#[test]
fn subject_is_bound_for_the_rule() {
    let sees_subject = Matcher::new(|v| current_subject().as_ref() == Some(v));
    assert!(smartmatch(Value::Int(1), &sees_subject));
    assert!(smartmatch(&sees_subject, Value::string("x")));
    assert_eq!(binding_depth(), 0);
}
