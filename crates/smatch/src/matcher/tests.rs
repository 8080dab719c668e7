use super::*;
use crate::binding::binding_depth;
use crate::test_helpers::{int_list, str_map};

#[test]
fn new_wraps_predicate() {
    let short = Matcher::new(|v| v.as_str().is_some_and(|s| s.len() < 4));
    assert!(short.test(&Value::string("abc")));
    assert!(!short.test(&Value::string("abcd")));
    assert!(!short.test(&Value::Int(1)));
}

#[test]
fn from_truthy_coerces_result() {
    let echo = Matcher::from_truthy(Value::clone);
    assert!(echo.test(&Value::Int(5)));
    assert!(!echo.test(&Value::Int(0)));
    assert!(!echo.test(&Value::string("0")));
    assert!(!echo.test(&Value::Undef));
    assert!(echo.test(&Value::list(vec![])));
}

#[test]
fn invocation_is_repeatable() {
    let m = Matcher::new(|v| v.as_int() == Some(3));
    for _ in 0..3 {
        assert!(m.test(&Value::Int(3)));
        assert!(!m.test(&Value::Int(4)));
    }
}

#[test]
fn test_binds_subject_for_the_call_only() {
    let inner = Matcher::new(|v| current_subject().as_ref() == Some(v));
    assert!(inner.test(&Value::Int(9)));
    assert_eq!(binding_depth(), 0);
}

#[test]
fn to_bool_without_subject_is_a_usage_fault() {
    let m = Matcher::new(|_| true);
    assert_eq!(m.to_bool(), Err(MatchError::NoSubject));
}

#[test]
fn to_bool_uses_enclosing_subject() {
    let positive = Matcher::new(|v| v.as_number().is_some_and(|n| n > 0.0));
    let outer = Matcher::new(move |_| positive.to_bool() == Ok(true));
    assert!(outer.test(&Value::Int(4)));
    assert!(!outer.test(&Value::Int(-4)));
}

#[test]
fn nested_tests_restore_the_enclosing_binding() {
    let probe = Matcher::new(|v| v.as_int() == Some(2));
    let outer = Matcher::new(move |_| {
        let before = current_subject();
        let inner_result = probe.test(&Value::Int(2));
        inner_result && current_subject() == before
    });
    assert!(outer.test(&Value::Int(1)));
}

#[test]
fn labels_and_identity() {
    let m = Matcher::new(|_| true).labelled("always");
    assert_eq!(m.label(), "always");
    assert_eq!(format!("{m:?}"), "Matcher(always)");
    let clone = m.clone();
    assert!(m.ptr_eq(&clone));
    assert!(!m.ptr_eq(&Matcher::new(|_| true)));
}

#[test]
fn plain_value_patterns_use_equivalence() {
    assert!(Pattern::from(3).test(&Value::Int(3)));
    assert!(Pattern::from(3).test(&Value::Float(3.0)));
    assert!(!Pattern::from(3).test(&Value::string("3")));
    assert!(Pattern::from("x").test(&Value::string("x")));
    assert!(Pattern::from(int_list(&[1, 2])).test(&int_list(&[1, 2])));
    assert!(!Pattern::from(int_list(&[1, 2])).test(&int_list(&[2, 1])));
    let map = str_map(&[("a", "1")]);
    assert!(Pattern::from(&map).test(&str_map(&[("a", "1")])));
}

#[test]
fn into_matcher_keeps_matchers() {
    let m = Matcher::new(|_| false);
    let pattern = Pattern::from(&m);
    assert!(pattern.as_matcher().is_some());
    assert!(pattern.into_matcher().ptr_eq(&m));

    let plain = Pattern::from(5).into_matcher();
    assert_eq!(plain.label(), "equivalent");
    assert!(plain.test(&Value::Int(5)));
}

#[test]
fn patterns_macro_mixes_kinds() {
    let list = crate::patterns![1, "two", Matcher::new(|_| true)];
    assert_eq!(list.len(), 3);
    assert!(list[2].as_matcher().is_some());
    assert!(crate::patterns![].is_empty());
}

#[test]
fn matchers_convert_to_instance_values() {
    let m = Matcher::new(|v| v.as_int() == Some(1)).labelled("one");
    let as_value = m.to_value();
    let inst = as_value.as_instance().unwrap();
    assert_eq!(inst.class, *matcher_class());
    assert!(inst.class.isa("Matcher"));
    assert_eq!(inst.get("label"), Some(&Value::string("one")));

    let back = Matcher::from_value(&as_value).unwrap();
    assert!(back.ptr_eq(&m));
    assert!(back.test(&Value::Int(1)));
}

#[test]
fn from_value_rejects_other_instances() {
    let impostor = smatch_value::Class::new("Matcher");
    let fake = Value::instance(&impostor, [("predicate", Value::foreign(5u8))]);
    assert!(Matcher::from_value(&fake).is_none());
    assert!(Matcher::from_value(&Value::Int(1)).is_none());
}
