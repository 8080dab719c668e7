//! Key-value container matchers.

use std::collections::BTreeMap;

use smatch_value::Value;

use crate::{Matcher, Pattern};

/// Run `f` on the entries of an unblessed map; `false` for anything else.
fn with_map(subject: &Value, f: impl FnOnce(&BTreeMap<String, Value>) -> bool) -> bool {
    subject.as_map().is_some_and(f)
}

/// Collect a reference map. A repeated key keeps its last pattern.
fn collect_reference<K, P>(reference: impl IntoIterator<Item = (K, P)>) -> BTreeMap<String, Pattern>
where
    K: Into<String>,
    P: Into<Pattern>,
{
    reference
        .into_iter()
        .map(|(key, pattern)| (key.into(), pattern.into()))
        .collect()
}

/// Any unblessed map.
pub fn hash() -> Matcher {
    Matcher::new(|subject| subject.as_map().is_some()).labelled("hash")
}

/// A map whose sorted key list (a list of strings) matches `keys`.
pub fn hash_keys(keys: impl Into<Pattern>) -> Matcher {
    let keys = keys.into();
    Matcher::new(move |subject| {
        with_map(subject, |entries| {
            let list = entries.keys().map(|k| Value::string(k.as_str())).collect();
            keys.test(&Value::list(list))
        })
    })
    .labelled("hash_keys")
}

/// A map whose values, listed in key order, match `values`.
pub fn hash_values(values: impl Into<Pattern>) -> Matcher {
    let values = values.into();
    Matcher::new(move |subject| {
        with_map(subject, |entries| {
            values.test(&Value::list(entries.values().cloned().collect()))
        })
    })
    .labelled("hash_values")
}

/// Subset test: every reference key is present in the subject and its value
/// matches the reference pattern. Extra subject keys are allowed.
///
/// # Example
///
/// ```text
/// let m = sub_hash([("a", 1)]);
/// assert!(m.test(&Value::map_from([("a", Value::Int(1)), ("b", Value::Int(2))])));
/// ```
pub fn sub_hash<K, P>(reference: impl IntoIterator<Item = (K, P)>) -> Matcher
where
    K: Into<String>,
    P: Into<Pattern>,
{
    let reference = collect_reference(reference);
    Matcher::new(move |subject| {
        with_map(subject, |entries| {
            entries.len() >= reference.len()
                && reference.iter().all(|(key, pattern)| {
                    entries.get(key).is_some_and(|item| pattern.test(item))
                })
        })
    })
    .labelled("sub_hash")
}

/// Full key-set equality: the subject has exactly the reference keys and each
/// value matches the reference pattern at that key.
pub fn hashwise<K, P>(reference: impl IntoIterator<Item = (K, P)>) -> Matcher
where
    K: Into<String>,
    P: Into<Pattern>,
{
    let reference = collect_reference(reference);
    Matcher::new(move |subject| {
        with_map(subject, |entries| {
            entries.len() == reference.len()
                && entries.keys().eq(reference.keys())
                && reference
                    .iter()
                    .all(|(key, pattern)| entries.get(key).is_some_and(|item| pattern.test(item)))
        })
    })
    .labelled("hashwise")
}

#[cfg(test)]
mod tests;
