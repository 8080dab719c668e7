//! Sequence-container matchers.

use std::cmp::Ordering;

use smatch_value::Value;

use crate::matcher::collect_patterns;
use crate::{Matcher, Pattern};

/// Run `f` on the elements of an unblessed list; `false` for anything else.
fn with_list(subject: &Value, f: impl FnOnce(&[Value]) -> bool) -> bool {
    subject.as_list().is_some_and(f)
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "container lengths never approach i64::MAX"
)]
fn length_value(len: usize) -> Value {
    Value::Int(len as i64)
}

/// Any unblessed list.
pub fn array() -> Matcher {
    Matcher::new(|subject| subject.as_list().is_some()).labelled("array")
}

/// A list whose length matches `length`.
pub fn array_length(length: impl Into<Pattern>) -> Matcher {
    let length = length.into();
    Matcher::new(move |subject| with_list(subject, |items| length.test(&length_value(items.len()))))
        .labelled("array_length")
}

/// A list with exactly as many elements as `entries`, each matching the
/// entry at the same position.
///
/// # Example
///
/// ```text
/// let m = tuple(patterns![1, any([2, 3])]);
/// assert!(m.test(&list(&[1, 3])));
/// assert!(!m.test(&list(&[1, 3, 4])));
/// ```
pub fn tuple<P: Into<Pattern>>(entries: impl IntoIterator<Item = P>) -> Matcher {
    let entries = collect_patterns(entries);
    Matcher::new(move |subject| {
        with_list(subject, |items| {
            items.len() == entries.len()
                && entries
                    .iter()
                    .zip(items.iter())
                    .all(|(entry, item)| entry.test(item))
        })
    })
    .labelled("tuple")
}

/// A list that starts with elements matching `entries`; extra trailing
/// elements are allowed.
pub fn head<P: Into<Pattern>>(entries: impl IntoIterator<Item = P>) -> Matcher {
    let entries = collect_patterns(entries);
    Matcher::new(move |subject| {
        with_list(subject, |items| {
            items.len() >= entries.len()
                && entries
                    .iter()
                    .zip(items.iter())
                    .all(|(entry, item)| entry.test(item))
        })
    })
    .labelled("head")
}

/// A list whose every element matches `element`.
pub fn sequence(element: impl Into<Pattern>) -> Matcher {
    let element = element.into();
    Matcher::new(move |subject| with_list(subject, |items| items.iter().all(|item| element.test(item))))
        .labelled("sequence")
}

/// A list in which every pattern is matched by at least one element.
///
/// Patterns are checked independently, so one element may satisfy several.
pub fn contains<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Matcher {
    let patterns = collect_patterns(patterns);
    Matcher::new(move |subject| {
        with_list(subject, |items| {
            patterns
                .iter()
                .all(|pattern| items.iter().any(|item| pattern.test(item)))
        })
    })
    .labelled("contains")
}

/// A list in which at least one pattern is matched by some element.
pub fn contains_any<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Matcher {
    let patterns = collect_patterns(patterns);
    Matcher::new(move |subject| {
        with_list(subject, |items| {
            patterns
                .iter()
                .any(|pattern| items.iter().any(|item| pattern.test(item)))
        })
    })
    .labelled("contains_any")
}

/// A list whose elements, sorted by [`Value::total_cmp`], match `pattern`.
pub fn sorted(pattern: impl Into<Pattern>) -> Matcher {
    sorted_by(Value::total_cmp, pattern).labelled("sorted")
}

/// A list whose elements, stably sorted with `comparator`, match `pattern`.
///
/// The comparator may run matches of its own; each gets its own subject
/// binding.
pub fn sorted_by(
    comparator: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    pattern: impl Into<Pattern>,
) -> Matcher {
    let pattern = pattern.into();
    Matcher::new(move |subject| {
        with_list(subject, |items| {
            let mut ordered = items.to_vec();
            ordered.sort_by(|a, b| comparator(a, b));
            pattern.test(&Value::list(ordered))
        })
    })
    .labelled("sorted_by")
}
