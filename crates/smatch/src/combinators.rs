//! Boolean composition of patterns.
//!
//! All combinators evaluate their patterns in the order given and stop as
//! soon as the verdict is known.

use smatch_value::Value;

use crate::matcher::collect_patterns;
use crate::{Matcher, Pattern};

/// At least one pattern matches. Empty: never matches.
///
/// # Example
///
/// ```text
/// let small = any([1, 2, 3]);
/// assert!(small.test(&Value::Int(2)));
/// ```
pub fn any<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Matcher {
    let patterns = collect_patterns(patterns);
    Matcher::new(move |subject| patterns.iter().any(|p| p.test(subject))).labelled("any")
}

/// Every pattern matches. Empty: always matches.
pub fn all<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Matcher {
    let patterns = collect_patterns(patterns);
    Matcher::new(move |subject| patterns.iter().all(|p| p.test(subject))).labelled("all")
}

/// No pattern matches. Empty: always matches.
pub fn none<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Matcher {
    let patterns = collect_patterns(patterns);
    Matcher::new(move |subject| !patterns.iter().any(|p| p.test(subject))).labelled("none")
}

/// Exactly one pattern matches.
///
/// Stops at the second match.
pub fn one<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Matcher {
    let patterns = collect_patterns(patterns);
    Matcher::new(move |subject| {
        let mut count = 0usize;
        for pattern in &patterns {
            if pattern.test(subject) {
                count += 1;
                if count > 1 {
                    return false;
                }
            }
        }
        count == 1
    })
    .labelled("one")
}

/// Match a value derived from the subject.
///
/// `producer` maps the subject to a sequence of derived values; only the
/// first one is tested against `pattern`. If nothing is produced the
/// matcher fails.
///
/// ```text
/// let first_is_one = delegate(|v| v.as_list().unwrap_or_default().to_vec(), 1);
/// ```
pub fn delegate<F, I>(producer: F, pattern: impl Into<Pattern>) -> Matcher
where
    F: Fn(&Value) -> I + Send + Sync + 'static,
    I: IntoIterator<Item = Value>,
{
    let pattern = pattern.into();
    Matcher::new(move |subject| {
        producer(subject)
            .into_iter()
            .next()
            .is_some_and(|derived| pattern.test(&derived))
    })
    .labelled("delegate")
}

/// Matches everything.
pub fn always() -> Matcher {
    Matcher::new(|_| true).labelled("always")
}

/// Matches nothing.
pub fn never() -> Matcher {
    Matcher::new(|_| false).labelled("never")
}
