//! Structural equivalence.
//!
//! [`value`] compiles a concrete value into a matcher tree that accepts
//! exactly the subjects structurally equal to it; [`equivalent`] answers the
//! same question directly and is what plain-value patterns use.
//!
//! | kind | rule |
//! |---|---|
//! | instance | same storage (`address`) |
//! | scalar | literal equality |
//! | sequence | `tuple` of element equivalences |
//! | map | `hashwise` of value equivalences |
//! | code, reference | same storage (`address`) |
//! | handle, unknown | `value` fails; `equivalent` falls back to identity |

use std::cmp::Ordering;

use smatch_stack::ensure_sufficient_stack;
use smatch_value::{Value, ValueKind};

use crate::reference::address;
use crate::structural::{hashwise, tuple};
use crate::{MatchError, MatchResult, Matcher};

/// Compile `v` into a deep structural-equality matcher.
///
/// # Errors
///
/// [`MatchError::UnsupportedValue`] if `v` is, or contains, a handle or a
/// foreign value.
#[tracing::instrument(level = "trace", skip_all, fields(kind = %v.kind()))]
pub fn value(v: &Value) -> MatchResult<Matcher> {
    ensure_sufficient_stack(|| match v.kind() {
        ValueKind::Instance | ValueKind::OpaqueRef => Ok(address(v)),
        ValueKind::Scalar => Ok(literal(v)),
        ValueKind::Sequence => {
            let entries = v
                .as_list()
                .unwrap_or_default()
                .iter()
                .map(value)
                .collect::<MatchResult<Vec<_>>>()?;
            Ok(tuple(entries))
        }
        ValueKind::Map => {
            let entries = v
                .as_map()
                .into_iter()
                .flatten()
                .map(|(key, item)| Ok((key.clone(), value(item)?)))
                .collect::<MatchResult<Vec<_>>>()?;
            Ok(hashwise(entries))
        }
        kind @ (ValueKind::Unsupported | ValueKind::Unknown) => {
            tracing::debug!(%kind, type_name = v.type_name(), "no equivalence matcher for value");
            Err(MatchError::UnsupportedValue {
                kind,
                type_name: v.type_name(),
            })
        }
    })
}

/// Whether `subject` is structurally equivalent to `pattern`.
///
/// Agrees with `value(pattern)` wherever that succeeds; values it rejects
/// are compared by identity instead.
pub fn equivalent(pattern: &Value, subject: &Value) -> bool {
    ensure_sufficient_stack(|| match (pattern, subject) {
        (Value::List(expected), Value::List(actual)) => {
            expected.len() == actual.len()
                && expected
                    .iter()
                    .zip(actual.iter())
                    .all(|(e, a)| equivalent(e, a))
        }
        (Value::Map(expected), Value::Map(actual)) => {
            expected.len() == actual.len()
                && expected
                    .iter()
                    .zip(actual.iter())
                    .all(|((ek, ev), (ak, av))| ek == ak && equivalent(ev, av))
        }
        _ => match pattern.kind() {
            ValueKind::Scalar => literal_eq(pattern, subject),
            ValueKind::Sequence | ValueKind::Map => false,
            ValueKind::Instance
            | ValueKind::OpaqueRef
            | ValueKind::Unsupported
            | ValueKind::Unknown => pattern.same_storage(subject),
        },
    })
}

fn literal(expected: &Value) -> Matcher {
    let expected = expected.clone();
    Matcher::new(move |subject| literal_eq(&expected, subject)).labelled("literal")
}

/// Literal equality of a scalar against any subject.
///
/// `Undef` matches only `Undef` and booleans only booleans. Numbers compare
/// exactly across ints and floats, and a NaN literal matches any NaN.
/// Strings compare exactly against strings.
fn literal_eq(expected: &Value, subject: &Value) -> bool {
    match (expected, subject) {
        (Value::Undef, Value::Undef) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Float(a), Value::Float(b)) if a.is_nan() && b.is_nan() => true,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            expected.numeric_cmp(subject) == Some(Ordering::Equal)
        }
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => false,
    }
}
