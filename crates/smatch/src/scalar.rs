//! Scalar matchers: numbers, text, definedness and truthiness.
//!
//! Numeric matchers accept `Int` and `Float` subjects only; strings are never
//! treated as numbers. Text matchers accept anything with a text conversion
//! (see [`Value::to_text`]).

use std::cmp::Ordering;

use smatch_value::{Number, Value};

use crate::combinators::all;
use crate::{MatchError, MatchResult, Matcher, Pattern};

/// Numeric comparison against a fixed cutoff. Ints and floats compare
/// exactly; NaN never satisfies a comparison.
fn compare(label: &'static str, cutoff: Number, accept: fn(Ordering) -> bool) -> Matcher {
    let cutoff = Value::from(cutoff);
    Matcher::new(move |subject| subject.numeric_cmp(&cutoff).is_some_and(accept)).labelled(label)
}

/// Whether the subject is an integral number; `Some(true)` when even.
fn is_even(subject: &Value) -> Option<bool> {
    match subject {
        Value::Int(n) => Some(n.rem_euclid(2) == 0),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f.rem_euclid(2.0) == 0.0),
        _ => None,
    }
}

/// Build one matcher per value with `build`.
fn fan_out<T, I>(
    function: &'static str,
    values: I,
    build: impl Fn(T) -> Matcher,
) -> MatchResult<Vec<Matcher>>
where
    I: IntoIterator<Item = T>,
{
    let matchers: Vec<Matcher> = values.into_iter().map(build).collect();
    if matchers.is_empty() {
        tracing::debug!(function, "fan-out matcher built from no values");
        return Err(MatchError::MissingArguments { function });
    }
    Ok(matchers)
}

/// Require exactly one value and build its matcher.
fn exactly_one<T>(
    function: &'static str,
    values: Vec<T>,
    build: impl FnOnce(T) -> Matcher,
) -> MatchResult<Matcher> {
    let got = values.len();
    let mut values = values.into_iter();
    match (values.next(), values.next()) {
        (Some(only), None) => Ok(build(only)),
        (None, _) => {
            tracing::debug!(function, "single-value matcher built from no values");
            Err(MatchError::MissingArguments { function })
        }
        (Some(_), Some(_)) => {
            tracing::debug!(function, got, "single-value matcher built from several values");
            Err(MatchError::TooManyArguments { function, got })
        }
    }
}

// Numbers

pub fn number() -> Matcher {
    Matcher::new(Value::is_number).labelled("number")
}

/// A finite number with no fractional part.
pub fn integer() -> Matcher {
    Matcher::new(|subject| is_even(subject).is_some()).labelled("integer")
}

pub fn even() -> Matcher {
    Matcher::new(|subject| is_even(subject) == Some(true)).labelled("even")
}

/// An odd integer; negative odd numbers count.
pub fn odd() -> Matcher {
    Matcher::new(|subject| is_even(subject) == Some(false)).labelled("odd")
}

pub fn more_than(cutoff: impl Into<Number>) -> Matcher {
    compare("more_than", cutoff.into(), Ordering::is_gt)
}

pub fn less_than(cutoff: impl Into<Number>) -> Matcher {
    compare("less_than", cutoff.into(), Ordering::is_lt)
}

pub fn at_least(cutoff: impl Into<Number>) -> Matcher {
    compare("at_least", cutoff.into(), Ordering::is_ge)
}

pub fn at_most(cutoff: impl Into<Number>) -> Matcher {
    compare("at_most", cutoff.into(), Ordering::is_le)
}

/// A number in `low..=high`.
pub fn range(low: impl Into<Number>, high: impl Into<Number>) -> Matcher {
    all([at_least(low), at_most(high)]).labelled("range")
}

pub fn positive() -> Matcher {
    more_than(0).labelled("positive")
}

pub fn negative() -> Matcher {
    less_than(0).labelled("negative")
}

/// A number numerically equal to `n`.
pub fn numeric_equals(n: impl Into<Number>) -> Matcher {
    compare("numeric_equals", n.into(), Ordering::is_eq)
}

/// One [`numeric_equals`] matcher per value.
///
/// # Errors
///
/// [`MatchError::MissingArguments`] when `values` is empty.
pub fn numeric_equals_each<N: Into<Number>>(values: impl IntoIterator<Item = N>) -> MatchResult<Vec<Matcher>> {
    fan_out(
        "numeric_equals",
        values.into_iter().map(Into::into),
        |n: Number| numeric_equals(n),
    )
}

/// [`numeric_equals`] for a caller holding a collection that must contain
/// exactly one value.
pub fn numeric_equals_one<N: Into<Number>>(values: impl IntoIterator<Item = N>) -> MatchResult<Matcher> {
    exactly_one(
        "numeric_equals",
        values.into_iter().map(Into::into).collect(),
        |n: Number| numeric_equals(n),
    )
}

// Text

/// Anything with a text conversion: defined scalars, and instances whose
/// class has a stringifier.
pub fn string() -> Matcher {
    Matcher::new(|subject| subject.to_text().is_some()).labelled("string")
}

/// A [`string`] whose length in characters matches `length`.
pub fn string_length(length: impl Into<Pattern>) -> Matcher {
    let length = length.into();
    Matcher::new(move |subject| {
        subject.to_text().is_some_and(|text| {
            let count = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
            length.test(&Value::Int(count))
        })
    })
    .labelled("string_length")
}

/// A value whose text conversion equals `expected`.
pub fn string_equals(expected: impl Into<String>) -> Matcher {
    let expected = expected.into();
    Matcher::new(move |subject| subject.to_text().is_some_and(|text| text == expected.as_str()))
        .labelled("string_equals")
}

/// One [`string_equals`] matcher per value.
///
/// # Errors
///
/// [`MatchError::MissingArguments`] when `values` is empty.
pub fn string_equals_each<S: Into<String>>(values: impl IntoIterator<Item = S>) -> MatchResult<Vec<Matcher>> {
    fan_out(
        "string_equals",
        values.into_iter().map(Into::into),
        |s: String| string_equals(s),
    )
}

pub fn string_equals_one<S: Into<String>>(values: impl IntoIterator<Item = S>) -> MatchResult<Matcher> {
    exactly_one(
        "string_equals",
        values.into_iter().map(Into::into).collect(),
        |s: String| string_equals(s),
    )
}

// Definedness and truthiness

pub fn defined() -> Matcher {
    Matcher::new(Value::is_defined).labelled("defined")
}

pub fn undef() -> Matcher {
    Matcher::new(|subject| !subject.is_defined()).labelled("undef")
}

pub fn truthy() -> Matcher {
    Matcher::new(Value::is_truthy).labelled("truthy")
}

pub fn falsy() -> Matcher {
    Matcher::new(|subject| !subject.is_truthy()).labelled("falsy")
}
