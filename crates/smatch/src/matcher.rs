//! The matcher object model.
//!
//! A [`Matcher`] is an immutable predicate over a subject [`Value`]. A
//! [`Pattern`] is what factories accept wherever a rule is expected: either a
//! matcher, or a plain value standing for "equivalent to this value".

// Arc is the shared, immutable predicate behind Matcher
#![expect(
    clippy::disallowed_types,
    reason = "Arc shares the predicate between clones of a Matcher"
)]

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use smatch_stack::ensure_sufficient_stack;
use smatch_value::{Class, Value};

use crate::binding::{self, current_subject};
use crate::equivalence::equivalent;
use crate::{MatchError, MatchResult};

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

static MATCHER_CLASS: OnceLock<Class> = OnceLock::new();

/// The class of matchers viewed as values (see [`Matcher::to_value`]).
pub fn matcher_class() -> &'static Class {
    MATCHER_CLASS.get_or_init(|| Class::new("Matcher"))
}

/// An immutable predicate over values.
///
/// Cloning is cheap and shares the predicate. Matchers are `Send + Sync`
/// and can be evaluated concurrently.
#[derive(Clone)]
pub struct Matcher {
    predicate: Arc<Predicate>,
    label: Cow<'static, str>,
}

impl Matcher {
    /// Wrap a predicate.
    ///
    /// # Example
    ///
    /// ```text
    /// let short = Matcher::new(|v| v.as_str().is_some_and(|s| s.len() < 4));
    /// assert!(short.test(&Value::string("abc")));
    /// ```
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Matcher {
            predicate: Arc::new(predicate),
            label: Cow::Borrowed("matcher"),
        }
    }

    /// Wrap a value-returning predicate; its result is coerced with
    /// [`Value::is_truthy`].
    pub fn from_truthy(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Matcher::new(move |subject| f(subject).is_truthy())
    }

    /// Attach a label shown by `Debug`.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Test `subject`.
    ///
    /// The subject is bound for the duration of the call, so the predicate
    /// (or anything it calls) may use [`Matcher::to_bool`].
    pub fn test(&self, subject: &Value) -> bool {
        ensure_sufficient_stack(|| {
            let _bound = binding::bind(subject);
            (self.predicate)(subject)
        })
    }

    /// Standalone boolean coercion: test the innermost subject bound on
    /// this thread.
    ///
    /// Returns [`MatchError::NoSubject`] when called outside of any match.
    pub fn to_bool(&self) -> MatchResult<bool> {
        match current_subject() {
            Some(subject) => Ok(self.test(&subject)),
            None => {
                tracing::debug!(label = %self.label, "boolean coercion with no bound subject");
                Err(MatchError::NoSubject)
            }
        }
    }

    /// This matcher as a subject value: an instance of [`matcher_class`]
    /// carrying its label and the matcher itself.
    ///
    /// Each call builds a fresh instance, so identity matchers built from
    /// one result do not match another.
    pub fn to_value(&self) -> Value {
        Value::instance(
            matcher_class(),
            [
                ("label", Value::string(self.label())),
                ("predicate", Value::foreign(self.clone())),
            ],
        )
    }

    /// Recover the matcher wrapped by [`Matcher::to_value`].
    pub fn from_value(value: &Value) -> Option<Matcher> {
        let inst = value.as_instance()?;
        if inst.class != *matcher_class() {
            return None;
        }
        match inst.get("predicate")? {
            Value::Foreign(data) => data.downcast_ref::<Matcher>().cloned(),
            _ => None,
        }
    }

    /// Whether both handles share the same predicate.
    pub fn ptr_eq(&self, other: &Matcher) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matcher({})", self.label)
    }
}

/// A rule: a matcher, or a plain value matched by equivalence.
///
/// Plain values compare as follows: numbers numerically, strings exactly,
/// lists and maps structurally, instances and other references by identity.
#[derive(Clone, Debug)]
pub enum Pattern {
    Matcher(Matcher),
    Value(Value),
}

impl Pattern {
    pub fn test(&self, subject: &Value) -> bool {
        match self {
            Pattern::Matcher(m) => m.test(subject),
            Pattern::Value(expected) => equivalent(expected, subject),
        }
    }

    /// Turn the pattern into a matcher. Never fails: plain values become an
    /// equivalence matcher.
    pub fn into_matcher(self) -> Matcher {
        match self {
            Pattern::Matcher(m) => m,
            Pattern::Value(expected) => {
                Matcher::new(move |subject| equivalent(&expected, subject)).labelled("equivalent")
            }
        }
    }

    pub fn as_matcher(&self) -> Option<&Matcher> {
        match self {
            Pattern::Matcher(m) => Some(m),
            Pattern::Value(_) => None,
        }
    }
}

impl From<Matcher> for Pattern {
    fn from(m: Matcher) -> Self {
        Pattern::Matcher(m)
    }
}

impl From<&Matcher> for Pattern {
    fn from(m: &Matcher) -> Self {
        Pattern::Matcher(m.clone())
    }
}

impl From<Value> for Pattern {
    fn from(v: Value) -> Self {
        Pattern::Value(v)
    }
}

impl From<&Value> for Pattern {
    fn from(v: &Value) -> Self {
        Pattern::Value(v.clone())
    }
}

macro_rules! pattern_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Pattern {
                fn from(v: $ty) -> Self {
                    Pattern::Value(Value::from(v))
                }
            }
        )*
    };
}

pattern_from_value!(bool, i32, i64, f64, &str, String, Vec<Value>);

/// Collect anything pattern-like into a `Vec<Pattern>`.
pub(crate) fn collect_patterns<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Vec<Pattern> {
    patterns.into_iter().map(Into::into).collect()
}

/// Build a `Vec<Pattern>` from heterogeneous pattern expressions.
///
/// ```text
/// let m = any(patterns![1, "two", number()]);
/// ```
#[macro_export]
macro_rules! patterns {
    () => {
        ::std::vec::Vec::<$crate::Pattern>::new()
    };
    ($($pattern:expr),+ $(,)?) => {
        ::std::vec![$($crate::Pattern::from($pattern)),+]
    };
}

#[cfg(test)]
mod tests;
