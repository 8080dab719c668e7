//! Usage faults.
//!
//! A non-matching subject is never an error: every matcher answers `false`
//! for subjects of the wrong type. `MatchError` covers misuse only, raised
//! where a matcher is built or coerced.

use smatch_value::ValueKind;

/// Result of a fallible matcher construction or coercion.
pub type MatchResult<T> = Result<T, MatchError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// A fan-out builder was called with no values.
    #[error("{function} requires at least one value")]
    MissingArguments { function: &'static str },

    /// Several values were given where exactly one is required.
    #[error("{function} expects exactly one value, got {got}")]
    TooManyArguments { function: &'static str, got: usize },

    /// A matcher was coerced to a boolean outside of any match.
    #[error("matcher used as a boolean with no subject bound")]
    NoSubject,

    /// `value()` met a value with no equivalence matcher.
    #[error("cannot build an equivalence matcher for {type_name} ({kind})")]
    UnsupportedValue {
        kind: ValueKind,
        type_name: &'static str,
    },
}
