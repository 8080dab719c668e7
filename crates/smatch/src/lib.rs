//! Composable structural value matchers.
//!
//! A [`Matcher`] is an immutable predicate over a dynamic [`Value`]. This
//! crate provides factories for them:
//!
//! - Combinators: [`any`], [`all`], [`none`], [`one`], [`delegate`]
//! - Scalars: [`number`], [`integer`], [`range`], [`string`], [`string_length`], ...
//! - References: [`object`], [`instance_of`], [`ref_type`], [`address`]
//! - Containers: [`tuple`], [`head`], [`sequence`], [`contains`], [`sorted`],
//!   [`sub_hash`], [`hashwise`], ...
//! - Structural equality: [`value`] and [`equivalent`]
//!
//! Anywhere a rule is expected, a plain value may stand in for "equivalent
//! to this value" (see [`Pattern`]).
//!
//! # Entry points
//!
//! [`matches`] tests a subject against a pattern. [`smartmatch`] takes two
//! operands and works out which one is the rule.
//!
//! ```text
//! use smatch::{matches, tuple, any, patterns, Value};
//!
//! let point = Value::list(vec![Value::Int(1), Value::Int(3)]);
//! assert!(matches(&point, tuple(patterns![1, any([2, 3])])));
//! ```
//!
//! # Errors
//!
//! Verdicts are plain booleans; a type mismatch is `false`. [`MatchError`]
//! is reserved for misuse: fan-out builders given the wrong number of
//! values, [`Matcher::to_bool`] outside of a match, and [`value`] given a
//! handle or foreign data.

mod binding;
mod combinators;
mod dispatch;
mod equivalence;
mod errors;
mod logging;
mod matcher;
mod reference;
mod scalar;
mod structural;

#[cfg(test)]
mod test_helpers;

pub use smatch_value::{
    Class, ClassBuilder, CodeFn, CodeValue, ForeignValue, HandleValue, Heap, InstanceValue,
    RefKind, Stringifier, UnknownRefKind, Value, ValueKind,
};

pub use binding::{binding_depth, current_subject};
pub use combinators::{all, always, any, delegate, never, none, one};
pub use dispatch::{matches, smartmatch};
pub use equivalence::{equivalent, value};
pub use errors::{MatchError, MatchResult};
pub use logging::init_tracing;
pub use matcher::{matcher_class, Matcher, Pattern};
pub use reference::{address, instance_of, object, ref_type};
pub use scalar::{
    at_least, at_most, defined, even, falsy, integer, less_than, more_than, negative, number,
    numeric_equals, numeric_equals_each, numeric_equals_one, odd, positive, range, string,
    string_equals, string_equals_each, string_equals_one, string_length, truthy, undef,
};
pub use structural::{
    array, array_length, contains, contains_any, hash, hash_keys, hash_values, hashwise, head,
    sequence, sorted, sorted_by, sub_hash, tuple,
};
