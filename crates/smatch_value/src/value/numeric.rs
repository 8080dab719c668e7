//! Exact numeric comparison across `Int` and `Float`.
//!
//! An `i64` is never rounded through `f64`: `Int(2^53 + 1)` is greater than
//! `Float(2^53)`, and only `Int(2^53)` equals it.

use std::cmp::Ordering;

use super::Value;

/// `2^63`, the first float above every `i64`.
pub(super) const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A numeric literal, as taken by numeric matcher factories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Int(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f64::from(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

/// Compare an integer with a float without rounding the integer.
///
/// `None` when `f` is NaN.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the truncated float is inside the i64 range"
)]
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_LIMIT {
        return Some(Ordering::Less);
    }
    if f < -I64_LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    let ord = i.cmp(&(whole as i64)).then_with(|| {
        // same integer part: the fraction decides
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    Some(ord)
}

impl Value {
    /// Numeric comparison of two numbers.
    ///
    /// `None` if either side is not a number, or a NaN is involved. `0.0`
    /// and `-0.0` are equal.
    pub fn numeric_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}
