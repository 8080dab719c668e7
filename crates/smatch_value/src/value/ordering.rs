//! Default total ordering over values.
//!
//! Values of different kinds order by kind rank:
//! `Undef < Bool < number < Str < List < Map < Instance < Code < Ref < Handle < Foreign`.
//! Within a kind, numbers compare numerically and exactly (ints and floats
//! interleave, `0.0 == -0.0`, NaN sorts at the extremes),
//! strings lexicographically, lists element-wise then by length, maps by
//! their (key, value) pairs in key order, and everything else by address.

use std::cmp::Ordering;

use smatch_stack::ensure_sufficient_stack;

use super::Value;

fn rank(v: &Value) -> u8 {
    match v {
        Value::Undef => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(_) => 3,
        Value::List(_) => 4,
        Value::Map(_) => 5,
        Value::Instance(_) => 6,
        Value::Code(_) => 7,
        Value::Ref(_) => 8,
        Value::Handle(_) => 9,
        Value::Foreign(_) => 10,
    }
}

/// Compare two numbers exactly (see [`Value::numeric_cmp`]).
///
/// NaN has no numeric order; it is placed with `f64::total_cmp`, which puts
/// positive NaN above and negative NaN below every other number.
fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    a.numeric_cmp(b).unwrap_or_else(|| match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => Ordering::Equal,
    })
}

/// Compare two lists lexicographically.
///
/// The first differing element decides; if one list is a prefix of the
/// other, the shorter one is less.
fn compare_lists(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = x.total_cmp(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

impl Value {
    /// Total order used by default sorting.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        ensure_sufficient_stack(|| {
            let by_rank = rank(self).cmp(&rank(other));
            if by_rank != Ordering::Equal {
                return by_rank;
            }
            match (self, other) {
                (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
                (Value::Int(_) | Value::Float(_), _) => compare_numbers(self, other),
                (Value::Str(a), Value::Str(b)) => a.as_str().cmp(b.as_str()),
                (Value::List(a), Value::List(b)) => compare_lists(a, b),
                (Value::Map(a), Value::Map(b)) => {
                    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                        let ord = ka.cmp(kb).then_with(|| va.total_cmp(vb));
                        if ord != Ordering::Equal {
                            return ord;
                        }
                    }
                    a.len().cmp(&b.len())
                }
                // Same rank, no structure: undef, or identity-bearing values.
                _ => self.addr().cmp(&other.addr()),
            }
        })
    }
}
