//! Smatch Value - the dynamic value model tested by smatch matchers.
//!
//! This crate provides:
//! - `Value`, a closed tagged enumeration of scalars, containers, class
//!   instances and opaque references
//! - `Heap<T>`, the shared storage that gives heap values their identity
//! - `ValueKind` / `RefKind`, the classifications matchers dispatch on
//! - `Class` / `InstanceValue`, classes with an explicit ancestry table
//! - `Value::total_cmp`, the default ordering used for sorting
//! - `Value::numeric_cmp` and `Number`, exact comparison across ints and floats

mod value;

pub use value::{
    Class, ClassBuilder, CodeFn, CodeValue, ForeignValue, HandleValue, Heap, InstanceValue,
    Number, RefKind, Stringifier, UnknownRefKind, Value, ValueKind,
};
