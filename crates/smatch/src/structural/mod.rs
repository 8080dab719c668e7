//! Sequence and map predicates.
//!
//! Every matcher here first requires an unblessed container of the right
//! kind (`ref_type(RefKind::List)` or `ref_type(RefKind::Map)`); instances
//! that happen to wrap a list or map do not qualify.

mod array;
mod hash;

pub use array::{
    array, array_length, contains, contains_any, head, sequence, sorted, sorted_by, tuple,
};
pub use hash::{hash, hash_keys, hash_values, hashwise, sub_hash};
