//! Shared fixtures for unit tests.

use smatch_value::Value;

pub(crate) fn int_list(items: &[i64]) -> Value {
    Value::list(items.iter().copied().map(Value::Int).collect())
}

pub(crate) fn str_map(entries: &[(&str, &str)]) -> Value {
    Value::map_from(entries.iter().map(|(k, v)| (*k, Value::string(*v))))
}
