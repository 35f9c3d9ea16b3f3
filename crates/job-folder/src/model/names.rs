//! Maintenance helpers for small ordered name collections.
//!
//! Collections here are admin-sized, so membership is a linear scan and
//! every insert re-sorts the whole vector.

/// Returns true if `values` holds an entry equal to `value`.
pub(crate) fn contains(values: &[String], value: &str) -> bool {
    values.iter().any(|v| v == value)
}

/// Appends `value` and sorts ascending, unless it is already present.
pub(crate) fn insert_sorted(values: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if contains(values, &value) {
        return;
    }
    values.push(value);
    values.sort();
}

/// Removes the first entry equal to `value`, keeping the order of the rest.
pub(crate) fn remove_first(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    }
}

/// Collects `values`, sorts them ascending and drops repeats.
pub(crate) fn sorted(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
    values.sort();
    values.dedup();
    values
}

/// Collects `values` keeping their order.
pub(crate) fn collected(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    values.into_iter().map(Into::into).collect()
}
