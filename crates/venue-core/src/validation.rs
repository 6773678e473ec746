//! Per-entry field validation
//!
//! The only rule is "required fields must be non-blank after trimming".
//! Failures are data, not errors: they are collected into [`FieldErrors`]
//! and shown next to the offending inputs.

use std::collections::BTreeMap;

use crate::model::{FieldName, FormEntry};

/// Validation messages for one entry, keyed by field
pub type FieldErrors = BTreeMap<FieldName, String>;

/// Validation messages for a whole list, keyed by entry index.
/// Only entries with at least one error are present.
pub type ErrorSet = BTreeMap<usize, FieldErrors>;

/// Message for a blank required field
pub fn required_message(field: FieldName) -> String {
    format!("{} is required.", field.label())
}

/// Validate a single entry, returning an empty map when it is fully valid
pub fn validate_entry(entry: &FormEntry) -> FieldErrors {
    FieldName::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .filter(|field| {
            entry
                .text(*field)
                .map(|value| value.trim().is_empty())
                .unwrap_or(false)
        })
        .map(|field| (field, required_message(field)))
        .collect()
}

/// Validate every entry in order, keeping only entries with errors
pub fn validate_all(entries: &[FormEntry]) -> ErrorSet {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let errors = validate_entry(entry);
            (!errors.is_empty()).then_some((index, errors))
        })
        .collect()
}
