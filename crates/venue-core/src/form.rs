//! Form-list controller
//!
//! Owns the ordered list of location entries, the per-entry validation
//! messages from the last save, and the success flag.

use crate::error::FormError;
use crate::model::{FieldName, FieldUpdate, FormEntry, RawValue};
use crate::validation::{validate_all, ErrorSet, FieldErrors};

/// Result of [`FormList::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Every entry passed validation
    Submitted { count: usize },
    /// Some entries have blank required fields
    Invalid { entries_with_errors: usize },
}

/// Ordered list of entries plus validation and success state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormList {
    entries: Vec<FormEntry>,
    errors: ErrorSet,
    success: bool,
}

impl Default for FormList {
    fn default() -> Self {
        Self::new()
    }
}

impl FormList {
    /// A list holding one blank entry
    pub fn new() -> Self {
        Self {
            entries: vec![FormEntry::blank()],
            errors: ErrorSet::new(),
            success: false,
        }
    }

    /// Build a list from existing entries
    pub fn from_entries(entries: Vec<FormEntry>) -> Self {
        Self {
            entries,
            errors: ErrorSet::new(),
            success: false,
        }
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&FormEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validation messages from the last failed save
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn errors_for(&self, index: usize) -> Option<&FieldErrors> {
        self.errors.get(&index)
    }

    pub fn error_for(&self, index: usize, field: FieldName) -> Option<&str> {
        self.errors
            .get(&index)
            .and_then(|fields| fields.get(&field))
            .map(String::as_str)
    }

    /// Whether the success acknowledgment is showing
    pub fn is_success(&self) -> bool {
        self.success
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Replace one field of one entry. No validation happens here.
    pub fn edit_field(&mut self, index: usize, update: FieldUpdate) -> Result<(), FormError> {
        self.check_index(index)?;
        tracing::debug!(index, field = ?update.field(), "Editing field");
        self.entries[index].apply(update);
        Ok(())
    }

    /// Coerce a raw control value and apply it.
    ///
    /// Returns `Ok(false)` when the field does not accept raw input.
    pub fn edit_raw(
        &mut self,
        index: usize,
        field: FieldName,
        raw: RawValue,
    ) -> Result<bool, FormError> {
        self.check_index(index)?;
        match FieldUpdate::from_raw(field, raw) {
            Some(update) => {
                self.edit_field(index, update)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Append an independent copy of `entries[index]`, returning its index
    pub fn duplicate_entry(&mut self, index: usize) -> Result<usize, FormError> {
        self.check_index(index)?;
        let copy = self.entries[index].clone();
        self.entries.push(copy);
        let new_index = self.entries.len() - 1;
        tracing::info!(source = index, new_index, "Duplicated location entry");
        Ok(new_index)
    }

    /// Append a blank entry, returning its index
    pub fn append_blank_entry(&mut self) -> usize {
        self.entries.push(FormEntry::blank());
        let new_index = self.entries.len() - 1;
        tracing::info!(new_index, "Appended blank location entry");
        new_index
    }

    /// Validate every entry and either surface errors or mark success
    pub fn save(&mut self) -> SaveOutcome {
        let errors = validate_all(&self.entries);

        if !errors.is_empty() {
            let entries_with_errors = errors.len();
            tracing::info!(entries_with_errors, "Save blocked by validation errors");
            self.errors = errors;
            self.success = false;
            return SaveOutcome::Invalid {
                entries_with_errors,
            };
        }

        self.errors.clear();
        self.success = true;

        match serde_json::to_string(&self.entries) {
            Ok(json) => tracing::info!(count = self.entries.len(), entries = %json, "Form submitted"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize submitted entries"),
        }

        SaveOutcome::Submitted {
            count: self.entries.len(),
        }
    }

    /// Hide the success acknowledgment
    pub fn dismiss_success(&mut self) {
        self.success = false;
    }

    /// Discard all entries and return to a single blank entry
    pub fn reset(&mut self) {
        tracing::info!(discarded = self.entries.len(), "Form reset");
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn fill(list: &mut FormList, index: usize) {
        let updates = [
            FieldUpdate::Title("Main Hall".into()),
            FieldUpdate::Address("Jalija 4".into()),
            FieldUpdate::City("Zenica".into()),
            FieldUpdate::Country("US".into()),
            FieldUpdate::Region(Region::new("CA", "California")),
            FieldUpdate::PostalCode("90210".into()),
            FieldUpdate::ParkingInfo("Free parking".into()),
        ];
        for update in updates {
            list.edit_field(index, update).unwrap();
        }
    }

    #[test]
    fn test_new_list_has_one_blank_entry() {
        let list = FormList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entry(0), Some(&FormEntry::blank()));
        assert!(list.errors().is_empty());
        assert!(!list.is_success());
    }

    #[test]
    fn test_save_blank_entry_reports_seven_errors() {
        let mut list = FormList::new();
        let outcome = list.save();

        assert_eq!(
            outcome,
            SaveOutcome::Invalid {
                entries_with_errors: 1
            }
        );
        assert_eq!(list.errors_for(0).unwrap().len(), 7);
        assert_eq!(
            list.error_for(0, FieldName::Region),
            Some("State is required.")
        );
        assert!(!list.is_success());
    }

    #[test]
    fn test_save_filled_entry_succeeds() {
        let mut list = FormList::new();
        fill(&mut list, 0);

        assert_eq!(list.save(), SaveOutcome::Submitted { count: 1 });
        assert!(list.errors().is_empty());
        assert!(list.is_success());
        assert_eq!(list.entry(0).unwrap().region, Region::new("CA", "California"));
    }

    #[test]
    fn test_fixing_invalid_entry_then_saving_succeeds() {
        let mut list = FormList::new();
        fill(&mut list, 0);
        list.append_blank_entry();
        fill(&mut list, 1);
        list.append_blank_entry();

        list.save();
        assert!(!list.is_success());
        assert_eq!(list.errors().keys().copied().collect::<Vec<_>>(), vec![2]);

        fill(&mut list, 2);
        assert_eq!(list.save(), SaveOutcome::Submitted { count: 3 });
        assert!(list.errors().is_empty());
        assert!(list.is_success());
    }

    #[test]
    fn test_duplicate_is_independent_copy() {
        let mut list = FormList::new();
        fill(&mut list, 0);

        let copy = list.duplicate_entry(0).unwrap();
        assert_eq!(copy, 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.entry(0), list.entry(1));

        list.edit_field(1, FieldUpdate::City("Sarajevo".into()))
            .unwrap();
        assert_eq!(list.entry(0).unwrap().city, "Zenica");
        assert_eq!(list.entry(1).unwrap().city, "Sarajevo");
    }

    #[test]
    fn test_edit_field_changes_only_target() {
        let mut list = FormList::new();
        fill(&mut list, 0);
        list.duplicate_entry(0).unwrap();
        list.append_blank_entry();
        let snapshot = list.clone();

        list.edit_field(1, FieldUpdate::HasParkingFee(true)).unwrap();

        assert_eq!(list.entry(0), snapshot.entry(0));
        assert_eq!(list.entry(2), snapshot.entry(2));
        let expected = FormEntry {
            has_parking_fee: true,
            ..snapshot.entry(1).unwrap().clone()
        };
        assert_eq!(list.entry(1), Some(&expected));
    }

    #[test]
    fn test_edit_raw_coerces_checkbox() {
        let mut list = FormList::new();
        assert_eq!(
            list.edit_raw(0, FieldName::HasParkingFee, RawValue::Checked(true)),
            Ok(true)
        );
        assert!(list.entry(0).unwrap().has_parking_fee);
        assert_eq!(
            list.edit_raw(0, FieldName::Region, RawValue::Text("CA".into())),
            Ok(false)
        );
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut list = FormList::new();
        let before = list.clone();

        assert_eq!(
            list.edit_field(3, FieldUpdate::City("x".into())),
            Err(FormError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(list.duplicate_entry(1).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_dismiss_success_and_reset() {
        let mut list = FormList::new();
        fill(&mut list, 0);
        list.append_blank_entry();
        list.save();
        assert_eq!(list.errors().len(), 1);

        fill(&mut list, 1);
        list.save();
        assert!(list.is_success());
        list.dismiss_success();
        assert!(!list.is_success());

        list.reset();
        assert_eq!(list, FormList::new());
    }
}
