//! Location entry model
//!
//! A [`FormEntry`] is a plain value record. Edits go through [`FieldUpdate`],
//! a closed set of typed commands, instead of dynamic field access.

use serde::{Deserialize, Serialize};

/// A state/province option with a stable id and display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

impl Region {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One venue's form data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub title: String,
    pub alt_name: String,
    pub address: String,
    pub city: String,
    /// ISO alpha-2 country code
    pub country: String,
    pub region: Region,
    pub postal_code: String,
    pub has_parking_fee: bool,
    pub parking_info: String,
}

impl FormEntry {
    /// Entry with every field at its empty default
    pub fn blank() -> Self {
        Self::default()
    }

    /// Apply a single field update
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(v) => self.title = v,
            FieldUpdate::AltName(v) => self.alt_name = v,
            FieldUpdate::Address(v) => self.address = v,
            FieldUpdate::City(v) => self.city = v,
            FieldUpdate::Country(v) => self.country = v,
            FieldUpdate::Region(v) => self.region = v,
            FieldUpdate::PostalCode(v) => self.postal_code = v,
            FieldUpdate::HasParkingFee(v) => self.has_parking_fee = v,
            FieldUpdate::ParkingInfo(v) => self.parking_info = v,
        }
    }

    /// Text content of a field, for fields that hold text.
    ///
    /// The region field yields the region's display name; the parking fee
    /// toggle has no text.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Title => Some(&self.title),
            FieldName::AltName => Some(&self.alt_name),
            FieldName::Address => Some(&self.address),
            FieldName::City => Some(&self.city),
            FieldName::Country => Some(&self.country),
            FieldName::Region => Some(&self.region.name),
            FieldName::PostalCode => Some(&self.postal_code),
            FieldName::HasParkingFee => None,
            FieldName::ParkingInfo => Some(&self.parking_info),
        }
    }
}

/// Closed enumeration of the fields of a [`FormEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Title,
    AltName,
    Address,
    City,
    Country,
    Region,
    PostalCode,
    HasParkingFee,
    ParkingInfo,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 9] = [
        FieldName::Title,
        FieldName::AltName,
        FieldName::Address,
        FieldName::City,
        FieldName::Country,
        FieldName::Region,
        FieldName::PostalCode,
        FieldName::HasParkingFee,
        FieldName::ParkingInfo,
    ];

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Title => "Venue Title",
            FieldName::AltName => "Alt Name",
            FieldName::Address => "Address",
            FieldName::City => "City",
            FieldName::Country => "Country",
            FieldName::Region => "State",
            FieldName::PostalCode => "Zip/Postal",
            FieldName::HasParkingFee => "Parking Fee",
            FieldName::ParkingInfo => "Parking Info",
        }
    }

    /// Placeholder shown in an empty text input
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Title => "Test",
            FieldName::Address => "Jalija",
            FieldName::City => "Zenica",
            FieldName::PostalCode => "00000",
            FieldName::ParkingInfo => "Free parking",
            _ => "",
        }
    }

    /// Whether the host control is a checkbox/toggle
    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldName::HasParkingFee)
    }

    /// Whether the field must be non-blank to save
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldName::AltName | FieldName::HasParkingFee)
    }

    /// Whether the host input only accepts digits
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldName::PostalCode)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Untyped value produced by a host control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Text input content
    Text(String),
    /// Checkbox state
    Checked(bool),
}

/// A typed replacement of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    AltName(String),
    Address(String),
    City(String),
    Country(String),
    Region(Region),
    PostalCode(String),
    HasParkingFee(bool),
    ParkingInfo(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::Title(_) => FieldName::Title,
            FieldUpdate::AltName(_) => FieldName::AltName,
            FieldUpdate::Address(_) => FieldName::Address,
            FieldUpdate::City(_) => FieldName::City,
            FieldUpdate::Country(_) => FieldName::Country,
            FieldUpdate::Region(_) => FieldName::Region,
            FieldUpdate::PostalCode(_) => FieldName::PostalCode,
            FieldUpdate::HasParkingFee(_) => FieldName::HasParkingFee,
            FieldUpdate::ParkingInfo(_) => FieldName::ParkingInfo,
        }
    }

    /// Coerce a raw control value into a typed update.
    ///
    /// Checkbox fields become booleans, every other field is stored as text.
    /// Returns `None` for the region field, which only accepts catalog picks.
    pub fn from_raw(field: FieldName, raw: RawValue) -> Option<Self> {
        if field.is_checkbox() {
            let checked = match raw {
                RawValue::Checked(b) => b,
                RawValue::Text(s) => matches!(s.trim(), "true" | "on" | "1"),
            };
            return Some(FieldUpdate::HasParkingFee(checked));
        }

        let text = match raw {
            RawValue::Text(s) => s,
            RawValue::Checked(b) => b.to_string(),
        };

        match field {
            FieldName::Title => Some(FieldUpdate::Title(text)),
            FieldName::AltName => Some(FieldUpdate::AltName(text)),
            FieldName::Address => Some(FieldUpdate::Address(text)),
            FieldName::City => Some(FieldUpdate::City(text)),
            FieldName::Country => Some(FieldUpdate::Country(text)),
            FieldName::PostalCode => Some(FieldUpdate::PostalCode(text)),
            FieldName::ParkingInfo => Some(FieldUpdate::ParkingInfo(text)),
            FieldName::Region | FieldName::HasParkingFee => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entry_defaults() {
        let entry = FormEntry::blank();
        assert!(entry.title.is_empty());
        assert!(entry.region.name.is_empty());
        assert!(!entry.has_parking_fee);
    }

    #[test]
    fn test_apply_targets_one_field() {
        let mut entry = FormEntry::blank();
        entry.apply(FieldUpdate::City("Zenica".into()));
        assert_eq!(entry.city, "Zenica");
        assert_eq!(
            entry,
            FormEntry {
                city: "Zenica".into(),
                ..FormEntry::blank()
            }
        );
    }

    #[test]
    fn test_from_raw_checkbox_coercion() {
        assert_eq!(
            FieldUpdate::from_raw(FieldName::HasParkingFee, RawValue::Checked(true)),
            Some(FieldUpdate::HasParkingFee(true))
        );
        assert_eq!(
            FieldUpdate::from_raw(FieldName::HasParkingFee, RawValue::Text("on".into())),
            Some(FieldUpdate::HasParkingFee(true))
        );
        assert_eq!(
            FieldUpdate::from_raw(FieldName::HasParkingFee, RawValue::Text("".into())),
            Some(FieldUpdate::HasParkingFee(false))
        );
    }

    #[test]
    fn test_from_raw_text_fields_store_strings() {
        assert_eq!(
            FieldUpdate::from_raw(FieldName::PostalCode, RawValue::Text("71000".into())),
            Some(FieldUpdate::PostalCode("71000".into()))
        );
        assert_eq!(
            FieldUpdate::from_raw(FieldName::Title, RawValue::Checked(false)),
            Some(FieldUpdate::Title("false".into()))
        );
        assert_eq!(
            FieldUpdate::from_raw(FieldName::Region, RawValue::Text("CA".into())),
            None
        );
    }

    #[test]
    fn test_update_field_matches_variant() {
        for field in FieldName::ALL {
            if let Some(update) = FieldUpdate::from_raw(field, RawValue::Text(String::new())) {
                assert_eq!(update.field(), field);
            }
        }
    }
}
