//! Keyboard focus across entry cards

use venue_core::FieldName;

/// A focusable control inside one entry card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Copy,
    Field(FieldName),
    Cancel,
    Save,
}

impl Slot {
    /// Tab order within a card
    pub const ORDER: [Slot; 12] = [
        Slot::Copy,
        Slot::Field(FieldName::Title),
        Slot::Field(FieldName::AltName),
        Slot::Field(FieldName::Address),
        Slot::Field(FieldName::City),
        Slot::Field(FieldName::Country),
        Slot::Field(FieldName::Region),
        Slot::Field(FieldName::PostalCode),
        Slot::Field(FieldName::HasParkingFee),
        Slot::Field(FieldName::ParkingInfo),
        Slot::Cancel,
        Slot::Save,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Field accepting typed text, if this slot is one
    pub fn text_field(&self) -> Option<FieldName> {
        match self {
            Slot::Field(field) if !field.is_checkbox() && !is_picker(*field) => Some(*field),
            _ => None,
        }
    }
}

fn is_picker(field: FieldName) -> bool {
    matches!(field, FieldName::Country | FieldName::Region)
}

/// Currently focused control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "Add New Location" button in the header
    AddLocation,
    /// A control inside entry `index`
    Entry { index: usize, slot: Slot },
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Entry {
            index: 0,
            slot: Slot::Field(FieldName::Title),
        }
    }
}

impl Focus {
    /// First field of an entry
    pub fn entry_start(index: usize) -> Self {
        Focus::Entry {
            index,
            slot: Slot::Field(FieldName::Title),
        }
    }

    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Focus::Entry { index, .. } => Some(*index),
            Focus::AddLocation => None,
        }
    }

    /// Next control in tab order, wrapping through the header button
    pub fn next(self, entry_count: usize) -> Self {
        match self {
            Focus::AddLocation if entry_count == 0 => Focus::AddLocation,
            Focus::AddLocation => Focus::Entry {
                index: 0,
                slot: Slot::ORDER[0],
            },
            Focus::Entry { index, slot } => {
                let pos = slot.position();
                if pos + 1 < Slot::ORDER.len() {
                    Focus::Entry {
                        index,
                        slot: Slot::ORDER[pos + 1],
                    }
                } else if index + 1 < entry_count {
                    Focus::Entry {
                        index: index + 1,
                        slot: Slot::ORDER[0],
                    }
                } else {
                    Focus::AddLocation
                }
            }
        }
    }

    /// Previous control in tab order
    pub fn prev(self, entry_count: usize) -> Self {
        let last = Slot::ORDER[Slot::ORDER.len() - 1];
        match self {
            Focus::AddLocation if entry_count == 0 => Focus::AddLocation,
            Focus::AddLocation => Focus::Entry {
                index: entry_count - 1,
                slot: last,
            },
            Focus::Entry { index, slot } => {
                let pos = slot.position();
                if pos > 0 {
                    Focus::Entry {
                        index,
                        slot: Slot::ORDER[pos - 1],
                    }
                } else if index > 0 {
                    Focus::Entry {
                        index: index - 1,
                        slot: last,
                    }
                } else {
                    Focus::AddLocation
                }
            }
        }
    }
}
