//! Entry card: one location's inputs, inline errors, and buttons
//!
//! Cards have a fixed height so the list can be laid out and scrolled
//! without measuring. Row positions are relative to the card's inner area:
//!
//! ```text
//!  0  [Copy]
//!  2  Venue Title / input / error
//!  5  Alt Name / input / hint
//!  8  ─────────
//!  9  Address | City / inputs / errors
//! 12  Country / picker / error
//! 15  State | Zip/Postal / inputs / errors
//! 18  Parking Fee / toggle
//! 20  Parking Info / input / error
//! 24                    [Cancel] [Save]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use venue_core::constants::form::ALT_NAME_HINT;
use venue_core::{CountryCatalog, FieldErrors, FieldName, FormEntry};

use super::country_picker::render_country_trigger;
use super::state_picker::StatePicker;
use crate::tui::state::Slot;
use crate::tui::themes::Theme;
use crate::tui::utils::{tail_fit, truncate_ellipsis};

/// Inner rows plus top and bottom border
pub const CARD_HEIGHT: u16 = 27;

/// Card height plus the gap before the next card
pub const CARD_STRIDE: u16 = CARD_HEIGHT + 1;

/// Virtual row of a card's top edge. Rows are counted in `u32` so long
/// lists never wrap; screen coordinates are derived after scrolling.
pub fn card_top(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(CARD_STRIDE))
}

/// Virtual height of a list of `count` cards, without the trailing gap
pub fn content_height(count: usize) -> u32 {
    card_top(count).saturating_sub(1)
}

const BUTTON_ROW: u16 = 24;
const SEPARATOR_ROW: u16 = 8;

const COPY_LABEL: &str = " ⧉ Copy ";
const CANCEL_LABEL: &str = "  Cancel  ";
const SAVE_LABEL: &str = "   Save   ";
const TOGGLE_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Full,
    Left,
    Right,
}

/// Label row and column of a field; input is one row below, error two
fn field_geometry(field: FieldName) -> (u16, Column) {
    match field {
        FieldName::Title => (2, Column::Full),
        FieldName::AltName => (5, Column::Full),
        FieldName::Address => (9, Column::Left),
        FieldName::City => (9, Column::Right),
        FieldName::Country => (12, Column::Full),
        FieldName::Region => (15, Column::Left),
        FieldName::PostalCode => (15, Column::Right),
        FieldName::HasParkingFee => (18, Column::Full),
        FieldName::ParkingInfo => (20, Column::Full),
    }
}

fn column_span(content: Rect, column: Column) -> (u16, u16) {
    let left_width = content.width.saturating_sub(2) / 2;
    match column {
        Column::Full => (content.x, content.width),
        Column::Left => (content.x, left_width),
        Column::Right => (
            content.x + left_width + 2,
            content.width.saturating_sub(left_width + 2),
        ),
    }
}

/// One card, borrowed from app state for a single frame
pub struct EntryCard<'a> {
    pub index: usize,
    pub entry: &'a FormEntry,
    pub errors: Option<&'a FieldErrors>,
    /// Focused slot, if focus is inside this card
    pub focus: Option<Slot>,
    pub picker: &'a StatePicker,
    pub countries: &'a CountryCatalog,
    pub theme: &'a Theme,
}

impl EntryCard<'_> {
    /// Row of a slot's control relative to the card's top edge
    pub fn slot_row(slot: Slot) -> u16 {
        let inner_row = match slot {
            Slot::Copy => 0,
            Slot::Field(field) => field_geometry(field).0 + 1,
            Slot::Cancel | Slot::Save => BUTTON_ROW,
        };
        inner_row + 1
    }

    /// Draw the card into `area` and return the clickable slot areas
    pub fn render(&self, buf: &mut Buffer, area: Rect) -> Vec<(Rect, Slot)> {
        let theme = self.theme;
        let mut targets = Vec::new();

        let border_color = if self.focus.is_some() {
            theme.accent_color
        } else {
            theme.border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(Span::styled(
                format!(" Location {} ", self.index + 1),
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            )))
            .style(Style::default().bg(theme.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 || inner.height < BUTTON_ROW + 1 {
            return targets;
        }
        let content = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);

        // Copy button
        let copy_area = Rect::new(content.x, content.y, COPY_LABEL.chars().count() as u16, 1);
        self.render_button(buf, copy_area, COPY_LABEL, Slot::Copy, false);
        targets.push((copy_area, Slot::Copy));

        for field in FieldName::ALL {
            let (label_row, column) = field_geometry(field);
            let (x, width) = column_span(content, column);
            let label_y = content.y + label_row;
            let input = Rect::new(x, label_y + 1, width, 1);
            let focused = self.focus == Some(Slot::Field(field));

            let label_style = if focused {
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD)
            };
            buf.set_string(x, label_y, field.label(), label_style);

            let target = match field {
                FieldName::Country => {
                    render_country_trigger(
                        buf,
                        input,
                        &self.entry.country,
                        self.countries,
                        focused,
                        theme,
                    );
                    input
                }
                FieldName::Region => {
                    let selected = Some(&self.entry.region);
                    self.picker
                        .render_trigger(buf, input, selected, focused, theme);
                    input
                }
                FieldName::HasParkingFee => {
                    let toggle = Rect::new(x, input.y, TOGGLE_WIDTH.min(width), 1);
                    self.render_toggle(buf, toggle, self.entry.has_parking_fee, focused);
                    toggle
                }
                _ => {
                    let value = self.entry.text(field).unwrap_or_default();
                    render_text_input(buf, input, value, field.placeholder(), focused, theme);
                    input
                }
            };
            targets.push((target, Slot::Field(field)));

            let below_y = input.y + 1;
            if field == FieldName::AltName {
                buf.set_string(
                    x,
                    below_y,
                    truncate_ellipsis(ALT_NAME_HINT, width as usize),
                    Style::default().fg(theme.dim_color),
                );
            } else if let Some(message) = self.errors.and_then(|e| e.get(&field)) {
                buf.set_string(
                    x,
                    below_y,
                    truncate_ellipsis(message, width as usize),
                    Style::default().fg(theme.error_color),
                );
            }
        }

        buf.set_string(
            content.x,
            content.y + SEPARATOR_ROW,
            "─".repeat(content.width as usize),
            Style::default().fg(theme.border_color),
        );

        // Cancel / Save, right aligned
        let save_width = SAVE_LABEL.chars().count() as u16;
        let cancel_width = CANCEL_LABEL.chars().count() as u16;
        let button_y = content.y + BUTTON_ROW;
        let save_area = Rect::new(
            content.x + content.width.saturating_sub(save_width),
            button_y,
            save_width,
            1,
        );
        let cancel_area = Rect::new(
            save_area.x.saturating_sub(cancel_width + 2),
            button_y,
            cancel_width,
            1,
        );
        self.render_button(buf, cancel_area, CANCEL_LABEL, Slot::Cancel, false);
        self.render_button(buf, save_area, SAVE_LABEL, Slot::Save, true);
        targets.push((cancel_area, Slot::Cancel));
        targets.push((save_area, Slot::Save));

        targets
    }

    fn render_button(&self, buf: &mut Buffer, area: Rect, label: &str, slot: Slot, primary: bool) {
        let theme = self.theme;
        let focused = self.focus == Some(slot);
        let style = match (primary, focused) {
            (true, false) => Style::default().fg(theme.selection_fg_color).bg(theme.accent_color),
            (true, true) => Style::default()
                .fg(theme.selection_fg_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            (false, false) => Style::default().fg(theme.text_color).bg(theme.input_bg_color),
            (false, true) => Style::default()
                .fg(theme.selection_fg_color)
                .bg(theme.selection_bg_color)
                .add_modifier(Modifier::BOLD),
        };
        buf.set_string(area.x, area.y, label, style);
    }

    fn render_toggle(&self, buf: &mut Buffer, area: Rect, on: bool, focused: bool) {
        let theme = self.theme;
        let (track, color, text) = if on {
            ("━━●", theme.accent_color, "On")
        } else {
            ("●━━", theme.dim_color, "Off")
        };
        let mut style = Style::default().fg(color);
        if focused {
            style = style.bg(theme.selection_bg_color);
        }
        buf.set_string(area.x, area.y, track, style.add_modifier(Modifier::BOLD));
        buf.set_string(area.x + 4, area.y, text, Style::default().fg(theme.text_color));
    }
}

/// Single-line text input with placeholder and end-of-text cursor
pub fn render_text_input(
    buf: &mut Buffer,
    area: Rect,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    if area.width < 3 {
        return;
    }
    let bg = if focused {
        theme.selection_bg_color
    } else {
        theme.input_bg_color
    };
    buf.set_string(
        area.x,
        area.y,
        " ".repeat(area.width as usize),
        Style::default().bg(bg),
    );

    let text_width = area.width.saturating_sub(3) as usize;
    if value.is_empty() {
        buf.set_string(
            area.x + 1,
            area.y,
            truncate_ellipsis(placeholder, text_width),
            Style::default().fg(theme.dim_color).bg(bg),
        );
        if focused {
            buf.set_string(area.x + 1, area.y, "▏", Style::default().fg(theme.accent_color).bg(bg));
        }
        return;
    }

    let visible = tail_fit(value, text_width);
    let (end_x, _) = buf.set_stringn(
        area.x + 1,
        area.y,
        visible,
        text_width,
        Style::default().fg(theme.text_color).bg(bg),
    );
    if focused {
        buf.set_string(end_x, area.y, "▏", Style::default().fg(theme.accent_color).bg(bg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venue_core::validation::validate_entry;

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_card_renders_errors_and_targets() {
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("venues");
        let entry = FormEntry::blank();
        let errors = validate_entry(&entry);
        let picker = StatePicker::new();
        let card = EntryCard {
            index: 1,
            entry: &entry,
            errors: Some(&errors),
            focus: None,
            picker: &picker,
            countries: CountryCatalog::builtin(),
            theme,
        };

        let area = Rect::new(0, 0, 70, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        let targets = card.render(&mut buf, area);

        let rendered = text(&buf);
        assert!(rendered.contains("Location 2"));
        assert!(rendered.contains("Venue Title is required."));
        assert!(rendered.contains("State is required."));
        assert!(rendered.contains("Pick your state"));
        assert!(rendered.contains("Leave blank if not using."));
        // Copy, nine fields, Cancel, Save
        assert_eq!(targets.len(), 12);
    }

    #[test]
    fn test_slot_rows_match_rendered_targets() {
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("venues");
        let entry = FormEntry::blank();
        let picker = StatePicker::new();
        let card = EntryCard {
            index: 0,
            entry: &entry,
            errors: None,
            focus: None,
            picker: &picker,
            countries: CountryCatalog::builtin(),
            theme,
        };
        let area = Rect::new(0, 0, 70, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);

        for (rect, slot) in card.render(&mut buf, area) {
            assert_eq!(rect.y, EntryCard::slot_row(slot), "{slot:?}");
        }
    }

    #[test]
    fn test_text_input_shows_tail_of_long_value() {
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("venues");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        render_text_input(&mut buf, area, "abcdefghijkl", "", false, theme);
        assert!(text(&buf).contains("fghijkl"));
    }
}
