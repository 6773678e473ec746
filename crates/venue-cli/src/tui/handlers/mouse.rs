//! Mouse event handling
//!
//! Presses are routed to the topmost layer: success dialog, country popup,
//! the open state dropdown, then outside-click listeners, then whatever
//! hit target lies under the pointer.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use venue_core::FieldUpdate;

use crate::tui::app::App;
use crate::tui::state::{Focus, HitTarget};

/// Rows per wheel notch
const SCROLL_STEP: i32 = 3;

impl App {
    /// Handle mouse events for clicking, scrolling, and hover
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(pos),
            MouseEventKind::ScrollDown => self.handle_scroll(pos, 1),
            MouseEventKind::ScrollUp => self.handle_scroll(pos, -1),
            MouseEventKind::Moved => {
                self.tooltip_hovered = self.layout.hit_test(pos) == Some(HitTarget::TooltipIcon);
            }
            _ => {}
        }
    }

    fn handle_press(&mut self, pos: Position) {
        if self.form.is_success() {
            self.dismiss_success();
            return;
        }

        if self.country_picker.is_open() {
            let form = &mut self.form;
            self.country_picker
                .handle_press(pos, self.countries, |index, code| {
                    if let Err(e) = form.edit_field(index, FieldUpdate::Country(code.to_string())) {
                        tracing::warn!(error = %e, "Ignoring country selection");
                    }
                });
            return;
        }

        if let Some(index) = self.open_state_picker() {
            if self.state_pickers[index].contains(pos) {
                self.press_state_picker(index, pos);
                return;
            }
        }

        // Outside-click listeners close themselves; the press still lands
        if !self.pointer.is_empty() {
            for slot in self.pointer.active_slots() {
                if let Some(picker) = self.state_pickers.get_mut(slot) {
                    if picker.handle_outside(pos) {
                        tracing::debug!(slot, "State picker closed by outside press");
                    }
                }
            }
        }

        match self.layout.hit_test(pos) {
            Some(HitTarget::AddLocation) => self.activate(Focus::AddLocation),
            Some(HitTarget::TooltipIcon) => self.tooltip_hovered = !self.tooltip_hovered,
            Some(HitTarget::Slot { index, slot }) => {
                let focus = Focus::Entry { index, slot };
                if slot.text_field().is_some() {
                    self.focus = focus;
                } else {
                    self.activate(focus);
                }
            }
            None => {}
        }
    }

    fn press_state_picker(&mut self, index: usize, pos: Position) {
        let selected = self
            .form
            .entry(index)
            .and_then(|e| self.regions.position(&e.region.id));
        let Self {
            state_pickers,
            regions,
            form,
            pointer,
            ..
        } = self;
        let Some(picker) = state_pickers.get_mut(index) else {
            return;
        };
        picker.handle_press(pos, pointer, index, selected, regions.regions(), |region| {
            if let Err(e) = form.edit_field(index, FieldUpdate::Region(region.clone())) {
                tracing::warn!(error = %e, "Ignoring state selection");
            }
        });
    }

    /// Wheel over an open list moves its highlight, otherwise scrolls cards
    fn handle_scroll(&mut self, pos: Position, direction: i32) {
        if self.form.is_success() {
            return;
        }

        if self.country_picker.is_open() {
            let count = self.country_picker.matches(self.countries).len();
            if direction > 0 {
                self.country_picker.next(count);
            } else {
                self.country_picker.prev(count);
            }
            return;
        }

        if let Some(index) = self.open_state_picker() {
            let count = self.regions.len();
            let picker = &mut self.state_pickers[index];
            if picker.list_area().is_some_and(|a| a.contains(pos)) {
                if direction > 0 {
                    picker.next(count);
                } else {
                    picker.prev(count);
                }
                return;
            }
        }

        self.scroll_by(direction * SCROLL_STEP);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use venue_core::{FieldName, FormEntry, FormList, Region, RegionCatalog};

    use super::*;
    use crate::tui::state::Slot;

    fn app() -> App {
        let theme = crate::tui::themes::THEME_REGISTRY
            .get_or_default("venues")
            .clone();
        App::new(RegionCatalog::builtin(), theme)
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
    }

    fn click(app: &mut App, pos: Position) {
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        });
        draw(app);
    }

    fn target(app: &App, index: usize, slot: Slot) -> Position {
        let area = app
            .layout
            .area_of(HitTarget::Slot { index, slot })
            .expect("target rendered");
        Position::new(area.x + 1, area.y)
    }

    #[test]
    fn test_click_trigger_then_option_selects_state() {
        let mut app = app();
        draw(&mut app);

        let pos = target(&app, 0, Slot::Field(FieldName::Region));

        click(&mut app, pos);
        assert_eq!(app.open_state_picker(), Some(0));

        let list = app.state_pickers[0].list_area().expect("list rendered");
        click(&mut app, Position::new(list.x + 2, list.y + 1));

        assert_eq!(app.form.entries()[0].region, app.regions.regions()[0]);
        assert_eq!(app.open_state_picker(), None);
        assert!(app.pointer.is_empty());
    }

    #[test]
    fn test_outside_click_closes_picker_and_reaches_target() {
        let mut app = app();
        draw(&mut app);
        let pos = target(&app, 0, Slot::Field(FieldName::Region));
        click(&mut app, pos);
        assert_eq!(app.open_state_picker(), Some(0));

        let pos = target(&app, 0, Slot::Field(FieldName::Title));

        click(&mut app, pos);
        assert_eq!(app.open_state_picker(), None);
        assert!(app.pointer.is_empty());
        assert_eq!(
            app.focus,
            Focus::Entry {
                index: 0,
                slot: Slot::Field(FieldName::Title)
            }
        );
    }

    #[test]
    fn test_click_inside_list_border_keeps_picker_open() {
        let mut app = app();
        draw(&mut app);
        let pos = target(&app, 0, Slot::Field(FieldName::Region));
        click(&mut app, pos);

        let list = app.state_pickers[0].list_area().expect("list rendered");
        click(&mut app, Position::new(list.x + 2, list.y));
        assert_eq!(app.open_state_picker(), Some(0));
    }

    #[test]
    fn test_click_add_and_copy_buttons() {
        let mut app = app();
        draw(&mut app);

        let add = app
            .layout
            .area_of(HitTarget::AddLocation)
            .expect("add button rendered");
        click(&mut app, Position::new(add.x, add.y));
        assert_eq!(app.form.len(), 2);

        let pos = target(&app, 0, Slot::Copy);

        click(&mut app, pos);
        assert_eq!(app.form.len(), 3);
        assert_eq!(app.state_pickers.len(), 3);
    }

    #[test]
    fn test_click_toggle_and_cancel() {
        let mut app = app();
        draw(&mut app);

        let pos = target(&app, 0, Slot::Field(FieldName::HasParkingFee));

        click(&mut app, pos);
        assert!(app.form.entries()[0].has_parking_fee);

        app.append_location();
        app.scroll_offset = 0;
        draw(&mut app);
        let pos = target(&app, 0, Slot::Cancel);
        click(&mut app, pos);
        assert_eq!(app.form.len(), 1);
        assert!(!app.form.entries()[0].has_parking_fee);
    }

    #[test]
    fn test_save_click_then_any_click_dismisses_success() {
        let mut app = app();
        draw(&mut app);
        let pos = target(&app, 0, Slot::Save);
        click(&mut app, pos);
        assert!(!app.form.is_success());
        assert_eq!(app.form.errors().len(), 1);

        let mut entry = FormEntry::blank();
        entry.title = "Gym".into();
        entry.address = "1 Main St".into();
        entry.city = "Zenica".into();
        entry.country = "BA".into();
        entry.region = Region::new("CA", "California");
        entry.postal_code = "72000".into();
        entry.parking_info = "Free".into();
        app.form = FormList::from_entries(vec![entry]);
        draw(&mut app);
        let pos = target(&app, 0, Slot::Save);
        click(&mut app, pos);
        assert!(app.form.is_success());

        click(&mut app, Position::new(0, 0));
        assert!(!app.form.is_success());
        assert_eq!(app.form.len(), 1);
    }

    #[test]
    fn test_hover_shows_tooltip() {
        let mut app = app();
        draw(&mut app);
        let icon = app
            .layout
            .area_of(HitTarget::TooltipIcon)
            .expect("icon rendered");

        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: icon.x,
            row: icon.y,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.tooltip_hovered);

        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: icon.x + 10,
            row: icon.y + 5,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!app.tooltip_hovered);
    }

    #[test]
    fn test_wheel_scrolls_cards() {
        let mut app = app();
        app.append_location();
        draw(&mut app);
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.scroll_offset, 3);
    }
}
