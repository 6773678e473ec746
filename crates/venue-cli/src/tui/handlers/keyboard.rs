//! Keyboard event handlers
//!
//! Overlays get keys first (success dialog, country popup, open state
//! dropdown), then global shortcuts, then the focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use venue_core::FieldUpdate;

use crate::tui::app::App;
use crate::tui::state::Focus;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let code = key_event.code;
        let modifiers = key_event.modifiers;
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && matches!(code, KeyCode::Char('q') | KeyCode::Char('c')) {
            self.should_quit = true;
            return;
        }

        if self.form.is_success() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_success();
            }
            return;
        }

        if self.country_picker.is_open() {
            self.handle_country_picker_key(code, ctrl);
            return;
        }

        if let Some(index) = self.open_state_picker() {
            if self.handle_state_picker_key(index, code) {
                return;
            }
        }

        if ctrl {
            match code {
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('n') => self.append_location(),
                KeyCode::Char('d') => {
                    if let Some(index) = self.focus.entry_index() {
                        self.copy_location(index);
                    }
                }
                KeyCode::Char('u') => {
                    if let Focus::Entry { index, slot } = self.focus {
                        if let Some(field) = slot.text_field() {
                            self.clear_field(index, field);
                        }
                    }
                }
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::PageDown => self.scroll_by(self.page_step()),
            KeyCode::PageUp => self.scroll_by(-self.page_step()),
            KeyCode::Enter => self.activate(self.focus),
            KeyCode::Backspace => {
                if let Focus::Entry { index, slot } = self.focus {
                    if let Some(field) = slot.text_field() {
                        self.delete_char(index, field);
                    }
                }
            }
            KeyCode::Char(c) => match self.focus {
                Focus::Entry { index, slot } => match slot.text_field() {
                    Some(field) => self.insert_text(index, field, &c.to_string()),
                    None if c == ' ' => self.activate(self.focus),
                    None => {}
                },
                Focus::AddLocation if c == ' ' => self.activate(self.focus),
                Focus::AddLocation => {}
            },
            _ => {}
        }
    }

    /// Keys while the country popup is open; it swallows everything
    fn handle_country_picker_key(&mut self, code: KeyCode, ctrl: bool) {
        let match_count = self.country_picker.matches(self.countries).len();
        match code {
            KeyCode::Esc => self.country_picker.close(),
            KeyCode::Down | KeyCode::Tab => self.country_picker.next(match_count),
            KeyCode::Up | KeyCode::BackTab => self.country_picker.prev(match_count),
            KeyCode::Backspace => self.country_picker.backspace(),
            KeyCode::Enter => {
                let form = &mut self.form;
                self.country_picker.confirm(self.countries, |index, code| {
                    if let Err(e) = form.edit_field(index, FieldUpdate::Country(code.to_string())) {
                        tracing::warn!(error = %e, "Ignoring country selection");
                    }
                });
            }
            KeyCode::Char(c) if !ctrl => self.country_picker.push_char(c),
            _ => {}
        }
    }

    /// Keys while a state dropdown is open. Returns false to let the key
    /// fall through after closing the list.
    fn handle_state_picker_key(&mut self, index: usize, code: KeyCode) -> bool {
        let Self {
            state_pickers,
            regions,
            form,
            ..
        } = self;
        let Some(picker) = state_pickers.get_mut(index) else {
            return false;
        };
        let options = regions.regions();

        match code {
            KeyCode::Esc => picker.close(),
            KeyCode::Down => picker.next(options.len()),
            KeyCode::Up => picker.prev(options.len()),
            KeyCode::Enter | KeyCode::Char(' ') => {
                picker.confirm(options, |region| {
                    if let Err(e) = form.edit_field(index, FieldUpdate::Region(region.clone())) {
                        tracing::warn!(error = %e, "Ignoring state selection");
                    }
                });
            }
            _ => {
                picker.close();
                return false;
            }
        }
        true
    }

    /// Bracketed paste goes into the focused text field
    pub fn handle_paste(&mut self, text: &str) {
        if self.form.is_success() {
            return;
        }
        if self.country_picker.is_open() {
            text.chars()
                .filter(|c| !c.is_control())
                .for_each(|c| self.country_picker.push_char(c));
            return;
        }
        if let Focus::Entry { index, slot } = self.focus {
            if let Some(field) = slot.text_field() {
                let single_line = text.replace(['\r', '\n'], " ");
                self.insert_text(index, field, &single_line);
            }
        }
    }

    fn page_step(&self) -> i32 {
        i32::from(self.layout.viewport_height().max(2) - 1)
    }
}
