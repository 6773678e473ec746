//! Main application state and event loop

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use venue_core::{
    CountryCatalog, FieldName, FieldUpdate, FormList, RawValue, RegionCatalog, SaveOutcome,
};

use crate::tui::components::{
    card_top, content_height, CountryPicker, EntryCard, StatePicker, Toast, ToastQueue,
};
use crate::tui::state::{Focus, LayoutState, PointerSubscriptions, Slot};
use crate::tui::themes::Theme;

/// Frame timeout used to expire toasts while idle
const TICK: Duration = Duration::from_millis(250);

pub struct App {
    pub form: FormList,
    pub regions: RegionCatalog,
    pub countries: &'static CountryCatalog,
    pub theme: Theme,

    pub focus: Focus,
    /// One dropdown per entry, kept in step with `form`
    pub state_pickers: Vec<StatePicker>,
    pub country_picker: CountryPicker,
    /// Outside-click listeners (open state pickers)
    pub pointer: PointerSubscriptions,

    pub layout: LayoutState,
    pub toasts: ToastQueue,
    pub tooltip_hovered: bool,
    /// First visible row of the card list
    pub scroll_offset: u32,

    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(regions: RegionCatalog, theme: Theme) -> Self {
        let form = FormList::new();
        let state_pickers = (0..form.len()).map(|_| StatePicker::new()).collect();
        Self {
            form,
            regions,
            countries: CountryCatalog::builtin(),
            theme,
            focus: Focus::default(),
            state_pickers,
            country_picker: CountryPicker::new(),
            pointer: PointerSubscriptions::new(),
            layout: LayoutState::new(),
            toasts: ToastQueue::new(),
            tooltip_hovered: false,
            scroll_offset: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Keep one picker per entry after the list grows or resets
    pub fn sync_pickers(&mut self) {
        let len = self.form.len();
        self.state_pickers.truncate(len);
        while self.state_pickers.len() < len {
            self.state_pickers.push(StatePicker::new());
        }
    }

    /// Index of the open state picker, if any
    pub fn open_state_picker(&self) -> Option<usize> {
        self.state_pickers.iter().position(|p| p.is_open())
    }

    fn close_state_pickers(&mut self) {
        for picker in &mut self.state_pickers {
            picker.close();
        }
    }

    /// Apply an update to one entry, logging precondition failures
    pub fn apply_update(&mut self, index: usize, update: FieldUpdate) {
        if let Err(e) = self.form.edit_field(index, update) {
            tracing::warn!(error = %e, "Ignoring edit");
        }
    }

    /// Append typed text to a text field
    pub fn insert_text(&mut self, index: usize, field: FieldName, text: &str) {
        let Some(current) = self.form.entry(index).and_then(|e| e.text(field)) else {
            return;
        };
        let accepted: String = if field.is_numeric() {
            text.chars().filter(char::is_ascii_digit).collect()
        } else {
            text.chars().filter(|c| !c.is_control()).collect()
        };
        if accepted.is_empty() {
            return;
        }
        let value = format!("{current}{accepted}");
        self.set_text(index, field, value);
    }

    /// Remove the last character of a text field
    pub fn delete_char(&mut self, index: usize, field: FieldName) {
        let Some(current) = self.form.entry(index).and_then(|e| e.text(field)) else {
            return;
        };
        let mut value = current.to_string();
        if value.pop().is_some() {
            self.set_text(index, field, value);
        }
    }

    /// Clear a text field
    pub fn clear_field(&mut self, index: usize, field: FieldName) {
        self.set_text(index, field, String::new());
    }

    fn set_text(&mut self, index: usize, field: FieldName, value: String) {
        if let Err(e) = self.form.edit_raw(index, field, RawValue::Text(value)) {
            tracing::warn!(error = %e, "Ignoring edit");
        }
    }

    pub fn toggle_parking_fee(&mut self, index: usize) {
        if let Some(entry) = self.form.entry(index) {
            let toggled = !entry.has_parking_fee;
            self.apply_update(index, FieldUpdate::HasParkingFee(toggled));
        }
    }

    pub fn append_location(&mut self) {
        let index = self.form.append_blank_entry();
        self.sync_pickers();
        self.focus = Focus::entry_start(index);
        self.ensure_focus_visible();
    }

    pub fn copy_location(&mut self, index: usize) {
        match self.form.duplicate_entry(index) {
            Ok(new_index) => {
                self.sync_pickers();
                self.focus = Focus::Entry {
                    index: new_index,
                    slot: Slot::Copy,
                };
                self.ensure_focus_visible();
                self.toasts
                    .push(Toast::new(format!("Location {} copied", index + 1)));
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring copy"),
        }
    }

    /// Cancel: discard everything and start over with one blank entry
    pub fn reset_form(&mut self) {
        self.close_state_pickers();
        self.country_picker.close();
        self.form.reset();
        self.state_pickers.clear();
        self.sync_pickers();
        self.focus = Focus::default();
        self.scroll_offset = 0;
        self.toasts.push(Toast::new("Form cleared"));
    }

    /// Save; on failure move focus to the first offending field
    pub fn save(&mut self) {
        self.close_state_pickers();
        match self.form.save() {
            SaveOutcome::Submitted { count } => {
                tracing::info!(count, "Locations saved");
            }
            SaveOutcome::Invalid { .. } => {
                let first = self.form.errors().iter().next().and_then(|(index, fields)| {
                    fields.keys().next().map(|field| (*index, *field))
                });
                if let Some((index, field)) = first {
                    self.focus = Focus::Entry {
                        index,
                        slot: Slot::Field(field),
                    };
                    self.ensure_focus_visible();
                }
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.form.dismiss_success();
    }

    /// Trigger activation of the state picker for `index`
    pub fn toggle_state_picker(&mut self, index: usize) {
        let selected = self
            .form
            .entry(index)
            .and_then(|e| self.regions.position(&e.region.id));
        for (i, picker) in self.state_pickers.iter_mut().enumerate() {
            if i != index {
                picker.close();
            }
        }
        if let Some(picker) = self.state_pickers.get_mut(index) {
            picker.toggle(&self.pointer, index, selected);
        }
    }

    pub fn open_country_picker(&mut self, index: usize) {
        self.close_state_pickers();
        let code = self
            .form
            .entry(index)
            .map(|e| e.country.clone())
            .unwrap_or_default();
        self.country_picker.open(index, &code, self.countries);
    }

    /// Activate the focused control (Enter or click)
    pub fn activate(&mut self, focus: Focus) {
        self.focus = focus;
        let Focus::Entry { index, slot } = focus else {
            self.append_location();
            return;
        };

        match slot {
            Slot::Copy => self.copy_location(index),
            Slot::Cancel => self.reset_form(),
            Slot::Save => self.save(),
            Slot::Field(FieldName::Country) => self.open_country_picker(index),
            Slot::Field(FieldName::Region) => self.toggle_state_picker(index),
            Slot::Field(FieldName::HasParkingFee) => self.toggle_parking_fee(index),
            Slot::Field(_) => self.focus_next(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.form.len());
        self.ensure_focus_visible();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.form.len());
        self.ensure_focus_visible();
    }

    /// Scroll so the focused control is on screen
    pub fn ensure_focus_visible(&mut self) {
        let viewport = self.layout.viewport_height();
        if viewport == 0 {
            return;
        }
        let Focus::Entry { index, slot } = self.focus else {
            return;
        };
        let viewport = u32::from(viewport);
        let top = card_top(index);
        let row = top.saturating_add(u32::from(EntryCard::slot_row(slot)));

        if row < self.scroll_offset {
            self.scroll_offset = if row <= top.saturating_add(1) { top } else { row };
        } else if row >= self.scroll_offset.saturating_add(viewport) {
            self.scroll_offset = row.saturating_add(2).saturating_sub(viewport);
        }
        self.clamp_scroll();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_offset = if delta >= 0 {
            self.scroll_offset.saturating_add(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        };
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = content_height(self.form.len())
            .saturating_sub(u32::from(self.layout.viewport_height()));
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.toasts.tick() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
                _ = tokio::time::sleep(TICK) => {}
            }

            if self.should_quit {
                tracing::info!("Quitting");
                break;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                self.needs_redraw = true;
            }
            Event::Paste(text) => {
                self.handle_paste(&text);
                self.needs_redraw = true;
            }
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            _ => {}
        }
    }
}
