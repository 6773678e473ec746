//! State picker dropdown
//!
//! Single-select dropdown over the region catalog. Owns its open/closed
//! state, remembers where it was drawn, and closes itself on any press
//! outside those bounds while open.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use venue_core::constants::form::STATE_PLACEHOLDER;
use venue_core::Region;

use crate::tui::state::{PointerGuard, PointerSubscriptions};
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Rows shown before the list scrolls
const MAX_VISIBLE_ROWS: usize = 8;

/// What a mouse press did to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPress {
    /// Press hit the trigger and toggled the list
    Toggled,
    /// Press hit an option row, which was selected
    Selected(usize),
    /// Press landed inside the list but not on a row
    Inside,
    /// Press was outside; the list was closed if open
    Outside,
}

/// Dropdown state for one entry's region field
#[derive(Debug, Default)]
pub struct StatePicker {
    is_open: bool,
    highlighted: usize,
    scroll_offset: usize,
    /// Trigger bounds from the last frame
    trigger_area: Option<Rect>,
    /// Option list bounds from the last frame (only while open)
    list_area: Option<Rect>,
    /// Outside-click subscription, held while open
    subscription: Option<PointerGuard>,
}

impl StatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open the list, highlighting the current selection
    pub fn open(&mut self, pointer: &PointerSubscriptions, slot: usize, selected: Option<usize>) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.highlighted = selected.unwrap_or(0);
        self.scroll_offset = self.highlighted.saturating_sub(MAX_VISIBLE_ROWS - 1);
        self.subscription = Some(pointer.subscribe(slot));
    }

    /// Close the list and release the outside-click subscription
    pub fn close(&mut self) {
        self.is_open = false;
        self.list_area = None;
        self.subscription = None;
    }

    /// Activation of the trigger control
    pub fn toggle(&mut self, pointer: &PointerSubscriptions, slot: usize, selected: Option<usize>) {
        if self.is_open {
            self.close();
        } else {
            self.open(pointer, slot, selected);
        }
    }

    /// Report `option` upward exactly once and close
    pub fn select<F>(&mut self, option: &Region, mut on_select: F)
    where
        F: FnMut(&Region),
    {
        on_select(option);
        self.close();
    }

    /// Select the highlighted option
    pub fn confirm<F>(&mut self, options: &[Region], on_select: F) -> bool
    where
        F: FnMut(&Region),
    {
        match options.get(self.highlighted) {
            Some(option) => {
                self.select(option, on_select);
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self, option_count: usize) {
        if option_count > 0 {
            self.highlighted = (self.highlighted + 1) % option_count;
            self.ensure_highlight_visible();
        }
    }

    pub fn prev(&mut self, option_count: usize) {
        if option_count > 0 {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(option_count - 1);
            self.ensure_highlight_visible();
        }
    }

    fn ensure_highlight_visible(&mut self) {
        if self.highlighted >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = self.highlighted + 1 - MAX_VISIBLE_ROWS;
        }
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        }
    }

    /// Record where the trigger was drawn this frame
    pub fn set_trigger_area(&mut self, area: Option<Rect>) {
        self.trigger_area = area;
    }

    pub fn trigger_area(&self) -> Option<Rect> {
        self.trigger_area
    }

    pub fn list_area(&self) -> Option<Rect> {
        self.list_area
    }

    /// Whether the position lies within the rendered widget
    pub fn contains(&self, pos: Position) -> bool {
        self.trigger_area.is_some_and(|a| a.contains(pos))
            || (self.is_open && self.list_area.is_some_and(|a| a.contains(pos)))
    }

    /// Outside-interaction check. Returns true if this press closed the list.
    pub fn handle_outside(&mut self, pos: Position) -> bool {
        if self.is_open && !self.contains(pos) {
            self.close();
            true
        } else {
            false
        }
    }

    /// Route a mouse press through the widget
    pub fn handle_press<F>(
        &mut self,
        pos: Position,
        pointer: &PointerSubscriptions,
        slot: usize,
        selected: Option<usize>,
        options: &[Region],
        on_select: F,
    ) -> PickerPress
    where
        F: FnMut(&Region),
    {
        if self.trigger_area.is_some_and(|a| a.contains(pos)) {
            self.toggle(pointer, slot, selected);
            return PickerPress::Toggled;
        }

        if let (true, Some(list)) = (self.is_open, self.list_area) {
            if list.contains(pos) {
                if let Some(row) = self.row_at(list, pos) {
                    if let Some(option) = options.get(row) {
                        self.highlighted = row;
                        self.select(option, on_select);
                        return PickerPress::Selected(row);
                    }
                }
                return PickerPress::Inside;
            }
        }

        self.handle_outside(pos);
        PickerPress::Outside
    }

    /// Option index under a position inside the bordered list
    fn row_at(&self, list: Rect, pos: Position) -> Option<usize> {
        let inner_top = list.y + 1;
        let inner_bottom = list.y + list.height.saturating_sub(1);
        if pos.y < inner_top || pos.y >= inner_bottom {
            return None;
        }
        Some(self.scroll_offset + (pos.y - inner_top) as usize)
    }

    /// Draw the closed trigger: selection name or placeholder, plus caret
    pub fn render_trigger(
        &self,
        buf: &mut Buffer,
        area: Rect,
        selected: Option<&Region>,
        focused: bool,
        theme: &Theme,
    ) {
        if area.width < 4 {
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

        let caret = if self.is_open { "▲" } else { "▼" };
        let text_width = area.width.saturating_sub(4) as usize;
        let (text, style) = match selected.filter(|r| !r.name.trim().is_empty()) {
            Some(region) => (
                truncate_ellipsis(&region.name, text_width),
                Style::default().fg(theme.text_color).bg(bg),
            ),
            None => (
                truncate_ellipsis(STATE_PLACEHOLDER, text_width),
                Style::default().fg(theme.dim_color).bg(bg),
            ),
        };

        buf.set_string(area.x + 1, area.y, text, style);
        buf.set_string(
            area.x + area.width - 2,
            area.y,
            caret,
            Style::default().fg(theme.accent_color).bg(bg),
        );
    }

    /// Draw the option list below (or above) the trigger while open.
    ///
    /// `trigger` is in screen coordinates; `screen` bounds the overlay.
    pub fn render_list(
        &mut self,
        buf: &mut Buffer,
        screen: Rect,
        options: &[Region],
        selected: Option<&Region>,
        theme: &Theme,
    ) {
        let Some(trigger) = self.trigger_area().filter(|_| self.is_open) else {
            self.list_area = None;
            return;
        };

        let rows = options.len().clamp(1, MAX_VISIBLE_ROWS) as u16;
        let height = rows + 2;
        let below = trigger.y + trigger.height;
        let y = if below + height <= screen.y + screen.height {
            below
        } else {
            trigger.y.saturating_sub(height).max(screen.y)
        };
        let list = Rect::new(trigger.x, y, trigger.width, height).intersection(screen);
        if list.height < 3 {
            self.list_area = None;
            return;
        }
        self.list_area = Some(list);

        Clear.render(list, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent_color))
            .style(Style::default().bg(theme.bg_color));
        let inner = block.inner(list);
        block.render(list, buf);

        let label_width = inner.width.saturating_sub(3) as usize;
        for (row, (index, option)) in options
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let is_highlighted = index == self.highlighted();
            let is_selected = selected.is_some_and(|s| s.id == option.id);

            let style = if is_highlighted {
                Style::default()
                    .fg(theme.selection_fg_color)
                    .bg(theme.selection_bg_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_color).bg(theme.bg_color)
            };
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);

            let mark = if is_selected { "✓" } else { " " };
            buf.set_string(inner.x, y, mark, style.fg(theme.success_color));
            buf.set_string(
                inner.x + 2,
                y,
                truncate_ellipsis(&option.name, label_width),
                style,
            );
        }
    }
}
