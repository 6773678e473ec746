//! Searchable country picker popup
//!
//! Opened from an entry's country field. Typing filters the catalog, Enter or
//! a click reports the chosen ISO code back to the entry, Esc or a press
//! outside the popup closes it.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};
use venue_core::constants::form::COUNTRY_PLACEHOLDER;
use venue_core::{Country, CountryCatalog};

use crate::tui::popups::common::{center_rect, popup_block, render_popup_background};
use crate::tui::themes::Theme;
use crate::tui::utils::{tail_fit, truncate_ellipsis};

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 20;

/// Rows assumed visible before the first render
const DEFAULT_VISIBLE_ROWS: usize = 14;

#[derive(Debug, Default)]
pub struct CountryPicker {
    /// Entry whose country is being picked
    target: Option<usize>,
    query: String,
    highlighted: usize,
    scroll_offset: usize,
    area: Option<Rect>,
    list_area: Option<Rect>,
}

impl CountryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.target().is_some()
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open for `entry`, highlighting its current country
    pub fn open(&mut self, entry: usize, current_code: &str, catalog: &CountryCatalog) {
        self.target = Some(entry);
        self.query.clear();
        self.highlighted = catalog
            .countries()
            .iter()
            .position(|c| c.code.eq_ignore_ascii_case(current_code))
            .unwrap_or(0);
        self.scroll_offset = 0;
        self.ensure_highlight_visible();
    }

    pub fn close(&mut self) {
        self.target = None;
        self.area = None;
        self.list_area = None;
    }

    /// Countries matching the current query
    pub fn matches<'a>(&self, catalog: &'a CountryCatalog) -> Vec<&'a Country> {
        catalog.search(&self.query)
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn next(&mut self, match_count: usize) {
        if match_count > 0 {
            self.highlighted = (self.highlighted + 1) % match_count;
            self.ensure_highlight_visible();
        }
    }

    pub fn prev(&mut self, match_count: usize) {
        if match_count > 0 {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(match_count - 1);
            self.ensure_highlight_visible();
        }
    }

    fn visible_rows(&self) -> usize {
        self.list_area
            .map(|a| a.height as usize)
            .unwrap_or(DEFAULT_VISIBLE_ROWS)
            .max(1)
    }

    fn ensure_highlight_visible(&mut self) {
        let rows = self.visible_rows();
        if self.highlighted >= self.scroll_offset + rows {
            self.scroll_offset = self.highlighted + 1 - rows;
        }
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        }
    }

    /// Report the highlighted country as `(entry, code)` and close
    pub fn confirm<F>(&mut self, catalog: &CountryCatalog, mut on_select: F) -> bool
    where
        F: FnMut(usize, &str),
    {
        let Some(entry) = self.target else {
            return false;
        };
        let Some(country) = self.matches(catalog).get(self.highlighted).copied() else {
            return false;
        };
        on_select(entry, country.code);
        self.close();
        true
    }

    /// Route a mouse press. The popup is modal, so every press is consumed
    /// while open; presses outside it close it.
    pub fn handle_press<F>(&mut self, pos: Position, catalog: &CountryCatalog, on_select: F) -> bool
    where
        F: FnMut(usize, &str),
    {
        if !self.is_open() {
            return false;
        }

        if !self.area.is_some_and(|a| a.contains(pos)) {
            self.close();
            return true;
        }

        if let Some(list) = self.list_area.filter(|a| a.contains(pos)) {
            let row = self.scroll_offset + (pos.y - list.y) as usize;
            if row < self.matches(catalog).len() {
                self.highlighted = row;
                self.confirm(catalog, on_select);
            }
        }
        true
    }

    /// Draw the popup centered in `screen`
    pub fn render(&mut self, buf: &mut Buffer, screen: Rect, catalog: &CountryCatalog, theme: &Theme) {
        if !self.is_open() {
            return;
        }

        let area = center_rect(POPUP_WIDTH, POPUP_HEIGHT, screen);
        self.area = Some(area);
        render_popup_background(buf, area, theme);

        let title = match self.target() {
            Some(entry) => format!("Location {} country", entry + 1),
            None => COUNTRY_PLACEHOLDER.to_string(),
        };
        let block = popup_block(&title, theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 || inner.width < 10 {
            self.list_area = None;
            return;
        }

        // Search box
        let search_width = inner.width.saturating_sub(4) as usize;
        buf.set_string(
            inner.x + 1,
            inner.y,
            " ".repeat(inner.width.saturating_sub(2) as usize),
            Style::default().bg(theme.input_bg_color),
        );
        buf.set_string(
            inner.x + 1,
            inner.y,
            "⌕",
            Style::default().fg(theme.accent_color).bg(theme.input_bg_color),
        );
        let (query, query_style) = if self.query().is_empty() {
            ("Search", Style::default().fg(theme.dim_color))
        } else {
            (
                tail_fit(&self.query, search_width),
                Style::default().fg(theme.text_color),
            )
        };
        buf.set_string(inner.x + 3, inner.y, query, query_style.bg(theme.input_bg_color));

        let list = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(3),
        );
        self.list_area = Some(list);
        self.ensure_highlight_visible();

        let matches = self.matches(catalog);
        if matches.is_empty() {
            buf.set_string(
                list.x + 2,
                list.y,
                "No matches",
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            );
        }

        let name_width = list.width.saturating_sub(9) as usize;
        for (row, (index, country)) in matches
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(list.height as usize)
            .enumerate()
        {
            let y = list.y + row as u16;
            let style = if index == self.highlighted() {
                Style::default()
                    .fg(theme.selection_fg_color)
                    .bg(theme.selection_bg_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_color).bg(theme.bg_color)
            };
            buf.set_style(Rect::new(list.x, y, list.width, 1), style);
            buf.set_string(list.x + 2, y, country.code, style.fg(theme.accent_color));
            buf.set_string(list.x + 6, y, truncate_ellipsis(country.name, name_width), style);
        }

        let hint = "type to search · Enter select · Esc close";
        let hint_x = inner.x + inner.width.saturating_sub(hint.chars().count() as u16) / 2;
        buf.set_string(
            hint_x,
            inner.y + inner.height - 1,
            truncate_ellipsis(hint, inner.width as usize),
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        );
    }
}

/// Draw the closed country field: name and code, or the placeholder
pub fn render_country_trigger(
    buf: &mut Buffer,
    area: Rect,
    code: &str,
    catalog: &CountryCatalog,
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

    let text_width = area.width.saturating_sub(4) as usize;
    let (text, fg) = if code.trim().is_empty() {
        (COUNTRY_PLACEHOLDER.to_string(), theme.dim_color)
    } else {
        let label = match catalog.get(code) {
            Some(country) => format!("{} ({})", country.name, country.code),
            None => code.to_string(),
        };
        (label, theme.text_color)
    };
    buf.set_string(
        area.x + 1,
        area.y,
        truncate_ellipsis(&text, text_width),
        Style::default().fg(fg).bg(bg),
    );
    buf.set_string(
        area.x + area.width - 2,
        area.y,
        "▼",
        Style::default().fg(theme.accent_color).bg(bg),
    );
}
