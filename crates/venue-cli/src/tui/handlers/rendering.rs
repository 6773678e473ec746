//! UI rendering coordinator
//!
//! Draws the header, the scrolling card list, and the footer, then the
//! overlays on top. Hit targets are recorded in screen coordinates as each
//! piece is drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use venue_core::constants::form::{ADD_LOCATION_LABEL, HEADING, SUBMITTED_MESSAGE, TOOLTIP_TEXT};
use venue_core::FieldName;

use crate::tui::app::App;
use crate::tui::components::{
    card_top, content_height, render_scrollbar, render_toasts, EntryCard, InfoTooltip,
    CARD_HEIGHT,
};
use crate::tui::popups::render_success_dialog;
use crate::tui::state::{Focus, HitTarget, Slot};
use crate::tui::utils::truncate_ellipsis;

const HEADER_HEIGHT: u16 = 3;
const MAX_CARD_WIDTH: u16 = 84;

const KEY_HINTS: &str =
    "Tab next · Enter select · Ctrl+N add · Ctrl+D copy · Ctrl+S save · Ctrl+Q quit";

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        self.layout.clear_targets();
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let buf = f.buffer_mut();
        self.render_header(buf, header);
        self.render_entries(buf, content);
        self.render_footer(buf, footer);

        // Tooltip bubble may overlap the first card
        if let Some(icon) = self.layout.area_of(HitTarget::TooltipIcon) {
            InfoTooltip::new(TOOLTIP_TEXT, self.tooltip_hovered, &self.theme).render(icon, buf);
        }

        self.render_overlays(buf, area);
    }

    /// Heading, info icon target, add button, and the submitted banner
    fn render_header(&mut self, buf: &mut Buffer, area: Rect) {
        let theme = &self.theme;
        let x = area.x + 1;
        buf.set_string(
            x,
            area.y,
            HEADING,
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        );

        let icon = InfoTooltip::icon_area(x + HEADING.width() as u16 + 1, area.y);
        self.layout.push_target(icon, HitTarget::TooltipIcon);

        let label = format!(" + {} ", ADD_LOCATION_LABEL);
        let label_width = label.width() as u16;
        let right = area.x + area.width.min(MAX_CARD_WIDTH);
        if right > icon.x + icon.width + label_width + 2 {
            let button = Rect::new(right - label_width - 1, area.y, label_width, 1);
            let style = if self.focus == Focus::AddLocation {
                Style::default()
                    .fg(theme.selection_fg_color)
                    .bg(theme.selection_bg_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.accent_color)
                    .bg(theme.input_bg_color)
                    .add_modifier(Modifier::BOLD)
            };
            buf.set_string(button.x, button.y, &label, style);
            self.layout.push_target(button, HitTarget::AddLocation);
        }

        if self.form.is_success() && area.height > 1 {
            buf.set_string(
                x,
                area.y + 1,
                truncate_ellipsis(&format!("✓ {}", SUBMITTED_MESSAGE), area.width as usize),
                Style::default()
                    .fg(theme.success_color)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    /// Cards are drawn at their virtual offsets and the visible rows are
    /// copied into the viewport. Virtual rows are `u32`; only rows inside
    /// the viewport are mapped back to screen `u16` coordinates.
    fn render_entries(&mut self, buf: &mut Buffer, area: Rect) {
        self.sync_pickers();
        self.layout.content_area = Some(area);
        self.layout.content_height = content_height(self.form.len());
        let max_scroll = self
            .layout
            .content_height
            .saturating_sub(u32::from(area.height));
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let card_width = area.width.saturating_sub(2).min(MAX_CARD_WIDTH);
        let view_top = self.scroll_offset;
        let view_bottom = view_top.saturating_add(u32::from(area.height));
        let to_screen = |virtual_y: u32| -> Option<u16> {
            if virtual_y < view_top || virtual_y >= view_bottom {
                return None;
            }
            u16::try_from(virtual_y - view_top)
                .ok()
                .map(|offset| area.y + offset)
        };
        let mut region_triggers = vec![None; self.form.len()];

        for (index, entry) in self.form.entries().iter().enumerate() {
            let top = card_top(index);
            if top >= view_bottom {
                break;
            }
            if top.saturating_add(u32::from(CARD_HEIGHT)) <= view_top {
                continue;
            }

            let card_area = Rect::new(0, 0, card_width, CARD_HEIGHT);
            let mut card_buf = Buffer::empty(card_area);
            let card = EntryCard {
                index,
                entry,
                errors: self.form.errors_for(index),
                focus: match self.focus {
                    Focus::Entry { index: i, slot } if i == index => Some(slot),
                    _ => None,
                },
                picker: &self.state_pickers[index],
                countries: self.countries,
                theme: &self.theme,
            };
            let targets = card.render(&mut card_buf, card_area);

            for row in 0..CARD_HEIGHT {
                let Some(screen_y) = to_screen(top + u32::from(row)) else {
                    continue;
                };
                for col in 0..card_width {
                    if let (Some(src), Some(dst)) = (
                        card_buf.cell((col, row)),
                        buf.cell_mut((area.x + col, screen_y)),
                    ) {
                        *dst = src.clone();
                    }
                }
            }

            for (rect, slot) in targets {
                let Some(screen_y) = to_screen(top + u32::from(rect.y)) else {
                    continue;
                };
                let screen = Rect::new(area.x + rect.x, screen_y, rect.width, rect.height);
                if slot == Slot::Field(FieldName::Region) {
                    region_triggers[index] = Some(screen);
                }
                self.layout
                    .push_target(screen, HitTarget::Slot { index, slot });
            }
        }

        for (picker, trigger) in self.state_pickers.iter_mut().zip(region_triggers) {
            picker.set_trigger_area(trigger);
        }

        let bar = Rect::new(area.x + card_width + 1, area.y, 1, area.height);
        if bar.x < area.x + area.width {
            render_scrollbar(
                buf,
                bar,
                self.scroll_offset,
                self.layout.content_height,
                self.theme.accent_color,
                self.theme.border_color,
            );
        }
    }

    fn render_footer(&self, buf: &mut Buffer, area: Rect) {
        buf.set_string(
            area.x + 1,
            area.y,
            truncate_ellipsis(KEY_HINTS, area.width.saturating_sub(2) as usize),
            Style::default().fg(self.theme.dim_color),
        );
    }

    /// Open dropdown, country popup, success dialog, then toasts
    fn render_overlays(&mut self, buf: &mut Buffer, screen: Rect) {
        if let Some(index) = self.open_state_picker() {
            let selected = self.form.entry(index).map(|e| &e.region);
            if let Some(picker) = self.state_pickers.get_mut(index) {
                picker.render_list(buf, screen, self.regions.regions(), selected, &self.theme);
            }
        }

        self.country_picker
            .render(buf, screen, self.countries, &self.theme);

        if self.form.is_success() {
            render_success_dialog(buf, screen, self.form.len(), &self.theme);
        }

        render_toasts(buf, screen, &self.toasts, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use venue_core::{FormEntry, FormList, Region, RegionCatalog};

    use super::*;

    fn app() -> App {
        let theme = crate::tui::themes::THEME_REGISTRY
            .get_or_default("venues")
            .clone();
        App::new(RegionCatalog::builtin(), theme)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen() {
        let mut app = app();
        let screen = draw(&mut app, 90, 40);

        assert!(screen.contains("Locations"));
        assert!(screen.contains("+ Add New Location"));
        assert!(screen.contains("Location 1"));
        assert!(screen.contains("Pick your state"));
        assert!(!screen.contains("Form submitted!"));
        assert!(app.layout.hit_test(ratatui::layout::Position::new(1, 0)).is_none());
        assert!(app.state_pickers[0].trigger_area().is_some());
    }

    #[test]
    fn test_offscreen_card_has_no_targets() {
        let mut app = app();
        app.append_location();
        app.scroll_offset = 0;
        draw(&mut app, 90, 20);

        assert!(app.state_pickers[1].trigger_area().is_none());
        assert!(app
            .layout
            .area_of(HitTarget::Slot {
                index: 1,
                slot: Slot::Save
            })
            .is_none());
    }

    #[test]
    fn test_scrolling_moves_targets() {
        let mut app = app();
        app.append_location();
        draw(&mut app, 90, 20);
        let before = app.layout.area_of(HitTarget::Slot {
            index: 0,
            slot: Slot::Field(FieldName::Title),
        });

        app.scroll_by(2);
        draw(&mut app, 90, 20);
        let after = app.layout.area_of(HitTarget::Slot {
            index: 0,
            slot: Slot::Field(FieldName::Title),
        });

        assert_eq!(after.map(|a| a.y + 2), before.map(|a| a.y));
    }

    #[test]
    fn test_long_list_past_u16_rows() {
        let mut app = app();
        app.form = FormList::from_entries(vec![FormEntry::blank(); 2400]);
        draw(&mut app, 90, 40);
        assert_eq!(app.layout.content_height, 2400 * 28 - 1);

        app.append_location();
        let screen = draw(&mut app, 90, 40);

        assert_eq!(app.form.len(), 2401);
        assert!(app.scroll_offset > u32::from(u16::MAX));
        assert!(screen.contains("Location 2401"));
        let title = app
            .layout
            .area_of(HitTarget::Slot {
                index: 2400,
                slot: Slot::Field(FieldName::Title),
            })
            .expect("new card on screen");
        assert_eq!(
            app.layout
                .hit_test(ratatui::layout::Position::new(title.x, title.y)),
            Some(HitTarget::Slot {
                index: 2400,
                slot: Slot::Field(FieldName::Title),
            })
        );
        assert!(app.state_pickers[2400].trigger_area().is_some());
    }

    #[test]
    fn test_hovered_tooltip_text() {
        let mut app = app();
        app.tooltip_hovered = true;
        let screen = draw(&mut app, 90, 40);
        assert!(screen.contains("This is a helpful tooltip."));
    }

    #[test]
    fn test_success_banner_and_dialog() {
        let mut app = app();
        app.form.save();
        assert!(!app.form.is_success());

        let mut entry = FormEntry::blank();
        entry.title = "Gym".into();
        entry.address = "1 Main St".into();
        entry.city = "Zenica".into();
        entry.country = "BA".into();
        entry.region = Region::new("CA", "California");
        entry.postal_code = "72000".into();
        entry.parking_info = "Free".into();
        app.form = FormList::from_entries(vec![entry]);
        app.save();

        let screen = draw(&mut app, 90, 40);
        assert!(screen.contains("Form submitted!"));
        assert!(screen.contains("1 location saved"));
    }
}
