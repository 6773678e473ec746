//! Success acknowledgment dialog shown after a valid save

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use venue_core::constants::form::SUBMITTED_MESSAGE;

use super::common::{center_rect, popup_block, render_popup_background};
use crate::tui::themes::Theme;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 8;

/// Draw the dialog centered in `screen`, returning its area
pub fn render_success_dialog(
    buf: &mut Buffer,
    screen: Rect,
    entry_count: usize,
    theme: &Theme,
) -> Rect {
    let area = center_rect(DIALOG_WIDTH, DIALOG_HEIGHT, screen);
    render_popup_background(buf, area, theme);

    let block = popup_block("Saved", theme);
    let inner = block.inner(area);
    block.render(area, buf);

    let noun = if entry_count == 1 { "location" } else { "locations" };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("✓ {}", SUBMITTED_MESSAGE),
            Style::default()
                .fg(theme.success_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {} saved", entry_count, noun),
            Style::default().fg(theme.text_color),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press Enter or click to close",
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);

    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_mentions_count() {
        let screen = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(screen);
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("venues");

        let area = render_success_dialog(&mut buf, screen, 3, theme);
        let text: String = (area.y..area.y + area.height)
            .flat_map(|y| (area.x..area.x + area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Form submitted!"));
        assert!(text.contains("3 locations saved"));
    }
}
