//! Common popup utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::tui::themes::Theme;

/// Calculate centered popup area with fixed size (not percentage)
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp to available space
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Clear the area and fill it with the theme background
pub fn render_popup_background(buf: &mut Buffer, area: Rect, theme: &Theme) {
    Clear.render(area, buf);
    Block::default()
        .style(Style::default().bg(theme.bg_color))
        .render(area, buf);
}

/// Standard popup block with rounded borders and a centered title
pub fn popup_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().bg(theme.bg_color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_rect(50, 10, area), Rect::new(25, 15, 50, 10));

        let small = Rect::new(0, 0, 20, 8);
        let r = center_rect(50, 10, small);
        assert_eq!((r.width, r.height), (16, 6));
    }
}
