//! Info icon with hover tooltip
//!
//! Stateless: the app tracks whether the mouse is over the icon and passes
//! it in when rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

const ICON: &str = "ⓘ";

/// Icon plus help bubble, rendered into the icon's cell
pub struct InfoTooltip<'a> {
    text: &'a str,
    hovered: bool,
    theme: &'a Theme,
}

impl<'a> InfoTooltip<'a> {
    pub fn new(text: &'a str, hovered: bool, theme: &'a Theme) -> Self {
        Self {
            text,
            hovered,
            theme,
        }
    }

    /// Area the icon occupies when drawn at (x, y)
    pub fn icon_area(x: u16, y: u16) -> Rect {
        Rect::new(x, y, ICON.width() as u16, 1)
    }
}

impl Widget for InfoTooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let icon_style = if self.hovered {
            Style::default().fg(self.theme.accent_color)
        } else {
            Style::default().fg(self.theme.dim_color)
        };
        buf.set_string(area.x, area.y, ICON, icon_style);

        if !self.hovered {
            return;
        }

        // Bubble to the right of the icon, clipped to the buffer
        let bounds = buf.area;
        let x = area.x + area.width + 1;
        let right = bounds.x + bounds.width;
        if x + 2 >= right {
            return;
        }
        let max_width = (right - x) as usize;
        let bubble = format!(" {} ", self.text);
        buf.set_stringn(
            x,
            area.y,
            bubble,
            max_width,
            Style::default()
                .fg(self.theme.bg_color)
                .bg(self.theme.text_color)
                .add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_text_only_when_hovered() {
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("venues");
        let area = InfoTooltip::icon_area(2, 0);

        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 1));
        InfoTooltip::new("This is a helpful tooltip.", false, theme).render(area, &mut buf);
        assert!(!row_text(&buf, 0).contains("helpful"));

        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 1));
        InfoTooltip::new("This is a helpful tooltip.", true, theme).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("This is a helpful tooltip."));
    }
}
