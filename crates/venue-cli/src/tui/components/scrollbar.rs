//! Vertical scrollbar for the card list

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// One-column track with a proportional thumb. Clears the column when
/// everything fits.
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: u32,
    total: u32,
    thumb_color: Color,
    track_color: Color,
) {
    for y in area.y..area.y + area.height {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_char(' ');
        }
    }

    let visible = u64::from(area.height);
    let total = u64::from(total);
    if total <= visible || visible == 0 {
        return;
    }

    let thumb = (visible * visible / total).max(1);
    let max_offset = total - visible;
    let travel = visible - thumb;
    let thumb_top = (u64::from(offset).min(max_offset) * travel).div_ceil(max_offset.max(1));

    for row in 0..area.height {
        let row_index = u64::from(row);
        let (ch, color) = if row_index >= thumb_top && row_index < thumb_top + thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + row)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| buf[(0, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_hidden_when_content_fits() {
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 8, Color::White, Color::Gray);
        assert_eq!(column(&buf), " ".repeat(10));
    }

    #[test]
    fn test_thumb_moves_to_bottom() {
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 40, Color::White, Color::Gray);
        assert!(column(&buf).starts_with('█'));

        render_scrollbar(&mut buf, area, 30, 40, Color::White, Color::Gray);
        assert!(column(&buf).ends_with('█'));
        assert!(column(&buf).starts_with('░'));
    }

    #[test]
    fn test_long_content_keeps_one_row_thumb() {
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 200_000, 200_010, Color::White, Color::Gray);
        let col = column(&buf);
        assert!(col.ends_with('█'));
        assert_eq!(col.matches('█').count(), 1);
    }
}
