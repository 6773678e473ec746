//! Toast notifications
//!
//! Short confirmations in the top-right corner (entry copied, form reset)
//! that expire on their own.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Maximum number of visible toasts
const MAX_VISIBLE_TOASTS: usize = 3;

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

const TOAST_WIDTH: u16 = 36;

/// Toast height (including borders)
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: DEFAULT_DURATION,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Queue of toast notifications
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, replacing an identical message and evicting the oldest
    /// past capacity
    pub fn push(&mut self, toast: Toast) {
        self.toasts.retain(|t| t.message != toast.message);
        while self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Remove expired toasts, returns true if any were removed
    pub fn tick(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Visible toasts, most recent first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(MAX_VISIBLE_TOASTS)
    }
}

/// Render toasts stacked in the top-right corner of `area`
pub fn render_toasts(buf: &mut Buffer, area: Rect, queue: &ToastQueue, theme: &Theme) {
    if queue.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }
    let x = area.x + area.width - TOAST_WIDTH - 1;

    for (i, toast) in queue.visible().enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT);

        Clear.render(toast_area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.success_color))
            .style(Style::default().bg(theme.bg_color));
        let inner = block.inner(toast_area);
        block.render(toast_area, buf);

        buf.set_string(
            inner.x + 1,
            inner.y,
            "✓",
            Style::default().fg(theme.success_color),
        );
        buf.set_string(
            inner.x + 3,
            inner.y,
            truncate_ellipsis(&toast.message, inner.width.saturating_sub(4) as usize),
            Style::default().fg(theme.text_color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dedupes_and_caps() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::new("Location 2 copied"));
        queue.push(Toast::new("Location 2 copied"));
        assert_eq!(queue.visible().count(), 1);

        for i in 0..5 {
            queue.push(Toast::new(format!("toast {i}")));
        }
        assert_eq!(queue.visible().count(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.visible().next().unwrap().message, "toast 4");
    }

    #[test]
    fn test_tick_removes_expired() {
        let mut queue = ToastQueue::new();
        let mut toast = Toast::new("gone");
        toast.duration = Duration::ZERO;
        queue.push(toast);
        queue.push(Toast::new("stays"));

        assert!(queue.tick());
        assert_eq!(queue.visible().count(), 1);
        assert!(!queue.tick());
    }
}
