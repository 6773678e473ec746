//! Utilities for the TUI

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` display columns, ending in `…` when cut
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Keep the last `max_width` columns, for inputs that scroll with the cursor
pub fn tail_fit(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &s[idx + ch.len_utf8()..];
        }
    }
    s
}
