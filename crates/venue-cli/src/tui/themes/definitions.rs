//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme: purple accent on a dark slate background
pub fn venues() -> Theme {
    Theme {
        name: "venues".to_string(),
        display_name: "Venues".to_string(),
        bg_color: Color::Rgb(24, 24, 32),
        text_color: Color::Rgb(230, 230, 235),
        dim_color: Color::Rgb(130, 130, 145),
        accent_color: Color::Rgb(147, 51, 234),
        border_color: Color::Rgb(75, 75, 90),
        title_color: Color::Rgb(245, 245, 250),
        success_color: Color::Rgb(22, 163, 74),
        error_color: Color::Rgb(239, 68, 68),
        input_bg_color: Color::Rgb(36, 36, 48),
        selection_bg_color: Color::Rgb(59, 59, 80),
        selection_fg_color: Color::Rgb(255, 255, 255),
    }
}

/// Light theme close to a plain web form
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(243, 244, 246),
        text_color: Color::Rgb(17, 24, 39),
        dim_color: Color::Rgb(107, 114, 128),
        accent_color: Color::Rgb(124, 58, 237),
        border_color: Color::Rgb(209, 213, 219),
        title_color: Color::Rgb(17, 24, 39),
        success_color: Color::Rgb(22, 163, 74),
        error_color: Color::Rgb(220, 38, 38),
        input_bg_color: Color::Rgb(255, 255, 255),
        selection_bg_color: Color::Rgb(229, 231, 235),
        selection_fg_color: Color::Rgb(17, 24, 39),
    }
}

/// Deep blue night theme
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        display_name: "Midnight".to_string(),
        bg_color: Color::Rgb(15, 23, 42),
        text_color: Color::Rgb(226, 232, 240),
        dim_color: Color::Rgb(100, 116, 139),
        accent_color: Color::Rgb(56, 189, 248),
        border_color: Color::Rgb(51, 65, 85),
        title_color: Color::Rgb(241, 245, 249),
        success_color: Color::Rgb(74, 222, 128),
        error_color: Color::Rgb(248, 113, 113),
        input_bg_color: Color::Rgb(30, 41, 59),
        selection_bg_color: Color::Rgb(51, 65, 85),
        selection_fg_color: Color::Rgb(248, 250, 252),
    }
}

/// Uses the terminal's own palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        accent_color: Color::Magenta,
        border_color: Color::Gray,
        title_color: Color::White,
        success_color: Color::Green,
        error_color: Color::Red,
        input_bg_color: Color::Reset,
        selection_bg_color: Color::DarkGray,
        selection_fg_color: Color::White,
    }
}

/// Built-in themes in listing order; the first is the fallback when the
/// configured default is missing
pub const BUILTIN_THEMES: &[fn() -> Theme] = &[venues, paper, midnight, terminal];
