//! Event handlers and rendering, as `impl App` blocks split by concern

pub mod keyboard;
pub mod mouse;
pub mod rendering;
