//! Popup dialogs

pub mod common;
pub mod success;

pub use success::render_success_dialog;
