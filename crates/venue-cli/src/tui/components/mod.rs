//! UI components for the Venues TUI
//!
//! Reusable widgets: entry cards, state and country pickers, the info
//! tooltip, toasts, and the list scrollbar.

pub mod country_picker;
pub mod entry_card;
pub mod scrollbar;
pub mod state_picker;
pub mod toast;
pub mod tooltip;

pub use country_picker::CountryPicker;
pub use entry_card::{card_top, content_height, EntryCard, CARD_HEIGHT};
pub use scrollbar::render_scrollbar;
pub use state_picker::StatePicker;
pub use toast::{render_toasts, Toast, ToastQueue};
pub use tooltip::InfoTooltip;
