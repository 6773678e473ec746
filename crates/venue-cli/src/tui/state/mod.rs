//! App State Components
//!
//! Focus tracking, cached layout for hit testing, and the outside-click
//! subscription registry.

mod focus;
mod layout;
mod pointer;

pub use focus::{Focus, Slot};
pub use layout::{HitTarget, LayoutState};
pub use pointer::{PointerGuard, PointerSubscriptions};
