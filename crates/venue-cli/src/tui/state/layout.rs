//! Layout State - Centralized layout area tracking
//!
//! Hit targets are recorded in screen coordinates each frame during
//! rendering and consumed by mouse handling.

use ratatui::layout::{Position, Rect};

use super::Slot;

/// Something a mouse press can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    AddLocation,
    TooltipIcon,
    Slot { index: usize, slot: Slot },
}

/// Cached layout areas for hit testing and rendering
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Clickable regions, later entries drawn on top
    targets: Vec<(Rect, HitTarget)>,
    /// Scrollable entry area
    pub content_area: Option<Rect>,
    /// Total height of all cards in virtual rows
    pub content_height: u32,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all targets before a new frame
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn push_target(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.targets.push((area, target));
        }
    }

    /// Topmost target under the position
    pub fn hit_test(&self, pos: Position) -> Option<HitTarget> {
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    /// Area recorded for a target this frame
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    /// Visible height of the entry area
    pub fn viewport_height(&self) -> u16 {
        self.content_area.map(|a| a.height).unwrap_or(0)
    }
}
