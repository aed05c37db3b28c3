//! Self-dismissing flash banners.
//!
//! A banner stays visible for a delay, collapses through a short CSS
//! transition, and is then removed from the page. Phases only move forward.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use serde::Deserialize;

use crate::consts::{FLASH_COLLAPSE_MS, FLASH_DISMISS_DELAY_MS};

/// Class fragments that mark a flash banner.
pub const FLASH_CLASS_MARKERS: [&str; 2] = ["bg-green-50", "bg-blue-50"];

/// Containers a banner must sit inside to be dismissed automatically.
pub const FLASH_CONTAINERS: [&str; 2] = ["main", ".max-w-7xl"];

/// Inline styles that collapse a banner in place.
pub const COLLAPSE_STYLES: [(&str, &str); 6] = [
    ("transition", "opacity 0.5s ease, max-height 0.5s ease"),
    ("opacity", "0"),
    ("max-height", "0"),
    ("overflow", "hidden"),
    ("padding", "0"),
    ("margin", "0"),
];

/// Banner timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlashTiming {
    /// Time the banner stays fully visible.
    pub dismiss_delay_ms: u32,
    /// Time between starting the collapse and removing the element.
    pub collapse_ms: u32,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self { dismiss_delay_ms: FLASH_DISMISS_DELAY_MS, collapse_ms: FLASH_COLLAPSE_MS }
    }
}

/// Selector matching any element whose class attribute contains one of `markers`.
#[must_use]
pub fn selector_for_markers(markers: &[&str]) -> String {
    markers
        .iter()
        .map(|marker| format!("[class*=\"{marker}\"]"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlashPhase {
    #[default]
    Visible,
    Collapsing,
    Removed,
}

/// What the host does when a banner's timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashStep {
    /// Apply [`COLLAPSE_STYLES`].
    Collapse,
    /// Detach the element.
    Remove,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashBanner {
    phase: FlashPhase,
}

impl FlashBanner {
    #[must_use]
    pub fn phase(&self) -> FlashPhase {
        self.phase
    }

    /// Delay before the next step, or `None` once the banner is gone.
    #[must_use]
    pub fn next_delay_ms(&self, timing: FlashTiming) -> Option<u32> {
        match self.phase {
            FlashPhase::Visible => Some(timing.dismiss_delay_ms),
            FlashPhase::Collapsing => Some(timing.collapse_ms),
            FlashPhase::Removed => None,
        }
    }

    /// Move to the next phase and return the step to perform.
    pub fn advance(&mut self) -> Option<FlashStep> {
        match self.phase {
            FlashPhase::Visible => {
                self.phase = FlashPhase::Collapsing;
                Some(FlashStep::Collapse)
            }
            FlashPhase::Collapsing => {
                self.phase = FlashPhase::Removed;
                Some(FlashStep::Remove)
            }
            FlashPhase::Removed => None,
        }
    }
}
