//! Shared constants for the landing widgets.

// ── Carousel ────────────────────────────────────────────────────

/// Slide width used when the track has no slides or the first slide measures 0.
pub const FALLBACK_SLIDE_WIDTH_PX: f64 = 350.0;

/// Horizontal travel a touch must exceed before it counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Default auto-advance period.
pub const AUTOPLAY_PERIOD_MS: u32 = 5000;

// ── Flash banner ────────────────────────────────────────────────

/// How long a flash banner stays fully visible.
pub const FLASH_DISMISS_DELAY_MS: u32 = 5000;

/// Length of the collapse transition before the banner is removed.
pub const FLASH_COLLAPSE_MS: u32 = 500;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a target that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; pulls the bottom edge up so targets reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class added to a target once it scrolls into view.
pub const REVEAL_CLASS: &str = "animate-fade-in-up";

// ── Class names shared by several widgets ───────────────────────

/// Marks an expanded menu panel or accordion answer.
pub const OPEN_CLASS: &str = "open";

/// Marks a collapsed menu panel.
pub const HIDDEN_CLASS: &str = "hidden";
