//! Testimonial carousel: track geometry, scroll position, and input handling.
//!
//! The track is a row of equal-width slides inside a narrower viewport. The
//! carousel keeps a single horizontal offset, `position`, and every input
//! (buttons, swipes, timer ticks) moves it by one slide width while keeping
//! `0 <= position <= max_scroll`. Rendering is a CSS `translateX` of the track.
//!
//! The auto-advance timer lives in an [`Autoplay`] slot owned by the carousel,
//! so hovering and un-hovering can never leave two timers running.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::Deserialize;

use crate::autoplay::Autoplay;
use crate::consts::{AUTOPLAY_PERIOD_MS, FALLBACK_SLIDE_WIDTH_PX, SWIPE_THRESHOLD_PX};

/// Tunable carousel timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Period of the auto-advance timer.
    pub autoplay_period_ms: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self { autoplay_period_ms: AUTOPLAY_PERIOD_MS }
    }
}

/// Geometry of the slide track, measured once when the carousel attaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub slide_count: usize,
    pub slide_width: f64,
    pub viewport_width: f64,
}

impl TrackMetrics {
    /// Build metrics from raw DOM measurements.
    ///
    /// `first_slide_width` is `None` when the track is empty. A missing,
    /// zero, or non-finite width falls back to [`FALLBACK_SLIDE_WIDTH_PX`].
    #[must_use]
    pub fn measure(slide_count: usize, first_slide_width: Option<f64>, viewport_width: f64) -> Self {
        let slide_width = first_slide_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(FALLBACK_SLIDE_WIDTH_PX);
        let viewport_width = if viewport_width.is_finite() { viewport_width.max(0.0) } else { 0.0 };
        Self { slide_count, slide_width, viewport_width }
    }

    /// Width of all slides laid side by side (slides have no gap).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_width(&self) -> f64 {
        self.slide_count as f64 * self.slide_width
    }

    /// Largest valid offset; zero when every slide already fits.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.total_width() - self.viewport_width).max(0.0)
    }
}

/// Direction of a recognised swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left; shows the next slide.
    Left,
    /// Finger moved right; shows the previous slide.
    Right,
}

/// Carousel state: track geometry, current offset, pending touch, and the
/// auto-advance timer slot.
///
/// `H` is the timer handle type; see [`Autoplay`].
#[derive(Debug)]
pub struct Carousel<H> {
    metrics: TrackMetrics,
    position: f64,
    swipe_origin: Option<f64>,
    autoplay: Autoplay<H>,
}

impl<H> Carousel<H> {
    /// Attach to a measured track. Position starts at 0 and autoplay is stopped.
    #[must_use]
    pub fn new(metrics: TrackMetrics, settings: CarouselSettings) -> Self {
        Self { metrics, position: 0.0, swipe_origin: None, autoplay: Autoplay::new(settings.autoplay_period_ms) }
    }

    // --- Queries ---

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.metrics.slide_width
    }

    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.metrics.max_scroll()
    }

    #[must_use]
    pub fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    // --- Manual controls ---

    /// Step one slide forward, stopping at `max_scroll`.
    pub fn advance_next(&mut self) -> f64 {
        self.position = (self.position + self.slide_width()).min(self.max_scroll());
        self.position
    }

    /// Step one slide back, stopping at 0.
    pub fn advance_prev(&mut self) -> f64 {
        self.position = (self.position - self.slide_width()).max(0.0);
        self.position
    }

    // --- Touch ---

    /// Record the screen X where a touch started.
    pub fn begin_swipe(&mut self, screen_x: f64) {
        self.swipe_origin = Some(screen_x);
    }

    /// Finish a touch at `screen_x`. Ignored when no touch start was recorded.
    pub fn end_swipe(&mut self, screen_x: f64) -> Option<Swipe> {
        let origin = self.swipe_origin.take()?;
        self.on_swipe(origin - screen_x)
    }

    /// Apply a horizontal swipe of `delta_x` (start minus end).
    ///
    /// Travel at or below [`SWIPE_THRESHOLD_PX`] is not a swipe and leaves the
    /// position alone.
    pub fn on_swipe(&mut self, delta_x: f64) -> Option<Swipe> {
        if delta_x.abs() <= SWIPE_THRESHOLD_PX || delta_x.is_nan() {
            return None;
        }
        if delta_x > 0.0 {
            self.advance_next();
            Some(Swipe::Left)
        } else {
            self.advance_prev();
            Some(Swipe::Right)
        }
    }

    // --- Auto-advance ---

    /// Timer step: wrap to the first slide once the end is reached, otherwise
    /// move forward one slide (clamped like [`Self::advance_next`]).
    pub fn on_timer_tick(&mut self) -> f64 {
        let max_scroll = self.max_scroll();
        self.position = if self.position >= max_scroll {
            0.0
        } else {
            (self.position + self.slide_width()).min(max_scroll)
        };
        self.position
    }

    /// Start (or restart) the auto-advance timer.
    pub fn resume<F>(&mut self, start: F)
    where
        F: FnOnce(u32) -> H,
    {
        self.autoplay.resume(start);
    }

    /// Stop the auto-advance timer. Returns `true` if one was running.
    pub fn pause(&mut self) -> bool {
        self.autoplay.pause()
    }

    // --- Rendering ---

    /// Horizontal translation to apply to the track, in pixels.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        -self.position
    }

    /// CSS `transform` value for the track.
    #[must_use]
    pub fn render(&self) -> String {
        format!("translateX({}px)", self.translate_x())
    }
}
