//! Single-slot owner for a repeating timer.
//!
//! The slot is generic over the timer handle so the browser host can store a
//! `gloo_timers` interval while tests store a plain counter. Handles are
//! expected to cancel themselves on drop; the slot never holds more than one.

#[cfg(test)]
#[path = "autoplay_test.rs"]
mod autoplay_test;

/// Holds at most one live timer handle and its period.
#[derive(Debug)]
pub struct Autoplay<H> {
    period_ms: u32,
    handle: Option<H>,
}

impl<H> Autoplay<H> {
    /// Create a stopped slot that will start timers with `period_ms`.
    #[must_use]
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms, handle: None }
    }

    #[must_use]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start a fresh timer, cancelling the current one first.
    ///
    /// Calling this while already running restarts the period instead of
    /// stacking a second timer.
    pub fn resume<F>(&mut self, start: F)
    where
        F: FnOnce(u32) -> H,
    {
        self.pause();
        self.handle = Some(start(self.period_ms));
    }

    /// Cancel the running timer. Returns `true` if one was running.
    pub fn pause(&mut self) -> bool {
        self.handle.take().is_some()
    }
}
