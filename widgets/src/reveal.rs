//! One-shot scroll reveal.
//!
//! Each target animates in the first time it intersects the viewport and is
//! then dropped from observation. Targets are addressed by index in document
//! order; the host maps observer entries back to those indices.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Deserialize;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Intersection observer options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Visible fraction that triggers the reveal, in `0.0..=1.0`.
    pub threshold: f64,
    /// CSS margin applied to the observer root.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN.to_owned() }
    }
}

/// Tracks which targets have already been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(target_count: usize) -> Self {
        Self { revealed: vec![false; target_count] }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Targets still waiting to scroll into view.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|done| !**done).count()
    }

    /// Feed one observer callback's `(index, is_intersecting)` entries.
    ///
    /// Returns the indices that should animate in and stop being observed.
    /// An index is returned at most once over the tracker's lifetime.
    pub fn on_entries<I>(&mut self, entries: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        let mut newly = Vec::new();
        for (index, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(done) = self.revealed.get_mut(index)
                && !*done
            {
                *done = true;
                newly.push(index);
            }
        }
        newly
    }
}
