//! Per-feature attach outcomes and document readiness.
//!
//! Each feature resolves and attaches on its own, so a bad selector or a
//! throwing browser call only costs that one feature.

#[cfg(test)]
#[path = "attach_test.rs"]
mod attach_test;

use crate::error::BindError;

/// `document.readyState` while the HTML is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";

/// Whether features must wait for `DOMContentLoaded`.
#[must_use]
pub fn must_wait_for_dom(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// Result of trying to attach one feature.
#[derive(Debug)]
pub enum Outcome {
    /// The feature's elements are not on this page.
    Skipped,
    Attached,
    /// Resolving or attaching threw; the other features are unaffected.
    Failed(BindError),
}

impl Outcome {
    /// Attach a feature whose elements resolved to `resolved`.
    ///
    /// `attach` only runs when resolution succeeded and found something.
    pub fn of<T, F>(resolved: Result<Option<T>, BindError>, attach: F) -> Self
    where
        F: FnOnce(T) -> Result<(), BindError>,
    {
        match resolved {
            Err(err) => Self::Failed(err),
            Ok(None) => Self::Skipped,
            Ok(Some(elements)) => match attach(elements) {
                Ok(()) => Self::Attached,
                Err(err) => Self::Failed(err),
            },
        }
    }

    /// Log the outcome under `feature`.
    pub fn report(&self, feature: &str) {
        match self {
            Self::Skipped => log::debug!("{feature}: not on this page, skipped"),
            Self::Attached => log::debug!("{feature}: attached"),
            Self::Failed(err) => log::warn!("{feature}: {err}"),
        }
    }
}

/// `None` for an empty match list, so the feature counts as absent.
#[must_use]
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
