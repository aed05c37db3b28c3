//! Single-open FAQ accordion.
//!
//! Items are addressed by their index in document order. Opening one item
//! closes every other item, and clicking the open item closes it.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Icon rotation for an open item.
pub const ROTATE_OPEN: &str = "rotate(180deg)";

/// Icon rotation for a closed item.
pub const ROTATE_CLOSED: &str = "rotate(0deg)";

/// Rendered state of one accordion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView {
    pub index: usize,
    pub open: bool,
    pub icon_transform: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Build from each answer's current `open` class, in document order.
    ///
    /// If the markup ships several open answers, the first one wins and the
    /// rest are closed on the next [`Self::toggle`].
    #[must_use]
    pub fn from_markup(open_flags: &[bool]) -> Self {
        Self { len: open_flags.len(), open: open_flags.iter().position(|open| *open) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Handle a click on item `index` and return the new state of every item.
    ///
    /// Out-of-range indices leave the state unchanged.
    pub fn toggle(&mut self, index: usize) -> Vec<ItemView> {
        if index < self.len {
            self.open = if self.is_open(index) { None } else { Some(index) };
        }
        self.views()
    }

    #[must_use]
    pub fn views(&self) -> Vec<ItemView> {
        (0..self.len)
            .map(|index| {
                let open = self.is_open(index);
                ItemView { index, open, icon_transform: if open { ROTATE_OPEN } else { ROTATE_CLOSED } }
            })
            .collect()
    }
}
