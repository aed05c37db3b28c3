//! In-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id an in-page link points at.
///
/// Returns `None` for links that leave the page and for a bare `#`, which
/// the browser should handle itself.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
