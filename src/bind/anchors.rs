//! Smooth scrolling for in-page anchor links.

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};
use widgets::anchor::fragment_id;

use super::dom;
use crate::error::BindError;

pub fn attach(doc: &Document, anchors: Vec<Element>) -> Result<(), BindError> {
    for anchor in anchors {
        let doc = doc.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            ev.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
