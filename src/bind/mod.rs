//! DOM wiring for the landing page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`boot`] waits for the document to be parsed, loads [`LandingConfig`],
//! resolves [`PageElements`] once, and hands each feature its elements. A
//! feature whose elements are absent is skipped; a feature whose selector or
//! browser calls fail is logged and the rest still attach.

mod accordion;
mod anchors;
mod carousel;
pub mod dom;
mod flash;
mod menu;
pub mod page;
mod phone;
mod reveal;

use web_sys::Document;

use crate::attach::{Outcome, must_wait_for_dom, non_empty};
use crate::config::{CONFIG_SCRIPT_ID, LandingConfig};
use crate::error::BindError;
use page::PageElements;

/// Attach every feature now, or on `DOMContentLoaded` if the document is still loading.
pub fn boot() -> Result<(), BindError> {
    let document = web_sys::window()
        .ok_or(BindError::NoWindow)?
        .document()
        .ok_or(BindError::NoDocument)?;

    if must_wait_for_dom(&document.ready_state()) {
        let ready = document.clone();
        dom::listen_with(&document, "DOMContentLoaded", &dom::once(), move |_| attach_page(&ready))
    } else {
        attach_page(&document);
        Ok(())
    }
}

fn attach_page(doc: &Document) {
    let config = load_config(doc);
    log::set_max_level(config.level().to_level_filter());
    attach_all(doc, PageElements::resolve(doc, &config.selectors), &config);
}

fn load_config(doc: &Document) -> LandingConfig {
    let raw = doc.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content());
    LandingConfig::load(raw.as_deref()).unwrap_or_else(|err| {
        log::warn!("landing: {err}; using defaults");
        LandingConfig::default()
    })
}

fn attach_all(doc: &Document, page: PageElements, config: &LandingConfig) {
    Outcome::of(Ok(page.menu), menu::attach).report("mobile menu");
    Outcome::of(Ok(page.carousel), |elements| carousel::attach(elements, config.carousel)).report("carousel");
    Outcome::of(page.faq_toggles.map(non_empty), accordion::attach).report("faq");
    Outcome::of(page.reveal_targets.map(non_empty), |targets| reveal::attach(targets, &config.reveal)).report("reveal");
    Outcome::of(page.anchors.map(non_empty), |links| anchors::attach(doc, links)).report("anchors");
    Outcome::of(page.flash_banners.map(non_empty), |banners| flash::attach(banners, config.flash)).report("flash");
    Outcome::of(page.phone_input, phone::attach).report("phone mask");
}
