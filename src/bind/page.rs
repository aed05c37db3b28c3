//! One-time resolution of every element the features need.
//!
//! Each feature's dependencies become an `Option` (or an empty `Vec`) here,
//! so the binders never query the DOM for existence again. Selector lookups
//! that can throw keep their error next to the feature they belong to.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::dom;
use crate::config::Selectors;
use crate::error::BindError;

#[derive(Debug, Clone)]
pub struct MenuElements {
    pub button: Element,
    pub panel: Element,
}

#[derive(Debug, Clone)]
pub struct CarouselElements {
    pub track: Element,
    pub prev: Element,
    pub next: Element,
}

/// Elements for every feature, resolved independently.
///
/// Selector-based lookups keep their own `Result`, so an invalid selector in
/// the config only disables the feature that uses it.
#[derive(Debug)]
pub struct PageElements {
    pub menu: Option<MenuElements>,
    pub carousel: Option<CarouselElements>,
    pub faq_toggles: Result<Vec<Element>, BindError>,
    pub reveal_targets: Result<Vec<Element>, BindError>,
    pub anchors: Result<Vec<Element>, BindError>,
    /// Banners already filtered to those inside a flash container.
    pub flash_banners: Result<Vec<Element>, BindError>,
    pub phone_input: Result<Option<HtmlInputElement>, BindError>,
}

impl PageElements {
    #[must_use]
    pub fn resolve(doc: &Document, selectors: &Selectors) -> Self {
        let by_id = |id: &str| doc.get_element_by_id(id);

        let menu = match (by_id(&selectors.menu_button_id), by_id(&selectors.menu_panel_id)) {
            (Some(button), Some(panel)) => Some(MenuElements { button, panel }),
            _ => None,
        };

        let carousel = match (
            by_id(&selectors.carousel_track_id),
            by_id(&selectors.carousel_prev_id),
            by_id(&selectors.carousel_next_id),
        ) {
            (Some(track), Some(prev), Some(next)) => Some(CarouselElements { track, prev, next }),
            _ => None,
        };

        Self {
            menu,
            carousel,
            faq_toggles: dom::query_all(doc, &selectors.faq_toggle),
            reveal_targets: dom::query_all(doc, &selectors.reveal_target),
            anchors: dom::query_all(doc, &selectors.anchor),
            flash_banners: flash_banners(doc, selectors),
            phone_input: phone_input(doc, selectors),
        }
    }
}

fn flash_banners(doc: &Document, selectors: &Selectors) -> Result<Vec<Element>, BindError> {
    let mut banners = Vec::new();
    for banner in dom::query_all(doc, &selectors.flash_banner)? {
        if banner.closest(&selectors.flash_container)?.is_some() {
            banners.push(banner);
        }
    }
    Ok(banners)
}

fn phone_input(doc: &Document, selectors: &Selectors) -> Result<Option<HtmlInputElement>, BindError> {
    Ok(doc
        .query_selector(&selectors.phone_input)?
        .and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned()))
}
