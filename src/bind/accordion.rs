//! FAQ accordion wiring: one click listener per toggle, one shared state.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use widgets::accordion::{Accordion, ItemView};
use widgets::consts::OPEN_CLASS;

use super::dom;
use crate::error::BindError;

/// A `.faq-toggle` and the answer element that follows it.
struct FaqItem {
    toggle: Element,
    answer: Element,
}

pub fn attach(toggles: Vec<Element>) -> Result<(), BindError> {
    let items: Vec<FaqItem> = toggles
        .into_iter()
        .filter_map(|toggle| {
            let answer = toggle.next_element_sibling()?;
            Some(FaqItem { toggle, answer })
        })
        .collect();
    if items.is_empty() {
        log::debug!("faq: no toggle has an answer, skipped");
        return Ok(());
    }

    let open_flags: Vec<bool> = items.iter().map(|item| item.answer.class_list().contains(OPEN_CLASS)).collect();
    let accordion = Rc::new(RefCell::new(Accordion::from_markup(&open_flags)));
    let items = Rc::new(items);

    for (index, item) in items.iter().enumerate() {
        let accordion = Rc::clone(&accordion);
        let all_items = Rc::clone(&items);
        dom::listen(&item.toggle, "click", move |_| {
            let views = accordion.borrow_mut().toggle(index);
            if let Err(err) = apply(&all_items, &views) {
                log::warn!("faq: {err}");
            }
        })?;
    }
    log::debug!("faq: {} items", items.len());
    Ok(())
}

fn apply(items: &[FaqItem], views: &[ItemView]) -> Result<(), BindError> {
    for (item, view) in items.iter().zip(views) {
        dom::set_class(&item.answer, OPEN_CLASS, view.open)?;
        if let Some(icon) = item.toggle.query_selector("i")? {
            dom::set_style(&icon, "transform", view.icon_transform)?;
        }
    }
    Ok(())
}
