//! Mobile navigation button wiring.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;
use widgets::consts::OPEN_CLASS;
use widgets::menu::{MenuView, MobileMenu};

use super::dom;
use super::page::MenuElements;
use crate::error::BindError;

pub fn attach(elements: MenuElements) -> Result<(), BindError> {
    let MenuElements { button, panel } = elements;
    let menu = Rc::new(Cell::new(MobileMenu::from_markup(panel.class_list().contains(OPEN_CLASS))));
    let icon_host = button.clone();
    dom::listen(&button, "click", move |_| {
        let mut state = menu.get();
        let view = state.toggle();
        menu.set(state);
        if let Err(err) = apply(&icon_host, &panel, view) {
            log::warn!("mobile menu: {err}");
        }
    })
}

fn apply(button: &Element, panel: &Element, view: MenuView) -> Result<(), BindError> {
    for (class, present) in view.panel_classes {
        dom::set_class(panel, class, present)?;
    }
    if let Some(icon) = button.query_selector("i")? {
        icon.set_class_name(view.icon_class);
    }
    Ok(())
}
