//! Thin `web-sys` helpers shared by the feature binders.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

use crate::error::BindError;

/// Every element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Offset width of an element, or `None` if it is not an HTML element.
pub fn offset_width(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_width()))
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, present: bool) -> Result<(), BindError> {
    el.class_list().toggle_with_force(class, present)?;
    Ok(())
}

/// Set one inline style property. Non-HTML elements (e.g. SVG) are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), BindError> {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.style().set_property(property, value)?;
    }
    Ok(())
}

/// Options for listeners that never call `preventDefault`.
pub fn passive() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    options
}

/// Options for listeners that fire at most once.
pub fn once() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    options
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// [`listen`] with explicit listener options.
pub fn listen_with<F>(
    target: &EventTarget,
    event: &str,
    options: &AddEventListenerOptions,
    handler: F,
) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        options,
    )?;
    closure.forget();
    Ok(())
}
