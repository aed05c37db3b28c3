//! Scroll reveal via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use widgets::consts::REVEAL_CLASS;
use widgets::reveal::{RevealOptions, RevealTracker};

use super::dom;
use crate::error::BindError;

pub fn attach(targets: Vec<Element>, options: &RevealOptions) -> Result<(), BindError> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let targets = Rc::new(targets);

    let observed = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<(usize, bool)> = entries
                .iter()
                .filter_map(|entry| {
                    let entry = entry.dyn_ref::<IntersectionObserverEntry>()?.clone();
                    let target = entry.target();
                    let index = observed.iter().position(|el| *el == target)?;
                    Some((index, entry.is_intersecting()))
                })
                .collect();
            for index in tracker.borrow_mut().on_entries(batch) {
                let Some(target) = observed.get(index) else {
                    continue;
                };
                if let Err(err) = dom::set_class(target, REVEAL_CLASS, true) {
                    log::warn!("reveal: {err}");
                }
                observer.unobserve(target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets.iter() {
        observer.observe(target);
    }
    log::debug!("reveal: observing {} targets", targets.len());
    Ok(())
}
