//! Browser host for the testimonial carousel.
//!
//! ARCHITECTURE
//! ============
//! `widgets::carousel::Carousel` owns position and the autoplay slot; this
//! host measures the track once, feeds it clicks, touches, hover changes,
//! and interval ticks, and writes the resulting `transform` back to the
//! track. The interval closure holds a `Weak` reference so the timer stored
//! inside the carousel does not keep the carousel alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Element, TouchEvent};
use widgets::carousel::{Carousel, CarouselSettings, TrackMetrics};

use super::dom;
use super::page::CarouselElements;
use crate::error::BindError;

type SharedCarousel = Rc<RefCell<Carousel<Interval>>>;

pub fn attach(elements: CarouselElements, settings: CarouselSettings) -> Result<(), BindError> {
    let CarouselElements { track, prev, next } = elements;
    let Some(viewport) = track.parent_element() else {
        log::debug!("carousel: track has no parent, skipped");
        return Ok(());
    };

    let slides = track.children();
    let slide_count = usize::try_from(slides.length()).unwrap_or(0);
    let first_width = slides.item(0).as_ref().and_then(dom::offset_width);
    let viewport_width = dom::offset_width(&viewport).unwrap_or(0.0);
    let metrics = TrackMetrics::measure(slide_count, first_width, viewport_width);
    log::debug!(
        "carousel: {slide_count} slides, width {}, max scroll {}",
        metrics.slide_width,
        metrics.max_scroll()
    );

    let carousel: SharedCarousel = Rc::new(RefCell::new(Carousel::new(metrics, settings)));

    {
        let carousel = Rc::clone(&carousel);
        let track = track.clone();
        dom::listen(&next, "click", move |_| {
            let mut carousel = carousel.borrow_mut();
            carousel.advance_next();
            paint(&track, &carousel);
        })?;
    }

    {
        let carousel = Rc::clone(&carousel);
        let track = track.clone();
        dom::listen(&prev, "click", move |_| {
            let mut carousel = carousel.borrow_mut();
            carousel.advance_prev();
            paint(&track, &carousel);
        })?;
    }

    {
        let carousel = Rc::clone(&carousel);
        dom::listen_with(&track, "touchstart", &dom::passive(), move |ev| {
            if let Some(x) = touch_screen_x(&ev) {
                carousel.borrow_mut().begin_swipe(x);
            }
        })?;
    }

    {
        let carousel = Rc::clone(&carousel);
        let track_for_paint = track.clone();
        dom::listen_with(&track, "touchend", &dom::passive(), move |ev| {
            let Some(x) = touch_screen_x(&ev) else {
                return;
            };
            let mut carousel = carousel.borrow_mut();
            if carousel.end_swipe(x).is_some() {
                paint(&track_for_paint, &carousel);
            }
        })?;
    }

    {
        let carousel = Rc::clone(&carousel);
        dom::listen(&viewport, "mouseenter", move |_| {
            if carousel.borrow_mut().pause() {
                log::trace!("carousel: autoplay paused");
            }
        })?;
    }

    {
        let carousel = Rc::clone(&carousel);
        let track = track.clone();
        dom::listen(&viewport, "mouseleave", move |_| {
            start_autoplay(&carousel, &track);
        })?;
    }

    start_autoplay(&carousel, &track);
    Ok(())
}

/// Start or restart the auto-advance interval.
fn start_autoplay(carousel: &SharedCarousel, track: &Element) {
    let weak: Weak<RefCell<Carousel<Interval>>> = Rc::downgrade(carousel);
    let track = track.clone();
    carousel.borrow_mut().resume(move |period_ms| {
        Interval::new(period_ms, move || {
            let Some(carousel) = weak.upgrade() else {
                return;
            };
            let Ok(mut carousel) = carousel.try_borrow_mut() else {
                return;
            };
            carousel.on_timer_tick();
            paint(&track, &carousel);
        })
    });
    log::trace!("carousel: autoplay running");
}

fn paint(track: &Element, carousel: &Carousel<Interval>) {
    if let Err(err) = dom::set_style(track, "transform", &carousel.render()) {
        log::warn!("carousel: failed to move track: {err}");
    }
}

fn touch_screen_x(ev: &web_sys::Event) -> Option<f64> {
    let touch = ev.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
