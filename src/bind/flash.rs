//! Timed collapse and removal of flash banners.

use gloo_timers::callback::Timeout;
use web_sys::Element;
use widgets::flash::{COLLAPSE_STYLES, FlashBanner, FlashStep, FlashTiming};

use super::dom;
use crate::error::BindError;

pub fn attach(banners: Vec<Element>, timing: FlashTiming) -> Result<(), BindError> {
    log::debug!("flash: dismissing {} banners", banners.len());
    for banner in banners {
        schedule(banner, FlashBanner::default(), timing);
    }
    Ok(())
}

/// Arm a one-shot timer for the banner's next phase.
fn schedule(element: Element, mut banner: FlashBanner, timing: FlashTiming) {
    let Some(delay_ms) = banner.next_delay_ms(timing) else {
        return;
    };
    Timeout::new(delay_ms, move || match banner.advance() {
        Some(FlashStep::Collapse) => {
            for (property, value) in COLLAPSE_STYLES {
                if let Err(err) = dom::set_style(&element, property, value) {
                    log::warn!("flash: {err}");
                }
            }
            schedule(element, banner, timing);
        }
        Some(FlashStep::Remove) => element.remove(),
        None => {}
    })
    .forget();
}
