//! Page configuration read from an optional inline JSON block.
//!
//! Pages may ship
//!
//! ```html
//! <script type="application/json" id="landing-config">{ "carousel": { "autoplay_period_ms": 8000 } }</script>
//! ```
//!
//! Every field is optional; anything omitted keeps its default. The swipe
//! threshold and fallback slide width are fixed constants and cannot be set
//! here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use widgets::carousel::CarouselSettings;
use widgets::flash::{FLASH_CLASS_MARKERS, FLASH_CONTAINERS, FlashTiming, selector_for_markers};
use widgets::reveal::RevealOptions;

use crate::error::ConfigError;

/// Id of the `<script>` element holding the config JSON.
pub const CONFIG_SCRIPT_ID: &str = "landing-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where each feature finds its elements.
///
/// `*_id` fields are element ids; the rest are CSS selectors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_button_id: String,
    pub menu_panel_id: String,
    pub carousel_track_id: String,
    pub carousel_prev_id: String,
    pub carousel_next_id: String,
    pub faq_toggle: String,
    pub reveal_target: String,
    pub anchor: String,
    pub flash_banner: String,
    /// A banner is only auto-dismissed inside an element matching this.
    pub flash_container: String,
    pub phone_input: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_button_id: "mobileMenuBtn".to_owned(),
            menu_panel_id: "mobileMenu".to_owned(),
            carousel_track_id: "reviewsTrack".to_owned(),
            carousel_prev_id: "prevReview".to_owned(),
            carousel_next_id: "nextReview".to_owned(),
            faq_toggle: ".faq-toggle".to_owned(),
            reveal_target: ".card-hover".to_owned(),
            anchor: "a[href^=\"#\"]".to_owned(),
            flash_banner: selector_for_markers(&FLASH_CLASS_MARKERS),
            flash_container: FLASH_CONTAINERS.join(", "),
            phone_input: "input[name=\"phone\"]".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub selectors: Selectors,
    pub carousel: CarouselSettings,
    pub reveal: RevealOptions,
    pub flash: FlashTiming,
    /// `error`, `warn`, `info`, `debug`, or `trace` (case-insensitive).
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            carousel: CarouselSettings::default(),
            reveal: RevealOptions::default(),
            flash: FlashTiming::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate the raw config block.
    ///
    /// A missing or blank block yields the defaults.
    pub fn load(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widgets cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.autoplay_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod { field: "carousel.autoplay_period_ms" });
        }
        if self.flash.dismiss_delay_ms == 0 {
            return Err(ConfigError::ZeroPeriod { field: "flash.dismiss_delay_ms" });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Threshold(self.reveal.threshold));
        }
        parse_level(&self.log_level)?;
        Ok(())
    }

    /// The configured log level; `info` if it does not parse.
    #[must_use]
    pub fn level(&self) -> log::Level {
        parse_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.trim().parse::<log::Level>().map_err(|_| ConfigError::LogLevel(raw.to_owned()))
}
