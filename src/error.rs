//! Error types for configuration loading and DOM binding.

/// Error returned by [`crate::config::LandingConfig::load`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for [`crate::config::LandingConfig`].
    #[error("invalid landing config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A timer period is zero.
    #[error("{field} must be greater than zero")]
    ZeroPeriod { field: &'static str },
    /// The reveal threshold is outside `0.0..=1.0`.
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    Threshold(f64),
    /// The log level does not name a `log::Level`.
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Error raised while attaching a feature to the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// No global `window` (not running in a browser).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
