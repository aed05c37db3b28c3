//! Landing page interaction layer.
//!
//! Compiled to WebAssembly and loaded by the server-rendered landing page.
//! On start it reads the optional config block, resolves the page's elements
//! once, and attaches each feature whose elements are present. All behavior
//! lives in the `widgets` crate; this crate only moves events in and classes,
//! styles, and values out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`attach`] | Per-feature outcomes and document readiness |
//! | [`config`] | Inline JSON configuration with per-field defaults |
//! | [`error`] | `ConfigError` and `BindError` |
//! | `bind` | DOM wiring for every feature (`hydrate` only) |

pub mod attach;
pub mod config;
pub mod error;

#[cfg(feature = "hydrate")]
pub mod bind;

/// Wasm entry point: installs the panic hook and console logger, then boots.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
    if let Err(err) = bind::boot() {
        log::error!("landing boot failed: {err}");
    }
}
