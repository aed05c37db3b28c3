//! Browser-independent state for the landing page widgets.
//!
//! Every interactive element on the landing page is modelled here as a plain
//! Rust type: the `landing` crate resolves DOM elements, forwards events to
//! these types, and writes the resulting classes, styles, and values back to
//! the page. Nothing in this crate touches `web-sys`, so the full interaction
//! policy is testable on the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Testimonial track position, swipe handling, and auto-advance stepping |
//! | [`autoplay`] | Single-slot owner for the repeating auto-advance timer |
//! | [`menu`] | Mobile navigation open/closed state |
//! | [`accordion`] | Single-open FAQ accordion |
//! | [`reveal`] | One-shot scroll reveal bookkeeping |
//! | [`anchor`] | In-page anchor fragment resolution |
//! | [`flash`] | Self-dismissing flash banner matching and phases |
//! | [`phone`] | Phone number input mask |
//! | [`consts`] | Thresholds, default timings, and shared class names |

pub mod accordion;
pub mod anchor;
pub mod autoplay;
pub mod carousel;
pub mod consts;
pub mod flash;
pub mod menu;
pub mod phone;
pub mod reveal;
