//! Browser host for `viewport-core` (wasm32 only).
//!
//! - [`WebViewport`] implements `ViewportCapability` on top of
//!   `window.matchMedia` and `setTimeout`.
//! - [`WebQueryList`] exposes both registration shapes of a
//!   `MediaQueryList`, detected per object.
//! - [`MobileQuery`] is a `wasm-bindgen` class for plain JS callers.
//!
//! On other targets the crate is empty.

#[cfg(target_arch = "wasm32")]
mod export;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use export::{MobileQuery, init_logging};
#[cfg(target_arch = "wasm32")]
pub use web::*;
