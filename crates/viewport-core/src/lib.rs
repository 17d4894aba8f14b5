//! # Reactive viewport classification
//!
//! Exposes one reactive value, "is the viewport mobile-sized (and which way
//! is it turned)", kept in sync with live media queries instead of being
//! re-measured on every render.
//!
//! The pieces, bottom-up:
//!
//! - [`MediaQuery`] / [`evaluate_threshold`] build `(max-width: Npx)` and read
//!   its current value from the host.
//! - [`watcher::bind`] attaches a change listener through the modern
//!   `addEventListener` API, or the legacy `addListener` one, and detaches
//!   through the same API.
//! - [`UpdateScheduler`] commits notifications, optionally debounced so only
//!   the last of a burst lands.
//! - [`OrientationTracker`] is an independent, undebounced portrait/landscape
//!   stream.
//! - [`ViewportClassifier`] drives them through
//!   `Uninitialized → Active → TornDown`.
//!
//! The host (browser window, or a test double) is injected as a
//! [`ViewportCapability`]; nothing reads globals.
//!
//! ## Composing
//!
//! [`use_is_mobile`] is the composable entry point. It remembers one
//! classifier per call-site, reconfigures it on each pass and tears it down
//! when the enclosing [`Scope`] is disposed:
//!
//! ```rust
//! use std::rc::Rc;
//! use viewport_core::testing::FakeViewport;
//! use viewport_core::*;
//!
//! let viewport = FakeViewport::new(1024.0, 768.0);
//! let host: Rc<dyn ViewportCapability> = Rc::new(viewport.clone());
//! let composition = Composition::new();
//!
//! let render = || composition.compose(|| use_is_mobile(&host, 768.0, IsMobileOptions::default()));
//! assert_eq!(render().unwrap(), ViewportClassification::IsMobile(false));
//!
//! viewport.resize(700.0, 900.0);
//! assert_eq!(render().unwrap(), ViewportClassification::IsMobile(true));
//!
//! composition.dispose();
//! assert_eq!(viewport.active_listeners(), 0);
//! ```
//!
//! ## Signals
//!
//! Between passes, [`ViewportClassifier::signal`] hands out the underlying
//! [`Signal`], so a consumer can subscribe instead of re-reading:
//!
//! ```rust
//! use viewport_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```

pub mod classification;
pub mod config;
pub mod effects;
pub mod error;
pub mod hook;
pub mod host;
pub mod lifecycle;
pub mod orientation;
pub mod prelude;
pub mod query;
pub mod runtime;
pub mod scheduler;
pub mod scope;
pub mod signal;
pub mod stream;
pub mod testing;
pub mod tests;
pub mod timer;
pub mod watcher;

pub use classification::*;
pub use config::*;
pub use effects::*;
pub use error::*;
pub use hook::*;
pub use host::*;
pub use lifecycle::*;
pub use orientation::*;
pub use prelude::*;
pub use query::*;
pub use runtime::*;
pub use scheduler::*;
pub use scope::*;
pub use signal::*;
pub use stream::*;
pub use timer::*;
