use std::fmt;

use crate::error::{Result, ViewportError};
use crate::host::ViewportCapability;

/// Width (in CSS pixels) at or below which a viewport counts as mobile.
pub const DEFAULT_MOBILE_SCREEN_SIZE: f64 = 768.0;

/// The two media features the classifier watches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaQuery {
    /// `(max-width: {px}px)`
    MaxWidth(f64),
    /// `(orientation: portrait)`
    Portrait,
}

impl MediaQuery {
    /// Whether a viewport of the given size satisfies the query, using the
    /// CSS definitions (portrait means height >= width).
    pub fn evaluate(&self, width: f64, height: f64) -> bool {
        match *self {
            MediaQuery::MaxWidth(px) => width <= px,
            MediaQuery::Portrait => height >= width,
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaQuery::MaxWidth(px) => write!(f, "(max-width: {px}px)"),
            MediaQuery::Portrait => f.write_str("(orientation: portrait)"),
        }
    }
}

/// Reads the current truth value of `(max-width: {threshold_px}px)`.
///
/// Seeds the initial classification; the live watcher is built from the same
/// [`MediaQuery`].
pub fn evaluate_threshold(host: &dyn ViewportCapability, threshold_px: f64) -> Result<bool> {
    current_match(host, &MediaQuery::MaxWidth(threshold_px))
}

pub(crate) fn current_match(host: &dyn ViewportCapability, query: &MediaQuery) -> Result<bool> {
    host.match_media(query)
        .map(|list| list.matches())
        .ok_or(ViewportError::UnsupportedEnvironment)
}
