use thiserror::Error;

/// Fatal configuration errors. Both are raised synchronously while a
/// classifier is being configured, before any watcher is attached.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    /// The host has no browsing context, or no `matchMedia`-style capability.
    #[error("matchMedia not supported by the host environment")]
    UnsupportedEnvironment,
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },
}

/// Why a registration path could not be used. Only drives the
/// modern/legacy fallback inside the binder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("registration API not available")]
    Unsupported,
    #[error("registration rejected: {0}")]
    Rejected(String),
}

pub(crate) type Result<T, E = ViewportError> = std::result::Result<T, E>;
