use web_time::Duration;

use crate::error::{Result, ViewportError};
use crate::query::DEFAULT_MOBILE_SCREEN_SIZE;
use crate::timer::millis;

/// Optional knobs of [`crate::use_is_mobile`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct IsMobileOptions {
    /// Milliseconds to wait after the last width change before committing it.
    pub debounce: f64,
    /// Also track portrait/landscape and expose the record shape.
    pub enable_orientation: bool,
}

impl Default for IsMobileOptions {
    fn default() -> Self {
        Self {
            debounce: 0.0,
            enable_orientation: false,
        }
    }
}

impl IsMobileOptions {
    pub fn debounce(mut self, ms: f64) -> Self {
        self.debounce = ms;
        self
    }

    pub fn with_orientation(mut self) -> Self {
        self.enable_orientation = true;
        self
    }
}

/// Validated configuration of one classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    pub threshold_px: f64,
    pub debounce: Duration,
    pub orientation_enabled: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_MOBILE_SCREEN_SIZE,
            debounce: Duration::ZERO,
            orientation_enabled: false,
        }
    }
}

impl ViewportConfig {
    pub fn new(mobile_screen_size: f64, options: IsMobileOptions) -> Result<Self> {
        check_non_negative("mobileScreenSize", mobile_screen_size)?;
        check_non_negative("debounce", options.debounce)?;
        Ok(Self {
            threshold_px: mobile_screen_size,
            debounce: millis(options.debounce),
            orientation_enabled: options.enable_orientation,
        })
    }

    /// Whether moving from `self` to `other` needs new watchers. Only the
    /// debounce may change in place.
    pub fn needs_rebind(&self, other: &ViewportConfig) -> bool {
        self.threshold_px != other.threshold_px
            || self.orientation_enabled != other.orientation_enabled
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidConfiguration { field, value })
    }
}
