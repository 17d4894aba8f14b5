use crate::orientation::Orientation;

/// The value exposed to the consuming UI.
///
/// The shape is fixed by whether orientation tracking is enabled: a bare
/// flag without it, a record with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged, rename_all_fields = "camelCase"))]
pub enum ViewportClassification {
    IsMobile(bool),
    WithOrientation {
        is_mobile: bool,
        orientation: Orientation,
    },
}

impl Default for ViewportClassification {
    fn default() -> Self {
        ViewportClassification::IsMobile(false)
    }
}

impl ViewportClassification {
    pub fn seed(is_mobile: bool, orientation: Option<Orientation>) -> Self {
        match orientation {
            Some(orientation) => ViewportClassification::WithOrientation {
                is_mobile,
                orientation,
            },
            None => ViewportClassification::IsMobile(is_mobile),
        }
    }

    pub fn is_mobile(&self) -> bool {
        match *self {
            ViewportClassification::IsMobile(m) => m,
            ViewportClassification::WithOrientation { is_mobile, .. } => is_mobile,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match *self {
            ViewportClassification::IsMobile(_) => None,
            ViewportClassification::WithOrientation { orientation, .. } => Some(orientation),
        }
    }

    pub fn with_mobile(self, is_mobile: bool) -> Self {
        match self {
            ViewportClassification::IsMobile(_) => ViewportClassification::IsMobile(is_mobile),
            ViewportClassification::WithOrientation { orientation, .. } => {
                ViewportClassification::WithOrientation {
                    is_mobile,
                    orientation,
                }
            }
        }
    }

    /// Updates the orientation; a bare flag has none and stays unchanged.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        match self {
            ViewportClassification::IsMobile(_) => self,
            ViewportClassification::WithOrientation { is_mobile, .. } => {
                ViewportClassification::WithOrientation {
                    is_mobile,
                    orientation,
                }
            }
        }
    }
}
