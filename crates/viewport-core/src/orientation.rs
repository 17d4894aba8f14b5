use std::fmt;

use crate::error::Result;
use crate::host::ViewportCapability;
use crate::query::{MediaQuery, current_match};
use crate::stream::QueryStream;
use crate::watcher::BindPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Maps the truth value of `(orientation: portrait)`.
    pub fn from_portrait_match(matches: bool) -> Self {
        if matches {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Watches `(orientation: portrait)`. Orientation changes are never
/// debounced, whatever the width stream is configured with.
pub struct OrientationTracker {
    stream: QueryStream,
}

impl OrientationTracker {
    pub fn start(
        host: &dyn ViewportCapability,
        commit: impl Fn(Orientation) + 'static,
    ) -> Result<(Self, Orientation)> {
        let seed = current_match(host, &MediaQuery::Portrait)?;
        let stream = QueryStream::open(
            host,
            "orientation",
            MediaQuery::Portrait,
            web_time::Duration::ZERO,
            move |matches| commit(Orientation::from_portrait_match(matches)),
        )?;
        Ok((Self { stream }, Orientation::from_portrait_match(seed)))
    }

    pub fn path(&self) -> BindPath {
        self.stream.path()
    }

    pub fn is_running(&self) -> bool {
        self.stream.is_open()
    }

    pub fn stop(&self) {
        self.stream.close();
    }
}
