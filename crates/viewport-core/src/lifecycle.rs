//! Lifecycle of one viewport classifier.
//!
//! ```text
//! Uninitialized --configure--> Active --teardown--> TornDown
//!                                |  ^
//!                                +--+ configure (rebind on threshold/orientation change)
//! ```
//!
//! Every stream opened in `Active` is closed exactly once, either before the
//! next rebind or on teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::classification::ViewportClassification;
use crate::config::ViewportConfig;
use crate::error::{Result, ViewportError};
use crate::host::ViewportCapability;
use crate::orientation::OrientationTracker;
use crate::query::{MediaQuery, evaluate_threshold};
use crate::signal::Signal;
use crate::stream::QueryStream;
use crate::watcher::BindPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Active,
    TornDown,
}

/// Streams owned by one `Active` segment.
struct Segment {
    config: ViewportConfig,
    width: QueryStream,
    orientation: Option<OrientationTracker>,
}

impl Segment {
    fn close(&self) {
        self.width.close();
        if let Some(tracker) = &self.orientation {
            tracker.stop();
        }
    }
}

pub struct ViewportClassifier {
    host: Rc<dyn ViewportCapability>,
    state: Cell<LifecycleState>,
    segment: RefCell<Option<Segment>>,
    value: Signal<ViewportClassification>,
}

impl ViewportClassifier {
    pub fn new(host: Rc<dyn ViewportCapability>) -> Self {
        Self {
            host,
            state: Cell::new(LifecycleState::Uninitialized),
            segment: RefCell::new(None),
            value: Signal::new(ViewportClassification::default()),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state.get()
    }

    pub fn config(&self) -> Option<ViewportConfig> {
        self.segment.borrow().as_ref().map(|s| s.config)
    }

    pub fn classification(&self) -> ViewportClassification {
        self.value.get()
    }

    /// Reactive handle on the classification. Subscribers hear about a
    /// commit only when it changes the value.
    pub fn signal(&self) -> Signal<ViewportClassification> {
        self.value.clone()
    }

    /// Registration paths in use, width stream first.
    pub fn bind_paths(&self) -> Vec<BindPath> {
        let segment = self.segment.borrow();
        let Some(segment) = segment.as_ref() else {
            return Vec::new();
        };
        let mut paths = vec![segment.width.path()];
        paths.extend(segment.orientation.as_ref().map(|o| o.path()));
        paths
    }

    /// Applies a configuration.
    ///
    /// Called on every composition: an identical configuration is a no-op, a
    /// debounce change is applied in place, anything else tears the current
    /// streams down and opens new ones.
    pub fn configure(&self, config: ViewportConfig) -> Result<()> {
        if self.state.get() == LifecycleState::TornDown {
            log::warn!("configure called on a torn down viewport classifier; ignored");
            return Ok(());
        }
        if !self.host.supports_media_queries() {
            return Err(ViewportError::UnsupportedEnvironment);
        }

        {
            let mut slot = self.segment.borrow_mut();
            if let Some(segment) = slot.as_mut() {
                if !segment.config.needs_rebind(&config) {
                    if segment.config.debounce != config.debounce {
                        log::debug!("debounce changed to {:?}", config.debounce);
                        segment.width.scheduler().set_debounce(config.debounce);
                        segment.config.debounce = config.debounce;
                    }
                    return Ok(());
                }
                log::debug!("viewport configuration changed; rebinding watchers");
                segment.close();
            }
            *slot = None;
        }

        match self.open(config) {
            // Seeding notifies subscribers, and one of them may have torn us
            // down. The new streams must not outlive that.
            Ok(segment) if self.state.get() == LifecycleState::TornDown => {
                log::debug!("viewport classifier torn down while seeding; closing new streams");
                segment.close();
                Ok(())
            }
            Ok(segment) => {
                *self.segment.borrow_mut() = Some(segment);
                self.state.set(LifecycleState::Active);
                Ok(())
            }
            Err(e) => {
                if self.state.get() != LifecycleState::TornDown {
                    self.state.set(LifecycleState::Uninitialized);
                }
                Err(e)
            }
        }
    }

    fn open(&self, config: ViewportConfig) -> Result<Segment> {
        let host = self.host.as_ref();

        let is_mobile = evaluate_threshold(host, config.threshold_px)?;
        let value = self.value.clone();
        let width = QueryStream::open(
            host,
            "width",
            MediaQuery::MaxWidth(config.threshold_px),
            config.debounce,
            move |is_mobile| {
                let next = value.get().with_mobile(is_mobile);
                value.set_if_changed(next);
            },
        )?;

        let (orientation, seeded_orientation) = if config.orientation_enabled {
            let value = self.value.clone();
            // On failure `width` is dropped here, which closes it.
            let (tracker, seed) = OrientationTracker::start(host, move |orientation| {
                let next = value.get().with_orientation(orientation);
                value.set_if_changed(next);
            })?;
            (Some(tracker), Some(seed))
        } else {
            (None, None)
        };

        self.value
            .set_if_changed(ViewportClassification::seed(is_mobile, seeded_orientation));
        log::debug!(
            "viewport classifier active: threshold={}px debounce={:?} orientation={}",
            config.threshold_px,
            config.debounce,
            config.orientation_enabled
        );

        Ok(Segment {
            config,
            width,
            orientation,
        })
    }

    /// Closes every stream and enters `TornDown`. Repeated calls do nothing.
    pub fn teardown(&self) {
        if self.state.replace(LifecycleState::TornDown) == LifecycleState::TornDown {
            return;
        }
        if let Some(segment) = self.segment.borrow_mut().take() {
            segment.close();
        }
        log::debug!("viewport classifier torn down");
    }
}

impl Drop for ViewportClassifier {
    fn drop(&mut self) {
        self.teardown();
    }
}
