//! In-memory host doubles: a viewport with settable size and a virtual-time
//! timer queue. Used by the test suites and the native demo.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use web_time::Duration;

use crate::error::BindError;
use crate::host::{
    CHANGE_EVENT, EventListenerApi, LegacyListenerApi, Listener, MediaQueryList,
    ViewportCapability,
};
use crate::query::MediaQuery;
use crate::timer::{TimerId, Timers};
use crate::watcher::BindPath;

struct Scheduled {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Timer queue driven by [`TestTimers::advance`]. Time only moves when the
/// test says so.
#[derive(Default)]
pub struct TestTimers {
    now: Cell<Duration>,
    next_id: Cell<TimerId>,
    queue: RefCell<Vec<Scheduled>>,
}

impl TestTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Moves the clock forward, running every timer that comes due in
    /// deadline order (ties in scheduling order). Timers scheduled by a
    /// callback run in the same call if they come due before the target.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due <= target)
                    .min_by_key(|(_, s)| (s.due, s.id))
                    .map(|(i, _)| i);
                idx.map(|i| queue.remove(i))
            };
            let Some(timer) = next else {
                break;
            };
            self.now.set(timer.due);
            (timer.callback)();
        }
        self.now.set(target);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Timers for TestTimers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.queue.borrow_mut().push(Scheduled {
            id,
            due: self.now.get() + delay,
            callback,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.queue.borrow_mut().retain(|s| s.id != id);
    }
}

/// Which registration API the fake query lists expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationShape {
    /// `addEventListener` only.
    Modern,
    /// `addListener` only.
    Legacy,
    /// Both, but `addEventListener` throws (interface mismatch).
    ModernRejects,
    /// Both present and working.
    Both,
    /// Neither.
    None,
}

/// Register/unregister calls seen by the fake, per API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistrationStats {
    pub modern_added: usize,
    pub modern_removed: usize,
    pub legacy_added: usize,
    pub legacy_removed: usize,
}

impl RegistrationStats {
    pub fn added(&self) -> usize {
        self.modern_added + self.legacy_added
    }

    pub fn removed(&self) -> usize {
        self.modern_removed + self.legacy_removed
    }
}

struct ViewportState {
    width: Cell<f64>,
    height: Cell<f64>,
    shape: Cell<RegistrationShape>,
    supported: Cell<bool>,
    lists: RefCell<Vec<Weak<FakeQueryList>>>,
    stats: Cell<RegistrationStats>,
}

impl ViewportState {
    fn record(&self, f: impl FnOnce(&mut RegistrationStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    fn live_lists(&self) -> Vec<Rc<FakeQueryList>> {
        let mut lists = self.lists.borrow_mut();
        lists.retain(|w| w.strong_count() > 0);
        lists.iter().filter_map(Weak::upgrade).collect()
    }
}

/// A viewport whose size the test controls. `match_media` hands out a fresh
/// [`FakeQueryList`] per call, like a browser does.
#[derive(Clone)]
pub struct FakeViewport {
    state: Rc<ViewportState>,
    timers: Rc<TestTimers>,
}

impl FakeViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: Rc::new(ViewportState {
                width: Cell::new(width),
                height: Cell::new(height),
                shape: Cell::new(RegistrationShape::Modern),
                supported: Cell::new(true),
                lists: RefCell::new(Vec::new()),
                stats: Cell::new(RegistrationStats::default()),
            }),
            timers: Rc::new(TestTimers::new()),
        }
    }

    /// A host without a browsing context.
    pub fn unsupported() -> Self {
        let viewport = Self::new(0.0, 0.0);
        viewport.state.supported.set(false);
        viewport
    }

    pub fn with_shape(self, shape: RegistrationShape) -> Self {
        self.state.shape.set(shape);
        self
    }

    pub fn test_timers(&self) -> Rc<TestTimers> {
        self.timers.clone()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.state.width.get(), self.state.height.get())
    }

    pub fn stats(&self) -> RegistrationStats {
        self.state.stats.get()
    }

    /// Listeners currently registered across every live query list.
    pub fn active_listeners(&self) -> usize {
        self.state
            .live_lists()
            .iter()
            .map(|l| l.listeners.borrow().len())
            .sum()
    }

    /// Changes the viewport size and notifies listeners of every query whose
    /// truth value flipped.
    pub fn resize(&self, width: f64, height: f64) {
        self.state.width.set(width);
        self.state.height.set(height);
        for list in self.state.live_lists() {
            let now = list.query.evaluate(width, height);
            if list.last.replace(now) != now {
                list.dispatch(now);
            }
        }
    }

    /// Delivers a raw notification to every listener of `query`, regardless
    /// of the current size.
    pub fn fire(&self, query: &MediaQuery, matches: bool) {
        for list in self.state.live_lists() {
            if list.query == *query {
                list.last.set(matches);
                list.dispatch(matches);
            }
        }
    }
}

impl ViewportCapability for FakeViewport {
    fn supports_media_queries(&self) -> bool {
        self.state.supported.get()
    }

    fn match_media(&self, query: &MediaQuery) -> Option<Rc<dyn MediaQueryList>> {
        if !self.state.supported.get() {
            return None;
        }
        let (w, h) = self.size();
        let list = Rc::new(FakeQueryList {
            query: *query,
            last: Cell::new(query.evaluate(w, h)),
            listeners: RefCell::new(Vec::new()),
            state: self.state.clone(),
        });
        self.state.lists.borrow_mut().push(Rc::downgrade(&list));
        Some(list)
    }

    fn timers(&self) -> Rc<dyn Timers> {
        self.timers.clone()
    }
}

pub struct FakeQueryList {
    query: MediaQuery,
    last: Cell<bool>,
    listeners: RefCell<Vec<(Listener, BindPath)>>,
    state: Rc<ViewportState>,
}

impl FakeQueryList {
    fn dispatch(&self, matches: bool) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(l, _)| l.clone())
            .collect();
        for l in listeners {
            l.call(matches);
        }
    }

    fn remove(&self, listener: &Listener, path: BindPath) -> Result<(), BindError> {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(l, p)| !(l.id() == listener.id() && *p == path));
        if listeners.len() == before {
            return Err(BindError::Rejected(format!(
                "listener {} was not registered via {path:?}",
                listener.id()
            )));
        }
        Ok(())
    }

    fn shape(&self) -> RegistrationShape {
        self.state.shape.get()
    }
}

impl EventListenerApi for FakeQueryList {
    fn add_event_listener(&self, event: &str, listener: &Listener) -> Result<(), BindError> {
        if self.shape() == RegistrationShape::ModernRejects {
            return Err(BindError::Rejected("addEventListener is not a function".into()));
        }
        if event != CHANGE_EVENT {
            return Err(BindError::Rejected(format!("unexpected event {event}")));
        }
        self.listeners
            .borrow_mut()
            .push((listener.clone(), BindPath::Modern));
        self.state.record(|s| s.modern_added += 1);
        Ok(())
    }

    fn remove_event_listener(&self, event: &str, listener: &Listener) -> Result<(), BindError> {
        if self.shape() == RegistrationShape::ModernRejects {
            return Err(BindError::Rejected(
                "removeEventListener is not a function".into(),
            ));
        }
        if event != CHANGE_EVENT {
            return Err(BindError::Rejected(format!("unexpected event {event}")));
        }
        self.remove(listener, BindPath::Modern)?;
        self.state.record(|s| s.modern_removed += 1);
        Ok(())
    }
}

impl LegacyListenerApi for FakeQueryList {
    fn add_listener(&self, listener: &Listener) -> Result<(), BindError> {
        self.listeners
            .borrow_mut()
            .push((listener.clone(), BindPath::Legacy));
        self.state.record(|s| s.legacy_added += 1);
        Ok(())
    }

    fn remove_listener(&self, listener: &Listener) -> Result<(), BindError> {
        self.remove(listener, BindPath::Legacy)?;
        self.state.record(|s| s.legacy_removed += 1);
        Ok(())
    }
}

impl MediaQueryList for FakeQueryList {
    fn media(&self) -> String {
        self.query.to_string()
    }

    fn matches(&self) -> bool {
        let (w, h) = (self.state.width.get(), self.state.height.get());
        self.query.evaluate(w, h)
    }

    fn modern(&self) -> Option<&dyn EventListenerApi> {
        match self.shape() {
            RegistrationShape::Modern | RegistrationShape::ModernRejects | RegistrationShape::Both => {
                Some(self as &dyn EventListenerApi)
            }
            RegistrationShape::Legacy | RegistrationShape::None => None,
        }
    }

    fn legacy(&self) -> Option<&dyn LegacyListenerApi> {
        match self.shape() {
            RegistrationShape::Legacy | RegistrationShape::ModernRejects | RegistrationShape::Both => {
                Some(self as &dyn LegacyListenerApi)
            }
            RegistrationShape::Modern | RegistrationShape::None => None,
        }
    }
}
