//! Capabilities the classifier needs from its host environment.
//!
//! In a browser these map onto `window.matchMedia`, the `MediaQueryList` it
//! returns and `setTimeout`. Everything here is injected, so tests and native
//! demos substitute [`crate::testing::FakeViewport`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::BindError;
use crate::query::MediaQuery;
use crate::timer::Timers;

/// Event name used by the modern registration API.
pub const CHANGE_EVENT: &str = "change";

pub type ListenerId = u64;

thread_local! {
    static NEXT_LISTENER: Cell<ListenerId> = const { Cell::new(1) };
}

/// A change callback with a stable identity, so the host can match an
/// unregister call against the earlier register call.
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    callback: Rc<dyn Fn(bool)>,
}

impl Listener {
    pub fn new(callback: impl Fn(bool) + 'static) -> Self {
        let id = NEXT_LISTENER.with(|n| {
            let id = n.get();
            n.set(id + 1);
            id
        });
        Self {
            id,
            callback: Rc::new(callback),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Delivers a raw "query matched" notification.
    pub fn call(&self, matches: bool) {
        (self.callback)(matches)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("id", &self.id).finish()
    }
}

/// `addEventListener("change", ..)` / `removeEventListener("change", ..)`.
pub trait EventListenerApi {
    fn add_event_listener(&self, event: &str, listener: &Listener) -> Result<(), BindError>;
    fn remove_event_listener(&self, event: &str, listener: &Listener) -> Result<(), BindError>;
}

/// Pre-EventTarget `addListener(cb)` / `removeListener(cb)`.
pub trait LegacyListenerApi {
    fn add_listener(&self, listener: &Listener) -> Result<(), BindError>;
    fn remove_listener(&self, listener: &Listener) -> Result<(), BindError>;
}

/// A live handle bound to one media query, owned by the host.
pub trait MediaQueryList {
    /// The serialized query this list evaluates.
    fn media(&self) -> String;
    /// Current truth value of the query.
    fn matches(&self) -> bool;
    /// `None` when the host object has no `addEventListener`.
    fn modern(&self) -> Option<&dyn EventListenerApi>;
    /// `None` when the host object has no `addListener`.
    fn legacy(&self) -> Option<&dyn LegacyListenerApi>;
}

pub trait ViewportCapability {
    /// `false` when there is no browsing context or no `matchMedia`.
    fn supports_media_queries(&self) -> bool;
    fn match_media(&self, query: &MediaQuery) -> Option<Rc<dyn MediaQueryList>>;
    fn timers(&self) -> Rc<dyn Timers>;
}
