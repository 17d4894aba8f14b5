//! Binds one change listener to a host [`MediaQueryList`].
//!
//! Hosts expose one of two registration shapes: the EventTarget style
//! `addEventListener("change", cb)` and the older `addListener(cb)`. The shape
//! is picked once, in [`bind`], and the returned watcher remembers it so the
//! matching unregister call is always used.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{BindError, Result, ViewportError};
use crate::host::{CHANGE_EVENT, Listener, MediaQueryList};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindPath {
    Modern,
    Legacy,
}

/// A listener registration on a live query. Detaching is idempotent and is
/// also performed on drop if it has not happened yet.
pub trait QueryWatcher {
    fn path(&self) -> BindPath;
    fn media(&self) -> String;
    fn matches(&self) -> bool;
    fn is_attached(&self) -> bool;
    fn detach(&self);
}

/// Registers `listener` on `list`, preferring the modern API.
///
/// A list that rejects the modern registration, or has none, is retried with
/// the legacy one. Only a list with neither is an error.
pub fn bind(list: Rc<dyn MediaQueryList>, listener: Listener) -> Result<Box<dyn QueryWatcher>> {
    match try_modern(list.as_ref(), &listener) {
        Ok(()) => {
            log::debug!("watch {}: attached via addEventListener", list.media());
            return Ok(Box::new(ModernWatcher {
                list,
                listener,
                attached: Cell::new(true),
            }));
        }
        Err(e) => log::trace!("watch {}: modern registration unavailable ({e})", list.media()),
    }

    match try_legacy(list.as_ref(), &listener) {
        Ok(()) => {
            log::debug!("watch {}: attached via addListener", list.media());
            Ok(Box::new(LegacyWatcher {
                list,
                listener,
                attached: Cell::new(true),
            }))
        }
        Err(e) => {
            log::warn!("watch {}: no usable registration API ({e})", list.media());
            Err(ViewportError::UnsupportedEnvironment)
        }
    }
}

fn try_modern(list: &dyn MediaQueryList, listener: &Listener) -> Result<(), BindError> {
    list.modern()
        .ok_or(BindError::Unsupported)?
        .add_event_listener(CHANGE_EVENT, listener)
}

fn try_legacy(list: &dyn MediaQueryList, listener: &Listener) -> Result<(), BindError> {
    list.legacy()
        .ok_or(BindError::Unsupported)?
        .add_listener(listener)
}

struct ModernWatcher {
    list: Rc<dyn MediaQueryList>,
    listener: Listener,
    attached: Cell<bool>,
}

impl QueryWatcher for ModernWatcher {
    fn path(&self) -> BindPath {
        BindPath::Modern
    }

    fn media(&self) -> String {
        self.list.media()
    }

    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        let res = match self.list.modern() {
            Some(api) => api.remove_event_listener(CHANGE_EVENT, &self.listener),
            None => Err(BindError::Unsupported),
        };
        match res {
            Ok(()) => log::debug!("watch {}: detached via removeEventListener", self.media()),
            Err(e) => log::warn!("watch {}: removeEventListener failed: {e}", self.media()),
        }
    }
}

impl Drop for ModernWatcher {
    fn drop(&mut self) {
        self.detach();
    }
}

struct LegacyWatcher {
    list: Rc<dyn MediaQueryList>,
    listener: Listener,
    attached: Cell<bool>,
}

impl QueryWatcher for LegacyWatcher {
    fn path(&self) -> BindPath {
        BindPath::Legacy
    }

    fn media(&self) -> String {
        self.list.media()
    }

    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        let res = match self.list.legacy() {
            Some(api) => api.remove_listener(&self.listener),
            None => Err(BindError::Unsupported),
        };
        match res {
            Ok(()) => log::debug!("watch {}: detached via removeListener", self.media()),
            Err(e) => log::warn!("watch {}: removeListener failed: {e}", self.media()),
        }
    }
}

impl Drop for LegacyWatcher {
    fn drop(&mut self) {
        self.detach();
    }
}
