//! Turns raw watcher notifications into committed state updates.
//!
//! With a zero debounce every notification commits synchronously. Otherwise
//! a single timer is (re)started per notification and only the value of the
//! latest notification is committed when it expires.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use web_time::Duration;

use crate::host::Listener;
use crate::timer::{TimerId, Timers};

pub struct UpdateScheduler {
    inner: Rc<Inner>,
}

struct Inner {
    stream: &'static str,
    timers: Rc<dyn Timers>,
    debounce: Cell<Duration>,
    pending: Cell<Option<TimerId>>,
    // Bumped for every scheduled timer; a firing timer whose generation is
    // stale was superseded and must not commit.
    generation: Cell<u64>,
    latest: Cell<bool>,
    cancelled: Cell<bool>,
    commit: Box<dyn Fn(bool)>,
}

impl UpdateScheduler {
    pub fn new(
        stream: &'static str,
        timers: Rc<dyn Timers>,
        debounce: Duration,
        commit: impl Fn(bool) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                stream,
                timers,
                debounce: Cell::new(debounce),
                pending: Cell::new(None),
                generation: Cell::new(0),
                latest: Cell::new(false),
                cancelled: Cell::new(false),
                commit: Box::new(commit),
            }),
        }
    }

    /// A scheduler that always commits synchronously.
    pub fn immediate(
        stream: &'static str,
        timers: Rc<dyn Timers>,
        commit: impl Fn(bool) + 'static,
    ) -> Self {
        Self::new(stream, timers, Duration::ZERO, commit)
    }

    pub fn debounce(&self) -> Duration {
        self.inner.debounce.get()
    }

    /// Applies to notifications received from now on. A timer that is
    /// already running keeps its original deadline.
    pub fn set_debounce(&self, debounce: Duration) {
        self.inner.debounce.set(debounce);
    }

    pub fn has_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    pub fn notify(&self, matches: bool) {
        Inner::notify(&self.inner, matches);
    }

    /// A listener that forwards into this scheduler without keeping it alive.
    pub fn listener(&self) -> Listener {
        let weak = Rc::downgrade(&self.inner);
        Listener::new(move |matches| {
            if let Some(inner) = weak.upgrade() {
                Inner::notify(&inner, matches);
            }
        })
    }

    /// Drops any pending commit and rejects every later notification.
    pub fn cancel(&self) {
        let inner = &self.inner;
        if inner.cancelled.replace(true) {
            return;
        }
        inner.clear_pending();
        log::trace!("{}: scheduler cancelled", inner.stream);
    }
}

impl Drop for UpdateScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Inner {
    fn notify(this: &Rc<Inner>, matches: bool) {
        if this.cancelled.get() {
            log::trace!("{}: notification after teardown ignored", this.stream);
            return;
        }
        this.latest.set(matches);

        let delay = this.debounce.get();
        if delay.is_zero() {
            // A pending value is older than this one; drop it.
            this.clear_pending();
            this.commit_latest();
            return;
        }

        this.clear_pending();
        let generation = this.generation.get() + 1;
        this.generation.set(generation);
        let weak: Weak<Inner> = Rc::downgrade(this);
        let id = this.timers.set_timeout(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.fire(generation);
                }
            }),
        );
        this.pending.set(Some(id));
        log::trace!("{}: commit of {matches} deferred by {delay:?}", this.stream);
    }

    fn fire(&self, generation: u64) {
        if self.cancelled.get() || self.generation.get() != generation {
            return;
        }
        if self.pending.take().is_none() {
            return;
        }
        self.commit_latest();
    }

    fn commit_latest(&self) {
        let value = self.latest.get();
        log::trace!("{}: commit {value}", self.stream);
        (self.commit)(value);
    }

    fn clear_pending(&self) {
        if let Some(id) = self.pending.take() {
            self.timers.clear_timeout(id);
        }
    }
}
