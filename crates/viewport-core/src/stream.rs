use web_time::Duration;

use crate::error::{Result, ViewportError};
use crate::host::ViewportCapability;
use crate::query::MediaQuery;
use crate::scheduler::UpdateScheduler;
use crate::watcher::{BindPath, QueryWatcher, bind};

/// One media query bound to one scheduler: the unit that is attached and
/// torn down together.
pub struct QueryStream {
    query: MediaQuery,
    scheduler: UpdateScheduler,
    watcher: Box<dyn QueryWatcher>,
}

impl QueryStream {
    /// Attaches a listener that feeds `commit` through a scheduler with the
    /// given debounce.
    ///
    /// Callers seed from a sample taken just before; no synthetic
    /// notification is sent at attach time.
    pub fn open(
        host: &dyn ViewportCapability,
        stream: &'static str,
        query: MediaQuery,
        debounce: Duration,
        commit: impl Fn(bool) + 'static,
    ) -> Result<Self> {
        let list = host
            .match_media(&query)
            .ok_or(ViewportError::UnsupportedEnvironment)?;

        let scheduler = UpdateScheduler::new(stream, host.timers(), debounce, commit);
        let watcher = bind(list, scheduler.listener())?;

        Ok(Self {
            query,
            scheduler,
            watcher,
        })
    }

    pub fn query(&self) -> &MediaQuery {
        &self.query
    }

    pub fn path(&self) -> BindPath {
        self.watcher.path()
    }

    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    pub fn is_open(&self) -> bool {
        self.watcher.is_attached()
    }

    /// Cancels the pending commit first, then detaches. Safe to repeat.
    pub fn close(&self) {
        self.scheduler.cancel();
        self.watcher.detach();
    }
}

impl Drop for QueryStream {
    fn drop(&mut self) {
        self.close();
    }
}
