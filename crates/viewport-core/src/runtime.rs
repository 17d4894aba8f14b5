use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Slot table of one composition.
#[derive(Default)]
pub struct Composer {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
}

impl Composer {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Installs a composer as the thread's active slot table for one pass and
/// puts the previous one back on drop.
pub struct ComposeGuard<'a> {
    owner: &'a RefCell<Composer>,
    prev: Option<Composer>,
}

impl<'a> ComposeGuard<'a> {
    pub fn begin(owner: &'a RefCell<Composer>) -> Self {
        let mut mine = std::mem::take(&mut *owner.borrow_mut());
        mine.cursor = 0;
        let prev = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), mine));
        ComposeGuard {
            owner,
            prev: Some(prev),
        }
    }
}

impl Drop for ComposeGuard<'_> {
    fn drop(&mut self) {
        let prev = self.prev.take().unwrap_or_default();
        let mine = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), prev));
        *self.owner.borrow_mut() = mine;
    }
}

/// A mounted component: persistent slots plus the scope that owns every
/// cleanup registered while composing it.
pub struct Composition {
    scope: Scope,
    composer: RefCell<Composer>,
    disposed: Cell<bool>,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition {
    pub fn new() -> Self {
        Self {
            scope: Scope::new(),
            composer: RefCell::new(Composer::default()),
            disposed: Cell::new(false),
        }
    }

    /// Runs one composition pass ("render").
    pub fn compose<R>(&self, f: impl FnOnce() -> R) -> R {
        if self.disposed.get() {
            log::warn!("compose called on a disposed composition");
        }
        let _guard = ComposeGuard::begin(&self.composer);
        self.scope.run(f)
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn slot_count(&self) -> usize {
        self.composer.borrow().slot_count()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Unmounts: runs every registered cleanup and drops remembered state.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        self.scope.dispose();
        let slots = std::mem::take(&mut *self.composer.borrow_mut());
        drop(slots);
    }
}

impl Drop for Composition {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let existing = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;
        match c.slots.get(cursor) {
            None => None,
            Some(slot) => match slot.downcast_ref::<Rc<T>>() {
                Some(rc) => Some(Ok(rc.clone())),
                None => Some(Err(cursor)),
            },
        }
    });

    match existing {
        Some(Ok(rc)) => rc,
        Some(Err(cursor)) => {
            log::warn!(
                "remember: slot {} type changed; replacing.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots[cursor] = Box::new(rc.clone()));
            rc
        }
        None => {
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots.push(Box::new(rc.clone())));
            rc
        }
    }
}
