use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::remember;
use crate::scope::scoped_effect;

/// A cleanup action. Cloning shares the action; it runs at most once across
/// all clones.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_spent(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl fmt::Debug for Dispose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispose")
            .field("spent", &self.is_spent())
            .finish()
    }
}

/// Helper to register cleanup inside an effect.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

/// Runs `effect` on first composition and again whenever `key` changes,
/// disposing the previous run first. The last run is disposed when the
/// enclosing scope is.
pub fn disposable_effect<K: PartialEq + Clone + 'static>(
    key: K,
    effect: impl FnOnce() -> Dispose + 'static,
) {
    let last_key = remember(|| RefCell::new(None::<K>));
    let cleanup_slot = remember(|| RefCell::new(None::<Dispose>));
    let installed = remember(|| RefCell::new(false));

    // Install a single unmount disposer for this callsite.
    if !installed.replace(true) {
        let cleanup_slot = cleanup_slot.clone();
        scoped_effect(move || {
            on_unmount(move || {
                let d = cleanup_slot.borrow_mut().take();
                if let Some(d) = d {
                    d.run();
                }
            })
        });
    }

    let changed = last_key.borrow().as_ref() != Some(&key);
    if changed {
        *last_key.borrow_mut() = Some(key);

        let previous = cleanup_slot.borrow_mut().take();
        if let Some(d) = previous {
            d.run();
        }

        let d = effect();
        *cleanup_slot.borrow_mut() = Some(d);
    }
}
