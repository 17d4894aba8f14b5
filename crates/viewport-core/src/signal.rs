use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Cloneable handle to an observable value.
///
/// Subscribers run after the value has been stored and the internal borrow
/// released, so a subscriber may read the signal it is observing.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

struct Inner<T> {
    value: T,
    subs: Vec<Option<Subscriber<T>>>,
}

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    /// Stores `v` and notifies only when it differs from the current value.
    /// Returns whether anything changed.
    pub fn set_if_changed(&self, v: T) -> bool
    where
        T: Clone + PartialEq,
    {
        {
            let mut inner = self.0.borrow_mut();
            if inner.value == v {
                return false;
            }
            inner.value = v;
        }
        self.notify();
        true
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Some(Rc::new(f)));
        inner.subs.len() - 1
    }

    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.0.borrow_mut().subs.get_mut(id) {
            *slot = None;
        }
    }

    fn notify(&self)
    where
        T: Clone,
    {
        let (value, subs): (T, Vec<Subscriber<T>>) = {
            let inner = self.0.borrow();
            (
                inner.value.clone(),
                inner.subs.iter().flatten().cloned().collect(),
            )
        };
        for s in subs {
            s(&value);
        }
    }
}

pub fn signal<T: 'static>(t: T) -> Signal<T> {
    Signal::new(t)
}
