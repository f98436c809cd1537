//! Publish-on-write state container.
//!
//! DESIGN
//! ======
//! A minimal observable cell for single-threaded (browser event loop) use:
//! one owner writes whole values, subscribers get notified with each new
//! value. The callback list is snapshotted before notification so a callback
//! may subscribe or unsubscribe without poisoning the iteration.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`StateCell::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    notify: Callback<T>,
}

/// Single-writer observable holding one value of type `T`.
pub struct StateCell<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Cell<u64>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Project out of the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value wholesale and notify every subscriber.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        // Snapshot callbacks and release all borrows before invoking, so a
        // callback may read the cell or change the subscriber list.
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| Rc::clone(&s.notify))
            .collect();
        let current = self.get();
        for notify in callbacks {
            notify(&current);
        }
    }

    /// Register a callback invoked with each newly published value.
    pub fn subscribe(&self, notify: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            notify: Rc::new(notify),
        });
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|s| s.id != id);
    }
}
