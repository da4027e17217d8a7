//! # Event Subscriptions
//!
//! Every subscribe call in the core hands back a [`Subscription`]. It owns the
//! detach logic of whatever it subscribed to: removing a JavaScript listener,
//! dropping a registry entry, and so on.
//!
//! Detaching happens exactly once: on [`Subscription::unsubscribe`] or, if that
//! was never called, when the value is dropped.
//!
//! [`Listeners`] is the in-process registry used for state observers and by
//! test doubles of the connector backends.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle to an attached listener.
#[must_use = "dropping a Subscription detaches the listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription that runs `detach` when released.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Subscription with nothing to detach.
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Detach the listener now.
    pub fn unsubscribe(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

type Callback<T> = Rc<dyn Fn(&T)>;

/// Single-threaded callback registry.
///
/// Callbacks run outside of any internal borrow, so a callback may add or
/// remove listeners (including itself) while being notified.
pub struct Listeners<T> {
    entries: Rc<RefCell<Vec<(u64, Callback<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }
}

impl<T: 'static> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Dropping the returned subscription removes it.
    pub fn add(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::new(callback)));

        let entries = Rc::downgrade(&self.entries);
        Subscription::new(move || {
            if let Some(entries) = entries.upgrade() {
                entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Call every registered callback with `value`.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Callback<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsubscribe_runs_once() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        subscription.unsubscribe();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_detaches() {
        let count = Rc::new(Cell::new(0));
        {
            let counter = Rc::clone(&count);
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_listeners_emit_and_remove() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = listeners.add(move |value| sink.borrow_mut().push(*value));

        listeners.emit(&1);
        assert_eq!(listeners.len(), 1);

        subscription.unsubscribe();
        listeners.emit(&2);

        assert!(listeners.is_empty());
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_callback_may_add_listeners_while_emitting() {
        let listeners = Listeners::<()>::new();
        let held = Rc::new(RefCell::new(Vec::new()));

        let registry = listeners.clone();
        let keep = Rc::clone(&held);
        let _outer = listeners.add(move |_| {
            keep.borrow_mut().push(registry.add(|_| {}));
        });

        listeners.emit(&());
        assert_eq!(listeners.len(), 2);
    }
}
