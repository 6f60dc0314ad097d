//! Dropdown open/close state and the outside-click dismissal hub.
//!
//! Dismissal is a capability: an overlay subscribes a handler for the time
//! it is visible and holds the returned [`Subscription`]; dropping it on
//! unmount removes the handler deterministically, so nothing keeps firing
//! after the overlay is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Open/close toggle for a select dropdown
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectState {
    open: bool,
}

impl SelectState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

type Handler = Box<dyn FnMut()>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Fan-out point for outside-click events. Single-threaded by design;
/// handlers must not call back into the hub.
#[derive(Clone, Default)]
pub struct DismissHub {
    inner: Rc<RefCell<Inner>>,
}

impl DismissHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for the overlay's visible lifetime. It stays
    /// live exactly until the returned subscription is dropped.
    pub fn subscribe(&self, handler: impl FnMut() + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Box::new(handler)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver an outside click to every live handler, in subscribe order
    pub fn notify(&self) {
        for (_, handler) in self.inner.borrow_mut().handlers.iter_mut() {
            handler();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Unsubscribes its handler when dropped
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Hub may already be gone; nothing to release then
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
