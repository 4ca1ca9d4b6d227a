//! Session notification bus.
//!
//! Listeners are plain closures invoked synchronously, in registration order,
//! on the emitting call stack. There is no unsubscribe: subscriptions live as
//! long as the bus.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Session-state transition notification. Carries no payload; consumers
/// re-query the session for the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
    Registered,
}

/// Observer list for [`SessionEvent`] notifications. Clones share the same
/// listener list.
#[derive(Clone, Default)]
pub struct SessionEvents {
    listeners: Rc<RefCell<Vec<Rc<dyn Fn(SessionEvent)>>>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Delivery order follows registration order.
    pub fn subscribe(&self, listener: impl Fn(SessionEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Deliver `event` to every listener registered before this call.
    pub fn emit(&self, event: SessionEvent) {
        // Snapshot: a listener may subscribe mid-delivery without a
        // re-entrant borrow.
        let listeners: Vec<_> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(event);
        }
    }
}
