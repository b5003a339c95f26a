//! In-memory viewport host.
//!
//! Stands in for the browser in tests and lets embedding applications drive
//! resizes deterministically. Events are dispatched synchronously on the
//! calling thread, in registration order, like a browser event loop turn.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::consts::RESIZE_EVENT;
use crate::error::HostError;
use crate::host::{ListenerId, ResizeHandler, ViewportHost};

struct Listener {
    id: ListenerId,
    event: String,
    handler: ResizeHandler,
}

/// Simulated window + document root.
pub struct SimulatedHost {
    height: Cell<f64>,
    root_attached: Cell<bool>,
    reject_listeners: Cell<bool>,
    measure_failure: RefCell<Option<String>>,
    style: RefCell<BTreeMap<String, String>>,
    style_writes: Cell<usize>,
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<u64>,
}

impl SimulatedHost {
    /// A host whose window is `height` pixels tall, with an empty root style.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height: Cell::new(height),
            root_attached: Cell::new(true),
            reject_listeners: Cell::new(false),
            measure_failure: RefCell::new(None),
            style: RefCell::new(BTreeMap::new()),
            style_writes: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Current simulated inner height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Change the height without firing `resize`.
    pub fn set_height(&self, height: f64) {
        self.height.set(height);
    }

    /// Change the height and fire `resize`. Returns the number of listeners run.
    pub fn resize_to(&self, height: f64) -> usize {
        self.height.set(height);
        self.dispatch(RESIZE_EVENT)
    }

    /// Fire `event` at every listener registered for it, in registration order.
    ///
    /// Handlers are snapshotted first, so a handler may add or remove
    /// listeners; those changes apply from the next dispatch.
    pub fn dispatch(&self, event: &str) -> usize {
        let handlers: Vec<ResizeHandler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.event == event)
            .map(|l| Rc::clone(&l.handler))
            .collect();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    /// Register a listener for an arbitrary event type.
    pub fn add_listener(&self, event: &str, handler: ResizeHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener { id, event: event.to_owned(), handler });
        id
    }

    /// Number of listeners registered for `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.borrow().iter().filter(|l| l.event == event).count()
    }

    /// Value of `name` on the root inline style, if ever set.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<String> {
        self.style.borrow().get(name).cloned()
    }

    /// Total successful style writes since construction.
    #[must_use]
    pub fn style_writes(&self) -> usize {
        self.style_writes.get()
    }

    /// Remove the document root so style writes fail.
    pub fn detach_root(&self) {
        self.root_attached.set(false);
    }

    /// Restore the document root. Previously written properties are kept.
    pub fn attach_root(&self) {
        self.root_attached.set(true);
    }

    /// Make height reads fail with `message`, or succeed again with `None`.
    pub fn fail_measure(&self, message: Option<&str>) {
        *self.measure_failure.borrow_mut() = message.map(str::to_owned);
    }

    /// Make subsequent resize listener registrations fail.
    pub fn reject_listeners(&self, reject: bool) {
        self.reject_listeners.set(reject);
    }
}

impl ViewportHost for SimulatedHost {
    fn inner_height(&self) -> Result<f64, HostError> {
        if let Some(message) = self.measure_failure.borrow().as_ref() {
            return Err(HostError::Measure(message.clone()));
        }
        Ok(self.height.get())
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), HostError> {
        if !self.root_attached.get() {
            return Err(HostError::MissingRootElement);
        }
        self.style.borrow_mut().insert(name.to_owned(), value.to_owned());
        self.style_writes.set(self.style_writes.get() + 1);
        Ok(())
    }

    fn add_resize_listener(&self, handler: ResizeHandler) -> Result<ListenerId, HostError> {
        if self.reject_listeners.get() {
            return Err(HostError::Listener("listener registration rejected".to_owned()));
        }
        Ok(self.add_listener(RESIZE_EVENT, handler))
    }

    fn remove_resize_listener(&self, id: ListenerId) -> Result<(), HostError> {
        let mut listeners = self.listeners.borrow_mut();
        let Some(pos) = listeners.iter().position(|l| l.id == id && l.event == RESIZE_EVENT) else {
            return Err(HostError::UnknownListener(id));
        };
        listeners.remove(pos);
        Ok(())
    }
}
