//! The host seam between the publisher and the page environment.
//!
//! A host owns three things the publisher needs: the current inner height of
//! the window, the inline style of the document root, and the window's
//! `resize` notifications. The browser implementation lives in `web`; the
//! in-memory one in [`crate::sim`].

use std::fmt;
use std::rc::Rc;

use crate::error::HostError;

/// Opaque handle for a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Callback invoked once per resize notification.
pub type ResizeHandler = Rc<dyn Fn()>;

/// Page environment the publisher reads from and writes to.
///
/// All calls happen on the single thread that owns the page, so
/// implementations use interior mutability rather than locks.
pub trait ViewportHost {
    /// Current inner height of the window in CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the window is unavailable or the height
    /// cannot be read.
    fn inner_height(&self) -> Result<f64, HostError>;

    /// Set `name` to `value` on the document root's inline style.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the root element is missing or rejects the write.
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), HostError>;

    /// Register `handler` for the window's `resize` notifications.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Listener`] when registration fails.
    fn add_resize_listener(&self, handler: ResizeHandler) -> Result<ListenerId, HostError>;

    /// Remove a listener previously returned by [`Self::add_resize_listener`].
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownListener`] for an id this host never issued
    /// or already removed.
    fn remove_resize_listener(&self, id: ListenerId) -> Result<(), HostError>;
}
