//! The viewport-height publisher.
//!
//! [`Publisher::publish`] measures the host once and writes the scaled value.
//! [`install`] publishes immediately, then hooks `publish` to every window
//! resize and hands back a [`ResizeSubscription`] that unhooks it on drop.
//!
//! Every resize recomputes synchronously, one publish per notification. There
//! is no debounce or coalescing, so `--vh` lags the window by at most the
//! notifications still queued in the event loop.

#[cfg(test)]
#[path = "publisher_test.rs"]
mod publisher_test;

use std::rc::Rc;

use crate::config::PublisherConfig;
use crate::error::{ConfigError, HostError};
use crate::host::{ListenerId, ResizeHandler, ViewportHost};
use crate::units::px_for_height;

/// Writes the scaled viewport height onto a host's root style.
pub struct Publisher<H: ViewportHost> {
    host: Rc<H>,
    config: PublisherConfig,
}

impl<H: ViewportHost> Clone for Publisher<H> {
    fn clone(&self) -> Self {
        Self { host: Rc::clone(&self.host), config: self.config.clone() }
    }
}

impl<H: ViewportHost + 'static> Publisher<H> {
    /// Publisher for `--vh` at one percent of the viewport height.
    #[must_use]
    pub fn new(host: Rc<H>) -> Self {
        Self { host, config: PublisherConfig::default() }
    }

    /// Publisher with a custom property name or fraction.
    ///
    /// # Errors
    ///
    /// Any [`PublisherConfig::validate`] failure.
    pub fn with_config(host: Rc<H>, config: PublisherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { host, config })
    }

    #[must_use]
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Read the current viewport height and write the scaled value.
    ///
    /// After a successful return the property reflects the height observed
    /// during this call.
    ///
    /// # Errors
    ///
    /// Any [`HostError`] from reading the height or writing the style.
    pub fn publish(&self) -> Result<(), HostError> {
        let height = self.host.inner_height()?;
        let value = px_for_height(height, self.config.fraction)?;
        self.host.set_root_property(&self.config.property, &value)?;
        log::debug!("published {}={value} (innerHeight={height})", self.config.property);
        Ok(())
    }

    /// Publish now, then republish on every resize.
    ///
    /// # Errors
    ///
    /// Returns the initial [`Self::publish`] error without registering a
    /// listener, or the host's registration error.
    pub fn install(self) -> Result<ResizeSubscription<H>, HostError> {
        self.publish()?;

        let publisher = self.clone();
        let handler: ResizeHandler = Rc::new(move || {
            if let Err(e) = publisher.publish() {
                log::warn!("failed to republish {} on resize: {e}", publisher.config.property);
            }
        });
        let id = self.host.add_resize_listener(handler)?;
        log::info!("{} publisher installed (listener {id})", self.config.property);

        Ok(ResizeSubscription { host: self.host, property: self.config.property, id: Some(id) })
    }
}

/// Install the default `--vh` publisher on `host`.
///
/// # Errors
///
/// See [`Publisher::install`].
pub fn install<H: ViewportHost + 'static>(host: Rc<H>) -> Result<ResizeSubscription<H>, HostError> {
    Publisher::new(host).install()
}

/// Keeps a publisher hooked to resize notifications.
///
/// Dropping the subscription removes the listener. The last published value
/// stays on the root style. Call [`Self::forget`] to keep the listener for
/// the lifetime of the page instead.
#[must_use = "dropping the subscription immediately stops resize updates"]
pub struct ResizeSubscription<H: ViewportHost> {
    host: Rc<H>,
    property: String,
    id: Option<ListenerId>,
}

impl<H: ViewportHost> ResizeSubscription<H> {
    /// Listener id, or `None` once disposed or forgotten.
    #[must_use]
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Property this subscription keeps up to date.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Remove the resize listener, reporting failure.
    ///
    /// # Errors
    ///
    /// The host's removal error.
    pub fn dispose(mut self) -> Result<(), HostError> {
        self.release()
    }

    /// Leave the listener registered for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(id) = self.id.take() {
            log::debug!("{} listener {id} kept for page lifetime", self.property);
        }
    }

    fn release(&mut self) -> Result<(), HostError> {
        let Some(id) = self.id.take() else {
            return Ok(());
        };
        self.host.remove_resize_listener(id)?;
        log::info!("{} publisher disposed (listener {id})", self.property);
        Ok(())
    }
}

impl<H: ViewportHost> Drop for ResizeSubscription<H> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::warn!("failed to remove {} resize listener: {e}", self.property);
        }
    }
}
