//! Publishes one percent of the viewport height as the `--vh` CSS custom property.
//!
//! Mobile browsers disagree on what `100vh` means once toolbars collapse and
//! expand. This crate measures `window.innerHeight`, writes `innerHeight * 0.01`
//! as `--vh` on the document root's inline style, and recomputes on every
//! window resize. Stylesheets then use `calc(var(--vh) * 100)` for a stable
//! full-height value.
//!
//! The publisher is written against the [`host::ViewportHost`] trait so it can
//! run both in the browser (feature `browser`, see `web`) and natively against
//! [`sim::SimulatedHost`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`publisher`] | compute-and-publish, installation, and the resize subscription |
//! | [`host`] | The host seam: viewport height, root style, resize listeners |
//! | [`sim`] | In-memory host with a settable height and event dispatch |
//! | [`units`] | Value computation and pixel formatting |
//! | [`config`] | Property name and fraction, loadable from JSON |
//! | [`error`] | Host and configuration error types |
//! | [`consts`] | Default property name, fraction, and event names |
//! | `web` | `web-sys` host and wasm entry points (feature `browser`) |

pub mod config;
pub mod consts;
pub mod error;
pub mod host;
pub mod publisher;
pub mod sim;
pub mod units;
#[cfg(feature = "browser")]
pub mod web;

pub use config::PublisherConfig;
pub use error::{ConfigError, HostError};
pub use host::{ListenerId, ViewportHost};
pub use publisher::{Publisher, ResizeSubscription, install};
