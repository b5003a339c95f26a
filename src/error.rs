//! Error types for host access and configuration.

use crate::host::ListenerId;

/// Error raised while talking to the viewport host.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// No global `window` object is available.
    #[error("no window object in this environment")]
    MissingWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    MissingDocument,
    /// The document has no root element, or it is not an HTML element.
    #[error("document has no html root element")]
    MissingRootElement,
    /// Reading the viewport height threw; carries the host's message.
    #[error("failed to read viewport height: {0}")]
    Measure(String),
    /// The viewport height, or the value scaled from it, is not finite.
    #[error("viewport height does not give a finite value: {0}")]
    InvalidHeight(f64),
    /// Writing the custom property on the root style failed.
    #[error("failed to set {property}: {message}")]
    Style { property: String, message: String },
    /// Registering or removing a resize listener failed.
    #[error("resize listener error: {0}")]
    Listener(String),
    /// The host has no listener registered under this id.
    #[error("unknown resize listener: {0}")]
    UnknownListener(ListenerId),
}

/// Error returned when a [`crate::config::PublisherConfig`] is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The raw configuration is not valid JSON for the config shape.
    #[error("failed to parse publisher config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The property name is not a CSS custom property (`--name`).
    #[error("invalid custom property name: {0:?}")]
    InvalidProperty(String),
    /// The fraction is zero, negative, or not finite.
    #[error("fraction must be a positive finite number, got {0}")]
    InvalidFraction(f64),
}
