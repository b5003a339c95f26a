//! Shared constants.

/// Custom property written on the document root.
pub const VH_PROPERTY: &str = "--vh";

/// Fraction of the viewport height one `--vh` unit represents.
pub const VH_FRACTION: f64 = 0.01;

/// Unit suffix appended to the published value.
pub const PX_SUFFIX: &str = "px";

/// Prefix every CSS custom property name must carry.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// DOM event type that triggers recomputation.
pub const RESIZE_EVENT: &str = "resize";
