//! Publisher configuration.
//!
//! Defaults reproduce the plain `--vh` behaviour. A JSON document can override
//! either field, e.g. `{"property": "--app-vh"}` when `--vh` is already taken
//! by another stylesheet.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CUSTOM_PROPERTY_PREFIX, VH_FRACTION, VH_PROPERTY};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherConfig {
    /// Custom property written on the document root.
    pub property: String,
    /// Multiplier applied to the viewport height.
    pub fraction: f64,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self { property: VH_PROPERTY.to_owned(), fraction: VH_FRACTION }
    }
}

impl PublisherConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and the [`Self::validate`] errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the property is a custom property and the fraction is usable.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidProperty`] unless the name is `--` followed by at
    /// least one character with no whitespace; [`ConfigError::InvalidFraction`]
    /// unless the fraction is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.property.strip_prefix(CUSTOM_PROPERTY_PREFIX);
        let valid_name = name.is_some_and(|rest| !rest.is_empty() && !rest.chars().any(char::is_whitespace));
        if !valid_name {
            return Err(ConfigError::InvalidProperty(self.property.clone()));
        }
        if !self.fraction.is_finite() || self.fraction <= 0.0 {
            return Err(ConfigError::InvalidFraction(self.fraction));
        }
        Ok(())
    }
}
