//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ENHANCE_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use enhance::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(key) = env::var("ENHANCE_DIRECTIVE_KEY") {
            config.directive_key = Some(key);
        }

        if let Ok(key) = env::var("ENHANCE_SIMPLE_DIRECTIVE_KEY") {
            config.simple_directive_key = Some(key);
        }

        if let Ok(val) = env::var("ENHANCE_STRICT") {
            config.strict = Some(Self::parse_bool("ENHANCE_STRICT", &val)?);
        }

        if let Ok(val) = env::var("ENHANCE_STRIP_UNRESOLVED") {
            config.strip_unresolved_directives =
                Some(Self::parse_bool("ENHANCE_STRIP_UNRESOLVED", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
