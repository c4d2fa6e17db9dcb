//! Configuration validation.

use crate::config::schema::Settings;
use crate::error::{Error, Result};

/// Validates effective settings before the engine uses them.
///
/// Directive keys must be usable as INI option names and must be distinct.
///
/// # Examples
///
/// ```
/// use enhance::config::{ConfigValidator, Settings};
///
/// ConfigValidator::validate(&Settings::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete set of settings.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(settings: &Settings) -> Result<()> {
        Self::validate_key("directive_key", &settings.directive_key)?;
        Self::validate_key("simple_directive_key", &settings.simple_directive_key)?;

        if settings.directive_key == settings.simple_directive_key {
            return Err(Error::Validation {
                field: "simple_directive_key".into(),
                message: format!(
                    "must differ from directive_key (both are '{}')",
                    settings.directive_key
                ),
            });
        }

        Ok(())
    }

    fn validate_key(field: &str, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "cannot be empty".into(),
            });
        }

        if key.chars().any(char::is_whitespace) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{key}' cannot contain whitespace"),
            });
        }

        if key.contains(['=', ':']) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{key}' cannot contain '=' or ':'"),
            });
        }

        if key.starts_with(['[', '#', ';']) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{key}' cannot start with '[', '#' or ';'"),
            });
        }

        Ok(())
    }
}
