//! Configuration schema definitions.
//!
//! [`Config`] is one layer as written in a YAML file or assembled from the
//! environment: every field is optional. [`Settings`] is the effective
//! result after layering, with defaults filled in, and is what the engine
//! consumes.

use serde::{Deserialize, Serialize};

/// Default key of the extended directive option.
pub const DEFAULT_DIRECTIVE_KEY: &str = "<<";

/// Default key of the simple (single inherit) directive option.
pub const DEFAULT_SIMPLE_DIRECTIVE_KEY: &str = "<";

/// One configuration layer.
///
/// # Examples
///
/// ```
/// use enhance::config::Config;
///
/// let config: Config = serde_yaml::from_str("strict: true\n").unwrap();
/// assert_eq!(config.strict, Some(true));
/// assert_eq!(config.directive_key, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Option key holding the extended directive.
    pub directive_key: Option<String>,

    /// Option key holding the simple inherit directive.
    pub simple_directive_key: Option<String>,

    /// Treat malformed directives and unknown operators as errors.
    pub strict: Option<bool>,

    /// Strip directive options from sections that stay unresolved.
    pub strip_unresolved_directives: Option<bool>,
}

impl Config {
    /// Resolve this layer into effective settings, filling in defaults.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            directive_key: self
                .directive_key
                .clone()
                .unwrap_or(defaults.directive_key),
            simple_directive_key: self
                .simple_directive_key
                .clone()
                .unwrap_or(defaults.simple_directive_key),
            strict: self.strict.unwrap_or(defaults.strict),
            strip_unresolved_directives: self
                .strip_unresolved_directives
                .unwrap_or(defaults.strip_unresolved_directives),
        }
    }
}

/// Effective engine settings.
///
/// # Examples
///
/// ```
/// use enhance::config::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.directive_key, "<<");
/// assert_eq!(settings.simple_directive_key, "<");
/// assert!(!settings.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Option key holding the extended directive.
    pub directive_key: String,
    /// Option key holding the simple inherit directive.
    pub simple_directive_key: String,
    /// Reject a whole directive when it contains a dangling operator or an
    /// unknown operator, leaving the section unresolved.
    pub strict: bool,
    /// When false, raw directive values are written back onto sections
    /// that could not be resolved.
    pub strip_unresolved_directives: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directive_key: DEFAULT_DIRECTIVE_KEY.to_string(),
            simple_directive_key: DEFAULT_SIMPLE_DIRECTIVE_KEY.to_string(),
            strict: false,
            strip_unresolved_directives: true,
        }
    }
}

impl Settings {
    /// Returns these settings with strict mode set.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
