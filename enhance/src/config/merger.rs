//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use enhance::config::{Config, ConfigMerger};
///
/// let low = Config { strict: Some(false), ..Default::default() };
/// let high = Config { strict: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.strict, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge file sources into one layer.
    ///
    /// Sources are given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[ConfigSource]) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.directive_key.is_some() {
            target.directive_key.clone_from(&source.directive_key);
        }

        if source.simple_directive_key.is_some() {
            target
                .simple_directive_key
                .clone_from(&source.simple_directive_key);
        }

        if source.strict.is_some() {
            target.strict = source.strict;
        }

        if source.strip_unresolved_directives.is_some() {
            target.strip_unresolved_directives = source.strip_unresolved_directives;
        }
    }
}
