//! Layered settings construction.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, Settings};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds [`Settings`] from defaults, a settings file, the environment and
/// programmatic overrides, in that order of increasing precedence.
///
/// # Examples
///
/// ```
/// use enhance::config::{Config, ConfigBuilder};
///
/// let settings = ConfigBuilder::new()
///     .skip_env()
///     .with_config(Config { strict: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
/// assert!(settings.strict);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with every layer enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this settings file instead of the one named by `ENHANCE_CONFIG`.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Ignore settings files entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ENHANCE_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic layer on top of everything else. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be loaded, an environment
    /// variable is invalid, or the merged settings fail validation.
    pub fn build(self) -> Result<Settings> {
        let mut sources = Vec::new();
        if !self.skip_files {
            match &self.file {
                Some(path) => sources.push(ConfigLoader::load(path)?),
                None => sources.extend(ConfigLoader::load_from_env()?),
            }
        }

        let mut config = ConfigMerger::merge(&sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        let settings = config.settings();
        ConfigValidator::validate(&settings)?;
        Ok(settings)
    }
}
