//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file.
pub const CONFIG_PATH_ENV: &str = "ENHANCE_CONFIG";

/// A loaded configuration layer together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads YAML settings files.
///
/// # Examples
///
/// ```no_run
/// use enhance::config::ConfigLoader;
/// use std::path::Path;
///
/// let source = ConfigLoader::load(Path::new("enhance.yaml")).unwrap();
/// println!("strict: {:?}", source.config.strict);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load(path: &Path) -> Result<ConfigSource> {
        Ok(ConfigSource {
            path: path.to_path_buf(),
            config: Self::load_file(path)?,
        })
    }

    /// Load the file named by `ENHANCE_CONFIG`, if the variable is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be read or parsed. A set
    /// but missing file is an error, not a silent fallback.
    pub fn load_from_env() -> Result<Option<ConfigSource>> {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)).map(Some),
            _ => Ok(None),
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        log::debug!("loading settings from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }
}
