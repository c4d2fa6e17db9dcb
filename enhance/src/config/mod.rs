//! Engine configuration.
//!
//! Settings control which option keys hold directives and how strictly
//! directives are parsed. They are layered with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ENHANCE_*`)
//! 3. Settings file (`ConfigBuilder::with_file` or `ENHANCE_CONFIG`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use enhance::config::{Config, ConfigBuilder};
//!
//! let settings = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         directive_key: Some("extends".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.directive_key, "extends");
//! assert_eq!(settings.simple_directive_key, "<");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_PATH_ENV};
pub use merger::ConfigMerger;
pub use schema::{Config, Settings, DEFAULT_DIRECTIVE_KEY, DEFAULT_SIMPLE_DIRECTIVE_KEY};
pub use validator::ConfigValidator;
