//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! settings loading, input loading and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use enhance::config::{Config, ConfigBuilder, Settings};
use enhance::store::ini;
use enhance::SectionStore;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Settings file to load instead of `ENHANCE_CONFIG`.
    pub config: Option<PathBuf>,

    /// Force strict directive parsing.
    pub strict: bool,
}

/// Output format for a resolved store.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StoreFormat {
    /// INI text
    Ini,
    /// JSON object of sections
    Json,
    /// YAML mapping of sections
    Yaml,
}

/// Output format for reports (check, plan).
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

/// Load layered settings.
///
/// Settings are merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Settings file (`--config` or `ENHANCE_CONFIG`)
/// 4. Built-in defaults (lowest priority)
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }
    if global.strict {
        builder = builder.with_config(Config {
            strict: Some(true),
            ..Config::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Load the INI file to work on.
pub fn load_store(path: &Path) -> Result<SectionStore, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )));
    }
    ini::load(path).map_err(CliError::from)
}

/// Render a store in the requested format.
pub fn format_store(store: &SectionStore, format: StoreFormat) -> Result<String, CliError> {
    match format {
        StoreFormat::Ini => Ok(ini::render(store)),
        StoreFormat::Json => to_json(store),
        StoreFormat::Yaml => {
            serde_yaml::to_string(store).map_err(|e| CliError::Serialization(e.to_string()))
        }
    }
}

/// Serialize a value as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Write `text` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Fail with exit code 1 when `unresolved` is not empty.
pub fn require_resolved(unresolved: &[String]) -> Result<(), CliError> {
    if unresolved.is_empty() {
        return Ok(());
    }
    Err(CliError::SemanticFailure(format!(
        "{} section(s) could not be resolved: {}",
        unresolved.len(),
        unresolved.join(", ")
    )))
}
