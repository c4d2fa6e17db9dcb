//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which applies every
//! section's directives and writes the resulting file.

use crate::error::CliError;
use crate::utils::{
    format_store, load_settings, load_store, require_resolved, write_output, GlobalOptions,
    StoreFormat,
};
use clap::Args;
use enhance::Enhancer;
use std::path::PathBuf;

/// Resolve a file and print the result.
#[derive(Args)]
pub struct ResolveCommand {
    /// INI file to resolve
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "ini", ignore_case = true)]
    pub format: StoreFormat,

    /// Write the result to PATH instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit successfully even if some sections could not be resolved
    #[arg(long)]
    pub allow_unresolved: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// The result is written even when sections are unresolved; the exit
    /// code reports the failure.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load settings and input
        let settings = load_settings(global)?;
        let mut store = load_store(&self.file)?;

        // 2. Resolve in place
        let resolution = Enhancer::new(settings).run(&mut store)?;

        // 3. Write the result
        let text = format_store(&store, self.format)?;
        write_output(self.output.as_deref(), &text)?;

        if self.allow_unresolved {
            return Ok(());
        }
        require_resolved(&resolution.unresolved)
    }
}
