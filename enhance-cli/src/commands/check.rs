//! Check command implementation.
//!
//! This module implements the `check` command, which resolves a file in
//! memory and reports what went wrong. Diagnostics are printed to stderr
//! by the logger as they are recorded; stdout carries the summary.

use crate::error::CliError;
use crate::utils::{load_settings, load_store, to_json, write_output, GlobalOptions, ReportFormat};
use clap::Args;
use enhance::{Enhancer, Resolution, Store};
use std::fmt::Write;
use std::path::PathBuf;

/// Report problems without producing output.
#[derive(Args)]
pub struct CheckCommand {
    /// INI file to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: ReportFormat,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let mut store = load_store(&self.file)?;
        let total = store.sections().len();

        let resolution = Enhancer::new(settings).run(&mut store)?;

        let report = match self.format {
            ReportFormat::Text => summary(&resolution, total),
            ReportFormat::Json => to_json(&resolution)?,
        };
        write_output(None, &report)?;

        if !resolution.is_complete() || resolution.diagnostics.has_errors() {
            return Err(CliError::SemanticFailure(format!(
                "{} problem(s) found in {}",
                resolution.diagnostics.len(),
                self.file.display()
            )));
        }
        Ok(())
    }
}

fn summary(resolution: &Resolution, total: usize) -> String {
    let mut out = format!(
        "{} of {total} section(s) resolved in {} wave(s)\n",
        resolution.resolved().count(),
        resolution.waves.len()
    );
    for name in &resolution.unresolved {
        let _ = writeln!(out, "unresolved: {name}");
    }
    if !resolution.diagnostics.is_empty() {
        let _ = writeln!(out, "{} diagnostic(s)", resolution.diagnostics.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use enhance::store::ini;

    #[test]
    fn test_summary_lists_unresolved() {
        let mut store = ini::parse("[a]\n<<= <ghost\n\n[b]\nk = v\n").unwrap();
        let resolution = enhance::enhance(&mut store).unwrap();
        let text = summary(&resolution, 2);

        assert!(text.starts_with("1 of 2 section(s) resolved in 1 wave(s)\n"));
        assert!(text.contains("unresolved: a\n"));
        assert!(text.contains("2 diagnostic(s)\n"));
    }

    #[test]
    fn test_summary_clean() {
        let mut store = ini::parse("[a]\nk = v\n\n[b]\n<= a\n").unwrap();
        let resolution = enhance::enhance(&mut store).unwrap();
        assert_eq!(
            summary(&resolution, 2),
            "2 of 2 section(s) resolved in 2 wave(s)\n"
        );
    }
}
