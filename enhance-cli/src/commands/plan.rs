//! Plan command implementation.
//!
//! This module implements the `plan` command, which shows the waves a
//! resolution would apply, and the sections it would leave unresolved,
//! without modifying anything.

use crate::error::CliError;
use crate::utils::{load_settings, load_store, to_json, write_output, GlobalOptions, ReportFormat};
use clap::Args;
use enhance::{Enhancer, Plan};
use std::fmt::Write;
use std::path::PathBuf;

/// Show the order sections would be resolved in.
#[derive(Args)]
pub struct PlanCommand {
    /// INI file to plan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: ReportFormat,
}

impl PlanCommand {
    /// Execute the plan command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let store = load_store(&self.file)?;

        let plan = Enhancer::new(settings).plan(&store)?;

        let report = match self.format {
            ReportFormat::Text => format_plan(&plan),
            ReportFormat::Json => to_json(&plan)?,
        };
        write_output(None, &report)
    }
}

/// One line per section, grouped by wave; sections without operations are
/// listed bare.
fn format_plan(plan: &Plan) -> String {
    let mut out = String::new();
    for (number, wave) in plan.waves.iter().enumerate() {
        let _ = writeln!(out, "wave {}:", number + 1);
        for planned in wave {
            let operations: Vec<String> =
                planned.operations.iter().map(ToString::to_string).collect();
            if operations.is_empty() {
                let _ = writeln!(out, "  {}", planned.section);
            } else {
                let _ = writeln!(out, "  {} {}", planned.section, operations.join(" "));
            }
        }
    }
    if !plan.unresolved.is_empty() {
        let _ = writeln!(out, "unresolved:");
        for name in &plan.unresolved {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}
