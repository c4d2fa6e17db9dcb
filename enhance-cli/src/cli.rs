//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompletionsCommand, PlanCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving section composition in INI files.
#[derive(Parser)]
#[command(name = "enhance")]
#[command(version, about = "Resolve section composition in INI files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Settings file (YAML)
    #[arg(long, value_name = "PATH", global = true, env = "ENHANCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject malformed directives instead of skipping the bad tokens
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a file and print the result
    Resolve(ResolveCommand),

    /// Report problems without producing output
    Check(CheckCommand),

    /// Show the order sections would be resolved in
    Plan(PlanCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
