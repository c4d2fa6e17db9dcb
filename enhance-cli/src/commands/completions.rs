//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name as declared in Cargo.toml
const BIN_NAME: &str = "enhance";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("# Save it with:");
                eprintln!(
                    "#   enhance completions bash > ~/.local/share/bash-completion/completions/enhance"
                );
            }
            Shell::Zsh => {
                eprintln!("# Save it somewhere in your $fpath:");
                eprintln!("#   enhance completions zsh > ~/.zsh/completions/_enhance");
            }
            Shell::Fish => {
                eprintln!("# Save it with:");
                eprintln!("#   enhance completions fish > ~/.config/fish/completions/enhance.fish");
            }
            Shell::PowerShell => {
                eprintln!("# Load it with:");
                eprintln!("#   enhance completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
