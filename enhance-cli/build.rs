//! Build script for enhance-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR. Build scripts cannot depend on the crate being built, so the
//! command structure is declared here a second time.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    let file = || {
        Arg::new("file")
            .value_name("FILE")
            .required(true)
            .help("INI file to read")
    };
    let report_format = || {
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .value_parser(["text", "json"])
            .default_value("text")
            .help("Output format")
    };

    Command::new("enhance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve section composition in INI files")
        .long_about(
            "Apply <<, < and related section composition directives in INI files, \
             in dependency order, and report sections that cannot be resolved",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file (YAML)")
                .value_name("PATH")
                .global(true)
                .env("ENHANCE_CONFIG"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject malformed directives instead of skipping the bad tokens")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a file and print the result")
                .arg(file())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .value_parser(["ini", "json", "yaml"])
                        .default_value("ini")
                        .help("Output format"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Write the result to PATH instead of stdout"),
                )
                .arg(
                    Arg::new("allow-unresolved")
                        .long("allow-unresolved")
                        .help("Exit successfully even if some sections could not be resolved")
                        .action(clap::ArgAction::SetTrue),
                ),
            Command::new("check")
                .about("Report problems without producing output")
                .arg(file())
                .arg(report_format()),
            Command::new("plan")
                .about("Show the order sections would be resolved in")
                .arg(file())
                .arg(report_format()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("enhance.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
