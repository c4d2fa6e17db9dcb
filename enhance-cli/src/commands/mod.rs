//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a file and write the result
//! - `check`: Resolve in memory and report problems
//! - `plan`: Show the wave order without applying it
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod plan;
pub mod resolve;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use plan::PlanCommand;
pub use resolve::ResolveCommand;
