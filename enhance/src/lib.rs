#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # enhance
//!
//! Section composition for INI-style configuration.
//!
//! A section can extend, overlay or subtract other sections through a
//! directive option:
//!
//! ```ini
//! [common]
//! alpha = 1.0
//!
//! [dev]
//! <<= <common +dev_overrides -unpinned
//! ```
//!
//! - `<name` copies options from `name` that the section does not define
//! - `+name` copies every option from `name`, overwriting
//! - `-name` deletes every key that `name` defines
//!
//! A single `<= name` line is shorthand for inheriting from `name` first.
//! Resolution applies these operations in dependency order, so chains of
//! any depth see fully resolved sources, and reports cycles and references
//! to missing sections without aborting.
//!
//! ## Core Types
//!
//! - [`Store`] and [`SectionStore`]: the key/value store the engine mutates
//! - [`Enhancer`] and [`enhance`]: the resolution entry points
//! - [`Resolution`] and [`Diagnostics`]: what a pass reports back
//! - [`Settings`] and [`ConfigBuilder`]: engine configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use enhance::store::ini;
//! use enhance::{enhance, Store};
//!
//! let mut store = ini::parse(
//!     "[remove]\nalpha = 1.0\nbeta = 2.0\n\n[derived]\n<<= -remove\nbeta = 5.0\ngamma = 6.0\n",
//! )
//! .unwrap();
//!
//! enhance(&mut store).unwrap();
//! assert_eq!(store.options("derived").unwrap(), vec![("gamma".to_string(), "6.0".to_string())]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, Settings};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use resolve::{
    enhance, Diagnostic, Diagnostics, Enhancer, Operation, Operator, Plan, Resolution, Severity,
};
pub use store::{SectionStore, Store};
