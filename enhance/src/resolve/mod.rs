//! Section composition and resolution.
//!
//! A section may declare, through its directive options, that it inherits
//! missing options from other sections, overlays their options on its own,
//! or removes the keys they define. Resolution parses every directive,
//! orders sections so that sources are always resolved before the sections
//! that read them, applies the operations in place and strips the
//! directives.
//!
//! # Architecture
//!
//! 1. **Directives** ([`directive`]): tokenize each section's directive
//!    options into an ordered list of [`Operation`]s.
//! 2. **Scheduling** ([`schedule`]): link sections into a dependency graph
//!    and group them into waves.
//! 3. **Application** ([`apply`]): apply each wave's operations to the
//!    store.
//!
//! Configuration problems never fail the pass; they come back as
//! [`Diagnostics`] in the [`Resolution`].
//!
//! # Examples
//!
//! ```
//! use enhance::resolve::enhance;
//! use enhance::store::{ini, Store};
//!
//! let mut store = ini::parse(
//!     "[base]\nalpha = 1.0\nbeta = 2.0\n\n[derived]\n<<= <base\nbeta = 5.0\n",
//! )
//! .unwrap();
//!
//! let resolution = enhance(&mut store).unwrap();
//! assert!(resolution.is_complete());
//! assert_eq!(store.get_option("derived", "alpha").unwrap(), "1.0");
//! assert_eq!(store.get_option("derived", "beta").unwrap(), "5.0");
//! assert!(!store.has_option("derived", "<<"));
//! ```

pub mod apply;
pub mod diagnostics;
pub mod directive;
pub mod schedule;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use apply::{apply_operation, SectionEnhancer};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity, UnresolvedCause};
pub use directive::{
    parse_directive, read_directives, DirectiveIssue, Operation, Operator, ParsedDirective,
    SectionDirectives,
};
pub use schedule::{Plan, PlannedSection, Resolution, Scheduler};

use crate::config::Settings;
use crate::error::Result;
use crate::store::Store;

/// Runs resolution passes with fixed settings.
///
/// # Examples
///
/// ```
/// use enhance::config::Settings;
/// use enhance::resolve::Enhancer;
/// use enhance::store::{ini, Store};
///
/// let mut store = ini::parse("[a]\n<<= <b\n\n[b]\n<<= <a\n\n[c]\nk = v\n").unwrap();
///
/// let enhancer = Enhancer::new(Settings::default());
/// let plan = enhancer.plan(&store).unwrap();
/// assert_eq!(plan.unresolved, vec!["a", "b"]);
///
/// let resolution = enhancer.run(&mut store).unwrap();
/// assert_eq!(resolution.unresolved, vec!["a", "b"]);
/// assert!(resolution.is_resolved("c"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enhancer {
    settings: Settings,
}

impl Enhancer {
    /// Creates an enhancer.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The settings in use.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve `store` in place.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails an access the engine relies
    /// on; configuration problems are reported in the returned
    /// [`Resolution`].
    pub fn run<S: Store + ?Sized>(&self, store: &mut S) -> Result<Resolution> {
        let mut diagnostics = Diagnostics::new();
        let scheduler = Scheduler::build(&*store, &self.settings, &mut diagnostics)?;
        log::debug!("resolving {} section(s)", scheduler.len());

        let resolution = scheduler.run(store, diagnostics)?;
        log::debug!(
            "resolved in {} wave(s), {} section(s) unresolved",
            resolution.waves.len(),
            resolution.unresolved.len()
        );
        Ok(resolution)
    }

    /// Compute the application order without modifying `store`.
    ///
    /// # Errors
    ///
    /// Returns an error only on store access failure.
    pub fn plan<S: Store + ?Sized>(&self, store: &S) -> Result<Plan> {
        let mut diagnostics = Diagnostics::new();
        let scheduler = Scheduler::build(store, &self.settings, &mut diagnostics)?;
        Ok(scheduler.plan(diagnostics))
    }
}

/// Resolve `store` in place with default settings.
///
/// # Errors
///
/// See [`Enhancer::run`].
pub fn enhance<S: Store + ?Sized>(store: &mut S) -> Result<Resolution> {
    Enhancer::default().run(store)
}
