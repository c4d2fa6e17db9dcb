//! Configuration diagnostics collected during resolution.
//!
//! Problems in the configuration never abort a resolution pass. Each one is
//! recorded as a [`Diagnostic`] in a [`Diagnostics`] collector that the
//! caller gets back, and is logged through the `log` facade as it is
//! recorded.

use std::fmt;

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The section still resolved; something was ignored.
    Warning,
    /// The section did not resolve.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Why a section was left unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum UnresolvedCause {
    /// The section references a section that does not exist.
    MissingSource,
    /// The section's directive was rejected in strict mode.
    InvalidDirective,
    /// The section depends, directly or transitively, on sections that
    /// failed for one of the reasons above.
    Blocked {
        /// The failed sections it depends on, in store order.
        by: Vec<String>,
    },
    /// The section is part of, or depends on, a dependency cycle.
    Cycle,
}

impl fmt::Display for UnresolvedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource => write!(f, "it references a missing section"),
            Self::InvalidDirective => write!(f, "its directive is invalid"),
            Self::Blocked { by } => {
                let names: Vec<String> = by.iter().map(|name| format!("'{name}'")).collect();
                write!(f, "it depends on unresolvable {}", names.join(", "))
            }
            Self::Cycle => write!(f, "dependency cycle"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A directive names a section that is not in the store.
    MissingSource {
        /// The missing section name.
        source: String,
    },
    /// A directive could not be fully parsed.
    MalformedDirective {
        /// What was wrong with it.
        detail: String,
    },
    /// A directive token starts with a character that is not an operator.
    UnknownOperator {
        /// The unrecognized operator character.
        operator: char,
        /// The section name that followed it.
        source: String,
    },
    /// The section never became eligible for resolution.
    Unresolved {
        /// Why it never became eligible.
        #[serde(flatten)]
        cause: UnresolvedCause,
    },
}

/// One configuration problem, attributed to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The section the problem belongs to.
    pub section: String,
    /// How serious it is.
    pub severity: Severity,
    /// What went wrong.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// `section` references `source`, which does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use enhance::resolve::{Diagnostic, Severity};
    ///
    /// let d = Diagnostic::missing_source("derived", "base");
    /// assert_eq!(d.severity(), Severity::Error);
    /// assert_eq!(
    ///     d.to_string(),
    ///     "section 'derived' requires 'base', but 'base' does not exist"
    /// );
    /// ```
    #[must_use]
    pub fn missing_source(section: &str, source: &str) -> Self {
        Self {
            section: section.to_string(),
            severity: Severity::Error,
            kind: DiagnosticKind::MissingSource {
                source: source.to_string(),
            },
        }
    }

    /// A directive of `section` could not be fully parsed.
    #[must_use]
    pub fn malformed(section: &str, detail: impl Into<String>, severity: Severity) -> Self {
        Self {
            section: section.to_string(),
            severity,
            kind: DiagnosticKind::MalformedDirective {
                detail: detail.into(),
            },
        }
    }

    /// A directive of `section` used an unrecognized operator.
    #[must_use]
    pub fn unknown_operator(section: &str, operator: char, source: &str, severity: Severity) -> Self {
        Self {
            section: section.to_string(),
            severity,
            kind: DiagnosticKind::UnknownOperator {
                operator,
                source: source.to_string(),
            },
        }
    }

    /// `section` was left unresolved.
    #[must_use]
    pub fn unresolved(section: &str, cause: UnresolvedCause) -> Self {
        Self {
            section: section.to_string(),
            severity: Severity::Error,
            kind: DiagnosticKind::Unresolved { cause },
        }
    }

    /// How serious this diagnostic is.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = &self.section;
        match &self.kind {
            DiagnosticKind::MissingSource { source } => write!(
                f,
                "section '{section}' requires '{source}', but '{source}' does not exist"
            ),
            DiagnosticKind::MalformedDirective { detail } => {
                write!(f, "section '{section}' has a malformed directive: {detail}")
            }
            DiagnosticKind::UnknownOperator { operator, source } => write!(
                f,
                "section '{section}' uses unknown operator '{operator}' (before '{source}')"
            ),
            DiagnosticKind::Unresolved { cause } => {
                write!(f, "section '{section}' could not be resolved: {cause}")
            }
        }
    }
}

/// Append-only collector of diagnostics.
///
/// # Examples
///
/// ```
/// use enhance::resolve::{Diagnostic, Diagnostics};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.push(Diagnostic::missing_source("derived", "base"));
/// assert!(diagnostics.has_errors());
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => log::error!("{diagnostic}"),
            Severity::Warning => log::warn!("{diagnostic}"),
        }
        self.records.push(diagnostic);
    }

    /// Iterate diagnostics in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.records.iter()
    }

    /// Diagnostics attributed to `section`.
    pub fn for_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.records.iter().filter(move |d| d.section == section)
    }

    /// Number of diagnostics recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any error-severity diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.records.iter().any(|d| d.severity == Severity::Error)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
