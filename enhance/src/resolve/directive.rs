//! Directive parsing.
//!
//! A section composes itself from other sections through two reserved
//! options. The extended directive (`<<` by default) holds a whitespace
//! separated token stream of operator/section pairs:
//!
//! ```ini
//! [dev]
//! <<= <common +overrides
//!     - unpinned
//! ```
//!
//! A token of exactly one character is an operator and takes the next
//! token as its section name; a longer token is an operator character
//! followed by the name. The simple directive (`<` by default) holds a
//! single section name to inherit from and always runs first.

use std::fmt;

use serde::Serialize;

use crate::config::Settings;
use crate::error::Result;
use crate::resolve::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::store::Store;

/// A composition operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `<`: copy options the target does not define yet.
    Inherit,
    /// `+`: copy every option, overwriting.
    Overlay,
    /// `-`: delete every key the source defines.
    Remove,
}

impl Operator {
    /// Map an operator character to its operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use enhance::resolve::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('+'), Some(Operator::Overlay));
    /// assert_eq!(Operator::from_symbol('*'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '<' => Some(Self::Inherit),
            '+' => Some(Self::Overlay),
            '-' => Some(Self::Remove),
            _ => None,
        }
    }

    /// The operator character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Inherit => '<',
            Self::Overlay => '+',
            Self::Remove => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One composition step: apply `operator` with `source` as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    /// What to do.
    pub operator: Operator,
    /// The section to read from.
    pub source: String,
}

impl Operation {
    /// Creates an operation.
    #[must_use]
    pub fn new(operator: Operator, source: impl Into<String>) -> Self {
        Self {
            operator,
            source: source.into(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.source)
    }
}

/// A problem found while tokenizing a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveIssue {
    /// The stream ended on an operator with no section name after it.
    DanglingOperator(String),
    /// A token started with a character that is not an operator.
    UnknownOperator {
        /// The offending character.
        operator: char,
        /// The section name paired with it.
        source: String,
    },
}

/// Result of tokenizing one extended directive value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDirective {
    /// Recognized operations, in directive order.
    pub operations: Vec<Operation>,
    /// Tokens that were dropped, in directive order.
    pub issues: Vec<DirectiveIssue>,
}

/// Tokenize an extended directive value.
///
/// # Examples
///
/// ```
/// use enhance::resolve::{parse_directive, Operation, Operator};
///
/// let parsed = parse_directive("<common + mixin\n-unpin");
/// assert_eq!(
///     parsed.operations,
///     vec![
///         Operation::new(Operator::Inherit, "common"),
///         Operation::new(Operator::Overlay, "mixin"),
///         Operation::new(Operator::Remove, "unpin"),
///     ]
/// );
/// assert!(parsed.issues.is_empty());
/// ```
#[must_use]
pub fn parse_directive(value: &str) -> ParsedDirective {
    let mut parsed = ParsedDirective::default();
    let mut tokens = value.split_whitespace();

    while let Some(token) = tokens.next() {
        let mut chars = token.chars();
        let Some(symbol) = chars.next() else {
            continue;
        };
        let rest = chars.as_str();

        let source = if rest.is_empty() {
            match tokens.next() {
                Some(name) => name,
                None => {
                    parsed
                        .issues
                        .push(DirectiveIssue::DanglingOperator(token.to_string()));
                    break;
                }
            }
        } else {
            rest
        };

        match Operator::from_symbol(symbol) {
            Some(operator) => parsed.operations.push(Operation::new(operator, source)),
            None => parsed.issues.push(DirectiveIssue::UnknownOperator {
                operator: symbol,
                source: source.to_string(),
            }),
        }
    }

    parsed
}

/// The directives read from one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDirectives {
    /// Operations to apply, simple directive first.
    pub operations: Vec<Operation>,
    /// The raw directive options as found, so they can be stripped or
    /// restored later.
    pub raw: Vec<(String, String)>,
    /// Whether the directive was rejected (strict mode only).
    pub rejected: bool,
}

/// Read a section's directives and report any problems.
///
/// The store is not modified; stripping the directive options is the
/// scheduler's job.
///
/// # Errors
///
/// Returns an error only if the store fails to return an option it just
/// reported as present.
pub fn read_directives<S: Store + ?Sized>(
    store: &S,
    section: &str,
    settings: &Settings,
    diagnostics: &mut Diagnostics,
) -> Result<SectionDirectives> {
    let mut directives = SectionDirectives::default();
    let severity = if settings.strict {
        Severity::Error
    } else {
        Severity::Warning
    };

    if store.has_option(section, &settings.simple_directive_key) {
        let value = store.get_option(section, &settings.simple_directive_key)?;
        let name = value.trim();
        if name.is_empty() {
            diagnostics.push(Diagnostic::malformed(
                section,
                format!("'{}' has no section name", settings.simple_directive_key),
                severity,
            ));
            directives.rejected |= settings.strict;
        } else {
            directives
                .operations
                .push(Operation::new(Operator::Inherit, name));
        }
        directives
            .raw
            .push((settings.simple_directive_key.clone(), value));
    }

    if store.has_option(section, &settings.directive_key) {
        let value = store.get_option(section, &settings.directive_key)?;
        let parsed = parse_directive(&value);
        for issue in parsed.issues {
            let diagnostic = match issue {
                DirectiveIssue::DanglingOperator(token) => Diagnostic::malformed(
                    section,
                    format!("operator '{token}' is not followed by a section name"),
                    severity,
                ),
                DirectiveIssue::UnknownOperator { operator, source } => {
                    Diagnostic::unknown_operator(section, operator, &source, severity)
                }
            };
            diagnostics.push(diagnostic);
            directives.rejected |= settings.strict;
        }
        directives.operations.extend(parsed.operations);
        directives.raw.push((settings.directive_key.clone(), value));
    }

    if directives.rejected {
        directives.operations.clear();
    }

    Ok(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SectionStore;

    fn ops(parsed: &ParsedDirective) -> Vec<String> {
        parsed.operations.iter().map(ToString::to_string).collect()
    }

    fn store_with(options: &[(&str, &str)]) -> SectionStore {
        let mut store = SectionStore::new();
        store.add_section("derived");
        for (key, value) in options {
            store.set_option("derived", key, value).unwrap();
        }
        store
    }

    #[test]
    fn test_compact_and_spaced_forms() {
        let parsed = parse_directive("<base + mixin -  removal");
        assert_eq!(ops(&parsed), vec!["<base", "+mixin", "-removal"]);
    }

    #[test]
    fn test_operator_takes_next_token_verbatim() {
        let parsed = parse_directive("+ -odd");
        assert_eq!(parsed.operations, vec![Operation::new(Operator::Overlay, "-odd")]);
    }

    #[test]
    fn test_empty_directive() {
        assert_eq!(parse_directive("  \n "), ParsedDirective::default());
    }

    #[test]
    fn test_dangling_operator_dropped() {
        let parsed = parse_directive("<base +");
        assert_eq!(ops(&parsed), vec!["<base"]);
        assert_eq!(
            parsed.issues,
            vec![DirectiveIssue::DanglingOperator("+".to_string())]
        );
    }

    #[test]
    fn test_unknown_operator_reported() {
        let parsed = parse_directive("*base <other");
        assert_eq!(ops(&parsed), vec!["<other"]);
        assert_eq!(
            parsed.issues,
            vec![DirectiveIssue::UnknownOperator {
                operator: '*',
                source: "base".to_string()
            }]
        );
    }

    #[test]
    fn test_multibyte_operator_character() {
        let parsed = parse_directive("«base");
        assert!(parsed.operations.is_empty());
        assert_eq!(parsed.issues.len(), 1);
    }

    #[test]
    fn test_simple_directive_runs_first() {
        let store = store_with(&[("<<", "+mixin"), ("<", "  base ")]);
        let mut diagnostics = Diagnostics::new();
        let directives =
            read_directives(&store, "derived", &Settings::default(), &mut diagnostics).unwrap();

        assert_eq!(
            directives.operations,
            vec![
                Operation::new(Operator::Inherit, "base"),
                Operation::new(Operator::Overlay, "mixin"),
            ]
        );
        assert_eq!(directives.raw.len(), 2);
        assert!(!directives.rejected);
        assert!(diagnostics.is_empty());
        // reading leaves the store alone
        assert!(store.has_option("derived", "<<"));
        assert!(store.has_option("derived", "<"));
    }

    #[test]
    fn test_no_directives() {
        let store = store_with(&[("alpha", "1")]);
        let mut diagnostics = Diagnostics::new();
        let directives =
            read_directives(&store, "derived", &Settings::default(), &mut diagnostics).unwrap();
        assert_eq!(directives, SectionDirectives::default());
    }

    #[test]
    fn test_lenient_mode_keeps_good_operations() {
        let store = store_with(&[("<<", "<base ?odd -")]);
        let mut diagnostics = Diagnostics::new();
        let directives =
            read_directives(&store, "derived", &Settings::default(), &mut diagnostics).unwrap();

        assert_eq!(directives.operations, vec![Operation::new(Operator::Inherit, "base")]);
        assert!(!directives.rejected);
        assert_eq!(diagnostics.len(), 2);
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn test_strict_mode_rejects_whole_directive() {
        let store = store_with(&[("<<", "<base +")]);
        let mut diagnostics = Diagnostics::new();
        let settings = Settings::default().with_strict(true);
        let directives = read_directives(&store, "derived", &settings, &mut diagnostics).unwrap();

        assert!(directives.rejected);
        assert!(directives.operations.is_empty());
        assert!(diagnostics.has_errors());
    }

    #[test]
    fn test_empty_simple_directive() {
        let store = store_with(&[("<", "")]);
        let mut diagnostics = Diagnostics::new();
        let directives =
            read_directives(&store, "derived", &Settings::default(), &mut diagnostics).unwrap();
        assert!(directives.operations.is_empty());
        assert_eq!(directives.raw, vec![("<".to_string(), String::new())]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_custom_keys() {
        let store = store_with(&[("extends", "<base"), ("<<", "+ignored")]);
        let settings = Settings {
            directive_key: "extends".to_string(),
            simple_directive_key: "parent".to_string(),
            ..Default::default()
        };
        let mut diagnostics = Diagnostics::new();
        let directives = read_directives(&store, "derived", &settings, &mut diagnostics).unwrap();
        assert_eq!(directives.operations, vec![Operation::new(Operator::Inherit, "base")]);
    }
}
