//! Applying operations to a section.

use crate::error::Result;
use crate::resolve::directive::{Operation, Operator};
use crate::store::Store;

/// Apply one operation to `target`, reading the live content of its source.
///
/// # Errors
///
/// Returns an error if the source or target section is not in the store.
///
/// # Examples
///
/// ```
/// use enhance::resolve::{apply_operation, Operation, Operator};
/// use enhance::store::{SectionStore, Store};
///
/// let mut store = SectionStore::new();
/// store.add_section("base");
/// store.add_section("derived");
/// store.set_option("base", "alpha", "1.0").unwrap();
/// store.set_option("derived", "alpha", "9.0").unwrap();
///
/// apply_operation(&mut store, "derived", &Operation::new(Operator::Inherit, "base")).unwrap();
/// assert_eq!(store.get_option("derived", "alpha").unwrap(), "9.0");
///
/// apply_operation(&mut store, "derived", &Operation::new(Operator::Overlay, "base")).unwrap();
/// assert_eq!(store.get_option("derived", "alpha").unwrap(), "1.0");
/// ```
pub fn apply_operation<S: Store + ?Sized>(
    store: &mut S,
    target: &str,
    operation: &Operation,
) -> Result<()> {
    let source = store.options(&operation.source)?;
    match operation.operator {
        Operator::Inherit => {
            for (key, value) in source {
                if !store.has_option(target, &key) {
                    store.set_option(target, &key, &value)?;
                }
            }
        }
        Operator::Overlay => {
            for (key, value) in source {
                store.set_option(target, &key, &value)?;
            }
        }
        Operator::Remove => {
            for (key, _) in source {
                store.remove_option(target, &key)?;
            }
        }
    }
    Ok(())
}

/// The pending operations of one section.
///
/// Operations are drained when applied; an enhancer with no operations
/// left is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEnhancer {
    section: String,
    operations: Vec<Operation>,
}

impl SectionEnhancer {
    /// Creates an enhancer for `section`.
    #[must_use]
    pub fn new(section: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            section: section.into(),
            operations,
        }
    }

    /// The section this enhancer writes to.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Operations not yet applied.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Whether every operation has been applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.operations.is_empty()
    }

    /// Apply all pending operations in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a store access fails. Operations applied before
    /// the failure stay applied.
    pub fn apply<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        for operation in std::mem::take(&mut self.operations) {
            log::debug!("applying {operation} to section '{}'", self.section);
            apply_operation(store, &self.section, &operation)?;
        }
        Ok(())
    }
}
