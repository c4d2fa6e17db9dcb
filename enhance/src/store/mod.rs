//! Sectioned key/value storage.
//!
//! The resolution engine only talks to configuration through the [`Store`]
//! trait, so any INI-like container can be enhanced in place. This module
//! also provides [`SectionStore`], an insertion-ordered in-memory
//! implementation, and the [`ini`] reader/writer for it.
//!
//! # Examples
//!
//! ```
//! use enhance::store::{SectionStore, Store};
//!
//! let mut store = SectionStore::new();
//! store.add_section("base");
//! store.set_option("base", "alpha", "1.0").unwrap();
//!
//! assert!(store.has_option("base", "alpha"));
//! assert_eq!(store.get_option("base", "alpha").unwrap(), "1.0");
//! ```

pub mod ini;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Access to a sectioned key/value configuration.
///
/// Sections are never created or deleted through this trait; only options
/// within existing sections change.
pub trait Store {
    /// Names of all sections, in store order.
    fn sections(&self) -> Vec<String>;

    /// Whether `section` exists and defines `key`.
    fn has_option(&self, section: &str, key: &str) -> bool;

    /// Read one option.
    ///
    /// # Errors
    ///
    /// Returns `SectionNotFound` or `OptionNotFound` if absent.
    fn get_option(&self, section: &str, key: &str) -> Result<String>;

    /// Create or overwrite one option.
    ///
    /// # Errors
    ///
    /// Returns `SectionNotFound` if the section does not exist.
    fn set_option(&mut self, section: &str, key: &str, value: &str) -> Result<()>;

    /// Remove one option. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SectionNotFound` if the section does not exist.
    fn remove_option(&mut self, section: &str, key: &str) -> Result<()>;

    /// Snapshot of a section's options, in section order.
    ///
    /// # Errors
    ///
    /// Returns `SectionNotFound` if the section does not exist.
    fn options(&self, section: &str) -> Result<Vec<(String, String)>>;
}

/// Options of one section, in insertion order.
pub type Section = IndexMap<String, String>;

/// In-memory store preserving section and option insertion order.
///
/// Serializes as a map of section name to option map, which is the shape
/// used for JSON and YAML output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionStore {
    sections: IndexMap<String, Section>,
}

impl SectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section if it does not exist yet. Returns `true` if added.
    pub fn add_section(&mut self, name: &str) -> bool {
        if self.sections.contains_key(name) {
            return false;
        }
        self.sections.insert(name.to_string(), Section::new());
        true
    }

    /// Whether the store contains `name`.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Borrow a section's options.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterate sections in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the store has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Section> {
        self.sections
            .get_mut(name)
            .ok_or_else(|| Error::SectionNotFound {
                section: name.to_string(),
            })
    }
}

impl Store for SectionStore {
    fn sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    fn has_option(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|options| options.contains_key(key))
    }

    fn get_option(&self, section: &str, key: &str) -> Result<String> {
        let options = self
            .sections
            .get(section)
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
            })?;
        options
            .get(key)
            .cloned()
            .ok_or_else(|| Error::OptionNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    fn set_option(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.section_mut(section)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_option(&mut self, section: &str, key: &str) -> Result<()> {
        // shift_remove keeps the remaining options in order
        self.section_mut(section)?.shift_remove(key);
        Ok(())
    }

    fn options(&self, section: &str) -> Result<Vec<(String, String)>> {
        self.sections
            .get(section)
            .map(|options| {
                options
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
            })
    }
}
