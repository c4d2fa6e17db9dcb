//! Common test utilities for integration tests.
//!
//! Fixture files live in `tests/fixtures/` and are small INI files that
//! exercise one composition feature each.

use std::collections::BTreeMap;
use std::path::PathBuf;

use enhance::store::ini;
use enhance::{Resolution, SectionStore, Store};

/// Path to a fixture file.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture file into a store.
///
/// # Panics
///
/// Panics if the fixture is missing or does not parse.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> SectionStore {
    ini::load(&fixture_path(name)).expect("fixture should parse")
}

/// Load a fixture and resolve it with default settings.
#[allow(dead_code)]
pub fn resolve_fixture(name: &str) -> (SectionStore, Resolution) {
    let mut store = load_fixture(name);
    let resolution = enhance::enhance(&mut store).expect("resolution should not fail");
    (store, resolution)
}

/// A section's options as a sorted map.
#[allow(dead_code)]
pub fn section_map(store: &SectionStore, section: &str) -> BTreeMap<String, String> {
    store
        .options(section)
        .expect("section should exist")
        .into_iter()
        .collect()
}

/// Build the expected option map for a section.
#[allow(dead_code)]
pub fn expected(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
