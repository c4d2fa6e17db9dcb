//! Property-based tests for operation application and scheduling.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::{apply_operation, enhance, Operation, Operator};
use crate::store::{SectionStore, Store};

fn options_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-f]", "[0-9]{1,2}", 0..6)
}

fn two_sections(
    source: &BTreeMap<String, String>,
    target: &BTreeMap<String, String>,
) -> SectionStore {
    let mut store = SectionStore::new();
    for (name, options) in [("source", source), ("target", target)] {
        store.add_section(name);
        for (key, value) in options {
            store.set_option(name, key, value).unwrap();
        }
    }
    store
}

fn snapshot(store: &SectionStore, section: &str) -> BTreeMap<String, String> {
    store.options(section).unwrap().into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Inheriting twice from the same source changes nothing the second time
    #[test]
    fn inherit_is_idempotent(source in options_strategy(), target in options_strategy()) {
        let mut store = two_sections(&source, &target);
        let op = Operation::new(Operator::Inherit, "source");

        apply_operation(&mut store, "target", &op).unwrap();
        let once = snapshot(&store, "target");
        apply_operation(&mut store, "target", &op).unwrap();
        prop_assert_eq!(snapshot(&store, "target"), once.clone());

        for (key, value) in &target {
            prop_assert_eq!(once.get(key), Some(value));
        }
    }

    // Overlay copies every source value and never shrinks the target
    #[test]
    fn overlay_takes_source_values(source in options_strategy(), target in options_strategy()) {
        let mut store = two_sections(&source, &target);
        apply_operation(&mut store, "target", &Operation::new(Operator::Overlay, "source")).unwrap();
        let result = snapshot(&store, "target");

        for (key, value) in &source {
            prop_assert_eq!(result.get(key), Some(value));
        }
        for key in target.keys() {
            prop_assert!(result.contains_key(key));
        }
    }

    // Removal depends on key names only
    #[test]
    fn remove_ignores_source_values(source in options_strategy(), target in options_strategy()) {
        let mut store = two_sections(&source, &target);
        apply_operation(&mut store, "target", &Operation::new(Operator::Remove, "source")).unwrap();
        let result = snapshot(&store, "target");

        let expected: BTreeMap<String, String> = target
            .into_iter()
            .filter(|(key, _)| !source.contains_key(key))
            .collect();
        prop_assert_eq!(result, expected);
    }

    // A value defined only at the root of an inherit chain reaches every link,
    // whatever order the sections appear in
    #[test]
    fn chain_inheritance_is_transitive(
        order in Just((0..6usize).collect::<Vec<_>>()).prop_shuffle(),
        value in "[a-z]{1,8}",
    ) {
        let mut store = SectionStore::new();
        for &link in &order {
            let name = format!("s{link}");
            store.add_section(&name);
            if link == 0 {
                store.set_option(&name, "root", &value).unwrap();
            } else {
                store.set_option(&name, "<<", &format!("<s{}", link - 1)).unwrap();
            }
        }

        let resolution = enhance(&mut store).unwrap();
        prop_assert!(resolution.is_complete());
        prop_assert_eq!(resolution.waves.len(), 6);
        for link in 0..6 {
            prop_assert_eq!(store.get_option(&format!("s{link}"), "root").unwrap(), value.clone());
        }
    }

    // Arbitrary directive graphs: every section ends up either resolved or
    // unresolved, never both, and no directive survives
    #[test]
    fn every_section_is_accounted_for(
        edges in prop::collection::vec(prop::collection::vec((0..3usize, 0..8usize), 0..3), 1..7),
    ) {
        let mut store = SectionStore::new();
        let count = edges.len();
        for (id, refs) in edges.iter().enumerate() {
            let name = format!("s{id}");
            store.add_section(&name);
            store.set_option(&name, &format!("own{id}"), "x").unwrap();
            if !refs.is_empty() {
                let directive: Vec<String> = refs
                    .iter()
                    .map(|&(op, target)| format!("{}s{target}", ['<', '+', '-'][op]))
                    .collect();
                store.set_option(&name, "<<", &directive.join(" ")).unwrap();
            }
        }

        let resolution = enhance(&mut store).unwrap();
        let resolved: Vec<&str> = resolution.resolved().collect();
        prop_assert_eq!(resolved.len() + resolution.unresolved.len(), count);
        for name in &resolution.unresolved {
            prop_assert!(!resolved.contains(&name.as_str()));
        }
        for name in store.sections() {
            prop_assert!(!store.has_option(&name, "<<"));
            prop_assert!(!store.has_option(&name, "<"));
        }
    }

    // A ring of sections never resolves; sections outside it still do
    #[test]
    fn cycles_are_isolated(ring in 1..5usize, free in 0..4usize) {
        let mut store = SectionStore::new();
        for id in 0..ring {
            let name = format!("ring{id}");
            store.add_section(&name);
            store.set_option(&name, "<<", &format!("<ring{}", (id + 1) % ring)).unwrap();
        }
        store.add_section("base");
        store.set_option("base", "k", "v").unwrap();
        for id in 0..free {
            let name = format!("free{id}");
            store.add_section(&name);
            store.set_option(&name, "<", "base").unwrap();
        }

        let resolution = enhance(&mut store).unwrap();
        prop_assert_eq!(resolution.unresolved.len(), ring);
        for id in 0..free {
            prop_assert_eq!(store.get_option(&format!("free{id}"), "k").unwrap(), "v");
        }
    }
}
