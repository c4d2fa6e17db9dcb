//! Dependency scheduling.
//!
//! Every section becomes a node in an index-based graph. A node requires
//! the nodes of the sections its directive reads from, and is required by
//! the nodes that read from it. Nodes are applied in waves: a wave holds
//! every node whose requirements were all applied in earlier waves, so a
//! section's operations always see fully resolved sources. Nodes that
//! never join a wave (cycles, missing sources and everything downstream of
//! them) are reported unresolved.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::config::Settings;
use crate::error::Result;
use crate::resolve::apply::SectionEnhancer;
use crate::resolve::diagnostics::{Diagnostic, Diagnostics, UnresolvedCause};
use crate::resolve::directive::{read_directives, Operation};
use crate::store::Store;

/// Why a node can never be applied, independent of its requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    MissingSource,
    InvalidDirective,
}

#[derive(Debug)]
struct Node {
    enhancer: SectionEnhancer,
    raw_directives: Vec<(String, String)>,
    requires: BTreeSet<usize>,
    required_by: BTreeSet<usize>,
    failure: Option<Failure>,
}

impl Node {
    fn section(&self) -> &str {
        self.enhancer.section()
    }
}

/// One section in a wave, with the operations it will apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSection {
    /// The section name.
    pub section: String,
    /// Its operations, in application order.
    pub operations: Vec<Operation>,
}

/// The application order the scheduler would use, without applying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Waves in application order; sections within a wave are independent.
    pub waves: Vec<Vec<PlannedSection>>,
    /// Sections that would be left unresolved, in store order.
    pub unresolved: Vec<String>,
    /// Problems found while building the graph.
    pub diagnostics: Diagnostics,
}

/// The outcome of a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Section names of each applied wave, in application order.
    pub waves: Vec<Vec<String>>,
    /// Sections that could not be resolved, in store order.
    pub unresolved: Vec<String>,
    /// Everything that went wrong or was ignored.
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// Whether every section resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Resolved sections in application order.
    pub fn resolved(&self) -> impl Iterator<Item = &str> {
        self.waves.iter().flatten().map(String::as_str)
    }

    /// Whether `section` resolved.
    #[must_use]
    pub fn is_resolved(&self, section: &str) -> bool {
        self.resolved().any(|name| name == section)
    }
}

/// The dependency graph over all sections of a store.
#[derive(Debug)]
pub struct Scheduler {
    nodes: Vec<Node>,
    strip_unresolved: bool,
}

impl Scheduler {
    /// Read every section's directives and link the graph.
    ///
    /// The store is only read. Missing sources and directive problems are
    /// recorded in `diagnostics`.
    ///
    /// # Errors
    ///
    /// Returns an error only on store access failure.
    pub fn build<S: Store + ?Sized>(
        store: &S,
        settings: &Settings,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self> {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();

        for section in store.sections() {
            let directives = read_directives(store, &section, settings, diagnostics)?;
            index.insert(section.clone(), nodes.len());
            nodes.push(Node {
                enhancer: SectionEnhancer::new(section, directives.operations),
                raw_directives: directives.raw,
                requires: BTreeSet::new(),
                required_by: BTreeSet::new(),
                failure: directives.rejected.then_some(Failure::InvalidDirective),
            });
        }

        for id in 0..nodes.len() {
            // one edge or one missing-source report per distinct source
            let sources: BTreeSet<String> = nodes[id]
                .enhancer
                .operations()
                .iter()
                .map(|operation| operation.source.clone())
                .collect();

            for source in sources {
                match index.get(&source) {
                    Some(&required) => {
                        nodes[id].requires.insert(required);
                        nodes[required].required_by.insert(id);
                    }
                    None => {
                        diagnostics.push(Diagnostic::missing_source(nodes[id].section(), &source));
                        nodes[id].failure.get_or_insert(Failure::MissingSource);
                    }
                }
            }
        }

        Ok(Self {
            nodes,
            strip_unresolved: settings.strip_unresolved_directives,
        })
    }

    /// Number of sections in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Group nodes into waves.
    ///
    /// Each node carries a count of requirements not yet applied. The first
    /// wave is every node with a zero count; applying a wave decrements
    /// the counts of its dependents, and those reaching zero form the next
    /// wave. Failed nodes never join a wave, so neither do their
    /// dependents.
    fn waves(&self) -> (Vec<Vec<usize>>, Vec<bool>) {
        let mut outstanding: Vec<usize> = self.nodes.iter().map(|n| n.requires.len()).collect();
        let mut applied = vec![false; self.nodes.len()];
        let eligible = |id: usize, outstanding: &[usize]| {
            outstanding[id] == 0 && self.nodes[id].failure.is_none()
        };

        let mut waves = Vec::new();
        let mut frontier: Vec<usize> = (0..self.nodes.len())
            .filter(|&id| eligible(id, &outstanding))
            .collect();

        while !frontier.is_empty() {
            let mut next = BTreeSet::new();
            for &id in &frontier {
                applied[id] = true;
                for &dependent in &self.nodes[id].required_by {
                    outstanding[dependent] -= 1;
                    if eligible(dependent, &outstanding) {
                        next.insert(dependent);
                    }
                }
            }
            waves.push(std::mem::take(&mut frontier));
            frontier = next.into_iter().collect();
        }

        (waves, applied)
    }

    /// Explain why an unapplied node was left behind.
    fn cause(&self, id: usize, applied: &[bool]) -> UnresolvedCause {
        match self.nodes[id].failure {
            Some(Failure::MissingSource) => return UnresolvedCause::MissingSource,
            Some(Failure::InvalidDirective) => return UnresolvedCause::InvalidDirective,
            None => {}
        }

        let mut seen = BTreeSet::from([id]);
        let mut stack = vec![id];
        let mut failed = BTreeSet::new();
        while let Some(current) = stack.pop() {
            for &required in &self.nodes[current].requires {
                if applied[required] || !seen.insert(required) {
                    continue;
                }
                if self.nodes[required].failure.is_some() {
                    failed.insert(required);
                } else {
                    stack.push(required);
                }
            }
        }

        if failed.is_empty() {
            UnresolvedCause::Cycle
        } else {
            UnresolvedCause::Blocked {
                by: failed
                    .into_iter()
                    .map(|f| self.nodes[f].section().to_string())
                    .collect(),
            }
        }
    }

    fn unresolved(&self, applied: &[bool], diagnostics: &mut Diagnostics) -> Vec<usize> {
        let ids: Vec<usize> = (0..self.nodes.len()).filter(|&id| !applied[id]).collect();
        for &id in &ids {
            let cause = self.cause(id, applied);
            diagnostics.push(Diagnostic::unresolved(self.nodes[id].section(), cause));
        }
        ids
    }

    /// Compute the waves and unresolved sections without touching a store.
    #[must_use]
    pub fn plan(&self, mut diagnostics: Diagnostics) -> Plan {
        let (waves, applied) = self.waves();
        let unresolved = self.unresolved(&applied, &mut diagnostics);

        Plan {
            waves: waves
                .into_iter()
                .map(|wave| {
                    wave.into_iter()
                        .map(|id| PlannedSection {
                            section: self.nodes[id].section().to_string(),
                            operations: self.nodes[id].enhancer.operations().to_vec(),
                        })
                        .collect()
                })
                .collect(),
            unresolved: unresolved
                .into_iter()
                .map(|id| self.nodes[id].section().to_string())
                .collect(),
            diagnostics,
        }
    }

    /// Strip directives and apply every resolvable section, wave by wave.
    ///
    /// # Errors
    ///
    /// Returns an error only on store access failure; the store may then be
    /// partially resolved.
    pub fn run<S: Store + ?Sized>(
        mut self,
        store: &mut S,
        mut diagnostics: Diagnostics,
    ) -> Result<Resolution> {
        for node in &self.nodes {
            for (key, _) in &node.raw_directives {
                store.remove_option(node.section(), key)?;
            }
        }

        let (waves, applied) = self.waves();
        let mut resolved = Vec::with_capacity(waves.len());
        for (number, wave) in waves.into_iter().enumerate() {
            log::debug!("wave {}: {} section(s)", number + 1, wave.len());
            let mut names = Vec::with_capacity(wave.len());
            for id in wave {
                let node = &mut self.nodes[id];
                node.enhancer.apply(store)?;
                debug_assert!(node.enhancer.is_complete());
                names.push(node.section().to_string());
            }
            resolved.push(names);
        }

        let unresolved = self.unresolved(&applied, &mut diagnostics);
        if !self.strip_unresolved {
            for &id in &unresolved {
                let node = &self.nodes[id];
                for (key, value) in &node.raw_directives {
                    store.set_option(node.section(), key, value)?;
                }
            }
        }

        Ok(Resolution {
            waves: resolved,
            unresolved: unresolved
                .into_iter()
                .map(|id| self.nodes[id].section().to_string())
                .collect(),
            diagnostics,
        })
    }
}
