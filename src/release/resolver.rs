//! Target resolution: one universal IRI per absorbed legacy term

use super::config::NamespaceConfig;
use super::error::ReleaseResult;
use crate::rdf::NamedNode;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Legacy term → universal target, built once per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: BTreeMap<NamedNode, NamedNode>,
}

impl Mapping {
    /// Target of a mapped legacy IRI
    pub fn get(&self, legacy: &NamedNode) -> Option<&NamedNode> {
        self.entries.get(legacy)
    }

    /// Entries in legacy IRI order
    pub fn iter(&self) -> impl Iterator<Item = (&NamedNode, &NamedNode)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves legacy terms against explicit seeds, defaulting to the gaming
/// namespace.
pub struct TargetResolver<'a> {
    namespaces: &'a NamespaceConfig,
    seeds: &'a BTreeMap<NamedNode, NamedNode>,
    universal_locals: &'a HashSet<String>,
}

impl<'a> TargetResolver<'a> {
    /// `universal_locals` holds the local names already defined by the
    /// universal foundations. It is only reported on; a local name that
    /// already exists in the human-behavior namespace still resolves to the
    /// gaming namespace.
    pub fn new(
        namespaces: &'a NamespaceConfig,
        seeds: &'a BTreeMap<NamedNode, NamedNode>,
        universal_locals: &'a HashSet<String>,
    ) -> Self {
        Self {
            namespaces,
            seeds,
            universal_locals,
        }
    }

    /// Seeded target if there is one, otherwise gaming namespace + local name
    pub fn resolve(&self, term: &NamedNode) -> ReleaseResult<NamedNode> {
        if let Some(seeded) = self.seeds.get(term) {
            return Ok(seeded.clone());
        }

        let local = term.local_name();
        if self.universal_locals.contains(local) {
            debug!(
                "{} shares local name '{}' with an existing universal term; using gaming namespace",
                term, local
            );
        }
        Ok(NamedNode::in_namespace(&self.namespaces.gaming, local)?)
    }

    /// Map every term; total over its input
    pub fn resolve_all(&self, terms: &BTreeSet<NamedNode>) -> ReleaseResult<Mapping> {
        let mut entries = BTreeMap::new();
        for term in terms {
            let target = self.resolve(term)?;
            debug!("{} -> {}", term, target);
            entries.insert(term.clone(), target);
        }
        Ok(Mapping { entries })
    }
}
