//! Legacy term collection

use super::config::NamespaceConfig;
use crate::rdf::vocab::{owl, rdf};
use crate::rdf::{NamedNode, RdfObject, RdfPredicate, RdfStore};
use std::collections::BTreeSet;

/// Legacy ontology terms found in a graph, in IRI order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCollection {
    /// Terms that go through the release pipeline
    pub absorbed: BTreeSet<NamedNode>,
    /// Test-ish terms dropped entirely
    pub excluded: BTreeSet<NamedNode>,
}

impl TermCollection {
    /// Every qualifying term, excluded ones included
    pub fn total(&self) -> usize {
        self.absorbed.len() + self.excluded.len()
    }
}

/// Finds legacy-namespace subjects typed as Class, ObjectProperty,
/// DatatypeProperty or AnnotationProperty.
pub struct TermCollector<'a> {
    namespaces: &'a NamespaceConfig,
}

impl<'a> TermCollector<'a> {
    pub fn new(namespaces: &'a NamespaceConfig) -> Self {
        Self { namespaces }
    }

    pub fn collect(&self, legacy: &RdfStore) -> TermCollection {
        let rdf_type = RdfPredicate::vocab(rdf::TYPE);
        let mut collection = TermCollection::default();

        for kind in owl::TERM_KINDS {
            let subjects = legacy.subjects_with(&rdf_type, &RdfObject::vocab(kind));
            for term in subjects.into_iter().filter_map(|s| s.as_named_node()) {
                if !self.namespaces.is_legacy(term) {
                    continue;
                }
                if is_testish(term.local_name()) {
                    collection.excluded.insert(term.clone());
                } else {
                    collection.absorbed.insert(term.clone());
                }
            }
        }

        collection
    }
}

/// Local names that mention "test" anywhere, case-insensitively
pub fn is_testish(local: &str) -> bool {
    let lower = local.to_lowercase();
    lower.starts_with("test") || lower.contains("test")
}
