//! RDF triple store implementation
//!
//! This module provides an in-memory RDF store with efficient indexing.

use super::types::{RdfObject, RdfPredicate, RdfSubject, Triple, TriplePattern};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// RDF triple store with one index per triple position
///
/// Triples live in an insertion-ordered set, so duplicates collapse on
/// insert and iteration follows first-insertion order. The subject,
/// predicate and object indices map a term to the positions of the triples
/// that carry it; a pattern query scans the shortest candidate list.
#[derive(Clone, Debug, Default)]
pub struct RdfStore {
    /// All triples (primary storage)
    triples: IndexSet<Triple, FxBuildHasher>,

    /// Subject -> positions in `triples`
    by_subject: FxHashMap<RdfSubject, Vec<usize>>,

    /// Predicate -> positions in `triples`
    by_predicate: FxHashMap<RdfPredicate, Vec<usize>>,

    /// Object -> positions in `triples`
    by_object: FxHashMap<RdfObject, Vec<usize>>,
}

impl RdfStore {
    /// Create a new empty RDF store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple, returning `false` when it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.triples.contains(&triple) {
            return false;
        }
        let (pos, _) = self.triples.insert_full(triple.clone());

        self.by_subject.entry(triple.subject).or_default().push(pos);
        self.by_predicate.entry(triple.predicate).or_default().push(pos);
        self.by_object.entry(triple.object).or_default().push(pos);
        true
    }

    /// Insert every triple, returning how many were new
    pub fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> usize {
        triples.into_iter().map(|t| self.insert(t)).filter(|&new| new).count()
    }

    /// Check if a triple exists in the store
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Get the total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Query triples matching a pattern
    pub fn query(&self, pattern: &TriplePattern) -> Vec<&Triple> {
        let bound = [
            pattern.subject.as_ref().map(|s| self.by_subject.get(s)),
            pattern.predicate.as_ref().map(|p| self.by_predicate.get(p)),
            pattern.object.as_ref().map(|o| self.by_object.get(o)),
        ];
        let candidates = bound
            .into_iter()
            .flatten()
            .map(|positions| positions.map_or(&[][..], Vec::as_slice))
            .min_by_key(|positions| positions.len());

        match candidates {
            Some(positions) => positions
                .iter()
                .filter_map(|&pos| self.triples.get_index(pos))
                .filter(|t| pattern.matches(t))
                .collect(),
            None => self.triples.iter().collect(),
        }
    }

    /// Get triples with a specific subject
    pub fn triples_with_subject(&self, subject: &RdfSubject) -> Vec<&Triple> {
        self.query(&TriplePattern::new(Some(subject.clone()), None, None))
    }

    /// Subjects `s` such that `(s, predicate, object)` holds
    pub fn subjects_with(&self, predicate: &RdfPredicate, object: &RdfObject) -> Vec<&RdfSubject> {
        self.query(&TriplePattern::new(
            None,
            Some(predicate.clone()),
            Some(object.clone()),
        ))
        .into_iter()
        .map(|t| &t.subject)
        .collect()
    }

    /// Objects `o` such that `(subject, predicate, o)` holds
    pub fn objects_of(&self, subject: &RdfSubject, predicate: &RdfPredicate) -> Vec<&RdfObject> {
        self.query(&TriplePattern::new(
            Some(subject.clone()),
            Some(predicate.clone()),
            None,
        ))
        .into_iter()
        .map(|t| &t.object)
        .collect()
    }

    /// Distinct subjects in the store
    pub fn subjects(&self) -> impl Iterator<Item = &RdfSubject> {
        self.by_subject.keys()
    }
}

impl FromIterator<Triple> for RdfStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::types::{Literal, NamedNode};

    fn iri(s: &str) -> NamedNode {
        NamedNode::new(s).unwrap()
    }

    fn create_test_triple() -> Triple {
        Triple::new(
            iri("http://example.org/alice").into(),
            RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap(),
            Literal::new_simple_literal("Alice").into(),
        )
    }

    #[test]
    fn test_insert_and_contains() {
        let mut store = RdfStore::new();
        let triple = create_test_triple();

        assert!(store.insert(triple.clone()));
        assert_eq!(store.len(), 1);
        assert!(store.contains(&triple));
    }

    #[test]
    fn test_duplicate_insert_collapses() {
        let mut store = RdfStore::new();
        let triple = create_test_triple();

        assert!(store.insert(triple.clone()));
        assert!(!store.insert(triple));
        assert_eq!(store.len(), 1);
        assert_eq!(store.triples_with_subject(&iri("http://example.org/alice").into()).len(), 1);
    }

    #[test]
    fn test_query_by_subject() {
        let mut store = RdfStore::new();
        let subject = iri("http://example.org/alice");

        store.insert(Triple::new(
            subject.clone().into(),
            RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap(),
            Literal::new_simple_literal("Alice").into(),
        ));
        store.insert(Triple::new(
            subject.clone().into(),
            RdfPredicate::new("http://xmlns.com/foaf/0.1/age").unwrap(),
            Literal::new_simple_literal("30").into(),
        ));

        assert_eq!(store.triples_with_subject(&subject.into()).len(), 2);
        assert!(store.triples_with_subject(&iri("http://example.org/bob").into()).is_empty());
    }

    #[test]
    fn test_triple_pattern_query() {
        let mut store = RdfStore::new();
        let triple = create_test_triple();
        store.insert(triple.clone());

        assert_eq!(store.query(&TriplePattern::default()).len(), 1);

        let pattern = TriplePattern::new(Some(triple.subject.clone()), None, None);
        assert_eq!(store.query(&pattern).len(), 1);

        let pattern = TriplePattern::new(
            Some(triple.subject.clone()),
            Some(triple.predicate.clone()),
            Some(Literal::new_simple_literal("Bob").into()),
        );
        assert!(store.query(&pattern).is_empty());
    }

    #[test]
    fn test_subjects_with_and_objects_of() {
        let ty = RdfPredicate::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type").unwrap();
        let class: RdfObject = iri("http://www.w3.org/2002/07/owl#Class").into();

        let store: RdfStore = ["http://example.org/A", "http://example.org/B"]
            .iter()
            .map(|s| Triple::new(iri(s).into(), ty.clone(), class.clone()))
            .collect();

        assert_eq!(store.subjects_with(&ty, &class).len(), 2);
        let a: RdfSubject = iri("http://example.org/A").into();
        assert_eq!(store.objects_of(&a, &ty), vec![&class]);
        assert_eq!(store.subjects().count(), 2);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let p = RdfPredicate::new("http://example.org/p").unwrap();
        let mut store = RdfStore::new();
        for name in ["z", "a", "m"] {
            store.insert(Triple::new(
                iri(&format!("http://example.org/{name}")).into(),
                p.clone(),
                Literal::new_simple_literal(name).into(),
            ));
        }
        let order: Vec<String> = store.iter().map(|t| t.subject.to_string()).collect();
        assert_eq!(
            order,
            vec!["<http://example.org/z>", "<http://example.org/a>", "<http://example.org/m>"]
        );
    }
}
