//! Re-addressing a legacy term's triples onto its universal target

use super::resolver::Mapping;
use crate::rdf::vocab::{owl, rdf};
use crate::rdf::{NamedNode, RdfObject, RdfPredicate, RdfStore, RdfSubject, Triple};

/// Copies `(T, p, o)` from the legacy graph to `(T', p'', o'')`.
///
/// `p''` and `o''` are the mapped targets when `p` / `o` are themselves mapped
/// legacy IRIs; everything else, excluded legacy IRIs included, is copied
/// as-is. Equivalence triples are left to the deprecation stub.
pub struct TripleRewriter<'a> {
    legacy: &'a RdfStore,
    mapping: &'a Mapping,
    ontology_header: Triple,
}

impl<'a> TripleRewriter<'a> {
    /// `legacy_ontology` is the IRI of the legacy ontology document; its
    /// `owl:Ontology` typing triple is never copied.
    pub fn new(legacy: &'a RdfStore, mapping: &'a Mapping, legacy_ontology: NamedNode) -> Self {
        Self {
            legacy,
            mapping,
            ontology_header: Triple::new(
                legacy_ontology.into(),
                RdfPredicate::vocab(rdf::TYPE),
                RdfObject::vocab(owl::ONTOLOGY),
            ),
        }
    }

    pub fn rewrite(&self, term: &NamedNode, target: &NamedNode) -> Vec<Triple> {
        let subject = RdfSubject::from(term.clone());

        self.legacy
            .triples_with_subject(&subject)
            .into_iter()
            .filter(|t| !owl::EQUIVALENCES.contains(&t.predicate.as_str()))
            .filter(|t| **t != self.ontology_header)
            .map(|t| {
                Triple::new(
                    target.clone().into(),
                    self.rewrite_predicate(&t.predicate),
                    self.rewrite_object(&t.object),
                )
            })
            .collect()
    }

    fn rewrite_predicate(&self, predicate: &RdfPredicate) -> RdfPredicate {
        match self.mapping.get(predicate.as_named_node()) {
            Some(target) => target.clone().into(),
            None => predicate.clone(),
        }
    }

    fn rewrite_object(&self, object: &RdfObject) -> RdfObject {
        match object.as_named_node().and_then(|n| self.mapping.get(n)) {
            Some(target) => target.clone().into(),
            None => object.clone(),
        }
    }
}
