//! Deprecation stubs that keep legacy IRIs resolvable

use super::error::ReleaseResult;
use crate::rdf::vocab::{owl, rdf, rdfs};
use crate::rdf::{Literal, NamedNode, RdfObject, RdfPredicate, RdfStore, RdfSubject, Triple};

/// Emits the backward-compatible stub for a legacy term `T` absorbed as `T'`:
///
/// - every `(T, rdf:type, X)` from the legacy graph, unchanged
/// - `(T, owl:deprecated, true)`
/// - `(T, rdfs:comment, "DEPRECATED legacy IRI. Use '<T'>' instead."@en)`
/// - `(T, owl:equivalentClass, T')` when `(T, rdf:type, owl:Class)` holds,
///   otherwise `(T, owl:equivalentProperty, T')`
pub struct DeprecationStubGenerator<'a> {
    legacy: &'a RdfStore,
}

impl<'a> DeprecationStubGenerator<'a> {
    pub fn new(legacy: &'a RdfStore) -> Self {
        Self { legacy }
    }

    pub fn stub(&self, term: &NamedNode, target: &NamedNode) -> ReleaseResult<Vec<Triple>> {
        let subject = RdfSubject::from(term.clone());
        let rdf_type = RdfPredicate::vocab(rdf::TYPE);

        let mut triples: Vec<Triple> = self
            .legacy
            .objects_of(&subject, &rdf_type)
            .into_iter()
            .map(|kind| Triple::new(subject.clone(), rdf_type.clone(), kind.clone()))
            .collect();

        triples.push(Triple::new(
            subject.clone(),
            RdfPredicate::vocab(owl::DEPRECATED),
            Literal::boolean(true).into(),
        ));

        let comment = Literal::new_language_tagged_literal(
            format!("DEPRECATED legacy IRI. Use '{}' instead.", target.as_str()),
            "en",
        )?;
        triples.push(Triple::new(
            subject.clone(),
            RdfPredicate::vocab(rdfs::COMMENT),
            comment.into(),
        ));

        let equivalence = if self.is_class(&subject) {
            owl::EQUIVALENT_CLASS
        } else {
            owl::EQUIVALENT_PROPERTY
        };
        triples.push(Triple::new(
            subject,
            RdfPredicate::vocab(equivalence),
            target.clone().into(),
        ));

        Ok(triples)
    }

    /// Only a direct `owl:Class` typing counts; every other term is a property
    fn is_class(&self, subject: &RdfSubject) -> bool {
        self.legacy.contains(&Triple::new(
            subject.clone(),
            RdfPredicate::vocab(rdf::TYPE),
            RdfObject::vocab(owl::CLASS),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{RdfFormat, RdfParser};

    const LEGACY: &str = r#"
@prefix core: <http://ontology.gaming.network/core#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

core:SessionEvent a owl:Class .
core:PlayerScore a owl:DatatypeProperty, owl:FunctionalProperty .
core:hasSession a owl:ObjectProperty .
core:note a owl:AnnotationProperty .
"#;

    fn iri(s: &str) -> NamedNode {
        NamedNode::new(s).unwrap()
    }

    fn stub_for(local: &str, target: &str) -> Vec<Triple> {
        let legacy = RdfParser::new().parse(LEGACY, RdfFormat::Turtle).unwrap();
        DeprecationStubGenerator::new(&legacy)
            .stub(
                &iri(&format!("http://ontology.gaming.network/core#{local}")),
                &iri(target),
            )
            .unwrap()
    }

    fn predicates(triples: &[Triple]) -> Vec<&str> {
        triples.iter().map(|t| t.predicate.as_str()).collect()
    }

    #[test]
    fn test_class_stub() {
        let target = "http://ontology.gaming.network/universal/gaming#SessionEvent";
        let stub = stub_for("SessionEvent", target);

        assert_eq!(
            predicates(&stub),
            vec![rdf::TYPE, owl::DEPRECATED, rdfs::COMMENT, owl::EQUIVALENT_CLASS]
        );
        assert_eq!(stub[1].object, RdfObject::from(Literal::boolean(true)));
        assert_eq!(stub[3].object, RdfObject::from(iri(target)));

        let RdfObject::Literal(comment) = &stub[2].object else {
            panic!("comment should be a literal");
        };
        assert_eq!(
            comment.value(),
            "DEPRECATED legacy IRI. Use 'http://ontology.gaming.network/universal/gaming#SessionEvent' instead."
        );
        assert_eq!(comment.language(), Some("en"));
    }

    #[test]
    fn test_property_stub_keeps_every_type() {
        let stub = stub_for(
            "PlayerScore",
            "http://ontology.gaming.network/universal/human_behavior#Score",
        );
        let types = stub.iter().filter(|t| t.predicate.as_str() == rdf::TYPE).count();
        assert_eq!(types, 2);
        assert_eq!(stub.last().unwrap().predicate.as_str(), owl::EQUIVALENT_PROPERTY);
    }

    #[test]
    fn test_all_property_kinds_use_equivalent_property() {
        for local in ["hasSession", "note"] {
            let stub = stub_for(local, "http://ontology.gaming.network/universal/gaming#x");
            assert_eq!(stub.last().unwrap().predicate.as_str(), owl::EQUIVALENT_PROPERTY);
        }
    }
}
