//! Explicit legacy → universal equivalences already present in the legacy graph

use super::config::NamespaceConfig;
use crate::rdf::vocab::owl;
use crate::rdf::{NamedNode, RdfPredicate, RdfStore, TriplePattern};
use std::collections::BTreeMap;
use tracing::debug;

/// Reads `owl:equivalentClass` / `owl:equivalentProperty` links from legacy
/// IRIs to universal IRIs. These override the default target of a term.
pub struct EquivalenceSeeder<'a> {
    namespaces: &'a NamespaceConfig,
}

impl<'a> EquivalenceSeeder<'a> {
    pub fn new(namespaces: &'a NamespaceConfig) -> Self {
        Self { namespaces }
    }

    /// Class equivalences are scanned before property equivalences and each
    /// predicate in graph order. When one legacy subject has several links,
    /// the last one scanned wins.
    pub fn seed(&self, legacy: &RdfStore) -> BTreeMap<NamedNode, NamedNode> {
        let mut seeds = BTreeMap::new();

        for predicate in owl::EQUIVALENCES {
            let pattern = TriplePattern::new(None, Some(RdfPredicate::vocab(predicate)), None);
            for triple in legacy.query(&pattern) {
                let (Some(subject), Some(object)) =
                    (triple.subject.as_named_node(), triple.object.as_named_node())
                else {
                    continue;
                };
                if !self.namespaces.is_legacy(subject) || !self.namespaces.is_universal(object) {
                    continue;
                }
                if let Some(previous) = seeds.insert(subject.clone(), object.clone()) {
                    debug!(
                        "{} has several universal equivalents; {} replaces {}",
                        subject, object, previous
                    );
                }
            }
        }

        seeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{RdfFormat, RdfParser};

    fn seed(doc: &str) -> BTreeMap<NamedNode, NamedNode> {
        let legacy = RdfParser::new().parse(doc, RdfFormat::Turtle).unwrap();
        EquivalenceSeeder::new(&NamespaceConfig::default()).seed(&legacy)
    }

    fn iri(s: &str) -> NamedNode {
        NamedNode::new(s).unwrap()
    }

    const PREFIXES: &str = r#"
@prefix core: <http://ontology.gaming.network/core#> .
@prefix ug: <http://ontology.gaming.network/universal/gaming#> .
@prefix ub: <http://ontology.gaming.network/universal/human_behavior#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix ex: <http://example.org/> .
"#;

    #[test]
    fn test_seeds_universal_targets_only() {
        let doc = format!(
            "{PREFIXES}
core:PlayerScore owl:equivalentProperty ub:Score .
core:Session owl:equivalentClass ug:GameSession .
core:Device owl:equivalentClass ex:Device .
ex:Other owl:equivalentClass ug:Other .
core:Legacy owl:equivalentClass core:Older .
"
        );
        let seeds = seed(&doc);

        assert_eq!(seeds.len(), 2);
        assert_eq!(
            seeds[&iri("http://ontology.gaming.network/core#PlayerScore")],
            iri("http://ontology.gaming.network/universal/human_behavior#Score")
        );
        assert_eq!(
            seeds[&iri("http://ontology.gaming.network/core#Session")],
            iri("http://ontology.gaming.network/universal/gaming#GameSession")
        );
    }

    #[test]
    fn test_property_equivalence_scanned_after_class_equivalence() {
        let doc = format!(
            "{PREFIXES}
core:Both owl:equivalentProperty ub:AsProperty .
core:Both owl:equivalentClass ug:AsClass .
"
        );
        let seeds = seed(&doc);
        assert_eq!(
            seeds[&iri("http://ontology.gaming.network/core#Both")],
            iri("http://ontology.gaming.network/universal/human_behavior#AsProperty")
        );
    }

    #[test]
    fn test_literal_objects_ignored() {
        let doc = format!("{PREFIXES}\ncore:Odd owl:equivalentClass \"ug:Odd\" .\n");
        assert!(seed(&doc).is_empty());
    }
}
