//! Release assembly
//!
//! Seeds the output with both universal foundations, adds the release
//! header, then absorbs each legacy term in IRI order: its triples are
//! rewritten onto the universal target and a deprecation stub keeps the
//! legacy IRI alive.

use super::config::{NamespaceConfig, ReleaseConfig, ReleaseHeader, SourcePaths};
use super::equivalence::EquivalenceSeeder;
use super::error::{ReleaseError, ReleaseResult};
use super::resolver::TargetResolver;
use super::rewriter::TripleRewriter;
use super::stub::DeprecationStubGenerator;
use super::terms::TermCollector;
use crate::rdf::vocab::{dc, owl, rdf, rdfs};
use crate::rdf::{
    Literal, NamedNode, NamespaceManager, RdfObject, RdfParser, RdfPredicate, RdfStore, Triple,
};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// The three parsed source documents
pub struct SourceGraphs {
    pub legacy: RdfStore,
    pub human_behavior: RdfStore,
    pub gaming: RdfStore,
}

impl SourceGraphs {
    /// Parse all three sources; the first failure aborts the load
    pub fn load(paths: &SourcePaths) -> ReleaseResult<Self> {
        let mut parser = RdfParser::new();
        let mut load = |path: &Path| -> ReleaseResult<RdfStore> {
            let store = parser
                .parse_file(path)
                .map_err(|e| ReleaseError::from_parse(path, e))?;
            info!("Loaded {} triples from {}", store.len(), path.display());
            Ok(store)
        };

        Ok(Self {
            legacy: load(&paths.legacy)?,
            human_behavior: load(&paths.human_behavior)?,
            gaming: load(&paths.gaming)?,
        })
    }
}

/// Run statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseStats {
    pub triples_out: usize,
    pub legacy_terms_total: usize,
    pub legacy_terms_absorbed: usize,
    pub legacy_terms_skipped_testish: usize,
}

/// A finished release graph, ready to serialize
pub struct Release {
    pub graph: RdfStore,
    pub namespaces: NamespaceManager,
    pub stats: ReleaseStats,
}

/// Builds the release graph from the legacy and universal sources
pub struct ReleaseAssembler {
    namespaces: NamespaceConfig,
    header: ReleaseHeader,
}

impl ReleaseAssembler {
    pub fn new(namespaces: NamespaceConfig, header: ReleaseHeader) -> Self {
        Self { namespaces, header }
    }

    pub fn from_config(config: &ReleaseConfig) -> Self {
        Self::new(config.namespaces.clone(), config.header.clone())
    }

    /// Load the sources from disk and build
    pub fn build_from_paths(&self, paths: &SourcePaths) -> ReleaseResult<Release> {
        let sources = SourceGraphs::load(paths)?;
        self.build(&sources)
    }

    /// Build the release graph; a pure function of the sources and header
    pub fn build(&self, sources: &SourceGraphs) -> ReleaseResult<Release> {
        let mut graph = RdfStore::new();
        graph.extend(sources.human_behavior.iter().cloned());
        graph.extend(sources.gaming.iter().cloned());
        info!("Seeded release with {} universal foundation triples", graph.len());

        let namespaces = self.namespaces.bindings();
        let universal_locals = self.universal_locals(&graph);

        let terms = TermCollector::new(&self.namespaces).collect(&sources.legacy);
        let seeds = EquivalenceSeeder::new(&self.namespaces).seed(&sources.legacy);
        info!(
            "Found {} legacy terms ({} test-ish skipped, {} explicit equivalences)",
            terms.total(),
            terms.excluded.len(),
            seeds.len()
        );
        for skipped in &terms.excluded {
            debug!("Skipping test-ish term {}", skipped);
        }

        let mapping =
            TargetResolver::new(&self.namespaces, &seeds, &universal_locals).resolve_all(&terms.absorbed)?;

        graph.extend(self.header_triples()?);

        let legacy_ontology = NamedNode::new(&self.namespaces.legacy_ontology)?;
        let rewriter = TripleRewriter::new(&sources.legacy, &mapping, legacy_ontology);
        let stubs = DeprecationStubGenerator::new(&sources.legacy);

        let mut absorbed = 0;
        for (term, target) in mapping.iter() {
            graph.extend(rewriter.rewrite(term, target));
            graph.extend(stubs.stub(term, target)?);
            absorbed += 1;
        }

        let stats = ReleaseStats {
            triples_out: graph.len(),
            legacy_terms_total: terms.total(),
            legacy_terms_absorbed: absorbed,
            legacy_terms_skipped_testish: terms.excluded.len(),
        };
        info!(
            "Release assembled: {} triples, {} legacy terms absorbed",
            stats.triples_out, stats.legacy_terms_absorbed
        );

        Ok(Release {
            graph,
            namespaces,
            stats,
        })
    }

    /// Local names of subjects already defined under either universal namespace
    fn universal_locals(&self, graph: &RdfStore) -> HashSet<String> {
        graph
            .subjects()
            .filter_map(|s| s.as_named_node())
            .filter(|n| self.namespaces.is_universal(n))
            .map(|n| n.local_name().to_string())
            .collect()
    }

    fn header_triples(&self) -> ReleaseResult<Vec<Triple>> {
        let h = &self.header;
        let iri = NamedNode::new(&h.iri)?;
        let triple = |predicate: &'static str, object: RdfObject| {
            Triple::new(iri.clone().into(), RdfPredicate::vocab(predicate), object)
        };

        let mut triples = vec![
            triple(rdf::TYPE, RdfObject::vocab(owl::ONTOLOGY)),
            triple(dc::TITLE, Literal::new_language_tagged_literal(&h.title, "en")?.into()),
            triple(dc::CREATOR, Literal::new_simple_literal(&h.creator).into()),
            triple(owl::VERSION_INFO, Literal::new_simple_literal(&h.version).into()),
            triple(rdfs::COMMENT, Literal::new_language_tagged_literal(&h.comment, "en")?.into()),
        ];
        for import in &h.imports {
            triples.push(triple(owl::IMPORTS, NamedNode::new(import)?.into()));
        }
        Ok(triples)
    }
}

impl Default for ReleaseAssembler {
    fn default() -> Self {
        Self::new(NamespaceConfig::default(), ReleaseHeader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{RdfFormat, TriplePattern};

    fn parse(doc: &str) -> RdfStore {
        RdfParser::new().parse(doc, RdfFormat::Turtle).unwrap()
    }

    fn sources(legacy: &str) -> SourceGraphs {
        SourceGraphs {
            legacy: parse(legacy),
            human_behavior: parse(
                "<http://ontology.gaming.network/universal/human_behavior#Emotion> \
                 a <http://www.w3.org/2002/07/owl#Class> .",
            ),
            gaming: parse(
                "<http://ontology.gaming.network/universal/gaming#Game> \
                 a <http://www.w3.org/2002/07/owl#Class> .",
            ),
        }
    }

    #[test]
    fn test_header_triples() {
        let release = ReleaseAssembler::default().build(&sources("")).unwrap();
        let header = NamedNode::new(&ReleaseHeader::default().iri).unwrap();
        let about = release
            .graph
            .query(&TriplePattern::new(Some(header.into()), None, None))
            .len();

        assert_eq!(about, 7);
        // 2 foundation triples + 7 header triples
        assert_eq!(release.stats.triples_out, 9);
        assert_eq!(release.stats.legacy_terms_total, 0);
    }

    #[test]
    fn test_empty_legacy_keeps_foundations_verbatim() {
        let src = sources("");
        let release = ReleaseAssembler::default().build(&src).unwrap();
        for triple in src.human_behavior.iter().chain(src.gaming.iter()) {
            assert!(release.graph.contains(triple));
        }
    }

    #[test]
    fn test_stats_count_absorbed_and_skipped() {
        let legacy = r#"
@prefix core: <http://ontology.gaming.network/core#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
core:Emotion a owl:Class .
core:TestHelper a owl:Class .
core:score a owl:DatatypeProperty .
"#;
        let release = ReleaseAssembler::default().build(&sources(legacy)).unwrap();
        assert_eq!(
            release.stats,
            ReleaseStats {
                triples_out: release.graph.len(),
                legacy_terms_total: 3,
                legacy_terms_absorbed: 2,
                legacy_terms_skipped_testish: 1,
            }
        );
    }

    #[test]
    fn test_custom_header_version() {
        let header = ReleaseHeader {
            version: "2.0.0-rc1".to_string(),
            ..ReleaseHeader::default()
        };
        let assembler = ReleaseAssembler::new(NamespaceConfig::default(), header);
        let release = assembler.build(&sources("")).unwrap();

        let version: RdfObject = Literal::new_simple_literal("2.0.0-rc1").into();
        let hits = release.graph.query(&TriplePattern::new(
            None,
            Some(RdfPredicate::vocab(owl::VERSION_INFO)),
            Some(version),
        ));
        assert_eq!(hits.len(), 1);
    }
}
