//! Release configuration
//!
//! Namespace prefixes, release header literals and file locations are plain
//! values handed to the assembler. The defaults reproduce the published
//! WorldModelData release.

use super::error::{ReleaseError, ReleaseResult};
use crate::rdf::vocab::{dc, owl, rdfs, skos};
use crate::rdf::{NamedNode, NamespaceManager};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The three vocabularies the build works across
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Legacy core vocabulary being absorbed
    pub legacy: String,
    /// Universal gaming foundation, the default home of absorbed terms
    pub gaming: String,
    /// Universal human-behavior foundation
    pub human_behavior: String,
    /// IRI of the legacy ontology document itself
    pub legacy_ontology: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            legacy: "http://ontology.gaming.network/core#".to_string(),
            gaming: "http://ontology.gaming.network/universal/gaming#".to_string(),
            human_behavior: "http://ontology.gaming.network/universal/human_behavior#".to_string(),
            legacy_ontology: "http://ontology.gaming.network/core".to_string(),
        }
    }
}

impl NamespaceConfig {
    /// IRI belongs to the legacy vocabulary
    pub fn is_legacy(&self, node: &NamedNode) -> bool {
        node.is_in(&self.legacy)
    }

    /// IRI belongs to either universal foundation
    pub fn is_universal(&self, node: &NamedNode) -> bool {
        node.is_in(&self.gaming) || node.is_in(&self.human_behavior)
    }

    /// Prefixes bound on the release document
    pub fn bindings(&self) -> NamespaceManager {
        let mut ns = NamespaceManager::new();
        ns.bind("core", &self.legacy);
        ns.bind("ug", &self.gaming);
        ns.bind("ub", &self.human_behavior);
        ns.bind("owl", owl::NS);
        ns.bind("rdfs", rdfs::NS);
        ns.bind("skos", skos::NS);
        ns.bind("dc", dc::NS);
        ns
    }
}

/// Fixed metadata describing the release document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseHeader {
    pub iri: String,
    pub title: String,
    pub creator: String,
    pub version: String,
    pub comment: String,
    pub imports: Vec<String>,
}

impl Default for ReleaseHeader {
    fn default() -> Self {
        Self {
            iri: "http://ontology.gaming.network/universal/gaming_ontology".to_string(),
            title: "WorldModelData Universal Gaming Ontology v1".to_string(),
            creator: "WorldModelData".to_string(),
            version: "1.0.0".to_string(),
            comment: "Flagship universal gaming ontology release. Flattened distribution \
                      containing the universal foundations plus absorbed legacy core semantics."
                .to_string(),
            imports: vec![
                "http://ontology.gaming.network/universal/human_behavior".to_string(),
                "http://ontology.gaming.network/universal/gaming".to_string(),
            ],
        }
    }
}

/// Source documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePaths {
    pub legacy: PathBuf,
    pub human_behavior: PathBuf,
    pub gaming: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            legacy: PathBuf::from("ontology/ontology/gaming_ontology_v1.ttl"),
            human_behavior: PathBuf::from("ontology/universal/human_behavior_foundation.ttl"),
            gaming: PathBuf::from("ontology/universal/gaming_foundation_v1.ttl"),
        }
    }
}

/// Destinations: one canonical file plus byte-identical mirrors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub canonical: PathBuf,
    pub mirrors: Vec<PathBuf>,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            canonical: PathBuf::from(
                "ontology/universal/worldmodeldata_universal_gaming_ontology_v1.ttl",
            ),
            mirrors: vec![PathBuf::from(
                "ontology/ontology/worldmodeldata_universal_gaming_ontology_v1.ttl",
            )],
        }
    }
}

impl OutputPaths {
    /// Canonical path first, then every mirror
    pub fn all(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.canonical.as_path()).chain(self.mirrors.iter().map(PathBuf::as_path))
    }
}

/// Complete build configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    pub namespaces: NamespaceConfig,
    pub header: ReleaseHeader,
    pub sources: SourcePaths,
    pub outputs: OutputPaths,
}

impl ReleaseConfig {
    /// Load a YAML configuration; missing keys take their defaults
    pub fn from_yaml_file(path: &Path) -> ReleaseResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ReleaseError::io(path, e))?;
        serde_yaml::from_str(&text).map_err(|source| ReleaseError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that every IRI is absolute and the namespaces do not overlap
    pub fn validate(&self) -> ReleaseResult<()> {
        let ns = &self.namespaces;
        let iris = [
            ("namespaces.legacy", &ns.legacy),
            ("namespaces.gaming", &ns.gaming),
            ("namespaces.human_behavior", &ns.human_behavior),
            ("namespaces.legacy_ontology", &ns.legacy_ontology),
            ("header.iri", &self.header.iri),
        ];
        let imports = self.header.imports.iter().map(|i| ("header.imports", i));

        for (field, iri) in iris.into_iter().chain(imports) {
            oxiri::Iri::parse(iri.as_str())
                .map_err(|e| ReleaseError::Config(format!("{field} '{iri}' is not an IRI: {e}")))?;
        }

        let spaces = [&ns.legacy, &ns.gaming, &ns.human_behavior];
        for (i, a) in spaces.iter().enumerate() {
            for b in &spaces[i + 1..] {
                if a.starts_with(b.as_str()) || b.starts_with(a.as_str()) {
                    return Err(ReleaseError::Config(format!(
                        "namespaces '{a}' and '{b}' overlap"
                    )));
                }
            }
        }
        Ok(())
    }
}
