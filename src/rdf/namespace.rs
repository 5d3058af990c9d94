//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation.

use super::vocab::{owl, rdf, rdfs, xsd};
use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Prefix bindings in the order they were bound
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with the rdf/rdfs/xsd/owl prefixes
    pub fn new() -> Self {
        let mut mgr = Self::empty();
        mgr.bind("rdf", rdf::NS);
        mgr.bind("rdfs", rdfs::NS);
        mgr.bind("xsd", xsd::NS);
        mgr.bind("owl", owl::NS);
        mgr
    }

    /// Create a manager with no bindings at all
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Bind a prefix, replacing any earlier binding of the same prefix
    pub fn bind(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        let (prefix, local) = compact_iri
            .split_once(':')
            .ok_or_else(|| PrefixError::InvalidIri(compact_iri.to_string()))?;
        Ok(format!("{}{}", self.get_iri(prefix)?, local))
    }

    /// Split an IRI into (prefix, local) using the longest matching namespace
    pub fn split<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| (prefix.as_str(), &iri[ns.len()..]))
    }

    /// Compact an IRI using known prefixes
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.split(iri)
            .map(|(prefix, local)| format!("{}:{}", prefix, local))
    }

    /// Get all registered prefixes, in binding order
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}
