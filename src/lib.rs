//! Universal Gaming Ontology release builder
//!
//! Consolidates two generations of the gaming vocabulary into one release
//! graph. Legacy `core#` terms are absorbed into the universal gaming
//! namespace, their original IRIs survive as deprecated stubs linked by
//! `owl:equivalentClass` / `owl:equivalentProperty`, and the universal
//! human-behavior and gaming foundations are flattened into the same
//! document.
//!
//! ## Example Usage
//!
//! ```rust
//! use universal_release::rdf::{RdfFormat, RdfParser};
//! use universal_release::release::{ReleaseAssembler, SourceGraphs};
//!
//! let mut parser = RdfParser::new();
//! let legacy = parser.parse(
//!     "@prefix owl: <http://www.w3.org/2002/07/owl#> .
//!      <http://ontology.gaming.network/core#SessionEvent> a owl:Class .",
//!     RdfFormat::Turtle,
//! ).unwrap();
//! let sources = SourceGraphs {
//!     legacy,
//!     human_behavior: parser.parse("", RdfFormat::Turtle).unwrap(),
//!     gaming: parser.parse("", RdfFormat::Turtle).unwrap(),
//! };
//!
//! let release = ReleaseAssembler::default().build(&sources).unwrap();
//! assert_eq!(release.stats.legacy_terms_absorbed, 1);
//! ```

#![warn(clippy::all)]

pub mod rdf;
pub mod release;

// Re-export main types for convenience
pub use rdf::{
    Literal, NamedNode, NamespaceManager, RdfFormat, RdfObject, RdfParser, RdfPredicate,
    RdfSerializer, RdfStore, RdfSubject, Triple, TriplePattern,
};

pub use release::{
    NamespaceConfig, OutputPaths, Release, ReleaseAssembler, ReleaseConfig, ReleaseError,
    ReleaseHeader, ReleaseResult, ReleaseStats, ReleaseWriter, SourceGraphs, SourcePaths,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
