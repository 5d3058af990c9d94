//! RDF (Resource Description Framework) support
//!
//! This module implements the graph layer the release build runs on:
//! - RDF triples (subject-predicate-object) over oxrdf primitives
//! - An indexed, set-semantics triple store
//! - Namespace prefix bindings
//! - Turtle and N-Triples parsing and serialization
//!
//! # Example
//!
//! ```rust
//! use universal_release::rdf::{RdfStore, Triple, NamedNode, Literal, RdfPredicate};
//!
//! let mut store = RdfStore::new();
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! let predicate = RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let object = Literal::new_simple_literal("Alice");
//!
//! let triple = Triple::new(subject.clone().into(), predicate, object.into());
//! assert!(store.insert(triple.clone()));
//! assert!(!store.insert(triple));
//!
//! let results = store.triples_with_subject(&subject.into());
//! assert_eq!(results.len(), 1);
//! ```

mod namespace;
mod serialization;
mod store;
mod types;
pub mod vocab;

pub use types::{
    BlankNode, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
    Triple, TriplePattern,
};

pub use store::RdfStore;

pub use namespace::{Namespace, NamespaceManager, PrefixError, PrefixResult};

pub use serialization::{
    ParseError, ParseResult, RdfFormat, RdfParser, RdfSerializer, SerializeError,
    SerializeResult,
};
