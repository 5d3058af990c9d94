//! Universal release build
//!
//! Absorbs the legacy core vocabulary into the universal gaming namespace
//! and emits one flattened release graph:
//!
//! 1. [`TermCollector`] finds legacy classes and properties, dropping test-ish ones
//! 2. [`EquivalenceSeeder`] reads existing legacy → universal equivalences
//! 3. [`TargetResolver`] maps every remaining term to exactly one universal IRI
//! 4. [`TripleRewriter`] copies each term's triples onto its target
//! 5. [`DeprecationStubGenerator`] keeps the legacy IRI as a deprecated stub
//!
//! [`ReleaseAssembler`] drives the whole pass and [`ReleaseWriter`] writes the
//! result to every configured destination.

mod assembler;
mod config;
mod equivalence;
mod error;
mod resolver;
mod rewriter;
mod stub;
mod terms;
mod writer;

pub use assembler::{Release, ReleaseAssembler, ReleaseStats, SourceGraphs};
pub use config::{NamespaceConfig, OutputPaths, ReleaseConfig, ReleaseHeader, SourcePaths};
pub use equivalence::EquivalenceSeeder;
pub use error::{ReleaseError, ReleaseResult};
pub use resolver::{Mapping, TargetResolver};
pub use rewriter::TripleRewriter;
pub use stub::DeprecationStubGenerator;
pub use terms::{is_testish, TermCollection, TermCollector};
pub use writer::{ReleaseWriter, WriteReport};
