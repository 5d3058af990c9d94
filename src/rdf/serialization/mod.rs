//! RDF serialization formats
//!
//! Supports:
//! - Turtle (TTL)
//! - N-Triples (NT)

mod ntriples;
mod turtle;

use super::{BlankNode, Literal, NamedNode, NamespaceManager, RdfObject, RdfPredicate, RdfStore, RdfSubject, Triple};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
}

impl RdfFormat {
    /// Pick the format from a file extension; anything unknown is Turtle
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => RdfFormat::NTriples,
            _ => RdfFormat::Turtle,
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax error reported by the parser
    #[error("Parse error: {0}")]
    Syntax(String),

    /// A term the store cannot represent
    #[error("Unsupported term: {0}")]
    UnsupportedTerm(&'static str),
}

impl From<rio_turtle::TurtleError> for ParseError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// RDF parser
///
/// Blank node labels are local to the document they appear in. Each parsed
/// document gets its own label scope, and labels are renamed to
/// `d<document>b<n>` so graphs merged from several documents never share a
/// blank node by accident while still parsing identically on every run.
#[derive(Debug, Default)]
pub struct RdfParser {
    documents: usize,
}

impl RdfParser {
    /// Create a parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse RDF data from a string
    pub fn parse(&mut self, input: &str, format: RdfFormat) -> ParseResult<RdfStore> {
        let mut scope = TermConverter::new(self.documents);
        self.documents += 1;

        match format {
            RdfFormat::Turtle => turtle::parse(input, &mut scope),
            RdfFormat::NTriples => ntriples::parse(input, &mut scope),
        }
    }

    /// Parse RDF data from a file, choosing the format from its extension
    pub fn parse_file(&mut self, path: &Path) -> ParseResult<RdfStore> {
        let input = std::fs::read_to_string(path)?;
        self.parse(&input, RdfFormat::from_path(path))
    }
}

/// RDF serializer
pub struct RdfSerializer;

impl RdfSerializer {
    /// Serialize a store to a string
    ///
    /// Output is sorted, so equal triple sets give identical text.
    pub fn serialize(
        store: &RdfStore,
        namespaces: &NamespaceManager,
        format: RdfFormat,
    ) -> SerializeResult<String> {
        match format {
            RdfFormat::Turtle => Ok(turtle::serialize(store, namespaces)),
            RdfFormat::NTriples => ntriples::serialize(store),
        }
    }
}

/// Converts rio terms into store terms, renaming blank nodes per document
pub(crate) struct TermConverter {
    document: usize,
    blank_nodes: HashMap<String, BlankNode>,
}

impl TermConverter {
    fn new(document: usize) -> Self {
        Self {
            document,
            blank_nodes: HashMap::new(),
        }
    }

    fn blank_node(&mut self, label: &str) -> ParseResult<BlankNode> {
        if let Some(node) = self.blank_nodes.get(label) {
            return Ok(node.clone());
        }
        let id = format!("d{}b{}", self.document, self.blank_nodes.len());
        let node = BlankNode::from_id(&id).map_err(|e| ParseError::Syntax(e.to_string()))?;
        self.blank_nodes.insert(label.to_string(), node.clone());
        Ok(node)
    }

    fn named_node(&self, n: rio_api::model::NamedNode<'_>) -> ParseResult<NamedNode> {
        NamedNode::new(n.iri).map_err(|e| ParseError::Syntax(e.to_string()))
    }

    fn triple(&mut self, t: rio_api::model::Triple<'_>) -> ParseResult<Triple> {
        let subject = match t.subject {
            rio_api::model::Subject::NamedNode(n) => RdfSubject::NamedNode(self.named_node(n)?),
            rio_api::model::Subject::BlankNode(b) => RdfSubject::BlankNode(self.blank_node(b.id)?),
            _ => return Err(ParseError::UnsupportedTerm("quoted triple in subject position")),
        };

        let predicate = RdfPredicate::from(self.named_node(t.predicate)?);

        let object = match t.object {
            rio_api::model::Term::NamedNode(n) => RdfObject::NamedNode(self.named_node(n)?),
            rio_api::model::Term::BlankNode(b) => RdfObject::BlankNode(self.blank_node(b.id)?),
            rio_api::model::Term::Literal(l) => RdfObject::Literal(match l {
                rio_api::model::Literal::Simple { value } => Literal::new_simple_literal(value),
                rio_api::model::Literal::LanguageTaggedString { value, language } => {
                    Literal::new_language_tagged_literal(value, language)
                        .map_err(|e| ParseError::Syntax(e.to_string()))?
                }
                rio_api::model::Literal::Typed { value, datatype } => {
                    Literal::new_typed_literal(value, self.named_node(datatype)?)
                }
            }),
            _ => return Err(ParseError::UnsupportedTerm("quoted triple in object position")),
        };

        Ok(Triple::new(subject, predicate, object))
    }
}
