//! RDF type definitions
//!
//! Thin wrappers around the oxrdf primitives. Every wrapper orders by its
//! rendered form so sets of terms sort the same way on every run.

use oxrdf::{BlankNode as OxBlankNode, Literal as OxLiteral, NamedNode as OxNamedNode};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use super::vocab::xsd;

/// RDF errors
#[derive(Error, Debug)]
pub enum RdfError {
    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Invalid blank node
    #[error("Invalid blank node: {0}")]
    InvalidBlankNode(String),

    /// Invalid literal
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Create a new named node from an IRI string
    pub fn new(iri: &str) -> RdfResult<Self> {
        OxNamedNode::new(iri)
            .map(Self)
            .map_err(|e| RdfError::InvalidIri(format!("{iri}: {e}")))
    }

    /// Build a named node from a namespace and a local name
    pub fn in_namespace(namespace: &str, local: &str) -> RdfResult<Self> {
        Self::new(&format!("{namespace}{local}"))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the IRI string starts with the given namespace
    pub fn is_in(&self, namespace: &str) -> bool {
        self.as_str().starts_with(namespace)
    }

    /// Suffix after the last `#`, or after the last `/` when there is no `#`
    pub fn local_name(&self) -> &str {
        let iri = self.as_str();
        match iri.rsplit_once('#') {
            Some((_, local)) => local,
            None => iri.rsplit_once('/').map_or(iri, |(_, local)| local),
        }
    }
}

impl PartialOrd for NamedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NamedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for NamedNode {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

/// Blank node (anonymous node)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode(OxBlankNode);

impl BlankNode {
    /// Create a new blank node with a unique identifier
    pub fn new() -> Self {
        Self(OxBlankNode::default())
    }

    /// Create a blank node from a string identifier
    pub fn from_id(id: &str) -> RdfResult<Self> {
        OxBlankNode::new(id)
            .map(Self)
            .map_err(|e| RdfError::InvalidBlankNode(e.to_string()))
    }

    /// Get the blank node identifier
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.as_str())
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a simple literal (plain string)
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Create a literal with language tag
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> RdfResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| RdfError::InvalidLiteral(e.to_string()))
    }

    /// Create a typed literal
    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// `"true"^^xsd:boolean` / `"false"^^xsd:boolean`
    pub fn boolean(value: bool) -> Self {
        Self(OxLiteral::new_typed_literal(
            if value { "true" } else { "false" },
            OxNamedNode::new_unchecked(xsd::BOOLEAN),
        ))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// Get the datatype IRI
    pub fn datatype(&self) -> &str {
        self.0.datatype().as_str()
    }

    /// Plain string literal (xsd:string without a language tag)
    pub fn is_plain(&self) -> bool {
        self.language().is_none() && self.datatype() == xsd::STRING
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lang) = self.language() {
            write!(f, "\"{}\"@{}", escape_lexical(self.value()), lang)
        } else {
            write!(f, "\"{}\"^^<{}>", escape_lexical(self.value()), self.datatype())
        }
    }
}

/// Escape a lexical form for a double-quoted Turtle / N-Triples string
pub(crate) fn escape_lexical(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// RDF subject (NamedNode or BlankNode)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfSubject {
    /// Named node (IRI)
    NamedNode(NamedNode),
    /// Blank node
    BlankNode(BlankNode),
}

impl RdfSubject {
    /// The IRI, if this subject is a named node
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfSubject::NamedNode(n) => Some(n),
            RdfSubject::BlankNode(_) => None,
        }
    }
}

impl fmt::Display for RdfSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfSubject::NamedNode(n) => write!(f, "{}", n),
            RdfSubject::BlankNode(b) => write!(f, "{}", b),
        }
    }
}

impl From<NamedNode> for RdfSubject {
    fn from(node: NamedNode) -> Self {
        RdfSubject::NamedNode(node)
    }
}

impl From<BlankNode> for RdfSubject {
    fn from(node: BlankNode) -> Self {
        RdfSubject::BlankNode(node)
    }
}

/// RDF predicate (always a NamedNode)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfPredicate(NamedNode);

impl RdfPredicate {
    /// Create a new predicate from an IRI
    pub fn new(iri: &str) -> RdfResult<Self> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Predicate for one of the fixed vocabulary IRIs in [`super::vocab`]
    pub(crate) fn vocab(iri: &'static str) -> Self {
        Self(NamedNode(OxNamedNode::new_unchecked(iri)))
    }

    /// Get the underlying named node
    pub fn as_named_node(&self) -> &NamedNode {
        &self.0
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RdfPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for RdfPredicate {
    fn from(node: NamedNode) -> Self {
        RdfPredicate(node)
    }
}

impl From<RdfPredicate> for NamedNode {
    fn from(pred: RdfPredicate) -> Self {
        pred.0
    }
}

/// RDF object (NamedNode, BlankNode, or Literal)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    /// Named node (IRI)
    NamedNode(NamedNode),
    /// Blank node
    BlankNode(BlankNode),
    /// Literal value
    Literal(Literal),
}

impl RdfObject {
    /// Object for one of the fixed vocabulary IRIs in [`super::vocab`]
    pub(crate) fn vocab(iri: &'static str) -> Self {
        RdfObject::NamedNode(NamedNode(OxNamedNode::new_unchecked(iri)))
    }

    /// The IRI, if this object is a named node
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfObject::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, RdfObject::Literal(_))
    }
}

impl fmt::Display for RdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfObject::NamedNode(n) => write!(f, "{}", n),
            RdfObject::BlankNode(b) => write!(f, "{}", b),
            RdfObject::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        RdfObject::NamedNode(node)
    }
}

impl From<BlankNode> for RdfObject {
    fn from(node: BlankNode) -> Self {
        RdfObject::BlankNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(lit: Literal) -> Self {
        RdfObject::Literal(lit)
    }
}

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject
    pub subject: RdfSubject,
    /// Predicate
    pub predicate: RdfPredicate,
    /// Object
    pub object: RdfObject,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: RdfSubject, predicate: RdfPredicate, object: RdfObject) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Triple pattern for queries (with optional variables)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    /// Subject (None = variable)
    pub subject: Option<RdfSubject>,
    /// Predicate (None = variable)
    pub predicate: Option<RdfPredicate>,
    /// Object (None = variable)
    pub object: Option<RdfObject>,
}

impl TriplePattern {
    /// Create a new triple pattern
    pub fn new(
        subject: Option<RdfSubject>,
        predicate: Option<RdfPredicate>,
        object: Option<RdfObject>,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Check if a triple matches this pattern
    pub fn matches(&self, triple: &Triple) -> bool {
        if let Some(ref s) = self.subject {
            if s != &triple.subject {
                return false;
            }
        }
        if let Some(ref p) = self.predicate {
            if p != &triple.predicate {
                return false;
            }
        }
        if let Some(ref o) = self.object {
            if o != &triple.object {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_node() {
        let node = NamedNode::new("http://example.org/alice").unwrap();
        assert_eq!(node.as_str(), "http://example.org/alice");
        assert_eq!(node.to_string(), "<http://example.org/alice>");
        assert!(NamedNode::new("not an iri").is_err());
    }

    #[test]
    fn test_local_name() {
        let hash = NamedNode::new("http://ontology.gaming.network/core#SessionEvent").unwrap();
        assert_eq!(hash.local_name(), "SessionEvent");

        let slash = NamedNode::new("http://example.org/terms/playerId").unwrap();
        assert_eq!(slash.local_name(), "playerId");

        // The last '#' wins even when a '/' follows it
        let mixed = NamedNode::new("http://example.org/a#b/c").unwrap();
        assert_eq!(mixed.local_name(), "b/c");
    }

    #[test]
    fn test_ordering_by_iri() {
        let a = NamedNode::new("http://example.org/A").unwrap();
        let b = NamedNode::new("http://example.org/B").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_blank_node() {
        let node1 = BlankNode::new();
        let node2 = BlankNode::new();
        assert_ne!(node1, node2);
    }

    #[test]
    fn test_literal() {
        let lit = Literal::new_simple_literal("Alice");
        assert_eq!(lit.value(), "Alice");
        assert!(lit.is_plain());

        let lit = Literal::new_language_tagged_literal("Alice", "en").unwrap();
        assert_eq!(lit.language(), Some("en"));
        assert!(!lit.is_plain());

        let lit = Literal::boolean(true);
        assert_eq!(lit.value(), "true");
        assert_eq!(lit.datatype(), xsd::BOOLEAN);
    }

    #[test]
    fn test_literal_display_escapes_value() {
        let lit = Literal::new_language_tagged_literal("say \"hi\"\\", "en").unwrap();
        assert_eq!(lit.to_string(), r#""say \"hi\"\\"@en"#);

        // A quote inside the value must not read as the end of the literal
        let lit = Literal::new_simple_literal("a\"^^<x>");
        assert!(lit.to_string().starts_with(r#""a\"^^<x>""#));
    }

    #[test]
    fn test_triple_pattern_matching() {
        let subject = NamedNode::new("http://example.org/alice").unwrap();
        let predicate = RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap();
        let object = Literal::new_simple_literal("Alice");

        let triple = Triple::new(subject.clone().into(), predicate.clone(), object.into());

        let pattern = TriplePattern::new(Some(subject.into()), None, None);
        assert!(pattern.matches(&triple));

        let wrong_subject = NamedNode::new("http://example.org/bob").unwrap();
        let pattern = TriplePattern::new(Some(wrong_subject.into()), None, None);
        assert!(!pattern.matches(&triple));

        let pattern = TriplePattern::new(None, Some(predicate), None);
        assert!(pattern.matches(&triple));

        assert!(TriplePattern::default().matches(&triple));
    }
}
