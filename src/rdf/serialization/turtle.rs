//! Turtle format implementation

use super::{ParseResult, TermConverter};
use crate::rdf::types::escape_lexical;
use crate::rdf::vocab::{rdf, xsd};
use crate::rdf::{Literal, NamedNode, NamespaceManager, RdfObject, RdfStore, RdfSubject};
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// Parse a Turtle document
pub(super) fn parse(input: &str, scope: &mut TermConverter) -> ParseResult<RdfStore> {
    let mut parser = TurtleParser::new(input.as_bytes(), None);
    let mut store = RdfStore::new();

    parser.parse_all(&mut |t| -> ParseResult<()> {
        store.insert(scope.triple(t)?);
        Ok(())
    })?;

    Ok(store)
}

/// Predicate sort key: `rdf:type` first, then by rendered form
type PredicateKey = (bool, String);

/// Write a store as grouped Turtle, one block per subject
pub(super) fn serialize(store: &RdfStore, namespaces: &NamespaceManager) -> String {
    let mut blocks: BTreeMap<String, BTreeMap<PredicateKey, BTreeSet<String>>> = BTreeMap::new();
    for triple in store.iter() {
        let predicate = triple.predicate.as_str();
        let key = (predicate != rdf::TYPE, render_predicate(predicate, namespaces));
        blocks
            .entry(render_subject(&triple.subject, namespaces))
            .or_default()
            .entry(key)
            .or_default()
            .insert(render_object(&triple.object, namespaces));
    }

    let mut out = String::new();
    for ns in namespaces.prefixes() {
        let _ = writeln!(out, "@prefix {}: <{}> .", ns.prefix, ns.iri);
    }

    for (subject, predicates) in blocks {
        out.push('\n');
        out.push_str(&subject);
        let count = predicates.len();
        for (i, ((_, predicate), objects)) in predicates.into_iter().enumerate() {
            let indent = if i == 0 { " " } else { "    " };
            let objects: Vec<String> = objects.into_iter().collect();
            let _ = write!(out, "{}{} {}", indent, predicate, objects.join(",\n        "));
            out.push_str(if i + 1 == count { " .\n" } else { " ;\n" });
        }
    }

    out
}

fn render_iri(node: &NamedNode, namespaces: &NamespaceManager) -> String {
    match namespaces.split(node.as_str()) {
        Some((prefix, local)) if is_safe_local(local) => format!("{prefix}:{local}"),
        _ => format!("<{}>", node.as_str()),
    }
}

fn render_predicate(iri: &str, namespaces: &NamespaceManager) -> String {
    if iri == rdf::TYPE {
        return "a".to_string();
    }
    match NamedNode::new(iri) {
        Ok(node) => render_iri(&node, namespaces),
        Err(_) => format!("<{iri}>"),
    }
}

fn render_subject(subject: &RdfSubject, namespaces: &NamespaceManager) -> String {
    match subject {
        RdfSubject::NamedNode(n) => render_iri(n, namespaces),
        RdfSubject::BlankNode(b) => b.to_string(),
    }
}

fn render_object(object: &RdfObject, namespaces: &NamespaceManager) -> String {
    match object {
        RdfObject::NamedNode(n) => render_iri(n, namespaces),
        RdfObject::BlankNode(b) => b.to_string(),
        RdfObject::Literal(l) => render_literal(l, namespaces),
    }
}

fn render_literal(literal: &Literal, namespaces: &NamespaceManager) -> String {
    let value = escape_lexical(literal.value());
    if let Some(lang) = literal.language() {
        return format!("\"{value}\"@{lang}");
    }
    if literal.datatype() == xsd::STRING {
        return format!("\"{value}\"");
    }
    match NamedNode::new(literal.datatype()) {
        Ok(dt) => format!("\"{value}\"^^{}", render_iri(&dt, namespaces)),
        Err(_) => format!("\"{value}\"^^<{}>", literal.datatype()),
    }
}

/// Conservative subset of PN_LOCAL that never needs escaping
fn is_safe_local(local: &str) -> bool {
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !local.starts_with('-')
}
