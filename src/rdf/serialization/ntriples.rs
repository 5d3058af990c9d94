//! N-Triples format implementation

use super::{ParseResult, SerializeError, SerializeResult, TermConverter};
use crate::rdf::{RdfObject, RdfStore, RdfSubject, Triple};
use rio_api::formatter::TriplesFormatter;
use rio_api::model;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser};

/// Parse an N-Triples document
pub(super) fn parse(input: &str, scope: &mut TermConverter) -> ParseResult<RdfStore> {
    let mut parser = NTriplesParser::new(input.as_bytes());
    let mut store = RdfStore::new();

    parser.parse_all(&mut |t| -> ParseResult<()> {
        store.insert(scope.triple(t)?);
        Ok(())
    })?;

    Ok(store)
}

/// Write a store as N-Triples, one line per triple in sorted order
pub(super) fn serialize(store: &RdfStore) -> SerializeResult<String> {
    let mut triples: Vec<&Triple> = store.iter().collect();
    triples.sort_by_cached_key(|t| t.to_string());

    let mut formatter = NTriplesFormatter::new(Vec::new());
    for triple in triples {
        formatter.format(&to_rio(triple))?;
    }
    let output = formatter.finish()?;

    String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
}

fn to_rio(triple: &Triple) -> model::Triple<'_> {
    let subject = match &triple.subject {
        RdfSubject::NamedNode(n) => model::Subject::NamedNode(model::NamedNode { iri: n.as_str() }),
        RdfSubject::BlankNode(b) => model::Subject::BlankNode(model::BlankNode { id: b.as_str() }),
    };

    let object = match &triple.object {
        RdfObject::NamedNode(n) => model::Term::NamedNode(model::NamedNode { iri: n.as_str() }),
        RdfObject::BlankNode(b) => model::Term::BlankNode(model::BlankNode { id: b.as_str() }),
        RdfObject::Literal(l) => model::Term::Literal(match l.language() {
            Some(language) => model::Literal::LanguageTaggedString {
                value: l.value(),
                language,
            },
            None if l.is_plain() => model::Literal::Simple { value: l.value() },
            None => model::Literal::Typed {
                value: l.value(),
                datatype: model::NamedNode { iri: l.datatype() },
            },
        }),
    };

    model::Triple {
        subject,
        predicate: model::NamedNode {
            iri: triple.predicate.as_str(),
        },
        object,
    }
}
