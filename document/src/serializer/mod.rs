//! Serializers for SBOL3 documents.
//!
//! Four serializations are supported:
//! - **N-Triples** ([`ntriples`]) — statement order, or sorted for stable diffs (the default)
//! - **Turtle** ([`turtle`]) — statements grouped by subject
//! - **RDF/XML** ([`rdfxml`]) — one `rdf:Description` per subject
//! - **JSON-LD** ([`jsonld`]) — `@context` plus a `@graph` of node objects

pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod turtle;

use std::path::Path;

use crate::error::DocumentError;
use crate::format::FileType;
use crate::model::{iris, Document};

/// Prefixes declared by the Turtle, RDF/XML, and JSON-LD serializers.
pub(crate) const PREFIXES: &[(&str, &str)] = &[
    ("sbol", iris::SBOL),
    ("rdf", iris::RDF),
    ("xsd", iris::XSD),
    ("prov", iris::PROV),
    ("om", iris::OM),
    ("sep054", iris::SEP_054),
];

/// Compacts `iri` to `prefix:local` when a declared prefix matches and the
/// local part is a plain name.
pub(crate) fn compact(iri: &str) -> Option<String> {
    PREFIXES.iter().find_map(|(prefix, ns)| {
        let local = iri.strip_prefix(ns)?;
        is_plain_name(local).then(|| format!("{prefix}:{local}"))
    })
}

pub(crate) fn is_plain_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Renders a document in the given serialization.
///
/// # Errors
///
/// Returns [`DocumentError::Json`] if JSON-LD rendering fails.
pub fn render(document: &Document, file_type: FileType) -> Result<String, DocumentError> {
    Ok(match file_type {
        FileType::SortedNTriples => ntriples::to_sorted_ntriples(document),
        FileType::NTriples => ntriples::to_ntriples(document),
        FileType::Turtle => turtle::to_turtle(document),
        FileType::RdfXml => rdfxml::to_rdf_xml(document),
        FileType::JsonLd => serde_json::to_string_pretty(&jsonld::to_json_ld(document))? + "\n",
    })
}

/// Renders a document and writes it to `path`.
///
/// # Errors
///
/// Returns [`DocumentError::Write`] if the file cannot be written, or any
/// error of [`render`].
pub fn write(document: &Document, path: &Path, file_type: FileType) -> Result<(), DocumentError> {
    let text = render(document, file_type)?;
    std::fs::write(path, text).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}
