//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use sbol_document::{iris, parser, Document, Statement, Term};

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Loads a fixture, inferring the serialization from its extension.
pub fn load(name: &str) -> Document {
    parser::read(&fixture(name)).unwrap()
}

/// Builds a document of `Component` objects from `(identity, namespace)` pairs.
pub fn document(objects: &[(String, String)]) -> Document {
    let statements = objects
        .iter()
        .flat_map(|(id, ns)| {
            [
                Statement::new(
                    Term::iri(id.as_str()),
                    iris::RDF_TYPE,
                    Term::iri("http://sbols.org/v3#Component"),
                ),
                Statement::new(Term::iri(id.as_str()), iris::SBOL_HAS_NAMESPACE, Term::iri(ns.as_str())),
            ]
        })
        .collect();
    Document::from_statements(statements).unwrap()
}
