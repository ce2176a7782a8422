//! SBOL3 documents as an ordered RDF statement graph.
//!
//! The `sbol-document` crate loads SBOL3 files (N-Triples, Turtle, RDF/XML)
//! into a [`Document`]: the statements in file order plus an index of the
//! top-level objects they describe, each with its identity and
//! `sbol:hasNamespace`. Documents can be extended with a [`Module`] and
//! written back as N-Triples, sorted N-Triples, Turtle, RDF/XML, or JSON-LD.
//!
//! # Loading
//!
//! ```
//! use sbol_document::{parser, FileType};
//!
//! let text = concat!(
//!     "<https://ex.org/a/seq> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://sbols.org/v3#Sequence> .\n",
//!     "<https://ex.org/a/seq> <http://sbols.org/v3#hasNamespace> <https://ex.org/a> .\n",
//! );
//! let doc = parser::parse_str(text, FileType::NTriples)?;
//! assert_eq!(doc.objects()[0].namespace, "https://ex.org/a");
//! # Ok::<(), sbol_document::DocumentError>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! use sbol_document::{serializer, Document, FileType, Module};
//!
//! let mut doc = Document::new();
//! doc.add(&Module::new("https://ex.org/a"))?;
//! let nt = serializer::render(&doc, FileType::SortedNTriples)?;
//! assert!(nt.contains("<https://ex.org/a/module>"));
//! # Ok::<(), sbol_document::DocumentError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod serializer;

pub use error::DocumentError;
pub use format::FileType;
pub use model::{iris, Document, Literal, Module, Statement, Term, TopLevelObject};
