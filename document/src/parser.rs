//! Loading SBOL3 documents from N-Triples, Turtle, and RDF/XML.
//!
//! Parsing is delegated to the sophia parsers; each parsed triple is copied
//! into an owned [`Statement`] in stream order, so the resulting document
//! keeps the order in which subjects appear in the file.

use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as RdfTerm, TermKind};
use sophia_api::triple::Triple as RdfTriple;
use sophia_turtle::parser::{nt, turtle};

use crate::error::DocumentError;
use crate::format::FileType;
use crate::model::{iris, Document, Literal, Statement, Term};

/// Reads and parses a document, inferring the serialization from the extension.
///
/// # Errors
///
/// Returns [`DocumentError::UnknownExtension`] if the extension is not
/// recognized, [`DocumentError::Read`] if the file cannot be read, and any
/// error of [`parse_str`].
pub fn read(path: &Path) -> Result<Document, DocumentError> {
    let file_type = FileType::from_path(path).ok_or_else(|| DocumentError::UnknownExtension {
        path: path.to_path_buf(),
    })?;
    read_as(path, file_type)
}

/// Reads and parses a document with an explicit serialization.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read, and any
/// error of [`parse_str`].
pub fn read_as(path: &Path, file_type: FileType) -> Result<Document, DocumentError> {
    if !file_type.is_readable() {
        return Err(DocumentError::UnsupportedInput { file_type });
    }
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text, file_type)
}

/// Parses a document from text.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] for malformed input,
/// [`DocumentError::UnsupportedInput`] for JSON-LD, and
/// [`DocumentError::MissingNamespace`] if a top-level object lacks a namespace.
pub fn parse_str(text: &str, file_type: FileType) -> Result<Document, DocumentError> {
    let statements = match file_type {
        FileType::SortedNTriples | FileType::NTriples => {
            collect(nt::parse_str(text), file_type)?
        }
        FileType::Turtle => collect(turtle::parse_str(text), file_type)?,
        FileType::RdfXml => collect(sophia_xml::parser::parse_str(text), file_type)?,
        FileType::JsonLd => return Err(DocumentError::UnsupportedInput { file_type }),
    };
    Document::from_statements(statements)
}

fn collect<S: TripleSource>(
    mut source: S,
    file_type: FileType,
) -> Result<Vec<Statement>, DocumentError> {
    let mut statements = Vec::new();
    let mut rejected = 0usize;
    source
        .for_each_triple(|t| match statement(t) {
            Some(st) => statements.push(st),
            None => rejected += 1,
        })
        .map_err(|e| DocumentError::Parse {
            file_type,
            message: e.to_string(),
        })?;
    if rejected > 0 {
        return Err(DocumentError::Parse {
            file_type,
            message: format!("{rejected} statement(s) use quoted triples or variables"),
        });
    }
    Ok(statements)
}

fn statement<T: RdfTriple>(triple: T) -> Option<Statement> {
    let subject = term(triple.s())?;
    let predicate = triple.p().iri()?.as_str().to_owned();
    let object = term(triple.o())?;
    Some(Statement {
        subject,
        predicate,
        object,
    })
}

fn term<T: RdfTerm>(t: T) -> Option<Term> {
    match t.kind() {
        TermKind::Iri => t.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => t.bnode_id().map(|id| Term::Blank(id.as_str().to_owned())),
        TermKind::Literal => {
            let lexical = t.lexical_form()?.to_string();
            let language = t.language_tag().map(|tag| tag.as_str().to_owned());
            let datatype = match language {
                Some(_) => None,
                None => t
                    .datatype()
                    .map(|dt| dt.as_str().to_owned())
                    .filter(|dt| dt != iris::XSD_STRING),
            };
            Some(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        _ => None,
    }
}
