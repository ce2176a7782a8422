//! Read, classify, build, write.

use sbol_document::{parser, serializer, Document, Module};
use tracing::{debug, info, warn};

use crate::builder::build_module;
use crate::classify::{classify, distinct_namespaces, NamespaceCount};
use crate::config::Config;
use crate::error::ModuleError;

/// What a successful run decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every top-level object shared one namespace; this module was added.
    Module(Module),
    /// Top-level objects span several namespaces; the document is unchanged.
    NotAModule {
        /// Each namespace seen, in first-appearance order.
        namespaces: Vec<NamespaceCount>,
    },
}

impl Outcome {
    /// Returns true if a module was defined.
    #[must_use]
    pub fn is_module(&self) -> bool {
        matches!(self, Outcome::Module(_))
    }
}

/// Defines a module over `document` if all top-level objects share a namespace.
///
/// On [`Outcome::Module`] the document has gained exactly one top-level
/// object. On [`Outcome::NotAModule`] it is untouched.
///
/// # Errors
///
/// Returns [`ModuleError::AlreadyModularized`] if the document already holds
/// a module, [`ModuleError::EmptyDocument`] if it has no top-level objects,
/// and [`ModuleError::Document`] if the module identity is already taken.
pub fn define_module(document: &mut Document) -> Result<Outcome, ModuleError> {
    if let Some(existing) = document.objects().iter().find(|o| o.is_module()) {
        return Err(ModuleError::AlreadyModularized {
            identity: existing.identity.clone(),
        });
    }

    info!("Checking namespaces");
    let classification = classify(document.objects())?;
    info!("SBOL Document is a Module: {}", classification.is_uniform());

    match classification.into_uniform() {
        Some(namespace) => {
            let module = build_module(document, namespace)?;
            debug!(
                identity = %module.identity,
                members = module.members.len(),
                "Module defined"
            );
            Ok(Outcome::Module(module))
        }
        None => {
            let namespaces = distinct_namespaces(document.objects());
            for ns in &namespaces {
                debug!(namespace = %ns.namespace, objects = ns.objects, "Namespace");
            }
            Ok(Outcome::NotAModule { namespaces })
        }
    }
}

/// Runs the whole pipeline for one input file.
///
/// The output file is written only when a module is defined.
///
/// # Errors
///
/// Returns [`ModuleError::Document`] if the input cannot be read or parsed
/// or the output cannot be written, and any error of [`define_module`].
pub fn run(config: &Config) -> Result<Outcome, ModuleError> {
    info!("Reading SBOL file {}", config.input.display());
    let mut document = parser::read(&config.input)?;
    debug!(
        objects = document.len(),
        statements = document.statements().len(),
        "Parsed document"
    );

    let outcome = define_module(&mut document)?;
    match &outcome {
        Outcome::Module(_) => {
            let path = config.output_path();
            serializer::write(&document, &path, config.file_type)?;
            info!("Module file written to {}", path.display());
        }
        Outcome::NotAModule { namespaces } => {
            warn!(
                "{} spans {} namespaces; no output written",
                config.input.display(),
                namespaces.len()
            );
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbol_document::{iris, Statement, Term};

    fn document(objects: &[(&str, &str)]) -> Document {
        let statements = objects
            .iter()
            .flat_map(|(id, ns)| {
                [
                    Statement::new(Term::iri(*id), iris::RDF_TYPE, Term::iri("http://sbols.org/v3#Sequence")),
                    Statement::new(Term::iri(*id), iris::SBOL_HAS_NAMESPACE, Term::iri(*ns)),
                ]
            })
            .collect();
        Document::from_statements(statements).unwrap()
    }

    #[test]
    fn uniform_document_gains_module() {
        let mut doc = document(&[
            ("https://ex.org/a/1", "https://ex.org/a"),
            ("https://ex.org/a/2", "https://ex.org/a"),
        ]);
        let outcome = define_module(&mut doc).unwrap();
        assert!(outcome.is_module());
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn mixed_document_is_untouched() {
        let mut doc = document(&[
            ("https://ex.org/a/1", "https://ex.org/a"),
            ("https://ex.org/b/1", "https://ex.org/b"),
        ]);
        let before = doc.clone();
        let outcome = define_module(&mut doc).unwrap();
        assert!(matches!(outcome, Outcome::NotAModule { ref namespaces } if namespaces.len() == 2));
        assert_eq!(doc, before);
    }

    #[test]
    fn empty_document_fails() {
        let mut doc = Document::new();
        assert!(matches!(define_module(&mut doc), Err(ModuleError::EmptyDocument)));
    }

    #[test]
    fn second_run_is_rejected() {
        let mut doc = document(&[("https://ex.org/a/1", "https://ex.org/a")]);
        define_module(&mut doc).unwrap();
        let err = define_module(&mut doc).unwrap_err();
        assert!(matches!(
            err,
            ModuleError::AlreadyModularized { identity } if identity == "https://ex.org/a/module"
        ));
        assert_eq!(doc.len(), 2);
    }
}
