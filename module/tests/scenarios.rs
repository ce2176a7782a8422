//! End-to-end scenarios over fixture files.

mod common;

use common::{document, load};
use sbol_document::{iris, DocumentError, Term};
use sbol_module::{build_module, classify, define_module, ModuleError, NamespaceCount, Outcome};

#[test]
fn three_objects_in_one_namespace() {
    let ids = ["https://ex.org/a/1", "https://ex.org/a/2", "https://ex.org/a/3"];
    let mut doc = document(
        &ids.iter()
            .map(|id| (id.to_string(), "https://ex.org/a".to_string()))
            .collect::<Vec<_>>(),
    );

    let classification = classify(doc.objects()).unwrap();
    assert!(classification.is_uniform());
    assert_eq!(classification.namespace(), "https://ex.org/a");

    let module = build_module(&mut doc, classification.into_uniform().unwrap()).unwrap();
    assert_eq!(module.identity, "https://ex.org/a/module");
    assert_eq!(module.namespace, "https://ex.org/a");
    assert_eq!(module.members, ids);
}

#[test]
fn two_namespaces_are_not_a_module() {
    let mut doc = load("mixed.nt");
    let before = doc.clone();

    assert!(!classify(doc.objects()).unwrap().is_uniform());

    let outcome = define_module(&mut doc).unwrap();
    assert_eq!(
        outcome,
        Outcome::NotAModule {
            namespaces: vec![
                NamespaceCount { namespace: "https://ex.org/a".into(), objects: 1 },
                NamespaceCount { namespace: "https://ex.org/b".into(), objects: 1 },
            ]
        }
    );
    assert_eq!(doc, before);
}

#[test]
fn no_top_level_objects_is_empty_document() {
    let mut doc = load("empty.nt");
    assert!(doc.is_empty());
    assert!(matches!(classify(doc.objects()), Err(ModuleError::EmptyDocument)));
    assert!(matches!(define_module(&mut doc), Err(ModuleError::EmptyDocument)));
    assert_eq!(doc.statements().len(), 1);
}

#[test]
fn single_object_module() {
    let mut doc = load("single.xml");
    let classification = classify(doc.objects()).unwrap();
    assert!(classification.is_uniform());
    assert_eq!(classification.namespace(), "https://ex.org/x");

    let Outcome::Module(module) = define_module(&mut doc).unwrap() else {
        panic!("expected a module");
    };
    assert_eq!(module.members, ["https://ex.org/x/lacI"]);
}

#[test]
fn children_are_not_members() {
    let mut doc = load("uniform.ttl");
    let Outcome::Module(module) = define_module(&mut doc).unwrap() else {
        panic!("expected a module");
    };
    assert_eq!(
        module.members,
        ["https://ex.org/a/seq1", "https://ex.org/a/device", "https://ex.org/a/part"]
    );
}

#[test]
fn module_statements_are_appended() {
    let mut doc = load("uniform.ttl");
    let before = doc.statements().len();
    define_module(&mut doc).unwrap();

    let added = &doc.statements()[before..];
    assert_eq!(added.len(), 3 + 3);
    assert!(added
        .iter()
        .all(|s| s.subject == Term::iri("https://ex.org/a/module")));
    assert_eq!(added[0].object, Term::iri(iris::MODULE));
}

#[test]
fn rerunning_on_a_modularized_document_is_rejected() {
    let mut doc = load("uniform.ttl");
    define_module(&mut doc).unwrap();
    let after_first = doc.clone();

    let err = define_module(&mut doc).unwrap_err();
    assert!(matches!(err, ModuleError::AlreadyModularized { .. }));
    assert_eq!(doc, after_first);
}

#[test]
fn modularized_file_is_rejected() {
    let mut doc = load("modularized.nt");
    let err = define_module(&mut doc).unwrap_err();
    assert!(matches!(
        err,
        ModuleError::AlreadyModularized { identity } if identity == "https://ex.org/a/module"
    ));
}

#[test]
fn malformed_input_is_a_document_error() {
    let err = sbol_document::parser::read(&common::fixture("malformed.ttl")).unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }));
    assert!(ModuleError::from(err).is_input_error());
}
