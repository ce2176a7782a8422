//! JSON-LD 1.1 serializer.
//!
//! Produces a single JSON-LD document with an `@context` of the declared
//! prefixes and a `@graph` array holding one node object per subject.

use serde_json::{json, Map, Value};

use super::{compact, PREFIXES};
use crate::model::{iris, Document, Statement, Term};

/// Serializes a document to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(document: &Document) -> Value {
    let mut ctx = Map::new();
    for (prefix, ns) in PREFIXES {
        ctx.insert((*prefix).to_owned(), json!(ns));
    }

    let graph: Vec<Value> = document
        .by_subject()
        .into_iter()
        .map(|(subject, statements)| node_to_json(subject, &statements))
        .collect();

    json!({
        "@context": Value::Object(ctx),
        "@graph": graph
    })
}

fn node_to_json(subject: &Term, statements: &[&Statement]) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(node_id(subject)));

    let types: Vec<Value> = statements
        .iter()
        .filter(|st| st.predicate == iris::RDF_TYPE)
        .filter_map(|st| st.object.as_iri())
        .map(|iri| json!(compact_or_full(iri)))
        .collect();
    if !types.is_empty() {
        node.insert("@type".to_owned(), Value::Array(types));
    }

    for st in statements {
        if st.predicate == iris::RDF_TYPE && st.object.as_iri().is_some() {
            continue;
        }
        let values = node
            .entry(compact_or_full(&st.predicate))
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(values) = values {
            values.push(object_to_json(&st.object));
        }
    }

    Value::Object(node)
}

fn compact_or_full(iri: &str) -> String {
    compact(iri).unwrap_or_else(|| iri.to_owned())
}

fn node_id(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri.clone(),
        Term::Blank(id) => format!("_:{id}"),
        Term::Literal(lit) => lit.lexical.clone(),
    }
}

fn object_to_json(term: &Term) -> Value {
    match term {
        Term::Iri(_) | Term::Blank(_) => json!({ "@id": node_id(term) }),
        Term::Literal(lit) => match (&lit.language, &lit.datatype) {
            (Some(lang), _) => json!({ "@value": lit.lexical, "@language": lang }),
            (None, Some(dt)) => json!({ "@value": lit.lexical, "@type": compact_or_full(dt) }),
            (None, None) => json!(lit.lexical),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Module;

    fn doc() -> Document {
        let mut doc = Document::from_statements(vec![
            Statement::new(Term::iri("https://ex.org/a/1"), iris::RDF_TYPE, Term::iri("http://sbols.org/v3#Sequence")),
            Statement::new(Term::iri("https://ex.org/a/1"), iris::SBOL_HAS_NAMESPACE, Term::iri("https://ex.org/a")),
            Statement::new(Term::iri("https://ex.org/a/1"), "http://sbols.org/v3#elements", Term::string("atgc")),
        ])
        .unwrap();
        let mut module = Module::new("https://ex.org/a");
        module.members = vec!["https://ex.org/a/1".into()];
        doc.add(&module).unwrap();
        doc
    }

    #[test]
    fn has_context_and_graph() {
        let value = to_json_ld(&doc());
        assert_eq!(value["@context"]["sbol"], json!("http://sbols.org/v3#"));
        assert_eq!(value["@graph"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn node_objects_carry_types_and_values() {
        let value = to_json_ld(&doc());
        let seq = &value["@graph"][0];
        assert_eq!(seq["@id"], json!("https://ex.org/a/1"));
        assert_eq!(seq["@type"], json!(["sbol:Sequence"]));
        assert_eq!(seq["sbol:elements"], json!(["atgc"]));
        assert_eq!(seq["sbol:hasNamespace"], json!([{ "@id": "https://ex.org/a" }]));
    }

    #[test]
    fn module_members_are_references() {
        let value = to_json_ld(&doc());
        let module = &value["@graph"][1];
        assert_eq!(module["@type"], json!(["sep054:Module"]));
        assert_eq!(module["sep054:members"], json!([{ "@id": "https://ex.org/a/1" }]));
    }
}
