//! RDF/XML serializer.
//!
//! Writes one `rdf:Description` per subject. Predicates outside the declared
//! prefixes get a local `xmlns:ns0` declaration on their own element.
//! Blank nodes are relabelled `b0`, `b1`, ... by first appearance, since
//! `rdf:nodeID` must be an XML name and N-Triples labels need not be.

use std::collections::HashMap;

use super::{is_plain_name, PREFIXES};
use crate::model::{Document, Term};

/// Serializes a document to an RDF/XML string.
#[must_use]
pub fn to_rdf_xml(document: &Document) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rdf:RDF");
    for (prefix, ns) in PREFIXES {
        out.push_str(&format!("\n    xmlns:{prefix}=\"{}\"", escape_xml(ns)));
    }
    out.push_str(">\n");

    let mut blanks = BlankIds::default();
    for (subject, statements) in document.by_subject() {
        out.push_str(&format!(
            "  <rdf:Description {}>\n",
            node_attr(subject, "about", &mut blanks)
        ));
        for st in statements {
            let (qname, decl) = qualified_name(&st.predicate);
            out.push_str(&format!("    <{qname}{decl}"));
            match &st.object {
                Term::Iri(_) | Term::Blank(_) => {
                    out.push_str(&format!(" {}/>\n", node_attr(&st.object, "resource", &mut blanks)));
                }
                Term::Literal(lit) => {
                    if let Some(lang) = &lit.language {
                        out.push_str(&format!(" xml:lang=\"{}\"", escape_xml(lang)));
                    } else if let Some(dt) = &lit.datatype {
                        out.push_str(&format!(" rdf:datatype=\"{}\"", escape_xml(dt)));
                    }
                    out.push_str(&format!(">{}</{qname}>\n", escape_xml(&lit.lexical)));
                }
            }
        }
        out.push_str("  </rdf:Description>\n");
    }

    out.push_str("</rdf:RDF>\n");
    out
}

/// Blank node labels renamed to XML-safe ids in first-appearance order.
#[derive(Default)]
struct BlankIds<'a> {
    ids: HashMap<&'a str, String>,
}

impl<'a> BlankIds<'a> {
    fn get(&mut self, label: &'a str) -> &str {
        let next = self.ids.len();
        self.ids.entry(label).or_insert_with(|| format!("b{next}"))
    }
}

/// `rdf:about="..."` / `rdf:resource="..."` for IRIs, `rdf:nodeID="..."` for blank nodes.
fn node_attr<'a>(term: &'a Term, iri_attr: &str, blanks: &mut BlankIds<'a>) -> String {
    match term {
        Term::Iri(iri) => format!("rdf:{iri_attr}=\"{}\"", escape_xml(iri)),
        Term::Blank(id) => format!("rdf:nodeID=\"{}\"", blanks.get(id)),
        Term::Literal(lit) => format!("rdf:{iri_attr}=\"{}\"", escape_xml(&lit.lexical)),
    }
}

/// Splits a predicate IRI into an element name and, when no declared prefix
/// covers it, an inline namespace declaration.
fn qualified_name(iri: &str) -> (String, String) {
    if let Some((prefix, local)) = PREFIXES.iter().find_map(|(prefix, ns)| {
        iri.strip_prefix(ns)
            .filter(|local| is_plain_name(local))
            .map(|local| (prefix, local))
    }) {
        return (format!("{prefix}:{local}"), String::new());
    }
    let split = iri.rfind(|c: char| c == '#' || c == '/').map_or(0, |i| i + 1);
    let (ns, local) = iri.split_at(split);
    (
        format!("ns0:{local}"),
        format!(" xmlns:ns0=\"{}\"", escape_xml(ns)),
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FileType;
    use crate::model::{iris, Literal, Statement};
    use crate::parser::parse_str;

    fn doc() -> Document {
        Document::from_statements(vec![
            Statement::new(Term::iri("https://ex.org/a/1"), iris::RDF_TYPE, Term::iri("http://sbols.org/v3#Sequence")),
            Statement::new(Term::iri("https://ex.org/a/1"), iris::SBOL_HAS_NAMESPACE, Term::iri("https://ex.org/a")),
            Statement::new(Term::iri("https://ex.org/a/1"), "http://purl.org/dc/terms/title", Term::string("A & B")),
            Statement::new(
                Term::iri("https://ex.org/a/1"),
                "http://sbols.org/v3#description",
                Term::Literal(Literal {
                    lexical: "promoter".into(),
                    datatype: None,
                    language: Some("en".into()),
                }),
            ),
            Statement::new(Term::iri("https://ex.org/a/1"), "http://sbols.org/v3#hasFeature", Term::Blank("f1".into())),
        ])
        .unwrap()
    }

    #[test]
    fn escapes_markup() {
        let xml = to_rdf_xml(&doc());
        assert!(xml.contains("A &amp; B"));
        assert!(xml.contains("xmlns:ns0=\"http://purl.org/dc/terms/\""));
        assert!(xml.contains("rdf:nodeID=\"b0\""));
    }

    #[test]
    fn reparses_to_same_top_level_objects() {
        let original = doc();
        let back = parse_str(&to_rdf_xml(&original), FileType::RdfXml).unwrap();
        assert_eq!(back.objects(), original.objects());
        assert_eq!(back.statements().len(), original.statements().len());
    }

    #[test]
    fn blank_labels_starting_with_digits_reparse() {
        let nt = concat!(
            "<https://ex.org/a/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://sbols.org/v3#Component> .\n",
            "<https://ex.org/a/1> <http://sbols.org/v3#hasNamespace> <https://ex.org/a> .\n",
            "<https://ex.org/a/1> <http://sbols.org/v3#hasFeature> _:1f .\n",
            "<https://ex.org/a/1> <http://sbols.org/v3#hasFeature> _:2f .\n",
            "_:1f <http://sbols.org/v3#displayId> \"f\" .\n",
            "_:2f <http://sbols.org/v3#displayId> \"g\" .\n",
        );
        let original = parse_str(nt, FileType::NTriples).unwrap();
        let xml = to_rdf_xml(&original);
        assert!(xml.contains("<rdf:Description rdf:nodeID=\"b0\">"));
        assert!(xml.contains("<rdf:Description rdf:nodeID=\"b1\">"));
        assert!(!xml.contains("nodeID=\"1f\""));

        let back = parse_str(&xml, FileType::RdfXml).unwrap();
        assert_eq!(back.objects(), original.objects());
        assert_eq!(back.statements().len(), original.statements().len());
        let features: Vec<_> = back
            .statements()
            .iter()
            .filter(|s| s.predicate == "http://sbols.org/v3#hasFeature")
            .collect();
        assert_eq!(features.len(), 2);
        assert_ne!(features[0].object, features[1].object);
        assert_eq!(
            back.statements()
                .iter()
                .filter(|s| matches!(s.subject, Term::Blank(_)))
                .count(),
            2
        );
    }
}
