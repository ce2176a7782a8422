//! Turtle 1.1 serializer.
//!
//! Emits the prefix block, then one paragraph per subject in the order
//! subjects first appear in the document.

use super::{compact, PREFIXES};
use crate::model::{escape_literal, iris, Document, Term};

/// Serializes a document to a Turtle string.
#[must_use]
pub fn to_turtle(document: &Document) -> String {
    let mut out = String::new();

    for (prefix, ns) in PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    out.push('\n');

    for (subject, statements) in document.by_subject() {
        out.push_str(&term_to_turtle(subject));
        let mut first = true;
        for st in statements {
            out.push_str(if first { "\n    " } else { " ;\n    " });
            first = false;
            if st.predicate == iris::RDF_TYPE {
                out.push('a');
            } else {
                out.push_str(&iri_to_turtle(&st.predicate));
            }
            out.push(' ');
            out.push_str(&term_to_turtle(&st.object));
        }
        out.push_str(" .\n\n");
    }

    out
}

fn iri_to_turtle(iri: &str) -> String {
    compact(iri).unwrap_or_else(|| format!("<{iri}>"))
}

fn term_to_turtle(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri_to_turtle(iri),
        Term::Blank(id) => format!("_:{id}"),
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_literal(&lit.lexical));
            match (&lit.language, &lit.datatype) {
                (Some(lang), _) => format!("{quoted}@{lang}"),
                (None, Some(dt)) => format!("{quoted}^^{}", iri_to_turtle(dt)),
                (None, None) => quoted,
            }
        }
    }
}
