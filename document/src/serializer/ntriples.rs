//! N-Triples serializer.
//!
//! One statement per line, absolute IRIs. The sorted variant orders lines
//! lexicographically and drops duplicates, which makes the output stable
//! across runs and friendly to diffs.

use crate::model::Document;

/// Serializes a document to N-Triples in statement order.
#[must_use]
pub fn to_ntriples(document: &Document) -> String {
    let mut out = String::new();
    for st in document.statements() {
        out.push_str(&st.to_string());
        out.push('\n');
    }
    out
}

/// Serializes a document to N-Triples with sorted, deduplicated lines.
#[must_use]
pub fn to_sorted_ntriples(document: &Document) -> String {
    let mut lines: Vec<String> = document.statements().iter().map(ToString::to_string).collect();
    lines.sort();
    lines.dedup();
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
