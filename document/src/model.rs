//! Core SBOL3 document model.
//!
//! A [`Document`] is the ordered list of RDF statements read from a file,
//! plus an index of the top-level objects those statements describe. All
//! values are owned; serializers and the module builder borrow them.

use std::collections::HashMap;
use std::fmt;

use crate::error::DocumentError;

/// An RDF node in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, identified by its label without the `_:` prefix.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a plain string literal (implicitly `xsd:string`).
    pub fn string(lexical: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        })
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form, unescaped.
    pub lexical: String,
    /// Datatype IRI; `None` for `xsd:string` and language-tagged strings.
    pub datatype: Option<String>,
    /// Language tag, if any.
    pub language: Option<String>,
}

impl fmt::Display for Term {
    /// Writes the term in N-Triples syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(id) => write!(f, "_:{id}"),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", escape_literal(&lit.lexical))?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")
                } else if let Some(datatype) = &lit.datatype {
                    write!(f, "^^<{datatype}>")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Escapes a lexical form for N-Triples and Turtle short strings.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// A single RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Subject: an IRI or blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object: any term.
    pub object: Term,
}

impl Statement {
    /// Creates a statement.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Statement {
    /// Writes the statement as one N-Triples line, without the newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// A design object that exists independently in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelObject {
    /// Full IRI of the object.
    pub identity: String,
    /// Value of `sbol:hasNamespace`.
    pub namespace: String,
    /// All `rdf:type` IRIs asserted for the object, in statement order.
    pub types: Vec<String>,
}

impl TopLevelObject {
    /// Returns true if this object is typed as a Module.
    #[must_use]
    pub fn is_module(&self) -> bool {
        self.types.iter().any(|t| t == iris::MODULE)
    }
}

/// A grouping record referencing every top-level object of one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// `<namespace>/module`.
    pub identity: String,
    /// Last path segment of the identity.
    pub display_id: String,
    /// The namespace shared by every member.
    pub namespace: String,
    /// Identities of the member objects, in document order.
    pub members: Vec<String>,
}

impl Module {
    /// Display id given to every synthesized module.
    pub const DISPLAY_ID: &'static str = "module";

    /// Creates an empty module for `namespace`.
    ///
    /// The identity is `namespace + "/module"`, concatenated verbatim.
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            identity: format!("{namespace}/{}", Self::DISPLAY_ID),
            display_id: Self::DISPLAY_ID.to_owned(),
            namespace,
            members: Vec::new(),
        }
    }

    /// Renders the module as RDF statements.
    ///
    /// Member statements follow `members` order.
    #[must_use]
    pub fn to_statements(&self) -> Vec<Statement> {
        let subject = Term::iri(&self.identity);
        let mut out = Vec::with_capacity(3 + self.members.len());
        out.push(Statement::new(subject.clone(), iris::RDF_TYPE, Term::iri(iris::MODULE)));
        out.push(Statement::new(
            subject.clone(),
            iris::SBOL_DISPLAY_ID,
            Term::string(&self.display_id),
        ));
        out.push(Statement::new(
            subject.clone(),
            iris::SBOL_HAS_NAMESPACE,
            Term::iri(&self.namespace),
        ));
        for member in &self.members {
            out.push(Statement::new(
                subject.clone(),
                iris::MODULE_MEMBERS,
                Term::iri(member),
            ));
        }
        out
    }

    /// Returns the top-level index entry for this module.
    #[must_use]
    pub fn to_top_level(&self) -> TopLevelObject {
        TopLevelObject {
            identity: self.identity.clone(),
            namespace: self.namespace.clone(),
            types: vec![iris::MODULE.to_owned()],
        }
    }
}

/// An SBOL3 document: ordered statements plus the top-level objects they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    statements: Vec<Statement>,
    objects: Vec<TopLevelObject>,
}

#[derive(Default)]
struct SubjectSummary {
    types: Vec<String>,
    namespace: Option<String>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from parsed statements.
    ///
    /// Top-level objects are IRI subjects typed with a top-level class or
    /// carrying `sbol:hasNamespace`. They are indexed in the order their
    /// subject first appears in `statements`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingNamespace`] if a subject typed with a
    /// top-level class has no `sbol:hasNamespace`.
    pub fn from_statements(statements: Vec<Statement>) -> Result<Self, DocumentError> {
        let mut order: Vec<&str> = Vec::new();
        let mut summaries: HashMap<&str, SubjectSummary> = HashMap::new();

        for st in &statements {
            let Term::Iri(subject) = &st.subject else {
                continue;
            };
            let summary = summaries.entry(subject.as_str()).or_insert_with(|| {
                order.push(subject.as_str());
                SubjectSummary::default()
            });
            match (st.predicate.as_str(), &st.object) {
                (iris::RDF_TYPE, Term::Iri(class)) => summary.types.push(class.clone()),
                (iris::SBOL_HAS_NAMESPACE, Term::Iri(ns)) if summary.namespace.is_none() => {
                    summary.namespace = Some(ns.clone());
                }
                (iris::SBOL_HAS_NAMESPACE, Term::Literal(lit)) if summary.namespace.is_none() => {
                    summary.namespace = Some(lit.lexical.clone());
                }
                _ => {}
            }
        }

        let mut objects = Vec::new();
        for subject in order {
            let Some(summary) = summaries.remove(subject) else {
                continue;
            };
            let typed_top_level = summary.types.iter().any(|t| iris::is_top_level_type(t));
            match summary.namespace {
                Some(namespace) => objects.push(TopLevelObject {
                    identity: subject.to_owned(),
                    namespace,
                    types: summary.types,
                }),
                None if typed_top_level => {
                    return Err(DocumentError::MissingNamespace {
                        identity: subject.to_owned(),
                    });
                }
                None => {}
            }
        }

        Ok(Self {
            statements,
            objects,
        })
    }

    /// Top-level objects in document order.
    #[must_use]
    pub fn objects(&self) -> &[TopLevelObject] {
        &self.objects
    }

    /// Every statement in the document, in insertion order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of top-level objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the document has no top-level objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Looks up a top-level object by identity. Returns `None` if not found.
    #[must_use]
    pub fn find(&self, identity: &str) -> Option<&TopLevelObject> {
        self.objects.iter().find(|o| o.identity == identity)
    }

    /// Returns true if a top-level object with this identity exists.
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.find(identity).is_some()
    }

    /// Appends a module as a new top-level object.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::DuplicateIdentity`] if the module identity
    /// already names a top-level object.
    pub fn add(&mut self, module: &Module) -> Result<(), DocumentError> {
        if self.contains(&module.identity) {
            return Err(DocumentError::DuplicateIdentity {
                identity: module.identity.clone(),
            });
        }
        self.statements.extend(module.to_statements());
        self.objects.push(module.to_top_level());
        Ok(())
    }

    /// Groups statements by subject, subjects in first-appearance order.
    #[must_use]
    pub fn by_subject(&self) -> Vec<(&Term, Vec<&Statement>)> {
        let mut index: HashMap<&Term, usize> = HashMap::new();
        let mut groups: Vec<(&Term, Vec<&Statement>)> = Vec::new();
        for st in &self.statements {
            let slot = *index.entry(&st.subject).or_insert_with(|| {
                groups.push((&st.subject, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(st);
        }
        groups
    }
}

/// Standard IRI constants for the SBOL3 vocabulary and its neighbours.
pub mod iris {
    /// SBOL3 namespace.
    pub const SBOL: &str = "http://sbols.org/v3#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// PROV-O namespace.
    pub const PROV: &str = "http://www.w3.org/ns/prov#";
    /// Ontology of units of Measure namespace.
    pub const OM: &str = "http://www.ontology-of-units-of-measure.org/resource/om-2/";
    /// Module/package extension namespace.
    pub const SEP_054: &str = "http://sbols.org/SEP054#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `sbol:hasNamespace`.
    pub const SBOL_HAS_NAMESPACE: &str = "http://sbols.org/v3#hasNamespace";
    /// `sbol:displayId`.
    pub const SBOL_DISPLAY_ID: &str = "http://sbols.org/v3#displayId";

    /// Class of synthesized modules.
    pub const MODULE: &str = "http://sbols.org/SEP054#Module";
    /// Class of packages (a module's enclosing record).
    pub const PACKAGE: &str = "http://sbols.org/SEP054#Package";
    /// Property linking a module to each member identity.
    pub const MODULE_MEMBERS: &str = "http://sbols.org/SEP054#members";

    /// Classes whose instances are top-level objects.
    pub const TOP_LEVEL_TYPES: &[&str] = &[
        "http://sbols.org/v3#Sequence",
        "http://sbols.org/v3#Component",
        "http://sbols.org/v3#Collection",
        "http://sbols.org/v3#Experiment",
        "http://sbols.org/v3#CombinatorialDerivation",
        "http://sbols.org/v3#Implementation",
        "http://sbols.org/v3#ExperimentalData",
        "http://sbols.org/v3#Model",
        "http://sbols.org/v3#Attachment",
        "http://www.w3.org/ns/prov#Activity",
        "http://www.w3.org/ns/prov#Agent",
        "http://www.w3.org/ns/prov#Plan",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/SingularUnit",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/UnitMultiplication",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/UnitDivision",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/UnitExponentiation",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/PrefixedUnit",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/SIPrefix",
        "http://www.ontology-of-units-of-measure.org/resource/om-2/BinaryPrefix",
        MODULE,
        PACKAGE,
    ];

    /// Returns true if `class` is one of [`TOP_LEVEL_TYPES`].
    #[must_use]
    pub fn is_top_level_type(class: &str) -> bool {
        TOP_LEVEL_TYPES.contains(&class)
    }
}
