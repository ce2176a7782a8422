//! Serialization variants and their canonical file extensions.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// A serialization of an SBOL3 document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    /// N-Triples with lines sorted and deduplicated. Stable across runs.
    #[default]
    SortedNTriples,
    /// N-Triples in statement order.
    NTriples,
    /// Turtle 1.1.
    Turtle,
    /// RDF/XML.
    RdfXml,
    /// JSON-LD 1.1. Output only.
    JsonLd,
}

impl FileType {
    /// Short name of the serialization.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FileType::SortedNTriples => "sorted nt",
            FileType::NTriples => "nt",
            FileType::Turtle => "ttl",
            FileType::RdfXml => "xml",
            FileType::JsonLd => "json-ld",
        }
    }

    /// Canonical file extension, including the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            FileType::SortedNTriples | FileType::NTriples => ".nt",
            FileType::Turtle => ".ttl",
            FileType::RdfXml => ".xml",
            FileType::JsonLd => ".jsonld",
        }
    }

    /// Returns false for serializations that can only be written.
    #[must_use]
    pub fn is_readable(self) -> bool {
        !matches!(self, FileType::JsonLd)
    }

    /// Infers the serialization of an input file from its extension.
    ///
    /// Returns `None` for unknown or missing extensions.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<FileType> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "nt" => Some(FileType::NTriples),
            "ttl" => Some(FileType::Turtle),
            "xml" | "rdf" => Some(FileType::RdfXml),
            "jsonld" | "json" => Some(FileType::JsonLd),
            _ => None,
        }
    }

    /// Returns `base` with this type's extension appended, unless `base`
    /// already ends with it.
    #[must_use]
    pub fn output_path(self, base: &Path) -> PathBuf {
        let ext = self.extension();
        if base.to_string_lossy().ends_with(ext) {
            return base.to_path_buf();
        }
        let mut name = OsString::from(base.as_os_str());
        name.push(ext);
        PathBuf::from(name)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
