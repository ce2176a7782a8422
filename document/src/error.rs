//! Errors raised while loading, building, or saving a document.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::FileType;

/// Failure of a document operation.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input file could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed in the expected serialization.
    #[error("malformed {file_type} input: {message}")]
    Parse {
        /// Serialization the input was parsed as.
        file_type: FileType,
        /// Parser diagnostic.
        message: String,
    },

    /// The serialization can be written but not read.
    #[error("{file_type} is not supported as an input format")]
    UnsupportedInput {
        /// The rejected serialization.
        file_type: FileType,
    },

    /// The file type could not be inferred from the path extension.
    #[error("cannot infer an SBOL file type from {}", .path.display())]
    UnknownExtension {
        /// Offending path.
        path: PathBuf,
    },

    /// A top-level object has no `sbol:hasNamespace`.
    #[error("top-level object {identity} has no sbol:hasNamespace")]
    MissingNamespace {
        /// Identity of the object.
        identity: String,
    },

    /// An identity already names a top-level object.
    #[error("document already contains a top-level object {identity}")]
    DuplicateIdentity {
        /// The conflicting identity.
        identity: String,
    },

    /// JSON-LD rendering failed.
    #[error("failed to render JSON-LD")]
    Json(#[from] serde_json::Error),
}
