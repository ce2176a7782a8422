//! Failures of namespace classification and module definition.

use sbol_document::DocumentError;
use thiserror::Error;

/// Failure of a module operation.
///
/// "Not a module" is not an error; see [`crate::Outcome::NotAModule`].
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The document has no top-level objects, so it has no namespace.
    #[error("document has no top-level objects")]
    EmptyDocument,

    /// The document already contains a module record.
    #[error("document already defines module {identity}")]
    AlreadyModularized {
        /// Identity of the existing module.
        identity: String,
    },

    /// Loading, extending, or saving the document failed.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl ModuleError {
    /// Returns true if the input could not be read or parsed.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ModuleError::Document(
                DocumentError::Read { .. }
                    | DocumentError::Parse { .. }
                    | DocumentError::UnsupportedInput { .. }
                    | DocumentError::UnknownExtension { .. }
                    | DocumentError::MissingNamespace { .. }
            )
        )
    }
}
