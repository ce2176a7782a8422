//! Module synthesis.

use sbol_document::{Document, Module};

use crate::classify::UniformNamespace;
use crate::error::ModuleError;

/// Builds a module over every top-level object and appends it to `document`.
///
/// `members` lists object identities in document order, captured before the
/// module itself is added. The caller establishes uniformity: the namespace
/// can only come from a uniform [`crate::Classification`], and it is not
/// re-checked here. Calling this twice on one document fails on the second
/// call because the module identity is already taken.
///
/// Returns the module that was appended.
///
/// # Errors
///
/// Returns [`ModuleError::Document`] wrapping
/// [`sbol_document::DocumentError::DuplicateIdentity`] if
/// `<namespace>/module` already names a top-level object.
pub fn build_module(
    document: &mut Document,
    namespace: UniformNamespace,
) -> Result<Module, ModuleError> {
    let mut module = Module::new(namespace.into_inner());
    module.members = document
        .objects()
        .iter()
        .map(|o| o.identity.clone())
        .collect();
    document.add(&module)?;
    Ok(module)
}
