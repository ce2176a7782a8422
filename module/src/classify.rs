//! Namespace classification of top-level objects.

use sbol_document::TopLevelObject;

use crate::error::ModuleError;

/// Result of comparing every object's namespace with the first object's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    is_uniform: bool,
    namespace: String,
}

impl Classification {
    /// True if every object shares the first object's namespace.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.is_uniform
    }

    /// Namespace of the first object.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the shared namespace if the classification is uniform.
    #[must_use]
    pub fn into_uniform(self) -> Option<UniformNamespace> {
        self.is_uniform.then_some(UniformNamespace(self.namespace))
    }
}

/// A namespace known to be shared by every top-level object of a document.
///
/// Only obtainable from a uniform [`Classification`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformNamespace(String);

impl UniformNamespace {
    /// Consumes the wrapper, returning the namespace IRI.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Checks whether all objects share the namespace of the first one.
///
/// Comparison is exact, case-sensitive string equality against the object at
/// position zero. Stops at the first mismatch.
///
/// # Errors
///
/// Returns [`ModuleError::EmptyDocument`] if `objects` is empty.
pub fn classify(objects: &[TopLevelObject]) -> Result<Classification, ModuleError> {
    let (first, rest) = objects.split_first().ok_or(ModuleError::EmptyDocument)?;
    let is_uniform = rest.iter().all(|o| o.namespace == first.namespace);
    Ok(Classification {
        is_uniform,
        namespace: first.namespace.clone(),
    })
}

/// Number of top-level objects in one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceCount {
    /// The namespace IRI.
    pub namespace: String,
    /// Objects carrying it.
    pub objects: usize,
}

/// Distinct namespaces with their object counts, in first-appearance order.
#[must_use]
pub fn distinct_namespaces(objects: &[TopLevelObject]) -> Vec<NamespaceCount> {
    let mut counts: Vec<NamespaceCount> = Vec::new();
    for object in objects {
        match counts.iter_mut().find(|c| c.namespace == object.namespace) {
            Some(count) => count.objects += 1,
            None => counts.push(NamespaceCount {
                namespace: object.namespace.clone(),
                objects: 1,
            }),
        }
    }
    counts
}
