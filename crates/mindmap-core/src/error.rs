//! Generator error types.

use thiserror::Error;

/// Errors that can occur during mind-map generation.
///
/// Generation either succeeds with a complete tree or fails with one of
/// these; no partial tree is ever returned. Patching existing trees is
/// infallible and has no error type.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A linguistic annotation primitive failed
    #[error("Annotation failed: {0}")]
    Annotation(#[from] mindmap_nlp::AnnotatorError),
}
