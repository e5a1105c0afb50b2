//! # Adapter Errors
//!
//! Errors owned by the adapter itself. Failures raised by serializer definitions,
//! property producers or action configurators are *not* represented here: they are
//! returned to the caller exactly as raised, in the caller's own error type.

/// Errors that can occur within the adapter itself.
#[derive(Debug, thiserror::Error)]
pub enum SirenError {
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Invalid context: {0}")]
    InvalidContext(#[source] serde_json::Error),
    #[error("Properties must serialize to an object, got {0}")]
    NotAnObject(&'static str),
}
