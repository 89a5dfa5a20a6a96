//! Error types for the Turntable viewer.

use thiserror::Error;

/// Errors while decoding a scene or settings document.
///
/// Every variant carries a human-readable cause. A parse failure never
/// yields a partial result.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: String },

    #[error("Invalid binary container: {reason}")]
    InvalidContainer { reason: String },

    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid value for '{field}' in {context}: {reason}")]
    InvalidField {
        field: String,
        context: String,
        reason: String,
    },

    #[error("{kind} index {index} is out of range ({count} available)")]
    DanglingIndex {
        kind: String,
        index: usize,
        count: usize,
    },

    #[error("Node {index} is referenced more than once in the hierarchy")]
    NodeCycle { index: usize },

    #[error("Scene hierarchy exceeds the maximum depth of {max_depth}")]
    TooDeep { max_depth: usize },

    #[error("Unsupported {what}: {detail}")]
    Unsupported { what: String, detail: String },
}

impl ParseError {
    /// Create a missing-field error.
    pub fn missing(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create an invalid-field error.
    pub fn invalid(
        field: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field: field.into(),
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-container error.
    pub fn container(reason: impl Into<String>) -> Self {
        Self::InvalidContainer {
            reason: reason.into(),
        }
    }

    /// Create a dangling-index error.
    pub fn dangling(kind: impl Into<String>, index: usize, count: usize) -> Self {
        Self::DanglingIndex {
            kind: kind.into(),
            index,
            count,
        }
    }
}

/// A file was rejected before any decoding took place.
#[derive(Debug, Error)]
#[error("Unsupported file '{file_name}': please drop a {}", describe_extensions(.accepted))]
pub struct UnsupportedFileError {
    /// Name of the rejected file.
    pub file_name: String,
    /// Extensions the registry accepts, without the leading dot.
    pub accepted: Vec<String>,
}

impl UnsupportedFileError {
    /// Create an error for `file_name`, listing the accepted extensions.
    pub fn new<I, S>(file_name: impl Into<String>, accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file_name: file_name.into(),
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }
}

fn describe_extensions(accepted: &[String]) -> String {
    let dotted: Vec<String> = accepted.iter().map(|ext| format!(".{ext}")).collect();
    match dotted.as_slice() {
        [] => "supported file".to_string(),
        [only] => format!("{only} file"),
        [head @ .., last] => format!("{} or {} file", head.join(", "), last),
    }
}

/// Errors while ingesting a scene file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedFileError),

    #[error("Could not parse scene: {0}")]
    Parse(#[from] ParseError),

    #[error("Could not read file: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors while selecting a camera.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Camera {index} does not exist ({count} available)")]
    CameraOutOfRange { index: usize, count: usize },

    #[error("No scene is loaded")]
    NoScene,
}
