//! Error types for the page model, renderer and project files

use crate::element::ElementId;
use thiserror::Error;

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, saving or exporting a page
///
/// Every variant is recoverable: a failed operation leaves the in-memory
/// `Page` exactly as it was before the call.
#[derive(Error, Debug)]
pub enum Error {
    /// The referenced element does not exist (stale id or already deleted)
    #[error("Element {0} not found")]
    NotFound(ElementId),

    /// A style field was rejected before merging
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// File write/read failure during export, preview, save or open
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed structured project file
    #[error("Invalid project file: {0}")]
    ProjectFormat(#[from] serde_json::Error),

    /// A parsed project whose contents break page invariants
    #[error("Project file is inconsistent: {0}")]
    InconsistentProject(String),

    /// A project file we recognise but cannot reconstruct
    #[error("Unsupported project format: {0}")]
    UnsupportedFormat(String),

    /// The platform opener failed to launch a preview
    #[error("Failed to open preview: {0}")]
    PreviewError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Name of the field that failed validation, if this is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
