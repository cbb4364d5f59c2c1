//! Document read failures.
//!
//! These never reach the protocol layer as faults. Tools render them with
//! [`DocumentError::to_guidance`] and return the text as the call result.

use thiserror::Error;

use super::info::DocumentInfo;

/// Errors that can occur while reading a served document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file is not at its well-known path.
    #[error("{document} not found at {path}")]
    NotFound {
        document: DocumentInfo,
        path: String,
    },

    /// The file exists but is not valid JSON.
    #[error("invalid JSON in {document} at {path}: {source}")]
    Malformed {
        document: DocumentInfo,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any other failure to read the file (permissions, I/O, encoding).
    #[error("could not read {document} at {path}: {source}")]
    Unreadable {
        document: DocumentInfo,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Stable tag for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "resource_not_found",
            Self::Malformed { .. } => "malformed_resource",
            Self::Unreadable { .. } => "resource_unreadable",
        }
    }

    /// The document that failed.
    pub fn document(&self) -> DocumentInfo {
        match self {
            Self::NotFound { document, .. }
            | Self::Malformed { document, .. }
            | Self::Unreadable { document, .. } => *document,
        }
    }

    /// Render the markdown guidance returned to the calling agent.
    pub fn to_guidance(&self) -> String {
        match self {
            Self::NotFound { document, path } => format!(
                "# Error: {title} not found\n\
                 \n\
                 The {document} could not be found at the expected location.\n\
                 Please ensure the file exists at: {path}\n\
                 \n\
                 This file should contain {purpose}.",
                title = document.title(),
                purpose = document.purpose,
            ),
            Self::Malformed {
                document, source, ..
            } => format!(
                "# Error: Invalid JSON in {document}\n\
                 \n\
                 The {document} contains invalid JSON:\n\
                 {source}\n\
                 \n\
                 Please check the JSON syntax and try again."
            ),
            Self::Unreadable {
                document, source, ..
            } => format!(
                "# Error: Could not read {document}\n\
                 \n\
                 An error occurred while reading the {document}:\n\
                 {source}\n\
                 \n\
                 Please check the file permissions and try again."
            ),
        }
    }
}
