//! Error types for the matterkit library
//!
//! Every fallible operation returns [`MatterError`]. Structural oddities in a
//! document (a missing closing delimiter, a `----` opener, an empty block) are
//! not errors; they degrade to a document with less or no front matter.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MatterError {
    /// Input cannot be turned into a document
    #[error("Invalid input: {reason}")]
    InputType { reason: String },

    /// No engine registered under the requested name or its alias
    #[error("Front matter engine \"{name}\" is not registered")]
    UnregisteredEngine { name: String },

    /// The engine lacks the requested capability
    #[error("Operation not supported by the \"{language}\" engine: {operation}")]
    UnsupportedOperation { language: String, operation: String },

    /// The engine failed to parse the front matter block
    #[error("Invalid {language} front matter: {message}")]
    MetadataSyntax { language: String, message: String },

    /// The engine failed to serialize front matter data
    #[error("Cannot serialize {language} front matter: {message}")]
    Serialization { language: String, message: String },

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MatterError>;

impl MatterError {
    /// Create a new input type error
    pub fn input_type(reason: impl Into<String>) -> Self {
        Self::InputType {
            reason: reason.into(),
        }
    }

    /// Create a new unregistered engine error
    pub fn unregistered_engine(name: impl Into<String>) -> Self {
        Self::UnregisteredEngine { name: name.into() }
    }

    /// Create a new unsupported operation error
    pub fn unsupported_operation(
        language: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperation {
            language: language.into(),
            operation: operation.into(),
        }
    }

    /// Create a new metadata syntax error, keeping the engine's message
    pub fn metadata_syntax(language: impl Into<String>, message: impl ToString) -> Self {
        Self::MetadataSyntax {
            language: language.into(),
            message: message.to_string(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(language: impl Into<String>, message: impl ToString) -> Self {
        Self::Serialization {
            language: language.into(),
            message: message.to_string(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Whether the error came from the content of a document rather than from
    /// the environment (file system, engine registration)
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::InputType { .. } | Self::MetadataSyntax { .. } | Self::Serialization { .. }
        )
    }
}

impl Clone for MatterError {
    fn clone(&self) -> Self {
        match self {
            // std::io::Error doesn't implement Clone
            Self::Io(io_err) => Self::Io(std::io::Error::new(io_err.kind(), io_err.to_string())),
            Self::InputType { reason } => Self::InputType {
                reason: reason.clone(),
            },
            Self::UnregisteredEngine { name } => Self::UnregisteredEngine { name: name.clone() },
            Self::UnsupportedOperation {
                language,
                operation,
            } => Self::UnsupportedOperation {
                language: language.clone(),
                operation: operation.clone(),
            },
            Self::MetadataSyntax { language, message } => Self::MetadataSyntax {
                language: language.clone(),
                message: message.clone(),
            },
            Self::Serialization { language, message } => Self::Serialization {
                language: language.clone(),
                message: message.clone(),
            },
            Self::FileNotFound { path } => Self::FileNotFound { path: path.clone() },
            Self::PermissionDenied { path } => Self::PermissionDenied { path: path.clone() },
        }
    }
}
