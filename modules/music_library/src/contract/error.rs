//! Contract error types for the music library
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Music library domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// No row matched the requested id
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (composer, work, recording)
        resource: String,
        /// Requested identifier
        id: String,
    },

    /// The store rejected an insert or returned no row for it
    #[error("failed to create {resource}")]
    WriteFailed {
        /// Resource type
        resource: String,
    },

    /// Required input missing or malformed
    #[error("validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// A store call failed or returned an undecodable row
    #[error("store error: {message}")]
    Store {
        /// Error chain reported by the store client
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn write_failed(resource: &str) -> Self {
        Self::WriteFailed {
            resource: resource.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
