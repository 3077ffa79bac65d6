//! Error types for creational-core

use thiserror::Error;

/// The main error type for creational-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was rejected by strict validation
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The factory does not know how to build the requested category
    #[error("Unsupported category '{category}'")]
    UnsupportedCategory { category: String },

    /// Configuration could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for creational-core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new unsupported category error
    pub fn unsupported_category(category: impl Into<String>) -> Self {
        Self::UnsupportedCategory {
            category: category.into(),
        }
    }
}
