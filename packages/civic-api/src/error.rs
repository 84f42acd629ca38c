//! Error types for the civic API client.

use thiserror::Error;

/// Result type for civic API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Civic API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration error (no base URL while a real call is attempted)
    #[error("API base URL is not configured")]
    MissingBaseUrl,

    /// Network error (connection failed, request could not be built)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Unknown governorate, party, etc. Mock generators raise this on purpose.
    #[error("{0} not found")]
    NotFound(String),

    /// Caller input that cannot be turned into a request
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Failures of the remote call itself. These are the ones the dispatcher
    /// may recover from by serving mock data.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::MissingBaseUrl
                | ApiError::Network(_)
                | ApiError::Status { .. }
                | ApiError::Decode(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
