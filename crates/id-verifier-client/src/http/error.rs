/*
[INPUT]:  Error sources (HTTP transport, JSON decoding, verifier rejections)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the verifier client
#[derive(Error, Debug)]
pub enum VerifierError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Prove endpoint rejected the proof or returned an empty body
    ///
    /// The two cases carry the same error; callers cannot tell a
    /// rejection apart from an empty success.
    #[error("Unable to authorize")]
    Authorization,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wallet provider failed to produce a proof
    #[error("Wallet provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VerifierError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, VerifierError::Http(_))
    }

    /// Check if error indicates an authorization failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, VerifierError::Authorization)
    }
}

/// Result type alias for verifier operations
pub type Result<T> = std::result::Result<T, VerifierError>;
