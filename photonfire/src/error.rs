//! Runtime error type for generated service calls.

use thiserror::Error;

/// Errors surfaced by generated service methods and the client builder.
///
/// Transport and decode failures are forwarded transparently: their
/// `Display` and `source()` are those of the underlying `reqwest` or
/// `serde_json` error, untranslated.
///
/// ## Examples
///
/// ```rust
/// use photonfire::PhotonfireError;
///
/// let err = PhotonfireError::parameter("failed to create url");
/// assert_eq!(err.to_string(), "parameter error: failed to create url");
/// ```
#[derive(Debug, Error)]
pub enum PhotonfireError {
    /// The request URL could not be built from the base URL and path.
    #[error("parameter error: {0}")]
    ParameterError(String),

    /// API-level failure. Reserved; no generated code produces it yet.
    #[error("api error: {0}")]
    ApiError(String),

    /// The transport failed to deliver the request or read the body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode into the declared return type.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// A default header name or value was rejected by the builder.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl PhotonfireError {
    /// Creates a parameter error.
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::ParameterError(message.into())
    }

    /// Creates an API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::ApiError(message.into())
    }

    /// Returns the parameter error message, if this is one.
    pub fn parameter_message(&self) -> Option<&str> {
        match self {
            Self::ParameterError(message) => Some(message),
            _ => None,
        }
    }
}

/// Result alias used by generated service traits.
pub type Result<T, E = PhotonfireError> = std::result::Result<T, E>;
