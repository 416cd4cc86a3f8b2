use std::fmt;
use thiserror::Error;

/// The error type for rayvision operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
    api: Option<ApiFailure>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials are missing or empty
    CredentialInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// The request payload cannot be signed or serialized
    SigningInput,

    /// Network level failure while sending the request
    Transport,

    /// The vendor answered with a non-success envelope code
    Api,

    /// The response body is not a valid envelope
    MalformedResponse,

    /// Unexpected errors
    Unexpected,
}

/// Details of a failed vendor call, kept verbatim from the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ApiFailure {
    code: i64,
    message: String,
    url: String,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            api: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Vendor error code, only set for [`ErrorKind::Api`].
    pub fn code(&self) -> Option<i64> {
        self.api.as_ref().map(|v| v.code)
    }

    /// Vendor error message, only set for [`ErrorKind::Api`].
    pub fn api_message(&self) -> Option<&str> {
        self.api.as_ref().map(|v| v.message.as_str())
    }

    /// The request url that failed, only set for [`ErrorKind::Api`].
    pub fn url(&self) -> Option<&str> {
        self.api.as_ref().map(|v| v.url.as_str())
    }

    /// Check if this error may go away by sending the same request again.
    pub fn is_temporary(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport | ErrorKind::Api)
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a signing input error
    pub fn signing_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningInput, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a malformed response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an api error from a failed response envelope.
    ///
    /// The rendered message carries code, message and url so that logging
    /// the error alone is enough to diagnose the failure.
    pub fn api(code: i64, message: impl Into<String>, url: impl Into<String>) -> Self {
        let message = message.into();
        let url = url.into();
        Self {
            kind: ErrorKind::Api,
            message: format!("Error code: {code}, Error message: {message}, URL: {url}"),
            source: None,
            api: Some(ApiFailure { code, message, url }),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::SigningInput => write!(f, "invalid signing input"),
            ErrorKind::Transport => write!(f, "transport failure"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::signing_input(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::signing_input(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::signing_input(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::signing_input(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
