/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Remote failures are classified by status code but never retried or
/// replaced with fallback values; the caller always receives the failure.
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection, TLS, invalid URL, body read)
    Network(reqwest::Error),
    /// Credentials were rejected by the remote service (401 or 403), with the response body
    Unauthorized(String),
    /// The requested resource does not exist (404), with the response body
    NotFound(String),
    /// The remote service rejected the call because of its rate limit (429), with the response body
    RateLimitExceeded(String),
    /// Any other non-success status, with the response body as returned
    Unexpected(StatusCode, String),
    /// Response body could not be decoded
    Deserialization(String),
    /// Request could not be encoded
    SerializationError(String),
    /// A value required to perform the call is missing or malformed
    InvalidInput(String),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// Classifies a non-success status code together with its response body
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(body),
            StatusCode::NOT_FOUND => AppError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded(body),
            _ => AppError::Unexpected(status, body),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized(body) => with_body(f, "unauthorized", body),
            AppError::NotFound(body) => with_body(f, "not found", body),
            AppError::RateLimitExceeded(body) => with_body(f, "rate limit exceeded", body),
            AppError::Unexpected(status, body) => {
                write!(f, "unexpected status {status}: {body}")
            }
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

fn with_body(f: &mut fmt::Formatter<'_>, label: &str, body: &str) -> fmt::Result {
    if body.is_empty() {
        f.write_str(label)
    } else {
        write!(f, "{label}: {body}")
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Deserialization(err.to_string());
        }
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Deserialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
