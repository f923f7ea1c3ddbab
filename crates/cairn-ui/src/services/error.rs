//! API client error primitives.
//!
//! # Design
//! - Keep the taxonomy small: not-found is the only variant callers branch on.
//! - Carry the server's problem message verbatim for toasts.
//! - Stay DOM-free so fold helpers can be tested off-wasm.

use std::fmt::{self, Display, Formatter};

/// Error surfaced by the catalog API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The addressed resource does not exist.
    NotFound {
        /// Request path that produced the 404.
        path: String,
    },
    /// The server answered with a non-success status.
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message taken from the problem document.
        message: String,
    },
    /// The request never produced a response.
    Network {
        /// Transport-level failure description.
        message: String,
    },
    /// The response body could not be decoded into the expected type.
    Decode {
        /// Decoder failure description.
        message: String,
    },
}

impl ApiError {
    /// Whether this error is the not-found condition callers branch on.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for ApiError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(formatter, "not found: {path}"),
            Self::Status { status, message } => write!(formatter, "{message} (HTTP {status})"),
            Self::Network { message } => write!(formatter, "network failure: {message}"),
            Self::Decode { message } => write!(formatter, "invalid response: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result wrapper for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_matches_the_fallback_branch() {
        assert!(ApiError::NotFound { path: "/v1/x".to_string() }.is_not_found());
        assert!(
            !ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            }
            .is_not_found()
        );
        assert!(!ApiError::Network { message: "offline".to_string() }.is_not_found());
    }

    #[test]
    fn display_carries_the_server_message() {
        let err = ApiError::Status {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "forbidden (HTTP 403)");
        let nf = ApiError::NotFound { path: "/v1/datasets/9".to_string() };
        assert_eq!(nf.to_string(), "not found: /v1/datasets/9");
    }
}
