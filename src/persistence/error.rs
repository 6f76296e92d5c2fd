//! Error taxonomy for persistence API calls.

use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by persistence API implementations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No signed-in session is available to authorise the call.
    #[error("no authenticated session")]
    NotAuthenticated,

    /// The API rejected the caller for the resource (401/403).
    #[error("request rejected by persistence API with status {status}")]
    Authorization {
        /// HTTP status code.
        status: u16,
    },

    /// The addressed resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Transport failure; the caller may retry.
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body did not match the expected shape.
    #[error("could not decode persistence API response: {0}")]
    Decode(String),

    /// Any other non-success response.
    #[error("persistence API error ({status}): {body}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiError {
    /// Wraps a transport error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Maps a non-success HTTP status and its body onto the taxonomy.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Authorization { status },
            404 => Self::NotFound(body),
            _ => Self::Unexpected { status, body },
        }
    }

    /// Returns whether a user-visible retry makes sense for this failure.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Unexpected { status, .. } => *status >= 500,
            Self::NotAuthenticated
            | Self::Authorization { .. }
            | Self::NotFound(_)
            | Self::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use rstest::rstest;

    #[rstest]
    #[case(401, "authorization")]
    #[case(403, "authorization")]
    #[case(404, "not_found")]
    #[case(500, "unexpected")]
    #[case(422, "unexpected")]
    fn from_status_maps_codes(#[case] status: u16, #[case] expected: &str) {
        let kind = match ApiError::from_status(status, "body".to_owned()) {
            ApiError::Authorization { .. } => "authorization",
            ApiError::NotFound(_) => "not_found",
            ApiError::Unexpected { .. } => "unexpected",
            ApiError::NotAuthenticated | ApiError::Network(_) | ApiError::Decode(_) => "other",
        };
        assert_eq!(kind, expected);
    }

    #[rstest]
    fn only_network_and_server_errors_are_retryable() {
        assert!(ApiError::network(std::io::Error::other("reset")).is_retryable());
        assert!(ApiError::from_status(503, String::new()).is_retryable());
        assert!(!ApiError::from_status(403, String::new()).is_retryable());
        assert!(!ApiError::NotAuthenticated.is_retryable());
    }
}
