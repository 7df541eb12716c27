//! Error classification for REST API requests

use reqwest::StatusCode;

/// Errors surfaced by GitHub REST requests
///
/// Primary resource fetches propagate these to the caller unchanged; only
/// the readme enrichment absorbs them. There is no retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status code
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Request path, without the query string (which carries credentials)
        path: String,
        /// Response body, when one was readable
        message: String,
    },
    /// The request never produced a response (connect, timeout, TLS)
    Transport(String),
    /// The response arrived but its payload could not be interpreted
    Decode(String),
}

impl ApiError {
    /// Build a status error from a response's status code and request path
    pub fn from_status(status: StatusCode, path: impl Into<String>, message: String) -> Self {
        Self::Status {
            status: status.as_u16(),
            path: path.into(),
            message,
        }
    }

    /// Classify a reqwest error into transport vs decode
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }

    /// Status code of the API response, if the error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 404 response. Drives the readme not-found mapping.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status {
                status,
                path,
                message,
            } => {
                if message.is_empty() {
                    write!(f, "GitHub API error {} for {}", status, path)
                } else {
                    write!(f, "GitHub API error {} for {}: {}", status, path, message)
                }
            }
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_matches_only_404() {
        let not_found = ApiError::from_status(StatusCode::NOT_FOUND, "/users/nobody", String::new());
        assert!(not_found.is_not_found());

        let server_error =
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "/users/a", String::new());
        assert!(!server_error.is_not_found());
        assert_eq!(server_error.status(), Some(500));

        assert!(!ApiError::Transport("connection refused".to_string()).is_not_found());
    }
}
