//! Client-side fetch error types

use thiserror::Error;

/// Errors that can occur while fetching content files
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request failed before a response arrived
    #[error("Request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} for '{path}'")]
    Status { status: u16, path: String },

    /// Requested file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this failure means "the file is absent" rather than
    /// "the store is unreachable"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::NotFound(_) | ClientError::Status { status: 404, .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::NotFound("data.json".into()).is_not_found());
        assert!(ClientError::Status {
            status: 404,
            path: "about.json".into()
        }
        .is_not_found());
        assert!(!ClientError::Status {
            status: 500,
            path: "about.json".into()
        }
        .is_not_found());
        assert!(!ClientError::Http("connection refused".into()).is_not_found());
    }
}
