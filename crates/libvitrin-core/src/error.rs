use thiserror::Error;

/// Main error type for vitrin operations
#[derive(Debug, Error)]
pub enum VitrinError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("cache busy: {0}")]
    CacheBusy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache error: {0}")]
    Sled(#[from] sled::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl VitrinError {
    /// Get the error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            VitrinError::InvalidArgs(_) => "invalid_args",
            VitrinError::NotFound(_) => "not_found",
            VitrinError::CacheBusy(_) => "cache_busy",
            VitrinError::Io(_) => "io_error",
            VitrinError::Sled(_) => "cache_error",
            VitrinError::Json(_) => "parse_error",
            VitrinError::TomlParse(_) => "invalid_args",
            VitrinError::Network(_) => "network_error",
            VitrinError::Internal(_) => "internal_error",
        }
    }

    /// Get the exit code for CLI use
    pub fn exit_code(&self) -> i32 {
        match self {
            VitrinError::InvalidArgs(_) => 2,
            VitrinError::NotFound(_) => 3,
            VitrinError::CacheBusy(_) => 5,
            VitrinError::Io(_) => 5,
            VitrinError::Sled(_) => 5,
            VitrinError::Network(_) => 6,
            _ => 1,
        }
    }

    /// Create a NotFound error for a content file
    pub fn file_not_found(rel: &str) -> Self {
        VitrinError::NotFound(format!("content file '{}' not found", rel))
    }

    /// Create a CacheBusy error with process info
    pub fn cache_locked(details: Option<&str>) -> Self {
        let msg = match details {
            Some(d) => format!("cache is locked ({})", d),
            None => "cache is locked by another process".to_string(),
        };
        VitrinError::CacheBusy(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            VitrinError::file_not_found("data.json").error_code(),
            "not_found"
        );
        assert_eq!(VitrinError::cache_locked(None).error_code(), "cache_busy");
        assert_eq!(
            VitrinError::Network("connection refused".into()).exit_code(),
            6
        );
    }
}
