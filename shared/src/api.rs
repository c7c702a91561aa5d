//! API client types and error taxonomy
//!
//! This module defines the API contract shared by the frontend's HTTP
//! client and its test doubles.

use serde::{Deserialize, Serialize};

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// No signed-in user (401/403 from an authenticated endpoint)
    #[error("Not authenticated")]
    Unauthenticated,
    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Classify a non-success HTTP response.
    ///
    /// 401 and 403 mean "nobody is signed in". Anything else becomes a
    /// `Server` error carrying the backend's `{"message": ...}` body when
    /// there is one, the raw body text otherwise.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 || status == 403 {
            return ApiError::Unauthenticated;
        }

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => "Request failed".to_string(),
        };
        ApiError::Server { status, message }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

/// Error payload returned by the backend alongside non-2xx statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// API endpoint definitions
pub mod endpoints {
    pub const REPLAY_COUNT: &str = "/api/global/replay_count";
    pub const ME: &str = "/api/me";
    pub const STEAM_LOGIN: &str = "/api/auth/steam";
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8000")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_statuses_mean_no_user() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthenticated);
        assert_eq!(
            ApiError::from_status(403, r#"{"message":"nope"}"#),
            ApiError::Unauthenticated
        );
        assert!(ApiError::from_status(401, "").is_unauthenticated());
    }

    #[test]
    fn server_error_uses_message_body() {
        let err = ApiError::from_status(404, r#"{"message": "Player not found"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "Player not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "Server error (404): Player not found");
        assert!(!err.is_unauthenticated());
    }

    #[test]
    fn server_error_falls_back_to_raw_text() {
        let err = ApiError::from_status(502, "  Bad Gateway\n");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );

        let err = ApiError::from_status(500, "");
        assert_eq!(err.to_string(), "Server error (500): Request failed");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: ApiError = serde_json::from_str::<u64>("-3").unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn config_joins_paths() {
        let config = ApiClientConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(
            config.url(endpoints::REPLAY_COUNT),
            "http://localhost:8000/api/global/replay_count"
        );
    }
}
