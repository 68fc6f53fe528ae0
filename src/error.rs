use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// Non-2xx response, carrying the status line and the body verbatim.
    #[error("{status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("not authenticated, please login first")]
    NotAuthenticated,
    #[error("token refresh failed: {reason} (please login again)")]
    TokenRefresh { reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Could not determine home directory")]
    HomeDirectoryNotFound,
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub context: Option<String>,
}

impl Error {
    /// I/O failure on a local file, with the path in the message and the
    /// original [`std::io::ErrorKind`] kept for hints.
    #[must_use]
    pub fn file(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        ))
    }

    /// HTTP status of the failed call, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let (error_type, message, context) = match self {
            Self::Config(msg) => ("Configuration", msg.clone(), None),
            Self::Io(io_err) => {
                let context = match io_err.kind() {
                    std::io::ErrorKind::NotFound => Some(crate::constants::ERR_FILE_NOT_FOUND),
                    std::io::ErrorKind::PermissionDenied => Some(crate::constants::ERR_PERMISSION),
                    _ => None,
                };
                ("FileSystem", io_err.to_string(), context.map(str::to_string))
            }
            Self::Network(req_err) => {
                let context = if req_err.is_connect() {
                    Some(crate::constants::ERR_CONNECTION)
                } else if req_err.is_timeout() {
                    Some(crate::constants::ERR_TIMEOUT)
                } else {
                    req_err.status().and_then(status_hint)
                };
                ("Network", req_err.to_string(), context.map(str::to_string))
            }
            Self::Http { status, .. } => (
                "HttpError",
                self.to_string(),
                status_hint(*status).map(str::to_string),
            ),
            Self::Yaml(yaml_err) => (
                "YAMLParsing",
                yaml_err.to_string(),
                Some(crate::constants::ERR_YAML_SYNTAX.to_string()),
            ),
            Self::Json(json_err) => (
                "JSONParsing",
                json_err.to_string(),
                Some(crate::constants::ERR_JSON_SYNTAX.to_string()),
            ),
            Self::NotAuthenticated | Self::TokenRefresh { .. } => (
                "Authentication",
                self.to_string(),
                Some(crate::constants::ERR_LOGIN_AGAIN.to_string()),
            ),
            Self::InvalidInput(msg) => ("InvalidInput", msg.clone(), None),
            Self::HomeDirectoryNotFound => (
                "Configuration",
                self.to_string(),
                Some(crate::constants::ERR_HOME_DIR.to_string()),
            ),
        };

        JsonError {
            error_type: error_type.to_string(),
            message,
            context,
        }
    }
}

/// Hint for a failed status code, shared by the JSON and human renderers.
#[must_use]
pub fn status_hint(status: StatusCode) -> Option<&'static str> {
    match status.as_u16() {
        401 => Some(crate::constants::ERR_API_CREDENTIALS),
        403 => Some(crate::constants::ERR_PERMISSION_DENIED),
        404 => Some(crate::constants::ERR_RESOURCE_NOT_FOUND),
        429 => Some(crate::constants::ERR_RATE_LIMITED),
        500..=599 => Some(crate::constants::ERR_SERVER_ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_has_status_and_body() {
        let err = Error::Http {
            status: StatusCode::NOT_FOUND,
            body: r#"{"detail":"Not found."}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("404 Not Found: "));
        assert!(msg.contains(r#"{"detail":"Not found."}"#));
    }

    #[test]
    fn test_file_error_keeps_kind_and_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = Error::file(std::path::Path::new("events.json"), &source);
        assert!(matches!(&err, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound));

        let json = err.to_json();
        assert_eq!(json.error_type, "FileSystem");
        assert!(json.message.contains("events.json"));
        assert_eq!(
            json.context.as_deref(),
            Some(crate::constants::ERR_FILE_NOT_FOUND)
        );
    }

    #[test]
    fn test_token_refresh_message_asks_for_login() {
        let err = Error::TokenRefresh {
            reason: "no refresh token available".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "token refresh failed: no refresh token available (please login again)"
        );
    }

    #[test]
    fn test_to_json_http_error_carries_hint() {
        let err = Error::Http {
            status: StatusCode::UNAUTHORIZED,
            body: "denied".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json.error_type, "HttpError");
        assert_eq!(json.message, "401 Unauthorized: denied");
        assert!(json.context.is_some());
    }

    #[test]
    fn test_status_only_for_http_failures() {
        let err = Error::Http {
            status: StatusCode::BAD_REQUEST,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(Error::NotAuthenticated.status(), None);
    }
}
