// Error types shared by the API clients and the state machines

use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Http {
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },

    /// A 4xx rejection of a submitted document.
    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Message suitable for showing to a user.
    ///
    /// Server-supplied reasons win; otherwise `fallback` is returned so the
    /// caller decides the wording for transport and status failures.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } | ClientError::Validation { status, .. } => {
                Some(*status)
            }
            ClientError::NotFound(_) => Some(StatusCode::NOT_FOUND.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_reason() {
        let err = ClientError::Validation {
            status: 422,
            message: "Salary must be a range".to_string(),
        };
        assert_eq!(err.user_message("fallback"), "Salary must be a range");

        let err = ClientError::Http {
            status: 503,
            message: Some("Service paused".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Service paused");
    }

    #[test]
    fn user_message_falls_back_without_reason() {
        let err = ClientError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed to create job posting"), "Failed to create job posting");
        assert_eq!(
            ClientError::Network("connection refused".into()).user_message("offline"),
            "offline"
        );
    }

    #[test]
    fn status_reports_http_codes() {
        assert_eq!(ClientError::NotFound("abc".into()).status(), Some(404));
        assert_eq!(
            ClientError::Http { status: 500, message: None }.status(),
            Some(500)
        );
        assert_eq!(ClientError::Decode("bad json".into()).status(), None);
    }

    #[test]
    fn http_error_display_matches_status_wording() {
        let err = ClientError::Http { status: 500, message: None };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }
}
