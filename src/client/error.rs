use thiserror::Error;

/// Failures reported by a [`SearchClient`](super::SearchClient) implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchClientError {
    /// Connection, TLS, signing or timeout failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// The engine answered with a non-success HTTP status
    #[error("Search engine returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not valid JSON
    #[error("Failed to decode search response: {0}")]
    Decode(String),
}

impl SearchClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// 5xx statuses and transport failures; callers deciding on retry can use this
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for SearchClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SearchClientError::status(403, "security_exception").to_string(),
            "Search engine returned status 403: security_exception"
        );
        assert_eq!(
            SearchClientError::transport("connection reset").to_string(),
            "Transport error: connection reset"
        );
    }

    #[test]
    fn test_is_transient() {
        assert!(SearchClientError::transport("timeout").is_transient());
        assert!(SearchClientError::status(503, "unavailable").is_transient());
        assert!(!SearchClientError::status(400, "parsing_exception").is_transient());
        assert!(!SearchClientError::decode("eof").is_transient());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: SearchClientError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SearchClientError::Decode(_)));
    }
}
