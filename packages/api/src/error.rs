use thiserror::Error;

/// Failure taxonomy for backend calls.
///
/// Callers handle every variant the same way (report once, keep the UI
/// interactive); the variants exist so the session layer can special-case
/// authentication failures and so log lines say what actually happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401 on a protected call.
    #[error("not authenticated")]
    Unauthorized,

    /// A protected operation was invoked without a stored token.
    #[error("no stored session")]
    NoSession,

    /// Any other non-2xx response (validation failure, not found, server error).
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map an HTTP status code to the matching variant.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            other => ApiError::Status(other),
        }
    }

    /// Whether this failure means the session is no longer valid.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NoSession)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(ApiError::from_status(401), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(404), ApiError::Status(404)));
        assert!(matches!(ApiError::from_status(500), ApiError::Status(500)));
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::Unauthorized.is_auth());
        assert!(ApiError::NoSession.is_auth());
        assert!(!ApiError::Status(422).is_auth());
        assert!(!ApiError::Network("down".into()).is_auth());
    }
}
