use serde::{Deserialize, Serialize};
use std::fmt;

/// A request that did not produce a 2xx response. `status` is `None` when the
/// request never reached the server (network error, serialization failure).
/// The raw body is kept for logging; the UI renders only generic messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestError {
    pub status: Option<u16>,
    pub body: String,
}

impl RequestError {
    pub fn network(body: impl Into<String>) -> Self {
        Self {
            status: None,
            body: body.into(),
        }
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {status}: {}", self.body),
            None => write!(f, "network error: {}", self.body),
        }
    }
}

/// Call-site classification of a failed request. The wrapped error keeps the
/// HTTP status so the UI can later branch on it without re-architecture, even
/// though today it only shows the generic per-kind message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Failure {
    Auth(RequestError),
    Fetch(RequestError),
    Mutation(RequestError),
}

impl Failure {
    pub fn request_error(&self) -> &RequestError {
        match self {
            Failure::Auth(err) | Failure::Fetch(err) | Failure::Mutation(err) => err,
        }
    }

    /// Generic user-facing message, with the status code appended when known.
    pub fn message(&self) -> String {
        let generic = match self {
            Failure::Auth(_) => "Invalid credentials",
            Failure::Fetch(_) => "Failed to fetch incidents",
            Failure::Mutation(_) => "Failed to save incident",
        };
        match self.request_error().status {
            Some(status) => format!("{generic} (HTTP {status})"),
            None => generic.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_status_when_present() {
        let failure = Failure::Mutation(RequestError::http(422, "validation error"));
        assert_eq!(failure.message(), "Failed to save incident (HTTP 422)");
        assert_eq!(failure.request_error().status, Some(422));
    }

    #[test]
    fn network_failure_has_no_status() {
        let failure = Failure::Auth(RequestError::network("connection refused"));
        assert_eq!(failure.message(), "Invalid credentials");
        assert_eq!(failure.request_error().status, None);
    }
}
