use reqwest::StatusCode;
use thiserror::Error;

/// Normalized failure for any remote call: non-2xx answers and transport
/// faults alike end up here, never anywhere else.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered 2xx with a body this console cannot decode.
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// Human-readable text shown to the operator.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Wraps a failed response, preferring the `message` field of the API's
    /// error body over the bare status line.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        Self::Api {
            status,
            message: api_error_message(status, body),
        }
    }
}

fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("backend returned {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_comes_from_the_error_body() {
        let err = BackendError::from_response(StatusCode::NOT_FOUND, r#"{"message":"not found"}"#);
        assert_eq!(err.message(), "not found");
    }

    #[test]
    fn falls_back_to_the_status_line() {
        let err = BackendError::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.message(), "backend returned 502 Bad Gateway");

        let err = BackendError::from_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"x"}"#);
        assert_eq!(err.message(), "backend returned 500 Internal Server Error");
    }

    #[test]
    fn status_is_preserved_on_the_variant() {
        let err = BackendError::from_response(StatusCode::NOT_FOUND, "{}");
        match err {
            BackendError::Api { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
