// Error type for backend calls. Every variant displays as a single
// human-readable line so the UI can print it as-is.

use thiserror::Error;

/// Message used when a failed response carries no usable `detail`.
pub const REQUEST_FAILED_FALLBACK: &str = "요청에 실패했습니다.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body was not the expected JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a `Backend` error from a failed response body. A string
    /// `detail` is used verbatim; any other non-null `detail` (FastAPI's
    /// validation arrays, for one) is rendered as compact JSON.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned());
        let message = match detail {
            Some(serde_json::Value::String(text)) => text,
            Some(serde_json::Value::Null) | None => REQUEST_FAILED_FALLBACK.to_string(),
            Some(other) => other.to_string(),
        };
        ApiError::Backend { status, message }
    }
}
