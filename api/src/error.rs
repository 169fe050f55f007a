//! Error type shared by the exchange-rate and table service clients.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connection, decoding).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response parsed, but an expected field was missing.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The backend answered with a non-success status.
    #[error("backend error with status {status}: {message}")]
    Backend { status: u16, message: String },

    /// The user supplied something we refuse to send.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// The `{ "error": "..." }` body the table backend sends on failure.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Builds a `Backend` error from a failed response, preferring the body's
    /// `error` field over the bare status text.
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
            });

        ApiError::Backend {
            status: status.as_u16(),
            message,
        }
    }

    /// The text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(e) => format!("Network error: {e}"),
            Self::MalformedResponse(what) => what.clone(),
            Self::Backend { message, .. } => message.clone(),
            Self::InvalidInput(guidance) => guidance.clone(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_the_bare_backend_text() {
        let err = ApiError::Backend {
            status: 400,
            message: "Only CSV files are accepted".to_string(),
        };
        assert_eq!(err.user_message(), "Only CSV files are accepted");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn invalid_input_carries_guidance() {
        let err = ApiError::InvalidInput("Please upload a .csv file".to_string());
        assert_eq!(err.user_message(), "Please upload a .csv file");
        assert!(!err.is_transport());
    }
}
