use crate::utils::error_chain_fmt;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::Debug;

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("The backend answered with status {status}.")]
    Response {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Failed to reach the backend.")]
    Transport(#[source] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Response {
            status,
            message: Some(message.into()),
        }
    }

    /// Builds a [`ApiError::Response`] out of a non-success response,
    /// keeping the body's `message` field when there is one.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to read the error response body");
                None
            }
        };
        Self::Response { status, message }
    }

    /// The human-readable message sent by the backend, if any.
    pub fn response_message(&self) -> Option<&str> {
        match self {
            Self::Response { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Response { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// The backend's message, or `fallback` when it did not send one.
    pub fn display_message(&self, fallback: &str) -> String {
        self.response_message().unwrap_or(fallback).to_owned()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}
