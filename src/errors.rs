use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::error::Error;
use std::fmt;

#[derive(Serialize, Debug)]
pub struct ErrorMessage {
    pub code: u16,
    pub error: String,
}

/// Errors the server can answer with.
///
/// Access checks never fail, so this only covers what escapes a handler.
#[derive(Debug)]
pub enum ApiError {
    // The payload goes to the log only; clients get the canonical reason.
    Panicked(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Panicked(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn reason(&self) -> &'static str {
        self.status().canonical_reason().unwrap_or("Unknown error")
    }

    fn to_json(&self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorMessage {
                code: status.as_u16(),
                error: self.reason().to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Panicked(ref detail) => {
                tracing::error!("App panicked: {}", detail);
                self.to_json()
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Panicked(detail) => write!(f, "handler panicked: {}", detail),
        }
    }
}

impl Error for ApiError {}
