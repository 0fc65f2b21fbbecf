//! Closed error kinds for the screening service.
//!
//! Handlers surface these distinctly instead of collapsing everything
//! into a generic failure: validation problems map to 400, everything
//! else to 500, always with a JSON `{"error": ...}` body. The untrained
//! classifier is special-cased by the analyze path as a soft result
//! object and only becomes an HTTP error when hit directly.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VitalmapError {
    /// Request shape or field-level validation failures
    #[error("{0}")]
    Validation(String),

    /// Classifier invoked before (or without) training
    #[error("Model not trained")]
    NotTrained,

    /// Patient store failures
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Configuration file problems
    #[error("configuration error: {0}")]
    Config(String),

    /// File system failures (uploads, config reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VitalmapError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl ResponseError for VitalmapError {
    fn status_code(&self) -> StatusCode {
        match self {
            VitalmapError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
