//! HTTP error responses.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use stmtx_core::StmtxError;

/// Errors returned by the API, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file provided")]
    NoFileProvided,

    #[error("No file selected")]
    EmptyFilename,

    #[error("Unsupported file format: {0}. Please upload a PDF or Excel file")]
    UnsupportedFormat(String),

    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Error processing file: {0}")]
    ExtractionFailure(#[from] StmtxError),

    #[error("Error storing upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFileProvided
            | ApiError::EmptyFilename
            | ApiError::UnsupportedFormat(_)
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::ExtractionFailure(_) | ApiError::Io(_) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Body message for server errors; the cause only goes to the log.
const SERVER_ERROR_MESSAGE: &str = "Error processing file";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!("{}", self);
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            warn!("Rejected request: {}", self);
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
