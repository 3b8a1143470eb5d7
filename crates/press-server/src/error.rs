use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use press_codec::CodecError;
use press_staging::StagingError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("No file uploaded")]
    MissingInput,

    #[error("Filename required")]
    MissingFileName,

    #[error("Invalid algorithm: {got}. Available: {available}")]
    UnknownAlgorithm { got: String, available: String },

    #[error("Cannot detect algorithm. File must contain .gzip, .deflate, or .brotli in name")]
    UndeterminedAlgorithm,

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("staging error: {0}")]
    Staging(#[from] StagingError),

    #[error("malformed upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status for the uniform error envelope: 404 for a missing
    /// staged artifact, 500 for everything else.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) | ServerError::Staging(StagingError::NotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
