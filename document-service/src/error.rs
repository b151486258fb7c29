use crate::models::DocumentId;
use axum::response::{IntoResponse, Response};
use service_core::error::AppError;
use thiserror::Error;

/// Failures of the document read endpoint.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document ID is required")]
    MissingIdentifier,

    #[error("Invalid document ID")]
    InvalidIdentifier,

    #[error("Document {0} not found")]
    NotFound(DocumentId),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::MissingIdentifier | DocumentError::InvalidIdentifier => {
                AppError::BadRequest(err.to_string())
            }
            DocumentError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
