//! Inbound HTTP adapter for the get-document use case.

use crate::dtos::DocumentRecord;
use crate::error::DocumentError;
use crate::models::DocumentId;
use crate::ports::GetDocumentUseCase;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use service_core::error::AppError;
use std::sync::Arc;

/// Raw `{id}` path segment restricted to ASCII digits.
///
/// Anything else is treated as an unmatched route and answered with 404.
#[derive(Debug, Clone)]
pub struct DocumentIdSegment(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for DocumentIdSegment
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Not found".to_string()))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(segment = %raw, "Rejected non-integer document path segment");
            return Err(AppError::NotFound("Not found".to_string()));
        }

        Ok(Self(raw))
    }
}

/// Mounts `GET /api/document/:id` on a shared router.
#[derive(Clone)]
pub struct GetDocumentWebAdapter {
    use_case: Arc<dyn GetDocumentUseCase>,
}

impl GetDocumentWebAdapter {
    pub const ROUTE: &'static str = "/api/document/:id";

    pub fn new(use_case: Arc<dyn GetDocumentUseCase>) -> Self {
        Self { use_case }
    }

    pub fn register(self, router: Router) -> Router {
        router.merge(
            Router::new()
                .route(Self::ROUTE, get(get_document))
                .with_state(self),
        )
    }
}

pub async fn get_document(
    State(adapter): State<GetDocumentWebAdapter>,
    segment: DocumentIdSegment,
) -> Result<Json<DocumentRecord>, DocumentError> {
    let document_id = DocumentId::new(segment.0.as_str()).map_err(|e| {
        tracing::warn!("Invalid document ID: {}", e);
        DocumentError::InvalidIdentifier
    })?;

    // Zero is indistinguishable from a missing id here
    if document_id.value() == 0 {
        tracing::warn!(segment = %segment.0, "Document ID missing");
        return Err(DocumentError::MissingIdentifier);
    }

    match adapter.use_case.get(document_id).await {
        Some(record) => {
            tracing::debug!(document_id = %document_id, "Document found");
            Ok(Json(record))
        }
        None => {
            tracing::info!(document_id = %document_id, "Document not found");
            Err(DocumentError::NotFound(document_id))
        }
    }
}
