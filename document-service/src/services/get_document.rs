use crate::dtos::DocumentRecord;
use crate::models::DocumentId;
use crate::ports::GetDocumentUseCase;
use async_trait::async_trait;

pub const PLACEHOLDER_CONTENT: &str = "Dummy Document";

/// Stateless lookup that answers every identifier with a placeholder document.
#[derive(Debug, Clone, Default)]
pub struct GetDocumentService;

impl GetDocumentService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GetDocumentUseCase for GetDocumentService {
    async fn get(&self, document_id: DocumentId) -> Option<DocumentRecord> {
        tracing::debug!(document_id = %document_id, "Looking up document");

        Some(DocumentRecord::new(document_id.value(), PLACEHOLDER_CONTENT))
    }
}
