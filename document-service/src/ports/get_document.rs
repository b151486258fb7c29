use crate::dtos::DocumentRecord;
use crate::models::DocumentId;
use async_trait::async_trait;

/// Inbound port for reading a single document.
///
/// `None` means no document exists for the identifier.
#[async_trait]
pub trait GetDocumentUseCase: Send + Sync {
    async fn get(&self, document_id: DocumentId) -> Option<DocumentRecord>;
}
