pub mod document_id;

pub use document_id::{DocumentId, DocumentIdError, RawDocumentId};
