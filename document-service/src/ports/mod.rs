pub mod get_document;

pub use get_document::GetDocumentUseCase;
