pub mod get_document;

pub use get_document::{GetDocumentService, PLACEHOLDER_CONTENT};
