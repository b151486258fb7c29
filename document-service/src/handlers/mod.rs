pub mod documents;
pub mod health;

pub use documents::{get_document, DocumentIdSegment, GetDocumentWebAdapter};
pub use health::{health_check, metrics_endpoint, readiness_check, HealthState};
