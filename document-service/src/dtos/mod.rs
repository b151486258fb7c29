pub mod documents;

pub use documents::{DocumentRecord, RecordError};
