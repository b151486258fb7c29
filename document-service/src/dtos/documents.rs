use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("ID must be an integer.")]
    InvalidId,
    #[error("Content must be a string.")]
    InvalidContent,
    #[error("Document record must be a JSON object.")]
    Malformed,
}

/// Document returned by a successful lookup. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    id: i128,
    content: String,
}

impl DocumentRecord {
    pub fn new(id: i128, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn id(&self) -> i128 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TryFrom<Value> for DocumentRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(RecordError::Malformed);
        };

        let id = fields
            .remove("id")
            .and_then(|v| v.as_i64().map(i128::from).or_else(|| v.as_u64().map(i128::from)))
            .ok_or(RecordError::InvalidId)?;

        let content = match fields.remove("content") {
            Some(Value::String(content)) => content,
            _ => return Err(RecordError::InvalidContent),
        };

        Ok(Self::new(id, content))
    }
}
