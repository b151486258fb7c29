//! Document identifier value object.
//!
//! A `DocumentId` is built from either a native integer or a numeric string
//! and is immutable afterwards. Equality and hashing follow the wrapped value.
//! The value is an `i128`, wide enough for every `u64` path segment.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentIdError {
    #[error("Document ID must be an integer or a string that can be converted to an integer, got {0:?}")]
    InvalidIdentifier(String),
}

/// Raw identifier input as it arrives from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDocumentId {
    Int(i128),
    Text(String),
}

impl From<i32> for RawDocumentId {
    fn from(value: i32) -> Self {
        RawDocumentId::Int(value.into())
    }
}

impl From<i64> for RawDocumentId {
    fn from(value: i64) -> Self {
        RawDocumentId::Int(value.into())
    }
}

impl From<u64> for RawDocumentId {
    fn from(value: u64) -> Self {
        RawDocumentId::Int(value.into())
    }
}

impl From<i128> for RawDocumentId {
    fn from(value: i128) -> Self {
        RawDocumentId::Int(value)
    }
}

impl From<&str> for RawDocumentId {
    fn from(value: &str) -> Self {
        RawDocumentId::Text(value.to_string())
    }
}

impl From<String> for RawDocumentId {
    fn from(value: String) -> Self {
        RawDocumentId::Text(value)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(i128);

impl DocumentId {
    pub fn new(raw: impl Into<RawDocumentId>) -> Result<Self, DocumentIdError> {
        match raw.into() {
            RawDocumentId::Int(value) => Ok(Self(value)),
            RawDocumentId::Text(text) => match parse_integer(&text) {
                Some(value) => Ok(Self(value)),
                None => Err(DocumentIdError::InvalidIdentifier(text)),
            },
        }
    }

    pub fn value(&self) -> i128 {
        self.0
    }
}

/// Decimal integer with optional sign and surrounding whitespace.
/// Single underscores may separate digits (`1_000`).
fn parse_integer(text: &str) -> Option<i128> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }

    trimmed.replace('_', "").parse().ok()
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<i64> for DocumentId {
    type Error = DocumentIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DocumentId {
    type Error = DocumentIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_integer() {
        let id = DocumentId::new(42).unwrap();
        assert_eq!(id.value(), 42);

        let negative = DocumentId::new(-3).unwrap();
        assert_eq!(negative.value(), -3);
    }

    #[test]
    fn test_from_numeric_string() {
        assert_eq!(DocumentId::new("42").unwrap().value(), 42);
        assert_eq!(DocumentId::new(" 7 ").unwrap().value(), 7);
        assert_eq!(DocumentId::new("-12").unwrap().value(), -12);
        assert_eq!(DocumentId::new("+5").unwrap().value(), 5);
        assert_eq!(DocumentId::new("007").unwrap().value(), 7);
    }

    #[test]
    fn test_accepts_underscore_digit_groups() {
        assert_eq!(DocumentId::new("1_000").unwrap().value(), 1000);
        assert_eq!(DocumentId::new("-1_000_000").unwrap().value(), -1_000_000);
    }

    #[test]
    fn test_accepts_ids_beyond_i64() {
        let id = DocumentId::new("9223372036854775808").unwrap();
        assert_eq!(id.value(), i128::from(i64::MAX) + 1);

        let id = DocumentId::new(u64::MAX).unwrap();
        assert_eq!(id.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_rejects_non_numeric_strings() {
        for raw in [
            "",
            "   ",
            "abc",
            "4 2",
            "1.5",
            "0x10",
            "12abc",
            "_1",
            "1_",
            "1__0",
            "-_1",
            "+",
            "1000000000000000000000000000000000000000",
        ] {
            let err = DocumentId::new(raw).unwrap_err();
            assert_eq!(err, DocumentIdError::InvalidIdentifier(raw.to_string()));
        }
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(DocumentId::new(5).unwrap(), DocumentId::new(5).unwrap());
        assert_ne!(DocumentId::new(5).unwrap(), DocumentId::new(6).unwrap());
        assert_eq!(DocumentId::new("5").unwrap(), DocumentId::new(5).unwrap());
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let ids: HashSet<DocumentId> = [
            DocumentId::new(5).unwrap(),
            DocumentId::new("5").unwrap(),
            DocumentId::new(6).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let id = DocumentId::new(42).unwrap();
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "DocumentId(42)");
    }

    #[test]
    fn test_serializes_as_integer() {
        let id = DocumentId::new(42).unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(42));
    }

    proptest! {
        #[test]
        fn accepts_every_integer_rendering(n in any::<i128>()) {
            prop_assert_eq!(DocumentId::new(n.to_string()).unwrap().value(), n);
            prop_assert_eq!(DocumentId::new(n).unwrap().value(), n);
        }

        #[test]
        fn rejects_non_numeric_strings(s in "[a-zA-Z_.]{1,16}") {
            prop_assert!(DocumentId::new(s.as_str()).is_err());
        }
    }
}
