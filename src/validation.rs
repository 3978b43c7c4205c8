//! Load-time validation errors and record checks.
//!
//! Loading fails fast: the first structural problem aborts the whole load
//! and is reported as a single [`ValidationError`] carrying the serialized
//! form of the offending record. Detects:
//! - Missing or empty required fields
//! - Duplicate IDs (session-wide, per entity kind)
//! - References to unknown instructors or students
//! - References to instructors or students of another department
//! - Oversized input

use serde::Serialize;
use std::fmt;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Serialized form of the offending record, when there is one.
    pub record: Option<String>,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent or empty.
    MissingField,
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A course references an ID that exists nowhere in the session.
    UnresolvedReference,
    /// A course references an entity owned by another department.
    OutOfScopeReference,
    /// The input holds more records than the configured limit.
    LimitExceeded,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            record: None,
        }
    }

    /// Attaches the serialized offending record.
    pub(crate) fn with_record<R: Serialize + ?Sized>(mut self, record: &R) -> Self {
        self.record = Some(describe(record));
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            Some(record) => write!(f, "{}: {}", self.message, record),
            None => f.write_str(&self.message),
        }
    }
}

fn describe<R: Serialize + ?Sized>(record: &R) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| "<unprintable record>".to_string())
}

/// Returns a required, non-empty string field.
pub(crate) fn require_str<'a, R: Serialize + ?Sized>(
    value: &'a Option<String>,
    entity: &str,
    field: &str,
    record: &R,
) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(missing(entity, field, record)),
    }
}

/// Returns a required field of any type.
pub(crate) fn require<'a, T, R: Serialize + ?Sized>(
    value: &'a Option<T>,
    entity: &str,
    field: &str,
    record: &R,
) -> Result<&'a T, ValidationError> {
    value.as_ref().ok_or_else(|| missing(entity, field, record))
}

fn missing<R: Serialize + ?Sized>(entity: &str, field: &str, record: &R) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::MissingField,
        format!("Invalid {entity} data: missing '{field}'"),
    )
    .with_record(record)
}
