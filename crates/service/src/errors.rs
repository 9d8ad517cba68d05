use std::fmt;

use sea_orm::{DbErr, SqlErr};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// One failed rule, keyed by the payload field it belongs to
/// (`first_name`, `manager_id`, `social_media_accounts[2]`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field errors.
///
/// Serializes as a map from field to its messages, e.g.
/// `{"first_name": ["First name cannot be empty"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errs = Self::new();
        errs.push(field, message);
        errs
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError { field: field.into(), message: message.into() });
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> { self.0.iter() }

    /// Messages recorded for `field`, in insertion order.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.0.iter().filter(|e| e.field == field).map(|e| e.message.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 { f.write_str("; ")?; }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();
        for e in &self.0 {
            match grouped.iter_mut().find(|(field, _)| *field == e.field) {
                Some((_, msgs)) => msgs.push(e.message.as_str()),
                None => grouped.push((e.field.as_str(), vec![e.message.as_str()])),
            }
        }
        let mut map = serializer.serialize_map(Some(grouped.len()))?;
        for (field, msgs) in grouped {
            map.serialize_entry(field, &msgs)?;
        }
        map.end()
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Format, length or presence rule failed.
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    /// A referenced row (manager) does not exist.
    #[error("reference error: {0}")]
    Reference(ValidationErrors),
    /// Duplicate inside one payload, or a unique index rejected the write.
    #[error("uniqueness error: {0}")]
    Uniqueness(ValidationErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::single(field, message))
    }

    pub fn reference(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Reference(ValidationErrors::single(field, message))
    }

    pub fn uniqueness(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Uniqueness(ValidationErrors::single(field, message))
    }

    /// Field-keyed payload for the client-facing variants.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(e) | Self::Reference(e) | Self::Uniqueness(e) => Some(e),
            _ => None,
        }
    }

    /// Translate a write failure, mapping constraint violations that slipped
    /// past validation (concurrent writers) onto field errors.
    pub fn from_write(e: DbErr, unique: (&str, &str), foreign_key: (&str, &str)) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::uniqueness(unique.0, unique.1),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::reference(foreign_key.0, foreign_key.1),
            _ => Self::Db(e.to_string()),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}
