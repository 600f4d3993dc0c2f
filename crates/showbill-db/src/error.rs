//! Store error types.

use std::collections::BTreeMap;
use std::fmt;

use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("referenced {entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TransactionError<StoreError>> for StoreError {
    fn from(err: TransactionError<StoreError>) -> Self {
        match err {
            TransactionError::Connection(e) => StoreError::Database(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

/// Per-field messages collected while checking a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub(crate) fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid submission:")?;
        for (field, message) in &self.fields {
            write!(f, " {field}: {message};")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_found() {
        let err = StoreError::NotFound { entity: "venue", id: 7 };
        assert_eq!(err.to_string(), "venue 7 not found");
    }

    #[test]
    fn test_display_missing_reference() {
        let err = StoreError::MissingReference { entity: "artist", id: 99 };
        assert_eq!(err.to_string(), "referenced artist 99 does not exist");
    }

    #[test]
    fn test_display_validation() {
        let mut v = ValidationError::new();
        v.add("name", "Name is required");
        v.add("city", "City is required");
        let err = StoreError::from(v);
        assert_eq!(
            err.to_string(),
            "invalid submission: city: City is required; name: Name is required;"
        );
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut v = ValidationError::new();
        v.add("phone", "first");
        v.add("phone", "second");
        assert_eq!(v.get("phone"), Some("first"));
        assert_eq!(v.iter().count(), 1);
    }

    #[test]
    fn test_from_db_error() {
        let err: StoreError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_from_transaction_error() {
        let err: StoreError =
            TransactionError::Transaction(StoreError::NotFound { entity: "show", id: 1 }).into();
        assert!(matches!(err, StoreError::NotFound { entity: "show", id: 1 }));

        let err: StoreError =
            TransactionError::<StoreError>::Connection(DbErr::Custom("gone".into())).into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationError::new().into_result(5), Ok(5));
        let mut v = ValidationError::new();
        v.add("name", "Name is required");
        assert!(v.into_result(5).is_err());
    }
}
