use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::models::PropertyId;

/// Failure reading or writing the persistence port
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored value for key `{key}` is not valid JSON: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected additions to the comparison list
#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("You can only compare up to {max} properties at once.")]
    Full { max: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A listing that does not satisfy the record schema
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("listing {id}: `{field}` must not be empty")]
    MissingField { id: PropertyId, field: &'static str },

    #[error("listing {id}: bathrooms must be a non-negative half step, got {value}")]
    InvalidBathrooms { id: PropertyId, value: f32 },

    #[error("listing {id}: coordinates out of range")]
    InvalidCoordinates { id: PropertyId },

    #[error("listing id {0} appears more than once")]
    DuplicateId(PropertyId),
}

/// Field-level validation messages for a submitted form
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records the first message for a field; later ones are ignored.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Failures of the mock sign-in flow
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(#[from] FormErrors),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A search route query string that cannot be applied
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("malformed query string: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),

    #[error("query parameter `{param}` expects a number, got `{value}`")]
    InvalidNumber { param: &'static str, value: String },

    #[error("{0}")]
    InvalidSort(String),
}
