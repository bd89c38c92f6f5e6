//! Real-estate browsing core: listings, search, favorites, comparison and
//! mock sign-in, driven against an injected in-memory listing set.

pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod inquiry;
pub mod models;
pub mod routes;
pub mod search;
pub mod sources;
pub mod storage;
pub mod stores;

pub use error::{AuthError, ComparisonError, FormErrors, QueryError, RecordError, StorageError};
pub use models::{PropertyId, PropertyRecord};
