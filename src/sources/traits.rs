use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply listings.
/// Records are validated before they are handed out.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full listing set
    async fn load(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
