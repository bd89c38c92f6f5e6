use std::path::PathBuf;

use crate::models::PropertyRecord;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

/// Listings read from a JSON array on disk
pub struct JsonFileListings {
    path: PathBuf,
}

impl JsonFileListings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFileListings {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Reading listings from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listings file {}", self.path.display()))?;

        let records: Vec<PropertyRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Listings file {} is not a valid listing array", self.path.display()))?;

        super::validate_all(&records).context("Listings file failed validation")?;

        info!("Loaded {} listings from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
