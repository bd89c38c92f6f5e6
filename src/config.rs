use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::search::DEFAULT_PAGE_SIZE;
use crate::storage::StorageSource;

pub const DATA_DIR_VAR: &str = "HOUSING_DATA_DIR";
pub const LISTINGS_VAR: &str = "HOUSING_LISTINGS";
pub const PAGE_SIZE_VAR: &str = "HOUSING_PAGE_SIZE";

const DEFAULT_DATA_DIR: &str = ".housing-browser";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where favorites, comparison list and user session persist
    pub storage: StorageSource,
    /// JSON listings file; the built-in sample set when unset
    pub listings: Option<PathBuf>,
    pub page_size: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir: String = try_load(&lookup, DATA_DIR_VAR, DEFAULT_DATA_DIR)?;
        let storage = if data_dir == ":memory:" {
            StorageSource::Memory
        } else {
            StorageSource::Directory(PathBuf::from(data_dir))
        };

        let listings = lookup(LISTINGS_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let page_size: usize = try_load(&lookup, PAGE_SIZE_VAR, &DEFAULT_PAGE_SIZE.to_string())?;
        if page_size == 0 {
            anyhow::bail!("{PAGE_SIZE_VAR} must be at least 1");
        }

        Ok(Self {
            storage,
            listings,
            page_size,
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow::anyhow!("{e}")
        })
        .with_context(|| format!("Environment variable {key} is misconfigured"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.page_size, 6);
        assert!(config.listings.is_none());
        assert!(matches!(config.storage, StorageSource::Directory(ref p) if p == &PathBuf::from(".housing-browser")));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (DATA_DIR_VAR, ":memory:"),
            (LISTINGS_VAR, "listings.json"),
            (PAGE_SIZE_VAR, "12"),
        ]))
        .unwrap();
        assert!(matches!(config.storage, StorageSource::Memory));
        assert_eq!(config.listings, Some(PathBuf::from("listings.json")));
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn rejects_bad_page_size() {
        assert!(Config::from_lookup(lookup(&[(PAGE_SIZE_VAR, "six")])).is_err());
        assert!(Config::from_lookup(lookup(&[(PAGE_SIZE_VAR, "0")])).is_err());
    }
}
