use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, ListingStatus, PropertyType};

pub const DEFAULT_PRICE_RANGE: Range = Range { min: 0, max: 2_000_000 };
pub const DEFAULT_AREA_RANGE: Range = Range { min: 0, max: 5_000 };
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Inclusive numeric bounds. `min <= max` is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: u64,
    pub max: u64,
}

impl Range {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Where the user wants to live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    pub city: String,
    pub zip_code: String,
    pub coordinates: Option<Coordinates>,
    pub radius_km: f64,
}

impl Default for LocationFilter {
    fn default() -> Self {
        Self {
            city: String::new(),
            zip_code: String::new(),
            coordinates: None,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl LocationFilter {
    pub fn is_empty(&self) -> bool {
        self.city.trim().is_empty() && self.zip_code.trim().is_empty() && self.coordinates.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    ForSale,
    ForRent,
}

impl StatusFilter {
    pub fn matches(&self, status: Option<ListingStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ForSale => status == Some(ListingStatus::ForSale),
            StatusFilter::ForRent => status == Some(ListingStatus::ForRent),
        }
    }
}

/// Every constraint the user can put on the listing set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub property_types: BTreeSet<PropertyType>,
    pub price_range: Range,
    pub bedrooms: BTreeSet<u32>,
    /// Selected bathroom counts, half steps allowed
    pub bathrooms: Vec<f32>,
    pub amenities: BTreeSet<String>,
    pub location: LocationFilter,
    pub square_footage: Range,
    pub status: StatusFilter,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            property_types: BTreeSet::new(),
            price_range: DEFAULT_PRICE_RANGE,
            bedrooms: BTreeSet::new(),
            bathrooms: Vec::new(),
            amenities: BTreeSet::new(),
            location: LocationFilter::default(),
            square_footage: DEFAULT_AREA_RANGE,
            status: StatusFilter::All,
        }
    }
}

/// Partial update: only the `Some` fields replace the current value.
/// Nested values (ranges, location) are replaced whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    pub property_types: Option<BTreeSet<PropertyType>>,
    pub price_range: Option<Range>,
    pub bedrooms: Option<BTreeSet<u32>>,
    pub bathrooms: Option<Vec<f32>>,
    pub amenities: Option<BTreeSet<String>>,
    pub location: Option<LocationFilter>,
    pub square_footage: Option<Range>,
    pub status: Option<StatusFilter>,
}

impl FilterCriteria {
    /// Shallow merge of a patch into these criteria
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(v) = patch.property_types {
            self.property_types = v;
        }
        if let Some(v) = patch.price_range {
            self.price_range = v;
        }
        if let Some(v) = patch.bedrooms {
            self.bedrooms = v;
        }
        if let Some(v) = patch.bathrooms {
            self.bathrooms = v;
        }
        if let Some(v) = patch.amenities {
            self.amenities = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.square_footage {
            self.square_footage = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }

    /// Number of filter groups that differ from their defaults
    pub fn active_count(&self) -> usize {
        [
            !self.property_types.is_empty(),
            !self.bedrooms.is_empty(),
            !self.bathrooms.is_empty(),
            !self.amenities.is_empty(),
            !self.location.city.trim().is_empty() || !self.location.zip_code.trim().is_empty(),
            self.price_range != DEFAULT_PRICE_RANGE,
            self.square_footage != DEFAULT_AREA_RANGE,
            self.status != StatusFilter::All,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceHighToLow => "price-high",
            SortOption::PriceLowToHigh => "price-low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOption::Newest),
            "price-high" => Ok(SortOption::PriceHighToLow),
            "price-low" => Ok(SortOption::PriceLowToHigh),
            other => Err(format!("unknown sort option `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_replaces_only_given_top_level_keys() {
        let mut criteria = FilterCriteria::default();
        criteria.location.city = "Boston".to_string();

        criteria.apply(FilterPatch {
            status: Some(StatusFilter::ForRent),
            price_range: Some(Range::new(1_000, 5_000)),
            ..Default::default()
        });

        assert_eq!(criteria.status, StatusFilter::ForRent);
        assert_eq!(criteria.price_range, Range::new(1_000, 5_000));
        assert_eq!(criteria.location.city, "Boston");
        assert_eq!(criteria.square_footage, DEFAULT_AREA_RANGE);
    }

    #[test]
    fn location_patch_is_not_deep_merged() {
        let mut criteria = FilterCriteria::default();
        criteria.location.city = "Boston".to_string();
        criteria.location.radius_km = 25.0;

        let patch: FilterPatch =
            serde_json::from_str(r#"{"location": {"city": "", "zipCode": "02108", "coordinates": null, "radiusKm": 10}}"#)
                .unwrap();
        criteria.apply(patch);

        assert_eq!(criteria.location.city, "");
        assert_eq!(criteria.location.zip_code, "02108");
        assert_eq!(criteria.location.radius_km, 10.0);
    }

    #[test]
    fn active_count_tracks_non_default_groups() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_count(), 0);

        criteria.bedrooms.insert(2);
        criteria.status = StatusFilter::ForSale;
        criteria.square_footage = Range::new(500, 5_000);
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn sort_option_wire_names() {
        assert_eq!("price-low".parse::<SortOption>().unwrap(), SortOption::PriceLowToHigh);
        assert_eq!(SortOption::PriceHighToLow.to_string(), "price-high");
        assert!("cheapest".parse::<SortOption>().is_err());
        assert_eq!(serde_json::to_string(&SortOption::Newest).unwrap(), "\"newest\"");
    }

    #[test]
    fn status_filter_requires_a_status_to_match() {
        assert!(StatusFilter::All.matches(None));
        assert!(!StatusFilter::ForRent.matches(None));
        assert!(StatusFilter::ForRent.matches(Some(ListingStatus::ForRent)));
        assert!(!StatusFilter::ForSale.matches(Some(ListingStatus::ForRent)));
    }
}
