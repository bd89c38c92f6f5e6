//! Side-by-side comparison table.
//!
//! Scalar features come first in a fixed order, followed by one presence row
//! per amenity found on any compared listing (sorted, deduplicated).

use std::collections::BTreeSet;

use crate::format::compact_price;
use crate::models::PropertyRecord;

/// A labelled row with one cell per compared listing
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub label: String,
    pub cells: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable<'a> {
    pub properties: Vec<&'a PropertyRecord>,
    pub features: Vec<Row<String>>,
    pub amenities: Vec<Row<bool>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonView<'a> {
    /// Nothing to compare yet; the UI invites the user to add listings
    Empty,
    Table(ComparisonTable<'a>),
}

/// Scalar rows, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Price,
    Location,
    PropertyType,
    Bedrooms,
    Bathrooms,
    SquareFootage,
    Status,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Price,
        Feature::Location,
        Feature::PropertyType,
        Feature::Bedrooms,
        Feature::Bathrooms,
        Feature::SquareFootage,
        Feature::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Price => "Price",
            Feature::Location => "Location",
            Feature::PropertyType => "Property Type",
            Feature::Bedrooms => "Bedrooms",
            Feature::Bathrooms => "Bathrooms",
            Feature::SquareFootage => "Square Footage",
            Feature::Status => "Status",
        }
    }

    pub fn render(&self, p: &PropertyRecord) -> String {
        match self {
            Feature::Price => compact_price(p.price),
            Feature::Location => p.location.clone(),
            Feature::PropertyType => p.property_type.label().to_string(),
            Feature::Bedrooms => p.bedrooms.to_string(),
            Feature::Bathrooms => p.bathrooms.to_string(),
            Feature::SquareFootage => format!("{} sqft", p.area),
            Feature::Status => p.status_label().to_string(),
        }
    }
}

/// Sorted union of amenity labels across the given listings
pub fn amenity_union(properties: &[PropertyRecord]) -> Vec<String> {
    properties
        .iter()
        .flat_map(|p| p.amenities.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn build(properties: &[PropertyRecord]) -> ComparisonView<'_> {
    if properties.is_empty() {
        return ComparisonView::Empty;
    }

    let features = Feature::ALL
        .iter()
        .map(|feature| Row {
            label: feature.label().to_string(),
            cells: properties.iter().map(|p| feature.render(p)).collect(),
        })
        .collect();

    let amenities = amenity_union(properties)
        .into_iter()
        .map(|amenity| Row {
            cells: properties.iter().map(|p| p.amenities.contains(&amenity)).collect(),
            label: amenity,
        })
        .collect();

    ComparisonView::Table(ComparisonTable {
        properties: properties.iter().collect(),
        features,
        amenities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingStatus;
    use crate::sources::sample::sample_properties;
    use crate::storage::MemoryStorage;
    use crate::stores::{Comparison, ComparisonStore};

    #[test]
    fn empty_comparison_has_no_table() {
        assert_eq!(build(&[]), ComparisonView::Empty);
    }

    #[test]
    fn feature_rows_render_each_listing() {
        let mut records = sample_properties();
        records[3].status = Some(ListingStatus::ForRent);
        let compared = vec![records[0].clone(), records[3].clone()];

        let ComparisonView::Table(table) = build(&compared) else {
            panic!("expected a table");
        };

        let labels: Vec<&str> = table.features.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Price", "Location", "Property Type", "Bedrooms", "Bathrooms", "Square Footage", "Status"]
        );
        assert_eq!(table.features[0].cells, vec!["$3K", "$6K"]);
        assert_eq!(table.features[2].cells, vec!["Apartment", "Condo"]);
        assert_eq!(table.features[5].cells, vec!["1200 sqft", "1800 sqft"]);
        assert_eq!(table.features[6].cells, vec!["For Sale", "For Rent"]);
    }

    #[test]
    fn amenity_rows_are_sorted_union_with_presence() {
        let records = sample_properties();
        let mut store = ComparisonStore::open(MemoryStorage::new()).unwrap();
        store.add(&records[0]).unwrap();
        store.add(&records[3]).unwrap();

        let ComparisonView::Table(table) = build(store.properties()) else {
            panic!("expected a table");
        };

        let labels: Vec<&str> = table.amenities.iter().map(|r| r.label.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
        // Gym is the only amenity both listings share.
        assert_eq!(labels.len(), 11);

        let gym = table.amenities.iter().find(|r| r.label == "Gym").unwrap();
        assert_eq!(gym.cells, vec![true, true]);
        let pool = table.amenities.iter().find(|r| r.label == "Swimming Pool").unwrap();
        assert_eq!(pool.cells, vec![false, true]);
    }

    #[test]
    fn half_bathrooms_render_with_decimal() {
        let records = sample_properties();
        let ComparisonView::Table(table) = build(&records[5..6]) else {
            panic!("expected a table");
        };
        assert_eq!(table.features[4].cells, vec!["2.5"]);
    }
}
