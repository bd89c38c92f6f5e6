use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

pub type PropertyId = u32;

/// Kind of dwelling a listing describes.
///
/// Names outside the known set are kept verbatim in `Other` so they persist
/// unchanged and only match the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Townhouse,
    Penthouse,
    Studio,
    Loft,
    Cabin,
    Other(String),
}

impl PropertyType {
    /// Wire name, as stored in the `type` field.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Studio => "studio",
            PropertyType::Loft => "loft",
            PropertyType::Cabin => "cabin",
            PropertyType::Other(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Studio => "Studio",
            PropertyType::Loft => "Loft",
            PropertyType::Cabin => "Cabin",
            PropertyType::Other(name) => name,
        }
    }
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "apartment" => PropertyType::Apartment,
            "house" => PropertyType::House,
            "condo" => PropertyType::Condo,
            "townhouse" => PropertyType::Townhouse,
            "penthouse" => PropertyType::Penthouse,
            "studio" => PropertyType::Studio,
            "loft" => PropertyType::Loft,
            "cabin" => PropertyType::Cabin,
            _ => PropertyType::Other(name),
        }
    }
}

impl From<PropertyType> for String {
    fn from(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PropertyType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PropertyType::from(s.to_string()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    ForSale,
    ForRent,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
        }
    }
}

/// Geographic position of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance in kilometres (haversine)
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }

    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A point of interest close to the property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyPlace {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub distance: String,
}

/// Listing agent contact details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Core property listing model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub area: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub nearby_places: Vec<NearbyPlace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_info: Option<AgentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
}

impl PropertyRecord {
    /// Check the invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.title.trim().is_empty() {
            return Err(RecordError::MissingField { id: self.id, field: "title" });
        }
        if self.location.trim().is_empty() {
            return Err(RecordError::MissingField { id: self.id, field: "location" });
        }
        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 || (self.bathrooms * 2.0).fract() != 0.0 {
            return Err(RecordError::InvalidBathrooms { id: self.id, value: self.bathrooms });
        }
        if let Some(coordinates) = &self.coordinates {
            if !coordinates.is_valid() {
                return Err(RecordError::InvalidCoordinates { id: self.id });
            }
        }
        Ok(())
    }

    pub fn has_amenity(&self, label: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(label))
    }

    pub fn status_label(&self) -> &'static str {
        self.status.unwrap_or(ListingStatus::ForSale).label()
    }
}

/// Find a listing by id, as the detail view does.
pub fn find_by_id(records: &[PropertyRecord], id: PropertyId) -> Option<&PropertyRecord> {
    records.iter().find(|r| r.id == id)
}


#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;

    #[test]
    fn deserializes_camel_case_listing_with_defaults() {
        let json = r#"{
            "id": 3,
            "title": "Downtown Loft",
            "location": "Arts District, Los Angeles",
            "price": 2200,
            "bedrooms": 1,
            "bathrooms": 1,
            "area": 950,
            "type": "loft",
            "isNew": true,
            "nearbyPlaces": [{"name": "Organic Market", "type": "grocery", "distance": "0.5 miles"}]
        }"#;

        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.property_type, PropertyType::Loft);
        assert!(record.is_new);
        assert!(!record.featured);
        assert!(record.status.is_none());
        assert!(record.amenities.is_empty());
        assert_eq!(record.nearby_places[0].category, "grocery");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn unknown_property_type_is_kept_verbatim() {
        let json = r#"{"id":1,"title":"t","location":"l","price":1,"bedrooms":1,
            "bathrooms":1,"area":1,"type":"villa","status":"for-rent"}"#;
        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.property_type, PropertyType::Other("villa".to_string()));
        assert_eq!(record.status, Some(ListingStatus::ForRent));

        let saved = serde_json::to_value(&record).unwrap();
        assert_eq!(saved["type"], "villa");
        let restored: PropertyRecord = serde_json::from_value(saved).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn known_property_types_parse_case_insensitively() {
        assert_eq!("Condo".parse::<PropertyType>().unwrap(), PropertyType::Condo);
        assert_eq!(serde_json::to_string(&PropertyType::Condo).unwrap(), "\"condo\"");
        assert_ne!(
            "houseboat".parse::<PropertyType>().unwrap(),
            "villa".parse::<PropertyType>().unwrap()
        );
    }

    #[test]
    fn rejects_quarter_bathrooms() {
        let mut r = record(7, "Cabin", 100);
        r.bathrooms = 1.25;
        assert!(matches!(r.validate(), Err(RecordError::InvalidBathrooms { id: 7, .. })));

        r.bathrooms = 2.5;
        assert!(r.validate().is_ok());
    }

    #[test]
    fn rejects_blank_title_and_bad_coordinates() {
        let mut r = record(1, "  ", 100);
        assert!(matches!(r.validate(), Err(RecordError::MissingField { field: "title", .. })));

        r.title = "Ok".to_string();
        r.coordinates = Some(Coordinates::new(120.0, 0.0));
        assert!(matches!(r.validate(), Err(RecordError::InvalidCoordinates { id: 1 })));
    }

    #[test]
    fn distance_between_new_york_and_los_angeles() {
        let ny = Coordinates::new(40.7128, -74.0060);
        let la = Coordinates::new(34.0522, -118.2437);
        let d = ny.distance_km(&la);
        assert!((3900.0..4000.0).contains(&d), "distance was {}", d);
    }

    #[test]
    fn missing_status_reads_as_for_sale() {
        let r = record(1, "A", 1);
        assert_eq!(r.status_label(), "For Sale");
    }
}
