use crate::models::{AgentInfo, Coordinates, NearbyPlace, PropertyRecord, PropertyType};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// The built-in reference listings
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleListings;

#[async_trait]
impl ListingSource for SampleListings {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        let records = sample_properties();
        super::validate_all(&records)?;
        info!("📋 Loaded {} sample listings", records.len());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn place(name: &str, category: &str, distance: &str) -> NearbyPlace {
    NearbyPlace {
        name: name.to_string(),
        category: category.to_string(),
        distance: distance.to_string(),
    }
}

fn agent(name: &str, phone: &str, email: &str) -> Option<AgentInfo> {
    Some(AgentInfo {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        photo: None,
    })
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?auto=format&fit=crop&w=2340&q=80", photo)
}

/// Eight listings across the US, four of them flagged new
pub fn sample_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: 1,
            title: "Modern Apartment with City View".to_string(),
            location: "Downtown, New York".to_string(),
            price: 2500,
            bedrooms: 2,
            bathrooms: 2.0,
            area: 1200,
            property_type: PropertyType::Apartment,
            status: None,
            images: vec![unsplash("photo-1522708323590-d24dbb6b0267"), unsplash("photo-1560448204-603b3fc33ddc")],
            description: "Stunning modern apartment with panoramic city views, featuring hardwood floors, \
                          stainless steel appliances, and a spacious balcony."
                .to_string(),
            amenities: strings(&["Elevator", "Gym", "Parking", "Air Conditioning", "Heating", "Washer/Dryer"]),
            is_new: true,
            featured: false,
            coordinates: Some(Coordinates::new(40.7128, -74.0060)),
            nearby_places: vec![
                place("Central Park", "park", "1.2 miles"),
                place("Metropolitan Museum", "culture", "0.8 miles"),
                place("Whole Foods Market", "grocery", "0.3 miles"),
                place("Public School 123", "education", "0.5 miles"),
                place("Downtown Medical Center", "medical", "0.7 miles"),
            ],
            agent_info: agent("Sarah Johnson", "(212) 555-1234", "sarah.johnson@realestateagency.com"),
            floor_plan: None,
        },
        PropertyRecord {
            id: 2,
            title: "Spacious Family Home".to_string(),
            location: "Suburbs, Chicago".to_string(),
            price: 3800,
            bedrooms: 4,
            bathrooms: 3.0,
            area: 2400,
            property_type: PropertyType::House,
            status: None,
            images: vec![unsplash("photo-1583608205776-bfd35f0d9f83"), unsplash("photo-1576941089067-2de3c901e126")],
            description: "Beautiful family home in a quiet neighborhood with a large backyard, modern kitchen, \
                          and finished basement."
                .to_string(),
            amenities: strings(&["Garage", "Backyard", "Fireplace", "Central Heating", "Central Air", "Dishwasher"]),
            is_new: false,
            featured: false,
            coordinates: Some(Coordinates::new(41.8781, -87.6298)),
            nearby_places: vec![
                place("Lincoln Park", "park", "1.5 miles"),
                place("Local High School", "education", "0.7 miles"),
                place("Neighborhood Market", "grocery", "0.4 miles"),
            ],
            agent_info: agent("Michael Chen", "(312) 555-6789", "michael.chen@realestateagency.com"),
            floor_plan: None,
        },
        PropertyRecord {
            id: 3,
            title: "Downtown Loft".to_string(),
            location: "Arts District, Los Angeles".to_string(),
            price: 2200,
            bedrooms: 1,
            bathrooms: 1.0,
            area: 950,
            property_type: PropertyType::Loft,
            status: None,
            images: vec![unsplash("photo-1560448075-57d0285fc803"), unsplash("photo-1586023492125-27b2c045efd7")],
            description: "Industrial-style loft with high ceilings, exposed brick walls, and modern finishes \
                          in the heart of the Arts District."
                .to_string(),
            amenities: strings(&["Elevator", "Rooftop Deck", "Pet Friendly", "In-unit Laundry", "Security System"]),
            is_new: true,
            featured: false,
            coordinates: Some(Coordinates::new(34.0522, -118.2437)),
            nearby_places: vec![
                place("Modern Art Gallery", "culture", "0.2 miles"),
                place("Organic Market", "grocery", "0.5 miles"),
                place("Downtown Park", "park", "0.7 miles"),
            ],
            agent_info: agent("Jessica Rodriguez", "(213) 555-9876", "jessica.rodriguez@realestateagency.com"),
            floor_plan: None,
        },
        PropertyRecord {
            id: 4,
            title: "Luxury Beachfront Condo".to_string(),
            location: "Miami Beach, FL".to_string(),
            price: 5500,
            bedrooms: 3,
            bathrooms: 2.0,
            area: 1800,
            property_type: PropertyType::Condo,
            status: None,
            images: vec![unsplash("photo-1512917774080-9991f1c4c750"), unsplash("photo-1600566753376-12c8ab8e17a9")],
            description: "Stunning beachfront condo with unobstructed ocean views, featuring a gourmet kitchen, \
                          marble bathrooms, and a large balcony."
                .to_string(),
            amenities: strings(&[
                "Swimming Pool",
                "Hot Tub",
                "Gym",
                "24/7 Security",
                "Valet Parking",
                "Private Beach Access",
            ]),
            is_new: false,
            featured: false,
            coordinates: Some(Coordinates::new(25.7617, -80.1918)),
            nearby_places: vec![
                place("South Beach", "recreation", "0.1 miles"),
                place("Ocean Drive Restaurants", "dining", "0.3 miles"),
                place("Luxury Shopping Mall", "shopping", "0.8 miles"),
            ],
            agent_info: agent("Robert Thompson", "(305) 555-4321", "robert.thompson@realestateagency.com"),
            floor_plan: None,
        },
        PropertyRecord {
            id: 5,
            title: "Cozy Studio Apartment".to_string(),
            location: "Downtown, Seattle".to_string(),
            price: 1800,
            bedrooms: 0,
            bathrooms: 1.0,
            area: 550,
            property_type: PropertyType::Studio,
            status: None,
            images: vec![unsplash("photo-1540518614846-7eded433c457"), unsplash("photo-1583845112203-29329902332e")],
            description: "Charming studio apartment in the heart of downtown Seattle, perfect for singles or \
                          couples. Features modern finishes and great natural light."
                .to_string(),
            amenities: strings(&["Elevator", "Laundry Facilities", "Bike Storage", "Rooftop Lounge", "Close to Transit"]),
            is_new: true,
            featured: false,
            coordinates: Some(Coordinates::new(47.6062, -122.3321)),
            nearby_places: vec![],
            agent_info: None,
            floor_plan: None,
        },
        PropertyRecord {
            id: 6,
            title: "Victorian Townhouse".to_string(),
            location: "Historic District, Boston".to_string(),
            price: 4200,
            bedrooms: 3,
            bathrooms: 2.5,
            area: 2100,
            property_type: PropertyType::Townhouse,
            status: None,
            images: vec![unsplash("photo-1571055107559-3e67626fa8be"), unsplash("photo-1592595896616-c37162298647")],
            description: "Beautifully restored Victorian townhouse with original hardwood floors, high ceilings, \
                          and modern updates in Boston's historic district."
                .to_string(),
            amenities: strings(&["Private Garden", "Fireplace", "Period Details", "Updated Kitchen", "Basement Storage"]),
            is_new: false,
            featured: false,
            coordinates: Some(Coordinates::new(42.3601, -71.0589)),
            nearby_places: vec![],
            agent_info: None,
            floor_plan: None,
        },
        PropertyRecord {
            id: 7,
            title: "Mountain View Cabin".to_string(),
            location: "Aspen, Colorado".to_string(),
            price: 3900,
            bedrooms: 2,
            bathrooms: 2.0,
            area: 1500,
            property_type: PropertyType::Cabin,
            status: None,
            images: vec![unsplash("photo-1518780664697-55e3ad937233"), unsplash("photo-1542718610-a1d656d1884c")],
            description: "Rustic yet luxurious cabin with breathtaking mountain views, hot tub, and easy access \
                          to ski slopes and hiking trails."
                .to_string(),
            amenities: strings(&["Hot Tub", "Fireplace", "Mountain Views", "Ski Storage", "Deck", "BBQ Grill"]),
            is_new: false,
            featured: false,
            coordinates: Some(Coordinates::new(39.1911, -106.8175)),
            nearby_places: vec![],
            agent_info: None,
            floor_plan: None,
        },
        PropertyRecord {
            id: 8,
            title: "Contemporary Penthouse".to_string(),
            location: "Financial District, San Francisco".to_string(),
            price: 7800,
            bedrooms: 3,
            bathrooms: 3.0,
            area: 2800,
            property_type: PropertyType::Penthouse,
            status: None,
            images: vec![unsplash("photo-1600607687644-c7ddd0d03d62"), unsplash("photo-1600607688960-e095ff83135c")],
            description: "Stunning penthouse with floor-to-ceiling windows offering panoramic views of the city \
                          and bay. Features gourmet kitchen and private terrace."
                .to_string(),
            amenities: strings(&[
                "Concierge",
                "Private Terrace",
                "Wine Cellar",
                "Smart Home System",
                "Private Elevator",
                "Gym Access",
            ]),
            is_new: true,
            featured: false,
            coordinates: Some(Coordinates::new(37.7946, -122.3999)),
            nearby_places: vec![],
            agent_info: None,
            floor_plan: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_by_id;

    #[tokio::test]
    async fn sample_source_yields_eight_valid_listings() {
        let records = SampleListings.load().await.unwrap();
        assert_eq!(records.len(), 8);
        assert_eq!(records.iter().filter(|r| r.is_new).count(), 4);
        assert_eq!(SampleListings.source_name(), "Sample");
    }

    #[test]
    fn detail_lookup_by_id() {
        let records = sample_properties();
        assert_eq!(find_by_id(&records, 6).map(|r| r.bathrooms), Some(2.5));
        assert!(find_by_id(&records, 99).is_none());
    }
}
