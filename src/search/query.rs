use std::str::FromStr;

use serde::Deserialize;

use crate::error::QueryError;
use crate::models::PropertyType;

use super::criteria::{FilterCriteria, SortOption, DEFAULT_PRICE_RANGE};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawQuery {
    q: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    bedrooms: Option<String>,
    #[serde(rename = "type")]
    property_type: Option<String>,
    sort: Option<String>,
    page: Option<String>,
}

/// Parameters accepted by the search results route
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteQuery {
    pub text: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<u32>,
    pub property_type: Option<PropertyType>,
    pub sort: Option<SortOption>,
    pub page: Option<usize>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn number<T: FromStr>(param: &'static str, value: Option<String>) -> Result<Option<T>, QueryError> {
    match non_empty(value) {
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| QueryError::InvalidNumber { param, value: v }),
        None => Ok(None),
    }
}

impl RouteQuery {
    /// Parse `q=loft&minPrice=1000&type=condo&sort=price-low&page=2`.
    /// Empty parameters count as absent.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let raw: RawQuery = serde_urlencoded::from_str(query.trim_start_matches('?'))?;

        let sort = match non_empty(raw.sort) {
            Some(s) => Some(s.parse::<SortOption>().map_err(QueryError::InvalidSort)?),
            None => None,
        };

        // Unknown types are kept by name and only match listings of that name.
        let property_type = non_empty(raw.property_type).map(PropertyType::from);

        Ok(Self {
            text: non_empty(raw.q),
            min_price: number("minPrice", raw.min_price)?,
            max_price: number("maxPrice", raw.max_price)?,
            bedrooms: number("bedrooms", raw.bedrooms)?,
            property_type,
            sort,
            page: number("page", raw.page)?,
        })
    }

    /// Overlay the route's filters on top of the stored criteria.
    ///
    /// A lone `minPrice` leaves the upper end open unless the stored range
    /// already narrowed it; a lone `maxPrice` keeps the stored lower end.
    pub fn apply_to(&self, criteria: &mut FilterCriteria) {
        if let Some(min) = self.min_price {
            criteria.price_range.min = min;
            if self.max_price.is_none() && criteria.price_range.max == DEFAULT_PRICE_RANGE.max {
                criteria.price_range.max = u64::MAX;
            }
        }
        if let Some(max) = self.max_price {
            criteria.price_range.max = max;
        }
        if let Some(bedrooms) = self.bedrooms {
            criteria.bedrooms = [bedrooms].into_iter().collect();
        }
        if let Some(property_type) = &self.property_type {
            criteria.property_types = [property_type.clone()].into_iter().collect();
        }
    }
}
