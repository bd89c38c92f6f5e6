//! Filter → sort → paginate over an immutable record list.
//!
//! Everything here is a pure function of its inputs; the [`super::session`]
//! module decides when to re-run it and which page to ask for.

use tracing::debug;

use crate::models::PropertyRecord;
use crate::stores::{Comparison, Favorites};

use super::criteria::{FilterCriteria, LocationFilter, SortOption, DEFAULT_AREA_RANGE, DEFAULT_PRICE_RANGE};
use super::pagination::{clamp_page, page_slice, total_pages, PageControls};

/// One page of matching listings
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<'a> {
    pub items: Vec<&'a PropertyRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl ResultPage<'_> {
    pub fn controls(&self) -> PageControls {
        PageControls::new(self.page, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Nothing matched; shown instead of an empty page
    NoResults,
    Page(ResultPage<'a>),
}

impl<'a> SearchOutcome<'a> {
    pub fn total_count(&self) -> usize {
        match self {
            SearchOutcome::NoResults => 0,
            SearchOutcome::Page(page) => page.total_count,
        }
    }

    pub fn items(&self) -> &[&'a PropertyRecord] {
        match self {
            SearchOutcome::NoResults => &[],
            SearchOutcome::Page(page) => &page.items,
        }
    }
}

/// Everything the pipeline needs besides the records
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'q> {
    pub text: Option<&'q str>,
    pub criteria: &'q FilterCriteria,
    pub sort: SortOption,
    pub page: usize,
    pub page_size: usize,
}

pub fn matches_text(record: &PropertyRecord, needle_lower: &str) -> bool {
    record.title.to_lowercase().contains(needle_lower) || record.location.to_lowercase().contains(needle_lower)
}

fn matches_location(record: &PropertyRecord, location: &LocationFilter) -> bool {
    let haystack = record.location.to_lowercase();

    let city = location.city.trim().to_lowercase();
    if !city.is_empty() && !haystack.contains(&city) {
        return false;
    }
    let zip = location.zip_code.trim().to_lowercase();
    if !zip.is_empty() && !haystack.contains(&zip) {
        return false;
    }
    match (&location.coordinates, &record.coordinates) {
        (Some(center), Some(at)) => center.distance_km(at) <= location.radius_km,
        (Some(_), None) => false,
        (None, _) => true,
    }
}

/// Whether a record satisfies every active criterion.
///
/// Bedroom and bathroom selections mean "at least the smallest selected
/// count". Default price/area ranges do not constrain anything.
pub fn matches_criteria(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    if criteria.price_range != DEFAULT_PRICE_RANGE && !criteria.price_range.contains(record.price) {
        return false;
    }
    if let Some(min_bedrooms) = criteria.bedrooms.iter().next() {
        if record.bedrooms < *min_bedrooms {
            return false;
        }
    }
    let min_bathrooms = criteria.bathrooms.iter().copied().fold(None, |acc: Option<f32>, b| {
        Some(acc.map_or(b, |a| a.min(b)))
    });
    if let Some(min_bathrooms) = min_bathrooms {
        if record.bathrooms < min_bathrooms {
            return false;
        }
    }
    if !criteria.property_types.is_empty() && !criteria.property_types.contains(&record.property_type) {
        return false;
    }
    if !criteria.status.matches(record.status) {
        return false;
    }
    if !criteria.amenities.iter().all(|a| record.has_amenity(a)) {
        return false;
    }
    if criteria.square_footage != DEFAULT_AREA_RANGE && !criteria.square_footage.contains(u64::from(record.area)) {
        return false;
    }
    matches_location(record, &criteria.location)
}

/// Stable sort: equal keys keep their incoming order.
pub fn sort_records(records: &mut [&PropertyRecord], sort: SortOption) {
    match sort {
        SortOption::PriceHighToLow => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::PriceLowToHigh => records.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::Newest => records.sort_by_key(|r| !r.is_new),
    }
}

/// Text + criteria filter, then sort. No pagination.
pub fn filter_and_sort<'a>(
    records: &'a [PropertyRecord],
    text: Option<&str>,
    criteria: &FilterCriteria,
    sort: SortOption,
) -> Vec<&'a PropertyRecord> {
    let needle = text.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty());

    let mut matched: Vec<&PropertyRecord> = records
        .iter()
        .filter(|r| needle.as_deref().map_or(true, |n| matches_text(r, n)))
        .filter(|r| matches_criteria(r, criteria))
        .collect();

    sort_records(&mut matched, sort);
    matched
}

/// Run the whole pipeline and cut out the requested page.
pub fn search<'a>(records: &'a [PropertyRecord], request: &SearchRequest<'_>) -> SearchOutcome<'a> {
    let matched = filter_and_sort(records, request.text, request.criteria, request.sort);
    debug!(
        matched = matched.len(),
        of = records.len(),
        sort = %request.sort,
        "search"
    );

    if matched.is_empty() {
        return SearchOutcome::NoResults;
    }

    let total_count = matched.len();
    let total_pages = total_pages(total_count, request.page_size);
    let page = clamp_page(request.page, total_pages);
    let items = page_slice(&matched, page, request.page_size).to_vec();

    SearchOutcome::Page(ResultPage {
        items,
        page,
        total_pages,
        total_count,
    })
}

/// A listing as the results list shows it
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    pub record: &'a PropertyRecord,
    pub is_favorite: bool,
    pub in_comparison: bool,
}

/// Pair each visible record with its favorite and comparison membership.
pub fn decorate<'a>(
    items: &[&'a PropertyRecord],
    favorites: &dyn Favorites,
    comparison: &dyn Comparison,
) -> Vec<ListingView<'a>> {
    items
        .iter()
        .map(|&record| ListingView {
            record,
            is_favorite: favorites.is_favorite(record.id),
            in_comparison: comparison.is_in_comparison(record.id),
        })
        .collect()
}
