use tracing::debug;

use crate::models::PropertyRecord;
use crate::stores::FilterStore;

use super::criteria::{FilterCriteria, SortOption};
use super::pagination::DEFAULT_PAGE_SIZE;
use super::pipeline::{search, SearchOutcome, SearchRequest};
use super::query::RouteQuery;

/// State behind the search results view.
///
/// Any change to the text query, the criteria or the sort sends the user
/// back to page 1; moving between pages leaves everything else alone.
#[derive(Debug, Clone)]
pub struct SearchSession {
    records: Vec<PropertyRecord>,
    text: Option<String>,
    criteria: FilterCriteria,
    sort: SortOption,
    page: usize,
    page_size: usize,
}

impl SearchSession {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self::with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(records: Vec<PropertyRecord>, page_size: usize) -> Self {
        Self {
            records,
            text: None,
            criteria: FilterCriteria::default(),
            sort: SortOption::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_text(&mut self, text: Option<String>) {
        let text = text.filter(|t| !t.trim().is_empty());
        if text != self.text {
            self.text = text;
            self.reset_page();
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.reset_page();
        }
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        if sort != self.sort {
            self.sort = sort;
            self.reset_page();
        }
    }

    /// Pages below 1 become 1; pages past the end are clamped when results are computed.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Pick up criteria and sort from the filter panel.
    pub fn sync_filters(&mut self, filters: &FilterStore) {
        self.set_criteria(filters.criteria().clone());
        self.set_sort(filters.sort());
    }

    /// Apply a search route on top of the current state. A `page`
    /// parameter wins over the reset caused by the other parameters.
    pub fn apply_route(&mut self, query: &RouteQuery) {
        self.set_text(query.text.clone());

        let mut criteria = self.criteria.clone();
        query.apply_to(&mut criteria);
        self.set_criteria(criteria);

        if let Some(sort) = query.sort {
            self.set_sort(sort);
        }
        if let Some(page) = query.page {
            self.set_page(page);
        }
    }

    pub fn results(&self) -> SearchOutcome<'_> {
        search(
            &self.records,
            &SearchRequest {
                text: self.text.as_deref(),
                criteria: &self.criteria,
                sort: self.sort,
                page: self.page,
                page_size: self.page_size,
            },
        )
    }

    fn reset_page(&mut self) {
        if self.page != 1 {
            debug!("search inputs changed, back to page 1");
        }
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::record;
    use crate::models::PropertyType;
    use crate::search::criteria::FilterPatch;
    use crate::sources::sample::sample_properties;

    #[test]
    fn changing_only_the_page_keeps_it() {
        let mut session = SearchSession::new(sample_properties());
        session.set_page(2);
        assert_eq!(session.page(), 2);

        session.set_sort(SortOption::Newest);
        assert_eq!(session.page(), 2, "same sort is not a change");
    }

    #[test]
    fn changing_sort_text_or_criteria_resets_page() {
        let mut session = SearchSession::new(sample_properties());

        session.set_page(2);
        session.set_sort(SortOption::PriceLowToHigh);
        assert_eq!(session.page(), 1);

        session.set_page(2);
        session.set_text(Some("downtown".to_string()));
        assert_eq!(session.page(), 1);

        session.set_page(2);
        let mut filters = FilterStore::new();
        filters.toggle_property_type(PropertyType::House);
        session.sync_filters(&filters);
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn route_page_survives_the_filter_reset() {
        let mut session = SearchSession::new(sample_properties());
        let query = RouteQuery::parse("sort=price-low&page=2").unwrap();
        session.apply_route(&query);

        assert_eq!(session.sort(), SortOption::PriceLowToHigh);
        let SearchOutcome::Page(page) = session.results() else {
            panic!("expected results");
        };
        assert_eq!(page.page, 2);
        // Two most expensive listings, cheapest first.
        let ids: Vec<u32> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 8]);
    }

    #[test]
    fn route_filters_narrow_the_results() {
        let mut session = SearchSession::new(sample_properties());
        session.apply_route(&RouteQuery::parse("q=loft").unwrap());

        let outcome = session.results();
        assert_eq!(outcome.total_count(), 1);
        assert_eq!(outcome.items()[0].title, "Downtown Loft");

        let mut filters = FilterStore::new();
        filters.update_filters(FilterPatch {
            property_types: Some([PropertyType::House].into_iter().collect()),
            ..Default::default()
        });
        session.sync_filters(&filters);
        assert_eq!(session.results(), SearchOutcome::NoResults);
    }

    fn result_ids(session: &SearchSession) -> Vec<u32> {
        session.results().items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn route_min_price_keeps_listings_above_the_default_ceiling() {
        let records = vec![record(1, "Estate", 3_500_000), record(2, "Flat", 2_000)];

        let mut session = SearchSession::new(records.clone());
        session.apply_route(&RouteQuery::parse("minPrice=3000").unwrap());
        assert_eq!(result_ids(&session), vec![1]);

        let mut session = SearchSession::new(records);
        session.apply_route(&RouteQuery::parse("minPrice=3000000").unwrap());
        assert_eq!(result_ids(&session), vec![1]);
    }

    #[test]
    fn route_type_matches_only_that_exact_name() {
        let mut villa = record(1, "Villa", 900_000);
        villa.property_type = PropertyType::Other("villa".to_string());
        let mut houseboat = record(2, "Houseboat", 150_000);
        houseboat.property_type = PropertyType::Other("houseboat".to_string());

        let mut session = SearchSession::new(vec![villa, houseboat]);
        session.apply_route(&RouteQuery::parse("type=houseboat").unwrap());
        assert_eq!(result_ids(&session), vec![2]);

        let mut session = SearchSession::new(sample_properties());
        session.apply_route(&RouteQuery::parse("type=houseboat").unwrap());
        assert_eq!(session.results(), SearchOutcome::NoResults);
    }

    #[test]
    fn page_size_is_configurable() {
        let session = SearchSession::with_page_size(sample_properties(), 3);
        let SearchOutcome::Page(page) = session.results() else {
            panic!("expected results");
        };
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 3);
    }
}
