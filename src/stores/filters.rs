use tracing::debug;

use crate::models::PropertyType;
use crate::search::criteria::{FilterCriteria, FilterPatch, SortOption, ViewMode};

/// Active filter criteria plus the sort and view choices of the results list
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
    sort: SortOption,
    view_mode: ViewMode,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Shallow merge; no range validation happens here.
    pub fn update_filters(&mut self, patch: FilterPatch) {
        self.criteria.apply(patch);
        debug!(active = self.criteria.active_count(), "filters updated");
    }

    /// Back to default criteria and newest-first. View mode is kept.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort = SortOption::Newest;
        debug!("filters reset");
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_count()
    }

    pub fn toggle_property_type(&mut self, property_type: PropertyType) {
        let types = &mut self.criteria.property_types;
        if !types.remove(&property_type) {
            types.insert(property_type);
        }
    }

    pub fn toggle_bedrooms(&mut self, count: u32) {
        let bedrooms = &mut self.criteria.bedrooms;
        if !bedrooms.remove(&count) {
            bedrooms.insert(count);
        }
    }

    pub fn toggle_bathrooms(&mut self, count: f32) {
        let bathrooms = &mut self.criteria.bathrooms;
        match bathrooms.iter().position(|b| *b == count) {
            Some(index) => {
                bathrooms.remove(index);
            }
            None => bathrooms.push(count),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        let amenities = &mut self.criteria.amenities;
        if !amenities.remove(amenity) {
            amenities.insert(amenity.to_string());
        }
    }
}
