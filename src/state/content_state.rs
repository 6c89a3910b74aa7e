use crate::models::Service;
use crate::services::filter::{self, CategoryFilter};

/// Where the catalog load currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Single source of truth for what the grid shows
pub struct ContentState {
    // Catalog (replaced wholesale on load, ratings mutated in place)
    pub catalog: Vec<Service>,
    pub status: CatalogStatus,

    // Filter & Search
    pub current_filter: CategoryFilter,
    pub current_search: String,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            status: CatalogStatus::Loading,
            current_filter: CategoryFilter::All,
            current_search: String::new(),
        }
    }
}

impl ContentState {
    /// Replace the catalog after a successful load
    pub fn set_catalog(&mut self, services: Vec<Service>) {
        self.catalog = services;
        self.status = CatalogStatus::Loaded;
    }

    /// Record a failed load; any previous catalog is dropped
    pub fn set_load_failed(&mut self, message: String) {
        self.catalog.clear();
        self.status = CatalogStatus::Failed(message);
    }

    /// Services matching the current filter and search
    pub fn visible_services(&self) -> Vec<&Service> {
        filter::visible(&self.catalog, &self.current_filter, &self.current_search)
    }

    pub fn categories(&self) -> Vec<&str> {
        filter::categories(&self.catalog)
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }
}
