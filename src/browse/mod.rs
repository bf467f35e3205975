use crate::catalog::RecordStore;
use crate::models::{PropertyRecord, ViewMode};
use crate::query::{self, FilterCriteria};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// One clearable facet of the active criteria
///
/// Clearing `PropertyType` removes a single value from the type set; every
/// other variant resets its bound to "unconstrained".
#[derive(Debug, Clone, PartialEq)]
pub enum FilterField {
    PriceMin,
    PriceMax,
    PropertyType(String),
    BedroomsMin,
    BathroomsMin,
    SquareFeetMin,
    SquareFeetMax,
}

type ResultListener = Box<dyn Fn(&[PropertyRecord]) + Send + Sync>;

/// Owns one browse session's live query state.
///
/// Holds the active criteria, search term and view mode; any change to the
/// first two re-runs the filter engine over the whole catalog and hands the
/// fresh result set to every subscriber. Only the search term round-trips
/// through the shareable query string — criteria stay session-local.
pub struct BrowseController {
    catalog: Arc<RecordStore>,
    criteria: FilterCriteria,
    search_term: String,
    view: ViewMode,
    results: Vec<PropertyRecord>,
    listeners: Vec<ResultListener>,
    simulated_latency: Duration,
}

impl BrowseController {
    pub fn new(catalog: Arc<RecordStore>) -> Self {
        let mut controller = Self {
            catalog,
            criteria: FilterCriteria::default(),
            search_term: String::new(),
            view: ViewMode::default(),
            results: Vec::new(),
            listeners: Vec::new(),
            simulated_latency: Duration::ZERO,
        };
        controller.refresh();
        controller
    }

    /// Add an artificial delay before each result publication.
    ///
    /// Demo affordance only; the default is zero and nothing depends on it.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Register for result-set updates; fires on every re-query
    pub fn subscribe(&mut self, listener: impl Fn(&[PropertyRecord]) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn results(&self) -> &[PropertyRecord] {
        &self.results
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    /// Reset a single facet back to its unconstrained state
    pub fn clear_filter(&mut self, field: FilterField) {
        match field {
            FilterField::PriceMin => self.criteria.price_min = None,
            FilterField::PriceMax => self.criteria.price_max = None,
            FilterField::PropertyType(value) => {
                self.criteria.property_types.retain(|t| *t != value);
            }
            FilterField::BedroomsMin => self.criteria.bedrooms_min = None,
            FilterField::BathroomsMin => self.criteria.bathrooms_min = None,
            FilterField::SquareFeetMin => self.criteria.square_feet_min = None,
            FilterField::SquareFeetMax => self.criteria.square_feet_max = None,
        }
        self.refresh();
    }

    pub fn clear_all_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        info!("all filters cleared");
        self.refresh();
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Shareable query-string fragment carrying the search term, if any
    pub fn search_query_string(&self) -> Option<String> {
        if self.search_term.is_empty() {
            return None;
        }
        Some(format!("search={}", urlencoding::encode(&self.search_term)))
    }

    /// Restore the search term from a query string (`?search=...`)
    ///
    /// Criteria are deliberately not restored — they never leave the
    /// session. Unknown parameters are ignored.
    pub fn restore_from_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            if parts.next() == Some("search") {
                let raw = parts.next().unwrap_or("");
                if let Ok(term) = urlencoding::decode(raw) {
                    self.set_search_term(term.into_owned());
                }
                return;
            }
        }
    }

    fn refresh(&mut self) {
        if !self.simulated_latency.is_zero() {
            std::thread::sleep(self.simulated_latency);
        }
        self.results = query::search(self.catalog.records(), &self.criteria, &self.search_term);
        debug!(
            matched = self.results.len(),
            term = %self.search_term,
            "browse results refreshed"
        );
        for listener in &self.listeners {
            listener(&self.results);
        }
    }
}
