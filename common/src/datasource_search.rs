//! State of the datasource search page, kept in sync with the URL.
//!
//! The URL query string is the only source of truth. A route emission is
//! ingested into [`UrlParameters`], the catalogue is searched with them, and the
//! results are applied: facet checks, form fields and the pagination window
//! are all derived from the parameters. User actions edit the parameters and
//! [`DatasourceSearchState::commit`] navigates; the next ingest refreshes the
//! view.

use std::fmt::Display;

use crate::catalogue::QueryNavigator;
use crate::datasource::{DatasourceDetails, DatasourceTypes};
use crate::pagination::Pagination;
use crate::paging::{Paging, mark_checked_facets, premium_sort_facets};
use crate::query_params::QueryParams;
use crate::search_const::{
    DEFAULT_ORDER, DEFAULT_ORDER_FIELD, KEY_DATASOURCE_TYPE, KEY_FROM, KEY_ORDER, KEY_ORDER_FIELD, KEY_QUERY,
    PREMIUM_FACET_FIELDS,
};
use crate::url_parameter::UrlParameters;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasourceSearchState {
    pub url_parameters: UrlParameters,
    pub search_results: Option<Paging<DatasourceDetails>>,
    pub datasource_types: Option<DatasourceTypes>,

    // form fields, derived from `url_parameters`
    pub search_query: Option<String>,
    pub eosc_datasource_type: String,
    pub order_field: String,
    pub order: String,

    pub pagination: Pagination,
    pub error_message: Option<String>,
    pub loading: bool,
}

impl Default for DatasourceSearchState {
    fn default() -> Self {
        Self {
            url_parameters: UrlParameters::new(),
            search_results: None,
            datasource_types: None,
            search_query: None,
            eosc_datasource_type: String::new(),
            order_field: DEFAULT_ORDER_FIELD.to_string(),
            order: DEFAULT_ORDER.to_string(),
            pagination: Pagination::default(),
            error_message: None,
            loading: false,
        }
    }
}

impl DatasourceSearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the parameter list with the one carried by `raw` and returns
    /// the parameters the search request must be made with.
    pub fn ingest(&mut self, raw: &QueryParams) -> UrlParameters {
        self.url_parameters = UrlParameters::from_query(raw);
        self.loading = true;
        self.url_parameters.clone()
    }

    pub fn complete_search<E: Display>(&mut self, outcome: Result<Paging<DatasourceDetails>, E>) {
        match outcome {
            Ok(results) => self.apply_results(results),
            Err(e) => self.apply_error(e),
        }
    }

    pub fn apply_results(&mut self, mut results: Paging<DatasourceDetails>) {
        self.error_message = None;
        self.loading = false;

        if !results.results.is_empty() {
            premium_sort_facets(&mut results.facets, &PREMIUM_FACET_FIELDS);
        }

        self.search_query = None;
        self.eosc_datasource_type = String::new();
        self.order_field = DEFAULT_ORDER_FIELD.to_string();
        self.order = DEFAULT_ORDER.to_string();
        for parameter in &self.url_parameters {
            let Some(first) = parameter.first_value() else { continue };
            match parameter.key.as_str() {
                KEY_DATASOURCE_TYPE => self.eosc_datasource_type = first.to_string(),
                KEY_ORDER_FIELD => self.order_field = first.to_string(),
                KEY_ORDER => self.order = first.to_string(),
                KEY_QUERY => self.search_query = Some(first.to_string()),
                _ => {}
            }
        }
        mark_checked_facets(&mut results.facets, &self.url_parameters, KEY_QUERY);

        self.pagination.init(results.total, results.from);
        self.search_results = Some(results);
    }

    /// Keeps the previous results on screen.
    pub fn apply_error(&mut self, error: impl Display) {
        tracing::error!("datasource search failed: {}", error);
        self.loading = false;
        self.error_message = Some(format!("An error occurred while searching for datasources. {error}"));
    }

    pub fn complete_datasource_types<E: Display>(&mut self, outcome: Result<DatasourceTypes, E>) {
        match outcome {
            Ok(types) => self.datasource_types = Some(types),
            Err(e) => tracing::error!("could not load datasource types: {}", e),
        }
    }

    pub fn set_parameter(&mut self, key: &str, value: impl Into<String>) {
        self.url_parameters.set_parameter(key, value);
    }

    pub fn toggle_value(&mut self, key: &str, value: &str, checked: bool) {
        self.url_parameters.toggle_value(key, value, checked);
    }

    pub fn clear(&mut self, key: &str) {
        self.url_parameters.clear(key);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.set_parameter(KEY_QUERY, text);
    }

    /// Zero-based page index.
    pub fn go_to_page(&mut self, page_index: u64) {
        let from = self.pagination.from_for_page(page_index);
        self.set_parameter(KEY_FROM, from.to_string());
    }

    pub fn previous_page(&mut self) -> bool {
        let Some(from) = self.pagination.previous_from() else { return false };
        self.set_parameter(KEY_FROM, from.to_string());
        true
    }

    pub fn next_page(&mut self) -> bool {
        let Some(from) = self.pagination.next_from() else { return false };
        self.set_parameter(KEY_FROM, from.to_string());
        true
    }

    pub fn to_query_map(&self) -> QueryParams {
        self.url_parameters.to_query_map()
    }

    pub fn commit<N: QueryNavigator>(&self, navigator: &N) {
        navigator.navigate(self.to_query_map());
    }

    /// Dropdown change: one value for `key`, then navigate.
    pub fn select<N: QueryNavigator>(&mut self, key: &str, value: impl Into<String>, navigator: &N) {
        self.set_parameter(key, value);
        self.commit(navigator);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::catalogue::DatasourceCatalogue;
    use crate::paging::{Facet, FacetValue};

    #[derive(Default)]
    struct MockCatalogue {
        response: RefCell<Option<Result<Paging<DatasourceDetails>, String>>>,
        requests: RefCell<Vec<UrlParameters>>,
    }

    impl MockCatalogue {
        fn answering(response: Result<Paging<DatasourceDetails>, String>) -> Self {
            let catalogue = Self::default();
            catalogue.response.replace(Some(response));
            catalogue
        }
    }

    impl DatasourceCatalogue for MockCatalogue {
        type Error = String;

        async fn get_datasources(&self, parameters: &UrlParameters) -> Result<Paging<DatasourceDetails>, String> {
            self.requests.borrow_mut().push(parameters.clone());
            self.response.borrow().clone().unwrap_or_else(|| Err("no response".to_string()))
        }

        async fn get_datasource_types(&self) -> Result<DatasourceTypes, String> {
            Ok(DatasourceTypes([("repo".to_string(), "Repository".to_string())].into_iter().collect()))
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        navigations: RefCell<Vec<QueryParams>>,
    }

    impl QueryNavigator for RecordingNavigator {
        fn navigate(&self, query: QueryParams) {
            self.navigations.borrow_mut().push(query);
        }
    }

    fn facet(field: &str, values: &[&str]) -> Facet {
        Facet {
            field: field.to_string(),
            label: None,
            values: values
                .iter()
                .map(|v| FacetValue { value: v.to_string(), label: None, count: 2, is_checked: false })
                .collect(),
        }
    }

    fn page(total: u64, from: u64, facets: Vec<Facet>) -> Paging<DatasourceDetails> {
        let results = vec![DatasourceDetails { id: "ds-1".to_string(), name: "Zenodo".to_string(), ..Default::default() }];
        Paging { results, total, from, facets }
    }

    /// Same sequence the page runs per route emission; the state is not
    /// borrowed while the request is in flight.
    fn search(state: &mut DatasourceSearchState, catalogue: &MockCatalogue, raw: &str) {
        let parameters = state.ingest(&QueryParams::from(raw));
        let outcome = block_on(catalogue.get_datasources(&parameters));
        state.complete_search(outcome);
    }

    fn checked(state: &DatasourceSearchState, field: &str) -> Vec<String> {
        let results = state.search_results.as_ref().unwrap();
        let facet = results.facets.iter().find(|f| f.field == field).unwrap();
        facet.values.iter().filter(|v| v.is_checked).map(|v| v.value.clone()).collect()
    }

    #[test]
    fn search_uses_ingested_parameters() {
        let catalogue = MockCatalogue::answering(Ok(page(100, 20, vec![])));
        let mut state = DatasourceSearchState::new();
        search(&mut state, &catalogue, "portfolios=ai,bio&from=20");

        let requests = catalogue.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].get("portfolios").unwrap().values, vec!["ai", "bio"]);
        assert!(!state.loading);
        assert_eq!(state.pagination.current_page, 2);
        assert_eq!(state.pagination.total_pages, 5);
    }

    #[test]
    fn ingest_replaces_previous_parameters() {
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("portfolios=ai&trl=7"));
        state.ingest(&QueryParams::from("users=researchers"));
        assert_eq!(state.url_parameters.len(), 1);
        assert!(state.url_parameters.get("portfolios").is_none());
    }

    #[test]
    fn results_mark_selected_facets_and_fill_form_fields() {
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from(
            "portfolios=ai&query=ai&orderField=name&order=asc&eoscDatasourceType=repo",
        ));
        state.apply_results(page(
            40,
            0,
            vec![facet("query", &["ai"]), facet("portfolios", &["ai", "bio"]), facet("eoscDatasourceType", &["repo"])],
        ));

        assert_eq!(checked(&state, "portfolios"), vec!["ai"]);
        assert!(checked(&state, "query").is_empty());
        assert_eq!(checked(&state, "eoscDatasourceType"), vec!["repo"]);
        assert_eq!(state.search_query.as_deref(), Some("ai"));
        assert_eq!(state.order_field, "name");
        assert_eq!(state.order, "asc");
        assert_eq!(state.eosc_datasource_type, "repo");
    }

    #[test]
    fn absent_keys_restore_form_defaults() {
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("query=gpu&order=asc"));
        state.apply_results(page(1, 0, vec![]));
        state.ingest(&QueryParams::from(""));
        state.apply_results(page(1, 0, vec![]));
        assert_eq!(state.search_query, None);
        assert_eq!(state.order, DEFAULT_ORDER);
        assert_eq!(state.order_field, DEFAULT_ORDER_FIELD);
    }

    #[test]
    fn premium_facets_sorted_only_when_results_exist() {
        let facets = vec![facet("category", &[]), facet("trl", &[]), facet("portfolios", &[])];
        let mut state = DatasourceSearchState::new();
        state.apply_results(page(1, 0, facets.clone()));
        let order = state.search_results.as_ref().unwrap().facets.iter().map(|f| f.field.clone()).collect::<Vec<_>>();
        assert_eq!(order, vec!["portfolios", "trl", "category"]);

        let empty = Paging { results: vec![], total: 0, from: 0, facets: facets.clone() };
        state.apply_results(empty);
        assert_eq!(state.search_results.as_ref().unwrap().facets, facets);
    }

    #[test]
    fn failed_search_keeps_previous_results() {
        let mut state = DatasourceSearchState::new();
        state.apply_results(page(1, 0, vec![]));
        let previous = state.search_results.clone();

        let catalogue = MockCatalogue::answering(Err("registry unavailable".to_string()));
        search(&mut state, &catalogue, "query=gpu");
        assert_eq!(state.search_results, previous);
        assert!(state.error_message.as_deref().unwrap().contains("registry unavailable"));

        let catalogue = MockCatalogue::answering(Ok(page(1, 0, vec![])));
        search(&mut state, &catalogue, "query=gpu");
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn first_load_failure_leaves_no_results() {
        let mut state = DatasourceSearchState::new();
        search(&mut state, &MockCatalogue::default(), "");
        assert!(state.search_results.is_none());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn datasource_types_are_loaded() {
        let mut state = DatasourceSearchState::new();
        let outcome = block_on(MockCatalogue::default().get_datasource_types());
        state.complete_datasource_types(outcome);
        assert_eq!(state.datasource_types.unwrap().label("repo"), "Repository");
    }

    #[test]
    fn facet_toggle_navigates_with_reset_offset() {
        let navigator = RecordingNavigator::default();
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("query=gpu&from=40"));
        state.toggle_value("portfolios", "ai", true);
        state.commit(&navigator);

        let navigations = navigator.navigations.borrow();
        assert_eq!(navigations[0].to_string(), "query=gpu&from=0&portfolios=ai");
    }

    #[test]
    fn search_text_replaces_query() {
        let navigator = RecordingNavigator::default();
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("query=gpu"));
        state.set_search_text("cpu");
        state.commit(&navigator);
        assert_eq!(navigator.navigations.borrow()[0].get("query"), Some("cpu"));
    }

    #[test]
    fn page_navigation_sets_offset() {
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("from=40"));
        state.apply_results(page(100, 40, vec![]));

        assert!(state.next_page());
        assert_eq!(state.url_parameters.get("from").and_then(|p| p.first_value()), Some("60"));
        assert!(state.previous_page());
        assert_eq!(state.url_parameters.get("from").and_then(|p| p.first_value()), Some("20"));
        state.go_to_page(4);
        assert_eq!(state.url_parameters.get("from").and_then(|p| p.first_value()), Some("80"));
    }

    #[test]
    fn no_page_before_the_first() {
        let mut state = DatasourceSearchState::new();
        state.apply_results(page(100, 0, vec![]));
        assert!(!state.previous_page());
        assert!(state.url_parameters.get("from").is_none());
    }

    #[test]
    fn select_navigates_with_single_value() {
        let navigator = RecordingNavigator::default();
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("order=desc&portfolios=ai"));
        state.select(KEY_ORDER, "asc", &navigator);
        state.select(KEY_ORDER_FIELD, "name", &navigator);

        let navigations = navigator.navigations.borrow();
        assert_eq!(navigations.len(), 2);
        assert_eq!(navigations[1].to_string(), "order=asc&portfolios=ai&orderField=name");
    }

    #[test]
    fn clearing_a_facet_drops_all_its_values() {
        let mut state = DatasourceSearchState::new();
        state.ingest(&QueryParams::from("portfolios=ai,bio&trl=7"));
        state.clear("portfolios");
        assert_eq!(state.to_query_map().to_string(), "trl=7");
    }
}
