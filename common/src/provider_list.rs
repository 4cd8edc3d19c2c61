//! State of the admin provider list.

use std::fmt::Display;

use crate::paging::Paging;
use crate::provider::ProviderBundle;
use crate::search_const::PROVIDERS_PER_PAGE;

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderListState {
    pub providers: Vec<ProviderBundle>,
    pub total: u64,
    pub from: u64,
    pub items_per_page: u64,
    /// 1-based.
    pub current_page: u64,
    pub pages: Vec<u64>,
    pub error_message: Option<String>,
    /// `(provider id, first pending service id)`
    pub pending_first_services: Vec<(String, String)>,
}

impl Default for ProviderListState {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            total: 0,
            from: 0,
            items_per_page: PROVIDERS_PER_PAGE,
            current_page: 1,
            pages: Vec::new(),
            error_message: None,
            pending_first_services: Vec::new(),
        }
    }
}

impl ProviderListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_pages(&self) -> u64 {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.items_per_page)
    }

    pub fn apply_page(&mut self, page: Paging<ProviderBundle>) {
        self.error_message = None;
        self.providers = page.results;
        self.total = page.total;
        self.pages = (1..=self.total_pages()).collect();
        self.pending_first_services.clear();
    }

    pub fn apply_error(&mut self, error: impl Display) {
        tracing::error!("provider list failed: {}", error);
        self.providers.clear();
        self.error_message = Some("The list could not be retrieved".to_string());
    }

    pub fn complete_page<E: Display>(&mut self, outcome: Result<Paging<ProviderBundle>, E>) {
        match outcome {
            Ok(page) => self.apply_page(page),
            Err(e) => self.apply_error(e),
        }
    }

    /// Moves to `page` (1-based, clamped to the known pages) and returns the
    /// offset to fetch.
    pub fn go_to_page(&mut self, page: u64) -> u64 {
        self.current_page = page.clamp(1, self.total_pages().max(1));
        self.from = (self.current_page - 1) * self.items_per_page;
        self.from
    }

    pub fn previous_page(&mut self) -> Option<u64> {
        if self.current_page > 1 {
            Some(self.go_to_page(self.current_page - 1))
        } else {
            None
        }
    }

    pub fn next_page(&mut self) -> Option<u64> {
        if self.current_page < self.total_pages() {
            Some(self.go_to_page(self.current_page + 1))
        } else {
            None
        }
    }

    /// Ids of providers whose first submitted service should be looked up.
    pub fn providers_needing_first_service(&self) -> Vec<String> {
        self.providers
            .iter()
            .filter(|p| p.status.has_pending_first_service())
            .map(|p| p.id.clone())
            .collect()
    }

    pub fn record_first_service(&mut self, provider_id: impl Into<String>, service_id: impl Into<String>) {
        let provider_id = provider_id.into();
        if !self.has_created_first_service(&provider_id) {
            self.pending_first_services.push((provider_id, service_id.into()));
        }
    }

    pub fn has_created_first_service(&self, provider_id: &str) -> bool {
        self.pending_first_services.iter().any(|(p, _)| p == provider_id)
    }

    fn first_service_id(&self, provider_id: &str) -> Option<&str> {
        self.pending_first_services.iter().find(|(p, _)| p == provider_id).map(|(_, s)| s.as_str())
    }

    pub fn link_to_first_service(&self, provider_id: &str) -> Option<String> {
        self.first_service_id(provider_id).map(|s| format!("/service/{s}"))
    }

    pub fn link_to_edit_first_service(&self, provider_id: &str) -> Option<String> {
        self.first_service_id(provider_id).map(|s| format!("/edit/{s}"))
    }

    /// Merges a refreshed bundle into the list.
    pub fn replace_provider(&mut self, bundle: ProviderBundle) {
        if let Some(existing) = self.providers.iter_mut().find(|p| p.id == bundle.id) {
            *existing = bundle;
        }
    }
}
