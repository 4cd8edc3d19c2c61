//! Constants shared by the search pages and the registry client.

/// Datasources per search result page.
pub const PAGE_SIZE: u64 = 20;

/// Pages shown on each side of the current page in the pagination bar.
pub const PAGINATION_OFFSET: u64 = 2;

/// Provider bundles per page in the admin list.
pub const PROVIDERS_PER_PAGE: u64 = 15;

/// Quiet period before a search-box value becomes a query.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

pub const DEFAULT_ORDER_FIELD: &str = "registrationdate";
pub const DEFAULT_ORDER: &str = "desc";

/// Facets listed first, in this order, whenever a search returns results.
pub const PREMIUM_FACET_FIELDS: [&str; 4] = ["portfolios", "users", "trl", "lifeCycleStatus"];

pub const KEY_QUERY: &str = "query";
pub const KEY_FROM: &str = "from";
pub const KEY_QUANTITY: &str = "quantity";
pub const KEY_ORDER_FIELD: &str = "orderField";
pub const KEY_ORDER: &str = "order";
pub const KEY_DATASOURCE_TYPE: &str = "eoscDatasourceType";
