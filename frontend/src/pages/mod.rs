pub mod home_page;
pub mod datasource_search_page;
pub mod service_providers_page;
pub mod service_landing_page;
pub mod portfolio_item_page;
pub mod page_not_found;
