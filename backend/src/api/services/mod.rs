//! Service landing page data.

mod rich_services;
pub use rich_services::{get_rich_service, get_selected_services, get_services_by_vocabulary};
