//! Provider administration endpoints.

mod provider_bundles;
pub use provider_bundles::{get_provider_bundle, get_provider_bundles};

mod pending_services;
pub use pending_services::get_pending_services_of_provider;

mod provider_status;
pub use provider_status::{update_provider_status, verify_provider};
