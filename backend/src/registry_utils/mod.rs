//! Registry connection helpers.

pub mod registry_client;
pub mod request_url;
