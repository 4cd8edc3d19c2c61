//! Client API calls for provider administration.

use common::{paging::Paging, provider::{PendingService, ProviderBundle, ProviderStatusUpdate}};
use dioxus::prelude::*;

#[server]
pub async fn provider_bundles(from: u64, quantity: u64) -> Result<Paging<ProviderBundle>, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::providers::get_provider_bundles(&client, from, quantity).await;
    x.map_err(server_error)
}

#[server]
pub async fn pending_services_of_provider(provider_id: String) -> Result<Vec<PendingService>, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::providers::get_pending_services_of_provider(&client, &provider_id).await;
    x.map_err(server_error)
}

/// Moves a provider along the approval chain.
#[server]
pub async fn update_provider_status(update: ProviderStatusUpdate) -> Result<ProviderBundle, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::providers::update_provider_status(&client, &update).await;
    x.map_err(server_error)
}

#[server]
pub async fn verify_provider(update: ProviderStatusUpdate) -> Result<ProviderBundle, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::providers::verify_provider(&client, &update).await;
    x.map_err(server_error)
}
