//! Provider status changes.

use common::provider::{ProviderBundle, ProviderStatusUpdate};
use serde::Deserialize;

use crate::registry_utils::{
    registry_client::RegistryClient,
    request_url::{provider_url, verify_provider_url},
};
use super::get_provider_bundle;

#[derive(Debug, Deserialize)]
struct StoredProvider {
    id: String,
}

/// Stores the update, then reads the provider back so the caller gets the
/// registry's view of it.
pub async fn update_provider_status(client: &RegistryClient, update: &ProviderStatusUpdate) -> anyhow::Result<ProviderBundle> {
    tracing::info!("provider {}: status -> {} (active: {})", update.id, update.status, update.active);
    let stored: StoredProvider = client.put_json(provider_url(client.base_url())?, update).await?;
    get_provider_bundle(client, &stored.id).await
}

pub async fn verify_provider(client: &RegistryClient, update: &ProviderStatusUpdate) -> anyhow::Result<ProviderBundle> {
    tracing::info!("provider {}: verified as {} (active: {})", update.id, update.status, update.active);
    let url = verify_provider_url(client.base_url(), &update.id, update.active, update.status.as_str())?;
    client.patch_json(url).await
}
