use common::{paging::Paging, provider::ProviderBundle};

use crate::registry_utils::{
    registry_client::RegistryClient,
    request_url::{provider_bundle_url, provider_bundles_url},
};

pub async fn get_provider_bundles(client: &RegistryClient, from: u64, quantity: u64) -> anyhow::Result<Paging<ProviderBundle>> {
    client.get_json(provider_bundles_url(client.base_url(), from, quantity)?).await
}

pub async fn get_provider_bundle(client: &RegistryClient, provider_id: &str) -> anyhow::Result<ProviderBundle> {
    client.get_json(provider_bundle_url(client.base_url(), provider_id)?).await
}
