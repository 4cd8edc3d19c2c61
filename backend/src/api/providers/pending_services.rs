use common::provider::PendingService;

use crate::registry_utils::{registry_client::RegistryClient, request_url::pending_services_url};

/// Services a provider submitted that still await approval, oldest first.
pub async fn get_pending_services_of_provider(client: &RegistryClient, provider_id: &str) -> anyhow::Result<Vec<PendingService>> {
    client.get_json(pending_services_url(client.base_url(), provider_id)?).await
}
