use std::collections::BTreeMap;

use common::service::RichService;

use crate::registry_utils::{
    registry_client::RegistryClient,
    request_url::{rich_service_url, selected_services_url, services_by_vocabulary_url},
};

pub async fn get_rich_service(client: &RegistryClient, service_id: &str) -> anyhow::Result<RichService> {
    client.get_json(rich_service_url(client.base_url(), service_id)?).await
}

pub async fn get_selected_services(client: &RegistryClient, service_ids: &[String]) -> anyhow::Result<Vec<RichService>> {
    if service_ids.is_empty() {
        return Ok(Vec::new());
    }
    client.get_json(selected_services_url(client.base_url(), service_ids)?).await
}

/// The registry groups the answer by vocabulary entry; the groups are
/// concatenated in key order.
pub async fn get_services_by_vocabulary(client: &RegistryClient, vocabulary_type: &str, vocabulary_name: &str) -> anyhow::Result<Vec<RichService>> {
    let url = services_by_vocabulary_url(client.base_url(), vocabulary_type, vocabulary_name)?;
    let grouped: BTreeMap<String, Vec<RichService>> = client.get_json(url).await?;
    tracing::info!("{} groups for {} {}", grouped.len(), vocabulary_type, vocabulary_name);
    Ok(grouped.into_values().flatten().collect())
}
