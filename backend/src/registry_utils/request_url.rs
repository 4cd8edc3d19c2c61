//! URL builders for registry endpoints.

use anyhow::Context;
use common::search_const::{KEY_QUANTITY, PAGE_SIZE};
use common::url_parameter::UrlParameters;
use reqwest::Url;

/// Appends `segments` (percent-encoded) to the base URL path.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url).with_context(|| format!("invalid registry url: {base_url}"))?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("registry url cannot carry a path: {base_url}"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Datasource search: every selected value becomes its own query pair.
pub fn datasources_search_url(base_url: &str, parameters: &UrlParameters) -> anyhow::Result<Url> {
    let mut url = endpoint_url(base_url, &["datasource", "all"])?;
    {
        let mut query = url.query_pairs_mut();
        for parameter in parameters {
            for value in &parameter.values {
                query.append_pair(&parameter.key, value);
            }
        }
        if parameters.get(KEY_QUANTITY).is_none() {
            query.append_pair(KEY_QUANTITY, &PAGE_SIZE.to_string());
        }
    }
    Ok(url)
}

pub fn datasource_types_url(base_url: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["datasource", "types"])
}

pub fn provider_bundles_url(base_url: &str, from: u64, quantity: u64) -> anyhow::Result<Url> {
    let mut url = endpoint_url(base_url, &["provider", "bundle", "all"])?;
    url.query_pairs_mut()
        .append_pair("from", &from.to_string())
        .append_pair("quantity", &quantity.to_string());
    Ok(url)
}

pub fn provider_bundle_url(base_url: &str, provider_id: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["provider", "bundle", provider_id])
}

pub fn pending_services_url(base_url: &str, provider_id: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["provider", "services", "pending", provider_id])
}

pub fn provider_url(base_url: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["provider"])
}

pub fn verify_provider_url(base_url: &str, provider_id: &str, active: bool, status: &str) -> anyhow::Result<Url> {
    let mut url = endpoint_url(base_url, &["provider", "verifyProvider", provider_id])?;
    url.query_pairs_mut()
        .append_pair("active", &active.to_string())
        .append_pair("status", status);
    Ok(url)
}

pub fn rich_service_url(base_url: &str, service_id: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["service", "rich", service_id])
}

pub fn selected_services_url(base_url: &str, service_ids: &[String]) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["service", "rich", "byID", &service_ids.join(",")])
}

pub fn vocabularies_by_type_url(base_url: &str, vocabulary_type: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["vocabulary", "byType", vocabulary_type])
}

pub fn services_by_vocabulary_url(base_url: &str, vocabulary_type: &str, vocabulary_name: &str) -> anyhow::Result<Url> {
    endpoint_url(base_url, &["service", "by", vocabulary_type, vocabulary_name])
}
