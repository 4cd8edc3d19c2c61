//! Datasource search endpoint.

use common::{datasource::DatasourceDetails, paging::Paging, url_parameter::UrlParameters};

use crate::registry_utils::{registry_client::RegistryClient, request_url::datasources_search_url};

pub async fn get_datasources(client: &RegistryClient, parameters: &UrlParameters) -> anyhow::Result<Paging<DatasourceDetails>> {
    let url = datasources_search_url(client.base_url(), parameters)?;
    let page: Paging<DatasourceDetails> = client.get_json(url).await?;
    tracing::info!("datasource search: {} of {} from {}", page.results.len(), page.total, page.from);
    Ok(page)
}
