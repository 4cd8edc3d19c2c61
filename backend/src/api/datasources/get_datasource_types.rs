use common::datasource::DatasourceTypes;

use crate::registry_utils::{registry_client::RegistryClient, request_url::datasource_types_url};

pub async fn get_datasource_types(client: &RegistryClient) -> anyhow::Result<DatasourceTypes> {
    client.get_json(datasource_types_url(client.base_url())?).await
}
