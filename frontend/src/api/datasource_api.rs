//! Client API calls for the datasource catalogue.

use common::{datasource::{DatasourceDetails, DatasourceTypes}, paging::Paging, url_parameter::UrlParameters};
use dioxus::prelude::*;

#[server]
pub async fn search_datasources(parameters: UrlParameters) -> Result<Paging<DatasourceDetails>, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::datasources::get_datasources(&client, &parameters).await;
    x.map_err(server_error)
}

#[server]
pub async fn datasource_types() -> Result<DatasourceTypes, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::datasources::get_datasource_types(&client).await;
    x.map_err(server_error)
}
