//! Datasource catalogue backed by the server functions.

use common::{
    catalogue::DatasourceCatalogue,
    datasource::{DatasourceDetails, DatasourceTypes},
    paging::Paging,
    url_parameter::UrlParameters,
};
use dioxus::prelude::*;

use crate::api::datasource_api::{datasource_types, search_datasources};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServerCatalogue;

impl DatasourceCatalogue for ServerCatalogue {
    type Error = ServerFnError;

    async fn get_datasources(&self, parameters: &UrlParameters) -> Result<Paging<DatasourceDetails>, ServerFnError> {
        search_datasources(parameters.clone()).await
    }

    async fn get_datasource_types(&self) -> Result<DatasourceTypes, ServerFnError> {
        datasource_types().await
    }
}
