//! Client API calls for service and portfolio pages.

use common::{service::RichService, vocabulary::Vocabulary};
use dioxus::prelude::*;

#[server]
pub async fn rich_service(service_id: String) -> Result<RichService, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::services::get_rich_service(&client, &service_id).await;
    x.map_err(server_error)
}

#[server]
pub async fn selected_services(service_ids: Vec<String>) -> Result<Vec<RichService>, ServerFnError> {
    use crate::api::server_error;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::services::get_selected_services(&client, &service_ids).await;
    x.map_err(server_error)
}

/// The portfolio vocabulary entry named `name`, if the registry knows one.
#[server]
pub async fn portfolio_vocabulary(name: String) -> Result<Option<Vocabulary>, ServerFnError> {
    use crate::api::server_error;
    use common::vocabulary::{VOCABULARY_TYPE_PORTFOLIOS, find_vocabulary_by_name};
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let vocabularies = backend::api::vocabularies::get_vocabularies_by_type(&client, VOCABULARY_TYPE_PORTFOLIOS)
        .await
        .map_err(server_error)?;
    Ok(find_vocabulary_by_name(&vocabularies, &name).cloned())
}

/// Services filed under the portfolio named `name`.
#[server]
pub async fn portfolio_services(name: String) -> Result<Vec<RichService>, ServerFnError> {
    use crate::api::server_error;
    use common::vocabulary::SERVICE_VOCABULARY_PORTFOLIOS;
    let client = backend::registry_utils::registry_client::get_registry_client().map_err(server_error)?;
    let x = backend::api::services::get_services_by_vocabulary(&client, SERVICE_VOCABULARY_PORTFOLIOS, &name).await;
    x.map_err(server_error)
}
