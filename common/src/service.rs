//! Catalogued services as shown on the landing page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub tagline: Option<String>,
    pub description: String,
    pub webpage: Option<String>,
    pub logo: Option<String>,
    pub resource_providers: Vec<String>,
    pub required_resources: Vec<String>,
    pub related_resources: Vec<String>,
    pub geographical_availabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RichService {
    pub service: Service,
    pub is_favourite: bool,
}

pub const SERVICE_LOAD_ERROR: &str = "An error occurred while retrieving data for this service. ";

/// Required then related resources, first occurrence kept, blanks dropped.
pub fn related_service_ids(service: &Service) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for id in service.required_resources.iter().chain(service.related_resources.iter()) {
        if !id.is_empty() && !ids.contains(id) {
            ids.push(id.clone());
        }
    }
    ids
}
