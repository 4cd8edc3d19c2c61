//! Datasource records served by the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasourceDetails {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub description: String,
    pub logo: Option<String>,
    pub webpage: Option<String>,
    pub eosc_datasource_type: Option<String>,
    pub portfolios: Vec<String>,
    pub registration_date: Option<String>,
}

/// Datasource type id to display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DatasourceTypes(pub BTreeMap<String, String>);

impl DatasourceTypes {
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.0.get(id).map(|s| s.as_str()).unwrap_or(id)
    }
}
