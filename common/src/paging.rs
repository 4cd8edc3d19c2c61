//! Result pages and facet summaries returned by the registry.

use serde::{Deserialize, Serialize};

use crate::url_parameter::UrlParameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging<T> {
    pub results: Vec<T>,
    pub total: u64,
    pub from: u64,
    #[serde(default)]
    pub facets: Vec<Facet>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self { results: Vec::new(), total: 0, from: 0, facets: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub field: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub values: Vec<FacetValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetValue {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub is_checked: bool,
}

impl FacetValue {
    pub fn display_string(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Moves the listed facet fields to the front, in the listed order.
/// Other facets keep their relative order behind them.
pub fn premium_sort_facets(facets: &mut [Facet], fields: &[&str]) {
    facets.sort_by_key(|facet| {
        fields.iter().position(|f| *f == facet.field).unwrap_or(fields.len())
    });
}

/// Recomputes every `is_checked` flag from the active parameters.
///
/// `skip_key` names a parameter that never selects facet values.
pub fn mark_checked_facets(facets: &mut [Facet], parameters: &UrlParameters, skip_key: &str) {
    for facet in facets.iter_mut() {
        for value in facet.values.iter_mut() {
            value.is_checked = false;
        }
    }
    for parameter in parameters {
        if parameter.key == skip_key {
            continue;
        }
        let Some(facet) = facets.iter_mut().find(|f| f.field == parameter.key) else { continue };
        for value in facet.values.iter_mut() {
            if parameter.values.iter().any(|v| *v == value.value) {
                value.is_checked = true;
            }
        }
    }
}
