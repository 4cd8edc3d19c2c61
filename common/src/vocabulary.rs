//! Controlled vocabularies (portfolios, countries, ...).

use serde::{Deserialize, Serialize};

pub const VOCABULARY_TYPE_PORTFOLIOS: &str = "PORTFOLIOS";
/// Services are filed under the capitalised type name, keyed by portfolio name.
pub const SERVICE_VOCABULARY_PORTFOLIOS: &str = "Portfolios";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Vocabulary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub vocabulary_type: String,
}

pub fn find_vocabulary_by_name<'a>(vocabularies: &'a [Vocabulary], name: &str) -> Option<&'a Vocabulary> {
    vocabularies.iter().find(|v| v.name == name)
}
