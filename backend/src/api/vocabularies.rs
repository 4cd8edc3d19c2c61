use common::vocabulary::Vocabulary;

use crate::registry_utils::{registry_client::RegistryClient, request_url::vocabularies_by_type_url};

pub async fn get_vocabularies_by_type(client: &RegistryClient, vocabulary_type: &str) -> anyhow::Result<Vec<Vocabulary>> {
    client.get_json(vocabularies_by_type_url(client.base_url(), vocabulary_type)?).await
}
