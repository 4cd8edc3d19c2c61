//! Registry calls against a mock registry.

use std::time::Duration;

use backend::api::{datasources, providers, services, vocabularies};
use backend::registry_utils::registry_client::{RegistryClient, registry_status};
use common::provider::{ProviderStatus, ProviderStatusUpdate};
use common::query_params::QueryParams;
use common::url_parameter::UrlParameters;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn client_for(server: &MockServer) -> RegistryClient {
    RegistryClient::new(format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap()
}

fn datasource_page() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {"id": "zenodo", "name": "Zenodo", "eoscDatasourceType": "repository", "portfolios": ["ai"]},
            {"id": "b2share", "name": "B2SHARE"}
        ],
        "total": 42,
        "from": 20,
        "to": 22,
        "facets": [
            {"field": "portfolios", "label": "Portfolios", "values": [
                {"value": "ai", "label": "AI", "count": 12},
                {"value": "bio", "count": 3}
            ]}
        ]
    })
}

fn provider_bundle(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "provider": {"id": id, "name": "CERN", "abbreviation": "CERN"},
        "status": status,
        "active": status == "approved"
    })
}

#[tokio::test]
async fn test_get_datasources_sends_every_selected_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasource/all"))
        .and(query_param("portfolios", "ai"))
        .and(query_param("portfolios", "bio"))
        .and(query_param("from", "20"))
        .and(query_param("quantity", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(datasource_page()))
        .expect(1)
        .mount(&server)
        .await;

    let parameters = UrlParameters::from_query(&QueryParams::from("portfolios=ai,bio&from=20"));
    let page = datasources::get_datasources(&client_for(&server), &parameters).await.unwrap();

    assert_eq!(page.total, 42);
    assert_eq!(page.from, 20);
    assert_eq!(page.results[0].name, "Zenodo");
    assert_eq!(page.results[0].eosc_datasource_type.as_deref(), Some("repository"));
    assert_eq!(page.facets[0].values[0].display_string(), "AI");
    assert_eq!(page.facets[0].values[1].display_string(), "bio");
}

#[tokio::test]
async fn test_get_datasources_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasource/all"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let error = datasources::get_datasources(&client_for(&server), &UrlParameters::new())
        .await
        .unwrap_err();
    assert_eq!(registry_status(&error), Some(503));
    assert!(error.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_get_datasources_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasource/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let error = datasources::get_datasources(&client_for(&server), &UrlParameters::new())
        .await
        .unwrap_err();
    assert_eq!(registry_status(&error), None);
}

#[tokio::test]
async fn test_get_datasource_types() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/datasource/types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"repository": "Repository", "aggregator": "Aggregator"})),
        )
        .mount(&server)
        .await;

    let types = datasources::get_datasource_types(&client_for(&server)).await.unwrap();
    assert_eq!(types.label("aggregator"), "Aggregator");
    assert_eq!(types.label("unknown"), "unknown");
}

#[tokio::test]
async fn test_get_provider_bundles_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/provider/bundle/all"))
        .and(query_param("from", "15"))
        .and(query_param("quantity", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [provider_bundle("cern", "pending service template approval")],
            "total": 16,
            "from": 15
        })))
        .mount(&server)
        .await;

    let page = providers::get_provider_bundles(&client_for(&server), 15, 15).await.unwrap();
    assert_eq!(page.total, 16);
    assert_eq!(page.results[0].status, ProviderStatus::PendingTemplateApproval);
}

#[tokio::test]
async fn test_update_provider_status_reads_provider_back() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/provider"))
        .and(body_json(serde_json::json!({"id": "cern", "status": "approved", "active": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "cern", "name": "CERN"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/provider/bundle/cern"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_bundle("cern", "approved")))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProviderStatusUpdate { id: "cern".to_string(), status: ProviderStatus::Approved, active: true };
    let bundle = providers::update_provider_status(&client_for(&server), &update).await.unwrap();
    assert_eq!(bundle.status, ProviderStatus::Approved);
    assert!(bundle.active);
}

#[tokio::test]
async fn test_verify_provider() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/provider/verifyProvider/cern"))
        .and(query_param("active", "false"))
        .and(query_param("status", "rejected"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_bundle("cern", "rejected")))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProviderStatusUpdate::verify("cern", ProviderStatus::Rejected, true);
    let bundle = providers::verify_provider(&client_for(&server), &update).await.unwrap();
    assert_eq!(bundle.status, ProviderStatus::Rejected);
}

#[tokio::test]
async fn test_pending_services_of_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/provider/services/pending/cern"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "cern.first", "name": "First"},
            {"id": "cern.second"}
        ])))
        .mount(&server)
        .await;

    let pending = providers::get_pending_services_of_provider(&client_for(&server), "cern").await.unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].id, "cern.first");
}

#[tokio::test]
async fn test_rich_service_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/rich/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Service not found"))
        .mount(&server)
        .await;

    let error = services::get_rich_service(&client_for(&server), "missing").await.unwrap_err();
    assert_eq!(registry_status(&error), Some(404));
}

#[tokio::test]
async fn test_selected_services_skips_empty_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let found = services::get_selected_services(&client_for(&server), &[]).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_selected_services() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/rich/byID/a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"service": {"id": "a", "name": "A"}, "isFavourite": false},
            {"service": {"id": "b", "name": "B"}, "isFavourite": true}
        ])))
        .mount(&server)
        .await;

    let ids = vec!["a".to_string(), "b".to_string()];
    let found = services::get_selected_services(&client_for(&server), &ids).await.unwrap();
    assert_eq!(found.iter().map(|s| s.service.name.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
}

#[tokio::test]
async fn test_portfolio_vocabulary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vocabulary/byType/PORTFOLIOS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "portfolio-ai", "name": "AI", "type": "PORTFOLIOS", "description": "Machine learning"}
        ])))
        .mount(&server)
        .await;

    let vocabularies = vocabularies::get_vocabularies_by_type(&client_for(&server), "PORTFOLIOS").await.unwrap();
    assert_eq!(vocabularies[0].id, "portfolio-ai");
    assert_eq!(vocabularies[0].description.as_deref(), Some("Machine learning"));
}

#[tokio::test]
async fn test_portfolio_services_are_grouped_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/by/Portfolios/AI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "portfolio-bio": [
                {"service": {"id": "s2", "name": "Sequence Archive"}, "isFavourite": true}
            ],
            "portfolio-ai": [
                {"service": {"id": "s1", "name": "B2SHARE"}, "isFavourite": false},
                {"service": {"id": "s3", "name": "Inference API"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let found = services::get_services_by_vocabulary(&client_for(&server), "Portfolios", "AI").await.unwrap();
    let names: Vec<&str> = found.iter().map(|s| s.service.name.as_str()).collect();
    assert_eq!(names, vec!["B2SHARE", "Inference API", "Sequence Archive"]);
}

#[tokio::test]
async fn test_portfolio_services_reject_plain_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/by/Portfolios/AI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"service": {"id": "s1", "name": "B2SHARE"}}
        ])))
        .mount(&server)
        .await;

    let err = services::get_services_by_vocabulary(&client_for(&server), "Portfolios", "AI").await.unwrap_err();
    assert_eq!(registry_status(&err), None);
}
