//! HTTP access to the resource registry.

use std::time::Duration;

use anyhow::Context;
use reqwest::{Method, Url};
use serde::{Serialize, de::DeserializeOwned};

pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Non-success answer from the registry.
#[derive(Debug)]
pub struct RegistryStatusError {
    pub status: u16,
    pub body: String,
}

impl std::fmt::Display for RegistryStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}: {}", self.status, self.body)
    }
}

impl std::error::Error for RegistryStatusError {}

/// Status code of a failed registry call, if the registry answered at all.
pub fn registry_status(error: &anyhow::Error) -> Option<u16> {
    error.downcast_ref::<RegistryStatusError>().map(|e| e.status)
}

#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build registry http client")?;
        Ok(Self { client, base_url: base_url.into() })
    }

    /// `EOSC_API_URL` and `EOSC_API_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("EOSC_API_URL").unwrap_or(DEFAULT_REGISTRY_URL.to_string());
        let timeout_secs = match std::env::var("EOSC_API_TIMEOUT_SECS") {
            Ok(v) => v.parse::<u64>().with_context(|| format!("EOSC_API_TIMEOUT_SECS is not a number: {v}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        self.send_json(Method::GET, url, None::<&()>).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, url: Url, body: &B) -> anyhow::Result<T> {
        self.send_json(Method::PUT, url, Some(body)).await
    }

    pub async fn patch_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        self.send_json(Method::PATCH, url, None::<&()>).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(&self, method: Method, url: Url, body: Option<&B>) -> anyhow::Result<T> {
        tracing::info!("REGISTRY REQUEST: {} {}", method, url);
        let t0 = std::time::Instant::now();

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.with_context(|| format!("{method} {url} failed"))?;
        let status = response.status();
        let response_txt = response.text().await?;
        let dt_ms = t0.elapsed().as_millis();
        if status.is_client_error() || status.is_server_error() {
            tracing::error!("REGISTRY ERROR: {} {} -> {} ({}ms)", method, url, status, dt_ms);
            return Err(RegistryStatusError { status: status.as_u16(), body: response_txt }.into());
        }
        tracing::info!("REGISTRY RESPONSE: {} {} len = {} ({}ms)", method, url, response_txt.len(), dt_ms);

        let parsed = serde_json::from_str(&response_txt)
            .with_context(|| format!("Invalid response from registry for {url}"))?;
        Ok(parsed)
    }
}

pub fn get_registry_client() -> anyhow::Result<RegistryClient> {
    RegistryClient::from_env()
}
