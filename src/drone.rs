use crate::gateway::DataGateway;
use crate::model::{Build, LogLine, RepoKey, Repository};
use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result};
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// [`DataGateway`] over Drone's `/api` endpoints, authenticated with a bearer token.
pub struct DroneClient {
    client: Client,
    server: String,
}

impl DroneClient {
    pub fn new(server: &str, token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let auth = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| eyre!("Invalid token format"))?;
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            server: server.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.server, path)
    }

    async fn send(&self, path: &str) -> Result<Response> {
        let url = self.api_url(path);
        tracing::debug!("GET {url}");
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| eyre!("Request to {path} failed: {e}"))
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| eyre!("Failed to parse response from {path}: {e}"))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(path).await?;
        Self::decode(response, path).await
    }
}

fn status_error(status: StatusCode, body: &str) -> color_eyre::eyre::Report {
    // Drone reports errors as {"message": "..."}
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();
    eyre!("HTTP {}: {}", status.as_u16(), message)
}

#[async_trait]
impl DataGateway for DroneClient {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        // `latest=true` embeds each repo's last build; older servers reject it.
        let path = "/user/repos?latest=true";
        let response = self.send(path).await?;
        if response.status() != StatusCode::OK {
            tracing::warn!(
                "latest repo listing returned {}, falling back",
                response.status()
            );
            return self.get_json("/user/repos").await;
        }
        Self::decode(response, path).await
    }

    async fn list_builds(&self, repo: &RepoKey, page: u32) -> Result<Vec<Build>> {
        self.get_json(&format!(
            "/repos/{}/{}/builds?page={page}",
            repo.namespace, repo.name
        ))
        .await
    }

    async fn get_build(&self, repo: &RepoKey, number: u64) -> Result<Build> {
        self.get_json(&format!(
            "/repos/{}/{}/builds/{number}",
            repo.namespace, repo.name
        ))
        .await
    }

    async fn get_log_lines(
        &self,
        repo: &RepoKey,
        build: u64,
        stage: u64,
        step: u64,
    ) -> Result<Vec<LogLine>> {
        self.get_json(&format!(
            "/repos/{}/{}/builds/{build}/logs/{stage}/{step}",
            repo.namespace, repo.name
        ))
        .await
    }

    fn server_url(&self) -> &str {
        &self.server
    }
}
