// ABOUTME: Minimal client for the GitHub package-registry management API.
// ABOUTME: Lists container package versions and deletes a single version.

use super::error::RegistryError;
use super::models::PackageVersion;
use reqwest::{StatusCode, header};
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Media type the GitHub REST API expects for package endpoints.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// The GitHub API rejects requests without a User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    token: String,
}

impl RegistryClient {
    pub fn new(user: &str, token: &str) -> Result<Self, RegistryError> {
        Self::with_base_url(DEFAULT_API_BASE, user, token)
    }

    /// Client aimed at a non-default API base. Tests point this at a local
    /// mock server.
    pub fn with_base_url(base_url: &str, user: &str, token: &str) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(RegistryError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            token: token.to_string(),
        })
    }

    /// Fetch the version listing for a container package, in the order the
    /// registry returns it.
    pub async fn list_versions(
        &self,
        org: &str,
        container: &str,
    ) -> Result<Vec<PackageVersion>, RegistryError> {
        let url = format!(
            "{}/orgs/{}/packages/container/{}/versions",
            self.base_url, org, container
        );
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, ACCEPT_HEADER)
            .basic_auth(&self.user, Some(&self.token))
            .send()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::List {
                container: container.to_string(),
                status,
                body,
            });
        }

        response.json().await.map_err(RegistryError::Decode)
    }

    /// Delete a single package version. The API signals success with 204
    /// No Content only; any other status is a failure.
    pub async fn delete_version(
        &self,
        org: &str,
        container: &str,
        version_id: u64,
    ) -> Result<(), RegistryError> {
        let url = format!(
            "{}/orgs/{}/packages/container/{}/versions/{}",
            self.base_url, org, container, version_id
        );
        debug!("DELETE {url}");

        let response = self
            .http
            .delete(&url)
            .header(header::ACCEPT, ACCEPT_HEADER)
            .basic_auth(&self.user, Some(&self.token))
            .send()
            .await
            .map_err(|source| RegistryError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::Delete {
                version_id,
                status,
                body,
            });
        }

        Ok(())
    }
}
