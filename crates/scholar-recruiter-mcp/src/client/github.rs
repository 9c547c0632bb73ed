//! GitHub REST API client.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use super::{GitHubApi, check_status, display_path, endpoint, read_json, transport_error};
use crate::config::{Config, api};
use crate::error::{ClientResult, Upstream};
use crate::models::{GitHubEvent, GitHubRepo, GitHubUser, UserSearchResult};

/// Authenticated GitHub client.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl GitHubClient {
    /// Create a client from the configured token.
    ///
    /// # Errors
    ///
    /// Returns error if no token is configured or client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let Some(ref token) = config.github_token else {
            anyhow::bail!("GITHUB_TOKEN is not configured");
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(api::GITHUB_API_VERSION));

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.github_api_url)?,
            request_timeout: config.request_timeout,
        })
    }

    async fn get<T>(&self, segments: &[&str], params: &[(&str, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = endpoint(&self.base_url, segments);
        let path = display_path(segments);
        tracing::debug!(method = "GET", url = %url, "GitHub request");

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(e, self.request_timeout))?;

        tracing::debug!(status = response.status().as_u16(), url = %url, "GitHub response");
        let response = check_status(response, Upstream::GitHub, &path).await?;
        read_json(response).await
    }
}

#[async_trait::async_trait]
impl GitHubApi for GitHubClient {
    async fn search_users(&self, query: &str, per_page: u32) -> ClientResult<UserSearchResult> {
        let params = [("q", query.to_string()), ("per_page", per_page.to_string())];
        self.get(&["search", "users"], &params).await
    }

    async fn get_user(&self, login: &str) -> ClientResult<GitHubUser> {
        self.get(&["users", login], &[]).await
    }

    async fn get_user_repos(&self, login: &str, per_page: u32) -> ClientResult<Vec<GitHubRepo>> {
        let params = [("per_page", per_page.to_string()), ("sort", "updated".to_string())];
        self.get(&["users", login, "repos"], &params).await
    }

    async fn get_user_events(&self, login: &str, per_page: u32) -> ClientResult<Vec<GitHubEvent>> {
        let params = [("per_page", per_page.to_string())];
        self.get(&["users", login, "events", "public"], &params).await
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
