//! Semantic Scholar Graph API client.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use super::{ScholarApi, check_status, display_path, endpoint, read_json, transport_error};
use crate::config::{Config, api};
use crate::error::{ClientResult, Upstream};
use crate::models::{
    Author, AuthorPapersResult, AuthorSearchResult, BulkSearchResult, CitationResult, Paper,
};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// Whether an API key header is sent.
    has_api_key: bool,

    /// Graph API base URL.
    graph_api_url: Url,

    /// Request timeout, reported on timeouts.
    request_timeout: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref key) = config.s2_api_key {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert("x-api-key", value);
        }

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
            has_api_key: config.s2_api_key.is_some(),
            graph_api_url: Url::parse(&config.graph_api_url)?,
            request_timeout: config.request_timeout,
        })
    }

    /// Make a GET request.
    async fn get<T>(&self, segments: &[&str], params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = endpoint(&self.graph_api_url, segments);
        let path = display_path(segments);
        tracing::debug!(method = "GET", url = %url, "Semantic Scholar request");

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(e, self.request_timeout))?;

        tracing::debug!(
            status = response.status().as_u16(),
            url = %url,
            "Semantic Scholar response"
        );
        let response = check_status(response, Upstream::SemanticScholar, &path).await?;
        read_json(response).await
    }

    /// Make a POST request with a JSON body.
    async fn post<T>(
        &self,
        segments: &[&str],
        params: &[(String, String)],
        body: &serde_json::Value,
    ) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = endpoint(&self.graph_api_url, segments);
        let path = display_path(segments);
        tracing::debug!(method = "POST", url = %url, "Semantic Scholar request");

        let response = self
            .client
            .post(url.clone())
            .query(params)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(e, self.request_timeout))?;

        tracing::debug!(
            status = response.status().as_u16(),
            url = %url,
            "Semantic Scholar response"
        );
        let response = check_status(response, Upstream::SemanticScholar, &path).await?;
        read_json(response).await
    }
}

/// Segments for a paper endpoint. Slashes inside ids such as `DOI:10.1/x` stay separators.
fn paper_path<'a>(paper_id: &'a str, tail: Option<&'a str>) -> Vec<&'a str> {
    std::iter::once("paper").chain(paper_id.split('/')).chain(tail).collect()
}

#[async_trait::async_trait]
impl ScholarApi for SemanticScholarClient {
    async fn search_papers_bulk(
        &self,
        query: &str,
        fields: &[&str],
        sort: Option<&str>,
        filters: &[(String, String)],
    ) -> ClientResult<BulkSearchResult> {
        let mut params = vec![
            ("query".to_string(), query.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        if let Some(s) = sort {
            params.push(("sort".to_string(), s.to_string()));
        }

        params.extend(filters.iter().cloned());

        self.get(&["paper", "search", "bulk"], &params).await
    }

    async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper> {
        let params = vec![("fields".to_string(), fields.join(","))];
        self.get(&paper_path(paper_id, None), &params).await
    }

    async fn get_citations(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<CitationResult> {
        let params = vec![
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];
        self.get(&paper_path(paper_id, Some("citations")), &params).await
    }

    async fn search_authors(
        &self,
        query: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorSearchResult> {
        let params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];
        self.get(&["author", "search"], &params).await
    }

    async fn get_author(&self, author_id: &str, fields: &[&str]) -> ClientResult<Author> {
        let params = vec![("fields".to_string(), fields.join(","))];
        self.get(&["author", author_id], &params).await
    }

    async fn get_author_papers(
        &self,
        author_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorPapersResult> {
        let params = vec![
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];
        self.get(&["author", author_id, "papers"], &params).await
    }

    async fn get_authors_batch(
        &self,
        author_ids: &[String],
        fields: &[&str],
    ) -> ClientResult<Vec<Option<Author>>> {
        let params = vec![("fields".to_string(), fields.join(","))];
        let body = serde_json::json!({ "ids": author_ids });

        // API returns [Author, null, Author] for unknown IDs
        self.post(&["author", "batch"], &params, &body).await
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key).finish()
    }
}
