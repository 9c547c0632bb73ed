//! Upstream API clients.
//!
//! Tools talk to the two remote APIs only through the [`ScholarApi`] and
//! [`GitHubApi`] traits, so they can run against fakes in tests. The concrete
//! clients are plain request/response wrappers:
//! - Connection pooling and timeouts via reqwest
//! - No retry, cache, or client-side rate limiting
//! - Non-2xx statuses mapped to [`ClientError`]

mod github;
mod semantic_scholar;

pub use github::GitHubClient;
pub use semantic_scholar::SemanticScholarClient;

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, ClientResult, Upstream};
use crate::models::{
    Author, AuthorPapersResult, AuthorSearchResult, BulkSearchResult, CitationResult, GitHubEvent,
    GitHubRepo, GitHubUser, Paper, UserSearchResult,
};

/// Semantic Scholar Graph API capabilities used by the tools.
#[async_trait::async_trait]
pub trait ScholarApi: Send + Sync {
    /// Bulk paper search with server-side filters (`venue`, `year`, ...).
    async fn search_papers_bulk(
        &self,
        query: &str,
        fields: &[&str],
        sort: Option<&str>,
        filters: &[(String, String)],
    ) -> ClientResult<BulkSearchResult>;

    /// A single paper by S2 ID, `DOI:` or `ARXIV:` identifier.
    async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper>;

    /// Papers citing `paper_id`.
    async fn get_citations(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<CitationResult>;

    /// Author search by name.
    async fn search_authors(
        &self,
        query: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorSearchResult>;

    /// A single author.
    async fn get_author(&self, author_id: &str, fields: &[&str]) -> ClientResult<Author>;

    /// One page of an author's papers.
    async fn get_author_papers(
        &self,
        author_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorPapersResult>;

    /// Batch author lookup. Unknown IDs come back as `None`, in request order.
    async fn get_authors_batch(
        &self,
        author_ids: &[String],
        fields: &[&str],
    ) -> ClientResult<Vec<Option<Author>>>;
}

/// GitHub REST API capabilities used by the tools.
#[async_trait::async_trait]
pub trait GitHubApi: Send + Sync {
    /// User search (`q` uses GitHub search syntax).
    async fn search_users(&self, query: &str, per_page: u32) -> ClientResult<UserSearchResult>;

    /// Full user record.
    async fn get_user(&self, login: &str) -> ClientResult<GitHubUser>;

    /// Public repositories, most recently updated first.
    async fn get_user_repos(&self, login: &str, per_page: u32) -> ClientResult<Vec<GitHubRepo>>;

    /// Recent public events.
    async fn get_user_events(&self, login: &str, per_page: u32) -> ClientResult<Vec<GitHubEvent>>;
}

/// Append `segments` to `base`, percent-encoding each one.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Base URLs are validated as http(s), which always have a path
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Unencoded path used in logs and not-found messages.
fn display_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

/// Map a transport failure, keeping timeouts distinct.
fn transport_error(err: reqwest::Error, timeout: Duration) -> ClientError {
    if err.is_timeout() { ClientError::Timeout(timeout) } else { ClientError::Http(err) }
}

/// Seconds to wait before retrying, from `Retry-After` or GitHub's reset header.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    if let Some(secs) = header("retry-after").and_then(|v| v.trim().parse().ok()) {
        return Some(secs);
    }
    let reset: i64 = header("x-ratelimit-reset")?.trim().parse().ok()?;
    let wait = reset - chrono::Utc::now().timestamp();
    Some(u64::try_from(wait).unwrap_or(0))
}

/// Handle API response status codes.
async fn check_status(
    response: reqwest::Response,
    api: Upstream,
    resource: &str,
) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let retry_after = retry_after_secs(response.headers());
    let quota_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");
    let text = response.text().await.unwrap_or_default();

    tracing::warn!(api = %api, status = status.as_u16(), resource, "Upstream request failed");

    match status.as_u16() {
        429 => Err(ClientError::rate_limited(api, retry_after.unwrap_or(60))),
        403 if quota_exhausted => Err(ClientError::rate_limited(api, retry_after.unwrap_or(60))),
        404 => Err(ClientError::not_found(format!("{api} {resource}"))),
        400 | 422 => Err(ClientError::bad_request(text)),
        401 | 403 => Err(ClientError::Unauthorized { api, status: status.as_u16(), message: text }),
        500..=599 => Err(ClientError::server(status.as_u16(), text)),
        _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
    }
}

/// Decode a JSON body, reporting shape mismatches as parse errors.
async fn read_json<T>(response: reqwest::Response) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(ClientError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_retry_after_header() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("42"));
        assert_eq!(retry_after_secs(&headers), Some(42));
    }

    #[test]
    fn test_retry_after_reset_in_past() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1"));
        assert_eq!(retry_after_secs(&headers), Some(0));
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("http://127.0.0.1:9999/graph/v1").unwrap();
        let url = endpoint(&base, &["paper", "odd?id#1", "citations"]);
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/graph/v1/paper/odd%3Fid%231/citations");
    }

    #[test]
    fn test_endpoint_trailing_slash_base() {
        let base = Url::parse("https://example.org/api/").unwrap();
        let url = endpoint(&base, &["users", "jdoe"]);
        assert_eq!(url.as_str(), "https://example.org/api/users/jdoe");
    }

    #[test]
    fn test_retry_after_missing() {
        assert_eq!(retry_after_secs(&HeaderMap::new()), None);
    }
}
