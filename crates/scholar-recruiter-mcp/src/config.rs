//! Configuration for the recruiting MCP server.

use std::time::Duration;

use crate::scoring::ScoringWeights;
use crate::venues::VenueTable;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Semantic Scholar Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// GitHub REST API endpoint.
    pub const GITHUB_API: &str = "https://api.github.com";

    /// GitHub REST API version header value.
    pub const GITHUB_API_VERSION: &str = "2022-11-28";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections per host.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Largest page the Semantic Scholar search endpoints accept.
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Largest id list accepted by `/author/batch`.
    pub const MAX_BATCH_IDS: usize = 500;

    /// Repos and events fetched per GitHub profile.
    pub const GITHUB_PAGE_SIZE: u32 = 100;

    /// Window used for "recent" GitHub stars.
    pub const RECENT_ACTIVITY_DAYS: i64 = 365;
}

/// Field sets for Semantic Scholar requests.
pub mod fields {
    /// Paper fields for search listings.
    pub const PAPER_SEARCH: &[&str] = &[
        "paperId",
        "title",
        "year",
        "venue",
        "publicationVenue",
        "authors",
        "citationCount",
        "influentialCitationCount",
        "abstract",
        "externalIds",
        "openAccessPdf",
        "publicationDate",
    ];

    /// Paper fields for the detail view.
    pub const PAPER_DETAIL: &[&str] = &[
        "paperId",
        "corpusId",
        "title",
        "year",
        "venue",
        "publicationVenue",
        "authors",
        "abstract",
        "citationCount",
        "influentialCitationCount",
        "referenceCount",
        "externalIds",
        "openAccessPdf",
        "publicationDate",
        "tldr",
        "fieldsOfStudy",
        "s2FieldsOfStudy",
    ];

    /// Fields of citing papers.
    pub const CITATION: &[&str] =
        &["paperId", "title", "year", "venue", "authors", "citationCount"];

    /// Fields for an author's paper list.
    pub const AUTHOR_PAPERS: &[&str] = &[
        "paperId",
        "title",
        "year",
        "venue",
        "citationCount",
        "influentialCitationCount",
        "externalIds",
    ];

    /// Fields for venue and rising-star aggregation.
    pub const AGGREGATION: &[&str] =
        &["paperId", "title", "year", "authors", "citationCount", "influentialCitationCount"];

    /// Author fields for search and batch lookups.
    pub const AUTHOR: &[&str] = &[
        "authorId",
        "name",
        "affiliations",
        "homepage",
        "paperCount",
        "citationCount",
        "hIndex",
        "externalIds",
    ];

    /// Author fields for the detail view, including a paper summary.
    pub const AUTHOR_DETAIL: &[&str] = &[
        "authorId",
        "externalIds",
        "name",
        "aliases",
        "affiliations",
        "homepage",
        "paperCount",
        "citationCount",
        "hIndex",
        "papers.title",
        "papers.year",
        "papers.venue",
        "papers.citationCount",
    ];
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional, raises rate limits).
    pub s2_api_key: Option<String>,

    /// GitHub token (required by the GitHub tools).
    pub github_token: Option<String>,

    /// Base URL for the Graph API (overridable for mock servers).
    pub graph_api_url: String,

    /// Base URL for the GitHub API (overridable for mock servers).
    pub github_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// User-Agent sent to both APIs.
    pub user_agent: String,

    /// Venue shortcut table.
    pub venues: VenueTable,

    /// Scoring constants.
    pub scoring: ScoringWeights,
}

impl Config {
    /// Create a configuration with the given credentials.
    ///
    /// Empty strings are treated as absent.
    #[must_use]
    pub fn new(s2_api_key: Option<String>, github_token: Option<String>) -> Self {
        Self {
            s2_api_key: non_empty(s2_api_key),
            github_token: non_empty(github_token),
            graph_api_url: api::GRAPH_API.to_string(),
            github_api_url: api::GITHUB_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            user_agent: format!("scholar-recruiter-mcp/{}", env!("CARGO_PKG_VERSION")),
            venues: VenueTable::default(),
            scoring: ScoringWeights::default(),
        }
    }

    /// Create a test configuration pointing both APIs at a mock server.
    ///
    /// The Graph API lives under `{base_url}/graph/v1`, GitHub under `{base_url}/github`.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            github_api_url: format!("{}/github", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new(None, Some("test-token".to_string()))
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `S2_API_KEY` (or `SEMANTIC_SCHOLAR_API_KEY`), `GITHUB_TOKEN`, and the
    /// optional `S2_API_URL` / `GITHUB_API_URL` overrides.
    ///
    /// # Errors
    ///
    /// Returns error if a URL override is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let s2_api_key = std::env::var("S2_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok());
        let github_token = std::env::var("GITHUB_TOKEN").ok();

        let mut config = Self::new(s2_api_key, github_token);
        if let Ok(url) = std::env::var("S2_API_URL") {
            config.graph_api_url = validate_base_url(&url)?;
        }
        if let Ok(url) = std::env::var("GITHUB_API_URL") {
            config.github_api_url = validate_base_url(&url)?;
        }
        Ok(config)
    }

    /// Override credentials supplied on the command line.
    ///
    /// Absent or empty values keep the current setting.
    #[must_use]
    pub fn with_credentials(
        mut self,
        s2_api_key: Option<String>,
        github_token: Option<String>,
    ) -> Self {
        if let Some(key) = non_empty(s2_api_key) {
            self.s2_api_key = Some(key);
        }
        if let Some(token) = non_empty(github_token) {
            self.github_token = Some(token);
        }
        self
    }

    /// Check if a Semantic Scholar API key is configured.
    #[must_use]
    pub const fn has_s2_api_key(&self) -> bool {
        self.s2_api_key.is_some()
    }

    /// Check if a GitHub token is configured.
    #[must_use]
    pub const fn has_github_token(&self) -> bool {
        self.github_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_s2_api_key", &self.has_s2_api_key())
            .field("has_github_token", &self.has_github_token())
            .field("graph_api_url", &self.graph_api_url)
            .field("github_api_url", &self.github_api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a base URL override, dropping any trailing slash.
///
/// # Errors
///
/// Returns error if `raw` is not an absolute http(s) URL.
pub fn validate_base_url(raw: &str) -> anyhow::Result<String> {
    let parsed = url::Url::parse(raw)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("unsupported URL scheme '{}' in {raw}", parsed.scheme());
    }
    Ok(raw.trim_end_matches('/').to_string())
}
