//! Input models for MCP tool parameters.
//!
//! Keys are camelCase; the snake_case spellings are accepted as aliases.

use serde::{Deserialize, Serialize};

use super::{AuthorPaperSort, PaperSort, ResponseFormat};

fn default_paper_limit() -> u32 {
    20
}

fn default_author_limit() -> u32 {
    10
}

/// Input for `search_papers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPapersInput {
    /// Search terms (title and abstract).
    pub query: String,

    /// Venue shortcut (e.g. "neurips") or literal venue name.
    #[serde(default)]
    pub venue: Option<String>,

    /// Minimum publication year (inclusive).
    #[serde(default, alias = "year_from")]
    pub year_from: Option<i32>,

    /// Maximum publication year (inclusive).
    #[serde(default, alias = "year_to")]
    pub year_to: Option<i32>,

    /// Minimum citation count.
    #[serde(default, alias = "min_citations")]
    pub min_citations: Option<i64>,

    /// Comma-separated fields of study (e.g. "Computer Science,Mathematics").
    #[serde(default, alias = "fields_of_study")]
    pub fields_of_study: Option<String>,

    /// Only papers with a free PDF.
    #[serde(default, alias = "open_access_only")]
    pub open_access_only: bool,

    /// Maximum results (1-100).
    #[serde(default = "default_paper_limit")]
    pub limit: u32,

    /// Server-side sort order.
    #[serde(default)]
    pub sort: PaperSort,

    /// Output format.
    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `get_paper_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDetailsInput {
    /// S2 paper ID, `DOI:...` or `ARXIV:...`.
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `get_paper_citations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperCitationsInput {
    #[serde(alias = "paper_id")]
    pub paper_id: String,

    #[serde(default = "default_paper_limit")]
    pub limit: u32,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `search_authors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAuthorsInput {
    /// Author name to search for.
    pub name: String,

    #[serde(default = "default_author_limit")]
    pub limit: u32,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `get_author_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetailsInput {
    #[serde(alias = "author_id")]
    pub author_id: String,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `get_author_papers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPapersInput {
    #[serde(alias = "author_id")]
    pub author_id: String,

    #[serde(default = "default_paper_limit")]
    pub limit: u32,

    /// Only papers published in or after this year.
    #[serde(default, alias = "year_from")]
    pub year_from: Option<i32>,

    #[serde(default, alias = "sort_by")]
    pub sort_by: AuthorPaperSort,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Author IDs given either as a delimited string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorIds {
    List(Vec<String>),
    Delimited(String),
}

impl AuthorIds {
    /// Split on commas and pipes, trim, and drop empties.
    #[must_use]
    pub fn normalized(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::List(ids) => ids.iter().flat_map(|s| s.split([',', '|'])).collect(),
            Self::Delimited(s) => s.split([',', '|']).collect(),
        };
        raw.into_iter().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
    }
}

/// Input for `batch_author_lookup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAuthorLookupInput {
    #[serde(alias = "author_ids")]
    pub author_ids: AuthorIds,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

fn default_venue_year_from() -> i32 {
    2020
}

fn default_min_papers() -> u32 {
    2
}

/// Input for `find_venue_top_authors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueTopAuthorsInput {
    /// Venue shortcut or literal name.
    pub venue: String,

    /// Optional topic filter.
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default = "default_venue_year_from", alias = "year_from")]
    pub year_from: i32,

    /// Minimum papers at the venue.
    #[serde(default = "default_min_papers", alias = "min_papers")]
    pub min_papers: u32,

    #[serde(default = "default_paper_limit")]
    pub limit: u32,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

fn default_rising_year_from() -> i32 {
    2022
}

fn default_rising_min_citations() -> i64 {
    50
}

fn default_max_h_index() -> i32 {
    30
}

fn default_rising_limit() -> u32 {
    15
}

/// Input for `find_rising_stars`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RisingStarsInput {
    /// Research area.
    pub topic: String,

    #[serde(default = "default_rising_year_from", alias = "year_from")]
    pub year_from: i32,

    /// Minimum citations for a paper to count.
    #[serde(default = "default_rising_min_citations", alias = "min_citations")]
    pub min_citations: i64,

    /// h-index ceiling; established researchers above it are excluded.
    #[serde(default = "default_max_h_index", alias = "max_h_index")]
    pub max_h_index: i32,

    #[serde(default = "default_rising_limit")]
    pub limit: u32,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `search_researcher_github`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubSearchInput {
    /// Researcher's name.
    pub name: String,

    #[serde(default = "default_author_limit")]
    pub limit: u32,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `github_activity_score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubActivityInput {
    pub username: String,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `combined_researcher_profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedProfileInput {
    /// Researcher's name (searched on Semantic Scholar when no ID is given).
    #[serde(alias = "author_name")]
    pub author_name: String,

    #[serde(default, alias = "s2_author_id")]
    pub s2_author_id: Option<String>,

    #[serde(default, alias = "github_username")]
    pub github_username: Option<String>,

    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

/// Input for `list_ml_venues`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVenuesInput {
    #[serde(default, alias = "response_format")]
    pub response_format: ResponseFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_papers_defaults() {
        let input: SearchPapersInput =
            serde_json::from_value(serde_json::json!({"query": "transformers"})).unwrap();
        assert_eq!(input.limit, 20);
        assert_eq!(input.sort, PaperSort::CitationsDesc);
        assert!(!input.open_access_only);
        assert_eq!(input.response_format, ResponseFormat::Json);
    }

    #[test]
    fn test_snake_case_aliases() {
        let input: SearchPapersInput = serde_json::from_value(serde_json::json!({
            "query": "transformers",
            "venue": "neurips",
            "year_from": 2022,
            "min_citations": 50
        }))
        .unwrap();
        assert_eq!(input.year_from, Some(2022));
        assert_eq!(input.min_citations, Some(50));
    }

    #[test]
    fn test_author_ids_delimited() {
        let ids = AuthorIds::Delimited(" 1, 2|3 ,,| ".to_string());
        assert_eq!(ids.normalized(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_author_ids_from_json() {
        let input: BatchAuthorLookupInput =
            serde_json::from_value(serde_json::json!({"authorIds": ["10", " 20 "]})).unwrap();
        assert_eq!(input.author_ids.normalized(), vec!["10", "20"]);

        let input: BatchAuthorLookupInput =
            serde_json::from_value(serde_json::json!({"author_ids": "10|20"})).unwrap();
        assert_eq!(input.author_ids.normalized(), vec!["10", "20"]);
    }

    #[test]
    fn test_rising_stars_defaults() {
        let input: RisingStarsInput =
            serde_json::from_value(serde_json::json!({"topic": "diffusion models"})).unwrap();
        assert_eq!(input.year_from, 2022);
        assert_eq!(input.min_citations, 50);
        assert_eq!(input.max_h_index, 30);
        assert_eq!(input.limit, 15);
    }
}
