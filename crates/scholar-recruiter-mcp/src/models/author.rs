//! Author data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::Paper;
use super::paper::null_as_empty;

/// Author search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: i64,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<i64>,

    /// List of authors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Author>,
}

/// A research author from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID.
    #[serde(default)]
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Other names the author has published under.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub aliases: Vec<String>,

    /// Author's institutional affiliations.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub affiliations: Vec<String>,

    /// Author's homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i64>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i32>,

    /// External IDs (ORCID, DBLP).
    #[serde(default)]
    pub external_ids: Option<AuthorExternalIds>,

    /// Papers, only present when requested with `papers.*` fields.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub papers: Vec<Paper>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Get the primary affiliation if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }

    /// Get the ORCID if available.
    #[must_use]
    pub fn orcid(&self) -> Option<&str> {
        self.external_ids.as_ref()?.orcid.as_deref()
    }

    /// Get the DBLP keys.
    #[must_use]
    pub fn dblp(&self) -> &[String] {
        self.external_ids.as_ref().map(|ids| ids.dblp.as_slice()).unwrap_or_default()
    }

    /// Get the h-index or 0 if not available.
    #[must_use]
    pub fn h_index_value(&self) -> i32 {
        self.h_index.unwrap_or(0)
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }

    /// Get paper count or 0 if not available.
    #[must_use]
    pub fn papers_count(&self) -> i64 {
        self.paper_count.unwrap_or(0)
    }

    /// The author's papers sorted by citations, most cited first.
    #[must_use]
    pub fn top_papers(&self, n: usize) -> Vec<&Paper> {
        let mut papers: Vec<&Paper> = self.papers.iter().collect();
        papers.sort_by_key(|p| std::cmp::Reverse(p.citations()));
        papers.truncate(n);
        papers
    }
}

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthorRef {
    /// Get the author name or "Unknown".
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// External identifiers for an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorExternalIds {
    /// ORCID identifier.
    #[serde(rename = "ORCID", default)]
    pub orcid: Option<String>,

    /// DBLP keys.
    #[serde(rename = "DBLP", default, deserialize_with = "dblp_keys")]
    pub dblp: Vec<String>,
}

// The API returns DBLP either as a single key or a list of keys.
fn dblp_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Keys {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Keys>::deserialize(deserializer)? {
        Some(Keys::One(key)) => vec![key],
        Some(Keys::Many(keys)) => keys,
        None => Vec::new(),
    })
}

/// Author papers result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorPapersResult {
    /// Offset for pagination.
    #[serde(default)]
    pub offset: i64,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<i64>,

    /// List of papers.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Paper>,
}
