//! Result shapes for the recruiting tools.

use serde::Serialize;

use super::{Author, GitHubProfile};
use crate::scoring::AcademicTier;

/// An author ranked by output at a venue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAuthor {
    pub author_id: String,
    pub name: String,
    /// Papers at the venue in the searched window.
    pub venue_papers: u32,
    /// Citations of those papers.
    pub venue_citations: i64,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_citations: Option<i64>,
}

impl VenueAuthor {
    /// Active year range as "2020-2024".
    #[must_use]
    pub fn year_range(&self) -> String {
        match (self.first_year, self.last_year) {
            (Some(first), Some(last)) => format!("{first}-{last}"),
            _ => "N/A".to_string(),
        }
    }
}

/// A recent paper counted towards a rising star's impact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPaper {
    pub paper_id: String,
    pub title: String,
    pub year: Option<i32>,
    pub citations: i64,
}

/// An author with high recent impact relative to career stage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RisingStar {
    pub author_id: String,
    pub name: String,
    pub h_index: i32,
    pub total_citations: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub recent_citations: i64,
    pub recent_papers: Vec<RecentPaper>,
    /// recent citations / (h-index + 1)
    pub score: f64,
}

impl RisingStar {
    /// Most cited recent paper.
    #[must_use]
    pub fn top_paper(&self) -> Option<&RecentPaper> {
        self.recent_papers.iter().max_by_key(|p| p.citations)
    }
}

/// How the academic and GitHub identities relate by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityMatch {
    /// Names are equal ignoring case.
    Exact,
    /// One name contains the other ignoring case.
    Substring,
    /// No name relation found.
    None,
}

impl IdentityMatch {
    /// Compare two names by exact or substring match, ignoring case and outer whitespace.
    #[must_use]
    pub fn compare(a: &str, b: &str) -> Self {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a.is_empty() || b.is_empty() {
            Self::None
        } else if a == b {
            Self::Exact
        } else if a.contains(&b) || b.contains(&a) {
            Self::Substring
        } else {
            Self::None
        }
    }

    /// Best match among several candidate name pairs.
    #[must_use]
    pub fn best<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut best = Self::None;
        for (a, b) in pairs {
            match Self::compare(a, b) {
                Self::Exact => return Self::Exact,
                Self::Substring => best = Self::Substring,
                Self::None => {}
            }
        }
        best
    }
}

/// Academic profile merged with an optional GitHub profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeProfile {
    /// The name the caller asked about.
    pub query_name: String,
    pub academic: Author,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubProfile>,
    pub identity_match: Option<IdentityMatch>,
    pub academic_score: u8,
    pub academic_tier: AcademicTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_score: Option<u8>,
    pub composite_score: u8,
}
