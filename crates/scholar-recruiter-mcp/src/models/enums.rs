//! Enumeration types for tool parameters.

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Flattened JSON.
    #[default]
    Json,
    /// Human-readable Markdown.
    Markdown,
}

/// Server-side sort order for paper search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSort {
    /// Most cited first.
    #[default]
    #[serde(rename = "citationCount:desc")]
    CitationsDesc,
    /// Most recent first.
    #[serde(rename = "publicationDate:desc")]
    PublicationDateDesc,
    /// Stable order by paper ID.
    #[serde(rename = "paperId")]
    PaperId,
}

impl PaperSort {
    /// Value for the `sort` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::CitationsDesc => "citationCount:desc",
            Self::PublicationDateDesc => "publicationDate:desc",
            Self::PaperId => "paperId",
        }
    }
}

/// Client-side sort order for an author's papers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorPaperSort {
    /// Most cited first.
    #[default]
    Citations,
    /// Newest first.
    Year,
    /// Most influential citations first.
    Influential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_default() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Json);
    }

    #[test]
    fn test_paper_sort_wire_names() {
        let sort: PaperSort = serde_json::from_str(r#""publicationDate:desc""#).unwrap();
        assert_eq!(sort, PaperSort::PublicationDateDesc);
        assert_eq!(sort.as_param(), "publicationDate:desc");
        assert_eq!(PaperSort::default().as_param(), "citationCount:desc");
        assert!(serde_json::from_str::<PaperSort>(r#""relevance""#).is_err());
    }

    #[test]
    fn test_author_paper_sort() {
        let sort: AuthorPaperSort = serde_json::from_str(r#""influential""#).unwrap();
        assert_eq!(sort, AuthorPaperSort::Influential);
    }
}
