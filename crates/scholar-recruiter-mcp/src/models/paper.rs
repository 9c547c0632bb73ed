//! Paper data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::AuthorRef;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID. Empty for unresolved citing papers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Venue name as free text.
    #[serde(default)]
    pub venue: Option<String>,

    /// Structured venue record.
    #[serde(default)]
    pub publication_venue: Option<PublicationVenue>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// Citations judged to build meaningfully on this paper.
    #[serde(default)]
    pub influential_citation_count: Option<i64>,

    /// Number of references in this paper.
    #[serde(default)]
    pub reference_count: Option<i64>,

    /// List of authors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<AuthorRef>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Open access PDF information.
    #[serde(default)]
    pub open_access_pdf: Option<OpenAccessPdf>,

    /// External identifiers (DOI, ArXiv, ...).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// AI-generated TLDR summary.
    #[serde(default)]
    pub tldr: Option<Tldr>,

    /// Fields of study (e.g., "Computer Science").
    #[serde(default)]
    pub fields_of_study: Option<Vec<String>>,

    /// Semantic Scholar's own field classification.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub s2_fields_of_study: Vec<S2Field>,

    /// S2 corpus ID.
    #[serde(default)]
    pub corpus_id: Option<i64>,
}

impl Paper {
    /// Paper ID, if Semantic Scholar resolved one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        Some(self.paper_id.as_str()).filter(|id| !id.is_empty())
    }

    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Venue string, falling back to the structured venue name.
    #[must_use]
    pub fn venue_name(&self) -> Option<&str> {
        self.venue
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| self.publication_venue.as_ref()?.name.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// Get the ArXiv ID if available.
    #[must_use]
    pub fn arxiv_id(&self) -> Option<&str> {
        self.external_ids.as_ref()?.arxiv.as_deref()
    }

    /// Get the open access PDF URL if available.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf.as_ref()?.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Get the TLDR text if available.
    #[must_use]
    pub fn tldr_text(&self) -> Option<&str> {
        self.tldr.as_ref()?.text.as_deref()
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }

    /// Get influential citation count or 0 if not available.
    #[must_use]
    pub fn influential_citations(&self) -> i64 {
        self.influential_citation_count.unwrap_or(0)
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_ref())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First `n` author names, with a "+k more" suffix when truncated.
    #[must_use]
    pub fn author_names_short(&self, n: usize) -> String {
        let mut names = self
            .authors
            .iter()
            .take(n)
            .map(|a| a.name_or_default())
            .collect::<Vec<_>>()
            .join(", ");
        if self.authors.len() > n {
            names.push_str(&format!(" +{} more", self.authors.len() - n));
        }
        names
    }

    /// Semantic Scholar field categories.
    #[must_use]
    pub fn s2_categories(&self) -> Vec<&str> {
        self.s2_fields_of_study.iter().filter_map(|f| f.category.as_deref()).collect()
    }
}

/// Structured publication venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationVenue {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

/// Field-of-study classification entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S2Field {
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
}

/// Open access PDF information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    #[serde(default)]
    pub url: Option<String>,

    /// Status of open access.
    #[serde(default)]
    pub status: Option<String>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default)]
    pub arxiv: Option<String>,

    /// DBLP key.
    #[serde(rename = "DBLP", default)]
    pub dblp: Option<String>,

    /// ACL Anthology ID.
    #[serde(rename = "ACL", default)]
    pub acl: Option<String>,
}

/// AI-generated TLDR summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tldr {
    /// Summary text.
    #[serde(default)]
    pub text: Option<String>,

    /// Model used to generate the summary.
    #[serde(default)]
    pub model: Option<String>,
}

/// Citation entry wrapping the citing paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationContext {
    /// The citing paper.
    #[serde(alias = "citingPaper", default)]
    pub paper: Option<Paper>,

    /// Whether this is an influential citation.
    #[serde(default)]
    pub is_influential: Option<bool>,
}

/// Citation list result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationResult {
    /// Offset for pagination.
    #[serde(default)]
    pub offset: i64,

    /// Next offset if more results available.
    #[serde(default)]
    pub next: Option<i64>,

    /// Citation data.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<CitationContext>,
}

/// Bulk search result (uses continuation token instead of offset).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkSearchResult {
    /// Estimated total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Continuation token for next page (None = no more results).
    #[serde(default)]
    pub token: Option<String>,

    /// List of papers in this page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Paper>,
}

/// Deserialize an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an explicit `null` list as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"paperId": "abc123"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id, "abc123");
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert_eq!(paper.citations(), 0);
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Attention Is All You Need",
            "year": 2017,
            "venue": "",
            "publicationVenue": {"id": "v1", "name": "Neural Information Processing Systems"},
            "citationCount": 100000,
            "influentialCitationCount": 9000,
            "authors": [{"authorId": "a1", "name": "Ashish Vaswani"}],
            "externalIds": {"DOI": "10.1234/test", "ArXiv": "1706.03762", "CorpusId": 13756489},
            "s2FieldsOfStudy": [{"category": "Computer Science", "source": "external"}]
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.venue_name(), Some("Neural Information Processing Systems"));
        assert_eq!(paper.citations(), 100_000);
        assert_eq!(paper.influential_citations(), 9000);
        assert_eq!(paper.arxiv_id(), Some("1706.03762"));
        assert_eq!(paper.s2_categories(), vec!["Computer Science"]);
    }

    #[test]
    fn test_null_lists() {
        let json = r#"{"paperId": "p", "authors": null, "s2FieldsOfStudy": null}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert!(paper.authors.is_empty());
        assert!(paper.s2_fields_of_study.is_empty());
    }

    #[test]
    fn test_author_names_short() {
        let json = r#"{"paperId": "p", "authors": [
            {"authorId": "1", "name": "A"}, {"authorId": "2", "name": "B"},
            {"authorId": "3", "name": "C"}, {"authorId": "4", "name": "D"}
        ]}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.author_names_short(3), "A, B, C +1 more");
        assert_eq!(paper.author_names_short(5), "A, B, C, D");
    }

    #[test]
    fn test_citation_result_uses_citing_paper() {
        let json =
            r#"{"offset": 0, "data": [{"citingPaper": {"paperId": "c1", "title": "Follow-up"}}]}"#;
        let result: CitationResult = serde_json::from_str(json).unwrap();
        let paper = result.data[0].paper.as_ref().unwrap();
        assert_eq!(paper.title_or_default(), "Follow-up");
    }

    #[test]
    fn test_null_paper_id() {
        let json = r#"{"paperId": null, "title": "Unresolved"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert!(paper.id().is_none());
        assert_eq!(paper.title_or_default(), "Unresolved");
    }
}
