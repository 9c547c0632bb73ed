//! Data models for Semantic Scholar and GitHub entities.
//!
//! API models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` where the API does.

mod author;
mod enums;
mod github;
mod inputs;
mod paper;
mod recruiting;

pub use author::{Author, AuthorExternalIds, AuthorPapersResult, AuthorRef, AuthorSearchResult};
pub use enums::{AuthorPaperSort, PaperSort, ResponseFormat};
pub use github::{
    GitHubEvent, GitHubProfile, GitHubRepo, GitHubUser, GitHubUserSummary, RepoSummary,
    UserSearchResult,
};
pub use inputs::*;
pub use paper::{
    BulkSearchResult, CitationContext, CitationResult, ExternalIds, OpenAccessPdf, Paper,
    PublicationVenue, S2Field, Tldr,
};
pub use recruiting::{CompositeProfile, IdentityMatch, RecentPaper, RisingStar, VenueAuthor};
