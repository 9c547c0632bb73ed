//! JSON output formatting with token efficiency.

use serde_json::{Value, json};

use crate::models::{
    Author, CompositeProfile, GitHubProfile, GitHubUser, Paper, RisingStar, VenueAuthor,
};
use crate::venues::VenueTable;

/// Create a compact paper representation for JSON output.
///
/// Only non-empty optional fields are emitted.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.id(),
        "title": paper.title_or_default(),
        "year": paper.year,
        "citations": paper.citations(),
    });

    if !paper.authors.is_empty() {
        obj["authors"] =
            json!(paper.authors.iter().filter_map(|a| a.name.as_ref()).collect::<Vec<_>>());
    }

    if let Some(venue) = paper.venue_name() {
        obj["venue"] = json!(venue);
    }

    if let Some(influential) = paper.influential_citation_count {
        obj["influentialCitations"] = json!(influential);
    }

    if let Some(doi) = paper.doi() {
        obj["doi"] = json!(doi);
    }

    if let Some(arxiv) = paper.arxiv_id() {
        obj["arxiv"] = json!(arxiv);
    }

    if let Some(pdf) = paper.pdf_url() {
        obj["pdf"] = json!(pdf);
    }

    obj
}

/// Full paper record for the detail view.
#[must_use]
pub fn paper_detail(paper: &Paper) -> Value {
    let mut obj = compact_paper(paper);

    if let Some(abs) = paper.r#abstract.as_deref().filter(|a| !a.is_empty()) {
        obj["abstract"] = json!(abs);
    }
    if let Some(tldr) = paper.tldr_text() {
        obj["tldr"] = json!(tldr);
    }
    if let Some(refs) = paper.reference_count {
        obj["references"] = json!(refs);
    }
    if let Some(date) = &paper.publication_date {
        obj["publicationDate"] = json!(date);
    }
    if let Some(corpus_id) = paper.corpus_id {
        obj["corpusId"] = json!(corpus_id);
    }
    if let Some(fields) = paper.fields_of_study.as_ref().filter(|f| !f.is_empty()) {
        obj["fields"] = json!(fields);
    }
    let categories = paper.s2_categories();
    if !categories.is_empty() {
        obj["s2Fields"] = json!(categories);
    }
    if let Some(id) = paper.id() {
        obj["url"] = json!(format!("https://www.semanticscholar.org/paper/{id}"));
    }

    obj
}

/// Create a compact author representation for JSON output.
#[must_use]
pub fn compact_author(author: &Author) -> Value {
    let mut obj = json!({
        "id": author.author_id,
        "name": author.name_or_default(),
        "hIndex": author.h_index_value(),
        "citations": author.citations(),
        "papers": author.papers_count(),
    });

    if !author.affiliations.is_empty() {
        obj["affiliations"] = json!(author.affiliations);
    }

    if let Some(orcid) = author.orcid() {
        obj["orcid"] = json!(orcid);
    }

    if let Some(homepage) = &author.homepage {
        obj["homepage"] = json!(homepage);
    }

    obj
}

/// Author record with aliases, DBLP keys and the top papers.
#[must_use]
pub fn author_detail(author: &Author, top_papers: usize) -> Value {
    let mut obj = compact_author(author);

    if !author.aliases.is_empty() {
        obj["aliases"] = json!(author.aliases);
    }
    if !author.dblp().is_empty() {
        obj["dblp"] = json!(author.dblp());
    }
    obj["topPapers"] = author
        .top_papers(top_papers)
        .into_iter()
        .map(|p| {
            json!({
                "title": p.title_or_default(),
                "year": p.year,
                "venue": p.venue_name(),
                "citations": p.citations(),
            })
        })
        .collect();
    obj["url"] = json!(format!("https://www.semanticscholar.org/author/{}", author.author_id));

    obj
}

/// An author ranked at a venue.
#[must_use]
pub fn venue_author(author: &VenueAuthor) -> Value {
    let mut obj = json!({
        "id": author.author_id,
        "name": author.name,
        "venuePapers": author.venue_papers,
        "venueCitations": author.venue_citations,
        "years": author.year_range(),
    });
    if let Some(affiliation) = &author.affiliation {
        obj["affiliation"] = json!(affiliation);
    }
    if let Some(h) = author.h_index {
        obj["hIndex"] = json!(h);
    }
    if let Some(total) = author.total_citations {
        obj["totalCitations"] = json!(total);
    }
    obj
}

/// A rising-star candidate with the most cited recent paper.
#[must_use]
pub fn rising_star(star: &RisingStar) -> Value {
    let mut obj = json!({
        "id": star.author_id,
        "name": star.name,
        "hIndex": star.h_index,
        "totalCitations": star.total_citations,
        "recentCitations": star.recent_citations,
        "recentPapers": star.recent_papers.len(),
        "score": (star.score * 10.0).round() / 10.0,
    });
    if let Some(affiliation) = &star.affiliation {
        obj["affiliation"] = json!(affiliation);
    }
    if let Some(homepage) = &star.homepage {
        obj["homepage"] = json!(homepage);
    }
    if let Some(top) = star.top_paper() {
        obj["topPaper"] = json!({
            "id": top.paper_id,
            "title": top.title,
            "year": top.year,
            "citations": top.citations,
        });
    }
    obj
}

/// A GitHub user found by name search.
#[must_use]
pub fn github_user(user: &GitHubUser) -> Value {
    json!({
        "username": user.login,
        "name": user.name,
        "bio": user.bio_text(),
        "company": user.company,
        "location": user.location,
        "blog": user.blog.as_deref().filter(|b| !b.is_empty()),
        "followers": user.followers,
        "publicRepos": user.public_repos,
        "url": user.profile_url(),
    })
}

/// GitHub activity profile.
#[must_use]
pub fn github_profile(profile: &GitHubProfile) -> Value {
    let mut obj = json!({
        "username": profile.username,
        "name": profile.name,
        "url": profile.profile_url,
        "followers": profile.followers,
        "following": profile.following,
        "publicRepos": profile.public_repos,
        "totalStars": profile.total_stars,
        "totalForks": profile.total_forks,
        "recentStars": profile.recent_stars,
        "recentStarRatio": profile.recent_star_ratio(),
        "recentEvents": profile.recent_events,
        "pushEvents": profile.push_events,
        "activityScore": profile.activity_score,
        "rating": profile.rating,
        "ratingDescription": profile.rating.description(),
        "topLanguages": profile
            .top_languages
            .iter()
            .map(|(lang, repos)| json!({"language": lang, "repos": repos}))
            .collect::<Vec<_>>(),
        "topRepos": profile.top_repos,
    });
    if let Some(bio) = &profile.bio {
        obj["bio"] = json!(bio);
    }
    if let Some(company) = &profile.company {
        obj["company"] = json!(company);
    }
    if let Some(location) = &profile.location {
        obj["location"] = json!(location);
    }
    if let Some(last) = profile.last_activity {
        obj["lastActivity"] = json!(last.to_rfc3339());
    }
    obj
}

/// Merged academic and GitHub profile.
#[must_use]
pub fn composite_profile(profile: &CompositeProfile) -> Value {
    json!({
        "query": profile.query_name,
        "academic": author_detail(&profile.academic, 5),
        "github": profile.github.as_ref().map(github_profile),
        "identityMatch": profile.identity_match,
        "scores": {
            "academic": profile.academic_score,
            "academicTier": profile.academic_tier.label(),
            "github": profile.github_score,
            "composite": profile.composite_score,
        },
    })
}

/// Venue shortcuts, flat and grouped by category.
#[must_use]
pub fn venue_table(table: &VenueTable) -> Value {
    let categories: serde_json::Map<String, Value> = table
        .by_category()
        .into_iter()
        .map(|(category, entries)| {
            let shortcuts: Vec<&str> = entries.iter().map(|e| e.shortcut.as_str()).collect();
            (category.to_string(), json!(shortcuts))
        })
        .collect();

    json!({
        "venues": table.shortcuts(),
        "categories": categories,
    })
}
