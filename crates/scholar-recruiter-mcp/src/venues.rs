//! Venue shortcut table.
//!
//! Maps short tokens such as `neurips` to the canonical venue string the
//! Semantic Scholar `venue` filter expects. Unknown tokens pass through
//! unchanged so callers can always supply a literal venue name.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single venue shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueEntry {
    /// Lowercase shortcut token.
    pub shortcut: String,

    /// Known names, canonical name first.
    pub names: Vec<String>,

    /// Display category (e.g. "Computer Vision").
    pub category: String,
}

impl VenueEntry {
    /// Create an entry from static data.
    #[must_use]
    pub fn new(shortcut: &str, names: &[&str], category: &str) -> Self {
        Self {
            shortcut: shortcut.to_lowercase(),
            names: names.iter().map(|n| (*n).to_string()).collect(),
            category: category.to_string(),
        }
    }

    /// The canonical venue name.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.names.first().map_or(self.shortcut.as_str(), String::as_str)
    }
}

/// Lookup table of venue shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueTable {
    entries: Vec<VenueEntry>,
}

/// Built-in shortcuts: (shortcut, names, category).
const DEFAULT_VENUES: &[(&str, &[&str], &str)] = &[
    ("neurips", &["NeurIPS", "Neural Information Processing Systems", "NIPS"], "General ML"),
    ("icml", &["ICML", "International Conference on Machine Learning"], "General ML"),
    ("iclr", &["ICLR", "International Conference on Learning Representations"], "General ML"),
    ("aaai", &["AAAI", "Association for the Advancement of Artificial Intelligence"], "General ML"),
    (
        "ijcai",
        &["IJCAI", "International Joint Conference on Artificial Intelligence"],
        "General ML",
    ),
    ("jmlr", &["JMLR", "Journal of Machine Learning Research"], "General ML"),
    ("cvpr", &["CVPR", "Computer Vision and Pattern Recognition"], "Computer Vision"),
    ("iccv", &["ICCV", "International Conference on Computer Vision"], "Computer Vision"),
    ("eccv", &["ECCV", "European Conference on Computer Vision"], "Computer Vision"),
    ("acl", &["ACL", "Association for Computational Linguistics"], "NLP"),
    ("emnlp", &["EMNLP", "Empirical Methods in Natural Language Processing"], "NLP"),
    (
        "naacl",
        &["NAACL", "North American Chapter of the Association for Computational Linguistics"],
        "NLP",
    ),
    ("kdd", &["KDD", "SIGKDD", "Knowledge Discovery and Data Mining"], "Applied ML"),
    ("icra", &["ICRA", "International Conference on Robotics and Automation"], "Robotics"),
    ("corl", &["CoRL", "Conference on Robot Learning"], "Robotics"),
    ("nature", &["Nature", "Nature Machine Intelligence"], "High Impact Journals"),
    ("science", &["Science"], "High Impact Journals"),
    (
        "tpami",
        &["TPAMI", "IEEE Transactions on Pattern Analysis and Machine Intelligence"],
        "High Impact Journals",
    ),
];

impl VenueTable {
    /// Build a table from explicit entries.
    #[must_use]
    pub fn new(entries: Vec<VenueEntry>) -> Self {
        Self { entries }
    }

    /// Look up the entry for a shortcut (case-insensitive).
    #[must_use]
    pub fn get(&self, shortcut: &str) -> Option<&VenueEntry> {
        let key = shortcut.trim().to_lowercase();
        self.entries.iter().find(|e| e.shortcut == key)
    }

    /// Resolve a shortcut to its canonical venue name.
    ///
    /// Unknown input is returned unchanged.
    #[must_use]
    pub fn resolve(&self, venue: &str) -> String {
        self.get(venue).map_or_else(|| venue.to_string(), |e| e.canonical().to_string())
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[VenueEntry] {
        &self.entries
    }

    /// Shortcut to canonical name mapping.
    #[must_use]
    pub fn shortcuts(&self) -> BTreeMap<&str, &str> {
        self.entries.iter().map(|e| (e.shortcut.as_str(), e.canonical())).collect()
    }

    /// Entries grouped by category, categories in first-seen order.
    #[must_use]
    pub fn by_category(&self) -> Vec<(&str, Vec<&VenueEntry>)> {
        let mut groups: Vec<(&str, Vec<&VenueEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, list)) => list.push(entry),
                None => groups.push((entry.category.as_str(), vec![entry])),
            }
        }
        groups
    }

    /// Number of shortcuts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VenueTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_VENUES
                .iter()
                .map(|(shortcut, names, category)| VenueEntry::new(shortcut, names, category))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_shortcuts() {
        let table = VenueTable::default();
        assert_eq!(table.resolve("neurips"), "NeurIPS");
        assert_eq!(table.resolve("corl"), "CoRL");
        assert_eq!(table.resolve("tpami"), "TPAMI");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let table = VenueTable::default();
        assert_eq!(table.resolve("NeurIPS"), "NeurIPS");
        assert_eq!(table.resolve(" ICML "), "ICML");
    }

    #[test]
    fn test_resolve_unknown_passes_through() {
        let table = VenueTable::default();
        assert_eq!(table.resolve("Journal of Obscure Results"), "Journal of Obscure Results");
        assert_eq!(table.resolve(""), "");
    }

    #[test]
    fn test_categories_cover_every_entry() {
        let table = VenueTable::default();
        let grouped: usize = table.by_category().iter().map(|(_, v)| v.len()).sum();
        assert_eq!(grouped, table.len());
        assert_eq!(table.by_category()[0].0, "General ML");
    }

    #[test]
    fn test_custom_table() {
        let table = VenueTable::new(vec![VenueEntry::new("foo", &["FooConf"], "Test")]);
        assert_eq!(table.resolve("foo"), "FooConf");
        assert_eq!(table.resolve("neurips"), "neurips");
    }
}
