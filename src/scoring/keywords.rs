// Keyword table — the per-category trigger words that drive scoring.
//
// Built-in seed lists live here. Keywords may span several words
// ("stock market"); those never match a single token exactly, but they still
// collect partial-match credit from the tokens they contain.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::Category;

// No "annual": it would pull community-event stories into business.
const BUSINESS: &[&str] = &[
    "stock", "market", "economy", "business", "finance", "trade",
    "investment", "banking", "currency", "stock market", "dow jones",
    "nasdaq", "s&p 500", "federal reserve", "inflation", "recession",
    "startup", "venture capital", "entrepreneurship", "profit", "revenue",
    "earnings", "quarterly", "dividend", "shareholder", "ipo",
    "merger", "acquisition", "market cap", "valuation", "funding",
];

const ENTERTAINMENT: &[&str] = &[
    "movie", "film", "actor", "actress", "celebrity", "music",
    "concert", "album", "song", "artist", "entertainment", "show",
    "television", "tv", "netflix", "hulu", "amazon prime", "streaming",
    "box office", "premiere", "red carpet", "award", "oscar", "grammy",
    "director", "producer", "studio", "release", "trailer", "review",
    "performance", "tour", "festival",
];

const SPORTS: &[&str] = &[
    "sport", "football", "basketball", "baseball", "soccer",
    "tennis", "golf", "olympics", "championship", "tournament",
    "player", "team", "coach", "game", "match", "score", "league",
    "season", "playoff", "final", "victory", "defeat", "champion",
    "athlete", "competition", "stadium", "arena", "fans", "ticket",
    "broadcast", "live", "highlights", "statistics", "ranking",
];

const TECHNOLOGY: &[&str] = &[
    "tech", "technology", "computer", "software", "hardware",
    "internet", "digital", "artificial intelligence", "ai", "machine learning",
    "blockchain", "cryptocurrency", "bitcoin", "programming", "coding",
    "startup", "innovation", "gadget", "device", "app", "cloud",
    "data", "security", "privacy", "cybersecurity", "algorithm",
    "platform", "interface", "user experience", "mobile", "web",
    "development", "engineer", "developer", "code", "system",
];

/// Built-in seed words for a category. General has none.
pub fn seed_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Business => BUSINESS,
        Category::Entertainment => ENTERTAINMENT,
        Category::Sports => SPORTS,
        Category::Technology => TECHNOLOGY,
        Category::General => &[],
    }
}

/// Trim and lowercase a keyword; `None` if nothing is left.
pub fn normalize_keyword(keyword: &str) -> Option<String> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Category -> set of lowercase keywords.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: BTreeMap<Category, BTreeSet<String>>,
}

impl KeywordTable {
    /// An empty set for every scored category.
    pub fn new() -> Self {
        Self {
            entries: Category::SCORED
                .into_iter()
                .map(|c| (c, BTreeSet::new()))
                .collect(),
        }
    }

    /// The built-in table, one seed list per scored category.
    pub fn seeded() -> Self {
        let mut table = Self::new();
        for category in Category::SCORED {
            table.insert(category, seed_keywords(category).iter().copied());
        }
        table
    }

    /// Union keywords into a category's set. Returns how many were new.
    ///
    /// General never owns keywords; inserting into it is a no-op.
    pub fn insert<I, S>(&mut self, category: Category, keywords: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(set) = self.entries.get_mut(&category) else {
            return 0;
        };
        keywords
            .into_iter()
            .filter_map(|k| normalize_keyword(k.as_ref()))
            .filter(|k| set.insert(k.clone()))
            .count()
    }

    pub fn get(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.entries.get(&category)
    }

    pub fn contains(&self, category: Category, keyword: &str) -> bool {
        self.entries
            .get(&category)
            .is_some_and(|set| set.contains(keyword))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &BTreeSet<String>)> {
        self.entries.iter()
    }

    /// Number of categories carrying a keyword set.
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// For every distinct keyword, how many categories list it.
    pub fn document_frequencies(&self) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for set in self.entries.values() {
            for keyword in set {
                *counts.entry(keyword.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}
