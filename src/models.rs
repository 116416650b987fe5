// Data models — the types that cross the crate boundary.
//
// Category tags are the one fixed, lowercase vocabulary that persistence and
// notification matching compare against, so every representation (Display,
// serde, FromStr) goes through `as_str`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topical category of an article.
///
/// Variants are declared in canonical order; the derived `Ord` follows it and
/// score ties are broken by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    Sports,
    Technology,
    /// Fallback when no keyword category scores above zero. Never owns keywords.
    General,
}

impl Category {
    /// The four keyword-bearing categories, in canonical order.
    pub const SCORED: [Category; 4] = [
        Category::Business,
        Category::Entertainment,
        Category::Sports,
        Category::Technology,
    ];

    /// Every category, in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Business,
        Category::Entertainment,
        Category::Sports,
        Category::Technology,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::General => "general",
        }
    }

    /// Whether this category carries a keyword set (everything but General).
    pub fn is_scored(&self) -> bool {
        !matches!(self, Category::General)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown category '{}'. Expected one of: {}",
                    wanted,
                    valid.join(", ")
                )
            })
    }
}

/// The outcome of classifying one article.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Winning score divided by the sum of all category scores, in [0, 1].
    pub confidence: f64,
}

impl ClassificationResult {
    /// The result reported when no keyword category matched anything.
    pub fn general() -> Self {
        Self {
            category: Category::General,
            confidence: 0.0,
        }
    }
}

/// Raw per-category scores for one text, in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScores {
    pub scores: Vec<(Category, f64)>,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        self.scores
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
            .unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.scores.iter().map(|(_, s)| *s).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.scores.iter().map(|(_, s)| s).sum()
    }

    /// Pick the winner: the first category in canonical order holding the
    /// maximum score. All-zero scores fall back to General with zero confidence.
    pub fn resolve(&self) -> ClassificationResult {
        let max_score = self.max();
        if max_score <= 0.0 {
            return ClassificationResult::general();
        }

        let total = self.total();
        let category = self
            .scores
            .iter()
            .find(|(_, s)| *s == max_score)
            .map(|(c, _)| *c)
            .unwrap_or(Category::General);

        ClassificationResult {
            category,
            confidence: (max_score / total).clamp(0.0, 1.0),
        }
    }
}
