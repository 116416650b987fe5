// Category scoring — turns term weights into a per-category score and a winner.
//
// For each keyword of a category:
//   - exact token match:   + 2 x weight
//   - otherwise, every token where one string contains the other: + weight
//
// A keyword can collect partial credit from several tokens ("market" inside
// both "markets" and "marketing"). The winner is the first category in
// canonical order holding the top score; confidence is top / sum.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use super::keywords::KeywordTable;
use crate::analysis::traits::TermWeighter;
use crate::models::{Category, CategoryScores, ClassificationResult};

/// Weight multiplier for a keyword found as a whole token.
pub const EXACT_MATCH_WEIGHT: f64 = 2.0;
/// Weight multiplier for a keyword found only as a substring of (or containing) a token.
pub const PARTIAL_MATCH_WEIGHT: f64 = 1.0;

/// Scores texts against a keyword table.
#[derive(Debug, Clone)]
pub struct CategoryScorer {
    keywords: KeywordTable,
}

impl CategoryScorer {
    pub fn new(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    pub fn keyword_table(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Keywords owned by a category. Empty for General.
    pub fn keywords(&self, category: Category) -> Vec<String> {
        self.keywords
            .get(category)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Score one category against precomputed term weights.
    pub fn calculate_category_score(
        &self,
        category: Category,
        tfidf_scores: &BTreeMap<String, f64>,
    ) -> f64 {
        match self.keywords.get(category) {
            Some(keywords) => score_keywords(keywords, tfidf_scores),
            None => 0.0,
        }
    }

    /// Raw scores for every keyword category, in canonical order.
    pub fn category_scores<W: TermWeighter + ?Sized>(
        &self,
        text: &str,
        weighter: &W,
    ) -> CategoryScores {
        let tfidf_scores = weighter.calculate_tfidf(text);
        CategoryScores {
            scores: Category::SCORED
                .into_iter()
                .map(|c| (c, self.calculate_category_score(c, &tfidf_scores)))
                .collect(),
        }
    }

    /// Predict the category of `text` and how confident the prediction is.
    pub fn get_category_confidence<W: TermWeighter + ?Sized>(
        &self,
        text: &str,
        weighter: &W,
    ) -> ClassificationResult {
        let scores = self.category_scores(text, weighter);
        let result = scores.resolve();

        debug!(
            category = %result.category,
            confidence = result.confidence,
            top_score = scores.max(),
            "Scored categories"
        );

        result
    }

    /// Union keywords into a category's set. Returns how many were new.
    ///
    /// Document frequencies are the caller's business; this only touches the
    /// keyword table.
    pub fn update_category_keywords<S: AsRef<str>>(
        &mut self,
        category: Category,
        keywords: &[S],
    ) -> usize {
        if !category.is_scored() {
            warn!(%category, "Ignoring keyword update for a category without keywords");
            return 0;
        }
        self.keywords.insert(category, keywords)
    }
}

fn score_keywords(keywords: &BTreeSet<String>, tfidf_scores: &BTreeMap<String, f64>) -> f64 {
    let mut score = 0.0;
    for keyword in keywords {
        if let Some(weight) = tfidf_scores.get(keyword) {
            score += weight * EXACT_MATCH_WEIGHT;
            continue;
        }
        for (word, weight) in tfidf_scores {
            if word.contains(keyword.as_str()) || keyword.contains(word.as_str()) {
                score += weight * PARTIAL_MATCH_WEIGHT;
            }
        }
    }
    score
}
