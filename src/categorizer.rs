// Article categorizer — the public entry point.
//
// Owns the keyword table and the document-frequency table, seeds both at
// construction, and guards them with one read-write lock. Classification
// takes the read lock; keyword updates take the write lock so a new keyword
// and its document-frequency bump land together.
//
// Construct one and share it behind an `Arc`; there is no global instance.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::analysis::tfidf::{DocumentFrequencyTable, TfIdfCalculator};
use crate::analysis::traits::TermWeighter;
use crate::models::{Category, CategoryScores, ClassificationResult};
use crate::scoring::keywords::{normalize_keyword, KeywordTable};
use crate::scoring::scorer::CategoryScorer;

/// Both tables, always read and written together.
struct Tables {
    scorer: CategoryScorer,
    tfidf: TfIdfCalculator,
}

/// Assigns topical categories to articles. Safe to share across threads.
pub struct ArticleCategorizer {
    tables: RwLock<Tables>,
}

impl Default for ArticleCategorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleCategorizer {
    /// Build a categorizer from the built-in keyword lists.
    ///
    /// Each keyword's document frequency is the number of categories listing
    /// it, and the corpus starts with one document per category.
    pub fn new() -> Self {
        Self::with_keywords(KeywordTable::seeded())
    }

    /// Build a categorizer from an arbitrary keyword table, deriving the
    /// document-frequency table the same way `new` does.
    pub fn with_keywords(keywords: KeywordTable) -> Self {
        let table = DocumentFrequencyTable::new(
            keywords.document_frequencies(),
            keywords.category_count() as u32,
        );

        info!(
            categories = keywords.category_count(),
            terms = table.len(),
            "Seeded article categorizer"
        );

        Self {
            tables: RwLock::new(Tables {
                scorer: CategoryScorer::new(keywords),
                tfidf: TfIdfCalculator::new(table),
            }),
        }
    }

    /// Predict the category of an article. Missing fields count as empty.
    pub fn classify(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
    ) -> Category {
        self.get_category_confidence(title, description, content)
            .category
    }

    /// Predict the category of an article along with its confidence.
    ///
    /// This is the variant to call when the confidence is stored alongside
    /// the category.
    pub fn get_category_confidence(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
    ) -> ClassificationResult {
        let text = article_text(title, description, content);
        let tables = self.read();
        let result = tables.scorer.get_category_confidence(&text, &tables.tfidf);

        debug!(
            category = %result.category,
            confidence = result.confidence,
            chars = text.len(),
            "Classified article"
        );

        result
    }

    /// Raw per-category scores for an article, in canonical order.
    pub fn category_scores(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
    ) -> CategoryScores {
        let text = article_text(title, description, content);
        let tables = self.read();
        tables.scorer.category_scores(&text, &tables.tfidf)
    }

    /// Add keywords to a category and record them as one new reference
    /// document. Returns how many keywords were new to the category.
    ///
    /// Every call counts one document, even when the keyword table is left
    /// unchanged: General owns no keywords, and a list that is empty after
    /// trimming adds nothing to any category.
    pub fn update_category_keywords<S: AsRef<str>>(
        &self,
        category: Category,
        keywords: &[S],
    ) -> usize {
        let increments: HashMap<String, u32> = keywords
            .iter()
            .filter_map(|k| normalize_keyword(k.as_ref()))
            .map(|k| (k, 1))
            .collect();

        let mut tables = self.write();
        let added = tables.scorer.update_category_keywords(category, keywords);
        tables.tfidf.update_document_frequency(&increments);

        info!(
            %category,
            requested = increments.len(),
            added,
            total_documents = tables.tfidf.total_documents(),
            "Updated category keywords"
        );

        added
    }

    /// Keywords owned by a category, sorted. Empty for General.
    pub fn keywords(&self, category: Category) -> Vec<String> {
        self.read().scorer.keywords(category)
    }

    /// A copy of the whole keyword table, for callers that persist it and
    /// replay it through `update_category_keywords` later.
    pub fn keyword_snapshot(&self) -> BTreeMap<Category, Vec<String>> {
        self.read()
            .scorer
            .keyword_table()
            .iter()
            .map(|(category, set)| (*category, set.iter().cloned().collect()))
            .collect()
    }

    /// TF-IDF weight of every distinct token, heaviest first (ties by term).
    pub fn term_weights(&self, text: &str) -> Vec<(String, f64)> {
        let mut weights: Vec<(String, f64)> =
            self.read().tfidf.calculate_tfidf(text).into_iter().collect();
        weights.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        weights
    }

    pub fn document_frequency(&self, term: &str) -> Option<u32> {
        self.read().tfidf.document_frequency(term)
    }

    pub fn total_documents(&self) -> u32 {
        self.read().tfidf.total_documents()
    }

    // Poisoning is ignored: a failed update must not stop classification.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Join the article fields with single spaces, treating missing ones as empty.
pub fn article_text(title: Option<&str>, description: Option<&str>, content: Option<&str>) -> String {
    format!(
        "{} {} {}",
        title.unwrap_or_default(),
        description.unwrap_or_default(),
        content.unwrap_or_default()
    )
}
