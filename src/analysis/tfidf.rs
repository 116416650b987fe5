// TF-IDF term weighting against a small, hand-seeded document-frequency table.
//
// The "corpus" here is synthetic: each keyword category counts as one
// document, and every keyword update adds one more. Its only job is to make
// keywords shared by several categories weigh less than distinctive ones.
//
// Terms absent from the table get idf = 0, so words that are not keywords
// never influence scoring. This is deliberately unsmoothed.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::text;
use super::traits::TermWeighter;

/// Term -> document count, plus the number of documents in the corpus.
#[derive(Debug, Clone)]
pub struct DocumentFrequencyTable {
    counts: HashMap<String, u32>,
    /// Never zero, so `total / df` is always defined.
    total_documents: u32,
}

impl DocumentFrequencyTable {
    /// Build a table from initial counts. A `total_documents` of zero is
    /// raised to one.
    pub fn new(counts: HashMap<String, u32>, total_documents: u32) -> Self {
        Self {
            counts,
            total_documents: total_documents.max(1),
        }
    }

    pub fn get(&self, term: &str) -> Option<u32> {
        self.counts.get(term).copied()
    }

    pub fn total_documents(&self) -> u32 {
        self.total_documents
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Inverse document frequency of a term; 0 for unknown or zero-count terms.
    ///
    /// Floored at zero so every weight, and with it every category score, is
    /// non-negative; a negative score would push confidence outside [0, 1].
    /// Only reachable when raw increments let a term's count exceed the
    /// number of documents.
    pub fn idf(&self, term: &str) -> f64 {
        match self.counts.get(term) {
            Some(&df) if df > 0 => (self.total_documents as f64 / df as f64).ln().max(0.0),
            _ => 0.0,
        }
    }

    /// Add each increment to its term's count and record one new document.
    pub fn add_document<'a, I>(&mut self, increments: I)
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        for (term, inc) in increments {
            let count = self.counts.entry(term.to_string()).or_insert(0);
            *count = count.saturating_add(inc);
        }
        self.total_documents = self.total_documents.saturating_add(1);
    }
}

/// Computes TF-IDF weights for a text from a `DocumentFrequencyTable`.
#[derive(Debug, Clone)]
pub struct TfIdfCalculator {
    table: DocumentFrequencyTable,
}

impl TfIdfCalculator {
    pub fn new(table: DocumentFrequencyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &DocumentFrequencyTable {
        &self.table
    }

    pub fn document_frequency(&self, term: &str) -> Option<u32> {
        self.table.get(term)
    }

    pub fn total_documents(&self) -> u32 {
        self.table.total_documents()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.table.get(term).is_some()
    }

    /// Fold a new reference document into the table.
    ///
    /// Each `(term, inc)` adds `inc` to that term's count. `total_documents`
    /// grows by exactly one per call, however many terms are passed.
    pub fn update_document_frequency(&mut self, counts: &HashMap<String, u32>) {
        self.table
            .add_document(counts.iter().map(|(term, inc)| (term.as_str(), *inc)));
        debug!(
            terms = counts.len(),
            total_documents = self.table.total_documents(),
            "Updated document frequencies"
        );
    }
}

impl TermWeighter for TfIdfCalculator {
    fn calculate_tfidf(&self, text: &str) -> BTreeMap<String, f64> {
        let tokens = text::tokenize(text);
        let n = tokens.len();
        if n == 0 {
            return BTreeMap::new();
        }

        text::word_frequency(&tokens)
            .into_iter()
            .map(|(token, freq)| {
                let tf = freq as f64 / n as f64;
                let idf = self.table.idf(&token);
                (token, tf * idf)
            })
            .collect()
    }
}
