// Term weighter trait — the seam between weighting and category scoring.
//
// The category scorer only needs a term -> weight map for a text. It never
// looks at document frequencies, so anything that can produce that map can
// stand in for the TF-IDF calculator (tests use fixed maps this way).

use std::collections::BTreeMap;

/// Produces a per-term relevance weight for a piece of text.
pub trait TermWeighter {
    /// Weight every distinct token of `text`. Empty text yields an empty map.
    ///
    /// Ordered by term so that summing over the map is reproducible.
    fn calculate_tfidf(&self, text: &str) -> BTreeMap<String, f64>;
}
