// Unit tests for category scoring.
//
// Tests the scorer in isolation with fixed term weights: exact vs partial
// match weighting, accumulation over several matching tokens, the all-zero
// fallback, and tie-breaking by canonical category order.

use std::collections::BTreeMap;

use news_categorizer::analysis::traits::TermWeighter;
use news_categorizer::models::CategoryScores;
use news_categorizer::scoring::keywords::KeywordTable;
use news_categorizer::scoring::scorer::{CategoryScorer, EXACT_MATCH_WEIGHT, PARTIAL_MATCH_WEIGHT};
use news_categorizer::{Category, ClassificationResult};

/// Term weights fixed up front, ignoring the text.
struct FixedWeights(BTreeMap<String, f64>);

impl FixedWeights {
    fn new(pairs: &[(&str, f64)]) -> Self {
        Self(pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect())
    }
}

impl TermWeighter for FixedWeights {
    fn calculate_tfidf(&self, _text: &str) -> BTreeMap<String, f64> {
        self.0.clone()
    }
}

fn scorer(entries: Vec<(Category, Vec<&str>)>) -> CategoryScorer {
    let mut table = KeywordTable::new();
    for (category, words) in entries {
        table.insert(category, words);
    }
    CategoryScorer::new(table)
}

// ============================================================
// Exact vs partial match
// ============================================================

#[test]
fn exact_token_outscores_partial_token_at_equal_weight() {
    let scorer = scorer(vec![(Category::Business, vec!["stock"])]);
    let weight = 0.35;

    let exact = scorer.calculate_category_score(
        Category::Business,
        &FixedWeights::new(&[("stock", weight)]).0,
    );
    let partial = scorer.calculate_category_score(
        Category::Business,
        &FixedWeights::new(&[("stocks", weight)]).0,
    );

    assert!((exact - weight * EXACT_MATCH_WEIGHT).abs() < 1e-12);
    assert!((partial - weight * PARTIAL_MATCH_WEIGHT).abs() < 1e-12);
    assert!(exact > partial);
}

#[test]
fn token_inside_keyword_counts_as_partial() {
    // "dow" is a substring of the keyword "dow jones"
    let scorer = scorer(vec![(Category::Business, vec!["dow jones"])]);
    let score = scorer.calculate_category_score(
        Category::Business,
        &FixedWeights::new(&[("dow", 0.2), ("jones", 0.1)]).0,
    );
    assert!((score - 0.3).abs() < 1e-12);
}

#[test]
fn one_keyword_collects_credit_from_every_partial_token() {
    let scorer = scorer(vec![(Category::Sports, vec!["play"])]);
    let score = scorer.calculate_category_score(
        Category::Sports,
        &FixedWeights::new(&[("player", 0.1), ("playoff", 0.2), ("playing", 0.3)]).0,
    );
    assert!((score - 0.6).abs() < 1e-12);
}

#[test]
fn unrelated_tokens_contribute_nothing() {
    let scorer = scorer(vec![(Category::Technology, vec!["software"])]);
    let score = scorer.calculate_category_score(
        Category::Technology,
        &FixedWeights::new(&[("weather", 0.9), ("garden", 0.4)]).0,
    );
    assert_eq!(score, 0.0);
}

// ============================================================
// Winner selection and confidence
// ============================================================

#[test]
fn all_zero_scores_fall_back_to_general() {
    let scorer = CategoryScorer::new(KeywordTable::seeded());
    let result = scorer.get_category_confidence("", &FixedWeights::new(&[("stock", 0.0)]));
    assert_eq!(result, ClassificationResult::general());
}

#[test]
fn confidence_is_top_score_over_total() {
    let scorer = scorer(vec![
        (Category::Business, vec!["market"]),
        (Category::Technology, vec!["cloud"]),
    ]);
    let result = scorer.get_category_confidence(
        "",
        &FixedWeights::new(&[("market", 0.3), ("cloud", 0.1)]),
    );
    // business 0.6, technology 0.2
    assert_eq!(result.category, Category::Business);
    assert!((result.confidence - 0.75).abs() < 1e-12);
}

#[test]
fn single_matching_category_has_full_confidence() {
    let scorer = CategoryScorer::new(KeywordTable::seeded());
    let result = scorer.get_category_confidence("", &FixedWeights::new(&[("nasdaq", 0.4)]));
    assert_eq!(result.category, Category::Business);
    assert!((result.confidence - 1.0).abs() < 1e-12);
}

#[test]
fn tie_break_is_deterministic_over_many_runs() {
    let weights = FixedWeights::new(&[("final", 0.25), ("live", 0.5)]);
    for _ in 0..1000 {
        let scorer = scorer(vec![
            (Category::Sports, vec!["final", "live"]),
            (Category::Technology, vec!["live", "final"]),
        ]);
        let result = scorer.get_category_confidence("", &weights);
        assert_eq!(result.category, Category::Sports);
    }
}

#[test]
fn tie_between_all_four_goes_to_business() {
    let scorer = scorer(
        Category::SCORED
            .into_iter()
            .map(|c| (c, vec!["common"]))
            .collect(),
    );
    let result = scorer.get_category_confidence("", &FixedWeights::new(&[("common", 1.0)]));
    assert_eq!(result.category, Category::Business);
    assert!((result.confidence - 0.25).abs() < 1e-12);
}

#[test]
fn category_scores_are_in_canonical_order() {
    let scorer = CategoryScorer::new(KeywordTable::seeded());
    let scores = scorer.category_scores("", &FixedWeights::new(&[]));
    let order: Vec<Category> = scores.scores.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, Category::SCORED.to_vec());
}

#[test]
fn resolve_matches_scorer_result() {
    let scores = CategoryScores {
        scores: vec![
            (Category::Business, 0.1),
            (Category::Entertainment, 0.4),
            (Category::Sports, 0.0),
            (Category::Technology, 0.5),
        ],
    };
    let result = scores.resolve();
    assert_eq!(result.category, Category::Technology);
    assert!((result.confidence - 0.5).abs() < 1e-12);
}

// ============================================================
// Keyword updates on the scorer
// ============================================================

#[test]
fn update_does_not_duplicate_existing_keywords() {
    let mut scorer = CategoryScorer::new(KeywordTable::seeded());
    let before = scorer.keywords(Category::Sports);
    let added = scorer.update_category_keywords(Category::Sports, &["football", "FOOTBALL", " football "]);
    assert_eq!(added, 0);
    assert_eq!(scorer.keywords(Category::Sports), before);
}

#[test]
fn updated_keyword_is_scored() {
    let mut scorer = CategoryScorer::new(KeywordTable::seeded());
    let weights = FixedWeights::new(&[("quantum", 0.2)]);
    let before = scorer.category_scores("", &weights).get(Category::Technology);

    scorer.update_category_keywords(Category::Technology, &["quantum"]);
    let after = scorer.category_scores("", &weights).get(Category::Technology);

    assert!(after > before);
}
