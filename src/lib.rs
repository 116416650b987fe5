// news-categorizer: keyword-weighted TF-IDF topic classification for news articles
//
// This is the library root. Modules run leaves first: text analysis, then
// category scoring, then the categorizer that ties them together.

pub mod analysis;
pub mod categorizer;
pub mod config;
pub mod models;
pub mod output;
pub mod scoring;

pub use categorizer::ArticleCategorizer;
pub use models::{Category, ClassificationResult};
