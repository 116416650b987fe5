// Text analysis — tokenization and TF-IDF term weighting.

pub mod text;
pub mod tfidf;
pub mod traits;
