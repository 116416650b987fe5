use std::collections::BTreeMap;
use std::env;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::text::DEFAULT_MIN_KEYWORD_LENGTH;
use crate::categorizer::ArticleCategorizer;
use crate::models::Category;

/// Configuration loaded from environment variables.
///
/// Nothing here is required. The .env file is loaded by the binary at
/// startup via dotenvy; library callers set the variables however they like.
#[derive(Debug, Clone)]
pub struct Config {
    /// Extra keywords per category, from NEWSCAT_KEYWORDS_<CATEGORY>
    /// (comma-separated). Applied on top of the built-in lists.
    pub extra_keywords: BTreeMap<Category, Vec<String>>,
    /// Minimum token length for keyword extraction (NEWSCAT_MIN_KEYWORD_LENGTH).
    pub min_keyword_length: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let mut extra_keywords = BTreeMap::new();
        for category in Category::SCORED {
            let var = keywords_var(category);
            if let Ok(raw) = env::var(&var) {
                let keywords = parse_keyword_list(&raw);
                if !keywords.is_empty() {
                    extra_keywords.insert(category, keywords);
                }
            }
        }

        let min_keyword_length = match env::var("NEWSCAT_MIN_KEYWORD_LENGTH") {
            Ok(raw) => parse_min_length(&raw)?,
            Err(_) => DEFAULT_MIN_KEYWORD_LENGTH,
        };

        Ok(Self {
            extra_keywords,
            min_keyword_length,
        })
    }

    /// Push the configured extra keywords into a categorizer, one update per
    /// category. Returns the number of keywords that were new.
    pub fn apply(&self, categorizer: &ArticleCategorizer) -> usize {
        let mut added = 0;
        for (category, keywords) in &self.extra_keywords {
            added += categorizer.update_category_keywords(*category, keywords);
        }
        if added > 0 {
            info!(added, "Applied configured keywords");
        }
        added
    }
}

/// The environment variable holding extra keywords for a category,
/// e.g. NEWSCAT_KEYWORDS_SPORTS.
pub fn keywords_var(category: Category) -> String {
    format!("NEWSCAT_KEYWORDS_{}", category.as_str().to_uppercase())
}

/// Split a comma-separated list, dropping blank entries.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_min_length(raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("NEWSCAT_MIN_KEYWORD_LENGTH must be a positive integer, got '{raw}'"))?;
    if value == 0 {
        anyhow::bail!("NEWSCAT_MIN_KEYWORD_LENGTH must be at least 1");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_var_names() {
        assert_eq!(keywords_var(Category::Business), "NEWSCAT_KEYWORDS_BUSINESS");
        assert_eq!(keywords_var(Category::Technology), "NEWSCAT_KEYWORDS_TECHNOLOGY");
    }

    #[test]
    fn test_parse_keyword_list_drops_blanks() {
        assert_eq!(
            parse_keyword_list(" cricket, ,rugby ,,f1 "),
            vec!["cricket", "rugby", "f1"]
        );
        assert!(parse_keyword_list("").is_empty());
    }

    #[test]
    fn test_parse_min_length() {
        assert_eq!(parse_min_length(" 4 ").unwrap(), 4);
        assert!(parse_min_length("0").is_err());
        assert!(parse_min_length("three").is_err());
    }

    #[test]
    fn test_apply_extends_categorizer() {
        let config = Config {
            extra_keywords: BTreeMap::from([(
                Category::Sports,
                vec!["cricket".to_string(), "stadium".to_string()],
            )]),
            min_keyword_length: DEFAULT_MIN_KEYWORD_LENGTH,
        };
        let categorizer = ArticleCategorizer::new();

        assert_eq!(config.apply(&categorizer), 1);
        assert_eq!(categorizer.document_frequency("cricket"), Some(1));
        assert_eq!(categorizer.total_documents(), 5);
    }
}
