use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use news_categorizer::analysis::text::extract_keywords;
use news_categorizer::categorizer::ArticleCategorizer;
use news_categorizer::config::Config;
use news_categorizer::models::Category;
use news_categorizer::output::terminal;

/// Inspect how news articles are categorized.
///
/// Runs the same classifier the ingestion pipeline links against, with the
/// built-in keyword lists plus any NEWSCAT_KEYWORDS_* extras from the
/// environment.
#[derive(Parser)]
#[command(name = "news-categorizer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one article
    Classify {
        #[command(flatten)]
        article: ArticleArgs,

        /// Print the result as JSON instead of colored text
        #[arg(long)]
        json: bool,

        /// Also show the raw score of every category
        #[arg(long)]
        explain: bool,
    },

    /// List the keyword table (all categories, or just one)
    Keywords {
        /// Category tag, e.g. sports
        category: Option<Category>,
    },

    /// Show TF-IDF weights and extracted keywords for a piece of text
    Terms {
        /// The text to analyze
        text: String,

        /// Minimum keyword length (defaults to NEWSCAT_MIN_KEYWORD_LENGTH or 3)
        #[arg(long)]
        min_length: Option<usize>,
    },
}

#[derive(Args)]
struct ArticleArgs {
    /// Article title
    #[arg(long)]
    title: Option<String>,

    /// Article description or summary
    #[arg(long)]
    description: Option<String>,

    /// Article body
    #[arg(long)]
    content: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("news_categorizer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let categorizer = ArticleCategorizer::new();
    config.apply(&categorizer);

    match cli.command {
        Commands::Classify {
            article,
            json,
            explain,
        } => {
            let title = article.title.as_deref();
            let description = article.description.as_deref();
            let content = article.content.as_deref();

            let result = categorizer.get_category_confidence(title, description, content);
            info!(category = %result.category, confidence = result.confidence, "Classified");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let headline = title.or(description).unwrap_or("(untitled article)");
                terminal::display_classification(headline, &result);
                if explain {
                    let scores = categorizer.category_scores(title, description, content);
                    terminal::display_scores(&scores);
                }
            }
        }

        Commands::Keywords { category } => {
            let mut snapshot = categorizer.keyword_snapshot();
            if let Some(wanted) = category {
                snapshot.retain(|c, _| *c == wanted);
                if snapshot.is_empty() {
                    println!("{wanted} has no keywords; it is the fallback category.");
                    return Ok(());
                }
            }
            terminal::display_keywords(&snapshot);
        }

        Commands::Terms { text, min_length } => {
            let min_length = min_length.unwrap_or(config.min_keyword_length);
            let weights = categorizer.term_weights(&text);
            let extracted = extract_keywords(&text, min_length);
            terminal::display_term_weights(&weights, &extracted);
        }
    }

    Ok(())
}
