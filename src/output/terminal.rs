// Colored terminal output for classification results and keyword tables.
//
// main.rs hands results here; nothing in the library proper prints.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::models::{Category, CategoryScores, ClassificationResult};

/// Display a classification result with its confidence.
pub fn display_classification(headline: &str, result: &ClassificationResult) {
    println!(
        "\n{}",
        format!("=== {} ===", super::truncate_chars(headline, 60)).bold()
    );
    println!(
        "  Category:   {}",
        colorize_category(result.category)
    );
    println!(
        "  Confidence: {}",
        colorize_confidence(result.confidence)
    );
    println!();
}

/// Display raw per-category scores as a bar chart, widest bar = top score.
pub fn display_scores(scores: &CategoryScores) {
    let max = scores.max();
    let total = scores.total();
    let bar_width: usize = 20;

    println!("  {}", "Category scores:".dimmed());
    for (category, score) in &scores.scores {
        let filled = if max > 0.0 {
            ((score / max) * bar_width as f64).round() as usize
        } else {
            0
        };
        let empty = bar_width.saturating_sub(filled);
        let share = if total > 0.0 { score / total } else { 0.0 };

        println!(
            "    {:<14} [{}{}] {:.4} ({:.0}%)",
            category.as_str(),
            "=".repeat(filled),
            " ".repeat(empty),
            score,
            share * 100.0
        );
    }
    println!();
}

/// Display the keyword table, one category per block.
pub fn display_keywords(snapshot: &BTreeMap<Category, Vec<String>>) {
    for (category, keywords) in snapshot {
        println!(
            "\n{} ({} keywords)",
            colorize_category(*category),
            keywords.len()
        );
        println!("  {}", keywords.join(", ").dimmed());
    }
    println!();
}

/// Display term weights, skipping tokens that carry no weight.
pub fn display_term_weights(weights: &[(String, f64)], extracted: &[String]) {
    let weighted: Vec<&(String, f64)> = weights.iter().filter(|(_, w)| *w > 0.0).collect();

    if weighted.is_empty() {
        println!("No keyword terms found; every token has zero weight.");
    } else {
        println!("\n{}", "=== Weighted terms ===".bold());
        for (term, weight) in weighted {
            println!("  {:<24} {:.4}", term, weight);
        }
    }

    println!(
        "\n  {} {}",
        "Extracted keywords:".dimmed(),
        extracted.join(", ")
    );
    println!();
}

fn colorize_category(category: Category) -> colored::ColoredString {
    let tag = category.as_str();
    match category {
        Category::Business => tag.bright_blue().bold(),
        Category::Entertainment => tag.magenta().bold(),
        Category::Sports => tag.bright_green().bold(),
        Category::Technology => tag.cyan().bold(),
        Category::General => tag.dimmed(),
    }
}

fn colorize_confidence(confidence: f64) -> colored::ColoredString {
    let text = format!("{confidence:.2}");
    if confidence >= 0.7 {
        text.green()
    } else if confidence >= 0.4 {
        text.yellow()
    } else {
        text.red()
    }
}
