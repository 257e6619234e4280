//! Display functions for command results

use super::formatters::{count_bar, percentage, pluralize};
use crate::commands::{CloudSummary, CountResult};
use colored::Colorize;
use std::io;
use std::path::Path;

/// Print a warning that the input was only partly read
pub fn print_read_warning(source_name: &str, error: &io::Error) {
    println!(
        "{}",
        format!("⚠ Error reading {source_name}: {error}; using the words read so far")
            .yellow()
            .bold()
    );
}

/// Print the result of generating a tag cloud
pub fn print_cloud_summary(summary: &CloudSummary, output: &Path) {
    if let Some(error) = &summary.read_error {
        print_read_warning(&summary.source_name, error);
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tag cloud: {}",
        summary.source_name.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "   Words read:       {}",
        pluralize(summary.total_words, "word", "words")
    );
    println!("   Distinct words:   {}", summary.distinct_words);
    println!(
        "   Words in cloud:   {}",
        summary.table.len().to_string().bright_cyan().bold()
    );
    if let (Some(min), Some(max)) = (summary.table.min_count(), summary.table.max_count()) {
        println!("   Count range:      {min} – {max}");
    }

    println!();
    println!(
        "{}",
        format!("✅ Wrote {}", output.display()).green().bold()
    );
}

/// Print the most frequent words of a count preview
pub fn print_count_result(result: &CountResult) {
    if let Some(error) = &result.read_error {
        print_read_warning(&result.source_name, error);
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TOP WORDS:".bright_cyan().bold(),
        result.source_name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} total, {} distinct\n",
        pluralize(result.total_words, "word", "words"),
        result.distinct_words
    );

    let max_count = result.top.max_count().unwrap_or(0);
    let width = result
        .top
        .entries()
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0);

    for (rank, entry) in result.top.entries().iter().enumerate() {
        println!(
            "   {:>3}. {:<width$} {} {:>6} ({:5.1}%)",
            (rank + 1).to_string().bright_black(),
            entry.word.bright_white().bold(),
            count_bar(entry.count, max_count, 30).green(),
            entry.count,
            percentage(entry.count, result.total_words),
        );
    }

    if result.top.is_empty() {
        println!("   {}", "(no words selected)".bright_black());
    }
}
