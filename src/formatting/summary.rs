use std::collections::BTreeSet;
use std::fmt::Write;

use colored::*;

use crate::config::{LabelColorTable, RepoRef};
use crate::constants::SUMMARY_RULE_WIDTH;
use crate::models::IssueRecord;
use crate::provision::RunSummary;

pub fn print_header(repo: &RepoRef, total: usize) {
    println!("{} {}\n", "🚀".bold(), format!("Starting GitHub issues creation for {}", repo.name).bold());
    println!("{}: {}", "Repository".bold(), repo.to_string().bright_blue());
    println!("Total issues to create: {}\n", total);
}

pub fn print_step(index: usize, title: &str) {
    println!("{} {}", format!("Step {}:", index).bold(), title);
}

/// Closing block: counts, then where to look at the result
pub fn format_summary(summary: &RunSummary, repo: &RepoRef) -> String {
    let rule = "=".repeat(SUMMARY_RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "📊 Summary:");
    if summary.labels.total() > 0 {
        let _ = writeln!(
            out,
            "  Labels: {} existing, {} created",
            summary.labels.existing, summary.labels.created
        );
        if !summary.labels.unresolved.is_empty() {
            let _ = writeln!(
                out,
                "  {} Unresolved labels: {}",
                "✗".red(),
                summary.labels.unresolved.join(", ")
            );
        }
    }
    let _ = writeln!(
        out,
        "  {} Successfully created: {} issues",
        "✓".green(),
        summary.issues.succeeded
    );
    if summary.issues.failed > 0 {
        let _ = writeln!(out, "  {} Failed: {} issues", "✗".red(), summary.issues.failed);
    }
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "\n✨ Done! Check your issues at:");
    let _ = writeln!(out, "   {}\n", repo.issues_url().bright_black());

    out
}

/// What a run would do, without touching the remote
pub fn format_plan(
    records: &[IssueRecord],
    labels: &BTreeSet<String>,
    colors: &LabelColorTable,
    repo: &RepoRef,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Dry run for {} (no requests will be sent)\n", repo);
    let _ = writeln!(out, "Labels ({}):", labels.len());
    for label in labels {
        let marker = if colors.is_mapped(label) { "" } else { " (default)" };
        let _ = writeln!(out, "  {} #{}{}", label, colors.color_for(label), marker.dimmed());
    }

    let _ = writeln!(out, "\nIssues ({}):", records.len());
    for record in records {
        let tags = if record.labels.is_empty() {
            String::new()
        } else {
            format!(" [{}]", record.labels.join(", "))
        };
        let _ = writeln!(out, "  {}. {}{}", record.number, record.title, tags.bright_black());
    }

    out
}
