//! Table formatter for the terminal.

use super::Formatter;
use anyhow::Result;
use better_import_rules::ReplacementSuggestion;
use colored::Colorize;

const HEADERS: [&str; 4] = ["Package", "Version", "Suggestion", "Source"];

pub struct HumanFormatter;

impl Formatter for HumanFormatter {
    fn format(&self, suggestions: &[ReplacementSuggestion]) -> Result<String> {
        Ok(format_table(suggestions))
    }
}

fn format_table(suggestions: &[ReplacementSuggestion]) -> String {
    if suggestions.is_empty() {
        return "✓ No replaceable dependencies found!".green().to_string();
    }

    let rows: Vec<[String; 4]> = suggestions
        .iter()
        .map(|s| {
            [
                s.package_name.clone(),
                s.current_version.clone(),
                s.suggestion.clone(),
                s.source.display().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w).bold().to_string())
        .collect();
    lines.push(header.join(" │ "));

    let separator: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(separator.join("─┼─"));

    for [package, version, suggestion, source] in &rows {
        let row = [
            pad(package, widths[0]).yellow().to_string(),
            pad(version, widths[1]).cyan().to_string(),
            pad(suggestion, widths[2]),
            pad(source, widths[3]).dimmed().to_string(),
        ];
        lines.push(row.join(" │ "));
    }

    lines.push(String::new());
    lines.push(
        format!(
            "Found {} package(s) with better alternatives",
            suggestions.len()
        )
        .yellow()
        .to_string(),
    );

    lines.join("\n")
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}
