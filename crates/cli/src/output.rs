//! Terminal rendering of suggestion items.

use colored::{Color, Colorize};
use dtime_core::{CatalogItem, ItemCategory, ShapeInfo};

/// How items are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned, colored table.
    Pretty,
    /// Markup tokens only, one per line.
    Raw,
    /// JSON array.
    Json,
}

/// Render items for stdout. Error items render the same way in every mode
/// except JSON, so callers can print them to stderr instead.
pub fn render_items(items: &[&CatalogItem], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".into()),
        OutputMode::Raw => items
            .iter()
            .filter(|item| item.category == ItemCategory::Result)
            .map(|item| item.target.clone())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Pretty => {
            let label_width = items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
            let preview_width = items
                .iter()
                .map(|i| i.short_desc.chars().count())
                .max()
                .unwrap_or(0);

            items
                .iter()
                .filter(|item| item.category == ItemCategory::Result)
                .map(|item| {
                    format!(
                        "  {}  {}  {}",
                        pad(&item.label, label_width).color(Color::Blue),
                        pad(&item.short_desc, preview_width),
                        item.target.color(Color::Green).bold()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// One-line description of an error item, for stderr.
pub fn render_error(item: &CatalogItem) -> String {
    format!("{}: {}", item.label.red().bold(), item.short_desc)
}

/// Listing for `--shapes`.
pub fn render_shapes(infos: &[ShapeInfo]) -> String {
    let mut out = String::from("Recognised inputs (tried in this order):\n");
    for info in infos {
        out.push_str(&format!(
            "\n  {} ({})\n    {}\n",
            info.name.bold(),
            info.id.dimmed(),
            info.description
        ));
        for example in info.examples {
            out.push_str(&format!("      dtime {}\n", example));
        }
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
