//! Rendering for the `--output` formats.
//!
//! Command handlers decide *what* to show (table rows, detail strings,
//! identifiers); this module owns the format dispatch. The structured
//! formats (json, json-compact, yaml) serialize the domain value itself
//! rather than the display row, so scripted consumers get full field
//! names instead of table headings.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use parkdash_core::stats::OccupancyTier;

use crate::cli::{ColorMode, OutputFormat};

// ── Color ────────────────────────────────────────────────────────────

/// Whether ANSI color should be emitted. `auto` requires stdout to be a
/// terminal and honors `NO_COLOR`.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Occupancy tier badge, green/yellow/red when color is on.
pub fn tier_label(tier: OccupancyTier, color: bool) -> String {
    let text = match tier {
        OccupancyTier::High => "high",
        OccupancyTier::Medium => "medium",
        OccupancyTier::Low => "low",
    };
    if !color {
        return text.into();
    }
    match tier {
        OccupancyTier::High => text.green().to_string(),
        OccupancyTier::Medium => text.yellow().to_string(),
        OccupancyTier::Low => text.red().to_string(),
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────

/// Render a collection: one `Tabled` row per item for `table`, one
/// identifier per line for `plain`, serde for the structured formats.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
        structured => serialize(structured, data),
    }
}

/// Render one item. `table` uses the caller's detail formatter (single
/// entities are shown as a field list, not a one-row table); `plain`
/// emits just the identifier.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Plain => id_fn(data),
        structured => serialize(structured, data),
    }
}

/// Write to stdout unless `--quiet` suppressed it. Broken pipes are not
/// an error for a CLI, so the write result is dropped.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let _ = writeln!(io::stdout().lock(), "{output}");
}

// ── Renderers ────────────────────────────────────────────────────────

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Serde-backed formats. Only reached for json/json-compact/yaml; the
/// other formats are handled at the dispatch sites.
fn serialize<T: serde::Serialize + ?Sized>(format: &OutputFormat, data: &T) -> String {
    let rendered = match format {
        OutputFormat::JsonCompact => serde_json::to_string(data),
        OutputFormat::Yaml => return serde_yaml::to_string(data).expect("value serializes to YAML"),
        _ => serde_json::to_string_pretty(data),
    };
    rendered.expect("value serializes to JSON")
}
