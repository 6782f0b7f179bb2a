//! Output formatting for CLI

use clipdeck_core::{PlayerSnapshot, SurfaceCall, VideoEntry};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

/// Outcome of a scripted session
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub snapshot: PlayerSnapshot,
    pub calls: Vec<SurfaceCall>,
    pub rejected_steps: Vec<String>,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    id: u32,
    title: String,
    source: String,
    #[tabled(rename = "now")]
    active: &'static str,
}

fn entry_rows<'a>(entries: impl Iterator<Item = (usize, &'a VideoEntry, bool)>) -> Vec<EntryRow> {
    entries
        .map(|(index, entry, active)| EntryRow {
            index,
            id: entry.id.0,
            title: entry.title.clone(),
            source: entry.source.to_string(),
            active: if active { "▶" } else { "" },
        })
        .collect()
}

/// Render catalog entries
pub fn format_catalog(entries: &[VideoEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
        }
        OutputFormat::Table => {
            let rows = entry_rows(entries.iter().enumerate().map(|(i, e)| (i, e, false)));
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Text => entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("  {}. [{}] {} - {}", i + 1, e.id, e.title, e.source))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a session report
pub fn format_report(report: &RunReport, entries: &[VideoEntry], format: OutputFormat) -> String {
    let snapshot = &report.snapshot;

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => {
            let rows = entry_rows(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, e)| (i, e, i == snapshot.current_index)),
            );
            format!(
                "{}\n{}",
                state_line(snapshot),
                Table::new(rows).with(Style::rounded())
            )
        }
        OutputFormat::Text => {
            let mut out = vec![state_line(snapshot), String::new(), "Playlist:".to_string()];
            for row in &snapshot.items {
                let marker = if row.active { ">" } else { " " };
                out.push(format!("  {} {}. {}", marker, row.index + 1, row.title));
            }

            out.push(String::new());
            out.push("Surface calls:".to_string());
            out.extend(report.calls.iter().map(|call| format!("  {}", call)));

            if !report.rejected_steps.is_empty() {
                out.push(String::new());
                out.push("Rejected steps:".to_string());
                out.extend(report.rejected_steps.iter().map(|s| format!("  {}", s)));
            }
            out.join("\n")
        }
    }
}

fn state_line(snapshot: &PlayerSnapshot) -> String {
    format!(
        "{} | track {} | volume {:.2} | speed {}x | fullscreen {}",
        if snapshot.is_playing { "playing" } else { "paused" },
        snapshot.current_index + 1,
        snapshot.volume,
        snapshot.speed,
        if snapshot.is_full_screen { "on" } else { "off" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Text);
    }
}
