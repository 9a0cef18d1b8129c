//! Scan report rendering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::application::use_cases::ScanReport;
use crate::domain::display_amount;

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole report.
    Json,
}

/// Render the report as a human-readable listing.
///
/// Amounts show at least two decimal places and are never rounded.
#[must_use]
pub fn render_text(report: &ScanReport) -> String {
    let current = report.constraints.current_price();
    let mut out = String::new();

    for r in &report.evaluation.results {
        let _ = writeln!(
            out,
            "Call: {} Put: {}",
            display_amount(r.call_strike),
            display_amount(r.put_strike)
        );
        let _ = writeln!(out, "Cost: {}", display_amount(r.cost));
        let _ = writeln!(
            out,
            "ITM Boundary: Low: {} High: {}",
            r.floor_level(current),
            r.ceiling_level(current)
        );
        let _ = writeln!(out, "Max Loss: {}", display_amount(r.max_loss));
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "found {} possible contracts that fit the criteria",
        report.evaluation.match_count
    );
    out
}

/// Render the report as pretty JSON.
pub fn render_json(report: &ScanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Render the report in `format`.
pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}
