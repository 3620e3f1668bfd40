//! Rendering of benchmark results: a fixed-width text table or JSON lines.
use crate::benchmark::{RunReport, StrategySummary};
use crate::solver::{Outcome, Strategy};
use serde::Serialize;
use std::fmt::Write;

/// Text shown in place of numeric fields when a run did not reach the goal.
pub const NOT_FOUND: &str = "not found";
pub const TIMED_OUT: &str = "timed out";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Flat, serialisable view of a `RunReport`.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRow {
    pub instance: usize,
    pub strategy: Strategy,
    pub status: &'static str,
    pub moves: Option<usize>,
    pub visited: Option<usize>,
    pub elapsed_secs: f64,
    pub memory_delta_bytes: Option<i64>,
}

impl From<&RunReport> for ReportRow {
    fn from(report: &RunReport) -> Self {
        let status = match report.outcome {
            Outcome::Found { .. } => "found",
            Outcome::NotFound => "not_found",
            Outcome::TimedOut { .. } => "timed_out",
        };
        ReportRow {
            instance: report.instance,
            strategy: report.strategy,
            status,
            moves: report.outcome.moves(),
            visited: report.outcome.visited(),
            elapsed_secs: report.elapsed.as_secs_f64(),
            memory_delta_bytes: report.memory_delta,
        }
    }
}

/// Serialises each report as one JSON object per line.
pub fn to_json_lines(reports: &[RunReport]) -> serde_json::Result<String> {
    let mut out = String::new();
    for report in reports {
        out.push_str(&serde_json::to_string(&ReportRow::from(report))?);
        out.push('\n');
    }
    Ok(out)
}

fn format_memory(delta: Option<i64>) -> String {
    match delta {
        Some(bytes) => format!("{:.2} MB", bytes as f64 / BYTES_PER_MB),
        None => "n/a".to_string(),
    }
}

/// Renders one line per run: moves, visited states, time and memory delta.
///
/// Runs that did not reach the goal show `NOT_FOUND` (or `TIMED_OUT`) instead of
/// the moves and visited columns.
pub fn render_table(reports: &[RunReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<9} {:<8} {:>10} {:>10} {:>10} {:>10}",
        "Instance", "Strategy", "Moves", "Visited", "Time", "Memory"
    );
    for report in reports {
        let (moves, visited) = match &report.outcome {
            Outcome::Found { moves, visited, .. } => (moves.to_string(), visited.to_string()),
            Outcome::NotFound => (NOT_FOUND.to_string(), NOT_FOUND.to_string()),
            Outcome::TimedOut { visited } => (TIMED_OUT.to_string(), visited.to_string()),
        };
        let _ = writeln!(
            out,
            "{:<9} {:<8} {:>10} {:>10} {:>10} {:>10}",
            report.instance,
            report.strategy.label(),
            moves,
            visited,
            format!("{:.4}s", report.elapsed.as_secs_f64()),
            format_memory(report.memory_delta),
        );
    }
    out
}

/// Renders per-strategy aggregates, as printed after a benchmark run.
pub fn render_summary(summaries: &[StrategySummary]) -> String {
    let mut out = String::new();
    for s in summaries {
        let mean = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |x| format!("{:.2}", x));
        let _ = writeln!(
            out,
            "Strategy {:<8}: solved {}/{}, mean moves {}, mean visited {}, total time {:.4}s",
            s.strategy.label(),
            s.solved,
            s.runs,
            mean(s.mean_moves),
            mean(s.mean_visited),
            s.total_elapsed.as_secs_f64(),
        );
    }
    out
}
