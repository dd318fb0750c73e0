use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{serde_as, DurationMilliSeconds};

use crate::simulation::SessionStats;

/// Machine-readable snapshot of a finished simulation session.
#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub total_attempts: u32,
    pub win_rate: f64,
    pub mean_attempts: f64,
    pub seed: Option<u64>,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "elapsed_ms")]
    pub elapsed: Duration,
    pub timestamp: DateTime<Utc>,
}

impl SessionReport {
    pub fn new(stats: &SessionStats, seed: Option<u64>, elapsed: Duration) -> Self {
        Self {
            rounds_played: stats.rounds_played,
            rounds_won: stats.rounds_won,
            total_attempts: stats.total_attempts,
            win_rate: stats.win_rate(),
            mean_attempts: stats.mean_attempts(),
            seed,
            elapsed,
            timestamp: Utc::now(),
        }
    }
}

/// Write the report as a single JSON line, or its debug form if serialization fails.
pub fn print_report_json<W: Write + ?Sized>(report: &SessionReport, out: &mut W) -> io::Result<()> {
    match serde_json::to_string(report) {
        Ok(js) => writeln!(out, "{}", js),
        Err(_) => writeln!(out, "{:?}", report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_fields() {
        let stats = SessionStats {
            rounds_played: 5,
            rounds_won: 5,
            total_attempts: 13,
        };
        let report = SessionReport::new(&stats, Some(42), Duration::from_millis(12));

        let mut buf = Vec::new();
        print_report_json(&report, &mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["rounds_played"], 5);
        assert_eq!(value["rounds_won"], 5);
        assert_eq!(value["total_attempts"], 13);
        assert_eq!(value["win_rate"], 100.0);
        assert_eq!(value["mean_attempts"], 2.6);
        assert_eq!(value["seed"], 42);
        assert_eq!(value["elapsed_ms"], 12);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_unseeded_report_has_null_seed() {
        let report = SessionReport::new(&SessionStats::default(), None, Duration::ZERO);
        let js = serde_json::to_string(&report).unwrap();
        assert!(js.contains("\"seed\":null"));
        assert!(js.contains("\"elapsed_ms\":0"));
    }
}
