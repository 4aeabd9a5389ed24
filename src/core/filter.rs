//! Log filtering for the dashboard views.
//!
//! A pure, allocation-per-call filter over the log fixtures: free-text
//! search is a case-insensitive substring match across the textual fields,
//! the level filter is exact equality with an "all" sentinel, and the two
//! combine with logical AND. Input order is always preserved.

use serde::Serialize;

use crate::core::fixtures::{LogEntry, LogLevel};

/// Level selector for log filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    /// Sentinel that bypasses the level check
    All,
    /// Only entries with exactly this level
    Exact(LogLevel),
    /// An unrecognised selector; matches nothing rather than erroring
    Unmatched,
}

impl LevelFilter {
    /// Parse a query-string selector ("all", "ERROR", "WARN", "INFO").
    pub fn parse(s: &str) -> Self {
        match s {
            "all" | "" => LevelFilter::All,
            "ERROR" => LevelFilter::Exact(LogLevel::Error),
            "WARN" => LevelFilter::Exact(LogLevel::Warn),
            "INFO" => LevelFilter::Exact(LogLevel::Info),
            _ => LevelFilter::Unmatched,
        }
    }

    fn matches(&self, level: LogLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Exact(wanted) => *wanted == level,
            LevelFilter::Unmatched => false,
        }
    }
}

/// Per-level entry counts for the log statistics cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelTally {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

/// Count entries per level.
pub fn level_tally(entries: &[LogEntry]) -> LevelTally {
    let mut tally = LevelTally::default();
    for entry in entries {
        match entry.level {
            LogLevel::Error => tally.errors += 1,
            LogLevel::Warn => tally.warnings += 1,
            LogLevel::Info => tally.infos += 1,
        }
    }
    tally
}

/// Narrow `entries` to those matching `search` and `level`.
///
/// The search term is matched case-insensitively against source, event,
/// action and details; an empty term matches everything. The input is never
/// mutated and relative order is preserved.
pub fn filter_logs(entries: &[LogEntry], search: &str, level: LevelFilter) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|e| level.matches(e.level))
        .filter(|e| matches_search(e, search))
        .cloned()
        .collect()
}

fn matches_search(entry: &LogEntry, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    [&entry.source, &entry.event, &entry.action, &entry.details]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::Fixtures;
    use chrono::Utc;

    fn entries() -> Vec<LogEntry> {
        Fixtures::seeded_at(Utc::now()).log_entries
    }

    #[test]
    fn empty_search_and_all_levels_is_identity() {
        let entries = entries();
        let filtered = filter_logs(&entries, "", LevelFilter::All);
        assert_eq!(filtered, entries);
    }

    #[test]
    fn level_filter_keeps_only_matching_entries_in_order() {
        let entries = entries();
        let filtered = filter_logs(&entries, "", LevelFilter::parse("ERROR"));

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| e.level == LogLevel::Error));
        // Relative order of the three ERROR fixtures is preserved
        assert_eq!(filtered[0].event, "DDoS Attack");
        assert_eq!(filtered[1].event, "Malware Detection");
        assert_eq!(filtered[2].event, "SQL Injection");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let entries = entries();

        let by_source = filter_logs(&entries, "203.45", LevelFilter::All);
        assert_eq!(by_source.len(), 1);

        let by_event = filter_logs(&entries, "sql injection", LevelFilter::All);
        assert_eq!(by_event.len(), 1);

        let by_action = filter_logs(&entries, "rate_limited", LevelFilter::All);
        assert_eq!(by_action.len(), 1);

        let by_details = filter_logs(&entries, "AUTOMATIC BLOCKING", LevelFilter::All);
        assert_eq!(by_details.len(), 1);
    }

    #[test]
    fn search_and_level_combine_with_and() {
        let entries = entries();
        let filtered = filter_logs(&entries, "brute", LevelFilter::parse("WARN"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].event, "Brute Force");

        // Same search under a level with no matching entries yields nothing
        assert!(filter_logs(&entries, "brute", LevelFilter::parse("ERROR")).is_empty());
    }

    #[test]
    fn nonexistent_search_yields_empty_not_error() {
        let entries = entries();
        let filtered = filter_logs(&entries, "nonexistent-ip", LevelFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn unknown_level_selector_matches_nothing() {
        let entries = entries();
        assert!(filter_logs(&entries, "", LevelFilter::parse("DEBUG")).is_empty());
    }

    #[test]
    fn tally_counts_per_level() {
        let tally = level_tally(&entries());
        assert_eq!(
            tally,
            LevelTally {
                errors: 3,
                warnings: 3,
                infos: 2
            }
        );
    }
}
