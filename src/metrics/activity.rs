use crate::types::profile::ActivityMetrics;
use crate::types::snapshot::CommitRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::BTreeSet;
use tracing::debug;

pub const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn parse_commit_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, COMMIT_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Every commit counts toward the total; only parsable timestamps feed the
/// day-based metrics.
pub fn summarize_commits(commits: &[CommitRecord]) -> ActivityMetrics {
    let mut timestamps = Vec::with_capacity(commits.len());
    for commit in commits {
        let Some(raw) = commit.author_timestamp.as_deref() else {
            continue;
        };
        match parse_commit_timestamp(raw) {
            Some(timestamp) => timestamps.push(timestamp),
            None => debug!(timestamp = raw, "skipping unparsable commit timestamp"),
        }
    }

    let active_days: BTreeSet<_> = timestamps.iter().map(|ts| ts.date_naive()).collect();

    ActivityMetrics {
        analyzed_commit_count: commits.len(),
        unique_active_days: active_days.len(),
        commit_messages: commits.iter().map(|commit| commit.message.clone()).collect(),
        latest_commit: timestamps.first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_the_fixed_utc_layout_only() {
        let parsed = parse_commit_timestamp("2024-02-29T23:59:59Z").expect("should parse");
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()
        );
        assert!(parse_commit_timestamp("2024-02-29T23:59:59+02:00").is_none());
        assert!(parse_commit_timestamp("yesterday").is_none());
    }

    #[test]
    fn malformed_timestamps_count_but_do_not_add_days() {
        let commits = vec![
            CommitRecord::new(Some("2024-03-02T10:00:00Z"), "feat: b"),
            CommitRecord::new(Some("not a date"), "fix: a"),
            CommitRecord::new(None, "chore: c"),
            CommitRecord::new(Some("2024-03-02T08:00:00Z"), "docs: d"),
            CommitRecord::new(Some("2024-03-01T08:00:00Z"), "docs: e"),
        ];
        let activity = summarize_commits(&commits);
        assert_eq!(activity.analyzed_commit_count, 5);
        assert_eq!(activity.unique_active_days, 2);
        assert_eq!(activity.commit_messages.len(), 5);
        assert_eq!(activity.commit_messages[1], "fix: a");
    }

    #[test]
    fn latest_commit_is_the_head_of_the_list_not_the_maximum() {
        let commits = vec![
            CommitRecord::new(Some("2023-01-01T00:00:00Z"), "old first"),
            CommitRecord::new(Some("2024-06-01T00:00:00Z"), "newer second"),
        ];
        let activity = summarize_commits(&commits);
        assert_eq!(
            activity.latest_commit,
            Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn empty_history_has_no_latest_commit() {
        let activity = summarize_commits(&[]);
        assert_eq!(activity.analyzed_commit_count, 0);
        assert_eq!(activity.unique_active_days, 0);
        assert!(activity.latest_commit.is_none());
    }
}
