use super::confidence::evaluate_confidence;
use crate::types::profile::RepositoryProfile;
use crate::types::report::{HealthFlag, HealthFlags};
use chrono::{DateTime, Utc};

/// Diagnostics that sit beside the score. None of them can fail: absent data
/// leaves a flag false.
pub fn evaluate_flags(
    profile: &RepositoryProfile,
    now: DateTime<Utc>,
    inactive_after_days: i64,
) -> HealthFlags {
    let structure = &profile.structure;
    let activity = &profile.activity;

    let is_inactive = activity
        .latest_commit
        .map(|latest| now.signed_duration_since(latest).num_days() > inactive_after_days)
        .unwrap_or(false);

    HealthFlags {
        missing_readme: HealthFlag {
            value: !structure.has_readme,
            description: "Documentation entry point (README.md) is missing.".to_string(),
        },
        no_tests: HealthFlag {
            value: !structure.has_tests,
            description: "No test configuration or test files identified.".to_string(),
        },
        is_inactive: HealthFlag {
            value: is_inactive,
            description: format!(
                "No contribution activity recorded in the last {inactive_after_days} days."
            ),
        },
        is_dump: HealthFlag {
            value: activity.analyzed_commit_count <= 1,
            description: "Entire codebase appears committed in a single transaction.".to_string(),
        },
        is_overengineered: HealthFlag {
            value: structure.file_count < 10 && structure.folder_count > 4,
            description: "Directory nesting depth exceeds typical norms for project size.".to_string(),
        },
        is_empty: HealthFlag {
            value: structure.file_count <= 2,
            description: "Repository content is minimal or placeholder-only.".to_string(),
        },
        confidence_score: evaluate_confidence(profile),
    }
}
