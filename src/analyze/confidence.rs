use crate::types::profile::RepositoryProfile;
use crate::types::report::{ConfidenceLevel, ConfidenceResult};

struct ConfidenceRule {
    applies: fn(&RepositoryProfile) -> bool,
    result: ConfidenceResult,
}

/// Evaluated top-down; the first matching rule decides.
const CONFIDENCE_RULES: [ConfidenceRule; 3] = [
    ConfidenceRule {
        applies: too_little_data,
        result: ConfidenceResult {
            level: ConfidenceLevel::Low,
            description:
                "Insufficient data: Repository has too few files or commits for reliable analysis.",
        },
    },
    ConfidenceRule {
        applies: missing_readme,
        result: ConfidenceResult {
            level: ConfidenceLevel::Medium,
            description: "Medium confidence: Missing documentation limits intent analysis.",
        },
    },
    ConfidenceRule {
        applies: compressed_activity,
        result: ConfidenceResult {
            level: ConfidenceLevel::Medium,
            description:
                "Medium confidence: Activity compressed into single day reduces behavioral insights.",
        },
    },
];

const SUFFICIENT: ConfidenceResult = ConfidenceResult {
    level: ConfidenceLevel::High,
    description: "Sufficient data points across history and structure.",
};

fn too_little_data(profile: &RepositoryProfile) -> bool {
    profile.activity.analyzed_commit_count < 3 || profile.structure.file_count < 3
}

fn missing_readme(profile: &RepositoryProfile) -> bool {
    !profile.structure.has_readme
}

fn compressed_activity(profile: &RepositoryProfile) -> bool {
    profile.activity.unique_active_days < 2 && profile.activity.analyzed_commit_count > 5
}

pub fn evaluate_confidence(profile: &RepositoryProfile) -> ConfidenceResult {
    CONFIDENCE_RULES
        .iter()
        .find(|rule| (rule.applies)(profile))
        .map(|rule| rule.result)
        .unwrap_or(SUFFICIENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fixtures::strong_profile;

    #[test]
    fn few_commits_force_low_regardless_of_other_fields() {
        let mut profile = strong_profile();
        profile.activity.analyzed_commit_count = 2;
        assert_eq!(evaluate_confidence(&profile).level, ConfidenceLevel::Low);

        profile.structure.has_readme = false;
        profile.activity.unique_active_days = 1;
        assert_eq!(evaluate_confidence(&profile).level, ConfidenceLevel::Low);
    }

    #[test]
    fn few_files_force_low() {
        let mut profile = strong_profile();
        profile.structure.file_count = 2;
        assert_eq!(evaluate_confidence(&profile).level, ConfidenceLevel::Low);
    }

    #[test]
    fn missing_readme_outranks_compressed_activity() {
        let mut profile = strong_profile();
        profile.structure.has_readme = false;
        profile.activity.unique_active_days = 1;
        let result = evaluate_confidence(&profile);
        assert_eq!(result.level, ConfidenceLevel::Medium);
        assert!(result.description.contains("Missing documentation"));
    }

    #[test]
    fn compressed_activity_needs_more_than_five_commits() {
        let mut profile = strong_profile();
        profile.activity.unique_active_days = 1;
        profile.activity.analyzed_commit_count = 6;
        let result = evaluate_confidence(&profile);
        assert_eq!(result.level, ConfidenceLevel::Medium);
        assert!(result.description.contains("single day"));

        profile.activity.analyzed_commit_count = 5;
        assert_eq!(evaluate_confidence(&profile).level, ConfidenceLevel::High);
    }

    #[test]
    fn healthy_profile_is_high() {
        assert_eq!(evaluate_confidence(&strong_profile()), SUFFICIENT);
    }
}
