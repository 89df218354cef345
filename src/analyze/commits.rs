use super::rules::{CategoryRules, Rule, RuleOutcome};
use crate::types::profile::RepositoryProfile;
use crate::types::scoring::{Category, Weakness};

pub const COMMIT_HYGIENE: CategoryRules = CategoryRules {
    category: Category::CommitHygiene,
    hint: "Adhere to conventional commits (feat: ...) and commit incrementally.",
    rules: &[
        Rule {
            id: "semantic_prefixes",
            max_points: 5,
            evaluate: semantic_prefixes,
        },
        Rule {
            id: "commit_volume",
            max_points: 5,
            evaluate: commit_volume,
        },
        Rule {
            id: "active_days",
            max_points: 5,
            evaluate: active_days,
        },
        Rule {
            id: "descriptive_messages",
            max_points: 5,
            evaluate: descriptive_messages,
        },
    ],
};

pub const SEMANTIC_PREFIXES: [&str; 7] = ["feat", "fix", "chore", "docs", "refactor", "style", "test"];
pub const GENERIC_MESSAGES: [&str; 5] = ["update", "file", "upload", "changes", "fix"];

const MIN_SEMANTIC_RATIO: f64 = 0.2;

pub fn is_semantic(message: &str) -> bool {
    let lower = message.to_lowercase();
    SEMANTIC_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

pub fn is_generic(message: &str) -> bool {
    let normalized = message.to_lowercase();
    GENERIC_MESSAGES.contains(&normalized.trim())
}

fn semantic_prefixes(profile: &RepositoryProfile) -> RuleOutcome {
    let messages = &profile.activity.commit_messages;
    let semantic = messages.iter().filter(|message| is_semantic(message)).count();
    if !messages.is_empty() && semantic as f64 / messages.len() as f64 > MIN_SEMANTIC_RATIO {
        RuleOutcome::pass(5, "✅ Semantic prefixes detected")
    } else {
        RuleOutcome::fail(
            "❌ Commit messages do not follow semantic conventions",
            Weakness::NonSemanticCommits,
        )
    }
}

fn commit_volume(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.activity.analyzed_commit_count > 10 {
        RuleOutcome::pass(5, "✅ Sufficient commit volume")
    } else {
        RuleOutcome::silent()
    }
}

fn active_days(profile: &RepositoryProfile) -> RuleOutcome {
    let activity = &profile.activity;
    if activity.unique_active_days > 3 {
        RuleOutcome::pass(5, "✅ Consistent development activity")
    } else if activity.analyzed_commit_count > 5 && activity.unique_active_days == 1 {
        RuleOutcome::fail(
            "⚠️ Activity concentrated in single day",
            Weakness::ActivityConcentrated,
        )
    } else {
        RuleOutcome::silent()
    }
}

fn descriptive_messages(profile: &RepositoryProfile) -> RuleOutcome {
    let messages = &profile.activity.commit_messages;
    let generic = messages.iter().filter(|message| is_generic(message)).count();
    if generic > 0 {
        RuleOutcome::fail(
            format!("❌ Generic commit messages detected ({generic})"),
            Weakness::GenericCommitMessages,
        )
    } else if messages.len() > 5 {
        RuleOutcome::award(5)
    } else {
        RuleOutcome::silent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fixtures::strong_profile;

    fn run(id: &str, profile: &RepositoryProfile) -> RuleOutcome {
        let rule = COMMIT_HYGIENE.rule(id).expect("rule should exist");
        (rule.evaluate)(profile)
    }

    fn with_messages(messages: &[&str]) -> RepositoryProfile {
        let mut profile = strong_profile();
        profile.activity.commit_messages = messages.iter().map(|m| m.to_string()).collect();
        profile.activity.analyzed_commit_count = messages.len();
        profile
    }

    #[test]
    fn semantic_prefix_match_ignores_case() {
        assert!(is_semantic("Feat: add login"));
        assert!(is_semantic("fixup typo"));
        assert!(!is_semantic("add feature"));
    }

    #[test]
    fn semantic_ratio_must_exceed_one_fifth() {
        let profile = with_messages(&["feat: a", "b", "c", "d", "e"]);
        let outcome = run("semantic_prefixes", &profile);
        assert_eq!(outcome.weakness, Some(Weakness::NonSemanticCommits));

        let profile = with_messages(&["feat: a", "fix: b", "c", "d", "e"]);
        assert_eq!(run("semantic_prefixes", &profile).points, 5);
    }

    #[test]
    fn empty_history_fails_semantic_rule() {
        let profile = with_messages(&[]);
        let outcome = run("semantic_prefixes", &profile);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.weakness, Some(Weakness::NonSemanticCommits));
    }

    #[test]
    fn volume_requires_more_than_ten_commits() {
        let mut profile = strong_profile();
        profile.activity.analyzed_commit_count = 10;
        assert_eq!(run("commit_volume", &profile).points, 0);
        profile.activity.analyzed_commit_count = 11;
        assert_eq!(run("commit_volume", &profile).points, 5);
    }

    #[test]
    fn single_day_bursts_are_flagged() {
        let mut profile = strong_profile();
        profile.activity.analyzed_commit_count = 6;
        profile.activity.unique_active_days = 1;
        let outcome = run("active_days", &profile);
        assert_eq!(outcome.weakness, Some(Weakness::ActivityConcentrated));

        profile.activity.analyzed_commit_count = 5;
        assert_eq!(run("active_days", &profile), RuleOutcome::silent());

        profile.activity.unique_active_days = 4;
        assert_eq!(run("active_days", &profile).points, 5);
    }

    #[test]
    fn generic_messages_are_matched_exactly_after_trimming() {
        assert!(is_generic("  Update \n"));
        assert!(is_generic("FIX"));
        assert!(!is_generic("Update file"));
        assert!(!is_generic("fix: null check"));
    }

    #[test]
    fn generic_messages_cost_points_and_add_weakness() {
        let profile = with_messages(&["feat: a", "feat: b", "feat: c", "feat: d", "feat: e", "update"]);
        let outcome = run("descriptive_messages", &profile);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.weakness, Some(Weakness::GenericCommitMessages));
        assert_eq!(
            outcome.reason.as_deref(),
            Some("❌ Generic commit messages detected (1)")
        );
    }

    #[test]
    fn few_clean_messages_earn_nothing_without_weakness() {
        let profile = with_messages(&["feat: a", "feat: b"]);
        assert_eq!(run("descriptive_messages", &profile), RuleOutcome::silent());
    }
}
