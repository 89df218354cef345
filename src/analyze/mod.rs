pub mod commits;
pub mod compare;
pub mod confidence;
pub mod documentation;
pub mod engineering;
pub mod health;
pub mod organization;
pub mod rules;
pub mod simulation;
pub mod tech_stack;

use crate::types::config::MirrorConfig;
use crate::types::profile::RepositoryProfile;
use crate::types::report::ScoreReport;
use crate::types::scoring::{Breakdown, Level, ScoreCard, Weaknesses};
use chrono::{DateTime, Utc};
use rules::CategoryRules;

pub const CATEGORIES: [CategoryRules; 5] = [
    organization::ORGANIZATION,
    documentation::DOCUMENTATION,
    commits::COMMIT_HYGIENE,
    engineering::ENGINEERING,
    tech_stack::TECH_STACK,
];

pub fn score(profile: &RepositoryProfile) -> ScoreCard {
    let mut weaknesses = Weaknesses::new();
    let mut breakdown = Breakdown::new();
    for category in &CATEGORIES {
        let result = category.score(profile, &mut weaknesses);
        breakdown.insert(category.category, result);
    }

    let total_score = breakdown.values().map(|result| result.score).sum();
    ScoreCard {
        total_score,
        level: Level::from_score(total_score),
        breakdown,
        weaknesses,
    }
}

pub fn analyze(profile: &RepositoryProfile, config: &MirrorConfig) -> ScoreReport {
    analyze_at(profile, config, Utc::now())
}

pub fn analyze_at(
    profile: &RepositoryProfile,
    config: &MirrorConfig,
    now: DateTime<Utc>,
) -> ScoreReport {
    let card = score(profile);
    let flags = health::evaluate_flags(profile, now, config.inactive_after_days());
    let simulation = simulation::simulate(card.total_score, &card.weaknesses);

    ScoreReport {
        total_score: card.total_score,
        level: card.level,
        breakdown: card.breakdown,
        weaknesses: card.weaknesses,
        confidence: flags.confidence_score,
        flags,
        simulation,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::profile::RepositoryProfile;
    use chrono::{DateTime, TimeZone, Utc};

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// A single-file, single-commit repository with nothing else.
    pub fn minimal_profile() -> RepositoryProfile {
        let mut profile = RepositoryProfile::default();
        profile.structure.file_count = 1;
        profile.structure.root_file_count = 1;
        profile.structure.max_depth = 1;
        profile.activity.analyzed_commit_count = 1;
        profile.activity.unique_active_days = 1;
        profile.activity.commit_messages = vec!["initial commit".to_string()];
        profile.activity.latest_commit = Some(Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0).unwrap());
        profile
    }

    /// A well kept repository that satisfies every rule.
    pub fn strong_profile() -> RepositoryProfile {
        let mut profile = RepositoryProfile::default();
        let structure = &mut profile.structure;
        structure.file_count = 20;
        structure.root_file_count = 2;
        structure.folder_count = 5;
        structure.max_depth = 3;
        structure.has_readme = true;
        structure.has_tests = true;
        structure.has_ci = true;
        structure.has_gitignore = true;
        structure.standard_folders.insert("src".to_string());

        let mut readme = String::from("# Project\n\n## Install\n\npip install project\n\n## Usage\n\n");
        while readme.chars().count() < 250 {
            readme.push('x');
        }
        profile.documentation.readme_content = readme;

        profile.activity.analyzed_commit_count = 15;
        profile.activity.unique_active_days = 5;
        profile.activity.commit_messages = (0..15).map(|i| format!("feat: change {i}")).collect();
        profile.activity.latest_commit = Some(Utc.with_ymd_and_hms(2024, 12, 20, 12, 0, 0).unwrap());

        profile.tech_stack.languages = ["Python", "TypeScript"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        profile.tech_stack.detected_extensions = ["py", "ts", "json", "md"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        profile
    }
}
