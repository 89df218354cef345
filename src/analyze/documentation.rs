use super::rules::{CategoryRules, Rule, RuleOutcome};
use crate::types::profile::RepositoryProfile;
use crate::types::scoring::{Category, Weakness};

pub const DOCUMENTATION: CategoryRules = CategoryRules {
    category: Category::Documentation,
    hint: "Expand documentation to include setup steps and usage examples.",
    rules: &[
        Rule {
            id: "readme_present",
            max_points: 5,
            evaluate: readme_present,
        },
        Rule {
            id: "readme_sections",
            max_points: 10,
            evaluate: readme_sections,
        },
        Rule {
            id: "readme_length",
            max_points: 5,
            evaluate: readme_length,
        },
    ],
};

pub const REQUIRED_SECTIONS: [&str; 4] = ["usage", "install", "setup", "getting started"];

const MIN_README_CHARS: usize = 200;

/// Number of required section keywords appearing anywhere in the text.
pub fn sections_found(readme: &str) -> usize {
    let lower = readme.to_lowercase();
    REQUIRED_SECTIONS
        .iter()
        .filter(|section| lower.contains(*section))
        .count()
}

fn readme_present(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.structure.has_readme {
        RuleOutcome::pass(5, "✅ README.md is present")
    } else {
        RuleOutcome::fail("❌ README.md file is absent", Weakness::MissingReadme)
    }
}

fn readme_sections(profile: &RepositoryProfile) -> RuleOutcome {
    match sections_found(&profile.documentation.readme_content) {
        0 if profile.structure.has_readme => RuleOutcome::fail(
            "❌ Documentation omits 'Usage' or 'Installation' steps",
            Weakness::ReadmeMissingUsage,
        ),
        0 => RuleOutcome::silent(),
        1 => RuleOutcome::pass(5, "⚠️ Documentation incomplete (missing sections)"),
        _ => RuleOutcome::pass(10, "✅ 'Installation/Usage' sections identified"),
    }
}

fn readme_length(profile: &RepositoryProfile) -> RuleOutcome {
    let length = profile
        .documentation
        .readme_content
        .to_lowercase()
        .chars()
        .count();
    if length > MIN_README_CHARS {
        RuleOutcome::award(5)
    } else {
        RuleOutcome::note("⚠️ Documentation content is brief")
    }
}
