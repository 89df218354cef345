use super::rules::{CategoryRules, Rule, RuleOutcome};
use crate::types::profile::RepositoryProfile;
use crate::types::scoring::Category;

pub const TECH_STACK: CategoryRules = CategoryRules {
    category: Category::TechStack,
    hint: "Demonstrate complexity through diverse tooling or asset management.",
    rules: &[
        Rule {
            id: "languages",
            max_points: 10,
            evaluate: languages,
        },
        Rule {
            id: "asset_variety",
            max_points: 10,
            evaluate: asset_variety,
        },
    ],
};

fn languages(profile: &RepositoryProfile) -> RuleOutcome {
    match profile.tech_stack.languages.len() {
        0 => RuleOutcome::silent(),
        1 => RuleOutcome::pass(5, "✅ Single language architecture"),
        count => RuleOutcome::pass(10, format!("✅ Multi-language architecture ({count})")),
    }
}

// Repositories with three or fewer extensions still earn the base points.
fn asset_variety(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.tech_stack.detected_extensions.len() > 3 {
        RuleOutcome::pass(10, "✅ Varied asset types detected")
    } else {
        RuleOutcome::award(5)
    }
}
