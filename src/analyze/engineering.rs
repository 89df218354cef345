use super::rules::{CategoryRules, Rule, RuleOutcome};
use crate::types::profile::RepositoryProfile;
use crate::types::scoring::{Category, Weakness};

pub const ENGINEERING: CategoryRules = CategoryRules {
    category: Category::EngineeringStandards,
    hint: "Initialize a test suite and ensure version control excludes binaries.",
    rules: &[
        Rule {
            id: "tests",
            max_points: 10,
            evaluate: test_suite,
        },
        Rule {
            id: "ci",
            max_points: 5,
            evaluate: ci,
        },
        Rule {
            id: "gitignore",
            max_points: 5,
            evaluate: gitignore,
        },
    ],
};

fn test_suite(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.structure.has_tests {
        RuleOutcome::pass(10, "✅ Automated tests identified")
    } else {
        RuleOutcome::fail("❌ Testing framework not detected", Weakness::MissingTests)
    }
}

fn ci(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.structure.has_ci {
        RuleOutcome::pass(5, "✅ CI/CD configuration present")
    } else {
        RuleOutcome::note("⚠️ CI/CD pipeline not configured")
    }
}

fn gitignore(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.structure.has_gitignore {
        RuleOutcome::pass(5, "✅ .gitignore detected")
    } else {
        RuleOutcome::fail("❌ .gitignore file is missing", Weakness::MissingGitignore)
    }
}
