use super::rules::{CategoryRules, Rule, RuleOutcome};
use crate::types::profile::RepositoryProfile;
use crate::types::scoring::{Category, Weakness};

pub const ORGANIZATION: CategoryRules = CategoryRules {
    category: Category::CodeOrganization,
    hint: "Refactor code into logical subdirectories (e.g., /src, /components) to improve modularity.",
    rules: &[
        Rule {
            id: "standard_folders",
            max_points: 5,
            evaluate: standard_folders,
        },
        Rule {
            id: "root_distribution",
            max_points: 5,
            evaluate: root_distribution,
        },
        Rule {
            id: "folder_structure",
            max_points: 5,
            evaluate: folder_structure,
        },
        Rule {
            id: "depth_range",
            max_points: 5,
            evaluate: depth_range,
        },
    ],
};

const MIN_FILES_FOR_RATIO: usize = 3;
const MAX_ROOT_RATIO: f64 = 0.5;

fn standard_folders(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.structure.standard_folders.is_empty() {
        RuleOutcome::fail(
            "❌ Standard architecture folders (src, app, utils) not detected",
            Weakness::MissingStandardFolders,
        )
    } else {
        RuleOutcome::pass(5, "✅ Detected standard folders (src/app/utils)")
    }
}

fn root_distribution(profile: &RepositoryProfile) -> RuleOutcome {
    let files = profile.structure.file_count;
    if files <= MIN_FILES_FOR_RATIO {
        return RuleOutcome::silent();
    }
    let ratio = profile.structure.root_file_count as f64 / files as f64;
    if ratio < MAX_ROOT_RATIO {
        RuleOutcome::pass(5, "✅ Modular file distribution")
    } else {
        RuleOutcome::fail(
            "❌ High file concentration in root directory",
            Weakness::RootFileConcentration,
        )
    }
}

fn folder_structure(profile: &RepositoryProfile) -> RuleOutcome {
    if profile.structure.folder_count > 2 {
        RuleOutcome::award(5)
    } else {
        RuleOutcome::note("⚠️ Directory structure appears flat")
    }
}

fn depth_range(profile: &RepositoryProfile) -> RuleOutcome {
    let depth = profile.structure.max_depth;
    if (2..=8).contains(&depth) {
        RuleOutcome::award(5)
    } else {
        RuleOutcome::note(format!(
            "⚠️ Directory depth ({depth} levels) falls outside standard range"
        ))
    }
}
