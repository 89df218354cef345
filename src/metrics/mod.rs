pub mod activity;
pub mod structure;

use crate::error::Result;
use crate::source::{RepoRef, RepositorySource};
use crate::types::config::SourceSettings;
use crate::types::profile::{DocumentationMetrics, RepositoryProfile, TechStackMetrics};
use crate::types::snapshot::{CommitRecord, TreeEntry};
use std::collections::BTreeMap;
use tracing::info;

/// Normalizes a raw snapshot. Missing inputs degrade to empty values; README
/// text is kept only when the tree actually contains a README.
pub fn build_profile(
    tree: &[TreeEntry],
    commits: &[CommitRecord],
    readme: Option<String>,
    languages: BTreeMap<String, u64>,
) -> RepositoryProfile {
    let structure = structure::detect_structure(tree);
    let activity = activity::summarize_commits(commits);
    let readme_content = readme
        .filter(|_| structure.has_readme)
        .unwrap_or_default();

    RepositoryProfile {
        structure,
        activity,
        documentation: DocumentationMetrics { readme_content },
        tech_stack: TechStackMetrics {
            languages: languages.keys().cloned().collect(),
            language_distribution: languages,
            detected_extensions: structure::detect_extensions(tree),
        },
    }
}

/// Pulls a snapshot from `source` and builds the profile. A missing
/// repository surfaces from the tree request before anything else is fetched.
pub fn extract(
    source: &dyn RepositorySource,
    repo: &RepoRef,
    settings: &SourceSettings,
) -> Result<RepositoryProfile> {
    let tree = source.tree(repo)?;
    let commits = source.commit_history(repo, 1, settings.commit_limit)?;

    let has_readme = structure::detect_structure(&tree).has_readme;
    let readme = if has_readme {
        source.readme_text(repo)?
    } else {
        None
    };
    let languages = source.language_bytes(repo)?;

    info!(
        %repo,
        entries = tree.len(),
        commits = commits.len(),
        languages = languages.len(),
        "repository snapshot collected"
    );
    Ok(build_profile(&tree, &commits, readme, languages))
}
