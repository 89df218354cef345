use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, Serialize)]
pub struct StructureMetrics {
    pub file_count: usize,
    pub folder_count: usize,
    pub root_file_count: usize,
    pub max_depth: usize,
    pub has_readme: bool,
    pub has_tests: bool,
    pub has_gitignore: bool,
    pub has_ci: bool,
    pub standard_folders: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityMetrics {
    pub analyzed_commit_count: usize,
    pub unique_active_days: usize,
    pub commit_messages: Vec<String>,
    /// Taken from the head of the history as delivered, not the maximum.
    pub latest_commit: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentationMetrics {
    pub readme_content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TechStackMetrics {
    pub languages: BTreeSet<String>,
    pub language_distribution: BTreeMap<String, u64>,
    pub detected_extensions: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoryProfile {
    pub structure: StructureMetrics,
    pub activity: ActivityMetrics,
    pub documentation: DocumentationMetrics,
    pub tech_stack: TechStackMetrics,
}
