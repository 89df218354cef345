use crate::types::profile::StructureMetrics;
use crate::types::snapshot::TreeEntry;
use std::collections::BTreeSet;

pub const STANDARD_FOLDERS: [&str; 9] = [
    "src",
    "app",
    "lib",
    "utils",
    "services",
    "components",
    "api",
    "routes",
    "models",
];

const CI_MARKERS: [&str; 2] = [".github", ".circleci"];

/// Depth counts path segments: `a/b/c.py` is 3 levels deep.
pub fn path_depth(path: &str) -> usize {
    path.matches('/').count() + 1
}

pub fn detect_structure(tree: &[TreeEntry]) -> StructureMetrics {
    let mut metrics = StructureMetrics::default();

    for entry in tree {
        let lower_path = entry.path.to_lowercase();
        metrics.max_depth = metrics.max_depth.max(path_depth(&entry.path));

        if CI_MARKERS.iter().any(|marker| lower_path.contains(marker)) {
            metrics.has_ci = true;
        }

        if entry.is_file() {
            metrics.file_count += 1;
            if !entry.path.contains('/') {
                metrics.root_file_count += 1;
            }
            if lower_path.ends_with("readme.md") {
                metrics.has_readme = true;
            }
            if lower_path.contains(".gitignore") {
                metrics.has_gitignore = true;
            }
        } else {
            metrics.folder_count += 1;
            let folder = entry.name().to_lowercase();
            if folder.contains("test") {
                metrics.has_tests = true;
            }
            if STANDARD_FOLDERS.contains(&folder.as_str()) {
                metrics.standard_folders.insert(folder);
            }
        }
    }

    metrics
}

/// Distinct lower-cased extensions of files whose name contains a dot.
pub fn detect_extensions(tree: &[TreeEntry]) -> BTreeSet<String> {
    tree.iter()
        .filter(|entry| entry.is_file())
        .filter_map(|entry| entry.name().rsplit_once('.'))
        .map(|(_, extension)| extension.to_lowercase())
        .collect()
}
