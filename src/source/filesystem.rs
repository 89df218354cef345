use crate::types::snapshot::TreeEntry;
use std::path::{Component, Path};
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: [&str; 1] = [".git"];

/// Recursive listing of `root` in the shape of a git tree: relative paths
/// joined with `/`, files and directories both included, `.git` excluded.
pub fn list_entries(root: &Path) -> Vec<TreeEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry))
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let relative = relative_path(root, entry.path())?;
            if entry.file_type().is_dir() {
                Some(TreeEntry::directory(relative))
            } else if entry.file_type().is_file() {
                Some(TreeEntry::file(relative))
            } else {
                None
            }
        })
        .collect()
}

pub fn read_to_string_if_exists(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

pub fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
