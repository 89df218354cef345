use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[serde(alias = "blob")]
    File,
    #[serde(alias = "tree")]
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    /// Last `/`-separated segment of the path.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Raw commit as delivered by a source. The timestamp stays unparsed so that
/// malformed values can be skipped by the extractor instead of the source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub author_timestamp: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl CommitRecord {
    pub fn new(author_timestamp: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            author_timestamp: author_timestamp.map(str::to_string),
            message: message.into(),
        }
    }
}

/// On-disk snapshot format read by the snapshot source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, u64>,
}
