use super::{RepoRef, RepositorySource};
use crate::error::{MirrorError, Result};
use crate::types::snapshot::{CommitRecord, RepositorySnapshot, TreeEntry};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Serves a previously captured snapshot from a JSON file.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
    snapshot: RepositorySnapshot,
}

impl SnapshotSource {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MirrorError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content).map_err(|e| {
            MirrorError::FetchFailed(format!("{}: invalid snapshot: {}", path.display(), e))
        })?;
        Ok(Self::from_snapshot(path, snapshot))
    }

    pub fn from_snapshot(path: &Path, snapshot: RepositorySnapshot) -> Self {
        Self {
            path: path.to_path_buf(),
            snapshot,
        }
    }

    /// Reference named by the snapshot, or the file stem when it names none.
    pub fn repo_ref(&self, branch: &str) -> Result<RepoRef> {
        match &self.snapshot.repository {
            Some(name) => RepoRef::parse(name, branch),
            None => {
                let name = self
                    .path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "snapshot".to_string());
                Ok(RepoRef::new("snapshot", name, branch))
            }
        }
    }
}

impl RepositorySource for SnapshotSource {
    fn tree(&self, _repo: &RepoRef) -> Result<Vec<TreeEntry>> {
        Ok(self.snapshot.tree.clone())
    }

    fn commit_history(
        &self,
        _repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CommitRecord>> {
        let skip = page.saturating_sub(1) as usize * per_page as usize;
        Ok(self
            .snapshot
            .commits
            .iter()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    fn readme_text(&self, _repo: &RepoRef) -> Result<Option<String>> {
        Ok(self.snapshot.readme.clone())
    }

    fn language_bytes(&self, _repo: &RepoRef) -> Result<BTreeMap<String, u64>> {
        Ok(self.snapshot.languages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::snapshot::EntryKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_accepts_git_tree_kind_aliases() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("snap.json");
        fs::write(
            &path,
            r#"{
  "repository": "octocat/spoon-knife",
  "tree": [
    {"path": "src", "kind": "tree"},
    {"path": "src/main.rs", "kind": "blob"},
    {"path": "README.md", "kind": "file"}
  ],
  "commits": [{"author_timestamp": "2024-01-02T03:04:05Z", "message": "feat: init"}],
  "languages": {"Rust": 1200}
}"#,
        )
        .expect("snapshot should write");

        let source = SnapshotSource::load(&path).expect("snapshot should load");
        let repo = source.repo_ref("HEAD").expect("ref should resolve");
        assert_eq!(repo.to_string(), "octocat/spoon-knife");

        let tree = source.tree(&repo).expect("tree should load");
        assert_eq!(tree[0].kind, EntryKind::Directory);
        assert_eq!(tree[1].kind, EntryKind::File);
        assert!(source
            .readme_text(&repo)
            .expect("readme should load")
            .is_none());
        assert_eq!(
            source.language_bytes(&repo).expect("languages").get("Rust"),
            Some(&1200)
        );
    }

    #[test]
    fn commit_history_pages_through_records() {
        let snapshot = RepositorySnapshot {
            commits: (0..5)
                .map(|i| CommitRecord::new(None, format!("commit {i}")))
                .collect(),
            ..RepositorySnapshot::default()
        };
        let source = SnapshotSource::from_snapshot(Path::new("snap.json"), snapshot);
        let repo = source.repo_ref("HEAD").expect("ref should resolve");
        assert_eq!(repo.name, "snap");

        let page = source.commit_history(&repo, 2, 2).expect("page should load");
        let messages: Vec<_> = page.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["commit 2", "commit 3"]);
        assert!(source
            .commit_history(&repo, 4, 2)
            .expect("page should load")
            .is_empty());
    }

    #[test]
    fn load_distinguishes_missing_and_malformed_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(matches!(
            SnapshotSource::load(&dir.path().join("missing.json")),
            Err(MirrorError::NotFound(_))
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").expect("broken snapshot should write");
        assert!(matches!(
            SnapshotSource::load(&broken),
            Err(MirrorError::FetchFailed(_))
        ));
    }
}
