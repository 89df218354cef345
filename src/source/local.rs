use super::filesystem::{file_size, list_entries, read_to_string_if_exists};
use super::git_meta::{blob_text, commit_page, resolve_revision, tree_listing, GitTreeItem};
use super::languages::language_for_extension;
use super::{RepoRef, RepositorySource};
use crate::error::{MirrorError, Result};
use crate::types::config::SourceSettings;
use crate::types::snapshot::{CommitRecord, TreeEntry};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A local repository. Git checkouts are read at the configured branch;
/// plain directories are read from disk as they are.
#[derive(Debug, Clone)]
pub struct LocalGitSource {
    root: PathBuf,
    settings: SourceSettings,
}

/// Where the tree of a local source comes from.
enum Revision {
    Commit(String),
    /// Git checkout without any commits.
    Unborn,
    WorkingDirectory,
}

impl LocalGitSource {
    pub fn new(root: &Path, settings: SourceSettings) -> Self {
        Self {
            root: root.to_path_buf(),
            settings,
        }
    }

    pub fn repo_ref(&self) -> RepoRef {
        let name = self
            .root
            .canonicalize()
            .ok()
            .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "repository".to_string());
        RepoRef::new("local", name, self.settings.branch.clone())
    }

    fn ensure_exists(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(MirrorError::NotFound(self.root.display().to_string()))
        }
    }

    fn revision(&self, repo: &RepoRef) -> Result<Revision> {
        self.ensure_exists()?;
        if !self.root.join(".git").exists() {
            return Ok(Revision::WorkingDirectory);
        }
        Ok(match resolve_revision(&self.root, &repo.branch)? {
            Some(commit) => Revision::Commit(commit),
            None => Revision::Unborn,
        })
    }

    fn listing(&self, revision: &Revision) -> Result<Vec<GitTreeItem>> {
        match revision {
            Revision::Commit(commit) => tree_listing(&self.root, commit),
            Revision::Unborn => Ok(Vec::new()),
            Revision::WorkingDirectory => Ok(list_entries(&self.root)
                .into_iter()
                .map(|entry| {
                    let size = if entry.is_file() {
                        file_size(&self.root.join(&entry.path))
                    } else {
                        0
                    };
                    GitTreeItem { entry, size }
                })
                .collect()),
        }
    }

    fn read_file(&self, revision: &Revision, path: &str) -> Result<Option<String>> {
        match revision {
            Revision::Commit(commit) => blob_text(&self.root, commit, path).map(Some),
            Revision::Unborn => Ok(None),
            Revision::WorkingDirectory => Ok(read_to_string_if_exists(&self.root.join(path))),
        }
    }
}

/// Root file whose name starts with `readme`, preferring `README.md`, else
/// the first `readme.md` anywhere in the tree.
fn readme_path(entries: &[TreeEntry]) -> Option<&str> {
    let mut root_candidates: Vec<&TreeEntry> = entries
        .iter()
        .filter(|entry| entry.is_file() && !entry.path.contains('/'))
        .filter(|entry| entry.name().to_lowercase().starts_with("readme"))
        .collect();
    root_candidates.sort_by_key(|entry| {
        (
            !entry.name().eq_ignore_ascii_case("readme.md"),
            entry.path.clone(),
        )
    });

    root_candidates
        .first()
        .copied()
        .or_else(|| {
            entries
                .iter()
                .find(|entry| entry.is_file() && entry.path.to_lowercase().ends_with("readme.md"))
        })
        .map(|entry| entry.path.as_str())
}

impl RepositorySource for LocalGitSource {
    fn tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>> {
        let revision = self.revision(repo)?;
        let entries: Vec<TreeEntry> = self
            .listing(&revision)?
            .into_iter()
            .map(|item| item.entry)
            .collect();
        debug!(%repo, entries = entries.len(), "listed repository tree");
        Ok(entries)
    }

    fn commit_history(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CommitRecord>> {
        let commit = match self.revision(repo)? {
            Revision::Commit(commit) => commit,
            Revision::Unborn => return Ok(Vec::new()),
            Revision::WorkingDirectory => {
                warn!(%repo, "not a git checkout; commit history is empty");
                return Ok(Vec::new());
            }
        };
        let commits = commit_page(&self.root, &commit, page, per_page)?;
        debug!(%repo, page, commits = commits.len(), "read commit history");
        Ok(commits)
    }

    fn readme_text(&self, repo: &RepoRef) -> Result<Option<String>> {
        let revision = self.revision(repo)?;
        let entries: Vec<TreeEntry> = self
            .listing(&revision)?
            .into_iter()
            .map(|item| item.entry)
            .collect();
        let text = match readme_path(&entries) {
            Some(path) => self.read_file(&revision, path)?,
            None => None,
        };
        if text.is_none() {
            debug!(%repo, "no readable README in repository tree");
        }
        Ok(text)
    }

    fn language_bytes(&self, repo: &RepoRef) -> Result<BTreeMap<String, u64>> {
        let revision = self.revision(repo)?;
        let mut bytes: BTreeMap<String, u64> = BTreeMap::new();
        for item in self.listing(&revision)?.iter().filter(|item| item.entry.is_file()) {
            let Some((_, extension)) = item.entry.name().rsplit_once('.') else {
                continue;
            };
            let Some(language) = language_for_extension(extension) else {
                continue;
            };
            *bytes.entry(language.to_string()).or_insert(0) += item.size;
        }
        debug!(%repo, languages = bytes.len(), "computed language byte counts");
        Ok(bytes)
    }
}
