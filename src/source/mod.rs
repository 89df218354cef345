pub mod filesystem;
pub mod git_meta;
pub mod languages;
pub mod local;
pub mod snapshot;

use crate::error::{MirrorError, Result};
use crate::types::config::SourceSettings;
use crate::types::snapshot::{CommitRecord, TreeEntry};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

pub use local::LocalGitSource;
pub use snapshot::SnapshotSource;

/// Identifies a repository within a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl RepoRef {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            branch: branch.into(),
        }
    }

    /// Accepts `owner/repo` or a hosting URL such as
    /// `https://github.com/owner/repo.git`.
    pub fn parse(reference: &str, branch: &str) -> Result<Self> {
        let trimmed = reference.trim();
        let path = match trimmed.split_once("://") {
            Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or(""),
            None => trimmed,
        };
        let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        if segments.len() < 2 {
            return Err(MirrorError::InvalidTarget(format!(
                "{reference} (expected 'owner/repo' or 'https://github.com/owner/repo')"
            )));
        }

        let owner = segments[0];
        let name = segments[1].strip_suffix(".git").unwrap_or(segments[1]);
        Ok(Self::new(owner, name, branch))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Supplier of the raw repository snapshot.
///
/// A missing repository is reported as [`MirrorError::NotFound`], a transport
/// problem as [`MirrorError::FetchFailed`].
pub trait RepositorySource {
    fn tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>>;

    /// One page of history, newest first. Pages start at 1.
    fn commit_history(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CommitRecord>>;

    fn readme_text(&self, repo: &RepoRef) -> Result<Option<String>>;

    fn language_bytes(&self, repo: &RepoRef) -> Result<BTreeMap<String, u64>>;
}

pub struct OpenedSource {
    pub source: Box<dyn RepositorySource>,
    pub repo: RepoRef,
}

/// Picks a source for `target`: a `.json` file is read as a snapshot, a
/// directory is read as a working copy.
pub fn open(target: &Path, settings: &SourceSettings) -> Result<OpenedSource> {
    if target.is_file() && has_json_extension(target) {
        debug!(target = %target.display(), "opening snapshot source");
        let source = SnapshotSource::load(target)?;
        let repo = source.repo_ref(&settings.branch)?;
        return Ok(OpenedSource {
            source: Box::new(source),
            repo,
        });
    }

    if target.is_dir() {
        debug!(target = %target.display(), "opening local git source");
        let source = LocalGitSource::new(target, settings.clone());
        let repo = source.repo_ref();
        return Ok(OpenedSource {
            source: Box::new(source),
            repo,
        });
    }

    Err(MirrorError::NotFound(target.display().to_string()))
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
