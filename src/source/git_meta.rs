use crate::error::{MirrorError, Result};
use crate::types::snapshot::{CommitRecord, TreeEntry};
use std::path::Path;
use std::process::{Command, Output};

const FIELD_SEPARATOR: char = '\u{1f}';
const RECORD_SEPARATOR: char = '\u{1e}';
const HEAD: &str = "HEAD";

/// Author dates rendered in UTC with the same fixed layout hosted APIs use.
const DATE_FORMAT: &str = "--date=format-local:%Y-%m-%dT%H:%M:%SZ";
const LOG_FORMAT: &str = "--format=%ad%x1f%B%x1e";

/// Entry of a committed tree together with its blob size (0 for trees).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitTreeItem {
    pub entry: TreeEntry,
    pub size: u64,
}

fn run_git(root: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .env("TZ", "UTC")
        .output()
        .map_err(|e| MirrorError::FetchFailed(format!("failed to run git: {e}")))
}

fn failure(root: &Path, action: &str, output: &Output) -> MirrorError {
    MirrorError::FetchFailed(format!(
        "git {action} failed in {}: {}",
        root.display(),
        String::from_utf8_lossy(&output.stderr).trim()
    ))
}

/// Commit id `revision` points at. `Ok(None)` is an unborn `HEAD`, i.e. a
/// repository without commits; any other unresolvable revision is not found.
pub fn resolve_revision(root: &Path, revision: &str) -> Result<Option<String>> {
    let spec = format!("{revision}^{{commit}}");
    let output = run_git(root, &["rev-parse", "--verify", "--quiet", &spec])?;
    if output.status.success() {
        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        return Ok(Some(id));
    }
    if revision == HEAD {
        return Ok(None);
    }
    Err(MirrorError::NotFound(format!(
        "revision '{revision}' in {}",
        root.display()
    )))
}

/// Recursive listing of the tree at `commit`, directories included.
pub fn tree_listing(root: &Path, commit: &str) -> Result<Vec<GitTreeItem>> {
    let output = run_git(root, &["ls-tree", "-r", "-t", "-l", "-z", commit])?;
    if !output.status.success() {
        return Err(failure(root, "ls-tree", &output));
    }
    let mut items = parse_ls_tree(&String::from_utf8_lossy(&output.stdout));
    items.sort_by(|a, b| a.entry.path.cmp(&b.entry.path));
    Ok(items)
}

/// Contents of `path` as committed at `commit`.
pub fn blob_text(root: &Path, commit: &str, path: &str) -> Result<String> {
    let object = format!("{commit}:{path}");
    let output = run_git(root, &["show", &object])?;
    if !output.status.success() {
        return Err(failure(root, "show", &output));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Reads one page of `git log` for `revision`, newest first.
pub fn commit_page(
    root: &Path,
    revision: &str,
    page: u32,
    per_page: u32,
) -> Result<Vec<CommitRecord>> {
    let skip = u64::from(page.saturating_sub(1)) * u64::from(per_page);
    let skip = format!("--skip={skip}");
    let max_count = format!("--max-count={per_page}");
    let output = run_git(
        root,
        &["log", revision, &skip, &max_count, DATE_FORMAT, LOG_FORMAT],
    )?;

    if !output.status.success() {
        if is_empty_history(&String::from_utf8_lossy(&output.stderr)) {
            return Ok(Vec::new());
        }
        return Err(failure(root, "log", &output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_log(&stdout))
}

fn is_empty_history(stderr: &str) -> bool {
    stderr.contains("does not have any commits yet")
}

/// Parses `ls-tree -l -z` records: `<mode> <type> <object> <size>\t<path>`.
/// Submodules (`commit` objects) are listed as directories.
pub(crate) fn parse_ls_tree(stdout: &str) -> Vec<GitTreeItem> {
    stdout
        .split('\0')
        .filter(|record| !record.is_empty())
        .filter_map(|record| {
            let (meta, path) = record.split_once('\t')?;
            let mut fields = meta.split_whitespace();
            let kind = fields.nth(1)?;
            let size = fields.nth(1).and_then(|size| size.parse().ok()).unwrap_or(0);
            let entry = match kind {
                "blob" => TreeEntry::file(path),
                "tree" | "commit" => TreeEntry::directory(path),
                _ => return None,
            };
            Some(GitTreeItem { entry, size })
        })
        .collect()
}

pub(crate) fn parse_log(stdout: &str) -> Vec<CommitRecord> {
    stdout
        .split(RECORD_SEPARATOR)
        .map(|record| record.trim_start_matches(['\n', '\r']))
        .filter(|record| !record.is_empty())
        .map(|record| match record.split_once(FIELD_SEPARATOR) {
            Some((date, message)) => {
                let date = date.trim();
                CommitRecord {
                    author_timestamp: (!date.is_empty()).then(|| date.to_string()),
                    message: message.trim_end().to_string(),
                }
            }
            None => CommitRecord {
                author_timestamp: None,
                message: record.trim_end().to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_log_splits_records_and_keeps_full_message() {
        let stdout = "2024-05-02T10:00:00Z\u{1f}feat: add parser\n\nbody line\n\u{1e}\n\
                      2024-05-01T09:30:00Z\u{1f}fix: typo\n\u{1e}\n";
        let commits = parse_log(stdout);
        assert_eq!(commits.len(), 2);
        assert_eq!(
            commits[0].author_timestamp.as_deref(),
            Some("2024-05-02T10:00:00Z")
        );
        assert_eq!(commits[0].message, "feat: add parser\n\nbody line");
        assert_eq!(commits[1].message, "fix: typo");
    }

    #[test]
    fn parse_log_tolerates_empty_output() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("\n").is_empty());
    }

    #[test]
    fn empty_history_messages_are_recognised() {
        assert!(is_empty_history(
            "fatal: your current branch 'main' does not have any commits yet"
        ));
        assert!(!is_empty_history("fatal: not a git repository"));
    }

    #[test]
    fn unknown_revision_is_not_an_empty_history() {
        assert!(!is_empty_history(
            "fatal: ambiguous argument 'no-such-branch': unknown revision or path not in the working tree."
        ));
    }

    #[test]
    fn parse_ls_tree_reads_kinds_and_sizes() {
        let stdout = "040000 tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904       -\tsrc\0\
                      100644 blob e69de29bb2d1d6434b8b29ae775ad8c2e48c5391      42\tsrc/main.rs\0\
                      160000 commit 1111111111111111111111111111111111111111       -\tvendor/lib\0";
        let items = parse_ls_tree(stdout);
        assert_eq!(
            items,
            vec![
                GitTreeItem {
                    entry: TreeEntry::directory("src"),
                    size: 0
                },
                GitTreeItem {
                    entry: TreeEntry::file("src/main.rs"),
                    size: 42
                },
                GitTreeItem {
                    entry: TreeEntry::directory("vendor/lib"),
                    size: 0
                },
            ]
        );
    }
}
