use std::path::{Path, PathBuf};

use thiserror::Error;

/// Parameters for one account-file search, built from the parsed CLI
/// options. Immutable for the run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub file_name: String,
    pub start_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("{file_name} not found in any parent directory")]
    NotFound { file_name: String },
}

/// Find the account file for `search`, walking upward from the start
/// directory. The nearest git root, when one exists, is the last
/// directory examined; without one the search runs to the filesystem
/// root.
pub fn locate_account_file(search: &SearchConfig) -> Result<PathBuf, LocateError> {
    let git_root = find_git_root(&search.start_dir);
    if let Some(root) = &git_root {
        log::debug!("bounding search at git root: {}", root.display());
    }

    find_upward(&search.start_dir, &search.file_name, git_root.as_deref()).ok_or_else(|| {
        LocateError::NotFound {
            file_name: search.file_name.clone(),
        }
    })
}

/// Nearest ancestor of `start` (inclusive) containing a `.git` entry.
/// Worktrees keep `.git` as a file, so any entry kind counts.
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// First directory on the path from `start` toward the filesystem root
/// containing `file_name` as a regular file (nearest ancestor wins).
/// `ceiling`, when set, is the last directory examined; the walk never
/// proceeds above it.
pub fn find_upward(start: &Path, file_name: &str, ceiling: Option<&Path>) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if ceiling.is_some_and(|c| c == dir) {
            return None;
        }
        dir = dir.parent()?;
    }
}
