//! Changed file collection for the base..HEAD range.

use std::collections::HashSet;

use git2::Repository;

use crate::error::GitError;

use super::range_diff;

/// Fetch the distinct repository-relative paths changed between the merge
/// base with `base` and HEAD, first-occurrence order preserved.
///
/// Deleted files report their old path; renames report the new path.
pub fn fetch_changed_files(repo: &Repository, base: &str) -> Result<Vec<String>, GitError> {
    let diff = range_diff(repo, base)?;

    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for delta in diff.deltas() {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path());

        if let Some(path) = path {
            let path = path.to_string_lossy().replace('\\', "/");
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}
