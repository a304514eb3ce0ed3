//! Repository access: branch, commit range, changed files, diff stats.
//!
//! Collection failures are surfaced as [`GitError`] so the caller can
//! degrade to empty results; only opening the repository itself is fatal.

pub mod commits;
pub mod files;
pub mod stats;

pub use commits::fetch_commit_subjects;
pub use files::fetch_changed_files;
pub use stats::fetch_diff_stats;

use git2::{Diff, Oid, Repository};

use crate::error::GitError;

/// Name of the currently checked-out branch (HEAD shorthand).
pub fn current_branch(repo: &Repository) -> Result<String, GitError> {
    let head = repo
        .head()
        .map_err(|e| GitError::ReferenceNotFound("HEAD".to_string(), e))?;
    Ok(head.shorthand().unwrap_or("HEAD").to_string())
}

/// Resolve (merge base with `base`, HEAD) for the commit range under review.
///
/// Tries `base` as a local reference first, then as `origin/<base>`.
pub(crate) fn resolve_range(repo: &Repository, base: &str) -> Result<(Oid, Oid), GitError> {
    let head_oid = resolve_reference(repo, "HEAD")?;

    let base_oid = resolve_reference(repo, base)
        .or_else(|_| resolve_reference(repo, &format!("origin/{base}")))?;

    let merge_base = repo
        .merge_base(base_oid, head_oid)
        .map_err(|e| GitError::MergeBaseFailed(base.to_string(), e))?;

    Ok((merge_base, head_oid))
}

/// Resolve a reference (branch, tag, commit hash) to a commit OID.
fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    let obj = repo
        .revparse_single(reference)
        .map_err(|e| GitError::ReferenceNotFound(reference.to_string(), e))?;

    let commit = obj
        .peel_to_commit()
        .map_err(|e| GitError::ReferenceNotFound(reference.to_string(), e))?;

    Ok(commit.id())
}

/// Build the tree-to-tree diff for the merge-base → HEAD range.
pub(crate) fn range_diff<'repo>(
    repo: &'repo Repository,
    base: &str,
) -> Result<Diff<'repo>, GitError> {
    let (merge_base, head_oid) = resolve_range(repo, base)?;

    let base_tree = repo
        .find_commit(merge_base)
        .and_then(|c| c.tree())
        .map_err(GitError::DiffFailed)?;
    let head_tree = repo
        .find_commit(head_oid)
        .and_then(|c| c.tree())
        .map_err(GitError::DiffFailed)?;

    repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)
        .map_err(GitError::DiffFailed)
}
