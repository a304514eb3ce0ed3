//! Commit subject collection for the base..HEAD range.

use git2::Repository;

use crate::error::GitError;

use super::resolve_range;

/// Fetch the subject lines of commits unique to the current branch
/// relative to `base`, newest first (the order `git log base..HEAD` uses).
pub fn fetch_commit_subjects(repo: &Repository, base: &str) -> Result<Vec<String>, GitError> {
    let (merge_base, head_oid) = resolve_range(repo, base)?;

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head_oid).map_err(GitError::RevwalkError)?;
    revwalk.hide(merge_base).map_err(GitError::RevwalkError)?;

    let mut subjects = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::RevwalkError)?;
        let subject = commit.summary().unwrap_or("").to_string();
        subjects.push(subject);
    }

    Ok(subjects)
}
