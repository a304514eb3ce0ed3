//! Per-file added/removed line counts for the base..HEAD range.

use git2::{Patch, Repository};
use tracing::debug;

use crate::analysis::FileStat;
use crate::error::GitError;

use super::range_diff;

/// Fetch per-file line stats for the merge-base → HEAD diff, keyed by path
/// so the caller can apply exclusion filtering before aggregation.
///
/// Deltas that produce no patch (binary files, unreadable blobs) count as
/// 0 added / 0 removed rather than failing the collection.
pub fn fetch_diff_stats(
    repo: &Repository,
    base: &str,
) -> Result<Vec<(String, FileStat)>, GitError> {
    let diff = range_diff(repo, base)?;

    let mut stats = Vec::with_capacity(diff.deltas().len());

    for (idx, delta) in diff.deltas().enumerate() {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path())
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();

        let stat = match Patch::from_diff(&diff, idx) {
            Ok(Some(patch)) => match patch.line_stats() {
                Ok((_context, added, removed)) => FileStat { added, removed },
                Err(e) => {
                    debug!("No line stats for '{}': {}", path, e);
                    FileStat::default()
                }
            },
            Ok(None) => FileStat::default(),
            Err(e) => {
                debug!("No patch for '{}': {}", path, e);
                FileStat::default()
            }
        };

        stats.push((path, stat));
    }

    Ok(stats)
}
