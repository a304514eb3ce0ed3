//! Complexity and risk scoring from per-file diff stats.

use std::fmt;

/// Added/removed line counts for one changed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStat {
    pub added: usize,
    pub removed: usize,
}

impl FileStat {
    pub fn total(&self) -> usize {
        self.added + self.removed
    }
}

/// A file counts as "large" when its combined line churn exceeds this.
pub const LARGE_FILE_THRESHOLD: usize = 200;

/// Complexity/risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate analysis of a change set's diff stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityReport {
    pub complexity: Tier,
    pub risk: Tier,
    pub total_added: usize,
    pub total_removed: usize,
    pub large_files: usize,
    pub file_count: usize,
}

impl ComplexityReport {
    pub fn total_changes(&self) -> usize {
        self.total_added + self.total_removed
    }
}

/// Compute the complexity report from per-file stats.
///
/// Complexity and risk are deliberately independent tiers: risk can reach
/// High while complexity stays Low (heavy removals with few additions).
pub fn analyze(stats: &[FileStat]) -> ComplexityReport {
    let total_added: usize = stats.iter().map(|s| s.added).sum();
    let total_removed: usize = stats.iter().map(|s| s.removed).sum();
    let large_files = stats
        .iter()
        .filter(|s| s.total() > LARGE_FILE_THRESHOLD)
        .count();
    let total_changes = total_added + total_removed;

    let complexity = if total_changes > 1000 || large_files > 3 {
        Tier::High
    } else if total_changes > 300 || large_files > 1 {
        Tier::Medium
    } else {
        Tier::Low
    };

    let mut risk = Tier::Low;
    if large_files > 2 || total_removed > 2 * total_added {
        risk = Tier::Medium;
    }
    if large_files > 5 || total_changes > 2000 {
        risk = Tier::High;
    }

    ComplexityReport {
        complexity,
        risk,
        total_added,
        total_removed,
        large_files,
        file_count: stats.len(),
    }
}
