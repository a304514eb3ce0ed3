//! PR type classification from commit subjects and changed file paths.

use std::fmt;

/// The classification label for a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrType {
    Fix,
    Feature,
    Refactor,
    Docs,
    Test,
    Performance,
    Chore,
}

impl PrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fix => "Fix",
            Self::Feature => "Feature",
            Self::Refactor => "Refactor",
            Self::Docs => "Docs",
            Self::Test => "Test",
            Self::Performance => "Performance",
            Self::Chore => "Chore",
        }
    }

    /// Display icon used in the rendered template.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Fix => "🐛",
            Self::Feature => "✨",
            Self::Refactor => "♻️",
            Self::Docs => "📝",
            Self::Test => "✅",
            Self::Performance => "⚡",
            Self::Chore => "🔧",
        }
    }
}

impl fmt::Display for PrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.as_str())
    }
}

/// A single classification rule: keywords searched in the commit text,
/// keywords searched in the file-path text, and the resulting type.
struct ClassifyRule {
    commit_keywords: &'static [&'static str],
    file_keywords: &'static [&'static str],
    outcome: PrType,
}

/// Ordered rule table. First match wins; the order *is* the priority.
const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        commit_keywords: &["fix", "bug", "resolve"],
        file_keywords: &[],
        outcome: PrType::Fix,
    },
    ClassifyRule {
        commit_keywords: &["feat", "feature", "add"],
        file_keywords: &[],
        outcome: PrType::Feature,
    },
    ClassifyRule {
        commit_keywords: &["refactor", "restructure"],
        file_keywords: &[],
        outcome: PrType::Refactor,
    },
    ClassifyRule {
        commit_keywords: &["docs", "documentation"],
        file_keywords: &[".md"],
        outcome: PrType::Docs,
    },
    ClassifyRule {
        commit_keywords: &["test"],
        file_keywords: &["test", "spec"],
        outcome: PrType::Test,
    },
    ClassifyRule {
        commit_keywords: &["perf", "performance", "optimize"],
        file_keywords: &[],
        outcome: PrType::Performance,
    },
];

/// Classify a change set from its commit subjects and non-excluded file paths.
///
/// Both inputs are matched as lower-cased concatenations; empty inputs
/// yield [`PrType::Chore`].
pub fn classify(commits: &[String], files: &[&str]) -> PrType {
    let commit_text = commits.join("\n").to_lowercase();
    let file_text = files.join("\n").to_lowercase();

    for rule in CLASSIFY_RULES {
        let commit_hit = rule
            .commit_keywords
            .iter()
            .any(|kw| commit_text.contains(kw));
        let file_hit = rule.file_keywords.iter().any(|kw| file_text.contains(kw));

        if commit_hit || file_hit {
            return rule.outcome;
        }
    }

    PrType::Chore
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fix_keyword() {
        let ty = classify(&subjects(&["fix: resolve redirect loop"]), &[]);
        assert_eq!(ty, PrType::Fix);
    }

    #[test]
    fn test_fix_beats_feature() {
        // Priority is strict: "fix" outranks "feat" regardless of commit order.
        let ty = classify(&subjects(&["feat: new button", "fix: align it"]), &[]);
        assert_eq!(ty, PrType::Fix);
    }

    #[test]
    fn test_feature_keyword() {
        let ty = classify(&subjects(&["add dropdown to navbar"]), &[]);
        assert_eq!(ty, PrType::Feature);
    }

    #[test]
    fn test_docs_from_files_alone() {
        let ty = classify(&subjects(&["update readme"]), &["README.md"]);
        assert_eq!(ty, PrType::Docs);
    }

    #[test]
    fn test_test_from_files_alone() {
        let ty = classify(&subjects(&["more coverage"]), &["src/Button.spec.tsx"]);
        assert_eq!(ty, PrType::Test);
    }

    #[test]
    fn test_performance_keyword() {
        let ty = classify(&subjects(&["optimize render path"]), &["src/render.ts"]);
        assert_eq!(ty, PrType::Performance);
    }

    #[test]
    fn test_empty_inputs_default_to_chore() {
        assert_eq!(classify(&[], &[]), PrType::Chore);
    }

    #[test]
    fn test_no_keyword_defaults_to_chore() {
        let ty = classify(&subjects(&["bump deps"]), &["package.json"]);
        assert_eq!(ty, PrType::Chore);
    }

    #[test]
    fn test_case_insensitive() {
        let ty = classify(&subjects(&["FIX: Redirect Loop"]), &[]);
        assert_eq!(ty, PrType::Fix);
    }
}
