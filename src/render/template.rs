//! Markdown PR template rendering.

use crate::analysis::{ComplexityReport, FileCategories, PrType};

/// Maximum files listed per category in the changes breakdown section.
const BREAKDOWN_LIMIT: usize = 5;

/// Maximum files listed per category in the full file listing.
const LISTING_LIMIT: usize = 10;

/// Everything the template needs, collected upstream. Rendering is a pure
/// function of this value.
#[derive(Debug)]
pub struct TemplateInput<'a> {
    pub pr_type: PrType,
    pub branch: &'a str,
    pub base_branch: &'a str,
    pub commits: &'a [String],
    pub categories: &'a FileCategories,
    pub report: &'a ComplexityReport,
    pub suggestions: &'a [String],
    /// Generation date (YYYY-MM-DD), passed in to keep rendering deterministic.
    pub date: &'a str,
}

/// Render the pre-filled PR template.
pub fn render_document(input: &TemplateInput<'_>) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {} Pull Request Draft\n\n", input.pr_type.icon()));
    doc.push_str("<!-- Generated by prdraft. Replace the italic placeholders with real content. -->\n\n");

    doc.push_str("## 📋 Summary\n\n");
    doc.push_str("_One-paragraph summary of what this PR does and why._\n\n");

    doc.push_str("## Problem\n\n");
    doc.push_str("_What problem does this change solve? Link related issues._\n\n");

    // Bug-specific sections only make sense for fixes.
    if input.pr_type == PrType::Fix {
        doc.push_str("### Reproduction Steps\n\n");
        doc.push_str("1. _First step to reproduce the bug_\n");
        doc.push_str("2. _Observed behavior before this fix_\n\n");
        doc.push_str("### Root Cause\n\n");
        doc.push_str("_What actually caused the bug?_\n\n");
    }

    doc.push_str("## Solution\n\n");
    doc.push_str("_How does this change solve the problem? Note any trade-offs._\n\n");

    doc.push_str("## 🔄 Changes\n\n");
    if input.categories.total() == 0 {
        doc.push_str("_No changed files detected in this range._\n\n");
    }
    for (category, files) in input.categories.iter_non_empty() {
        doc.push_str(&format!("### {} ({})\n\n", category.as_str(), files.len()));
        push_file_list(&mut doc, files, BREAKDOWN_LIMIT);
        doc.push('\n');
    }

    doc.push_str(&format!("## Commits ({})\n\n", input.commits.len()));
    if input.commits.is_empty() {
        doc.push_str("_No commits found in this range._\n");
    }
    for subject in input.commits {
        doc.push_str(&format!("- {}\n", subject));
    }
    doc.push('\n');

    doc.push_str(&format!("## Files Changed ({})\n\n", input.categories.total()));
    for (category, files) in input.categories.iter_non_empty() {
        doc.push_str(&format!("**{}**\n\n", category.as_str()));
        push_file_list(&mut doc, files, LISTING_LIMIT);
        doc.push('\n');
    }

    if !input.suggestions.is_empty() {
        doc.push_str("## 💡 Review Suggestions\n\n");
        for suggestion in input.suggestions {
            doc.push_str(&format!("- {}\n", suggestion));
        }
        doc.push('\n');
    }

    doc.push_str(CHECKLIST);

    doc.push_str("---\n\n");
    doc.push_str(&format!(
        "**Type:** {} | **Complexity:** {} | **Risk:** {}\n\n",
        input.pr_type, input.report.complexity, input.report.risk
    ));
    doc.push_str(&format!(
        "**Files:** {} | **Lines:** +{} / -{}\n\n",
        input.report.file_count, input.report.total_added, input.report.total_removed
    ));
    doc.push_str(&format!(
        "_Generated by prdraft on {} from `{}` against `{}`_\n",
        input.date, input.branch, input.base_branch
    ));

    doc
}

/// Static testing/impact/deployment checklist boilerplate.
const CHECKLIST: &str = "## ✅ Checklist\n\n\
### Testing\n\n\
- [ ] Unit tests pass locally\n\
- [ ] Manual smoke test of affected flows\n\
- [ ] Edge cases considered\n\n\
### Impact\n\n\
- [ ] No breaking API changes (or they are documented above)\n\
- [ ] Performance impact assessed\n\
- [ ] Security implications reviewed\n\n\
### Deployment\n\n\
- [ ] Safe to roll back\n\
- [ ] No migration steps required (or they are documented above)\n\n";

fn push_file_list(doc: &mut String, files: &[String], limit: usize) {
    for file in files.iter().take(limit) {
        doc.push_str(&format!("- `{}`\n", file));
    }
    if files.len() > limit {
        doc.push_str(&format!("- _...and {} more_\n", files.len() - limit));
    }
}
