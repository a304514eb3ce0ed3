//! Companion prompt for an external text-generation assistant.

/// Input to the assistant prompt renderer.
#[derive(Debug)]
pub struct PromptInput<'a> {
    pub output_path: &'a str,
    pub base_branch: &'a str,
    pub commits: &'a [String],
    /// Non-excluded changed files, same list the template was built from.
    pub files: &'a [&'a str],
}

/// Build the prompt that guides an assistant through filling the template's
/// placeholders. Pure function of its input.
pub fn render_prompt(input: &PromptInput<'_>) -> String {
    let commits_section = if input.commits.is_empty() {
        "(no commits in range)".to_string()
    } else {
        input
            .commits
            .iter()
            .enumerate()
            .map(|(i, subject)| format!("{}. {}", i + 1, subject))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let files_section = if input.files.is_empty() {
        "(no changed files in range)".to_string()
    } else {
        input
            .files
            .iter()
            .map(|f| format!("- {}", f))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are completing a pull-request description for a software project.

A pre-filled PR template has been written to "{output_path}". It was generated
from the commits and changed files of the current branch, compared against the
base branch "{base_branch}". Open the file and replace every italic placeholder
with real content while keeping the section structure intact.

## Commits ({commit_count})
{commits_section}

## Changed Files ({file_count})
{files_section}

## Instructions
1. Summary: one short paragraph describing what the change does and why.
2. Problem: describe the problem being solved; reference issue numbers if the
   commit messages mention any.
3. Reproduction Steps / Root Cause: only present for bug-fix PRs; fill them
   from the commit messages and file changes.
4. Solution: explain the approach taken and any trade-offs.
5. Leave the Changes, Commits, Files Changed, Review Suggestions, Checklist,
   and metadata sections exactly as generated.
6. Be concise and professional; write plain Markdown with no extra headings."#,
        output_path = input.output_path,
        base_branch = input.base_branch,
        commit_count = input.commits.len(),
        commits_section = commits_section,
        file_count = input.files.len(),
        files_section = files_section,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_inputs() {
        let commits = vec!["fix: resolve redirect loop".to_string()];
        let files = vec!["src/hooks/useAuth.ts"];
        let prompt = render_prompt(&PromptInput {
            output_path: "PR_SUMMARY.md",
            base_branch: "main",
            commits: &commits,
            files: &files,
        });

        assert!(prompt.contains("\"PR_SUMMARY.md\""));
        assert!(prompt.contains("base branch \"main\""));
        assert!(prompt.contains("1. fix: resolve redirect loop"));
        assert!(prompt.contains("- src/hooks/useAuth.ts"));
    }

    #[test]
    fn test_prompt_mirrors_template_sections() {
        let prompt = render_prompt(&PromptInput {
            output_path: "out.md",
            base_branch: "main",
            commits: &[],
            files: &[],
        });

        for heading in ["Summary", "Problem", "Solution", "Checklist"] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
        assert!(prompt.contains("(no commits in range)"));
    }

    #[test]
    fn test_commits_are_numbered() {
        let commits = vec!["feat: a".to_string(), "fix: b".to_string()];
        let prompt = render_prompt(&PromptInput {
            output_path: "out.md",
            base_branch: "develop",
            commits: &commits,
            files: &[],
        });

        assert!(prompt.contains("1. feat: a"));
        assert!(prompt.contains("2. fix: b"));
    }
}
