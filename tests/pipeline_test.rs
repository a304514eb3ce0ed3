//! End-to-end pipeline scenarios over in-memory inputs.

use prdraft::analysis::{
    analyze, categorize, classify, suggestions, FileCategory, FileStat, PrType, Tier,
};
use prdraft::config::{Config, ExclusionRules};
use prdraft::render::{render_document, render_prompt, PromptInput, TemplateInput};

fn default_rules() -> ExclusionRules {
    ExclusionRules::compile(&Config::default().exclude_patterns)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scenario_fix_with_hook_change() {
    let rules = default_rules();
    let commits = strings(&["fix: resolve redirect loop"]);
    let files = strings(&["src/hooks/useAuth.ts"]);

    let included = rules.filter(&files);
    let pr_type = classify(&commits, &included);
    let categories = categorize(&files, &rules);
    let advice = suggestions(&categories, pr_type);

    assert_eq!(pr_type, PrType::Fix);
    assert_eq!(
        categories.files(FileCategory::Hooks),
        &["src/hooks/useAuth.ts".to_string()]
    );
    assert!(advice.iter().any(|s| s.contains("hooks")));
    assert!(advice.iter().any(|s| s.contains("No test files")));
}

#[test]
fn scenario_excluded_files_never_surface() {
    let rules = default_rules();
    let files = strings(&["node_modules/x.js", "README.md"]);

    let categories = categorize(&files, &rules);

    assert_eq!(categories.total(), 1);
    assert_eq!(
        categories.files(FileCategory::Docs),
        &["README.md".to_string()]
    );

    // The excluded path never shows up in rendered output either.
    let included = rules.filter(&files);
    let report = analyze(&[]);
    let advice = suggestions(&categories, PrType::Docs);
    let doc = render_document(&TemplateInput {
        pr_type: PrType::Docs,
        branch: "docs/readme",
        base_branch: "main",
        commits: &[],
        categories: &categories,
        report: &report,
        suggestions: &advice,
        date: "2026-01-15",
    });
    let prompt = render_prompt(&PromptInput {
        output_path: "PR_SUMMARY.md",
        base_branch: "main",
        commits: &[],
        files: &included,
    });

    assert!(!doc.contains("node_modules"));
    assert!(!prompt.contains("node_modules"));
    assert!(prompt.contains("- README.md"));
}

#[test]
fn scenario_small_diff_is_low_low() {
    let report = analyze(&[FileStat { added: 50, removed: 10 }]);
    assert_eq!(report.total_changes(), 60);
    assert_eq!(report.complexity, Tier::Low);
    assert_eq!(report.risk, Tier::Low);
}

#[test]
fn scenario_four_large_files_is_high_high() {
    let stats = vec![FileStat { added: 300, removed: 300 }; 4];
    let report = analyze(&stats);
    assert_eq!(report.total_changes(), 2400);
    assert_eq!(report.large_files, 4);
    assert_eq!(report.complexity, Tier::High);
    assert_eq!(report.risk, Tier::High);
}

#[test]
fn pipeline_is_idempotent() {
    let rules = default_rules();
    let commits = strings(&["feat: add dashboard", "fix: chart overflow"]);
    let files = strings(&[
        "src/components/Dashboard.tsx",
        "src/components/Chart.tsx",
        "src/utils/scale.ts",
        "src/styles/dashboard.scss",
    ]);
    let stats = vec![
        FileStat { added: 220, removed: 10 },
        FileStat { added: 80, removed: 40 },
        FileStat { added: 30, removed: 5 },
        FileStat { added: 60, removed: 0 },
    ];

    let run = || {
        let included = rules.filter(&files);
        let pr_type = classify(&commits, &included);
        let categories = categorize(&files, &rules);
        let report = analyze(&stats);
        let advice = suggestions(&categories, pr_type);

        let doc = render_document(&TemplateInput {
            pr_type,
            branch: "feature/dashboard",
            base_branch: "main",
            commits: &commits,
            categories: &categories,
            report: &report,
            suggestions: &advice,
            date: "2026-01-15",
        });
        let prompt = render_prompt(&PromptInput {
            output_path: "PR_SUMMARY.md",
            base_branch: "main",
            commits: &commits,
            files: &included,
        });
        (doc, prompt)
    };

    assert_eq!(run(), run());
}

#[test]
fn categories_partition_the_input() {
    let rules = default_rules();
    let files = strings(&[
        "src/components/Button.tsx",
        "src/hooks/useAuth.ts",
        "src/utils/format.ts",
        "src/types/user.ts",
        "app.css",
        "src/Button.test.tsx",
        "scripts/release.sh",
        "README.md",
        "tsconfig.json",
        "Makefile",
        "node_modules/react/index.js",
    ]);

    let categories = categorize(&files, &rules);

    // Everything except the excluded node_modules path is bucketed once.
    assert_eq!(categories.total(), files.len() - 1);
    for category in FileCategory::ALL {
        for file in categories.files(category) {
            assert!(files.contains(file));
        }
    }
}
