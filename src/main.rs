//! prdraft - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;
use tracing_subscriber::EnvFilter;

use prdraft::analysis::{analyze, categorize, classify, suggestions, FileStat};
use prdraft::clipboard::copy_to_clipboard;
use prdraft::config::{Config, ExclusionRules, DEFAULT_CONFIG_FILE};
use prdraft::error::OutputError;
use prdraft::git::{current_branch, fetch_changed_files, fetch_commit_subjects, fetch_diff_stats};
use prdraft::render::{render_document, render_prompt, PromptInput, TemplateInput};

/// Draft a pre-filled PR template from your branch's commits and changed files.
#[derive(Parser, Debug)]
#[command(name = "prdraft")]
#[command(about = "Draft a pre-filled PR template from your branch's commits and changed files")]
#[command(version)]
struct Cli {
    /// Base branch to compare against (defaults to the configured baseBranch)
    #[arg(allow_hyphen_values = true)]
    base_branch: Option<String>,

    /// Path to write the rendered template
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip copying the assistant prompt to the clipboard
    #[arg(long)]
    no_copy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Step 1: Open the git repository (the only fatal precondition)
    let repo = Repository::discover(".")
        .context("Not a git repository. Run prdraft from within a git working tree.")?;

    // Step 2: Load configuration (malformed config falls back to defaults)
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}. Using default configuration.", e);
            Config::default()
        }
    };
    let exclusions = ExclusionRules::compile(&config.exclude_patterns);

    // Step 3: Resolve base branch and output path. A positional that looks
    // like a flag is ignored rather than treated as a branch name.
    let positional = cli
        .base_branch
        .as_deref()
        .filter(|b| !b.starts_with("--"));
    let base_branch = positional.unwrap_or(&config.base_branch).to_string();
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_file));

    // Step 4: Collect the change set. Retrieval failures degrade to empty
    // results and never abort the run.
    let branch = current_branch(&repo).unwrap_or_else(|e| {
        eprintln!("Warning: could not determine current branch: {}", e);
        "HEAD".to_string()
    });

    let commits = fetch_commit_subjects(&repo, &base_branch).unwrap_or_else(|e| {
        eprintln!(
            "Warning: could not list commits against '{}': {}",
            base_branch, e
        );
        Vec::new()
    });

    let files = fetch_changed_files(&repo, &base_branch).unwrap_or_else(|e| {
        eprintln!(
            "Warning: could not list changed files against '{}': {}",
            base_branch, e
        );
        Vec::new()
    });

    let raw_stats = fetch_diff_stats(&repo, &base_branch).unwrap_or_else(|e| {
        eprintln!(
            "Warning: could not collect diff stats against '{}': {}",
            base_branch, e
        );
        Vec::new()
    });

    // Step 5: Run the pipeline. Exclusions apply everywhere file lists are
    // consumed: classification, categorization, change counting, the prompt.
    let included = exclusions.filter(&files);
    let stats: Vec<FileStat> = raw_stats
        .iter()
        .filter(|(path, _)| !exclusions.is_excluded(path))
        .map(|(_, stat)| *stat)
        .collect();

    println!(
        "Analyzing '{}' against '{}': {} commits, {} changed files",
        branch,
        base_branch,
        commits.len(),
        included.len()
    );

    let pr_type = classify(&commits, &included);
    let categories = categorize(&files, &exclusions);
    let report = analyze(&stats);
    let suggestions = suggestions(&categories, pr_type);

    // Step 6: Render the template and the assistant prompt
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let output_display = output_path.display().to_string();

    let document = render_document(&TemplateInput {
        pr_type,
        branch: &branch,
        base_branch: &base_branch,
        commits: &commits,
        categories: &categories,
        report: &report,
        suggestions: &suggestions,
        date: &date,
    });

    let prompt = render_prompt(&PromptInput {
        output_path: &output_display,
        base_branch: &base_branch,
        commits: &commits,
        files: &included,
    });

    // Step 7: Write the template
    std::fs::write(&output_path, &document).map_err(|source| OutputError::WriteFailed {
        path: output_display.clone(),
        source,
    })?;

    println!(
        "✓ Wrote {} ({} {}, complexity {}, risk {})",
        output_display,
        pr_type.icon(),
        pr_type.as_str(),
        report.complexity,
        report.risk
    );

    // Step 8: Copy the assistant prompt (best-effort)
    if cli.no_copy {
        println!("Skipped clipboard copy (--no-copy)");
    } else {
        match copy_to_clipboard(&prompt) {
            Ok(()) => println!("✓ Assistant prompt copied to clipboard"),
            Err(e) => eprintln!(
                "Warning: could not copy prompt to clipboard: {}. The template at {} is still complete.",
                e, output_display
            ),
        }
    }

    Ok(())
}
