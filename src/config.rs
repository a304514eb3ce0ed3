//! Configuration loading and exclusion rule compilation.
//!
//! Configuration comes from an optional JSON file (`.prdraft.json` by
//! default). Unrecognized keys are ignored and a malformed file falls back
//! to the built-in defaults; loading never aborts the run.

use std::path::Path;

use regex_lite::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Default file name probed in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".prdraft.json";

/// Default exclusion pattern sources.
///
/// Anchoring is deliberate: directory patterns are start-anchored (a path
/// must *begin* with `node_modules/`), artifact patterns are end-anchored.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    r"^node_modules/",
    r"^dist/",
    r"^build/",
    r"^coverage/",
    r"^\.next/",
    r"^\.idea/",
    r"^\.vscode/",
    r"package-lock\.json$",
    r"yarn\.lock$",
    r"pnpm-lock\.yaml$",
    r"\.lock$",
    r"\.min\.(js|css)$",
    r"\.map$",
    r"\.DS_Store$",
];

/// Raw shape of the JSON config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    base_branch: Option<String>,
    output_file: Option<String>,
    exclude_patterns: Option<Vec<String>>,
}

/// Resolved configuration, constructed once at startup and passed by
/// parameter through every stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_branch: String,
    pub output_file: String,
    pub exclude_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_branch: "main".to_string(),
            output_file: "PR_SUMMARY.md".to_string(),
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, merging over the defaults.
    ///
    /// A missing file is not an error (returns defaults); read or parse
    /// failures are reported so the caller can warn and fall back.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
        let raw: RawConfig = serde_json::from_str(&content).map_err(ConfigError::ParseFailed)?;

        let defaults = Self::default();
        Ok(Self {
            base_branch: raw.base_branch.unwrap_or(defaults.base_branch),
            output_file: raw.output_file.unwrap_or(defaults.output_file),
            exclude_patterns: raw.exclude_patterns.unwrap_or(defaults.exclude_patterns),
        })
    }
}

/// Exclusion patterns compiled once at configuration-load time.
///
/// A path is excluded iff any pattern matches (unanchored search; the
/// pattern sources carry their own anchors).
#[derive(Debug)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
}

impl ExclusionRules {
    /// Compile pattern sources. A source that fails to compile is skipped
    /// with a warning rather than discarding the rest of the set.
    pub fn compile(sources: &[String]) -> Self {
        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            match Regex::new(source) {
                Ok(re) => patterns.push(re),
                Err(e) => warn!("Skipping invalid exclude pattern '{}': {}", source, e),
            }
        }
        Self { patterns }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }

    /// Filter a file list down to the non-excluded paths, preserving order.
    pub fn filter<'a>(&self, paths: &'a [String]) -> Vec<&'a str> {
        paths
            .iter()
            .map(String::as_str)
            .filter(|p| !self.is_excluded(p))
            .collect()
    }
}
