//! prdraft - A CLI tool that drafts pre-filled PR templates from your
//! branch's commits and changed files.
//!
//! # Overview
//!
//! prdraft inspects the commit range between a base branch and HEAD,
//! classifies the change set with keyword and path heuristics, scores its
//! complexity and risk, and writes a pre-filled markdown PR template plus
//! a companion prompt for an external text-generation assistant.

pub mod analysis;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod git;
pub mod render;

// Re-export commonly used types
pub use analysis::{ComplexityReport, FileCategories, FileCategory, FileStat, PrType, Tier};
pub use config::{Config, ExclusionRules};
pub use error::{ClipboardError, ConfigError, GitError, OutputError};
pub use render::{PromptInput, TemplateInput};
