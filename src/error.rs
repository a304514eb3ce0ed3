//! Error types for prdraft modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to resolve reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to find merge base with '{0}': {1}")]
    MergeBaseFailed(String, #[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    DiffFailed(#[source] git2::Error),
}

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseFailed(#[source] serde_json::Error),
}

/// Errors from writing the rendered template.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the best-effort clipboard copy.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (tried {0})")]
    NoTool(String),

    #[error("Failed to spawn clipboard tool '{0}': {1}")]
    SpawnFailed(String, #[source] std::io::Error),

    #[error("Failed to write to clipboard tool stdin: {0}")]
    PipeFailed(#[source] std::io::Error),

    #[error("Clipboard tool '{tool}' exited with {status}")]
    NonZeroExit { tool: String, status: String },
}
