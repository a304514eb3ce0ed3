//! Best-effort clipboard copy by shelling out to the platform tool.
//!
//! Copy failures are reported to the caller as warnings, never as fatal
//! errors; the written output file remains the source of truth.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::ClipboardError;

/// Platform clipboard commands, tried in order.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy `text` to the system clipboard.
///
/// Tries each platform tool in order and returns on the first success.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut last_error = None;

    for command in CLIPBOARD_COMMANDS {
        match pipe_to(command, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or_else(|| {
        let tried = CLIPBOARD_COMMANDS
            .iter()
            .map(|c| c[0])
            .collect::<Vec<_>>()
            .join(", ");
        ClipboardError::NoTool(tried)
    }))
}

fn pipe_to(command: &[&str], text: &str) -> Result<(), ClipboardError> {
    let tool = command[0];

    let mut child = Command::new(tool)
        .args(&command[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::SpawnFailed(tool.to_string(), e))?;

    // Take and drop stdin so the tool sees EOF before we wait on it.
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(ClipboardError::PipeFailed)?;
    }

    let status = child
        .wait()
        .map_err(|e| ClipboardError::SpawnFailed(tool.to_string(), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::NonZeroExit {
            tool: tool.to_string(),
            status: status.to_string(),
        })
    }
}
