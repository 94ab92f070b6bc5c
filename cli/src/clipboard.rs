//! System clipboard access.
//!
//! Tries the native clipboard first and falls back to piping into a
//! clipboard command. On Linux the order is reversed: X11 and Wayland
//! selections are owned by the writing process, so a short-lived CLI
//! hands the text to a helper that outlives it.

use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard commands tried in order, with their arguments.
const COMMANDS: [(&str, &[&str]); 4] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// How the text reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Native,
    Command(&'static str),
}

impl std::fmt::Display for CopyMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyMethod::Native => f.write_str("system clipboard"),
            CopyMethod::Command(name) => write!(f, "{}", name),
        }
    }
}

/// Put `text` on the clipboard.
///
/// Returns the method that succeeded, or a description of the last failure.
pub fn copy_text(text: &str) -> Result<CopyMethod, String> {
    if cfg!(target_os = "linux") {
        copy_with_command(text).or_else(|err| {
            log::warn!("Clipboard command failed: {}", err);
            copy_native(text)
        })
    } else {
        copy_native(text).or_else(|err| {
            log::warn!("Native clipboard failed: {}", err);
            copy_with_command(text)
        })
    }
}

fn copy_native(text: &str) -> Result<CopyMethod, String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text).map_err(|e| e.to_string())?;
    Ok(CopyMethod::Native)
}

fn copy_with_command(text: &str) -> Result<CopyMethod, String> {
    let mut last_error = String::from("no clipboard command found");

    for (name, args) in COMMANDS {
        if !command_exists(name) {
            continue;
        }
        match pipe_into(name, args, text) {
            Ok(()) => {
                log::debug!("Copied {} bytes with {}", text.len(), name);
                return Ok(CopyMethod::Command(name));
            }
            Err(e) => {
                log::warn!("{} failed: {}", name, e);
                last_error = format!("{}: {}", name, e);
            }
        }
    }

    Err(last_error)
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Stdin is dropped before waiting so the child sees EOF; it is reaped
    // even when the write fails.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    if !status.success() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("exited with {}", status),
        ));
    }
    written
}

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_does_not_exist() {
        assert!(!command_exists("blogforge-no-such-clipboard-tool"));
    }

    #[test]
    fn test_copy_method_display() {
        assert_eq!(CopyMethod::Native.to_string(), "system clipboard");
        assert_eq!(CopyMethod::Command("xclip").to_string(), "xclip");
    }

    #[cfg(unix)]
    #[test]
    fn test_pipe_into_succeeds_when_command_reads_input() {
        assert!(pipe_into("cat", &[], "Remote work tips").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_pipe_into_reports_exit_status_after_failed_write() {
        // Larger than a pipe buffer, so the write fails once `false` exits.
        let text = "x".repeat(1 << 20);
        let err = pipe_into("false", &[], &text).unwrap_err();
        assert!(err.to_string().starts_with("exited with"));
    }
}
