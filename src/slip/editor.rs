use crate::error::{Result, SlipError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    ["vim", "vi", "nano"]
        .iter()
        .find(|candidate| {
            Command::new("which")
                .arg(candidate)
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .map(|found| found.to_string())
        .ok_or_else(|| SlipError::Api("No editor found. Set $EDITOR environment variable.".into()))
}

/// Opens `path` in the editor and waits for it to exit. Returns the file afterwards.
///
/// The editor command may carry arguments (`code --wait`).
pub fn open_in_editor<P: AsRef<Path>>(path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = path.as_ref();
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| SlipError::Api("Empty editor command".into()))?;

    tracing::debug!(editor = %editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| SlipError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SlipError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(SlipError::Io)
}

/// Round-trips `initial` through the editor via a temp file ending in `file_extension`.
pub fn edit_text(initial: &str, file_extension: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!(
        "slip_edit_{}{}",
        std::process::id(),
        file_extension
    ));
    fs::write(&temp_file, initial).map_err(SlipError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);
    result
}
