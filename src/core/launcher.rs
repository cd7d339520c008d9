//! Opening directories in the configured editor
//!
//! Every launch invokes the editor binary once with one argument per
//! directory, so paths containing spaces or shell metacharacters pass
//! through unchanged. The launcher waits for the editor command to
//! exit and surfaces its stderr when it fails.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::error::{QuickspaceError, Result};
use crate::core::state::{Favorite, SelectionSet};

/// Opens the given absolute paths in `editor` and waits for the
/// command to finish.
pub fn launch(editor: &str, paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(QuickspaceError::EmptySelection);
    }

    log::debug!("Launching {} with {} directories", editor, paths.len());

    let output = Command::new(editor)
        .args(paths)
        .output()
        .map_err(|e| QuickspaceError::launch_failed(editor, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => match output.status.code() {
                Some(code) => format!("exited with code {}", code),
                None => "terminated by signal".to_string(),
            },
            stderr => stderr.to_string(),
        };
        return Err(QuickspaceError::launch_failed(editor, message));
    }

    Ok(())
}

/// Opens every selected directory under `root` and clears the
/// selection. The selection stays intact when the launch fails, so
/// the user can retry without picking everything again.
pub fn launch_selection(
    editor: &str,
    root: &Path,
    selection: &mut SelectionSet,
) -> Result<usize> {
    let names = selection.sorted_names();
    if names.is_empty() {
        return Err(QuickspaceError::EmptySelection);
    }

    let paths: Vec<PathBuf> = names.iter().map(|name| root.join(name)).collect();
    launch(editor, &paths)?;

    selection.clear();
    Ok(paths.len())
}

/// Opens the directories of a saved favorite, in stored order.
pub fn launch_favorite(editor: &str, root: &Path, favorite: &Favorite) -> Result<usize> {
    let paths: Vec<PathBuf> = favorite
        .directories
        .iter()
        .map(|name| root.join(name))
        .collect();
    launch(editor, &paths)?;
    Ok(paths.len())
}
