//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating workspaces with specific directory
//! layouts and editor stand-ins to test various scenarios consistently.

#![allow(dead_code)]

use super::workspace::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Scenario: configured workspace with a typical directory mix
///
/// Two git projects ("api" on main, "web" on develop), one plain
/// project ("docs"), and one hidden directory (".cache"). The root is
/// already configured.
pub fn create_standard_workspace() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;

    create_git_project(&workspace, "api", "main")?;
    create_git_project(&workspace, "web", "develop")?;
    create_project(&workspace, "docs")?;
    create_project(&workspace, ".cache")?;

    configure_root(&workspace)?;
    Ok(workspace)
}

/// Installs a fake editor that records each argument it receives, one
/// per line, and configures the workspace to use it. Returns the path
/// of the capture file.
#[cfg(unix)]
pub fn install_recording_editor(workspace: &TestWorkspace) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = workspace.scratch_dir().join("fake-editor.sh");
    let capture = workspace.scratch_dir().join("editor-args.txt");

    fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s\\n' \"$@\" >> \"{}\"\n", capture.display()),
    )?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

    let editor = script.to_str().context("script path is not valid UTF-8")?;
    configure_editor(workspace, editor)?;

    Ok(capture)
}
