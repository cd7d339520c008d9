//! Workspace setup and management utilities
//!
//! Provides functions for creating isolated test workspaces with project
//! directories, git repositories, and private configuration state.

#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Isolated environment for one test: a workspace root holding project
/// directories plus private config and data directories. Tests running
/// in parallel never share configuration or favorites state.
///
/// The TempDir must be kept alive for the duration of the test to
/// prevent cleanup.
pub struct TestWorkspace {
    temp_dir: TempDir,
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl TestWorkspace {
    /// Get the workspace root path as a reference
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scratch space outside the workspace root, for fixtures that
    /// must not show up in directory listings.
    pub fn scratch_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Builds a quickspace command wired to this workspace's private
    /// config and data directories.
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("quickspace")?;
        cmd.env("QUICKSPACE_CONFIG_DIR", &self.config_dir)
            .env("QUICKSPACE_DATA_DIR", &self.data_dir);
        Ok(cmd)
    }
}

/// Sets up a fresh, unconfigured workspace for testing
///
/// Creates a temporary directory holding an empty workspace root plus
/// empty config and data directories. No settings are written, so the
/// binary starts from defaults.
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("workspace");
    let config_dir = temp_dir.path().join("config");
    let data_dir = temp_dir.path().join("data");

    fs::create_dir(&root)?;
    fs::create_dir(&config_dir)?;
    fs::create_dir(&data_dir)?;

    Ok(TestWorkspace {
        temp_dir,
        root,
        config_dir,
        data_dir,
    })
}

/// Points the workspace's configuration at its own root directory
pub fn configure_root(workspace: &TestWorkspace) -> Result<()> {
    workspace
        .command()?
        .args(["config", "--root"])
        .arg(&workspace.root)
        .assert()
        .success();
    Ok(())
}

/// Sets the editor binary in the workspace's configuration
pub fn configure_editor(workspace: &TestWorkspace, editor: &str) -> Result<()> {
    workspace
        .command()?
        .args(["config", "--editor", editor])
        .assert()
        .success();
    Ok(())
}

/// Creates a plain project directory under the workspace root
pub fn create_project(workspace: &TestWorkspace, name: &str) -> Result<PathBuf> {
    let path = workspace.root.join(name);
    fs::create_dir(&path)?;
    Ok(path)
}

/// Creates a project directory that is a git repository with one
/// commit, checked out on the given branch
pub fn create_git_project(workspace: &TestWorkspace, name: &str, branch: &str) -> Result<PathBuf> {
    let path = create_project(workspace, name)?;

    run_git(&path, &["init"])?;
    run_git(&path, &["config", "user.name", "Test User"])?;
    run_git(&path, &["config", "user.email", "test@example.com"])?;

    fs::write(path.join("README.md"), "# test project\n")?;
    run_git(&path, &["add", "."])?;
    run_git(&path, &["commit", "-m", "Initial commit"])?;
    run_git(&path, &["branch", "-m", branch])?;

    Ok(path)
}

fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()?;
    anyhow::ensure!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}
