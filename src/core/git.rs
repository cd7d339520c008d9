//! Git repository detection and branch probing
//!
//! Directories under the workspace root are probed for a checked-out
//! branch by invoking the system `git` binary. Probes are soft: any
//! failure (not a repository, detached HEAD, timeout, missing binary)
//! reports "no branch" rather than an error, so a single broken
//! repository never breaks the listing.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::core::state::DirectoryEntry;

/// Upper bound for a single branch probe. Repositories on slow or
/// disconnected network mounts otherwise hang the whole listing.
const BRANCH_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Poll interval while waiting for a probe subprocess to exit.
const PROBE_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Returns true when `path` contains a `.git` entry.
///
/// Worktrees and submodules keep a `.git` file instead of a directory,
/// so only presence is checked, not the entry kind.
pub fn is_git_repository(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Returns the currently checked-out branch of the repository at
/// `path`, or `None` when the directory is not a repository, the HEAD
/// is detached, or the probe fails or times out.
pub fn current_branch(path: &Path) -> Option<String> {
    if !is_git_repository(path) {
        return None;
    }

    let stdout = run_with_timeout(
        "git",
        &["branch", "--show-current"],
        path,
        BRANCH_PROBE_TIMEOUT,
    )?;
    let branch = stdout.trim();
    if branch.is_empty() {
        None
    } else {
        Some(branch.to_string())
    }
}

/// Probes every named child of `root` concurrently and returns one
/// entry per name, in the same order as `names`.
///
/// Each probe runs on its own thread; the listing completes only after
/// every probe has reported back. A panicking probe degrades to "no
/// branch" for its own entry and never affects its siblings.
pub fn probe_directories(root: &Path, names: &[String]) -> Vec<DirectoryEntry> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| {
                let dir = root.join(name);
                scope.spawn(move || current_branch(&dir))
            })
            .collect();

        names
            .iter()
            .zip(handles)
            .map(|(name, handle)| {
                let branch = handle.join().unwrap_or_default();
                DirectoryEntry::new(name.clone(), branch)
            })
            .collect()
    })
}

/// Runs `program` with the given arguments in `dir`, killing the
/// process once `timeout` elapses. Returns captured stdout on a zero
/// exit, `None` otherwise.
fn run_with_timeout(program: &str, args: &[&str], dir: &Path, timeout: Duration) -> Option<String> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if started.elapsed() >= timeout {
                    log::debug!("Branch probe timed out in {}", dir.display());
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                std::thread::sleep(PROBE_POLL_INTERVAL);
            }
            Err(e) => {
                log::debug!("Branch probe failed in {}: {}", dir.display(), e);
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        }
    }

    let output = child.wait_with_output().ok()?;
    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .expect("git command failed to start");
        assert!(status.success(), "git {:?} failed in {:?}", args, dir);
    }

    fn init_repository_on_branch(dir: &Path, branch: &str) {
        run_git(dir, &["init"]);
        run_git(dir, &["config", "user.name", "Test User"]);
        run_git(dir, &["config", "user.email", "test@example.com"]);
        fs::write(dir.join("README.md"), "# test\n").unwrap();
        run_git(dir, &["add", "."]);
        run_git(dir, &["commit", "-m", "Initial commit"]);
        run_git(dir, &["branch", "-m", branch]);
    }

    #[test]
    fn test_plain_directory_is_not_a_repository() {
        let temp = TempDir::new().unwrap();
        assert!(!is_git_repository(temp.path()));
        assert_eq!(current_branch(temp.path()), None);
    }

    #[test]
    fn test_current_branch_of_repository() {
        let temp = TempDir::new().unwrap();
        init_repository_on_branch(temp.path(), "main");

        assert!(is_git_repository(temp.path()));
        assert_eq!(current_branch(temp.path()), Some("main".to_string()));
    }

    #[test]
    fn test_git_file_counts_as_repository() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: /nonexistent\n").unwrap();

        assert!(is_git_repository(temp.path()));
        // the gitdir pointer leads nowhere, so the probe softly fails
        assert_eq!(current_branch(temp.path()), None);
    }

    #[test]
    fn test_detached_head_has_no_branch() {
        let temp = TempDir::new().unwrap();
        init_repository_on_branch(temp.path(), "main");
        run_git(temp.path(), &["checkout", "--detach"]);

        assert_eq!(current_branch(temp.path()), None);
    }

    #[test]
    fn test_probe_preserves_input_order() {
        let temp = TempDir::new().unwrap();
        let repo = temp.path().join("repo");
        let plain = temp.path().join("plain");
        fs::create_dir(&repo).unwrap();
        fs::create_dir(&plain).unwrap();
        init_repository_on_branch(&repo, "develop");

        let names = vec!["repo".to_string(), "plain".to_string()];
        let entries = probe_directories(temp.path(), &names);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "repo");
        assert_eq!(entries[0].git_branch, Some("develop".to_string()));
        assert_eq!(entries[1].name, "plain");
        assert_eq!(entries[1].git_branch, None);
    }

    #[test]
    fn test_probe_of_missing_directory_is_soft() {
        let temp = TempDir::new().unwrap();

        let names = vec!["does-not-exist".to_string()];
        let entries = probe_directories(temp.path(), &names);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].git_branch, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_stalled_probe_is_killed_at_the_timeout() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("stall.sh");
        fs::write(&script, "#!/bin/sh\nsleep 60\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let started = Instant::now();
        let stdout = run_with_timeout(
            script.to_str().unwrap(),
            &[],
            temp.path(),
            Duration::from_millis(100),
        );

        assert_eq!(stdout, None);
        assert!(started.elapsed() < BRANCH_PROBE_TIMEOUT);
    }
}
