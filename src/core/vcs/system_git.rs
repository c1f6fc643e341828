//! System git backend
//!
//! Uses the git CLI via subprocess with an isolated environment. Callers
//! treat every operation as best-effort: a project without git, without a
//! parent commit, or without git on PATH simply yields an `Err` that the
//! spell check turns into "check all files".

use crate::core::error::{ChiaError, ChiaResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository at the given path
  pub fn open(path: &Path) -> ChiaResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ChiaError::message(format!(
        "Not a git repository at {}: {}",
        path.display(),
        stderr.trim()
      )));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Files changed between the previous commit and the working tree
  ///
  /// Wraps `git diff --name-only HEAD~1`. Paths are repo-relative, one per
  /// line, as printed by git.
  pub fn changed_files_since_previous_commit(&self) -> ChiaResult<Vec<String>> {
    let output = self
      .git_cmd()
      .args(["diff", "--name-only", "HEAD~1"])
      .output()
      .context("Failed to execute git diff")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ChiaError::message(format!("git diff failed: {}", stderr.trim())));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(str::to_string).filter(|l| !l.is_empty()).collect())
  }

  /// Create a safe git command with isolated environment
  ///
  /// Clears environment variables and whitelists only PATH and HOME so a
  /// user's global git config cannot change the output format.
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("core.quotePath=false");

    cmd
  }
}
