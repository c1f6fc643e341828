//! Test helpers for integration tests

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway project directory
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create an empty project directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the project root, creating parent dirs
  pub fn write_file(&self, rel: &str, content: &str) -> Result<PathBuf> {
    let path = self.path.join(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;
    Ok(path)
  }
}

/// Run the chia binary in the given directory, returning the raw output
///
/// Exit codes matter to these tests, so no success check happens here.
pub fn run_chia(cwd: &Path, args: &[&str]) -> Result<Output> {
  run_chia_with_path(cwd, args, None)
}

/// Run the chia binary with an overridden PATH (for fake tool directories)
pub fn run_chia_with_path(cwd: &Path, args: &[&str], path_override: Option<&str>) -> Result<Output> {
  let chia_bin = env!("CARGO_BIN_EXE_chia");

  let mut cmd = Command::new(chia_bin);
  cmd.current_dir(cwd).args(args);
  if let Some(path) = path_override {
    cmd.env("PATH", path);
  }

  Ok(cmd.output()?)
}

/// stdout and stderr of a finished process, concatenated
pub fn combined_output(output: &Output) -> String {
  format!(
    "{}{}",
    String::from_utf8_lossy(&output.stdout),
    String::from_utf8_lossy(&output.stderr)
  )
}

/// Directory of fake executables prepended to PATH
pub struct FakeBinDir {
  _root: TempDir,
  pub path: PathBuf,
}

impl FakeBinDir {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Install a fake executable shell script under the given name
  #[cfg(unix)]
  pub fn install(&self, name: &str, script: &str) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = self.path.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", script))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
  }

  /// PATH value with this directory first, then the ambient PATH
  pub fn path_with_system(&self) -> String {
    let ambient = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", self.path.display(), ambient)
  }

  /// PATH value containing only this directory
  pub fn path_only(&self) -> String {
    self.path.display().to_string()
  }
}
