//! External linter check (swiftlint)
//!
//! Runs the swiftlint binary against the project root. A configured custom
//! rules file (local path or URL) is materialized as `.swiftlint.yml` inside
//! the project root only for the duration of this check; a drop guard
//! removes it on every exit path.

use super::provider::{CheckProvider, CheckResult};
use crate::core::config::ChiaConfig;
use crate::core::error::CheckError;
use crate::core::resource;
use crate::language::Language;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fixed name swiftlint looks for inside the linted directory
const RULES_FILENAME: &str = ".swiftlint.yml";

/// Invokes swiftlint as a subprocess for Swift projects
pub struct SwiftLintCheck;

impl CheckProvider for SwiftLintCheck {
  fn name(&self) -> &'static str {
    "swiftlint"
  }

  fn languages(&self) -> &'static [Language] {
    &[Language::Swift]
  }

  fn dependencies(&self) -> &'static [&'static str] {
    &["swiftlint"]
  }

  fn run(&self, config: &ChiaConfig, project_root: &Path) -> Result<Vec<CheckResult>, CheckError> {
    // Keep the guard alive until the subprocess is done; dropping it removes
    // the materialized rules file.
    let _rules = match config.swift_lint.as_ref().and_then(|c| c.linting_rules_path.as_deref()) {
      Some(source) => Some(TempRulesFile::materialize(source, project_root)?),
      None => None,
    };

    let output = Command::new("swiftlint")
      .args(["lint", "--quiet", "--reporter", "json"])
      .current_dir(project_root)
      .output()
      .map_err(|e| {
        CheckError::failed_with(
          format!("could not launch swiftlint in {}", project_root.display()),
          e.to_string(),
        )
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      let stdout = String::from_utf8_lossy(&output.stdout);
      let cause = if stderr.trim().is_empty() { stdout } else { stderr };
      return Err(CheckError::failed_with(
        format!("swiftlint reported violations in {}", project_root.display()),
        cause.trim().to_string(),
      ));
    }

    Ok(Vec::new())
  }
}

/// Custom rules file scoped to one check invocation
#[derive(Debug)]
struct TempRulesFile {
  path: PathBuf,
}

impl TempRulesFile {
  /// Fetch the configured rules (local or remote) and write them into the
  /// project root under the fixed swiftlint filename
  fn materialize(source: &str, project_root: &Path) -> Result<Self, CheckError> {
    let bytes = resource::fetch(source).map_err(|_| CheckError::ConfigNotFound)?;

    let path = project_root.join(RULES_FILENAME);
    fs::write(&path, bytes)
      .map_err(|e| CheckError::failed_with(format!("could not write {}", path.display()), e.to_string()))?;

    Ok(Self { path })
  }
}

impl Drop for TempRulesFile {
  fn drop(&mut self) {
    let _ = fs::remove_file(&self.path);
  }
}
