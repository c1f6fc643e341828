//! License presence check

use super::provider::{CheckProvider, CheckResult};
use crate::core::config::ChiaConfig;
use crate::core::error::CheckError;
use crate::language::Language;
use std::path::Path;

/// Fails when no file named `LICENSE` exists at the project root
pub struct LicenseCheck;

impl CheckProvider for LicenseCheck {
  fn name(&self) -> &'static str {
    "license"
  }

  fn languages(&self) -> &'static [Language] {
    &[Language::Generic]
  }

  fn run(&self, _config: &ChiaConfig, project_root: &Path) -> Result<Vec<CheckResult>, CheckError> {
    if project_root.join("LICENSE").is_file() {
      Ok(Vec::new())
    } else {
      Err(CheckError::failed(format!(
        "no LICENSE file found at {}",
        project_root.display()
      )))
    }
  }
}
