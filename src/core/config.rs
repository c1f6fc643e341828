//! Configuration for chia
//!
//! The config is a YAML document (`.chia.yml`) with one optional section per
//! check provider. It is resolved exactly once before any check runs: an
//! explicitly supplied source that cannot be fetched or parsed is fatal,
//! while the implicit default falls back to built-in defaults.

use crate::core::error::{ChiaResult, ConfigError};
use crate::core::resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config filename looked up at the project root
pub const DEFAULT_CONFIG_NAME: &str = ".chia.yml";

/// Top-level configuration aggregate
///
/// Each provider reads only its own section; unknown or absent sections fall
/// back to that provider's built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChiaConfig {
  /// Options for the spell check provider
  #[serde(default)]
  pub spell_check: Option<SpellCheckConfig>,

  /// Options for the swiftlint provider
  #[serde(default)]
  pub swift_lint: Option<SwiftLintConfig>,
}

/// Spell check provider options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCheckConfig {
  /// Candidate paths containing any of these substrings are skipped
  #[serde(default)]
  pub ignored_paths: Vec<String>,

  /// Words that are never reported as misspelled
  #[serde(default)]
  pub ignored_words: Vec<String>,

  /// Only check files changed since the previous commit (default: true)
  #[serde(default = "default_only_latest_files")]
  pub only_latest_files: bool,
}

fn default_only_latest_files() -> bool {
  true
}

impl Default for SpellCheckConfig {
  fn default() -> Self {
    Self {
      ignored_paths: Vec::new(),
      ignored_words: Vec::new(),
      only_latest_files: default_only_latest_files(),
    }
  }
}

/// swiftlint provider options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftLintConfig {
  /// Local path or URL of a custom swiftlint rules file
  #[serde(default)]
  pub linting_rules_path: Option<String>,
}

impl ChiaConfig {
  /// Resolve the configuration from an optional user-supplied source
  ///
  /// `Some(source)` reads a local path or fetches a remote URL; any failure
  /// there (network, missing file, unparseable document) is fatal and aborts
  /// the run before any check executes. `None` loads `.chia.yml` from the
  /// project root when present and never fails the run.
  pub fn resolve(source: Option<&str>, project_root: &Path) -> ChiaResult<Self> {
    match source {
      Some(raw) => {
        let bytes = resource::fetch(raw).map_err(|e| ConfigError::NotFound {
          source: raw.to_string(),
          reason: e.to_string(),
        })?;
        Self::parse(&bytes).map_err(|reason| {
          ConfigError::NotFound {
            source: raw.to_string(),
            reason,
          }
          .into()
        })
      }
      None => {
        let default_path = project_root.join(DEFAULT_CONFIG_NAME);
        if !default_path.is_file() {
          tracing::debug!("no {} found, using built-in defaults", DEFAULT_CONFIG_NAME);
          return Ok(Self::default());
        }
        match fs::read(&default_path).map_err(|e| e.to_string()).and_then(|b| Self::parse(&b)) {
          Ok(config) => Ok(config),
          Err(reason) => {
            tracing::warn!(
              "ignoring unreadable {} ({}), using built-in defaults",
              default_path.display(),
              reason
            );
            Ok(Self::default())
          }
        }
      }
    }
  }

  /// Parse a YAML document; an empty document is a valid, default config
  fn parse(bytes: &[u8]) -> Result<Self, String> {
    let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
    if text.trim().is_empty() {
      return Ok(Self::default());
    }
    serde_yaml::from_str(text).map_err(|e| e.to_string())
  }
}
