//! Check provider abstraction
//!
//! Every concrete check implements `CheckProvider`: a stateless capability
//! that declares the languages it applies to and the external binaries it
//! needs, and produces a list of results (or a `CheckError`) when run.

use crate::core::config::ChiaConfig;
use crate::core::error::CheckError;
use crate::language::Language;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Severity of a single result, ordered `Info < Warning < Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
  Info,
  Warning,
  Error,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::Info => write!(f, "INFO"),
      Severity::Warning => write!(f, "WARN"),
      Severity::Error => write!(f, "ERROR"),
    }
  }
}

/// Immutable result value produced by a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
  pub severity: Severity,
  pub message: String,
  pub metadata: Option<BTreeMap<String, String>>,
}

impl CheckResult {
  /// Create an info-severity result
  pub fn info(message: impl Into<String>) -> Self {
    Self {
      severity: Severity::Info,
      message: message.into(),
      metadata: None,
    }
  }

  /// Create a warning-severity result
  pub fn warning(message: impl Into<String>) -> Self {
    Self {
      severity: Severity::Warning,
      message: message.into(),
      metadata: None,
    }
  }

  /// Create an error-severity result
  pub fn error(message: impl Into<String>) -> Self {
    Self {
      severity: Severity::Error,
      message: message.into(),
      metadata: None,
    }
  }

  /// Attach a metadata entry
  pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self
      .metadata
      .get_or_insert_with(BTreeMap::new)
      .insert(key.into(), value.into());
    self
  }
}

/// Capability contract implemented by each concrete check
///
/// Providers are stateless and registered once in a static ordered registry;
/// registration order only determines output order.
pub trait CheckProvider: Send + Sync {
  /// Unique name of this check (kebab-case)
  fn name(&self) -> &'static str;

  /// Languages this check applies to; `Generic` means every project
  fn languages(&self) -> &'static [Language];

  /// External binaries that must be resolvable on PATH before running
  fn dependencies(&self) -> &'static [&'static str] {
    &[]
  }

  /// Run the check against the project root
  fn run(&self, config: &ChiaConfig, project_root: &Path) -> Result<Vec<CheckResult>, CheckError>;
}
