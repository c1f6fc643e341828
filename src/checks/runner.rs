//! Check runner: selection, dependency preflight and fault isolation
//!
//! Providers run sequentially in registration order. A provider failure is
//! converted into an error-severity result so one broken check can never
//! mask or block another; the only fatal path in the program is main-config
//! resolution, which happens before the runner is ever invoked.

use super::provider::{CheckProvider, CheckResult};
use crate::core::config::ChiaConfig;
use crate::core::error::CheckError;
use crate::language::Language;
use std::path::Path;
use std::sync::Arc;

/// Executes all registered check providers against a project root
pub struct CheckRunner {
  providers: Vec<Arc<dyn CheckProvider>>,
}

impl CheckRunner {
  /// Create an empty runner
  pub fn new() -> Self {
    Self { providers: Vec::new() }
  }

  /// Create a runner with all built-in providers
  pub fn from_registry() -> Self {
    Self {
      providers: super::registry(),
    }
  }

  /// Add a provider to the runner
  pub fn add_provider(&mut self, provider: Arc<dyn CheckProvider>) {
    self.providers.push(provider);
  }

  /// Get all registered providers
  pub fn providers(&self) -> &[Arc<dyn CheckProvider>] {
    &self.providers
  }

  /// Run every applicable provider and collect all results
  ///
  /// A provider is applicable when it declares `Generic` or the detected
  /// language. Results preserve provider order, then result order within a
  /// provider.
  pub fn run_all(&self, config: &ChiaConfig, project_root: &Path, language: Option<Language>) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for provider in &self.providers {
      if !applies(provider.languages(), language) {
        tracing::debug!(check = provider.name(), "skipped: language does not match");
        continue;
      }

      tracing::debug!(check = provider.name(), "running");
      let outcome = match missing_dependency(provider.as_ref()) {
        Some(err) => Err(err),
        None => provider.run(config, project_root),
      };

      match outcome {
        Ok(mut found) => results.append(&mut found),
        Err(err) => {
          // Failure becomes data; sibling providers still run
          results.push(CheckResult::error(format!("{}: {}", provider.name(), err)));
        }
      }
    }

    results
  }
}

impl Default for CheckRunner {
  fn default() -> Self {
    Self::new()
  }
}

/// Whether a provider's declared languages match the detected one
fn applies(languages: &[Language], detected: Option<Language>) -> bool {
  languages.contains(&Language::Generic) || detected.is_some_and(|l| languages.contains(&l))
}

/// First declared binary that is not resolvable on PATH
fn missing_dependency(provider: &dyn CheckProvider) -> Option<CheckError> {
  provider
    .dependencies()
    .iter()
    .find(|binary| !binary_on_path(binary))
    .map(|binary| CheckError::DependencyMissing {
      binary: binary.to_string(),
    })
}

/// Resolve a binary name against the PATH directories
pub fn binary_on_path(binary: &str) -> bool {
  let Some(path) = std::env::var_os("PATH") else {
    return false;
  };
  std::env::split_paths(&path).any(|dir| dir.join(binary).is_file())
}
