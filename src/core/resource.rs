//! Dual local/remote resource resolution
//!
//! The main config and the swiftlint rules file are fetched through the same
//! routine: scheme-qualified strings go over the network, everything else is
//! read from the local filesystem.

use crate::core::error::{ChiaError, ChiaResult, ResultExt};
use std::fs;
use std::path::PathBuf;

/// Where a user-supplied resource string points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
  /// Local filesystem path
  Local(PathBuf),
  /// Scheme-qualified remote URL (http/https)
  Remote(String),
}

impl Location {
  /// Classify a raw string by URL scheme sniffing
  pub fn parse(raw: &str) -> Location {
    if raw.starts_with("http://") || raw.starts_with("https://") {
      Location::Remote(raw.to_string())
    } else {
      Location::Local(PathBuf::from(raw))
    }
  }
}

/// Fetch the content behind a local path or remote URL
///
/// Blocking on purpose: the orchestrator suspends on network and subprocess
/// calls until they complete.
pub fn fetch(raw: &str) -> ChiaResult<Vec<u8>> {
  match Location::parse(raw) {
    Location::Remote(url) => {
      tracing::debug!(url = %url, "fetching remote resource");
      let response = reqwest::blocking::get(&url).with_context(|| format!("Failed to fetch {}", url))?;
      if !response.status().is_success() {
        return Err(ChiaError::message(format!(
          "Fetching {} returned HTTP status {}",
          url,
          response.status()
        )));
      }
      let bytes = response.bytes().with_context(|| format!("Failed to read body of {}", url))?;
      Ok(bytes.to_vec())
    }
    Location::Local(path) => {
      tracing::debug!(path = %path.display(), "reading local resource");
      fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
  }
}
