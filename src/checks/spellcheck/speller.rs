//! Spell-checking capability boundary
//!
//! The orchestrator never decides what counts as misspelled; it hands text
//! to a `Speller` seeded with the configured ignore list. Production uses
//! aspell in list mode, tests use stubs.

use crate::core::error::CheckError;
use std::collections::HashSet;
use std::io::Write;
use std::process::{Command, Stdio};

/// Spell-checking capability seeded with an ignore-word list
pub trait Speller: Send + Sync {
  /// Misspelled tokens in `text`, first occurrence order, deduplicated
  fn misspelled(&self, text: &str) -> Result<Vec<String>, CheckError>;
}

/// `aspell list` backed speller
pub struct AspellSpeller {
  ignored: HashSet<String>,
}

impl AspellSpeller {
  /// Binary the spell check provider declares as its dependency
  pub const BINARY: &'static str = "aspell";

  pub fn new(ignored_words: impl IntoIterator<Item = String>) -> Self {
    Self {
      ignored: ignored_words.into_iter().map(|w| w.to_lowercase()).collect(),
    }
  }
}

impl Speller for AspellSpeller {
  fn misspelled(&self, text: &str) -> Result<Vec<String>, CheckError> {
    let mut child = Command::new(Self::BINARY)
      .args(["list", "--lang=en"])
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::null())
      .spawn()
      .map_err(|e| CheckError::failed_with("could not launch aspell", e.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
      stdin
        .write_all(text.as_bytes())
        .map_err(|e| CheckError::failed_with("could not write to aspell", e.to_string()))?;
    }

    let output = child
      .wait_with_output()
      .map_err(|e| CheckError::failed_with("could not read aspell output", e.to_string()))?;

    if !output.status.success() {
      return Err(CheckError::failed(format!(
        "aspell exited with status {}",
        output.status.code().unwrap_or(-1)
      )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(dedupe_flagged(stdout.lines(), &self.ignored))
  }
}

/// Drop ignored words and repeated flags, preserving first-seen order
fn dedupe_flagged<'a>(flagged: impl Iterator<Item = &'a str>, ignored: &HashSet<String>) -> Vec<String> {
  let mut seen = HashSet::new();
  flagged
    .map(str::trim)
    .filter(|w| !w.is_empty())
    .filter(|w| !ignored.contains(&w.to_lowercase()))
    .filter(|w| seen.insert(w.to_lowercase()))
    .map(str::to_string)
    .collect()
}
