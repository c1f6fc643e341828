//! Spell check provider
//!
//! Enumerates candidate files under the project root, extracts the natural
//! language relevant to each filetype and surfaces every flagged token as a
//! warning. Narrowing to the files of the last commit is best-effort: any
//! git failure silently widens the scan to all candidates.

mod extract;
mod speller;

pub use speller::{AspellSpeller, Speller};

use super::provider::{CheckProvider, CheckResult};
use crate::core::config::{ChiaConfig, SpellCheckConfig};
use crate::core::error::CheckError;
use crate::core::vcs::SystemGit;
use crate::language::Language;
use crate::ui::progress::ScanProgress;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions with a registered extractor
const SUPPORTED_EXTENSIONS: &[&str] = &["swift", "md"];

/// Checks comments and prose for misspelled words
pub struct SpellCheck;

impl CheckProvider for SpellCheck {
  fn name(&self) -> &'static str {
    "spellcheck"
  }

  fn languages(&self) -> &'static [Language] {
    &[Language::Generic]
  }

  fn dependencies(&self) -> &'static [&'static str] {
    &[AspellSpeller::BINARY]
  }

  fn run(&self, config: &ChiaConfig, project_root: &Path) -> Result<Vec<CheckResult>, CheckError> {
    let spell_config = config.spell_check.clone().unwrap_or_default();
    let speller = AspellSpeller::new(spell_config.ignored_words.iter().cloned());
    Ok(run_with(&spell_config, project_root, &speller))
  }
}

/// Run the scan with an injected speller (tests use stubs)
pub(crate) fn run_with(config: &SpellCheckConfig, project_root: &Path, speller: &dyn Speller) -> Vec<CheckResult> {
  let latest_files = if config.only_latest_files {
    // Degraded mode on any git error: check all files instead
    SystemGit::open(project_root)
      .and_then(|git| git.changed_files_since_previous_commit())
      .ok()
  } else {
    None
  };

  let files = candidate_files(project_root, latest_files.as_deref(), &config.ignored_paths);

  let progress = ScanProgress::new();
  let bar = progress.add_bar(files.len(), "spellcheck");

  let per_file: Vec<Vec<CheckResult>> = files
    .par_iter()
    .map(|path| {
      let results = analyse(path, speller);
      progress.inc(&bar);
      results
    })
    .collect();

  per_file.into_iter().flatten().collect()
}

/// Candidate files: supported extension, inside the latest-files narrowing
/// (when available) and not matching any ignored path
fn candidate_files(project_root: &Path, latest_files: Option<&[String]>, ignored_paths: &[String]) -> Vec<PathBuf> {
  WalkDir::new(project_root)
    .sort_by_file_name()
    .into_iter()
    .filter_map(|entry| entry.ok())
    .filter(|entry| entry.file_type().is_file())
    .map(|entry| entry.into_path())
    .filter(|path| {
      path
        .extension()
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
        .unwrap_or(false)
    })
    .filter(|path| {
      let Some(latest) = latest_files else {
        return true;
      };
      let path_str = path.to_string_lossy();
      latest.iter().any(|changed| path_str.contains(changed.as_str()))
    })
    .filter(|path| {
      let path_str = path.to_string_lossy();
      !ignored_paths.iter().any(|ignored| path_str.contains(ignored.as_str()))
    })
    .collect()
}

/// Analyse one file: extract text units, run the speller, map findings
fn analyse(path: &Path, speller: &dyn Speller) -> Vec<CheckResult> {
  let units = match extract::kind_for(path) {
    extract::Kind::Skip => return Vec::new(),
    extract::Kind::Unsupported(ext) => {
      return vec![CheckResult::warning(format!("No parser found for filetype '{}'", ext))];
    }
    extract::Kind::Swift => match fs::read_to_string(path) {
      Ok(content) => extract::swift_comments(&content),
      Err(e) => {
        return vec![
          CheckResult::warning(format!("Could not parse '{}'", path.display()))
            .with_metadata("error", e.to_string()),
        ];
      }
    },
    extract::Kind::Markdown => match fs::read_to_string(path) {
      Ok(content) => extract::markdown_prose(&content),
      Err(_) => return Vec::new(),
    },
  };

  if units.is_empty() {
    return Vec::new();
  }

  match speller.misspelled(&units.join("\n")) {
    Ok(words) => words
      .into_iter()
      .map(|word| CheckResult::warning(format!("Misspelled: '{}' in '{}'", word, path.display())))
      .collect(),
    Err(e) => vec![
      CheckResult::warning(format!("Could not spell check '{}'", path.display()))
        .with_metadata("error", e.to_string()),
    ],
  }
}
