//! Integration tests for the language-detection-only mode

use crate::helpers::{combined_output, run_chia, TestProject};
use anyhow::Result;

#[test]
fn test_language_detection_prints_the_language_and_skips_checks() -> Result<()> {
  // No LICENSE: any check running would fail the run
  let project = TestProject::new()?;
  project.write_file("Package.swift", "// swift-tools-version:5.1\n")?;

  let output = run_chia(&project.path, &["--language-detection"])?;

  let text = combined_output(&output);
  assert_eq!(output.status.code(), Some(0));
  assert!(text.contains("Language: Swift"), "output: {}", text);
  assert!(!text.contains("no LICENSE file"), "checks must be skipped: {}", text);
  Ok(())
}

#[test]
fn test_language_detection_reports_when_nothing_matches() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("README.md", "# just a readme\n")?;

  let output = run_chia(&project.path, &["--language-detection"])?;

  assert_eq!(output.status.code(), Some(0));
  assert!(combined_output(&output).contains("No language detected"));
  Ok(())
}

#[test]
fn test_language_detection_of_a_rust_project() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("Cargo.toml", "[package]\nname = \"x\"\n")?;

  let output = run_chia(&project.path, &["--language-detection"])?;

  assert!(combined_output(&output).contains("Language: Rust"));
  Ok(())
}
