//! Integration tests for configuration resolution

use crate::helpers::{combined_output, run_chia, run_chia_with_path, FakeBinDir, TestProject};
use anyhow::Result;

#[test]
fn test_unreachable_remote_config_is_fatal_and_skips_all_checks() -> Result<()> {
  // No LICENSE file: if any provider ran, the output would mention it
  let project = TestProject::new()?;

  let output = run_chia(&project.path, &["-c", "http://127.0.0.1:9/.chia.yml"])?;

  let text = combined_output(&output);
  assert_eq!(output.status.code(), Some(1));
  assert!(text.contains("Could not resolve a config"), "output: {}", text);
  assert!(!text.contains("no LICENSE file"), "providers must not run: {}", text);
  Ok(())
}

#[test]
fn test_missing_local_config_is_fatal() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_chia(&project.path, &["--config", "does-not-exist.yml"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(combined_output(&output).contains("Could not resolve a config"));
  Ok(())
}

#[test]
fn test_unparseable_explicit_config_is_fatal() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("broken.yml", "spellCheck: [unbalanced")?;

  let output = run_chia(&project.path, &["-c", "broken.yml"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(combined_output(&output).contains("Could not resolve a config"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_ignored_words_suppress_findings() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("README.md", "the word mistakke is fine here\n")?;
  project.write_file(".chia.yml", "spellCheck:\n  ignoredWords:\n    - mistakke\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "grep -o mistakke || true")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  let text = combined_output(&output);
  assert!(!text.contains("Misspelled"), "ignored word leaked: {}", text);
  assert_eq!(output.status.code(), Some(0));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_ignored_paths_exclude_files_from_the_scan() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("vendor/dep/README.md", "a mistakke in a vendored file\n")?;
  project.write_file(".chia.yml", "spellCheck:\n  ignoredPaths:\n    - vendor\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "grep -o mistakke || true")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  let text = combined_output(&output);
  assert!(!text.contains("Misspelled"), "ignored path leaked: {}", text);
  assert_eq!(output.status.code(), Some(0));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_invalid_default_config_degrades_instead_of_failing() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file(".chia.yml", "spellCheck: [this is not: a mapping")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "cat > /dev/null")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  assert_eq!(output.status.code(), Some(0), "output: {}", combined_output(&output));
  Ok(())
}
