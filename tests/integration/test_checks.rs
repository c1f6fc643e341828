//! Integration tests for check execution and exit codes

use crate::helpers::{combined_output, run_chia, run_chia_with_path, FakeBinDir, TestProject};
use anyhow::Result;

#[cfg(unix)]
#[test]
fn test_missing_license_fails_the_run() -> Result<()> {
  let project = TestProject::new()?;
  let fake = FakeBinDir::new()?;
  fake.install("aspell", "cat > /dev/null")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  assert_eq!(output.status.code(), Some(1));
  assert!(combined_output(&output).contains("no LICENSE file"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_clean_project_exits_zero() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("README.md", "perfectly fine prose\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "cat > /dev/null")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  assert_eq!(output.status.code(), Some(0), "output: {}", combined_output(&output));
  assert!(combined_output(&output).contains("All checks passed"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_warnings_alone_do_not_fail_the_run() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("README.md", "prose with a mistakke in it\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "grep -o mistakke || true")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  let text = combined_output(&output);
  assert!(text.contains("Misspelled: 'mistakke'"), "output: {}", text);
  assert_eq!(output.status.code(), Some(0), "warnings must not fail: {}", text);
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_fenced_code_is_not_spell_checked() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("README.md", "clean prose\n```\na mistakke inside the fence\n```\nmore prose\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "grep -o mistakke || true")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  let text = combined_output(&output);
  assert!(!text.contains("Misspelled"), "fence content leaked: {}", text);
  assert_eq!(output.status.code(), Some(0));
  Ok(())
}

#[test]
fn test_missing_spell_dependency_is_an_error_result() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;

  // Empty PATH: aspell cannot be resolved, the license check still runs
  let fake = FakeBinDir::new()?;
  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_only()))?;

  let text = combined_output(&output);
  assert_eq!(output.status.code(), Some(1));
  assert!(text.contains("aspell"), "output: {}", text);
  assert!(!text.contains("no LICENSE file"), "license check must pass: {}", text);
  Ok(())
}

#[test]
fn test_xcode_output_renders_parsable_lines() -> Result<()> {
  let project = TestProject::new()?;
  let fake = FakeBinDir::new()?;

  let output = run_chia_with_path(&project.path, &["--xcode"], Some(&fake.path_only()))?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.lines().any(|l| l.starts_with("error: ")), "stdout: {}", stdout);
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_swiftlint_violations_fail_a_swift_project() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("Package.swift", "// swift-tools-version:5.1\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "cat > /dev/null")?;
  fake.install("swiftlint", "echo 'violationz found' >&2; exit 2")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  let text = combined_output(&output);
  assert_eq!(output.status.code(), Some(1));
  assert!(text.contains("swiftlint"), "output: {}", text);
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_swiftlint_rules_file_is_materialized_and_removed() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("Package.swift", "// swift-tools-version:5.1\n")?;
  project.write_file("rules.yml", "line_length: 200\n")?;
  project.write_file(".chia.yml", "swiftLint:\n  lintingRulesPath: rules.yml\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "cat > /dev/null")?;
  // The fake linter verifies the rules file is present while it runs
  fake.install("swiftlint", "test -f .swiftlint.yml || exit 3")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  assert_eq!(
    output.status.code(),
    Some(0),
    "rules file was not visible to the linter: {}",
    combined_output(&output)
  );
  assert!(
    !project.path.join(".swiftlint.yml").exists(),
    "temporary rules file must be removed after the run"
  );
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_broken_check_does_not_block_siblings() -> Result<()> {
  // swiftlint blows up, but the spell check still reports its finding
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;
  project.write_file("Package.swift", "// swift-tools-version:5.1\n")?;
  project.write_file("README.md", "a mistakke in prose\n")?;

  let fake = FakeBinDir::new()?;
  fake.install("aspell", "grep -o mistakke || true")?;
  fake.install("swiftlint", "exit 9")?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_with_system()))?;

  let text = combined_output(&output);
  assert_eq!(output.status.code(), Some(1));
  assert!(text.contains("swiftlint"), "output: {}", text);
  assert!(text.contains("Misspelled: 'mistakke'"), "sibling result missing: {}", text);
  Ok(())
}

#[test]
fn test_no_license_message_names_the_check() -> Result<()> {
  let project = TestProject::new()?;
  let fake = FakeBinDir::new()?;

  let output = run_chia_with_path(&project.path, &[], Some(&fake.path_only()))?;

  assert!(combined_output(&output).contains("license"));
  Ok(())
}

#[test]
fn test_run_outside_terminal_still_works() -> Result<()> {
  // Smoke test with the ambient PATH: whatever tools exist, the process
  // must terminate with a well-defined exit code
  let project = TestProject::new()?;
  project.write_file("LICENSE", "MIT")?;

  let output = run_chia(&project.path, &[])?;
  assert!(matches!(output.status.code(), Some(0) | Some(1)));
  Ok(())
}
