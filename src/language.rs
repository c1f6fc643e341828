//! Project language detection
//!
//! Detection is a fixed-priority, non-recursive scan for marker artifacts at
//! the project root. First match wins; no match yields `None`. `Generic` is
//! a capability marker for checks that apply to every project and is never
//! returned by detection.

use std::fmt;
use std::path::Path;

/// Primary ecosystem of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  Swift,
  Rust,
  Go,
  Node,
  Python,
  Ruby,
  Java,
  /// Applies regardless of the detected language
  Generic,
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Language::Swift => "Swift",
      Language::Rust => "Rust",
      Language::Go => "Go",
      Language::Node => "Node",
      Language::Python => "Python",
      Language::Ruby => "Ruby",
      Language::Java => "Java",
      Language::Generic => "Generic",
    };
    write!(f, "{}", name)
  }
}

/// Marker files checked in priority order, root only
const MARKERS: &[(&str, Language)] = &[
  ("Package.swift", Language::Swift),
  ("Cargo.toml", Language::Rust),
  ("go.mod", Language::Go),
  ("package.json", Language::Node),
  ("pyproject.toml", Language::Python),
  ("setup.py", Language::Python),
  ("requirements.txt", Language::Python),
  ("Gemfile", Language::Ruby),
  ("pom.xml", Language::Java),
  ("build.gradle", Language::Java),
  ("build.gradle.kts", Language::Java),
];

impl Language {
  /// Detect the project language from marker artifacts at the root
  pub fn detect(project_root: &Path) -> Option<Language> {
    // Xcode project bundles are directories, so they need their own scan.
    // They rank with Package.swift at the top of the priority order.
    if project_root.join("Package.swift").is_file() || has_xcodeproj(project_root) {
      return Some(Language::Swift);
    }

    MARKERS
      .iter()
      .find(|(marker, _)| project_root.join(marker).is_file())
      .map(|(_, language)| *language)
  }
}

fn has_xcodeproj(project_root: &Path) -> bool {
  let Ok(entries) = std::fs::read_dir(project_root) else {
    return false;
  };
  entries
    .filter_map(|e| e.ok())
    .any(|e| e.file_name().to_string_lossy().ends_with(".xcodeproj"))
}
