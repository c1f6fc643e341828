//! Check providers and their runner
//!
//! All built-in checks implement the `CheckProvider` trait and are
//! registered once, in a fixed order, via `registry()`. Adding a check means
//! implementing the trait and appending it there.

mod license;
pub mod provider;
pub mod runner;
mod spellcheck;
mod swiftlint;

pub use license::LicenseCheck;
pub use provider::{CheckProvider, CheckResult, Severity};
pub use runner::CheckRunner;
pub use spellcheck::SpellCheck;
pub use swiftlint::SwiftLintCheck;

use std::sync::Arc;

/// Static ordered registry of all built-in check providers
///
/// Order matters only for deterministic output, not for correctness.
pub fn registry() -> Vec<Arc<dyn CheckProvider>> {
  vec![Arc::new(LicenseCheck), Arc::new(SwiftLintCheck), Arc::new(SpellCheck)]
}
