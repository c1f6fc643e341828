//! chia: lightweight project health checker
//!
//! Given a project root, chia resolves a configuration (local file or remote
//! URL), detects the project language, runs the applicable check providers
//! (license presence, swiftlint, spell check) with per-provider fault
//! isolation, and folds every result into a single pass/fail exit status.

pub mod checks;
pub mod core;
pub mod language;
pub mod report;
pub mod ui;

pub use crate::checks::{CheckProvider, CheckResult, CheckRunner, Severity};
pub use crate::core::config::ChiaConfig;
pub use crate::core::error::{CheckError, ChiaError, ChiaResult};
pub use crate::language::Language;
pub use crate::report::{Reporter, Summary};
