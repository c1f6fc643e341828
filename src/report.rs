//! Result aggregation and reporting
//!
//! The aggregate keeps provider order, counts severities and decides the
//! process exit status: failing iff at least one error-severity result
//! exists. Rendering goes through tracing events by default, or through an
//! Xcode-parsable line format when requested; neither affects check logic.

use crate::checks::{CheckResult, Severity};

/// Severity counts over all collected results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub errors: usize,
  pub warnings: usize,
  pub infos: usize,
}

impl Summary {
  /// Fold a result list into severity counts
  pub fn from_results(results: &[CheckResult]) -> Self {
    let mut summary = Summary::default();
    for result in results {
      match result.severity {
        Severity::Error => summary.errors += 1,
        Severity::Warning => summary.warnings += 1,
        Severity::Info => summary.infos += 1,
      }
    }
    summary
  }

  /// The run fails iff at least one error-severity result exists
  pub fn failed(&self) -> bool {
    self.errors > 0
  }
}

/// Hands results to the logging subsystem or to Xcode's build-log parser
pub struct Reporter {
  xcode: bool,
}

impl Reporter {
  pub fn new(xcode: bool) -> Self {
    Self { xcode }
  }

  /// Emit every result and a closing summary, returning the aggregate
  pub fn report(&self, results: &[CheckResult]) -> Summary {
    for result in results {
      if self.xcode {
        // `<severity>: <message>` is what Xcode picks up from build logs
        println!("{}: {}", xcode_severity(result.severity), render(result));
      } else {
        match result.severity {
          Severity::Error => tracing::error!("{}", render(result)),
          Severity::Warning => tracing::warn!("{}", render(result)),
          Severity::Info => tracing::info!("{}", render(result)),
        }
      }
    }

    let summary = Summary::from_results(results);
    if summary.failed() {
      tracing::error!(
        "Checks failed: {} error(s), {} warning(s)",
        summary.errors,
        summary.warnings
      );
    } else {
      tracing::info!("All checks passed: {} warning(s)", summary.warnings);
    }
    summary
  }
}

fn xcode_severity(severity: Severity) -> &'static str {
  match severity {
    Severity::Info => "note",
    Severity::Warning => "warning",
    Severity::Error => "error",
  }
}

fn render(result: &CheckResult) -> String {
  match &result.metadata {
    Some(metadata) => {
      let fields: Vec<String> = metadata.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
      format!("{} [{}]", result.message, fields.join(", "))
    }
    None => result.message.clone(),
  }
}
