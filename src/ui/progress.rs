//! Progress indicators for long-running scans
//!
//! Uses `linya` for allocation-free progress bars. Thread-safe wrapper so
//! the parallel spell-check scan can tick from worker threads.

use linya::{Bar, Progress};
use std::sync::{Arc, Mutex};

/// Thread-safe progress container
#[derive(Clone)]
pub struct ScanProgress {
  progress: Arc<Mutex<Progress>>,
}

impl ScanProgress {
  /// Create a new progress container
  pub fn new() -> Self {
    Self {
      progress: Arc::new(Mutex::new(Progress::new())),
    }
  }

  /// Add a new bar with a label and total
  pub fn add_bar(&self, total: usize, label: impl Into<String>) -> Bar {
    let mut progress = self.progress.lock().unwrap();
    progress.bar(total, label.into())
  }

  /// Increment a bar (thread-safe)
  pub fn inc(&self, bar: &Bar) {
    let mut progress = self.progress.lock().unwrap();
    progress.inc_and_draw(bar, 1);
  }
}

impl Default for ScanProgress {
  fn default() -> Self {
    Self::new()
  }
}
