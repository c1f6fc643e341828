//! Error types for chia with contextual messages and a fatal/per-check split
//!
//! Only configuration resolution is allowed to abort the run; every check
//! failure is converted into an error-severity result by the runner.

use std::fmt;
use std::io;

/// Result type alias for chia
pub type ChiaResult<T> = Result<T, ChiaError>;

/// Main error type for chia
#[derive(Debug)]
pub enum ChiaError {
  /// Configuration resolution errors (the only fatal category)
  Config(ConfigError),

  /// Check execution errors
  Check(CheckError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message { message: String, context: Option<String> },
}

impl ChiaError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ChiaError::Message {
      message: msg.into(),
      context: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ChiaError::Message { message, context } => ChiaError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      other => ChiaError::Message {
        message: other.to_string(),
        context: Some(ctx_str),
      },
    }
  }
}

impl fmt::Display for ChiaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChiaError::Config(e) => write!(f, "{}", e),
      ChiaError::Check(e) => write!(f, "{}", e),
      ChiaError::Io(e) => write!(f, "I/O error: {}", e),
      ChiaError::Message { message, context } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ChiaError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ChiaError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ChiaError {
  fn from(err: io::Error) -> Self {
    ChiaError::Io(err)
  }
}

impl From<String> for ChiaError {
  fn from(msg: String) -> Self {
    ChiaError::message(msg)
  }
}

impl From<&str> for ChiaError {
  fn from(msg: &str) -> Self {
    ChiaError::message(msg)
  }
}

impl From<ConfigError> for ChiaError {
  fn from(err: ConfigError) -> Self {
    ChiaError::Config(err)
  }
}

impl From<CheckError> for ChiaError {
  fn from(err: CheckError) -> Self {
    ChiaError::Check(err)
  }
}

impl From<reqwest::Error> for ChiaError {
  fn from(err: reqwest::Error) -> Self {
    ChiaError::message(format!("HTTP error: {}", err))
  }
}

impl From<serde_yaml::Error> for ChiaError {
  fn from(err: serde_yaml::Error) -> Self {
    ChiaError::message(format!("YAML parse error: {}", err))
  }
}

/// Configuration-related errors
///
/// An explicitly supplied config source that cannot be resolved aborts the
/// whole run before any check executes.
#[derive(Debug)]
pub enum ConfigError {
  /// The supplied path or URL could not be resolved to a parseable config
  NotFound { source: String, reason: String },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { source, reason } => {
        write!(f, "Could not resolve a config at:\n{}\n{}", source, reason)
      }
    }
  }
}

impl std::error::Error for ConfigError {}

/// Failure kinds a single check can produce
///
/// These never abort the run; the runner converts them into error-severity
/// results so sibling checks still execute.
#[derive(Debug)]
pub enum CheckError {
  /// A required external binary is not resolvable on PATH
  DependencyMissing { binary: String },

  /// A secondary config (e.g. a linting rules file) could not be fetched
  ConfigNotFound,

  /// The check itself failed, with an optional underlying cause
  CheckFailed { context: String, source: Option<String> },
}

impl CheckError {
  /// Create a `CheckFailed` without an underlying cause
  pub fn failed(context: impl Into<String>) -> Self {
    CheckError::CheckFailed {
      context: context.into(),
      source: None,
    }
  }

  /// Create a `CheckFailed` with an underlying cause attached
  pub fn failed_with(context: impl Into<String>, source: impl Into<String>) -> Self {
    CheckError::CheckFailed {
      context: context.into(),
      source: Some(source.into()),
    }
  }
}

impl fmt::Display for CheckError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CheckError::DependencyMissing { binary } => {
        write!(f, "Could not find dependency '{}' on PATH", binary)
      }
      CheckError::ConfigNotFound => {
        write!(f, "Could not find the configured check config")
      }
      CheckError::CheckFailed { context, source } => {
        write!(f, "Check failed: {}", context)?;
        if let Some(cause) = source {
          write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for CheckError {}

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ChiaResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ChiaResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ChiaError>,
{
  fn context(self, ctx: impl Into<String>) -> ChiaResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ChiaResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}
