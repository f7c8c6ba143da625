//! Types for rule execution.
//!
//! This module defines the error type, the outcome of a build and the
//! configuration of the execution engine.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use serde::Serialize;
use thiserror::Error;

use crate::consts::ECHO_ENV;
use crate::rule::RuleError;

/// Errors that prevent a build from being attempted at all.
///
/// A compiler that runs and fails is not an error: it is reported as
/// [`BuildStatus::Failed`].
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The rule is missing its compiler, target or dependencies.
  #[error("malformed rule: {0}")]
  MalformedRule(#[from] RuleError),

  /// The async runtime driving a blocking build could not be created.
  #[error("failed to start runtime: {0}")]
  Runtime(#[source] std::io::Error),
}

/// How the compiler process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Termination {
  /// The process exited on its own with this code.
  Exited(i32),
  /// The process was killed by this signal.
  Signaled(i32),
  /// The process could not be started.
  SpawnFailed,
  /// The platform reported neither an exit code nor a signal.
  Abnormal,
}

impl From<ExitStatus> for Termination {
  fn from(status: ExitStatus) -> Self {
    if let Some(code) = status.code() {
      return Termination::Exited(code);
    }

    #[cfg(unix)]
    {
      use std::os::unix::process::ExitStatusExt;
      if let Some(signal) = status.signal() {
        return Termination::Signaled(signal);
      }
    }

    Termination::Abnormal
  }
}

impl fmt::Display for Termination {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Termination::Exited(code) => write!(f, "exited with code {}", code),
      Termination::Signaled(signal) => write!(f, "terminated by signal {}", signal),
      Termination::SpawnFailed => write!(f, "could not be started"),
      Termination::Abnormal => write!(f, "ended abnormally"),
    }
  }
}

/// Outcome of running a build rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "termination")]
pub enum BuildStatus {
  /// The compiler exited with code 0.
  Succeeded,
  /// Anything else.
  Failed(Termination),
}

impl BuildStatus {
  pub fn is_success(self) -> bool {
    matches!(self, BuildStatus::Succeeded)
  }
}

impl From<Termination> for BuildStatus {
  fn from(termination: Termination) -> Self {
    match termination {
      Termination::Exited(0) => BuildStatus::Succeeded,
      other => BuildStatus::Failed(other),
    }
  }
}

impl fmt::Display for BuildStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildStatus::Succeeded => write!(f, "succeeded"),
      BuildStatus::Failed(termination) => write!(f, "failed: compiler {}", termination),
    }
  }
}

/// Configuration for rule execution.
#[derive(Debug, Clone, Default)]
pub struct ExecuteConfig {
  /// Print the assembled command line on stdout before running it.
  pub echo: bool,

  /// Working directory of the compiler. Inherited when `None`.
  pub cwd: Option<PathBuf>,

  /// Send the compiler's stdout to our stderr, keeping stdout free for
  /// machine-readable output.
  pub stdout_to_stderr: bool,
}

impl ExecuteConfig {
  /// Default configuration with `echo` taken from `NOBUILD_ECHO`.
  pub fn from_env() -> Self {
    let echo = std::env::var(ECHO_ENV)
      .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
      .unwrap_or(false);

    Self {
      echo,
      ..Self::default()
    }
  }
}
