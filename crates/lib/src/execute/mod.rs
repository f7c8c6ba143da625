//! Rule execution engine.
//!
//! Running a rule goes through these steps:
//! - validate that the rule has a compiler, a target and dependencies
//! - serialize it into a [`CommandLine`]
//! - spawn the compiler with the inherited environment and standard streams,
//!   optionally folding its stdout into stderr
//! - wait for that child and map its exit status to a [`BuildStatus`]
//!
//! One child is outstanding per call and the argument vector is allocated per
//! call. There is no timeout and no retry.

pub mod command;
pub mod types;

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, error, info};

use crate::rule::{BuildRule, RuleError};

pub use command::CommandLine;
pub use types::{BuildStatus, ExecuteConfig, ExecuteError, Termination};

/// Execute a build rule.
///
/// Returns [`ExecuteError::MalformedRule`] without spawning anything if the
/// rule is incomplete. Otherwise the compiler runs to completion and its
/// termination decides the [`BuildStatus`]; a compiler that cannot be started
/// is reported as [`Termination::SpawnFailed`].
pub async fn build(rule: &BuildRule, config: &ExecuteConfig) -> Result<BuildStatus, ExecuteError> {
  let line = CommandLine::from_rule(rule)?;

  if config.echo {
    println!("{}", line);
  }

  info!(compiler = %line.program(), output = %rule.output(), "building");
  debug!(argv = ?line.argv(), cwd = ?config.cwd, "spawning compiler");

  let mut command = Command::new(line.program());
  command.args(line.args());
  if let Some(cwd) = &config.cwd {
    command.current_dir(cwd);
  }
  if config.stdout_to_stderr {
    command.stdout(Stdio::from(std::io::stderr()));
  }

  let status = match command.status().await {
    Ok(exit) => BuildStatus::from(Termination::from(exit)),
    Err(err) => {
      error!(compiler = %line.program(), error = %err, "failed to start compiler");
      BuildStatus::Failed(Termination::SpawnFailed)
    }
  };

  info!(status = %status, output = %rule.output(), "build finished");
  Ok(status)
}

/// Execute a build rule, blocking the calling thread until the compiler exits.
///
/// Must not be called from within an async runtime.
pub fn build_blocking(rule: &BuildRule, config: &ExecuteConfig) -> Result<BuildStatus, ExecuteError> {
  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .map_err(ExecuteError::Runtime)?;
  rt.block_on(build(rule, config))
}

/// Render the command line `rule` would run, without running it.
pub fn render(rule: &BuildRule) -> Result<String, RuleError> {
  CommandLine::from_rule(rule).map(|line| line.to_string())
}
