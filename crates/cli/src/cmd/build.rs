//! Implementation of the `nob build` command.
//!
//! Assembles a rule from the command line, runs the compiler and reports
//! whether the build succeeded.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use nobuild_lib::execute::{CommandLine, ExecuteConfig, build_blocking};

use super::RuleArgs;
use crate::output::{OutputFormat, format_duration, print_error, print_json, print_success};

/// Execute the build command.
///
/// Exits the process with status 1 if the compiler fails or cannot be started.
pub fn cmd_build(args: RuleArgs, echo: bool, dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
  let rule = args.into_rule()?;

  let mut config = ExecuteConfig::from_env();
  config.echo = (config.echo || echo) && !format.is_json();
  config.cwd = dir;
  config.stdout_to_stderr = format.is_json();

  let started = Instant::now();
  let status = build_blocking(&rule, &config).context("Build failed")?;
  let elapsed = started.elapsed();

  info!(status = %status, elapsed = ?elapsed, "done");

  if format.is_json() {
    let argv = CommandLine::from_rule(&rule).context("Invalid build rule")?;
    print_json(&json!({
      "argv": argv,
      "output": rule.output(),
      "success": status.is_success(),
      "status": status,
      "elapsed_ms": elapsed.as_millis() as u64,
    }))?;
  } else if status.is_success() {
    print_success(&format!(
      "Built {} in {}",
      rule.output(),
      format_duration(elapsed)
    ));
  } else {
    print_error(&format!("Build {}", status));
  }

  if !status.is_success() {
    std::process::exit(1);
  }

  Ok(())
}
