//! Implementation of the `nob show` command.

use anyhow::{Context, Result};
use serde_json::json;

use nobuild_lib::execute::CommandLine;

use super::RuleArgs;
use crate::output::{OutputFormat, print_json};

pub fn cmd_show(args: RuleArgs, format: OutputFormat) -> Result<()> {
  let rule = args.into_rule()?;
  let line = CommandLine::from_rule(&rule).context("Invalid build rule")?;

  if format.is_json() {
    print_json(&json!({
      "argv": line,
      "argc": line.len(),
      "command": line.to_string(),
    }))?;
  } else {
    println!("{}", line);
  }

  Ok(())
}
