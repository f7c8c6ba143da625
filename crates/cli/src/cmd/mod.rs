mod build;
mod info;
mod show;

use anyhow::{Context, Result};
use clap::Args;

use nobuild_lib::compiler::Compiler;
use nobuild_lib::rule::BuildRule;

pub use build::cmd_build;
pub use info::cmd_info;
pub use show::cmd_show;

use crate::output::print_warning;

/// Pieces of a build rule, shared by `build` and `show`.
#[derive(Args, Debug)]
pub struct RuleArgs {
  /// Compiler executable
  #[arg(long = "cc", env = "CC", default_value = "cc", value_name = "COMPILER")]
  pub compiler: String,

  /// Compiler flag, in order (repeatable)
  #[arg(short = 'f', long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
  pub flags: Vec<String>,

  /// Output path passed after -o
  #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
  pub output: String,

  /// Target source file
  pub target: String,

  /// Dependency files, in order
  #[arg(required = true, num_args = 1..)]
  pub dependencies: Vec<String>,
}

impl RuleArgs {
  /// Assemble the rule, warning about truncated names.
  pub fn into_rule(self) -> Result<BuildRule> {
    let mut compiler = Compiler::new();
    if compiler.set_command(&self.compiler).is_truncated() {
      print_warning(&format!("compiler name truncated to {:?}", compiler.command()));
    }

    let rule = BuildRule::builder()
      .compiler(compiler)
      .flags(self.flags)
      .target(self.target)
      .dependencies(self.dependencies)
      .output(self.output.clone())
      .build()
      .context("Invalid build rule")?;

    if rule.output() != self.output {
      print_warning(&format!("output path truncated to {:?}", rule.output()));
    }

    Ok(rule)
  }
}
