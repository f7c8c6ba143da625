//! Serialization of a build rule into a process argument vector.

use std::fmt;

use serde::Serialize;

use crate::consts::OUTPUT_FLAG;
use crate::rule::{BuildRule, RuleError};

/// Slots every command line has besides flags and dependencies:
/// compiler, output flag, output path, target.
const FIXED_SLOTS: usize = 4;

/// The ordered arguments of one compiler invocation.
///
/// Layout: `<compiler> <flags...> -o <output> <target> <dependencies...>`.
/// The argument vector handed to the OS is terminated by the spawn primitive
/// itself, so [`CommandLine::len`] counts real arguments only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandLine {
  argv: Vec<String>,
}

impl CommandLine {
  /// Number of arguments `rule` serializes to.
  pub fn arg_count(rule: &BuildRule) -> usize {
    let flags = rule.compiler().map_or(0, |cc| cc.flags().len());
    FIXED_SLOTS + flags + rule.dependencies().len()
  }

  /// Validate `rule` and lay out its arguments.
  pub fn from_rule(rule: &BuildRule) -> Result<Self, RuleError> {
    rule.validate()?;
    let (Some(compiler), Some(target)) = (rule.compiler(), rule.target()) else {
      return Err(RuleError::MissingCompiler);
    };

    let mut argv = Vec::with_capacity(Self::arg_count(rule));
    argv.push(compiler.command().to_string());
    argv.extend(compiler.flags().names().map(str::to_string));
    argv.push(OUTPUT_FLAG.to_string());
    argv.push(rule.output().to_string());
    argv.push(target.name().to_string());
    argv.extend(rule.dependencies().names().map(str::to_string));

    debug_assert_eq!(argv.len(), Self::arg_count(rule));
    Ok(CommandLine { argv })
  }

  /// The executable to run.
  pub fn program(&self) -> &str {
    &self.argv[0]
  }

  /// Everything after the program name.
  pub fn args(&self) -> &[String] {
    &self.argv[1..]
  }

  pub fn argv(&self) -> &[String] {
    &self.argv
  }

  pub fn len(&self) -> usize {
    self.argv.len()
  }

  pub fn is_empty(&self) -> bool {
    self.argv.is_empty()
  }
}

impl fmt::Display for CommandLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.argv.join(" "))
  }
}
