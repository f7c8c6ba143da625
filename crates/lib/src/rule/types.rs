use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::compiler::Compiler;
use crate::consts::OUTPUT_CAPACITY;
use crate::item::{ItemError, ItemList, Object};
use crate::util::bounded::{self, Truncation};

/// Reasons a rule cannot be assembled or executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
  /// No compiler descriptor was supplied.
  #[error("rule has no compiler")]
  MissingCompiler,

  /// No target object was supplied.
  #[error("rule has no target")]
  MissingTarget,

  /// The dependency list is empty.
  #[error("rule has no dependencies")]
  NoDependencies,

  /// A flag, target or dependency name was rejected.
  #[error("invalid name: {0}")]
  InvalidName(#[from] ItemError),
}

/// The complete description of one compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildRule {
  compiler: Option<Compiler>,
  target: Option<Object>,
  dependencies: ItemList,
  output: String,
}

/// The owned pieces of a rule, returned by [`BuildRule::into_parts`].
#[derive(Debug)]
pub struct RuleParts {
  pub compiler: Option<Compiler>,
  pub target: Option<Object>,
  pub dependencies: ItemList,
  pub output: String,
}

impl BuildRule {
  /// An empty rule. It is incomplete until assembled.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn builder() -> super::RuleBuilder {
    super::RuleBuilder::new()
  }

  /// Fill the rule from its parts.
  ///
  /// `flags` replaces whatever flag list `compiler` already carries; the
  /// replaced flags are released. The output path is bounded by
  /// [`OUTPUT_CAPACITY`] and the returned [`Truncation`] reports whether it
  /// was cut.
  ///
  /// Fails with [`RuleError::NoDependencies`] if `dependencies` is empty, in
  /// which case the rule is left exactly as it was.
  pub fn assemble(
    &mut self,
    mut compiler: Compiler,
    flags: ItemList,
    target: Object,
    dependencies: ItemList,
    output: &str,
  ) -> Result<Truncation, RuleError> {
    if dependencies.is_empty() {
      return Err(RuleError::NoDependencies);
    }

    let discarded = compiler.attach_flags(flags);
    if !discarded.is_empty() {
      debug!(count = discarded.len(), "replacing flags already attached to compiler");
    }

    let (output, truncation) = bounded::truncate_to_capacity(output, OUTPUT_CAPACITY);
    if let Truncation::Truncated { original_len, stored_len } = truncation {
      warn!(original_len, stored_len, output = %output, "output path truncated");
    }

    self.compiler = Some(compiler);
    self.output = output;
    self.target = Some(target);
    self.dependencies = dependencies;

    Ok(truncation)
  }

  /// True if the rule holds a compiler, a target and at least one dependency.
  pub fn is_complete(&self) -> bool {
    self.validate().is_ok()
  }

  /// Check that the rule can be executed, naming the first missing piece.
  pub fn validate(&self) -> Result<(), RuleError> {
    if self.compiler.is_none() {
      return Err(RuleError::MissingCompiler);
    }
    if self.target.is_none() {
      return Err(RuleError::MissingTarget);
    }
    if self.dependencies.is_empty() {
      return Err(RuleError::NoDependencies);
    }
    Ok(())
  }

  pub fn compiler(&self) -> Option<&Compiler> {
    self.compiler.as_ref()
  }

  pub fn target(&self) -> Option<&Object> {
    self.target.as_ref()
  }

  pub fn dependencies(&self) -> &ItemList {
    &self.dependencies
  }

  pub fn output(&self) -> &str {
    &self.output
  }

  /// Give the owned substructures back to the caller.
  pub fn into_parts(self) -> RuleParts {
    RuleParts {
      compiler: self.compiler,
      target: self.target,
      dependencies: self.dependencies,
      output: self.output,
    }
  }
}
