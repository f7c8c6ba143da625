//! Step-by-step construction of a [`BuildRule`].
//!
//! Names are validated when [`RuleBuilder::build`] runs, so the first invalid
//! name or missing piece is reported and no rule is produced.

use crate::compiler::Compiler;
use crate::item::{ItemList, NamedItem};

use super::{BuildRule, RuleError};

#[derive(Debug, Default)]
pub struct RuleBuilder {
  compiler: Option<Compiler>,
  flags: Option<Vec<String>>,
  target: Option<String>,
  dependencies: Vec<String>,
  output: String,
}

impl RuleBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn compiler(mut self, compiler: Compiler) -> Self {
    self.compiler = Some(compiler);
    self
  }

  /// Add a flag. Once any flag is given, it replaces the compiler's own list.
  pub fn flag(mut self, flag: impl Into<String>) -> Self {
    self.flags.get_or_insert_with(Vec::new).push(flag.into());
    self
  }

  pub fn flags<I, S>(mut self, flags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .flags
      .get_or_insert_with(Vec::new)
      .extend(flags.into_iter().map(Into::into));
    self
  }

  pub fn target(mut self, target: impl Into<String>) -> Self {
    self.target = Some(target.into());
    self
  }

  pub fn dependency(mut self, dependency: impl Into<String>) -> Self {
    self.dependencies.push(dependency.into());
    self
  }

  pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.dependencies.extend(dependencies.into_iter().map(Into::into));
    self
  }

  pub fn output(mut self, output: impl Into<String>) -> Self {
    self.output = output.into();
    self
  }

  pub fn build(self) -> Result<BuildRule, RuleError> {
    let mut compiler = self.compiler.ok_or(RuleError::MissingCompiler)?;
    let target = NamedItem::new(self.target.ok_or(RuleError::MissingTarget)?)?;
    let dependencies = ItemList::try_from_names(self.dependencies)?;
    let flags = match self.flags {
      Some(flags) => ItemList::try_from_names(flags)?,
      None => compiler.attach_flags(ItemList::new()),
    };

    let mut rule = BuildRule::new();
    rule.assemble(compiler, flags, target, dependencies, &self.output)?;
    Ok(rule)
  }
}
