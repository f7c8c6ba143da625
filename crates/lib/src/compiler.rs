//! Compiler descriptor: the executable to run and the flags passed to it.

use serde::Serialize;
use tracing::warn;

use crate::consts::COMMAND_CAPACITY;
use crate::item::{ItemError, ItemList};
use crate::util::bounded::{self, Truncation};

/// A compiler command paired with its flag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Compiler {
  command: String,
  flags: ItemList,
}

impl Compiler {
  /// An empty descriptor: no command, no flags.
  pub fn new() -> Self {
    Self::default()
  }

  /// A descriptor running `command`, truncated to [`COMMAND_CAPACITY`] if needed.
  pub fn with_command(command: &str) -> Self {
    let mut compiler = Self::new();
    compiler.set_command(command);
    compiler
  }

  /// Set the compiler command.
  ///
  /// Commands longer than `COMMAND_CAPACITY - 1` bytes are cut; the returned
  /// [`Truncation`] says whether that happened.
  pub fn set_command(&mut self, command: &str) -> Truncation {
    let (stored, truncation) = bounded::truncate_to_capacity(command, COMMAND_CAPACITY);
    if let Truncation::Truncated { original_len, stored_len } = truncation {
      warn!(original_len, stored_len, command = %stored, "compiler command truncated");
    }
    self.command = stored;
    truncation
  }

  pub fn command(&self) -> &str {
    &self.command
  }

  pub fn flags(&self) -> &ItemList {
    &self.flags
  }

  /// Append a single flag.
  pub fn add_flag(&mut self, flag: impl Into<String>) -> Result<(), ItemError> {
    self.flags.append(flag)
  }

  /// Replace the flag list, handing the previous one back.
  pub fn attach_flags(&mut self, flags: ItemList) -> ItemList {
    std::mem::replace(&mut self.flags, flags)
  }
}
