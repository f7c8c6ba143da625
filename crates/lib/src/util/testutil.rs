//! Test utilities for nobuild-lib.
//!
//! Stub compilers are small shell scripts written into a temporary directory.
//! They stand in for `gcc` so tests can control the exit status and inspect
//! the arguments the engine passed.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

const ARGS_FILE: &str = "args";

/// An executable script standing in for a compiler.
pub struct StubCompiler {
  dir: TempDir,
  path: PathBuf,
}

impl StubCompiler {
  /// A stub running `script` with `/bin/sh`.
  pub fn with_script(script: &str) -> Self {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cc");
    fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    Self { dir, path }
  }

  /// A stub that ignores its arguments and exits with `code`.
  pub fn exiting(code: i32) -> Self {
    Self::with_script(&format!("exit {}", code))
  }

  /// A stub that writes each argument on its own line, then exits 0.
  pub fn recording() -> Self {
    let stub = Self::with_script("");
    let args = stub.dir.path().join(ARGS_FILE);
    fs::write(
      &stub.path,
      format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n", args.display()),
    )
    .unwrap();
    stub
  }

  /// Absolute path to the script, usable as a compiler command.
  pub fn command(&self) -> &str {
    self.path.to_str().unwrap()
  }

  /// Arguments seen by a [`StubCompiler::recording`] stub, program name excluded.
  pub fn recorded_args(&self) -> Vec<String> {
    fs::read_to_string(self.dir.path().join(ARGS_FILE))
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }
}
