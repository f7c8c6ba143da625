//! nobuild-lib: Core types and logic for nobuild
//!
//! This crate describes and runs a single compiler invocation:
//! - `NamedItem` / `ItemList`: bounded names for flags and source files
//! - `Compiler`: the compiler command and its flags
//! - `BuildRule`: compiler, flags, target, dependencies and output path
//! - `execute`: turns a complete rule into a child process and reports the outcome
//!
//! ```no_run
//! use nobuild_lib::compiler::Compiler;
//! use nobuild_lib::execute::{ExecuteConfig, build_blocking};
//! use nobuild_lib::rule::BuildRule;
//!
//! let rule = BuildRule::builder()
//!   .compiler(Compiler::with_command("gcc"))
//!   .flags(["-Wall", "-Wextra"])
//!   .target("main.c")
//!   .dependencies(["foo.c", "bar.c"])
//!   .output("out")
//!   .build()?;
//!
//! let status = build_blocking(&rule, &ExecuteConfig::from_env())?;
//! assert!(status.is_success());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compiler;
pub mod consts;
pub mod execute;
pub mod item;
pub mod rule;
pub mod util;
