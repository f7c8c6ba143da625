//! Build rule definition and assembly.
//!
//! A build rule describes exactly one compilation: which compiler to run,
//! with which flags, on which target and dependencies, writing which output.
//!
//! # Completeness
//!
//! A rule is only executable once it holds a compiler, a target and at least
//! one dependency. Both assembly entry points reject partial configuration:
//! - [`BuildRule::assemble`] leaves the rule untouched on failure
//! - [`RuleBuilder::build`] produces no rule on failure
//!
//! # Submodules
//!
//! - [`builder`] - Step-by-step construction of a rule

pub mod builder;
mod types;

pub use builder::RuleBuilder;
pub use types::*;
