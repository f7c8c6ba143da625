//! Shared utilities.
//!
//! The bounded-string length policy and test helpers.

pub mod bounded;

#[cfg(test)]
pub mod testutil;
