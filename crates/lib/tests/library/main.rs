//! Integration tests for nobuild-lib.


mod build_tests;
mod rule_tests;
