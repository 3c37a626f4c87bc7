//! Test modules for the Lanai TST library.
//!
//! This module contains the crate-internal test suites, including:
//! - Unit tests for tree operations beyond the per-file smoke tests
//! - Property-based tests using proptest
//! - Parameterized scenario tests using test-case
//! - Test strategies shared across suites
//!
//! The test philosophy follows the project standards:
//! - Testing all edge cases named by the data structure's contract
//! - Property-based testing against simple reference models
//! - Scenario tests mirroring documented example behavior

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{entries_strategy, key_strategy, unicode_key_strategy};
