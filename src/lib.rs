//! Lanai TST Library
//!
//! This library contains the Lanai Ternary Search Tree, an in-memory
//! associative data structure mapping string keys to arbitrary values.
//! Beyond exact lookup it answers longest-stored-prefix queries,
//! single-character wildcard pattern queries, and ordered enumeration.
//! The library is designed to be embedded by other projects; it carries
//! no runtime of its own.
//!
//! # Architecture
//!
//! The Lanai TST is designed with the following principles in mind:
//! - Strict component boundaries
//! - Total operations: no failure modes beyond normal control flow
//! - Iterative traversal and teardown, bounded stack usage on deep trees
//! - Comprehensive unit, property and integration test coverage

// Re-export public modules
pub mod data_structures;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai TST library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
