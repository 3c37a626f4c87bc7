//! Data structures for the Lanai TST library.
//!
//! This module contains the Lanai Ternary Search Tree and its supporting
//! types. All implementations adhere to the strict project requirements:
//! - No unsafe code
//! - Total operations over their input domain
//! - Iterative traversal with bounded stack usage

pub mod lanai_ternary_tree;

// Re-export common data structures
pub use lanai_ternary_tree::LanaiTernaryTree;
