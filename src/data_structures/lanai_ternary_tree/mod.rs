// Copyright (c) 2025 Lanai TST Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Ternary Search Tree.
//!
//! A ternary search tree maps string keys to values through per-character
//! nodes with three children each (less/equal/greater), trading a little
//! comparison overhead per character for far lower memory use than one
//! child slot per alphabet symbol. On top of exact lookup this gives two
//! queries a hash map cannot answer: the longest stored key that prefixes
//! a probe string, and matching against patterns with single-character
//! wildcards.
//!
//! # Features
//!
//! - Exact lookup, insertion with overwrite, and ordered enumeration.
//! - Longest-stored-prefix queries over a probe string.
//! - Wildcard pattern matching (`*` and `.` match any single code point),
//!   with results sorted ascending by contract.
//! - Code-point-aware key handling, correct for multi-byte characters.
//! - Iterative traversal and teardown; deep trees cannot exhaust the call
//!   stack.
//! - Total API: empty or missing inputs yield "no match" values, never
//!   errors. Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use lanai_tst_lib::data_structures::lanai_ternary_tree::LanaiTernaryTree;
//!
//! let mut tree = LanaiTernaryTree::new();
//! tree.put("Hello", "World");
//! tree.put("Hilly", "World");
//! tree.put("Hello, bob", "World");
//!
//! assert_eq!(tree.get("Hello"), Some(&"World"));
//! assert_eq!(tree.wildcard_match("H*ll."), vec!["Hello", "Hilly"]);
//! assert_eq!(tree.longest_prefix("Hello, brandon"), "Hello");
//! ```
//!
//! # Longest-prefix dispatch
//!
//! A common use for the longest-prefix query is dispatching a path to the
//! most specific registered handler:
//!
//! ```
//! use lanai_tst_lib::data_structures::lanai_ternary_tree::LanaiTernaryTree;
//!
//! let mut handlers = LanaiTernaryTree::new();
//! handlers.put("/api", "api-root");
//! handlers.put("/api/users", "users");
//!
//! let route = handlers.longest_prefix("/api/users/42");
//! assert_eq!(route, "/api/users");
//! assert_eq!(handlers.get(route), Some(&"users"));
//! ```

// Module declarations
mod node;
mod tree;

// Re-exports
pub use tree::LanaiTernaryTree;
