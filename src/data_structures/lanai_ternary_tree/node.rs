// Copyright (c) 2025 Lanai TST Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Ternary Search Tree.
//!
//! This module provides the TernaryNode structure used in the Lanai tree
//! implementation. Each node discriminates on a single Unicode code point
//! and owns up to three subtrees ordered relative to that code point.

/// A node in the Lanai Ternary Search Tree.
///
/// Each node represents one character position along some set of keys.
/// The `low` and `high` links form a binary-search-tree ordering over
/// sibling code points at the same key position, while `mid` continues
/// the keys that share `character` at this position. Terminal nodes carry
/// the value of the key that ends here.
#[derive(Debug)]
pub struct TernaryNode<V> {
    /// The code point this node discriminates on
    pub character: char,

    /// Subtree of keys whose code point at this position sorts before `character`
    pub low: Option<Box<TernaryNode<V>>>,

    /// Continuation of keys that share `character` at this position
    pub mid: Option<Box<TernaryNode<V>>>,

    /// Subtree of keys whose code point at this position sorts after `character`
    pub high: Option<Box<TernaryNode<V>>>,

    /// Whether a key ends exactly at this node
    pub terminal: bool,

    /// Value of the key ending here; `Some` exactly when `terminal` is true
    pub value: Option<V>,
}

impl<V> TernaryNode<V> {
    /// Creates a new non-terminal node discriminating on the given code point.
    pub fn new(character: char) -> Self {
        Self {
            character,
            low: None,
            mid: None,
            high: None,
            terminal: false,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node: TernaryNode<u32> = TernaryNode::new('a');

        assert_eq!(node.character, 'a');
        assert!(node.low.is_none());
        assert!(node.mid.is_none());
        assert!(node.high.is_none());
        assert!(!node.terminal);
        assert!(node.value.is_none());
    }

    #[test]
    fn test_node_links_are_owned() {
        let mut node: TernaryNode<u32> = TernaryNode::new('m');
        node.low = Some(Box::new(TernaryNode::new('a')));
        node.high = Some(Box::new(TernaryNode::new('z')));

        let low = node.low.as_deref().map(|n| n.character);
        let high = node.high.as_deref().map(|n| n.character);
        assert_eq!(low, Some('a'));
        assert_eq!(high, Some('z'));
    }
}
