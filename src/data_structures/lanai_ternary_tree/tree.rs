// Copyright (c) 2025 Lanai TST Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the Lanai Ternary Search Tree.

use tracing::trace;

use crate::data_structures::lanai_ternary_tree::node::TernaryNode;

/// A ternary search tree mapping string keys to values.
///
/// The Lanai Ternary Search Tree stores keys as chains of per-code-point
/// nodes: at every node a key's current code point is compared against the
/// node's discriminator and the search continues into the `low`, `high` or
/// `mid` subtree. This gives trie-like lookup without one child slot per
/// alphabet symbol, which keeps memory use low on sparse alphabets.
///
/// All operations are total: empty keys and missing keys produce the
/// operation's "no match" value rather than an error. Keys are sequences
/// of Unicode code points, so multi-byte characters are handled correctly.
/// Traversal and teardown are iterative, so deep or badly unbalanced trees
/// cannot exhaust the call stack.
///
/// The tree is not internally synchronized; callers that share one across
/// threads must impose their own locking around the whole structure.
///
/// # Type Parameters
///
/// * `V` - The type of values stored in the tree.
///
/// # Examples
///
/// ```
/// use lanai_tst_lib::data_structures::lanai_ternary_tree::LanaiTernaryTree;
///
/// let mut tree = LanaiTernaryTree::new();
/// tree.put("route/home", 1);
/// tree.put("route/about", 2);
///
/// assert_eq!(tree.get("route/home"), Some(&1));
/// assert_eq!(tree.longest_prefix("route/home/index"), "route/home");
/// assert_eq!(tree.wildcard_match("route/h*me"), vec!["route/home".to_string()]);
/// ```
#[derive(Debug)]
pub struct LanaiTernaryTree<V> {
    /// Root of the node forest; `None` while no key has been stored
    root: Option<Box<TernaryNode<V>>>,

    /// Number of distinct keys currently stored
    size: usize,
}

impl<V> LanaiTernaryTree<V> {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of distinct keys stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// Nodes are created on demand as the descent walks past the end of
    /// any existing chain. Re-inserting an existing key overwrites its
    /// value and leaves the tree shape untouched. The empty key is never
    /// stored; putting it is a silent no-op.
    ///
    /// Complexity: O(key length) expected; no rebalancing is performed, so
    /// pathological insertion orders can degrade the per-character sibling
    /// chains.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    pub fn put<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut chars = key.chars();
        let mut current = match chars.next() {
            Some(first) => first,
            None => return,
        };

        let mut link = &mut self.root;
        loop {
            let node = link.get_or_insert_with(|| Box::new(TernaryNode::new(current)));
            if current < node.character {
                link = &mut node.low;
            } else if current > node.character {
                link = &mut node.high;
            } else if let Some(next) = chars.next() {
                current = next;
                link = &mut node.mid;
            } else {
                if !node.terminal {
                    node.terminal = true;
                    self.size += 1;
                    trace!(key, size = self.size, "stored new key");
                }
                node.value = Some(value);
                return;
            }
        }
    }

    /// Retrieves the value stored for a key.
    ///
    /// Returns `None` for keys that were never inserted, including the
    /// empty key.
    ///
    /// Complexity: O(key length) expected.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut chars = key.chars();
        let mut current = chars.next()?;
        let mut node = self.root.as_deref()?;

        loop {
            if current < node.character {
                node = node.low.as_deref()?;
            } else if current > node.character {
                node = node.high.as_deref()?;
            } else if let Some(next) = chars.next() {
                current = next;
                node = node.mid.as_deref()?;
            } else if node.terminal {
                return node.value.as_ref();
            } else {
                return None;
            }
        }
    }

    /// Returns `true` if the key is stored in the tree.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Returns the longest prefix of `query` that is itself a stored key.
    ///
    /// The walk follows the same decision chain as [`get`](Self::get) and
    /// records the end of every terminal node met along the exact-match
    /// chain; the deepest one wins. Returns the empty string when no
    /// stored key is a prefix of the query.
    ///
    /// Complexity: O(query length) expected.
    pub fn longest_prefix<'q>(&self, query: &'q str) -> &'q str {
        let mut best = 0;
        let mut chars = query.char_indices();
        let mut current = match chars.next() {
            Some(c) => c,
            None => return "",
        };
        let mut node = match self.root.as_deref() {
            Some(n) => n,
            None => return "",
        };

        loop {
            let (pos, ch) = current;
            let next_node = if ch < node.character {
                node.low.as_deref()
            } else if ch > node.character {
                node.high.as_deref()
            } else {
                if node.terminal {
                    // byte offset past this code point, so slicing below
                    // stays on a character boundary for multi-byte keys
                    best = pos + ch.len_utf8();
                }
                current = match chars.next() {
                    Some(c) => c,
                    None => break,
                };
                node.mid.as_deref()
            };
            match next_node {
                Some(n) => node = n,
                None => break,
            }
        }

        &query[..best]
    }

    /// Returns every stored key matching the pattern, sorted ascending.
    ///
    /// The wildcard characters `*` and `.` each match any single code
    /// point at their position; every other pattern character requires
    /// exact equality. A key matches only when the whole pattern is
    /// consumed on its final character, so patterns shorter than a key
    /// never match it. Returns an empty vector for the empty pattern.
    ///
    /// Wildcard positions must explore all three subtrees, so this is the
    /// one query that can branch; the search runs on an explicit stack.
    /// The result is sorted lexicographically before returning, regardless
    /// of traversal order.
    pub fn wildcard_match<P>(&self, pattern: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let pattern: Vec<char> = pattern.as_ref().chars().collect();
        let mut matches = Vec::new();
        if pattern.is_empty() {
            return matches;
        }

        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0usize, String::new()));
        }

        while let Some((node, index, prefix)) = stack.pop() {
            let ch = pattern[index];
            let wild = ch == '*' || ch == '.';

            if wild || ch < node.character {
                if let Some(low) = node.low.as_deref() {
                    stack.push((low, index, prefix.clone()));
                }
            }
            if wild || ch > node.character {
                if let Some(high) = node.high.as_deref() {
                    stack.push((high, index, prefix.clone()));
                }
            }
            if wild || ch == node.character {
                let mut key = prefix;
                key.push(node.character);
                if index + 1 == pattern.len() {
                    if node.terminal {
                        matches.push(key);
                    }
                } else if let Some(mid) = node.mid.as_deref() {
                    stack.push((mid, index + 1, key));
                }
            }
        }

        matches.sort_unstable();
        matches.dedup();
        matches
    }

    /// Visits every stored key-value pair in ascending key order.
    ///
    /// The traversal is in-order (low subtree, the node's own key if
    /// terminal, mid subtree, high subtree), reconstructing each key on
    /// the way down. Returning `false` from the visitor stops the
    /// traversal immediately. Each call walks the tree afresh; the
    /// enumeration is not resumable.
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V) -> bool,
    {
        enum Step<'a, V> {
            Descend(&'a TernaryNode<V>, String),
            Emit(&'a TernaryNode<V>, String),
        }

        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(Step::Descend(root, String::new()));
        }

        while let Some(step) = stack.pop() {
            match step {
                Step::Descend(node, prefix) => {
                    let mut key = prefix.clone();
                    key.push(node.character);

                    // pushed in reverse so they pop as: low, emit, mid, high
                    if let Some(high) = node.high.as_deref() {
                        stack.push(Step::Descend(high, prefix.clone()));
                    }
                    if let Some(mid) = node.mid.as_deref() {
                        stack.push(Step::Descend(mid, key.clone()));
                    }
                    if node.terminal {
                        stack.push(Step::Emit(node, key));
                    }
                    if let Some(low) = node.low.as_deref() {
                        stack.push(Step::Descend(low, prefix));
                    }
                }
                Step::Emit(node, key) => {
                    if let Some(value) = node.value.as_ref() {
                        if !visit(&key, value) {
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Discards every stored key and value, leaving the tree empty.
    ///
    /// The whole forest is released as a unit through the iterative
    /// teardown, never through recursive drops.
    pub fn clear(&mut self) {
        let dropped = self.size;
        Self::teardown(self.root.take());
        self.size = 0;
        trace!(dropped_keys = dropped, "cleared tree");
    }

    /// Releases a node forest iteratively.
    ///
    /// Children are detached onto a work list before their parent is
    /// dropped, so the drop depth stays constant no matter how deep or
    /// unbalanced the tree grew.
    fn teardown(root: Option<Box<TernaryNode<V>>>) {
        let mut stack = Vec::new();
        if let Some(node) = root {
            stack.push(node);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(low) = node.low.take() {
                stack.push(low);
            }
            if let Some(mid) = node.mid.take() {
                stack.push(mid);
            }
            if let Some(high) = node.high.take() {
                stack.push(high);
            }
        }
    }
}

impl<V> Default for LanaiTernaryTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LanaiTernaryTree<V> {
    fn drop(&mut self) {
        Self::teardown(self.root.take());
    }
}
