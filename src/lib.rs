//! This crate exposes a persistent ordered tree: a Binary Search Tree
//! (BST) in which operations that would normally modify the tree
//! instead return a new tree, leaving every previously obtained tree
//! untouched.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and sometimes has child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), and visiting the left
//! subtree, then the subtree root, then the right subtree yields the stored
//! values in ascending order.
//!
//! ## Persistence
//!
//! The tree here is additionally *persistent*: [`insert`][tree::Tree::insert]
//! rebuilds only the nodes on the path from the root to the insertion point
//! and shares every other node with the original tree by reference. Old
//! versions remain fully usable, and no operation ever mutates a node after
//! it has been constructed. Each value is held exactly once, so the tree
//! behaves as an ordered set rather than a map.
//!
//! No rebalancing is performed. Inserting values in ascending or descending
//! order degrades the height (and therefore every operation) to `O(n)`; that
//! is a property of the structure, not something the crate papers over.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;
