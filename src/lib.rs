//! This crate exposes an unbalanced Binary Search Tree (BST) holding distinct values of any
//! totally ordered type, together with a small demo driver.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). [`Tree`] makes no attempt to keep the
//! height down, so inserting values in sorted order produces a tree of height
//! `N`. BSTs naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree; see [`Tree::iter`].
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [5, 1, 2, 3, 2, 6] {
//!     tree.insert(value);
//! }
//!
//! // The second `2` was rejected.
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6]);
//!
//! // Copies share nothing with the original.
//! let mut copy = tree.clone();
//! copy.insert(-1000);
//! assert!(!tree.find(&-1000));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod iter;
pub mod print;
pub mod tree;


pub use iter::Iter;
pub use print::Printer;
pub use tree::{Order, Tree};
