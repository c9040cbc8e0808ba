//! This crate exposes an ordered Binary Search Tree (BST) with parent links,
//! along with the small linear containers it walks itself with.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)`. This tree does not
//! balance itself, so inserting ascending values produces a `height` of `N`.
//! [`Tree::from_sorted`] builds a tree of height `O(lg N)` in one go instead.
//!
//! Because every node also knows its parent, a node can be navigated from
//! directly: [`NodeRef::predecessor`], [`NodeRef::successor`],
//! [`NodeRef::depth`] and friends walk upwards without starting from the root.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let mut tree = Tree::from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.height(), 3);
//!
//! let three = tree.search(&3).unwrap();
//! assert_eq!(three.successor().map(|n| *n.value()), Some(4));
//! assert_eq!(three.depth(), 2);
//!
//! let id = three.id();
//! assert_eq!(tree.delete(id).map(|removed| removed.value), Some(3));
//! assert_eq!(tree.to_vec(), vec![1, 2, 4, 5, 6, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
mod error;
pub mod linear;
mod node;
mod traverse;
mod tree;


pub use error::BuildError;
pub use node::NodeRef;
pub use traverse::Iter;
pub use tree::{NodeId, Removed, Tree};
