//! This crate exposes an ordered set built on an unbalanced Binary Search Tree (BST) whose
//! nodes know their parent, so the tree can be walked in order one node at a time.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
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
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does no balancing, so inserting values
//! in sorted order gives a tree whose height equals its length.
//!
//! ## Cursors
//!
//! Visiting the left subtree, then the subtree root, then the right subtree gives sorted
//! iteration. Here every `Node` also points at its parent, which lets it find the `Node` after
//! it (its "successor") without any extra bookkeeping. A [`Cursor`] is just a pointer to one
//! `Node` (or to nothing, for the end of the tree) that moves by following successors.
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! let mut cursor = tree.find(&4);
//! cursor.advance().unwrap();
//! assert_eq!(cursor.get(), Ok(&5));
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod error;
mod node;
pub mod tree;

pub use cursor::{Cursor, Iter};
pub use error::{Error, Result};
pub use tree::Tree;
