//! Positions inside a [`Tree`] and iteration over its elements.
//!
//! A [`Cursor`] is a single position: either an element of the tree or the "end" position one
//! past the last element. It moves with [`Cursor::advance`] and [`Cursor::retreat`] and hands
//! out the element it's on with [`Cursor::get`].
//!
//! [`Iter`] is the plain Rust iterator built from the same successor links, for use in `for`
//! loops and iterator chains.
//!
//! Both borrow the tree, so the borrow checker rules out using them after the tree has been
//! [cleared][Tree::clear] or otherwise mutated.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::Tree;

/// A position in a [`Tree`]: an element, or the end of the tree.
///
/// # Examples
///
/// ```
/// use bst_set::{Error, Tree};
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
///
/// let mut cursor = tree.begin();
/// assert_eq!(cursor.get(), Ok(&1));
///
/// cursor.advance().unwrap();
/// cursor.advance().unwrap();
/// assert_eq!(cursor.get(), Ok(&3));
///
/// cursor.advance().unwrap();
/// assert_eq!(cursor, tree.end());
/// assert_eq!(cursor.get(), Err(Error::DerefEnd));
/// assert_eq!(cursor.advance(), Err(Error::AdvanceEnd));
/// ```
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    node: Option<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, node: Option<&'a Node<T>>) -> Self {
        Self { tree, node }
    }

    /// Whether this is the end cursor, i.e. it doesn't point at an element.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the element this cursor points at.
    ///
    /// # Errors
    ///
    /// [`Error::DerefEnd`] if this is the end cursor.
    pub fn get(&self) -> Result<&'a T> {
        self.node.map(|n| &n.key).ok_or(Error::DerefEnd)
    }

    /// Moves to the next larger element, or to the end if this was the largest.
    ///
    /// # Errors
    ///
    /// [`Error::AdvanceEnd`] if this is already the end cursor. The cursor doesn't move.
    pub fn advance(&mut self) -> Result<()> {
        let node = self.node.ok_or(Error::AdvanceEnd)?;
        self.node = node.successor();
        Ok(())
    }

    /// Moves to the next smaller element. The end cursor moves to the largest element.
    ///
    /// ```
    /// use bst_set::{Error, Tree};
    ///
    /// let tree: Tree<_> = [2, 1].into_iter().collect();
    /// let mut cursor = tree.end();
    ///
    /// cursor.retreat().unwrap();
    /// assert_eq!(cursor.get(), Ok(&2));
    /// cursor.retreat().unwrap();
    /// assert_eq!(cursor.get(), Ok(&1));
    /// assert_eq!(cursor.retreat(), Err(Error::RetreatBegin));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::RetreatBegin`] if the cursor is on the smallest element or the tree is empty.
    /// The cursor doesn't move.
    pub fn retreat(&mut self) -> Result<()> {
        let prev = match self.node {
            Some(node) => node.predecessor(),
            None => self.tree.root().map(Node::rightmost),
        };
        self.node = Some(prev.ok_or(Error::RetreatBegin)?);
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

/// Two cursors are equal when they point at the same node, or are both at the end. Equal keys
/// in different trees are different positions.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => f.debug_tuple("Cursor").field(node).finish(),
            None => f.write_str("Cursor(End)"),
        }
    }
}

/// An in-order iterator over the elements of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    front: Option<&'a Node<T>>,
    back: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        let root = tree.root();
        Self {
            front: root.map(Node::leftmost),
            back: root.map(Node::rightmost),
            remaining: tree.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // `remaining` stops us once the two ends cross.
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = node.successor();
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = node.predecessor();
        self.remaining -= 1;
        Some(&node.key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
