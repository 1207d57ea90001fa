//! An unbalanced BST set whose nodes keep a pointer to their parent, so any node can find its
//! in-order neighbours without a stack. That is what lets a [`Cursor`] be a single node pointer.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_end());
//!
//! let (cursor, inserted) = tree.insert(1);
//! assert!(inserted);
//! assert_eq!(cursor.get(), Ok(&1));
//!
//! // Inserting an equal key keeps the original and reports that nothing was added.
//! let (_, inserted) = tree.insert(1);
//! assert!(!inserted);
//! assert_eq!(tree.len(), 1);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! assert_eq!(tree.begin(), tree.end());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

use crate::cursor::{Cursor, Iter};
use crate::node::{Link, Node};

/// An ordered set stored as a Binary Search Tree. No balancing is done so inserting keys in
/// sorted order builds a tree as deep as it is long.
pub struct Tree<T> {
    // This is a `Link` instead of an `Option<Box<Node>>` so that moving the `Tree` doesn't move
    // the root and break its children's parent pointers.
    root: Link<T>,
    len: usize,
}

// SAFETY: A `Tree` uniquely owns all of its nodes, like a `Box` would, and only hands out `&T`
// through `&Tree`. Sending or sharing it is as safe as sending or sharing the `T`s.
unsafe impl<T: Send> Send for Tree<T> {}
unsafe impl<T: Sync> Sync for Tree<T> {}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the nodes one by one so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        let mut new = Self::new();
        // Each entry is a node to copy and the copied parent it hangs off (and on which side).
        let mut stack: Vec<(&Node<T>, Option<(NonNull<Node<T>>, bool)>)> =
            self.root().map(|root| (root, None)).into_iter().collect();

        while let Some((node, parent)) = stack.pop() {
            let copy = Node::new_leaked(node.key.clone(), Link(parent.map(|(p, _)| p)));
            // SAFETY: `p` is a node of `new`, which nothing else can reference yet.
            match parent {
                Some((p, true)) => unsafe { (*p.as_ptr()).left = Link(Some(copy)) },
                Some((p, false)) => unsafe { (*p.as_ptr()).right = Link(Some(copy)) },
                None => new.root = Link(Some(copy)),
            }
            new.len += 1;

            stack.extend(node.left().map(|left| (left, Some((copy, true)))));
            stack.extend(node.right().map(|right| (right, Some((copy, false)))));
        }

        debug_assert_eq!(new.len, self.len);
        new
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T> Eq for Tree<T> where T: Eq {}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::empty(),
            len: 0,
        }
    }

    /// Inserts `item` unless an equal element is already stored.
    ///
    /// Returns a cursor on the stored element (the new one, or the existing equal one) and
    /// whether `item` was inserted. When an equal element exists, `item` is dropped and the
    /// stored element is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let (cursor, inserted) = tree.insert(10);
    /// assert!(inserted);
    /// assert_eq!(cursor.get(), Ok(&10));
    ///
    /// let (cursor, inserted) = tree.insert(10);
    /// assert!(!inserted);
    /// assert_eq!(cursor.get(), Ok(&10));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> (Cursor<'_, T>, bool)
    where
        T: Ord,
    {
        let mut current = match self.root.0 {
            Some(root) => root,
            None => {
                let root = Node::new_leaked(item, Link::empty());
                self.root = Link(Some(root));
                self.len += 1;
                log::trace!("inserted root node");
                return (self.cursor_at(root), true);
            }
        };

        loop {
            // SAFETY: `current` is a live node of this tree and we hold `&mut self`, so nothing
            // else can be reading or writing it. The reference is dropped before we build a
            // cursor from `&*self`.
            let node = unsafe { &mut *current.as_ptr() };
            let slot = match item.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("equal key already stored, not inserting");
                    return (self.cursor_at(current), false);
                }
                Ordering::Greater => &mut node.right,
            };

            match slot.0 {
                Some(child) => current = child,
                None => {
                    let child = Node::new_leaked(item, Link(Some(current)));
                    slot.0 = Some(child);
                    self.len += 1;
                    log::trace!("inserted node, tree now holds {} nodes", self.len);

                    // SAFETY: `child` was just linked into this tree.
                    debug_assert!(unsafe { child.as_ref() }.parent.0 == Some(current));
                    return (self.cursor_at(child), true);
                }
            }
        }
    }

    /// Returns a cursor on the element equal to `item`, or the [end][Tree::end] cursor if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<_> = ["b", "a", "c"].into_iter().map(String::from).collect();
    ///
    /// assert_eq!(tree.find("a").get().map(String::as_str), Ok("a"));
    /// assert_eq!(tree.find("z"), tree.end());
    /// ```
    pub fn find<Q>(&self, item: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Same direction as `insert`: smaller keys live on the left.
        let mut current = self.root();
        while let Some(node) = current {
            current = match item.cmp(node.key.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Equal => break,
                Ordering::Greater => node.right(),
            };
        }
        Cursor::new(self, current)
    }

    /// Whether an element equal to `item` is stored.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.find(item).is_end()
    }

    /// Removes and drops every element. Nodes are freed children first, using an explicit stack
    /// so that degenerate trees can't overflow the call stack.
    pub fn clear(&mut self) {
        let Some(root) = self.root.0.take() else {
            return;
        };
        let freed = self.len;
        self.len = 0;

        let mut stack = vec![root];
        while let Some(&top) = stack.last() {
            // SAFETY: Every pointer on the stack is a node of this tree that hasn't been freed
            // yet. We detach a child before pushing it so each node is pushed exactly once.
            let node = unsafe { &mut *top.as_ptr() };
            if let Some(left) = node.left.0.take() {
                stack.push(left);
            } else if let Some(right) = node.right.0.take() {
                stack.push(right);
            } else {
                stack.pop();
                // SAFETY: Both children are gone and the parent no longer links here, so this is
                // the last pointer to the node. It was allocated by `Node::new_leaked`.
                unsafe { drop(Box::from_raw(top.as_ptr())) };
            }
        }

        log::debug!("cleared tree, freed {} nodes", freed);
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A cursor on the smallest element, or the [end][Tree::end] cursor if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.root().map(Node::leftmost))
    }

    /// The cursor one past the largest element. It never points at an element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.root().map(|n| &n.leftmost().key)
    }

    /// The largest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.root().map(|n| &n.rightmost().key)
    }

    /// An iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// // Sorted inserts degenerate into a chain.
    /// let tree: Tree<_> = (0..100).collect();
    /// assert_eq!(tree.height(), 100);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    fn cursor_at(&self, node: NonNull<Node<T>>) -> Cursor<'_, T> {
        // SAFETY: `node` is a node of this tree and stays alive as long as `self` is borrowed.
        Cursor::new(self, Some(unsafe { node.as_ref() }))
    }
}
