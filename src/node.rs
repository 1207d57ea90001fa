use std::fmt;
use std::ptr::NonNull;

/// A pointer to a `Node` that may be empty.
///
/// A `Link` stored in `left`/`right` owns the `Node` it points at (the `Node` was allocated with
/// `Box` in [`Node::new_leaked`] and is freed by [`Tree::clear`][crate::Tree::clear]). A `Link`
/// stored in `parent` is only a back-reference and never frees anything.
pub(crate) struct Link<T>(pub(crate) Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    pub(crate) fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A non-empty link always points at a live `Node` owned by the same tree. Nodes
        // are only freed by `Tree::clear` which takes `&mut Tree`, so no `&Node` handed out here
        // can outlive the `Node` it refers to.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    /// Whether this link points at exactly `node`.
    pub(crate) fn points_to(&self, node: &Node<T>) -> bool {
        self.0 == Some(NonNull::from(node))
    }
}

/// A single vertex of the tree.
///
/// `key` is never handed out mutably: changing it in place could break the ordering of the
/// whole tree.
pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Link<T>,
    /// Scratch space for augmented algorithms (subtree size, color, height...). Nothing in this
    /// crate reads it besides the debug output.
    pub(crate) tag: i32,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("addr", &NonNull::from(self))
            .field("parent", &self.parent.0)
            .field("left", &self.left.0)
            .field("right", &self.right.0)
            .field("tag", &self.tag)
            .field("key", &self.key)
            .finish()
    }
}

impl<T> Node<T> {
    /// Allocates a new childless `Node` and gives up ownership of it. The caller must store the
    /// returned pointer in a `left`/`right`/`root` link so it's eventually freed.
    pub(crate) fn new_leaked(key: T, parent: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            key,
            left: Link::empty(),
            right: Link::empty(),
            parent,
            tag: 0,
        })))
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    pub(crate) fn parent(&self) -> Option<&Self> {
        self.parent.node()
    }

    /// The smallest node in the subtree rooted at `self`.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The largest node in the subtree rooted at `self`.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Returns the node following `self` in an in-order traversal, or `None` if `self` is the
    /// largest node in its tree. Never modifies any link.
    pub(crate) fn successor(&self) -> Option<&Self> {
        // With a right subtree, the successor is the smallest thing in it.
        if let Some(right) = self.right() {
            return Some(right.leftmost());
        }

        // Otherwise it's the nearest ancestor we reach from its left side. If we only ever climb
        // from right children then `self` is the last node of the tree.
        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.left.points_to(child) {
                return Some(parent);
            }
            child = parent;
        }

        None
    }

    /// Mirror image of [`Node::successor`]: the node before `self` in an in-order traversal.
    pub(crate) fn predecessor(&self) -> Option<&Self> {
        if let Some(left) = self.left() {
            return Some(left.rightmost());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.right.points_to(child) {
                return Some(parent);
            }
            child = parent;
        }

        None
    }
}
