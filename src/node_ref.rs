use core::fmt;
use core::iter::FusedIterator;

use crate::Color;
use crate::raw::{self, Arena, Dir, Handle, Node};

/// A read-only view of one node in an [`LlrbTree`](crate::LlrbTree).
///
/// This is everything a renderer or an invariant checker needs: the node's
/// color, its children, its parent and the values it holds. It borrows the
/// tree immutably, so the tree cannot change while a `NodeRef` is alive.
///
/// Two `NodeRef`s compare equal when they name the same node of the same
/// tree.
///
/// # Examples
///
/// ```
/// use llrb_tree::{Color, LlrbTree};
///
/// let tree = LlrbTree::from([1, 2, 3]);
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.datum(), &2);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().map(|n| *n.datum()), Some(1));
/// assert_eq!(root.right().map(|n| *n.datum()), Some(3));
/// ```
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<Node<T>>,
    handle: Handle,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, handle: Handle) -> Self {
        NodeRef { nodes, handle }
    }

    #[inline]
    fn node(&self) -> &'a Node<T> {
        self.nodes.get(self.handle)
    }

    fn link(&self, link: Option<Handle>) -> Option<Self> {
        link.map(|handle| NodeRef::new(self.nodes, handle))
    }

    /// The node's color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.node().color()
    }

    /// Returns `true` if the node is red.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }

    /// The left child, holding smaller values.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.link(self.node().left())
    }

    /// The right child, holding greater values.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.link(self.node().right())
    }

    /// The parent node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent())
    }

    /// The canonical value: the first value inserted into this node, or the
    /// last one inserted under [`DuplicatePolicy::Replace`](crate::DuplicatePolicy::Replace).
    #[must_use]
    pub fn datum(&self) -> &'a T {
        self.node().datum()
    }

    /// Values accumulated after the canonical one, oldest first.
    #[must_use]
    pub fn extras(&self) -> &'a [T] {
        self.node().extras()
    }

    /// The canonical value followed by the extras.
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let mut tree = LlrbTree::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'x'));
    /// tree.insert((1, 'y'));
    ///
    /// let node = tree.find(&(1, '?')).unwrap();
    /// assert_eq!(node.values().map(|v| v.1).collect::<String>(), "xy");
    /// ```
    pub fn values(&self) -> Values<'a, T> {
        Values {
            inner: self.node().values(),
        }
    }

    /// Number of values held by the node.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.node().value_count()
    }

    /// The leftmost node of the subtree rooted here.
    #[must_use]
    pub fn subtree_min(&self) -> Self {
        self.extreme(Dir::Left)
    }

    /// The rightmost node of the subtree rooted here.
    #[must_use]
    pub fn subtree_max(&self) -> Self {
        self.extreme(Dir::Right)
    }

    fn extreme(&self, dir: Dir) -> Self {
        let mut handle = self.handle;
        while let Some(next) = self.nodes.get(handle).child(dir) {
            handle = next;
        }
        NodeRef::new(self.nodes, handle)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.nodes, other.nodes) && self.handle == other.handle
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("datum", self.datum())
            .field("extras", &self.extras())
            .field("color", &self.color())
            .finish()
    }
}

/// An iterator over the values held by a single node.
///
/// This `struct` is created by [`NodeRef::values`]. See its documentation for
/// more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, T> {
    inner: raw::Values<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Values<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
