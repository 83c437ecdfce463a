//! Lookups that navigate by the comparator.

use alloc::vec::Vec;

use super::LlrbTree;
use crate::raw::Handle;
use crate::{Comparator, NodeRef};

/// A lower and an upper neighbour in the tree, either of which may be absent.
pub type Bounds<'a, T> = (Option<NodeRef<'a, T>>, Option<NodeRef<'a, T>>);

impl<T, C> LlrbTree<T, C> {
    /// The node holding the smallest values, or `None` if the tree is empty.
    #[must_use]
    pub fn min_node(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.subtree_min())
    }

    /// The node holding the greatest values, or `None` if the tree is empty.
    #[must_use]
    pub fn max_node(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.subtree_max())
    }

    /// The canonical value of the smallest equivalence class.
    ///
    /// To start from an arbitrary node, use [`NodeRef::subtree_min`].
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let mut tree: LlrbTree<i32> = LlrbTree::new();
    /// assert_eq!(tree.min(), None);
    /// tree.extend([4, 2, 8]);
    /// assert_eq!(tree.min(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.min_node().map(|node| node.datum())
    }

    /// The canonical value of the greatest equivalence class.
    ///
    /// To start from an arbitrary node, use [`NodeRef::subtree_max`].
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.max_node().map(|node| node.datum())
    }

    fn bounds_refs(&self, (lower, upper): (Option<Handle>, Option<Handle>)) -> Bounds<'_, T> {
        (lower.map(|h| self.node_ref(h)), upper.map(|h| self.node_ref(h)))
    }
}

impl<T, C: Comparator<T>> LlrbTree<T, C> {
    /// Finds the node holding values equivalent to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([1, 3, 5]);
    /// assert_eq!(tree.find(&3).map(|n| *n.datum()), Some(3));
    /// assert!(tree.find(&4).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.raw.search(value).map(|h| self.node_ref(h))
    }

    /// Returns `true` if the tree holds a value equivalent to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.search(value).is_some()
    }

    /// Every value equivalent to `value`, in insertion order. Empty if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let mut tree = LlrbTree::with_comparator(|a: &i32, b: &i32| (a / 10).cmp(&(b / 10)));
    /// tree.extend([12, 31, 17, 10]);
    ///
    /// assert_eq!(tree.find_all(&15), [&12, &17, &10]);
    /// assert!(tree.find_all(&25).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n + k) for `k` equivalent values.
    #[must_use]
    pub fn find_all(&self, value: &T) -> Vec<&T> {
        self.find(value).map(|node| node.values().collect()).unwrap_or_default()
    }

    /// Returns the nodes bounding `value`: the last node not greater than it
    /// and the first node greater than it.
    ///
    /// If `value` falls on a node, that node and the next one are returned.
    /// The lower bound is `None` when `value` precedes every node, the upper
    /// bound when no node follows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{Bounds, LlrbTree};
    ///
    /// fn datum((lower, upper): Bounds<'_, i32>) -> (Option<i32>, Option<i32>) {
    ///     (lower.map(|n| *n.datum()), upper.map(|n| *n.datum()))
    /// }
    ///
    /// let tree = LlrbTree::from([1, 3, 5]);
    /// assert_eq!(datum(tree.find_bounds(&2)), (Some(1), Some(3)));
    /// assert_eq!(datum(tree.find_bounds(&3)), (Some(3), Some(5)));
    /// assert_eq!(datum(tree.find_bounds(&0)), (None, Some(1)));
    /// assert_eq!(datum(tree.find_bounds(&6)), (Some(5), None));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find_bounds(&self, value: &T) -> Bounds<'_, T> {
        self.bounds_refs(self.raw.bounds(value))
    }

    /// Returns the nodes strictly bounding `value`: the last node less than
    /// it and the first node greater than it. A node equivalent to `value`
    /// is never part of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([1, 3, 5]);
    /// let (lower, upper) = tree.find_bounds_excl(&3);
    /// assert_eq!(lower.map(|n| *n.datum()), Some(1));
    /// assert_eq!(upper.map(|n| *n.datum()), Some(5));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find_bounds_excl(&self, value: &T) -> Bounds<'_, T> {
        self.bounds_refs(self.raw.bounds_excl(value))
    }

    /// The first node holding values greater than `value`.
    #[must_use]
    pub fn successor(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find_bounds_excl(value).1
    }

    /// The last node holding values less than `value`.
    #[must_use]
    pub fn predecessor(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find_bounds_excl(value).0
    }
}
