use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use log::debug;
use smallvec::SmallVec;

use crate::raw::{self, Arena, Handle, Node, RawLlrbTree};
use crate::{Comparator, DuplicatePolicy, InvariantError, NaturalOrder, NodeRef, Removal};

mod builder;
mod capacity;
mod query;

pub use builder::Builder;
pub use query::Bounds;

/// An ordered collection based on a left-leaning red-black tree.
///
/// Values are ordered by a [`Comparator`], which defaults to the value type's
/// own [`Ord`] ([`NaturalOrder`]) and can be any `Fn(&T, &T) -> Ordering`.
/// Values the comparator reports as [`Equal`](core::cmp::Ordering::Equal)
/// are *equivalent* and share one node; the [`DuplicatePolicy`] decides
/// whether a newly inserted equivalent value replaces the stored one or is
/// kept alongside it in the node's extras.
///
/// Insertion, removal and lookups take O(log n) comparisons. The tree is
/// mutated in place and performs no locking of its own.
///
/// It is a logic error for a value to be modified in such a way that its
/// ordering relative to any other value, as determined by the comparator,
/// changes while it is in the tree. The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the `LlrbTree` that
/// observed it and not result in undefined behavior.
/// [`check_invariants`](LlrbTree::check_invariants) detects the damage.
///
/// # Examples
///
/// ```
/// use llrb_tree::LlrbTree;
///
/// let mut tree = LlrbTree::new();
/// for value in [7, 6, 5, 4, 3, 2, 1] {
///     tree.insert(value);
/// }
///
/// assert_eq!(tree.to_vec_in_order(), [&1, &2, &3, &4, &5, &6, &7]);
/// assert_eq!(tree.min(), Some(&1));
/// assert!(tree.remove(&4));
/// assert!(!tree.remove(&4));
/// ```
///
/// Equivalent values accumulate by default:
///
/// ```
/// use llrb_tree::LlrbTree;
///
/// let mut tree: LlrbTree<&str> = LlrbTree::new();
/// tree.extend(["pear", "fig", "pear"]);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.node_count(), 2);
/// assert_eq!(tree.find_all(&"pear"), [&"pear", &"pear"]);
/// ```
pub struct LlrbTree<T, C = NaturalOrder> {
    raw: RawLlrbTree<T, C>,
}

impl<T: Ord> LlrbTree<T> {
    /// Makes a new, empty `LlrbTree` ordered by `T`'s [`Ord`] that
    /// accumulates equivalent values.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let mut tree = LlrbTree::new();
    /// tree.insert(1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        LlrbTree {
            raw: RawLlrbTree::new(NaturalOrder, DuplicatePolicy::Accumulate),
        }
    }

    /// Starts configuring a tree. See [`Builder`].
    pub fn builder() -> Builder<T> {
        Builder::new()
    }
}

impl<T, C> LlrbTree<T, C> {
    /// Makes a new, empty `LlrbTree` ordered by `compare` that accumulates
    /// equivalent values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let mut tree = LlrbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.min(), Some(&3));
    /// ```
    pub const fn with_comparator(compare: C) -> Self {
        LlrbTree {
            raw: RawLlrbTree::new(compare, DuplicatePolicy::Accumulate),
        }
    }

    pub(crate) const fn from_raw(raw: RawLlrbTree<T, C>) -> Self {
        LlrbTree { raw }
    }

    /// Returns the number of values in the tree, extras included.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of nodes, one per equivalence class.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([2, 2, 9]);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.node_count(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.raw.node_count()
    }

    /// Returns `true` if the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The policy applied to equivalent values.
    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.raw.policy()
    }

    /// The comparator ordering this tree.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Replaces the comparator in place and returns the previous one.
    ///
    /// Nothing is moved: the new comparator must agree with the order of the
    /// values already stored. This suits sweep-line style algorithms whose
    /// order shifts over time without reordering the live values. If the new
    /// order does disagree, rebuild the tree with
    /// [`rebuild_with`](LlrbTree::rebuild_with) instead; a tree left out of
    /// order answers lookups unreliably until then.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use llrb_tree::LlrbTree;
    ///
    /// type ByKey = fn(&(u8, u8), &(u8, u8)) -> Ordering;
    ///
    /// let mut tree = LlrbTree::<_, ByKey>::with_comparator(|a, b| a.0.cmp(&b.0));
    /// tree.extend([(1, 9), (2, 8)]);
    ///
    /// // Both orders agree on the stored values.
    /// tree.set_comparator(|a, b| a.cmp(b));
    /// assert!(tree.check_invariants().is_ok());
    /// ```
    pub fn set_comparator(&mut self, compare: C) -> C {
        debug!("swapping comparator on a tree of {} value(s)", self.len());
        self.raw.set_comparator(compare)
    }

    /// Returns the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.raw.root().map(|h| self.node_ref(h))
    }

    /// Every node, in order.
    #[must_use]
    pub fn nodes_in_order(&self) -> Vec<NodeRef<'_, T>> {
        self.raw.handles_in_order().into_iter().map(|h| self.node_ref(h)).collect()
    }

    /// Every value, in order. Equivalent values appear in the order they were
    /// inserted.
    ///
    /// Each call walks the whole tree again; use [`iter`](LlrbTree::iter)
    /// to avoid collecting.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_vec_in_order(&self) -> Vec<&T> {
        self.raw.values_in_order()
    }

    /// Gets an iterator that visits the values in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([3, 1, 2]);
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.len(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw.nodes(), self.raw.root(), self.raw.len())
    }

    pub(crate) fn node_ref(&self, handle: Handle) -> NodeRef<'_, T> {
        NodeRef::new(self.raw.nodes(), handle)
    }
}

impl<T, C: Comparator<T>> LlrbTree<T, C> {
    /// Inserts a value.
    ///
    /// If the tree holds no equivalent value, a new node is created and
    /// `None` is returned. Otherwise, under [`DuplicatePolicy::Replace`] the
    /// stored value is overwritten and returned, and under
    /// [`DuplicatePolicy::Accumulate`] the value is appended to the node's
    /// extras and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::{DuplicatePolicy, LlrbTree};
    ///
    /// let mut tree = LlrbTree::builder()
    ///     .duplicate_policy(DuplicatePolicy::Replace)
    ///     .build();
    ///
    /// assert_eq!(tree.insert(4), None);
    /// assert_eq!(tree.insert(4), Some(4));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> Option<T> {
        self.raw.insert(value)
    }

    /// Removes the node equivalent to `value` together with all of its
    /// values. Returns whether anything was removed; removing a value that is
    /// not present is a no-op.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_with(value, Removal::All)
    }

    /// Removes a single value equivalent to `value`: the most recently
    /// accumulated extra if there is one, otherwise the node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let mut tree = LlrbTree::from([5, 5, 5]);
    /// assert!(tree.remove_one(&5));
    /// assert!(tree.remove_one(&5));
    /// assert!(tree.remove_one(&5));
    /// assert!(!tree.remove_one(&5));
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove_one(&mut self, value: &T) -> bool {
        self.remove_with(value, Removal::One)
    }

    /// Removes values equivalent to `value` as directed by `removal`.
    pub fn remove_with(&mut self, value: &T, removal: Removal) -> bool {
        self.raw.remove(value, removal) > 0
    }

    /// Consumes the tree and builds a new one ordered by `compare`, with the
    /// same duplicate policy.
    ///
    /// Values are re-inserted in their current order, so values that become
    /// equivalent under the new order are merged as the policy dictates.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([1, 2, 3]);
    /// let tree = tree.rebuild_with(|a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(tree.to_vec_in_order(), [&3, &2, &1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn rebuild_with<D: Comparator<T>>(self, compare: D) -> LlrbTree<T, D> {
        let (values, policy) = self.raw.into_parts();
        debug!("rebuilding tree of {} value(s) under a new comparator", values.len());

        let mut raw = RawLlrbTree::with_capacity(values.len(), compare, policy);
        for value in values {
            raw.insert(value);
        }
        LlrbTree::from_raw(raw)
    }

    /// Checks every structural invariant of the tree: ordering, the
    /// left-leaning and red-red rules, black balance, the root color, parent
    /// links and the maintained counts.
    ///
    /// A tree only fails this check after its comparator misbehaved.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.raw.validate()
    }
}

impl<T: Clone, C: Clone> Clone for LlrbTree<T, C> {
    fn clone(&self) -> Self {
        LlrbTree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LlrbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Default for LlrbTree<T> {
    fn default() -> Self {
        LlrbTree::new()
    }
}

impl<T: PartialEq, C> PartialEq for LlrbTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for LlrbTree<T, C> {}

impl<T: Ord> FromIterator<T> for LlrbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for LlrbTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for LlrbTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for LlrbTree<T> {
    /// Inserts the array's values in order.
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([3, 1, 2]);
    /// assert_eq!(tree.to_vec_in_order(), [&1, &2, &3]);
    /// ```
    fn from(values: [T; N]) -> Self {
        LlrbTree::from_iter(values)
    }
}

impl<T, C> IntoIterator for LlrbTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an owning iterator over the values in order.
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree = LlrbTree::from([2, 1, 2]);
    /// assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.into_sorted_vec().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a LlrbTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the values of an `LlrbTree`, in order.
///
/// This `struct` is created by the [`iter`] method on [`LlrbTree`]. See its
/// documentation for more.
///
/// [`iter`]: LlrbTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    // Nodes whose left subtree is done but whose own values are not.
    spine: SmallVec<[Handle; 32]>,
    current: Option<raw::Values<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(nodes: &'a Arena<Node<T>>, root: Option<Handle>, len: usize) -> Self {
        let mut iter = Iter {
            nodes,
            spine: SmallVec::new(),
            current: None,
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut link: Option<Handle>) {
        while let Some(h) = link {
            self.spine.push(h);
            link = self.nodes.get(h).left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(|values| values.next()) {
                self.remaining -= 1;
                return Some(value);
            }

            let h = self.spine.pop()?;
            let nodes = self.nodes;
            let node = nodes.get(h);
            self.current = Some(node.values());
            self.descend(node.right());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            spine: self.spine.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the values of an `LlrbTree`, in order.
///
/// This `struct` is created by the [`into_iter`] method on [`LlrbTree`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: LlrbTree#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `llrb_tree::IntoIter`.
    ///
    /// ```
    /// # use llrb_tree::llrb_tree;
    /// let iter: llrb_tree::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
