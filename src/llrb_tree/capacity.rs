use super::LlrbTree;
use crate::raw::RawLlrbTree;
use crate::{DuplicatePolicy, NaturalOrder};

impl<T: Ord> LlrbTree<T> {
    /// Creates an empty tree with room for at least `capacity` nodes before
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree: LlrbTree<i32> = LlrbTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LlrbTree::from_raw(RawLlrbTree::with_capacity(capacity, NaturalOrder, DuplicatePolicy::default()))
    }
}

impl<T, C> LlrbTree<T, C> {
    /// Returns the number of nodes the tree can hold without reallocating.
    ///
    /// Equivalent values accumulated into an existing node do not consume
    /// node capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    ///
    /// let tree: LlrbTree<i32> = LlrbTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
