use alloc::vec::Vec;
use core::fmt;

use super::LlrbTree;
use crate::raw::RawLlrbTree;
use crate::{Comparator, DuplicatePolicy, NaturalOrder};

/// Configures and builds an [`LlrbTree`].
///
/// Every option has a default: natural order, [`DuplicatePolicy::Accumulate`],
/// no preallocated capacity and no initial data.
///
/// # Examples
///
/// ```
/// use llrb_tree::{DuplicatePolicy, LlrbTree};
///
/// let tree = LlrbTree::builder()
///     .comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()))
///     .duplicate_policy(DuplicatePolicy::Replace)
///     .data(["fig", "pear", "kiwi"])
///     .build();
///
/// // "kiwi" has the same length as "pear" and replaced it.
/// assert_eq!(tree.to_vec_in_order(), [&"fig", &"kiwi"]);
/// ```
#[must_use = "a builder does nothing until `build()` is called"]
pub struct Builder<T, C = NaturalOrder> {
    compare: C,
    policy: DuplicatePolicy,
    capacity: usize,
    data: Vec<T>,
}

impl<T: Ord> Builder<T> {
    /// A builder for a tree in natural order.
    pub fn new() -> Self {
        Builder::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for Builder<T> {
    fn default() -> Self {
        Builder::new()
    }
}

impl<T, C> Builder<T, C> {
    /// A builder for a tree ordered by `compare`.
    pub fn with_comparator(compare: C) -> Self {
        Builder {
            compare,
            policy: DuplicatePolicy::default(),
            capacity: 0,
            data: Vec::new(),
        }
    }

    /// Orders the tree by `compare` instead.
    pub fn comparator<D>(self, compare: D) -> Builder<T, D> {
        Builder {
            compare,
            policy: self.policy,
            capacity: self.capacity,
            data: self.data,
        }
    }

    /// Sets what happens to equivalent values.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reserves room for `capacity` nodes.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds values to insert when the tree is built, in the given order.
    /// Later equivalent values are replaced or accumulated per the policy.
    pub fn data<I: IntoIterator<Item = T>>(mut self, data: I) -> Self {
        self.data.extend(data);
        self
    }
}

impl<T, C: Comparator<T>> Builder<T, C> {
    /// Builds the tree, inserting the initial data one value at a time.
    ///
    /// # Complexity
    ///
    /// O(m log m) for `m` initial values.
    pub fn build(self) -> LlrbTree<T, C> {
        let capacity = self.capacity.max(self.data.len());
        let mut raw = RawLlrbTree::with_capacity(capacity, self.compare, self.policy);
        for value in self.data {
            raw.insert(value);
        }
        LlrbTree::from_raw(raw)
    }
}

impl<T, C> fmt::Debug for Builder<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity)
            .field("data", &self.data.len())
            .finish_non_exhaustive()
    }
}
