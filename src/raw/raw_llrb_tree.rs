use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};

use log::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Dir, Node};
use crate::{Color, Comparator, DuplicatePolicy, InvariantError, Removal};

/// The left-leaning red-black tree backing `LlrbTree`.
#[derive(Clone)]
pub(crate) struct RawLlrbTree<T, C> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total order over the stored values.
    compare: C,
    policy: DuplicatePolicy,
    /// Number of values, extras included.
    len: usize,
}

/// A lower and an upper neighbour, either of which may be absent.
pub(crate) type Bounds = (Option<Handle>, Option<Handle>);

impl<T, C> RawLlrbTree<T, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(compare: C, policy: DuplicatePolicy) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            compare,
            policy,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, compare: C, policy: DuplicatePolicy) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            compare,
            policy,
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of nodes in the tree.
    pub(crate) const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Swaps the comparator without touching the structure.
    pub(crate) fn set_comparator(&mut self, compare: C) -> C {
        core::mem::replace(&mut self.compare, compare)
    }

    pub(crate) fn nodes(&self) -> &Arena<Node<T>> {
        &self.nodes
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Follows `dir` links from `h` as far as they go.
    pub(crate) fn extreme(&self, mut h: Handle, dir: Dir) -> Handle {
        while let Some(next) = self.node(h).child(dir) {
            h = next;
        }
        h
    }

    /// Handles of every node in order.
    pub(crate) fn handles_in_order(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.nodes.len());
        let mut spine: Vec<Handle> = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(h) = current {
                spine.push(h);
                current = self.nodes.get(h).left();
            }
            let Some(h) = spine.pop() else {
                break;
            };
            handles.push(h);
            current = self.nodes.get(h).right();
        }

        handles
    }

    /// Every value in order, extras following their canonical value.
    pub(crate) fn values_in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        for h in self.handles_in_order() {
            values.extend(self.nodes.get(h).values());
        }
        values
    }

    /// Consumes the tree, returning every value in order.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        for h in self.handles_in_order() {
            let (datum, extras) = self.nodes.take(h).into_values();
            values.push(datum);
            values.extend(extras);
        }
        values
    }

    /// Consumes the tree, keeping only the policy.
    pub(crate) fn into_parts(self) -> (Vec<T>, DuplicatePolicy) {
        let policy = self.policy;
        (self.into_sorted_vec(), policy)
    }

    /// Makes `root` the tree root: black, with no parent.
    fn set_root(&mut self, root: Option<Handle>) {
        self.root = root;
        if let Some(root) = root {
            let node = self.nodes.get_mut(root);
            node.set_color(Color::Black);
            node.set_parent(None);
        }
    }
}

impl<T, C: Comparator<T>> RawLlrbTree<T, C> {
    #[inline]
    fn compare_at(&self, value: &T, h: Handle) -> core::cmp::Ordering {
        self.compare.compare(value, self.nodes.get(h).datum())
    }

    /// Searches for the node equivalent to `value`.
    pub(crate) fn search(&self, value: &T) -> Option<Handle> {
        let mut current = self.root;

        while let Some(h) = current {
            match Dir::toward(self.compare_at(value, h)) {
                None => return Some(h),
                Some(dir) => current = self.nodes.get(h).child(dir),
            }
        }

        None
    }

    /// The last node not greater than `value` and the first node greater.
    pub(crate) fn bounds(&self, value: &T) -> Bounds {
        let mut bounds: Bounds = (None, None);
        let mut current = self.root;

        while let Some(h) = current {
            if self.compare_at(value, h) == Less {
                bounds.1 = Some(h);
                current = self.nodes.get(h).left();
            } else {
                bounds.0 = Some(h);
                current = self.nodes.get(h).right();
            }
        }

        bounds
    }

    /// The last node less than `value` and the first node greater, skipping
    /// any node equivalent to it.
    pub(crate) fn bounds_excl(&self, value: &T) -> Bounds {
        let mut bounds: Bounds = (None, None);
        let mut current = self.root;

        while let Some(h) = current {
            let node = self.nodes.get(h);
            match self.compare_at(value, h) {
                Less => {
                    bounds.1 = Some(h);
                    current = node.left();
                }
                Greater => {
                    bounds.0 = Some(h);
                    current = node.right();
                }
                Equal => {
                    // Everything in the subtrees lies between the ancestors
                    // recorded so far, so the subtrees' extremes win.
                    if let Some(left) = node.left() {
                        bounds.0 = Some(self.extreme(left, Dir::Right));
                    }
                    if let Some(right) = node.right() {
                        bounds.1 = Some(self.extreme(right, Dir::Left));
                    }
                    break;
                }
            }
        }

        bounds
    }

    /// Inserts `value`, returning the value it displaced under
    /// `DuplicatePolicy::Replace`.
    pub(crate) fn insert(&mut self, value: T) -> Option<T> {
        let mut displaced = None;
        let root = self.insert_at(self.root, value, &mut displaced);
        self.set_root(Some(root));
        displaced
    }

    fn insert_at(&mut self, h: Option<Handle>, value: T, displaced: &mut Option<T>) -> Handle {
        let Some(h) = h else {
            self.len += 1;
            return self.nodes.alloc(Node::new(value));
        };

        match Dir::toward(self.compare_at(&value, h)) {
            None => {
                trace!("value has an equivalent node, applying {:?}", self.policy);
                match self.policy {
                    DuplicatePolicy::Replace => *displaced = Some(self.nodes.get_mut(h).replace_datum(value)),
                    DuplicatePolicy::Accumulate => {
                        self.nodes.get_mut(h).push_extra(value);
                        self.len += 1;
                    }
                }
            }
            Some(dir) => {
                let child = self.nodes.get(h).child(dir);
                let child = self.insert_at(child, value, displaced);
                self.attach(h, dir, Some(child));
            }
        }

        self.fix_up(h)
    }

    /// Removes the values equivalent to `value` and returns how many went.
    /// Zero when nothing in the tree is equivalent.
    pub(crate) fn remove(&mut self, value: &T, removal: Removal) -> usize {
        let Some(target) = self.search(value) else {
            return 0;
        };

        if removal == Removal::One && self.nodes.get_mut(target).pop_extra().is_some() {
            self.len -= 1;
            return 1;
        }

        let removed = self.nodes.get(target).value_count();
        trace!("removing node holding {removed} value(s)");

        let root = self.root.and_then(|root| self.remove_at(root, value));
        self.set_root(root);
        self.len -= removed;
        removed
    }

    fn remove_at(&mut self, mut h: Handle, value: &T) -> Option<Handle> {
        let ordering = self.compare_at(value, h);
        let node = self.nodes.get(h);
        if (ordering == Less && node.left().is_none()) || (ordering == Greater && node.right().is_none()) {
            return Some(h);
        }

        if ordering == Less {
            if !self.is_red(node.left()) && !self.is_red(node.left().and_then(|l| self.nodes.get(l).left())) {
                h = self.move_red_left(h);
            }
            let left = self.nodes.get(h).left().and_then(|l| self.remove_at(l, value));
            self.attach(h, Dir::Left, left);
            return Some(self.fix_up(h));
        }

        if self.is_red(node.left()) {
            h = self.rotate(Dir::Right, h);
        }

        if self.compare_at(value, h) == Equal && self.nodes.get(h).right().is_none() {
            self.nodes.free(h);
            return None;
        }

        let right = self.nodes.get(h).right();
        if !self.is_red(right) && !self.is_red(right.and_then(|r| self.nodes.get(r).left())) {
            h = self.move_red_right(h);
        }

        if let Some(right) = self.nodes.get(h).right() {
            let right = if self.compare_at(value, h) == Equal {
                let (right, successor) = self.remove_min(right);
                self.nodes.get_mut(h).adopt_values(successor);
                right
            } else {
                self.remove_at(right, value)
            };
            self.attach(h, Dir::Right, right);
        }

        Some(self.fix_up(h))
    }

    /// Detaches the leftmost node below `h`. Returns the new subtree root
    /// and the detached node.
    fn remove_min(&mut self, mut h: Handle) -> (Option<Handle>, Node<T>) {
        let Some(left) = self.nodes.get(h).left() else {
            // A node without a left child is a leaf in a balanced tree.
            debug_assert!(self.nodes.get(h).right().is_none());
            return (None, self.nodes.take(h));
        };

        if !self.is_red(Some(left)) && !self.is_red(self.nodes.get(left).left()) {
            h = self.move_red_left(h);
        }

        let left = self
            .nodes
            .get(h)
            .left()
            .expect("`RawLlrbTree::remove_min()` - left child vanished in `move_red_left()`!");
        let (left, min) = self.remove_min(left);
        self.attach(h, Dir::Left, left);

        (Some(self.fix_up(h)), min)
    }

    /// Walks the whole tree and reports the first broken invariant.
    pub(crate) fn validate(&self) -> Result<(), InvariantError> {
        let mut counts = (0, 0);

        if let Some(root) = self.root {
            let node = self.nodes.get(root);
            if node.color().is_red() {
                return Err(InvariantError::RedRoot);
            }
            if node.parent().is_some() {
                return Err(InvariantError::RootHasParent);
            }
            self.validate_subtree(root, (None, None), &mut counts)?;
        }

        let (nodes, values) = counts;
        if nodes != self.nodes.len() {
            return Err(InvariantError::NodeCount {
                maintained: self.nodes.len(),
                counted: nodes,
            });
        }
        if values != self.len {
            return Err(InvariantError::ValueCount {
                maintained: self.len,
                counted: values,
            });
        }

        Ok(())
    }

    /// Returns the black height of the subtree at `h`.
    fn validate_subtree(&self, h: Handle, within: Bounds, counts: &mut (usize, usize)) -> Result<usize, InvariantError> {
        let node = self.nodes.get(h);

        let (lower, upper) = within;
        if lower.is_some_and(|l| self.compare_at(node.datum(), l) != Greater)
            || upper.is_some_and(|u| self.compare_at(node.datum(), u) != Less)
        {
            return Err(InvariantError::OutOfOrder);
        }
        if self.is_red(node.right()) {
            return Err(InvariantError::RedRightChild);
        }
        if node.color().is_red() && self.is_red(node.left()) {
            return Err(InvariantError::ConsecutiveRed);
        }
        if self.policy == DuplicatePolicy::Replace && !node.extras().is_empty() {
            return Err(InvariantError::ExtrasUnderReplace);
        }

        counts.0 += 1;
        counts.1 += node.value_count();

        let mut heights = [0; 2];
        for (height, (dir, within)) in heights
            .iter_mut()
            .zip([(Dir::Left, (lower, Some(h))), (Dir::Right, (Some(h), upper))])
        {
            if let Some(child) = node.child(dir) {
                if self.nodes.get(child).parent() != Some(h) {
                    return Err(InvariantError::ParentLink);
                }
                *height = self.validate_subtree(child, within, counts)?;
            }
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantError::BlackHeight { left, right });
        }

        Ok(left + usize::from(!node.color().is_red()))
    }
}
