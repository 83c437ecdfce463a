use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::{Chain, Once, once};
use core::slice;

use super::handle::Handle;
use crate::Color;

/// Canonical value followed by the extras, in insertion order.
pub(crate) type Values<'a, T> = Chain<Once<&'a T>, slice::Iter<'a, T>>;

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// The side a value belongs on, given how it compares with a node.
    /// `None` when the value is equivalent to the node.
    #[inline]
    pub(crate) const fn toward(ordering: Ordering) -> Option<Self> {
        match ordering {
            Ordering::Less => Some(Dir::Left),
            Ordering::Greater => Some(Dir::Right),
            Ordering::Equal => None,
        }
    }
}

/// A single key position in the tree.
#[derive(Clone)]
pub(crate) struct Node<T> {
    datum: T,
    // Always empty under `DuplicatePolicy::Replace`.
    extras: Vec<T>,
    color: Color,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<T> Node<T> {
    /// New nodes are red; the fix-up on the way back to the root balances them.
    pub(crate) const fn new(datum: T) -> Self {
        Self {
            datum,
            extras: Vec::new(),
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub(crate) fn datum(&self) -> &T {
        &self.datum
    }

    #[inline]
    pub(crate) fn extras(&self) -> &[T] {
        &self.extras
    }

    pub(crate) fn values(&self) -> Values<'_, T> {
        once(&self.datum).chain(self.extras.iter())
    }

    /// Number of values held, canonical one included.
    #[inline]
    pub(crate) fn value_count(&self) -> usize {
        1 + self.extras.len()
    }

    /// Overwrites the canonical value, returning the old one.
    pub(crate) fn replace_datum(&mut self, datum: T) -> T {
        core::mem::replace(&mut self.datum, datum)
    }

    pub(crate) fn push_extra(&mut self, extra: T) {
        self.extras.push(extra);
    }

    pub(crate) fn pop_extra(&mut self) -> Option<T> {
        self.extras.pop()
    }

    /// Moves `other`'s values into this node, dropping the ones held here.
    /// Links and color are left alone.
    pub(crate) fn adopt_values(&mut self, other: Node<T>) {
        self.datum = other.datum;
        self.extras = other.extras;
    }

    /// Splits the node into its values, canonical first.
    pub(crate) fn into_values(self) -> (T, Vec<T>) {
        (self.datum, self.extras)
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn flip_color(&mut self) {
        self.color = self.color.flipped();
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, dir: Dir) -> Option<Handle> {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, dir: Dir, child: Option<Handle>) {
        match dir {
            Dir::Left => self.left = child,
            Dir::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_node_is_red_and_unlinked() {
        let node = Node::new(5);
        assert_eq!(node.color(), Color::Red);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(node.parent(), None);
        assert_eq!(node.value_count(), 1);
    }

    #[test]
    fn values_keep_insertion_order() {
        let mut node = Node::new("first");
        node.push_extra("second");
        node.push_extra("third");
        assert_eq!(node.values().copied().collect::<Vec<_>>(), vec!["first", "second", "third"]);

        assert_eq!(node.pop_extra(), Some("third"));
        assert_eq!(node.value_count(), 2);
    }

    #[test]
    fn adopting_values_keeps_links() {
        let mut target = Node::new(1);
        target.set_color(Color::Black);
        target.set_child(Dir::Right, Some(Handle::from_slot(3)));

        let mut source = Node::new(2);
        source.push_extra(22);
        target.adopt_values(source);

        assert_eq!(target.color(), Color::Black);
        assert_eq!(target.right(), Some(Handle::from_slot(3)));
        assert_eq!(target.into_values(), (2, vec![22]));
    }

    #[test]
    fn child_slots_by_direction() {
        let mut node = Node::new(());
        node.set_child(Dir::Left, Some(Handle::from_slot(1)));
        assert_eq!(node.child(Dir::Left), node.left());
        assert_eq!(node.child(Dir::Left.opposite()), None);
        assert_eq!(Dir::toward(Ordering::Greater), Some(Dir::Right));
        assert_eq!(Dir::toward(Ordering::Equal), None);
    }
}
