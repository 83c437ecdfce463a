//! Local restructuring shared by insertion and deletion.
//!
//! Every primitive takes the handle of a subtree root and returns the handle
//! of the root after restructuring. The caller re-attaches that handle to the
//! parent (or makes it the tree root); the primitives only keep the parent
//! links inside the subtree they touch consistent.

use super::handle::Handle;
use super::node::Dir;
use super::raw_llrb_tree::RawLlrbTree;
use crate::Color;

impl<T, C> RawLlrbTree<T, C> {
    /// Absent links are black.
    #[inline]
    pub(super) fn is_red(&self, link: Option<Handle>) -> bool {
        link.is_some_and(|h| self.nodes.get(h).color().is_red())
    }

    #[inline]
    fn grandchild(&self, h: Handle, first: Dir, second: Dir) -> Option<Handle> {
        self.nodes.get(h).child(first).and_then(|c| self.nodes.get(c).child(second))
    }

    /// Hangs `child` under `parent` and points it back at `parent`.
    pub(super) fn attach(&mut self, parent: Handle, dir: Dir, child: Option<Handle>) {
        self.nodes.get_mut(parent).set_child(dir, child);
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(Some(parent));
        }
    }

    /// Rotates `pivot` down toward `dir`, raising its child on the opposite
    /// side. The raised child inherits the pivot's color and parent; the
    /// pivot turns red.
    pub(super) fn rotate(&mut self, dir: Dir, pivot: Handle) -> Handle {
        let rising = self
            .nodes
            .get(pivot)
            .child(dir.opposite())
            .expect("`RawLlrbTree::rotate()` - pivot has no child to raise!");

        let inner = self.nodes.get(rising).child(dir);
        self.attach(pivot, dir.opposite(), inner);

        let (color, parent) = {
            let node = self.nodes.get(pivot);
            (node.color(), node.parent())
        };

        let node = self.nodes.get_mut(rising);
        node.set_color(color);
        node.set_parent(parent);
        self.attach(rising, dir, Some(pivot));
        self.nodes.get_mut(pivot).set_color(Color::Red);

        rising
    }

    /// Toggles `h` and both of its children, splitting a 4-node or merging
    /// three 2-nodes into one.
    pub(super) fn flip_colors(&mut self, h: Handle) {
        let node = self.nodes.get_mut(h);
        node.flip_color();
        let (left, right) = (node.left(), node.right());

        for child in [left, right].into_iter().flatten() {
            self.nodes.get_mut(child).flip_color();
        }
    }

    /// Makes sure the left child of `h` is not a 2-node before deletion
    /// descends into it, borrowing from the right sibling when it can.
    pub(super) fn move_red_left(&mut self, h: Handle) -> Handle {
        self.flip_colors(h);

        if self.is_red(self.grandchild(h, Dir::Right, Dir::Left)) {
            if let Some(right) = self.nodes.get(h).right() {
                let right = self.rotate(Dir::Right, right);
                self.attach(h, Dir::Right, Some(right));
            }
            let h = self.rotate(Dir::Left, h);
            self.flip_colors(h);
            return h;
        }

        h
    }

    /// Mirror of [`move_red_left`](Self::move_red_left) for a descent to the
    /// right.
    pub(super) fn move_red_right(&mut self, h: Handle) -> Handle {
        self.flip_colors(h);

        if self.is_red(self.grandchild(h, Dir::Left, Dir::Left)) {
            let h = self.rotate(Dir::Right, h);
            self.flip_colors(h);
            return h;
        }

        h
    }

    /// Restores the left-leaning shape of `h` on the way back up. The three
    /// steps must run in this order.
    pub(super) fn fix_up(&mut self, mut h: Handle) -> Handle {
        if self.is_red(self.nodes.get(h).right()) {
            h = self.rotate(Dir::Left, h);
        }

        if self.is_red(self.nodes.get(h).left()) && self.is_red(self.grandchild(h, Dir::Left, Dir::Left)) {
            h = self.rotate(Dir::Right, h);
        }

        // Split 4-nodes.
        let node = self.nodes.get(h);
        if self.is_red(node.left()) && self.is_red(node.right()) {
            self.flip_colors(h);
        }

        h
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::Node;
    use crate::{DuplicatePolicy, NaturalOrder};

    type Raw = RawLlrbTree<u32, NaturalOrder>;

    fn raw() -> Raw {
        RawLlrbTree::new(NaturalOrder, DuplicatePolicy::Replace)
    }

    fn node(raw: &mut Raw, datum: u32, color: Color) -> Handle {
        let mut node = Node::new(datum);
        node.set_color(color);
        raw.nodes.alloc(node)
    }

    fn datum(raw: &Raw, link: Option<Handle>) -> Option<u32> {
        link.map(|h| *raw.nodes.get(h).datum())
    }

    #[test]
    fn rotate_left_raises_right_child() {
        let mut raw = raw();
        let b = node(&mut raw, 2, Color::Black);
        let a = node(&mut raw, 1, Color::Black);
        let d = node(&mut raw, 4, Color::Red);
        let c = node(&mut raw, 3, Color::Black);
        raw.attach(b, Dir::Left, Some(a));
        raw.attach(b, Dir::Right, Some(d));
        raw.attach(d, Dir::Left, Some(c));

        let top = raw.rotate(Dir::Left, b);

        assert_eq!(top, d);
        assert_eq!(raw.nodes.get(d).color(), Color::Black);
        assert_eq!(raw.nodes.get(b).color(), Color::Red);
        assert_eq!(datum(&raw, raw.nodes.get(d).left()), Some(2));
        assert_eq!(datum(&raw, raw.nodes.get(b).right()), Some(3));
        assert_eq!(raw.nodes.get(c).parent(), Some(b));
        assert_eq!(raw.nodes.get(b).parent(), Some(d));
        assert_eq!(raw.nodes.get(d).parent(), None);
    }

    #[test]
    fn flip_colors_toggles_three_nodes() {
        let mut raw = raw();
        let b = node(&mut raw, 2, Color::Black);
        let a = node(&mut raw, 1, Color::Red);
        let c = node(&mut raw, 3, Color::Red);
        raw.attach(b, Dir::Left, Some(a));
        raw.attach(b, Dir::Right, Some(c));

        raw.flip_colors(b);

        assert!(raw.is_red(Some(b)));
        assert!(!raw.is_red(Some(a)));
        assert!(!raw.is_red(Some(c)));
        assert!(!raw.is_red(None));
    }

    #[test]
    fn fix_up_straightens_red_right_link() {
        let mut raw = raw();
        let a = node(&mut raw, 1, Color::Black);
        let b = node(&mut raw, 2, Color::Red);
        raw.attach(a, Dir::Right, Some(b));

        let top = raw.fix_up(a);

        assert_eq!(top, b);
        assert!(!raw.is_red(Some(b)));
        assert!(raw.is_red(Some(a)));
        assert_eq!(raw.nodes.get(b).left(), Some(a));
        assert_eq!(raw.nodes.get(b).right(), None);
    }

    #[test]
    fn fix_up_splits_left_chain_into_black_pair() {
        let mut raw = raw();
        let c = node(&mut raw, 3, Color::Black);
        let b = node(&mut raw, 2, Color::Red);
        let a = node(&mut raw, 1, Color::Red);
        raw.attach(c, Dir::Left, Some(b));
        raw.attach(b, Dir::Left, Some(a));

        let top = raw.fix_up(c);

        assert_eq!(top, b);
        assert!(raw.is_red(Some(b)));
        assert!(!raw.is_red(Some(a)));
        assert!(!raw.is_red(Some(c)));
        assert_eq!(raw.nodes.get(a).parent(), Some(b));
        assert_eq!(raw.nodes.get(c).parent(), Some(b));
    }

    #[test]
    fn move_red_left_borrows_from_right_sibling() {
        // 2 is a black 2-node whose right sibling {3,4} is a 3-node.
        let mut raw = raw();
        let p = node(&mut raw, 2, Color::Red);
        let a = node(&mut raw, 1, Color::Black);
        let d = node(&mut raw, 4, Color::Black);
        let c = node(&mut raw, 3, Color::Red);
        raw.attach(p, Dir::Left, Some(a));
        raw.attach(p, Dir::Right, Some(d));
        raw.attach(d, Dir::Left, Some(c));

        let top = raw.move_red_left(p);

        assert_eq!(top, c);
        assert_eq!(datum(&raw, raw.nodes.get(c).left()), Some(2));
        assert_eq!(datum(&raw, raw.nodes.get(c).right()), Some(4));
        assert_eq!(datum(&raw, raw.nodes.get(p).left()), Some(1));
        assert!(raw.is_red(Some(a)));
        assert!(!raw.is_red(Some(p)));
        assert!(!raw.is_red(Some(d)));
    }

    #[test]
    fn move_red_right_merges_without_red_nephew() {
        let mut raw = raw();
        let p = node(&mut raw, 2, Color::Red);
        let a = node(&mut raw, 1, Color::Black);
        let c = node(&mut raw, 3, Color::Black);
        raw.attach(p, Dir::Left, Some(a));
        raw.attach(p, Dir::Right, Some(c));

        let top = raw.move_red_right(p);

        assert_eq!(top, p);
        assert!(!raw.is_red(Some(p)));
        assert!(raw.is_red(Some(a)));
        assert!(raw.is_red(Some(c)));
    }
}
