use std::cmp::Ordering;
use std::fmt::Write as _;

use llrb_tree::{Color, LlrbTree, NodeRef};
use pretty_assertions::assert_eq;

/// Renders a subtree as `datum(left)[right]`, marking red nodes with `•` and
/// black nodes with `·`. Empty children are omitted.
fn render<T: std::fmt::Display>(node: Option<NodeRef<'_, T>>) -> String {
    let mut out = String::new();
    if let Some(node) = node {
        let mark = match node.color() {
            Color::Red => '•',
            Color::Black => '·',
        };
        write!(out, "{}{mark}", node.datum()).unwrap();
        if let Some(left) = node.left() {
            write!(out, "({})", render(Some(left))).unwrap();
        }
        if let Some(right) = node.right() {
            write!(out, "[{}]", render(Some(right))).unwrap();
        }
    }
    out
}

fn data<T: Copy>(node: Option<NodeRef<'_, T>>) -> Option<T> {
    node.map(|n| *n.datum())
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

#[test]
fn ascending_inserts_lean_left() {
    let mut tree = LlrbTree::new();
    let shapes = [
        "1·",
        "2·(1•)",
        "2·(1·)[3·]",
        "2·(1·)[4·(3•)]",
        "4·(2•(1·)[3·])[5·]",
        "4·(2•(1·)[3·])[6·(5•)]",
        "4·(2·(1·)[3·])[6·(5·)[7·]]",
    ];

    for (value, shape) in (1..=7).zip(shapes) {
        tree.insert(value);
        assert_eq!(render(tree.root()), shape, "after inserting {value}");
        assert_eq!(tree.check_invariants(), Ok(()));
    }
}

#[test]
fn removing_the_root_promotes_its_successor() {
    let mut tree: LlrbTree<i32> = (1..=7).collect();
    assert!(tree.remove(&4));
    assert_eq!(data(tree.root()), Some(5));
    assert_eq!(tree.to_vec_in_order(), [&1, &2, &3, &5, &6, &7]);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn reverse_inserts_round_trip() {
    let mut tree = LlrbTree::new();
    for v in (1..=7).rev() {
        tree.insert(v);
    }
    assert_eq!(tree.to_vec_in_order(), [&1, &2, &3, &4, &5, &6, &7]);
    assert_eq!(tree.root().map(|n| n.color()), Some(Color::Black));
    assert_eq!(tree.check_invariants(), Ok(()));
}

// ─── Bounds ──────────────────────────────────────────────────────────────────

#[test]
fn bounds_around_sparse_keys() {
    let tree = LlrbTree::from([1, 3, 5]);
    let bounds = |v| {
        let (lower, upper) = tree.find_bounds(&v);
        (data(lower), data(upper))
    };
    let bounds_excl = |v| {
        let (lower, upper) = tree.find_bounds_excl(&v);
        (data(lower), data(upper))
    };

    assert_eq!(bounds(0), (None, Some(1)));
    assert_eq!(bounds(2), (Some(1), Some(3)));
    assert_eq!(bounds(3), (Some(3), Some(5)));
    assert_eq!(bounds(6), (Some(5), None));

    assert_eq!(bounds_excl(1), (None, Some(3)));
    assert_eq!(bounds_excl(3), (Some(1), Some(5)));
    assert_eq!(bounds_excl(5), (Some(3), None));
    assert_eq!(bounds_excl(4), (Some(3), Some(5)));
}

#[test]
fn bounds_on_empty_tree() {
    let tree: LlrbTree<i32> = LlrbTree::new();
    assert_eq!(tree.find_bounds(&1), (None, None));
    assert_eq!(tree.find_bounds_excl(&1), (None, None));
}

// ─── Removal accounting ──────────────────────────────────────────────────────

#[test]
fn sieve_removals_account_for_every_value() {
    let mut tree = LlrbTree::new();
    for v in (0..999).rev() {
        tree.insert(v);
    }

    let mut removed = 0;
    for v in [111, 222, 333] {
        removed += usize::from(tree.remove_one(&v));
    }
    for modulus in [2, 3, 5, 7] {
        for v in 0..999 {
            if v % modulus == 0 {
                removed += usize::from(tree.remove_one(&v));
            }
        }
    }

    assert_eq!(tree.check_invariants(), Ok(()));
    assert_eq!(tree.len() + removed, 999);
    assert!(tree.iter().all(|v| [2, 3, 5, 7].iter().all(|m| v % m != 0)));
}

#[test]
fn duplicates_need_one_removal_each() {
    let mut tree = LlrbTree::new();
    for _ in 0..5 {
        tree.insert(42);
    }
    tree.insert(7);

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.node_count(), 2);
    assert_eq!(tree.find_all(&42).len(), 5);

    for remaining in (0..5).rev() {
        assert!(tree.remove_one(&42));
        assert_eq!(tree.find_all(&42).len(), remaining);
    }
    assert!(!tree.remove_one(&42));
    assert_eq!(tree.to_vec_in_order(), [&7]);
}

#[test]
fn pseudo_random_duplicates_drain_completely() {
    // Linear congruential generator; enough to scatter values over 20 keys.
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        state >> 16
    };

    let values: Vec<u32> = (0..400).map(|_| next() % 20).collect();
    let mut tree: LlrbTree<u32> = values.iter().copied().collect();
    assert_eq!(tree.len(), values.len());

    for v in &values {
        assert!(tree.remove_one(v));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
}

#[test]
fn removing_absent_values_changes_nothing() {
    let mut tree: LlrbTree<i32> = (0..64).map(|v| v * 2).collect();
    let before = render(tree.root());

    for v in [-1, 1, 63, 129] {
        assert!(!tree.remove(&v));
        assert!(!tree.remove_one(&v));
    }
    assert_eq!(render(tree.root()), before);
    assert_eq!(tree.len(), 64);
}

#[test]
fn len_matches_traversal_through_churn() {
    let mut tree = LlrbTree::new();
    for round in 0..10 {
        for v in 0..100 {
            tree.insert((v * 7 + round) % 50);
        }
        for v in (0..50).step_by(round + 1) {
            tree.remove_one(&v);
        }
        let counted: usize = tree.nodes_in_order().iter().map(NodeRef::value_count).sum();
        assert_eq!(tree.len(), counted);
        assert_eq!(tree.iter().count(), counted);
    }
}

// ─── Comparators ─────────────────────────────────────────────────────────────

/// A column of terrain, ordered by its highest point.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Column {
    left: f64,
    right: f64,
}

impl Column {
    fn peak(&self) -> f64 {
        self.left.max(self.right)
    }
}

/// Orders columns by peak height; incomparable peaks count as equal.
fn by_peak(a: &Column, b: &Column) -> Ordering {
    (a.peak() - b.peak()).partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

#[test]
fn nan_differences_compare_equal() {
    let unbounded = Column {
        left: 0.0,
        right: f64::INFINITY,
    };
    let mut tree = LlrbTree::with_comparator(by_peak);
    tree.insert(unbounded);
    assert_eq!(tree.max(), Some(&unbounded));

    // inf - inf is NaN, so this is found and removed as the same column.
    assert!(tree.remove(&Column {
        left: f64::INFINITY,
        right: 1.0,
    }));
    assert!(tree.is_empty());

    let low = Column { left: 1.0, right: 2.0 };
    let high = Column { left: 5.0, right: 3.0 };
    tree.extend([low, high]);
    assert_eq!(tree.max(), Some(&high));
    assert_eq!(tree.min(), Some(&low));
}

#[test]
fn swapping_comparators_keeps_order_compatible() {
    type ByValue = fn(&i32, &i32) -> Ordering;

    let mut tree: LlrbTree<i32, ByValue> = LlrbTree::with_comparator(i32::cmp);
    tree.extend([3, 1, 2]);

    // Reversing a reversed order is the identity, so the structure is still valid.
    let reverse: ByValue = |a, b| b.cmp(a).reverse();
    tree.set_comparator(reverse);
    assert_eq!(tree.check_invariants(), Ok(()));
    assert!(tree.contains(&2));

    let tree = tree.rebuild_with(|a: &i32, b: &i32| b.cmp(a));
    assert_eq!(tree.to_vec_in_order(), [&3, &2, &1]);
}
