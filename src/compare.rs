use core::cmp::Ordering;

/// A total order over the values stored in an [`LlrbTree`](crate::LlrbTree).
///
/// Two values are *equivalent* when [`compare`](Comparator::compare) returns
/// [`Ordering::Equal`], whether or not they are equal by any other measure.
/// The tree keeps at most one node per equivalence class.
///
/// Implementations must be consistent: the relative order of two values may
/// not change while both are in a tree, unless the caller deliberately swaps
/// the comparator and takes responsibility for the consequences (see
/// [`LlrbTree::set_comparator`](crate::LlrbTree::set_comparator)). The
/// behavior of a tree under an inconsistent comparator is not specified, but
/// it is confined to that tree and never undefined behavior.
///
/// Every `Fn(&T, &T) -> Ordering` is a comparator, including boxed trait
/// objects, so the order can be chosen at runtime:
///
/// ```
/// use core::cmp::Ordering;
/// use llrb_tree::LlrbTree;
///
/// let descending: Box<dyn Fn(&i32, &i32) -> Ordering> = Box::new(|a, b| b.cmp(a));
/// let mut tree = LlrbTree::with_comparator(descending);
/// tree.extend([1, 3, 2]);
/// assert_eq!(tree.to_vec_in_order(), [&3, &2, &1]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The comparator used by default: the value type's own [`Ord`].
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use llrb_tree::{Comparator, NaturalOrder};
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn by_len(a: &str, b: &str) -> Ordering {
        a.len().cmp(&b.len())
    }

    #[test]
    fn natural_order_follows_ord() {
        assert_eq!(NaturalOrder.compare("a", "b"), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn functions_and_closures_are_comparators() {
        assert_eq!(Comparator::compare(&by_len, "bb", "a"), Ordering::Greater);

        let modulo = |a: &u32, b: &u32| (a % 10).cmp(&(b % 10));
        assert_eq!(Comparator::<u32>::compare(&modulo, &13, &3), Ordering::Equal);
    }
}
