use core::num::NonZero;

// Narrow in unit tests so slot exhaustion stays reachable.
#[cfg(test)]
type RawSlot = u16;
#[cfg(not(test))]
type RawSlot = u32;

/// Index of a node slot in the tree's arena.
///
/// Child links own the node they name; parent links are plain copies of a
/// handle and never decide when a slot is freed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawSlot>);

impl Handle {
    pub(crate) const MAX: usize = (RawSlot::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_slot(slot: usize) -> Self {
        assert!(slot <= Self::MAX, "`Handle::from_slot()` - `slot` > `Handle::MAX`!");
        // `slot + 1` is non-zero and fits after the assert above.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((slot + 1) as RawSlot).unwrap())
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Absent children cost nothing over a present one.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Option<Handle>, RawSlot);

    #[test]
    #[should_panic(expected = "`Handle::from_slot()` - `slot` > `Handle::MAX`!")]
    fn slot_past_max_panics() {
        let _ = Handle::from_slot(Handle::MAX + 1);
    }

    #[test]
    fn first_and_last_slots() {
        assert_eq!(Handle::from_slot(0).slot(), 0);
        assert_eq!(Handle::from_slot(Handle::MAX).slot(), Handle::MAX);
        assert_ne!(Handle::from_slot(0), Handle::from_slot(1));
    }

    proptest! {
        #[test]
        fn slot_survives_handle(slot in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::from_slot(slot).slot(), slot);
        }
    }
}
