/// The color of the link from a node to its parent.
///
/// A red node forms a 3-node or 4-node with its parent in the equivalent
/// 2-3-4 tree. Absent children are always considered black.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the other color.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::Color;
    ///
    /// assert_eq!(Color::Red.flipped(), Color::Black);
    /// assert_eq!(Color::Black.flipped(), Color::Red);
    /// ```
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns `true` for [`Color::Red`].
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }
}
