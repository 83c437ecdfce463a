/// What an [`LlrbTree`](crate::LlrbTree) does with a value that is
/// equivalent to one it already holds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum DuplicatePolicy {
    /// The new value overwrites the stored one, which is handed back to the
    /// caller of [`insert`](crate::LlrbTree::insert).
    Replace,
    /// The new value is appended to the node's extras, after the canonical
    /// value and any earlier extras.
    #[default]
    Accumulate,
}

/// How much of an equivalence class a removal takes out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Removal {
    /// Remove the node together with every value it holds.
    #[default]
    All,
    /// Remove a single value. The most recently accumulated extra goes first;
    /// the node itself is removed once it holds only its canonical value.
    One,
}
