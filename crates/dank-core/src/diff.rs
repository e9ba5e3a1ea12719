//! Item comparison callbacks for list differs.
//!
//! A list differ needs two answers per pair of positions: do they hold the
//! same item, and if so, has its content changed? [`ListDiff`] answers both
//! by index for an old and a new slice, delegating the comparisons to an
//! [`ItemDiffer`]. Computing the edit script itself is left to the differ.

/// Compares two items for identity and content.
pub trait ItemDiffer<T> {
    /// Whether both values represent the same item, e.g. share an id.
    fn are_items_the_same(&self, old: &T, new: &T) -> bool;

    /// Whether an item's visible content is unchanged.
    ///
    /// Only asked when [`ItemDiffer::are_items_the_same`] returned `true`.
    fn are_contents_the_same(&self, old: &T, new: &T) -> bool;
}

/// Index-based view over an old and a new list.
#[derive(Debug, Clone, Copy)]
pub struct ListDiff<'a, T, D> {
    old: &'a [T],
    new: &'a [T],
    differ: D,
}

impl<'a, T, D: ItemDiffer<T>> ListDiff<'a, T, D> {
    /// Creates a diff view over `old` and `new`.
    #[must_use]
    pub const fn new(old: &'a [T], new: &'a [T], differ: D) -> Self {
        Self { old, new, differ }
    }

    /// Length of the old list.
    #[must_use]
    pub const fn old_len(&self) -> usize {
        self.old.len()
    }

    /// Length of the new list.
    #[must_use]
    pub const fn new_len(&self) -> usize {
        self.new.len()
    }

    /// Whether the items at the given positions are the same item.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    #[must_use]
    pub fn are_items_the_same(&self, old_position: usize, new_position: usize) -> bool {
        self.differ
            .are_items_the_same(&self.old[old_position], &self.new[new_position])
    }

    /// Whether the items at the given positions have the same content.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    #[must_use]
    pub fn are_contents_the_same(&self, old_position: usize, new_position: usize) -> bool {
        self.differ
            .are_contents_the_same(&self.old[old_position], &self.new[new_position])
    }
}

/// Identity by a key, content by [`PartialEq`].
#[derive(Debug, Clone, Copy)]
pub struct KeyedDiffer<F> {
    key: F,
}

impl<F> KeyedDiffer<F> {
    /// Creates a differ that treats items with equal keys as the same item.
    #[must_use]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> ItemDiffer<T> for KeyedDiffer<F>
where
    T: PartialEq,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    fn are_items_the_same(&self, old: &T, new: &T) -> bool {
        (self.key)(old) == (self.key)(new)
    }

    fn are_contents_the_same(&self, old: &T, new: &T) -> bool {
        old == new
    }
}
