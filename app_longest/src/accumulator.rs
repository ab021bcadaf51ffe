use std::collections::BTreeSet;

/// Length of an item as far as [`TieSet::offer`] is concerned.
pub trait Measure {
    fn measure(&self) -> usize;
}

impl Measure for &str {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

/// Keeps every distinct item of the greatest length seen so far.
///
/// A longer offer replaces the set, an equal one joins it, a shorter one is
/// dropped. Offers of length zero are ignored, so an empty set always has
/// `max() == 0`. Absorbing is associative and commutative, which lets
/// partial sets be combined in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieSet<T: Ord> {
    max: usize,
    items: BTreeSet<T>,
}

impl<T: Ord> Default for TieSet<T> {
    fn default() -> Self {
        Self {
            max: 0,
            items: BTreeSet::new(),
        }
    }
}

impl<T: Ord> TieSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(len: usize, items: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self::new();
        set.offer_all(len, items);
        set
    }

    pub fn offer(&mut self, item: T)
    where
        T: Measure,
    {
        let len = item.measure();
        self.offer_all(len, std::iter::once(item));
    }

    /// Offers a batch whose items all have length `len`.
    pub fn offer_all(&mut self, len: usize, items: impl IntoIterator<Item = T>) {
        let mut items = items.into_iter().peekable();
        if len == 0 || len < self.max || items.peek().is_none() {
            return;
        }
        if len > self.max {
            self.max = len;
            self.items.clear();
        }
        self.items.extend(items);
    }

    pub fn absorb(&mut self, other: TieSet<T>) {
        self.offer_all(other.max, other.items);
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn items(&self) -> &BTreeSet<T> {
        &self.items
    }

    pub fn into_parts(self) -> (usize, BTreeSet<T>) {
        (self.max, self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
