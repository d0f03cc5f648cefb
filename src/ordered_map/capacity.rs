use super::OrderedMap;
use crate::compare::Less;
use crate::raw::RawTree;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Less)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `comparator` with room for at least
    /// `capacity` nodes.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        OrderedMap {
            raw: RawTree::with_capacity(capacity, comparator),
        }
    }

    /// Returns how many nodes the map can hold without reallocating.
    ///
    /// Slots freed by [`erase`](OrderedMap::erase) are reused before the map grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
