use core::fmt;

use alloc::vec::Vec;

use crate::compare::{Compare, Less};
use crate::error::{Error, Result};
use crate::raw::{Handle, Node, RawTree, Side};

mod capacity;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Keys are ordered by a [`Compare`] strategy, `Less` (the key's `Ord`) unless
/// another one is supplied through [`OrderedMap::with_comparator`]. Two keys are
/// the same key when neither compares less than the other, so keys never need
/// `PartialEq`.
///
/// The tree is never rebalanced: its shape is determined entirely by insertion
/// order. Inserting keys in sorted order produces a tree of height n, and every
/// operation that walks it costs O(n).
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key changes while it is in the map.
///
/// # Examples
///
/// ```
/// use binary_containers::{Error, OrderedMap};
///
/// let mut ages = OrderedMap::new();
/// ages.insert("Carol", 41);
/// ages.insert("Alice", 33);
/// ages.insert("Bob", 27);
///
/// assert_eq!(ages.find(&"Bob"), Ok(&27));
/// assert_eq!(ages.find(&"Dave"), Err(Error::KeyNotFound));
/// assert_eq!(ages.min(), Ok((&"Alice", &33)));
///
/// // "Carol" was inserted first, so it sits at the root.
/// assert_eq!(ages.root(), Ok((&"Carol", &41)));
///
/// ages.erase(&"Carol");
/// let names: Vec<_> = ages.in_order().into_iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, ["Alice", "Bob"]);
/// ```
///
/// A custom ordering:
///
/// ```
/// use binary_containers::OrderedMap;
///
/// let mut by_len = OrderedMap::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
/// by_len.insert("three", 3);
/// by_len.insert("one", 1);
/// // Same length as "one", so it is the same key.
/// by_len.insert("two", 2);
///
/// assert_eq!(by_len.len(), 2);
/// assert_eq!(by_len.find(&"six"), Ok(&2));
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct OrderedMap<K, V, C = Less> {
    raw: RawTree<K, V, C>,
}

/// A read-only view of one node of an [`OrderedMap`].
///
/// Lets code outside the map walk the tree's actual shape, e.g. to draw it. See
/// the [`render`](crate::render) module.
///
/// # Examples
///
/// ```
/// use binary_containers::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// for key in [2, 1, 3] {
///     map.insert(key, ());
/// }
///
/// let root = map.root_node().unwrap();
/// assert_eq!(*root.key(), 2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert_eq!(root.right().map(|node| *node.key()), Some(3));
/// assert!(root.left().unwrap().is_leaf());
/// ```
pub struct NodeRef<'a, K, V, C = Less> {
    tree: &'a RawTree<K, V, C>,
    handle: Handle,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap` ordered by the keys' `Ord`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Makes a new, empty `OrderedMap` ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        OrderedMap {
            raw: RawTree::new(comparator),
        }
    }

    /// Returns the map's comparator.
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry. Each node is released after both of its children.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn min(&self) -> Result<(&K, &V)> {
        self.raw.extreme(Side::Left).map(entry).ok_or(Error::Empty)
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn max(&self) -> Result<(&K, &V)> {
        self.raw.extreme(Side::Right).map(entry).ok_or(Error::Empty)
    }

    /// Returns the entry stored at the root of the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the map is empty.
    pub fn root(&self) -> Result<(&K, &V)> {
        self.root_node().map(|node| (node.key(), node.value())).ok_or(Error::Empty)
    }

    /// Returns a view of the root node, or `None` if the map is empty.
    #[must_use]
    pub fn root_node(&self) -> Option<NodeRef<'_, K, V, C>> {
        self.raw.root().map(|handle| NodeRef { tree: &self.raw, handle })
    }

    /// Returns every entry in ascending key order.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn in_order(&self) -> Vec<(&K, &V)> {
        self.raw.in_order()
    }

    /// Returns the number of levels in the tree, zero when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// // Sorted insertion degenerates into a list.
    /// for key in 0..4 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}

impl<K, V, C: Compare<K>> OrderedMap<K, V, C> {
    /// Inserts a key-value pair into the map.
    ///
    /// If an equivalent key is already present its value is overwritten and the
    /// old value is returned; the stored key is kept and the length is unchanged.
    /// Otherwise a new leaf node is attached and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no equivalent key is present.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn find(&self, key: &K) -> Result<&V> {
        self.raw.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no equivalent key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// *map.find_mut(&1)? = "b";
    /// assert_eq!(map.find(&1), Ok(&"b"));
    /// # Ok::<(), binary_containers::Error>(())
    /// ```
    pub fn find_mut(&mut self, key: &K) -> Result<&mut V> {
        self.raw.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map holds a key equivalent to `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.raw.contains_key(key)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Erasing an absent key does nothing. A node with two children is replaced
    /// by its in-order successor, the smallest key of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_containers::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.erase(&1), Some("a"));
    /// assert_eq!(map.erase(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn erase(&mut self, key: &K) -> Option<V> {
        self.raw.remove_entry(key).map(|(_, value)| value)
    }
}

fn entry<K, V>(node: &Node<K, V>) -> (&K, &V) {
    (&node.key, &node.value)
}

impl<'a, K, V, C> NodeRef<'a, K, V, C> {
    fn node(&self) -> &'a Node<K, V> {
        self.tree.node(self.handle)
    }

    fn child(&self, side: Side) -> Option<Self> {
        self.node().child(side).map(|handle| NodeRef { tree: self.tree, handle })
    }

    /// The node's key.
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// The node's value.
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// The root of the left subtree, holding only smaller keys.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }

    /// The root of the right subtree, holding only larger keys.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
}

impl<K, V, C> Clone for NodeRef<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for NodeRef<'_, K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for NodeRef<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("key", self.key()).field("value", self.value()).finish()
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for OrderedMap<K, V, C> {
    /// Deep copy with the same tree shape as `self`.
    fn clone(&self) -> Self {
        OrderedMap { raw: self.raw.clone() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.in_order()).finish()
    }
}

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self {
        OrderedMap::with_comparator(C::default())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::compare::Greater;
    use alloc::format;

    #[test]
    fn empty_map_reports_errors() {
        let mut map: OrderedMap<i32, i32> = OrderedMap::new();
        assert_eq!(map.min(), Err(Error::Empty));
        assert_eq!(map.max(), Err(Error::Empty));
        assert_eq!(map.root(), Err(Error::Empty));
        assert_eq!(map.find(&1), Err(Error::KeyNotFound));
        assert_eq!(map.find_mut(&1), Err(Error::KeyNotFound));
        assert_eq!(map.erase(&1), None);
        assert!(map.root_node().is_none());
        assert_eq!(map.height(), 0);
    }

    #[test]
    fn min_and_max_follow_comparator() {
        let mut map = OrderedMap::with_comparator(Greater);
        for key in [5, 3, 8, 1, 4] {
            map.insert(key, key * 2);
        }
        assert_eq!(map.min(), Ok((&8, &16)));
        assert_eq!(map.max(), Ok((&1, &2)));
    }

    #[test]
    fn debug_prints_in_key_order() {
        let mut map = OrderedMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');
        assert_eq!(format!("{map:?}"), "{1: 'a', 2: 'b'}");
    }

    #[test]
    fn default_uses_default_comparator() {
        let mut map: OrderedMap<i32, (), Greater> = OrderedMap::default();
        map.insert(1, ());
        map.insert(2, ());
        assert_eq!(map.min(), Ok((&2, &())));
    }
}
