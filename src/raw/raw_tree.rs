use core::mem;

use alloc::vec::Vec;
use smallvec::SmallVec;
use tracing::trace;

use super::handle::Handle;
use super::node::{Link, Node, Side};
use super::slab::Slab;
use crate::compare::Compare;

/// Explicit traversal stack. Sized for a reasonably shaped tree; spills to the heap
/// on degenerate ones.
type Stack<T> = SmallVec<[T; 32]>;

/// The unbalanced binary search tree backing `OrderedMap`.
///
/// Every node lives in `nodes`; a node's `left`/`right` handles are the only
/// references to its children, so each subtree has exactly one owner.
pub(crate) struct RawTree<K, V, C> {
    nodes: Slab<Node<K, V>>,
    root: Option<Handle>,
    comparator: C,
}

impl<K, V, C> RawTree<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(comparator: C) -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            comparator,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            comparator,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Returns the handle stored in `link`.
    fn link_target(&self, link: Link) -> Option<Handle> {
        match link {
            Link::Root => self.root,
            Link::Child(parent, side) => self.nodes.get(parent).child(side),
        }
    }

    /// Points `link` at `target`.
    fn set_link(&mut self, link: Link, target: Option<Handle>) {
        match link {
            Link::Root => self.root = target,
            Link::Child(parent, side) => *self.nodes.get_mut(parent).child_mut(side) = target,
        }
    }

    /// Walks `side` children from the subtree hanging at `link` as far as they go.
    ///
    /// Returns the last node reached and the link it hangs from.
    fn extreme_from(&self, mut link: Link, side: Side) -> Option<(Link, Handle)> {
        let mut handle = self.link_target(link)?;
        while let Some(next) = self.nodes.get(handle).child(side) {
            link = Link::Child(handle, side);
            handle = next;
        }
        Some((link, handle))
    }

    /// Returns the leftmost (`Side::Left`) or rightmost (`Side::Right`) node.
    pub(crate) fn extreme(&self, side: Side) -> Option<&Node<K, V>> {
        self.extreme_from(Link::Root, side).map(|(_, handle)| self.nodes.get(handle))
    }

    /// Removes every node, children before their parent.
    pub(crate) fn clear(&mut self) {
        trace!(len = self.len(), "clearing tree");

        let mut stack: Stack<(Handle, bool)> = SmallVec::new();
        stack.extend(self.root.take().map(|root| (root, false)));

        while let Some((handle, children_done)) = stack.pop() {
            if children_done {
                drop(self.nodes.remove(handle));
                continue;
            }
            let node = self.nodes.get(handle);
            stack.push((handle, true));
            stack.extend(node.right.map(|right| (right, false)));
            stack.extend(node.left.map(|left| (left, false)));
        }

        self.nodes.clear();
    }

    /// Number of levels in the tree; zero when empty.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Stack<(Handle, usize)> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 1)));

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Collects every entry in key order.
    pub(crate) fn in_order(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stack: Stack<Handle> = SmallVec::new();
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left;
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            let node = self.nodes.get(handle);
            entries.push((&node.key, &node.value));
            current = node.right;
        }
        entries
    }
}

impl<K, V, C: Compare<K>> RawTree<K, V, C> {
    /// Descends from the root looking for `key`.
    ///
    /// Returns the link the search ended at and the node it holds: the node with
    /// an equivalent key, or `None` if `key` is absent and would be attached at
    /// that link.
    pub(crate) fn search(&self, key: &K) -> (Link, Option<Handle>) {
        let mut link = Link::Root;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = if self.comparator.less(key, &node.key) {
                Side::Left
            } else if self.comparator.less(&node.key, key) {
                Side::Right
            } else {
                break;
            };
            link = Link::Child(handle, side);
            current = node.child(side);
        }
        (link, current)
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        let (_, handle) = self.search(key);
        handle.map(|handle| &self.nodes.get(handle).value)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let (_, handle) = self.search(key);
        handle.map(|handle| &mut self.nodes.get_mut(handle).value)
    }

    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.search(key).1.is_some()
    }

    /// Inserts `key`, or overwrites the value of an equivalent key already present.
    ///
    /// Returns the previous value in the overwrite case. The stored key is kept.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            (_, Some(handle)) => Some(mem::replace(&mut self.nodes.get_mut(handle).value, value)),
            (link, None) => {
                let handle = self.nodes.insert(Node::leaf(key, value));
                self.set_link(link, Some(handle));
                None
            }
        }
    }

    /// Removes `key` and returns the stored entry.
    pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let (link, handle) = self.search(key);
        let handle = handle?;

        if !self.nodes.get(handle).is_full() {
            return Some(self.unlink(link, handle));
        }

        // Two children: the in-order successor (leftmost node of the right
        // subtree) has no left child, so it can be spliced out directly once its
        // entry has been moved up into `handle`.
        let (successor_link, successor) = self.extreme_from(Link::Child(handle, Side::Right), Side::Left)?;
        trace!(?successor_link, "erasing node with two children via its successor");

        let (target, replacement) = self.nodes.get2_mut(handle, successor);
        mem::swap(&mut target.key, &mut replacement.key);
        mem::swap(&mut target.value, &mut replacement.value);
        Some(self.unlink(successor_link, successor))
    }

    /// Frees `handle`, which hangs at `link` and has at most one child, and
    /// attaches that child (if any) at `link`.
    fn unlink(&mut self, link: Link, handle: Handle) -> (K, V) {
        let node = self.nodes.remove(handle);
        debug_assert!(!node.is_full(), "`RawTree::unlink()` - node has two children!");
        self.set_link(link, node.left.or(node.right));
        (node.key, node.value)
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for RawTree<K, V, C> {
    fn clone(&self) -> Self {
        // Children are cloned first so the parent can be built with their new handles.
        fn clone_subtree<K: Clone, V: Clone>(
            old_nodes: &Slab<Node<K, V>>,
            new_nodes: &mut Slab<Node<K, V>>,
            handle: Handle,
        ) -> Handle {
            let node = old_nodes.get(handle);
            let left = node.left.map(|left| clone_subtree(old_nodes, new_nodes, left));
            let right = node.right.map(|right| clone_subtree(old_nodes, new_nodes, right));
            new_nodes.insert(Node {
                key: node.key.clone(),
                value: node.value.clone(),
                left,
                right,
            })
        }

        let mut nodes = Slab::with_capacity(self.len());
        let root = self.root.map(|root| clone_subtree(&self.nodes, &mut nodes, root));
        trace!(len = self.len(), "deep-cloned tree");

        Self {
            nodes,
            root,
            comparator: self.comparator.clone(),
        }
    }
}
