//! Human-readable dumps of an [`OrderedMap`]'s tree shape.
//!
//! Every writer walks the map through [`NodeRef`] only and writes into any
//! [`core::fmt::Write`] sink, so it works with `String` as well as with
//! formatter adapters. Entries are printed as `(key, value)`.
//!
//! ```
//! use binary_containers::{OrderedMap, render};
//!
//! let mut map = OrderedMap::new();
//! for (key, value) in [(5, 'e'), (3, 'c'), (8, 'h'), (4, 'd')] {
//!     map.insert(key, value);
//! }
//!
//! let mut levels = String::new();
//! render::write_level_order(&map, &mut levels).unwrap();
//! assert_eq!(levels, "(5, e)\n(3, c)(8, h)\nnull(4, d)nullnull");
//!
//! let mut sideways = String::new();
//! render::write_sideways(&map, &mut sideways).unwrap();
//! assert_eq!(sideways, "\t(8, h)\n(5, e)\n\t\t(4, d)\n\t(3, c)\n");
//! ```

use core::fmt::{self, Display, Write};
use core::hash::{Hash, Hasher};

use alloc::collections::VecDeque;

use crate::ordered_map::{NodeRef, OrderedMap};

/// 64-bit FNV-1a. Deterministic across runs, unlike `RandomState`.
struct FnvHasher(u64);

impl FnvHasher {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    const fn new() -> Self {
        Self(Self::OFFSET_BASIS)
    }
}

impl Hasher for FnvHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Identifier used for `key` in [`write_dot`] output: its FNV-1a hash truncated to 32 bits.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn node_id<K: Hash + ?Sized>(key: &K) -> u32 {
    let mut hasher = FnvHasher::new();
    key.hash(&mut hasher);
    hasher.finish() as u32
}

fn write_entry<K: Display, V: Display, C>(out: &mut impl Write, node: NodeRef<'_, K, V, C>) -> fmt::Result {
    write!(out, "({}, {})", node.key(), node.value())
}

/// Writes the tree breadth-first, one line per level.
///
/// Level `d` holds `2^d` positions written back to back; positions with no node
/// print `null`. Lines are separated by `\n` and output stops after the first
/// level none of whose nodes have children. An empty map writes nothing.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_level_order<K, V, C, W>(map: &OrderedMap<K, V, C>, out: &mut W) -> fmt::Result
where
    K: Display,
    V: Display,
    W: Write,
{
    let Some(root) = map.root_node() else {
        return Ok(());
    };

    let mut queue = VecDeque::new();
    queue.push_back(Some(root));

    loop {
        let mut children = 0usize;
        for _ in 0..queue.len() {
            match queue.pop_front().flatten() {
                Some(node) => {
                    write_entry(out, node)?;
                    let (left, right) = (node.left(), node.right());
                    children += usize::from(left.is_some()) + usize::from(right.is_some());
                    queue.push_back(left);
                    queue.push_back(right);
                }
                None => {
                    out.write_str("null")?;
                    queue.push_back(None);
                    queue.push_back(None);
                }
            }
        }
        if children == 0 {
            return Ok(());
        }
        out.write_char('\n')?;
    }
}

/// Writes the tree rotated a quarter turn: right subtree first, each entry on
/// its own line indented by one tab per level of depth.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_sideways<K, V, C, W>(map: &OrderedMap<K, V, C>, out: &mut W) -> fmt::Result
where
    K: Display,
    V: Display,
    W: Write,
{
    fn walk<K: Display, V: Display, C>(
        node: Option<NodeRef<'_, K, V, C>>,
        depth: usize,
        out: &mut impl Write,
    ) -> fmt::Result {
        let Some(node) = node else {
            return Ok(());
        };
        walk(node.right(), depth + 1, out)?;
        for _ in 0..depth {
            out.write_char('\t')?;
        }
        write_entry(out, node)?;
        out.write_char('\n')?;
        walk(node.left(), depth + 1, out)
    }

    walk(map.root_node(), 0, out)
}

/// Writes the tree as a Graphviz `digraph`.
///
/// Nodes are visited in pre-order. Each gets a declaration labelled
/// `key [value]` and an edge from its parent; the root gets a bare node
/// statement instead of an edge. Node names are `node_` followed by
/// [`node_id`] of the key.
///
/// ```
/// use binary_containers::{OrderedMap, render};
///
/// let mut map = OrderedMap::new();
/// map.insert(2, "two");
/// map.insert(1, "one");
///
/// let mut dot = String::new();
/// render::write_dot(&map, &mut dot).unwrap();
/// let (two, one) = (render::node_id(&2), render::node_id(&1));
/// assert_eq!(
///     dot,
///     format!(
///         "digraph Tree {{\n\
///          \tnode_{two}[label=\"2 [two]\"];\n\
///          \tnode_{two};\n\
///          \tnode_{one}[label=\"1 [one]\"];\n\
///          \tnode_{two} -> node_{one};\n\
///          }}\n"
///     )
/// );
/// ```
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_dot<K, V, C, W>(map: &OrderedMap<K, V, C>, out: &mut W) -> fmt::Result
where
    K: Display + Hash,
    V: Display,
    W: Write,
{
    fn walk<K: Display + Hash, V: Display, C>(
        node: Option<NodeRef<'_, K, V, C>>,
        parent: Option<u32>,
        out: &mut impl Write,
    ) -> fmt::Result {
        let Some(node) = node else {
            return Ok(());
        };
        let id = node_id(node.key());
        writeln!(out, "\tnode_{id}[label=\"{} [{}]\"];", node.key(), node.value())?;
        match parent {
            Some(parent) => writeln!(out, "\tnode_{parent} -> node_{id};")?,
            None => writeln!(out, "\tnode_{id};")?,
        }
        walk(node.left(), Some(id), out)?;
        walk(node.right(), Some(id), out)
    }

    writeln!(out, "digraph Tree {{")?;
    walk(map.root_node(), None, out)?;
    writeln!(out, "}}")
}
