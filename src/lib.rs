//! Binary search tree and binary heap containers for Rust.
//!
//! This crate provides two independent generic containers:
//!
//! - [`OrderedMap`] - an ordered key-value map stored as an unbalanced binary
//!   search tree, with [`insert`](OrderedMap::insert), [`find`](OrderedMap::find),
//!   [`erase`](OrderedMap::erase), [`min`](OrderedMap::min) and
//!   [`max`](OrderedMap::max).
//! - [`PriorityQueue`] - a binary-heap priority queue with
//!   [`push`](PriorityQueue::push), [`pop`](PriorityQueue::pop) and
//!   [`top`](PriorityQueue::top).
//!
//! Both are ordered by an injectable [`Compare`] strategy rather than by `Ord`
//! directly, and both report access to something that is not there (an empty
//! container, a missing key) as an [`Error`] instead of panicking.
//!
//! # Example
//!
//! ```
//! use binary_containers::{OrderedMap, PriorityQueue};
//!
//! let mut map = OrderedMap::new();
//! for key in [5, 3, 8, 1, 4] {
//!     map.insert(key, key * 10);
//! }
//! let keys: Vec<_> = map.in_order().into_iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [1, 3, 4, 5, 8]);
//!
//! let mut queue = PriorityQueue::new();
//! for value in [5, 3, 8, 1, 9] {
//!     queue.push(value);
//! }
//! assert_eq!(queue.pop(), Ok(9));
//! assert_eq!(queue.top(), Ok(&8));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Explicit failures** - `min`/`max`/`top`/`pop` on an empty container return [`Error::Empty`]
//! - **Inspectable shape** - [`NodeRef`] exposes the tree structure read-only; the [`render`]
//!   module draws it as text or Graphviz
//!
//! # Implementation
//!
//! Tree nodes live in a slab owned by the map and refer to their children by handle, so
//! each subtree has exactly one owner and dropping a map never recurses. The tree is not
//! rebalanced: its height depends on insertion order and is n in the worst case.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;

pub mod ordered_map;
pub mod priority_queue;
pub mod render;

pub use compare::{Compare, Greater, Less};
pub use error::{Error, Result};
pub use ordered_map::{NodeRef, OrderedMap};
pub use priority_queue::PriorityQueue;
