use core::fmt;

use alloc::vec::Vec;
use tracing::trace;

use crate::compare::{Compare, Less};
use crate::error::{Error, Result};

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A priority queue implemented with a binary heap.
///
/// Elements are kept in one `Vec` laid out as a complete binary tree: the parent
/// of position `i` is `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`.
/// No element is ever ordered before its parent, so with the default [`Less`]
/// comparator this is a max-heap and [`top`](PriorityQueue::top) is the largest
/// element. [`Greater`](crate::Greater) gives a min-heap.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element changes while it is in the queue.
///
/// # Examples
///
/// ```
/// use binary_containers::{Error, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
/// queue.push(1);
/// queue.push(5);
/// queue.push(2);
///
/// assert_eq!(queue.top(), Ok(&5));
/// assert_eq!(queue.len(), 3);
///
/// assert_eq!(queue.pop(), Ok(5));
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.pop(), Err(Error::Empty));
/// ```
///
/// ## Min-heap
///
/// ```
/// use binary_containers::{Greater, PriorityQueue};
///
/// let mut queue = PriorityQueue::with_comparator(Greater);
/// for value in [3, 1, 2] {
///     queue.push(value);
/// }
/// assert_eq!(queue.pop(), Ok(1));
/// ```
///
/// # Complexity
///
/// | [push] | [pop]         | [top] |
/// |--------|---------------|-------|
/// | *O*(log n) | *O*(log n) | *O*(1) |
///
/// [push]: PriorityQueue::push
/// [pop]: PriorityQueue::pop
/// [top]: PriorityQueue::top
#[derive(Clone)]
pub struct PriorityQueue<T, C = Less> {
    data: Vec<T>,
    comparator: C,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty max-heap.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Less)
    }

    /// Creates an empty max-heap with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Less)
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        PriorityQueue {
            data: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty queue ordered by `comparator` with room for at least
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        PriorityQueue {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the queue's comparator.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the highest-ranked element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn top(&self) -> Result<&T> {
        self.data.first().ok_or(Error::Empty)
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns how many elements the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Adds `value` to the queue.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-ranked element.
    ///
    /// The last element takes the vacated root position and is sifted down.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::Empty);
        }
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        trace!(len = self.data.len(), "popped top of heap");
        Ok(top)
    }

    /// Moves the element at `index` toward the root while its parent ranks lower.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if !self.comparator.less(&self.data[up], &self.data[index]) {
                break;
            }
            self.data.swap(up, index);
            index = up;
        }
    }

    /// Moves the element at `index` away from the root while a child outranks it.
    ///
    /// At each level the element is compared with the dominant child: the right
    /// one only if it exists and the left one ranks lower than it.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }
            let right = right_child(index);
            let child = if right < len && self.comparator.less(&self.data[left], &self.data[right]) {
                right
            } else {
                left
            };
            if !self.comparator.less(&self.data[index], &self.data[child]) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    /// Prints the elements in heap order (position 0 first).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        PriorityQueue::with_comparator(C::default())
    }
}
