//! Ordering predicates shared by [`OrderedMap`](crate::OrderedMap) and
//! [`PriorityQueue`](crate::PriorityQueue).
//!
//! Both containers are driven by a strict weak ordering rather than by `Ord`
//! directly, so the ordering can be swapped without wrapping the element type.
//! Two values `a` and `b` are *equivalent* when neither `less(a, b)` nor
//! `less(b, a)` holds; `PartialEq` is never consulted.

use core::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// Any `Fn(&T, &T) -> bool` closure is a `Compare<T>`.
///
/// # Examples
///
/// ```
/// use binary_containers::{Compare, Greater, Less};
///
/// assert!(Less.less(&1, &2));
/// assert!(Greater.less(&2, &1));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// assert!(by_len.equivalent(&"ab", &"cd"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if neither value is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// Three-way comparison derived from [`less`](Compare::less).
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The natural `Ord` ordering. Makes [`PriorityQueue`](crate::PriorityQueue) a max-heap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Less;

/// The reverse of the natural `Ord` ordering. Makes [`PriorityQueue`](crate::PriorityQueue) a min-heap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Greater;

impl<T: ?Sized + Ord> Compare<T> for Less {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized + Ord> Compare<T> for Greater {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn closures_are_comparators() {
        let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
        assert!(by_abs.less(&1, &-2));
        assert!(by_abs.equivalent(&3, &-3));
        assert_eq!(by_abs.compare(&-4, &2), Ordering::Greater);
    }

    proptest! {
        #[test]
        fn less_matches_ord(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Less.compare(&a, &b), a.cmp(&b));
            prop_assert_eq!(Greater.compare(&a, &b), b.cmp(&a));
            prop_assert_eq!(Less.equivalent(&a, &b), a == b);
        }
    }
}
