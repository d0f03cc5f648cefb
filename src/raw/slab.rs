use alloc::vec::Vec;

use super::handle::Handle;

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    // Next vacant slot in the free list.
    Vacant(Option<Handle>),
}

/// Slot storage with an intrusive free list.
///
/// Freed slots are threaded into a singly linked list through the `Vacant`
/// variant and handed out again before the backing `Vec` grows.
#[derive(Clone)]
pub(crate) struct Slab<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Handle>,
    len: usize,
}

impl<T> Slab<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, element: T) -> Handle {
        self.len += 1;
        if let Some(handle) = self.free_head {
            let slot = &mut self.slots[handle.to_index()];
            let Slot::Vacant(next) = *slot else {
                panic!("`Slab::insert()` - free list points at an occupied slot!");
            };
            self.free_head = next;
            *slot = Slot::Occupied(element);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Slab::insert()` - slab is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Slot::Occupied(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.to_index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Slab::get()` - `handle` is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.to_index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Slab::get_mut()` - `handle` is vacant!"),
        }
    }

    /// Mutable access to two distinct slots at once.
    pub(crate) fn get2_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        let (ia, ib) = (a.to_index(), b.to_index());
        assert_ne!(ia, ib, "`Slab::get2_mut()` - handles alias!");
        let (first, second) = if ia < ib {
            let (lo, hi) = self.slots.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        };
        match (first, second) {
            (Slot::Occupied(x), Slot::Occupied(y)) => (x, y),
            _ => panic!("`Slab::get2_mut()` - `handle` is vacant!"),
        }
    }

    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let slot = &mut self.slots[handle.to_index()];
        match core::mem::replace(slot, Slot::Vacant(self.free_head)) {
            Slot::Occupied(element) => {
                self.free_head = Some(handle);
                self.len -= 1;
                element
            }
            Slot::Vacant(next) => {
                *slot = Slot::Vacant(next);
                panic!("`Slab::remove()` - `handle` is vacant!");
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}
