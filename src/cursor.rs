//! Random-access cursors over a [`RingBuffer`](crate::RingBuffer).
//!
//! A cursor is a signed logical offset from the buffer's head plus a shared
//! view of its slots. The slot it designates is `(head + offset) mod capacity`,
//! so stepping past either end wraps around the storage just like the buffer's
//! own index arithmetic.
//!
//! Distance and ordering use the logical offset and never wrap: `end - begin`
//! is always `len`, cursors ahead of `b` compare greater than `b`, and `<` is
//! transitive across the wrap point. That is what comparison sorts and binary
//! searches in [`algo`](crate::algo) rely on.
//!
//! Offsets are `isize` and wrap on overflow instead of panicking. The slot a
//! cursor designates is always computed exactly; distance and ordering stay
//! meaningful as long as offsets remain within `isize` range, which any
//! cursor moved a bounded number of capacities away from `begin` does.
//!
//! Cursors hold a borrow of the buffer taken through `&mut`, so the buffer
//! cannot be resized, pushed to or popped from while any cursor is alive.
//! Slots are exposed as [`Cell`]s, which lets any number of cursors into the
//! same buffer read and write concurrently on one thread.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::ops::{Add, AddAssign, Sub, SubAssign};

pub struct Cursor<'a, T> {
    slots: &'a [Cell<T>],
    head: usize,
    len: usize,
    offset: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [Cell<T>], head: usize, len: usize, offset: isize) -> Self {
        debug_assert!(!slots.is_empty() && head < slots.len() && len <= slots.len());
        Self {
            slots,
            head,
            len,
            offset,
        }
    }

    /// Signed logical offset from the head.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Logical index when the cursor lies within `begin ..= end`. This is the
    /// form [`RingBuffer::insert_at`](crate::RingBuffer::insert_at) and
    /// [`RingBuffer::erase_at`](crate::RingBuffer::erase_at) take.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.offset).ok().filter(|&i| i <= self.len)
    }

    /// Whether the cursor designates a live element (`begin <= self < end`).
    pub fn is_live(&self) -> bool {
        matches!(self.index(), Some(i) if i < self.len)
    }

    /// Physical slot the cursor designates.
    pub fn slot_index(&self) -> usize {
        self.wrap(self.offset)
    }

    fn wrap(&self, offset: isize) -> usize {
        let capacity = self.slots.len();
        let steps = offset.rem_euclid(capacity as isize) as usize;
        (self.head + steps) % capacity
    }

    /// The designated slot. Slots outside the live range hold stale values.
    pub fn slot(&self) -> &'a Cell<T> {
        &self.slots[self.slot_index()]
    }

    /// Slot `n` steps away, without moving the cursor.
    pub fn nth_slot(&self, n: isize) -> &'a Cell<T> {
        &self.slots[self.wrap(self.offset.wrapping_add(n))]
    }

    pub fn set(&self, value: T) {
        self.slot().set(value);
    }

    pub fn replace(&self, value: T) -> T {
        self.slot().replace(value)
    }

    /// Exchange the values under two cursors.
    pub fn swap(&self, other: &Self) {
        self.slot().swap(other.slot());
    }

    pub fn move_next(&mut self) {
        self.offset = self.offset.wrapping_add(1);
    }

    pub fn move_prev(&mut self) {
        self.offset = self.offset.wrapping_sub(1);
    }

    /// Slots from `self` up to (not including) `end`.
    pub fn walk_to(self, end: Self) -> impl Iterator<Item = &'a Cell<T>> + 'a {
        let mut cursor = self;
        iter::from_fn(move || {
            if cursor >= end {
                return None;
            }
            let slot = cursor.slot();
            cursor.move_next();
            Some(slot)
        })
    }
}

impl<T: Copy> Cursor<'_, T> {
    pub fn get(&self) -> T {
        self.slot().get()
    }
}

impl<T: Default> Cursor<'_, T> {
    /// Move the value out, leaving `T::default()` in the slot.
    pub fn take(&self) -> T {
        self.slot().take()
    }

    /// Run `f` on the value in place. The slot holds `T::default()` while
    /// `f` runs, so `f` must not read the same slot through another cursor.
    pub fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.slot().take();
        let result = f(&value);
        self.slot().set(value);
        result
    }

    pub fn cloned(&self) -> T
    where
        T: Clone,
    {
        self.read_with(T::clone)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("slot", &self.slot_index())
            .finish()
    }
}

/// Equality compares logical offsets only. Cursors from different buffers
/// must not be compared.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.offset = self.offset.wrapping_add(n);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.offset = self.offset.wrapping_sub(n);
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Signed number of forward steps from `other` to `self`.
impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        self.offset.wrapping_sub(other.offset)
    }
}
