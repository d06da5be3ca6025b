use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::algo;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::iter::{Iter, IterMut};

/// Capacity used by [`RingBuffer::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Fixed-capacity double-ended circular buffer. Pre-allocated, never grows on
/// its own; capacity only changes through [`RingBuffer::reserve`].
///
/// Live elements occupy slots `head, head + 1, .., head + len - 1` modulo
/// capacity. `len` is authoritative: `head == tail` both when empty and when
/// full.
#[derive(Clone)]
pub struct RingBuffer<T> {
    buf: Box<[T]>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Slot holding the first logical element.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Slot one past the last logical element.
    pub fn tail(&self) -> usize {
        self.slot_of(self.len)
    }

    /// Physical slot of logical index `index` (`index <= len`).
    fn slot_of(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    fn full_error(&self) -> Error {
        Error::Full {
            capacity: self.capacity(),
        }
    }

    /// Append at the tail. O(1).
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(self.full_error());
        }
        let tail = self.tail();
        self.buf[tail] = value;
        self.len += 1;
        Ok(())
    }

    /// Prepend at the head. O(1).
    pub fn push_front(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(self.full_error());
        }
        let cap = self.capacity();
        self.head = (self.head + cap - 1) % cap;
        self.buf[self.head] = value;
        self.len += 1;
        Ok(())
    }

    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.buf[self.head])
    }

    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.buf[self.slot_of(self.len - 1)])
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&mut self.buf[self.head])
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let slot = self.slot_of(self.len - 1);
        Ok(&mut self.buf[slot])
    }

    /// Element at logical index `index`, counted from the head.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.buf[self.slot_of(index)])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot_of(index);
        Some(&mut self.buf[slot])
    }

    /// Drop all elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// The live range as two slices: head-to-end of storage, then the wrapped
    /// part (empty when the range does not wrap).
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let end = self.head + self.len;
        let cap = self.capacity();
        if end <= cap {
            (&self.buf[self.head..end], &[])
        } else {
            let (wrapped, rest) = self.buf.split_at(self.head);
            (rest, &wrapped[..end - cap])
        }
    }

    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let head = self.head;
        let end = head + self.len;
        let cap = self.capacity();
        if end <= cap {
            (&mut self.buf[head..end], &mut [])
        } else {
            let (wrapped, rest) = self.buf.split_at_mut(head);
            (rest, &mut wrapped[..end - cap])
        }
    }

    /// Rotate storage so the live range starts at slot 0 and return it.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if self.head != 0 {
            log::debug!("rotating ring storage by {} slots", self.head);
            self.buf.rotate_left(self.head);
            self.head = 0;
        }
        &mut self.buf[..self.len]
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slices())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slices())
    }

    /// Cursor at the head.
    ///
    /// The cursor borrows the buffer mutably, so the buffer cannot be resized
    /// (or touched at all) while it is alive. Use [`RingBuffer::bounds`] when
    /// both ends are needed at once.
    pub fn begin(&mut self) -> Cursor<'_, T> {
        self.bounds().0
    }

    /// Cursor one past the last element (at the tail slot).
    pub fn end(&mut self) -> Cursor<'_, T> {
        self.bounds().1
    }

    /// `(begin, end)` over one shared borrow.
    ///
    /// Both cursors hold the buffer's `&mut` borrow until their last use.
    /// Mutating the buffer in the meantime does not compile:
    ///
    /// ```compile_fail
    /// let mut buf = ringdeque::RingBuffer::<i32>::new(4);
    /// let (begin, _end) = buf.bounds();
    /// buf.push_back(1).unwrap();
    /// begin.set(2);
    /// ```
    pub fn bounds(&mut self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        let (head, len) = (self.head, self.len);
        let slots = Cell::from_mut(&mut *self.buf).as_slice_of_cells();
        let begin = Cursor::new(slots, head, len, 0);
        (begin, begin + len as isize)
    }

    /// Binary search over a buffer sorted by `f`, like
    /// [`slice::binary_search_by`]. `Err` carries the insertion index.
    pub fn binary_search_by<F>(&self, mut f: F) -> std::result::Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let index = self.partition_point(|x| f(x) == Ordering::Less);
        match self.get(index) {
            Some(x) if f(x) == Ordering::Equal => Ok(index),
            _ => Err(index),
        }
    }

    /// Index of the first element for which `pred` is false, assuming the
    /// buffer is partitioned by it.
    pub fn partition_point<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let (mut lo, mut hi) = (0, self.len);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(&self.buf[self.slot_of(mid)]) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl<T: Clone + Default> RingBuffer<T> {
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be > 0");
        Self {
            buf: vec![T::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument {
                requested: capacity,
                len: 0,
            });
        }
        Ok(Self::new(capacity))
    }

    /// Remove and return the last element. The slot is left holding
    /// `T::default()`.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let slot = self.slot_of(self.len - 1);
        let value = mem::take(&mut self.buf[slot]);
        self.len -= 1;
        Ok(value)
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let value = mem::take(&mut self.buf[self.head]);
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    /// Insert `value` so it ends up at logical index `index`
    /// (`0 ..= len`). Elements from `index` on move one slot toward the tail;
    /// elements before it are untouched. O(len - index).
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if self.is_full() {
            return Err(self.full_error());
        }
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        log::trace!("insert at {index}: shifting {} toward tail", self.len - index);
        for i in (index..self.len).rev() {
            let (dst, src) = (self.slot_of(i + 1), self.slot_of(i));
            self.buf.swap(dst, src);
        }
        let slot = self.slot_of(index);
        self.buf[slot] = value;
        // tail is derived from len, so this also advances it.
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at logical index `index`. Elements after
    /// it move one slot toward the head. O(len - index).
    pub fn erase_at(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        log::trace!("erase at {index}: shifting {} toward head", self.len - index - 1);
        let slot = self.slot_of(index);
        let removed = mem::take(&mut self.buf[slot]);
        for i in index..self.len - 1 {
            let (dst, src) = (self.slot_of(i), self.slot_of(i + 1));
            self.buf.swap(dst, src);
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Reallocate to exactly `new_capacity` slots, which may be smaller than
    /// the current capacity as long as it still holds every live element.
    /// Elements keep their logical order and start at slot 0.
    ///
    /// Taking `&mut self` ends every outstanding [`Cursor`] borrow, so no
    /// cursor can observe the old allocation. Holding one across the call is
    /// rejected by the compiler:
    ///
    /// ```compile_fail
    /// let mut buf = ringdeque::RingBuffer::<i32>::new(4);
    /// let begin = buf.begin();
    /// buf.reserve(8).unwrap();
    /// begin.set(1);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 || new_capacity < self.len {
            return Err(Error::InvalidArgument {
                requested: new_capacity,
                len: self.len,
            });
        }
        let mut buf = vec![T::default(); new_capacity].into_boxed_slice();
        for (dst, src) in buf.iter_mut().zip(self.iter_mut()) {
            *dst = mem::take(src);
        }
        log::debug!(
            "ring storage reallocated: {} -> {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.len,
        );
        // Old block is dropped only now, after the move.
        self.buf = buf;
        self.head = 0;
        Ok(())
    }

    /// Sort the logical sequence in place. Not stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (first, last) = self.bounds();
        algo::sort_by(first, last, compare);
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + Default> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equality of logical contents; capacity and head position are ignored.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for length {len}"))
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for length {len}"))
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
