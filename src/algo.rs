//! Generic algorithms over a `[first, last)` cursor range.
//!
//! These only use what a random-access cursor offers (offsetting, distance,
//! ordering, moves and swaps through slots), so they work on any sub-range of
//! a buffer, wrapped or not. Elements are moved rather than copied, which is
//! why `T: Default` is needed: a slot briefly holds `T::default()` while its
//! value is out.

use std::cmp::Ordering;

use crate::cursor::Cursor;

/// Ranges up to this length are insertion sorted.
const INSERTION_SORT_MAX: isize = 16;

/// Compare the values under two cursors in place.
fn compare_at<T, F>(a: Cursor<'_, T>, b: Cursor<'_, T>, compare: &mut F) -> Ordering
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    if a.slot_index() == b.slot_index() {
        return a.read_with(|x| compare(x, x));
    }
    a.read_with(|x| b.read_with(|y| compare(x, y)))
}

/// Sort `[first, last)` in place. Not stable; O(n log n).
pub fn sort<T: Default + Ord>(first: Cursor<'_, T>, last: Cursor<'_, T>) {
    sort_by(first, last, T::cmp);
}

pub fn sort_by<T, F>(first: Cursor<'_, T>, last: Cursor<'_, T>, mut compare: F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = last - first;
    if len < 2 {
        return;
    }
    if len <= INSERTION_SORT_MAX {
        insertion_sort(first, last, &mut compare);
    } else {
        heap_sort(first, len, &mut compare);
    }
}

fn insertion_sort<T, F>(first: Cursor<'_, T>, last: Cursor<'_, T>, compare: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut next = first + 1;
    while next < last {
        let value = next.take();
        let mut hole = next;
        while hole > first {
            let prev = hole - 1;
            if prev.read_with(|p| compare(&value, p)) != Ordering::Less {
                break;
            }
            hole.set(prev.take());
            hole = prev;
        }
        hole.set(value);
        next.move_next();
    }
}

fn heap_sort<T, F>(first: Cursor<'_, T>, len: isize, compare: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    for root in (0..len / 2).rev() {
        sift_down(first, root, len, compare);
    }
    for end in (1..len).rev() {
        first.swap(&(first + end));
        sift_down(first, 0, end, compare);
    }
}

/// Restore the max-heap property below `node` within `first .. first + end`.
fn sift_down<T, F>(first: Cursor<'_, T>, mut node: isize, end: isize, compare: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            return;
        }
        if child + 1 < end
            && compare_at(first + child, first + child + 1, compare) == Ordering::Less
        {
            child += 1;
        }
        let (parent, larger) = (first + node, first + child);
        if compare_at(parent, larger, compare) != Ordering::Less {
            return;
        }
        parent.swap(&larger);
        node = child;
    }
}

/// First cursor in `[first, last)` for which `pred` is false, assuming the
/// range is partitioned by `pred`. Returns `last` if there is none.
pub fn partition_point<'a, T, P>(first: Cursor<'a, T>, last: Cursor<'a, T>, mut pred: P) -> Cursor<'a, T>
where
    T: Default,
    P: FnMut(&T) -> bool,
{
    let mut first = first;
    let mut count = last - first;
    while count > 0 {
        let step = count / 2;
        let mid = first + step;
        if mid.read_with(&mut pred) {
            first = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }
    first
}

/// First position where `value` could be inserted keeping the range sorted.
pub fn lower_bound<'a, T: Default + Ord>(first: Cursor<'a, T>, last: Cursor<'a, T>, value: &T) -> Cursor<'a, T> {
    partition_point(first, last, |x| x < value)
}

/// Last position where `value` could be inserted keeping the range sorted.
pub fn upper_bound<'a, T: Default + Ord>(first: Cursor<'a, T>, last: Cursor<'a, T>, value: &T) -> Cursor<'a, T> {
    partition_point(first, last, |x| x <= value)
}

pub fn is_sorted_by<T, F>(first: Cursor<'_, T>, last: Cursor<'_, T>, mut compare: F) -> bool
where
    T: Default,
    F: FnMut(&T, &T) -> Ordering,
{
    if last - first < 2 {
        return true;
    }
    let mut prev = first;
    let mut cur = first + 1;
    while cur < last {
        if compare_at(prev, cur, &mut compare) == Ordering::Greater {
            return false;
        }
        prev = cur;
        cur.move_next();
    }
    true
}

pub fn is_sorted<T: Default + Ord>(first: Cursor<'_, T>, last: Cursor<'_, T>) -> bool {
    is_sorted_by(first, last, T::cmp)
}

/// Reverse `[first, last)` in place.
pub fn reverse<T>(mut first: Cursor<'_, T>, mut last: Cursor<'_, T>) {
    while first < last {
        last.move_prev();
        if first >= last {
            break;
        }
        first.swap(&last);
        first.move_next();
    }
}
