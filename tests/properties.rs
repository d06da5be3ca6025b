use proptest::prelude::*;
use ringdeque::{algo, Error, RingBuffer};

const MAX_CAPACITY: usize = 32;

/// Buffer with the given contents whose head has been moved `shift` slots.
fn build(capacity: usize, shift: usize, values: &[i32]) -> RingBuffer<i32> {
    let mut buf = RingBuffer::new(capacity);
    for _ in 0..shift {
        buf.push_back(0).unwrap();
        buf.pop_front().unwrap();
    }
    for &v in values {
        buf.push_back(v).unwrap();
    }
    buf
}

/// (capacity, head shift, contents) with contents fitting in capacity.
fn layout() -> impl Strategy<Value = (usize, usize, Vec<i32>)> {
    (1..=MAX_CAPACITY).prop_flat_map(|capacity| {
        (
            Just(capacity),
            0..capacity,
            prop::collection::vec(any::<i32>(), 0..=capacity),
        )
    })
}

proptest! {
    /// Property: push_back appends at the back and grows len by one until full
    #[test]
    fn push_back_grows_by_one((capacity, shift, values) in layout(), v in any::<i32>()) {
        let mut buf = build(capacity, shift, &values);
        let before = buf.len();
        if buf.is_full() {
            prop_assert_eq!(buf.push_back(v), Err(Error::Full { capacity }));
            prop_assert_eq!(buf.len(), before);
        } else {
            buf.push_back(v).unwrap();
            prop_assert_eq!(buf.back(), Ok(&v));
            prop_assert_eq!(buf.len(), before + 1);
        }
        prop_assert!(buf.len() <= buf.capacity());
    }

    /// Property: push_front prepends at the front and grows len by one until full
    #[test]
    fn push_front_grows_by_one((capacity, shift, values) in layout(), v in any::<i32>()) {
        let mut buf = build(capacity, shift, &values);
        let before = buf.len();
        if buf.is_full() {
            prop_assert_eq!(buf.push_front(v), Err(Error::Full { capacity }));
        } else {
            buf.push_front(v).unwrap();
            prop_assert_eq!(buf.front(), Ok(&v));
            prop_assert_eq!(buf.len(), before + 1);
        }
    }

    /// Property: pops shrink len by one and never touch capacity
    #[test]
    fn pops_shrink_by_one((capacity, shift, values) in layout()) {
        let mut buf = build(capacity, shift, &values);
        let mut model = values.clone();
        while !model.is_empty() {
            prop_assert_eq!(buf.pop_front(), Ok(model.remove(0)));
            if let Some(last) = model.pop() {
                prop_assert_eq!(buf.pop_back(), Ok(last));
            }
            prop_assert_eq!(buf.len(), model.len());
            prop_assert_eq!(buf.capacity(), capacity);
        }
        prop_assert_eq!(buf.pop_back(), Err(Error::Empty));
        prop_assert_eq!(buf.pop_front(), Err(Error::Empty));
    }

    /// Property: begin..end walks exactly len elements matching at(0..len)
    #[test]
    fn cursor_walk_matches_indexing((capacity, shift, values) in layout()) {
        let mut buf = build(capacity, shift, &values);
        let by_index: Vec<i32> = (0..buf.len()).map(|i| *buf.at(i).unwrap()).collect();
        prop_assert_eq!(buf.at(buf.len()), Err(Error::OutOfRange { index: values.len(), len: values.len() }));

        let (begin, end) = buf.bounds();
        prop_assert_eq!((end - begin) as usize, values.len());
        let walked: Vec<i32> = begin.walk_to(end).map(|slot| slot.get()).collect();
        prop_assert_eq!(&walked, &by_index);
        prop_assert_eq!(walked, values);
    }

    /// Property: insert_at followed by erase_at at the same index is a no-op
    #[test]
    fn insert_erase_round_trip((capacity, shift, values) in layout(), pick in any::<prop::sample::Index>(), v in any::<i32>()) {
        prop_assume!(values.len() < capacity);
        let mut buf = build(capacity, shift, &values);
        let index = pick.index(values.len() + 1);

        buf.insert_at(index, v).unwrap();
        prop_assert_eq!(buf.at(index), Ok(&v));
        prop_assert_eq!(buf.tail(), (buf.head() + buf.len()) % capacity);
        prop_assert_eq!(buf.erase_at(index), Ok(v));
        prop_assert_eq!(buf.to_vec(), values);
    }

    /// Property: reserve keeps the sequence and moves head to slot 0
    #[test]
    fn reserve_preserves_sequence((capacity, shift, values) in layout(), extra in 0usize..8) {
        let mut buf = build(capacity, shift, &values);
        let new_capacity = values.len().max(1) + extra;
        buf.reserve(new_capacity).unwrap();
        prop_assert_eq!(buf.capacity(), new_capacity);
        prop_assert_eq!(buf.head(), 0);
        prop_assert_eq!(buf.to_vec(), values.clone());

        if !values.is_empty() {
            prop_assert_eq!(
                buf.reserve(values.len() - 1),
                Err(Error::InvalidArgument { requested: values.len() - 1, len: values.len() })
            );
            prop_assert_eq!(buf.to_vec(), values);
        }
    }

    /// Property: cursor sort agrees with slice sort at any head position
    #[test]
    fn cursor_sort_matches_slice_sort((capacity, shift, values) in layout()) {
        let mut buf = build(capacity, shift, &values);
        let (first, last) = buf.bounds();
        algo::sort(first, last);
        prop_assert!(algo::is_sorted(first, last));

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(buf.to_vec(), expected);
    }
}
