use ringdeque::{algo, Error, RingBuffer};

#[test]
fn capacity_five_walkthrough() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut buf = RingBuffer::new(5);
    buf.push_back(1).unwrap();
    assert_eq!(buf.to_vec(), vec![1]);

    buf.push_back(2).unwrap();
    buf.push_back(3).unwrap();
    assert_eq!(buf.to_vec(), vec![1, 2, 3]);

    buf.push_front(0).unwrap();
    assert_eq!(buf.to_vec(), vec![0, 1, 2, 3]);

    buf.push_front(-1).unwrap();
    assert_eq!(buf.to_vec(), vec![-1, 0, 1, 2, 3]);
    assert_eq!(buf.push_front(9), Err(Error::Full { capacity: 5 }));
    assert_eq!(buf.push_back(9), Err(Error::Full { capacity: 5 }));

    buf.reserve(7).unwrap();
    assert_eq!(buf.capacity(), 7);
    assert_eq!(buf.to_vec(), vec![-1, 0, 1, 2, 3]);
    assert_eq!(*buf.front().unwrap(), -1);
    assert_eq!(*buf.back().unwrap(), 3);
    assert_eq!(*buf.at(3).unwrap(), 2);

    buf.push_back(4).unwrap();
    buf.push_front(-2).unwrap();
    assert!(buf.is_full());
    assert_eq!(buf.to_vec(), vec![-2, -1, 0, 1, 2, 3, 4]);
}

#[test]
fn middle_edits_after_resize_then_sort() {
    let mut buf = RingBuffer::new(5);
    for v in [1, 2, 3] {
        buf.push_back(v).unwrap();
    }
    buf.push_front(0).unwrap();
    buf.push_front(-1).unwrap();
    buf.reserve(7).unwrap();

    let at = (buf.begin() + 1).index().unwrap();
    buf.insert_at(at, -2).unwrap();
    assert_eq!(buf.to_vec(), vec![-1, -2, 0, 1, 2, 3]);

    let at = (buf.begin() + 2).index().unwrap();
    assert_eq!(buf.erase_at(at), Ok(0));
    assert_eq!(buf.to_vec(), vec![-1, -2, 1, 2, 3]);
    assert_eq!(*buf.front().unwrap(), -1);
    assert_eq!(*buf.back().unwrap(), 3);
    assert_eq!(buf[3], 2);

    let (first, last) = buf.bounds();
    algo::sort(first, last);
    assert_eq!(buf.to_vec(), vec![-2, -1, 1, 2, 3]);

    let (first, last) = buf.bounds();
    algo::sort_by(first, last, |a, b| b.cmp(a));
    assert_eq!(buf.to_vec(), vec![3, 2, 1, -1, -2]);
}

#[test]
fn errors_render_readable_messages() {
    let mut buf: RingBuffer<u8> = RingBuffer::new(1);
    assert_eq!(buf.pop_back().unwrap_err().to_string(), "buffer is empty");
    assert_eq!(
        buf.at(2).unwrap_err().to_string(),
        "index 2 out of range for length 0"
    );
    buf.push_back(1).unwrap();
    assert_eq!(
        buf.push_back(2).unwrap_err().to_string(),
        "buffer is full (capacity 1)"
    );
    assert_eq!(
        buf.reserve(0).unwrap_err().to_string(),
        "invalid capacity 0 for length 1"
    );
}
