//! Fixed-capacity double-ended circular buffer with random-access cursors.
//!
//! [`RingBuffer`] stores up to `capacity` elements in one pre-allocated block.
//! It supports O(1) push/pop at both ends, positional insert/erase, indexed
//! access, and an explicit [`RingBuffer::reserve`] that reallocates. It never
//! grows on its own: pushing onto a full buffer returns [`Error::Full`].
//!
//! [`Cursor`]s give random access into the buffer's slots for the generic
//! algorithms in [`algo`]. They borrow the buffer, so a resize can never
//! leave one dangling.
//!
//! ```
//! use ringdeque::{algo, RingBuffer};
//!
//! let mut buf = RingBuffer::new(4);
//! buf.push_back(3).unwrap();
//! buf.push_back(1).unwrap();
//! buf.push_front(2).unwrap();
//! assert_eq!(buf.to_vec(), vec![2, 3, 1]);
//!
//! let (first, last) = buf.bounds();
//! algo::sort(first, last);
//! assert_eq!(buf.to_vec(), vec![1, 2, 3]);
//! ```

pub mod algo;
pub mod cursor;
mod error;
pub mod iter;
mod ring;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use ring::{RingBuffer, DEFAULT_CAPACITY};
