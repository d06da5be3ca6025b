/// Errors returned by [`RingBuffer`](crate::RingBuffer) operations.
///
/// Every failing call leaves the buffer exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Insertion into a buffer that already holds `capacity` elements.
    #[error("buffer is full (capacity {capacity})")]
    Full { capacity: usize },
    /// Removal from, or access into, a buffer with no elements.
    #[error("buffer is empty")]
    Empty,
    /// Logical index outside the live range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Requested capacity cannot hold the live elements (or is zero).
    #[error("invalid capacity {requested} for length {len}")]
    InvalidArgument { requested: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
