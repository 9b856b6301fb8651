use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failure to construct a [`RingBuffer`](crate::RingBuffer).
///
/// Construction is the only fallible operation; every transfer on a live
/// buffer clamps to what fits and reports the count it moved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    /// A ring with no storage would be permanently both full and empty.
    #[error("ring buffer capacity must be greater than zero")]
    ZeroCapacity,
    /// The backing store could not be reserved.
    #[error("failed to allocate {capacity} bytes for ring buffer")]
    AllocationFailed {
        /// Requested capacity in bytes.
        capacity: usize,
        /// Allocator error.
        #[source]
        source: TryReserveError,
    },
}
