use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::BStr;
use tracing::{debug, trace};

use crate::{error::RingBufferError, span};

/// Fixed-capacity circular byte buffer.
///
/// Bytes are appended at the back with [`insert`](Self::insert) and consumed
/// from the front with [`pop`](Self::pop) or [`delete`](Self::delete);
/// [`peek`](Self::peek) reads at any logical offset without consuming. Stored
/// data wraps around the end of the backing store, which is allocated once in
/// [`new`](Self::new) and never resized.
///
/// No transfer ever fails: each one moves as many bytes as fit (or as are
/// present) and returns that count. Callers detect short transfers by
/// comparing it with what they asked for.
///
/// The buffer has no internal synchronization. Share it between threads behind
/// a `Mutex` or hand it across a channel.
///
/// # Examples
///
/// ```rust
/// use bytering::RingBuffer;
///
/// let mut ring = RingBuffer::new(4)?;
/// assert_eq!(ring.insert(&[1, 2, 3]), 3);
///
/// let mut front = [0; 2];
/// assert_eq!(ring.pop(&mut front), 2);
/// assert_eq!(front, [1, 2]);
///
/// // Only three slots are free; the write wraps past the end of the store.
/// assert_eq!(ring.insert(&[4, 5, 6]), 3);
///
/// let mut rest = [0; 4];
/// assert_eq!(ring.pop(&mut rest), 4);
/// assert_eq!(rest, [3, 4, 5, 6]);
/// # Ok::<(), bytering::RingBufferError>(())
/// ```
#[derive(Clone)]
pub struct RingBuffer {
    store: Box<[u8]>,
    /// Physical index of the oldest valid byte. Always `< store.len()`.
    head: usize,
    /// Number of valid bytes. Always `<= store.len()`.
    used: usize,
}

impl RingBuffer {
    /// Allocates an empty buffer holding at most `capacity` bytes.
    ///
    /// # Errors
    ///
    /// - [`RingBufferError::ZeroCapacity`] if `capacity` is 0.
    /// - [`RingBufferError::AllocationFailed`] if the store cannot be
    ///   allocated.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }

        let mut store = Vec::new();
        store
            .try_reserve_exact(capacity)
            .map_err(|source| RingBufferError::AllocationFailed { capacity, source })?;
        store.resize(capacity, 0);

        debug!(capacity, "ring buffer allocated");
        Ok(Self {
            store: store.into_boxed_slice(),
            head: 0,
            used: 0,
        })
    }

    /// Maximum number of bytes the buffer can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Free space left for [`insert`](Self::insert): `capacity - size`.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity() - self.used
    }

    /// Number of bytes currently held and readable.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.used
    }

    /// Returns `true` if no bytes are held.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns `true` if no more bytes can be inserted.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.used == self.capacity()
    }

    /// Appends as much of `data` as fits after the current contents.
    ///
    /// Copies `min(data.len(), available())` bytes, wrapping around the end
    /// of the store as needed, and returns that count. Unread bytes are never
    /// overwritten; a return smaller than `data.len()` means the tail of
    /// `data` was not stored.
    pub fn insert(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.available());
        if n < data.len() {
            trace!(requested = data.len(), inserted = n, "ring buffer insert truncated");
        }
        if n == 0 {
            return 0;
        }

        let capacity = self.capacity();
        let tail = span::advance(self.head, self.used, capacity);
        let (front, back) = span::wrapped(tail, n, capacity);
        let (src_front, src_back) = data[..n].split_at(front.len());
        self.store[front].copy_from_slice(src_front);
        self.store[back].copy_from_slice(src_back);

        self.used += n;
        n
    }

    /// Copies bytes starting `offset` bytes past the oldest one into `dst`,
    /// leaving the buffer untouched.
    ///
    /// Copies `min(dst.len(), size() - offset)` bytes, or nothing when
    /// `offset >= size()`, and returns that count.
    pub fn peek(&self, offset: usize, dst: &mut [u8]) -> usize {
        if offset >= self.used {
            if !dst.is_empty() {
                trace!(offset, size = self.used, "ring buffer peek past end");
            }
            return 0;
        }

        let n = dst.len().min(self.used - offset);
        if n < dst.len() {
            trace!(offset, requested = dst.len(), copied = n, "ring buffer peek truncated");
        }

        let capacity = self.capacity();
        let start = span::advance(self.head, offset, capacity);
        let (front, back) = span::wrapped(start, n, capacity);
        let (dst_front, dst_back) = dst[..n].split_at_mut(front.len());
        dst_front.copy_from_slice(&self.store[front]);
        dst_back.copy_from_slice(&self.store[back]);
        n
    }

    /// Moves the oldest bytes into `dst` and removes them from the buffer.
    ///
    /// Returns `min(dst.len(), size())`, the number of bytes removed.
    pub fn pop(&mut self, dst: &mut [u8]) -> usize {
        let n = self.peek(0, dst);
        self.discard_front(n);
        n
    }

    /// Discards up to `len` of the oldest bytes without copying them.
    ///
    /// Returns `min(len, size())`, the number of bytes discarded. Leaves the
    /// buffer in the same state as a [`pop`](Self::pop) of `len` bytes.
    pub fn delete(&mut self, len: usize) -> usize {
        let n = len.min(self.used);
        if n < len {
            trace!(requested = len, deleted = n, "ring buffer delete truncated");
        }
        self.discard_front(n);
        n
    }

    /// Discards every held byte. The allocation is kept.
    pub fn clear(&mut self) {
        self.head = 0;
        self.used = 0;
    }

    /// Borrows the held bytes, oldest first, as two slices whose
    /// concatenation is the logical contents.
    ///
    /// The second slice is empty unless the contents wrap around the end of
    /// the store.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let (front, back) = span::wrapped(self.head, self.used, self.capacity());
        (&self.store[front], &self.store[back])
    }

    /// Frees the backing store.
    ///
    /// Consumes the buffer, so nothing can touch it afterwards. Dropping the
    /// buffer has the same effect; this only makes the hand-back explicit and
    /// logs how many unread bytes were thrown away.
    pub fn release(self) {
        debug!(
            capacity = self.capacity(),
            discarded = self.used,
            "ring buffer released"
        );
    }

    /// Panics if the cursor invariants do not hold.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn check_invariants(&self) {
        let capacity = self.capacity();
        assert!(capacity > 0, "ring buffer has no storage");
        assert!(self.head < capacity, "head {} outside store of {capacity}", self.head);
        assert!(self.used <= capacity, "size {} exceeds capacity {capacity}", self.used);
        assert_eq!(self.size() + self.available(), capacity);
    }

    fn discard_front(&mut self, n: usize) {
        debug_assert!(n <= self.used);
        self.used -= n;
        self.head = if self.used == 0 {
            // Rewind so the next fill starts contiguous.
            0
        } else {
            span::advance(self.head, n, self.capacity())
        };
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("size", &self.used)
            .field("front", &BStr::new(front))
            .field("back", &BStr::new(back))
            .finish()
    }
}
