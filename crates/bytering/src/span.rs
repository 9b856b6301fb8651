//! Wrap-around arithmetic for the ring's backing store.
//!
//! Every physical index the ring touches is produced here. Callers hold a
//! physical `head` in `[0, capacity)` and logical lengths in `[0, capacity]`;
//! the helpers below map those onto at most two in-bounds ranges of the store.

use core::ops::Range;

/// Moves a physical index forward by `by` slots, wrapping at `capacity`.
///
/// Requires `index < capacity` and `by <= capacity`. The result is always
/// `< capacity`. Never computes `index + by` when that could exceed the store.
#[inline]
pub(crate) fn advance(index: usize, by: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity, "index {index} out of store of {capacity}");
    debug_assert!(by <= capacity, "advance {by} exceeds store of {capacity}");

    let room = capacity - index;
    if by < room { index + by } else { by - room }
}

/// Splits `len` logical bytes starting at physical `start` into the physical
/// ranges that hold them: the run up to the end of the store, then the
/// wrapped run from index 0. The second range is empty when nothing wraps.
#[inline]
pub(crate) fn wrapped(start: usize, len: usize, capacity: usize) -> (Range<usize>, Range<usize>) {
    debug_assert!(start < capacity, "start {start} out of store of {capacity}");
    debug_assert!(len <= capacity, "span {len} exceeds store of {capacity}");

    let first = len.min(capacity - start);
    (start..start + first, 0..len - first)
}
