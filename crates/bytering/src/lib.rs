//! A fixed-capacity circular byte buffer for staging transport data.
//!
//! Bytes from a serial or I2C style link arrive in pieces that do not line up
//! with packet boundaries. [`RingBuffer`] holds them until the protocol layer
//! has a whole message: it can [`peek`](RingBuffer::peek) at a header without
//! consuming it, [`pop`](RingBuffer::pop) a complete packet, or
//! [`delete`](RingBuffer::delete) bytes it already inspected. Memory is
//! allocated once at construction and never grows.
//!
//! Every transfer clamps to the room or data available and returns the count
//! it moved; none of them can fail or touch memory outside the store.
//!
//! The crate is `no_std` (with `alloc`). The default `std` feature adds
//! [`std::io::Read`], [`std::io::Write`] and [`std::io::BufRead`] for
//! [`RingBuffer`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
#[cfg(feature = "std")]
mod io;
mod ring;
mod span;

#[cfg(test)]
mod tests;

pub use error::RingBufferError;
pub use ring::RingBuffer;
