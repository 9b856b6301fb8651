use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};

/// One call against the ring, with lengths kept small so that sequences hit
/// the full, empty and wrapped states often.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(Vec<u8>),
    Peek { offset: usize, len: usize },
    Pop(usize),
    Delete(usize),
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 10 {
            0..=3 => {
                let len = usize::arbitrary(g) % 24;
                Op::Insert((0..len).map(|_| u8::arbitrary(g)).collect())
            }
            4 | 5 => Op::Peek {
                offset: usize::arbitrary(g) % 24,
                len: usize::arbitrary(g) % 24,
            },
            6 | 7 => Op::Pop(usize::arbitrary(g) % 24),
            8 => Op::Delete(usize::arbitrary(g) % 24),
            _ => Op::Clear,
        }
    }
}

/// Capacity between 1 and 16 inclusive.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Capacity(pub usize);

impl Arbitrary for Capacity {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(1 + usize::arbitrary(g) % 16)
    }
}
