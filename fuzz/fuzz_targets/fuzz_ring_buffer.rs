#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use bytering::RingBuffer;
use libfuzzer_sys::fuzz_target;

/// Lengths and offsets are `u16` so requests routinely overshoot both the
/// capacity and the held data.
#[derive(Arbitrary, Debug)]
enum Op {
    Insert(Vec<u8>),
    Peek { offset: u16, len: u16 },
    Pop(u16),
    Delete(u16),
    Clear,
    Slices,
}

#[derive(Arbitrary, Debug)]
struct Input {
    capacity: u16,
    ops: Vec<Op>,
}

/// Drive the ring and a capacity-bounded `VecDeque` with the same calls and
/// panic on the first difference.
fn run(input: Input) {
    let capacity = usize::from(input.capacity);
    let mut ring = match RingBuffer::new(capacity) {
        Ok(ring) => ring,
        Err(_) => {
            assert_eq!(capacity, 0, "only a zero capacity may be refused");
            return;
        }
    };
    let mut model: VecDeque<u8> = VecDeque::with_capacity(capacity);

    for op in input.ops {
        let room = ring.available();
        match op {
            Op::Insert(data) => {
                let n = ring.insert(&data);
                assert_eq!(n, data.len().min(room));
                model.extend(&data[..n]);
            }
            Op::Peek { offset, len } => {
                let (offset, len) = (usize::from(offset), usize::from(len));
                let mut dst = vec![0; len];
                let n = ring.peek(offset, &mut dst);
                let expected: Vec<u8> = model.iter().skip(offset).take(len).copied().collect();
                assert_eq!(&dst[..n], &expected[..]);
            }
            Op::Pop(len) => {
                let mut dst = vec![0; usize::from(len)];
                let n = ring.pop(&mut dst);
                assert_eq!(n, dst.len().min(model.len()));
                let expected: Vec<u8> = model.drain(..n).collect();
                assert_eq!(&dst[..n], &expected[..]);
            }
            Op::Delete(len) => {
                let n = ring.delete(usize::from(len));
                assert_eq!(n, usize::from(len).min(model.len()));
                model.drain(..n);
            }
            Op::Clear => {
                ring.clear();
                model.clear();
            }
            Op::Slices => {
                let (front, back) = ring.as_slices();
                let (m_front, m_back) = model.as_slices();
                assert_eq!([front, back].concat(), [m_front, m_back].concat());
            }
        }

        ring.check_invariants();
        assert_eq!(ring.size(), model.len());
        assert_eq!(ring.size() + ring.available(), capacity);
    }

    ring.release();
}

fuzz_target!(|input: Input| run(input));
