//! `std::io` adapters.
//!
//! A full ring accepts nothing, so [`Write::write`] reports `WriteZero`
//! rather than `Ok(0)` to keep `write_all` from spinning. An empty ring reads
//! as end of input.

use std::io::{self, BufRead, Read, Write};

use crate::RingBuffer;

impl Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.pop(buf))
    }
}

impl BufRead for RingBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.as_slices().0)
    }

    fn consume(&mut self, amt: usize) {
        self.delete(amt);
    }
}

impl Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.insert(buf) {
            0 if !buf.is_empty() => Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "ring buffer full",
            )),
            n => Ok(n),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
