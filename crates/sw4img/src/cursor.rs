//! Forward-only read cursor over an in-memory image file.

/// A read position within a byte slice.
///
/// Decoders take `&mut ByteCursor` so exactly one decode advances a given
/// position at a time.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    /// Current byte offset from the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Consume the next `n` bytes.
    ///
    /// Returns `None` and leaves the position unchanged if fewer than `n`
    /// bytes remain.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let start = self.pos;
        self.pos += n;
        Some(&self.data[start..self.pos])
    }
}
