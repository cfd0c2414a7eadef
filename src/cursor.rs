// The code in this file is heavily based on [Carl Lerche's LRU implementation](https://github.com/tokio-rs/bytes).
//
// MIT License
//
// Copyright (c) 2022 Al Liu (https://github.com/al8n/rcbuf)
//
// Copyright (c) 2018 Carl Lerche (https://github.com/tokio-rs/bytes)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
use crate::error::{Error, Result};

/// Position/limit/mark state of a buffer.
///
/// Invariant: `mark <= position <= limit <= capacity` whenever the mark is
/// set. The cursor knows nothing about storage; the buffer validates every
/// access against it before touching bytes.
#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    capacity: usize,
    position: usize,
    limit: usize,
    mark: Option<usize>,
}

impl Cursor {
    /// Creates a cursor covering `[0, capacity)` with no mark.
    pub(crate) fn new(capacity: usize) -> Cursor {
        Cursor {
            capacity,
            position: 0,
            limit: capacity,
            mark: None,
        }
    }

    /// Creates a cursor with an explicit window, used by wrapping
    /// constructors. Bounds must have been validated by the caller.
    pub(crate) fn with_window(position: usize, limit: usize, capacity: usize) -> Cursor {
        debug_assert!(position <= limit && limit <= capacity, "internal: bad window");
        Cursor {
            capacity,
            position,
            limit,
            mark: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    pub(crate) fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub(crate) fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Moves the position. A mark beyond the new position is discarded.
    pub(crate) fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.limit {
            return Err(Error::InvalidArgument);
        }
        self.position = position;
        if let Some(mark) = self.mark {
            if mark > position {
                self.mark = None;
            }
        }
        Ok(())
    }

    /// Moves the limit, clamping the position down to it if necessary.
    pub(crate) fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit > self.capacity {
            return Err(Error::InvalidArgument);
        }
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
        if let Some(mark) = self.mark {
            if mark > limit {
                self.mark = None;
            }
        }
        Ok(())
    }

    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Restores the position saved by `mark`.
    pub(crate) fn reset(&mut self) -> Result<()> {
        match self.mark {
            Some(mark) => {
                self.position = mark;
                Ok(())
            }
            None => Err(Error::InvalidArgument),
        }
    }

    /// Prepares for a fresh sequence of writes.
    pub(crate) fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// Switches from write mode to read mode.
    pub(crate) fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
    }

    /// Re-reads from the start within the current limit.
    pub(crate) fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    /// Reserves `width` readable bytes, returning the index they start at.
    pub(crate) fn advance_read(&mut self, width: usize) -> Result<usize> {
        if width > self.remaining() {
            return Err(Error::Underflow);
        }
        let start = self.position;
        self.position += width;
        Ok(start)
    }

    /// Reserves `width` writable bytes, returning the index they start at.
    pub(crate) fn advance_write(&mut self, width: usize) -> Result<usize> {
        if width > self.remaining() {
            return Err(Error::Overflow);
        }
        let start = self.position;
        self.position += width;
        Ok(start)
    }

    /// Validates an absolute access of `width` bytes at `index`. Absolute
    /// accesses are bounded by the limit, exactly as relative ones are.
    pub(crate) fn check_bounds(&self, index: usize, width: usize) -> Result<()> {
        if index > self.limit || width > self.limit - index {
            return Err(Error::OutOfBounds);
        }
        Ok(())
    }

    /// Cursor half of a compaction: the bytes in `[position, limit)` have
    /// just been moved to the front. The new position is `limit - position`,
    /// the count documented by the compaction contract.
    pub(crate) fn compact(&mut self) {
        self.position = self.limit - self.position;
        self.limit = self.capacity;
        self.mark = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_covers_capacity() {
        let cursor = Cursor::new(10);
        assert_eq!(10, cursor.capacity());
        assert_eq!(0, cursor.position());
        assert_eq!(10, cursor.limit());
        assert_eq!(10, cursor.remaining());
    }

    #[test]
    fn test_position_discards_passed_mark() {
        let mut cursor = Cursor::new(10);
        cursor.set_position(4).unwrap();
        cursor.mark();
        cursor.set_position(6).unwrap();
        // Mark at 4 survives a forward move...
        cursor.reset().unwrap();
        assert_eq!(4, cursor.position());
        // ...but not a move below it.
        cursor.set_position(2).unwrap();
        assert_eq!(Err(Error::InvalidArgument), cursor.reset());
    }

    #[test]
    fn test_limit_clamps_position() {
        let mut cursor = Cursor::new(10);
        cursor.set_position(8).unwrap();
        cursor.set_limit(5).unwrap();
        assert_eq!(5, cursor.position());
        assert_eq!(Err(Error::InvalidArgument), cursor.set_limit(11));
    }

    #[test]
    fn test_flip_then_rewind() {
        let mut cursor = Cursor::new(10);
        cursor.set_position(7).unwrap();
        cursor.flip();
        assert_eq!(0, cursor.position());
        assert_eq!(7, cursor.limit());
        cursor.set_position(3).unwrap();
        cursor.rewind();
        assert_eq!(0, cursor.position());
        assert_eq!(7, cursor.limit());
    }

    #[test]
    fn test_advance_at_boundary() {
        let mut cursor = Cursor::new(2);
        assert_eq!(Ok(0), cursor.advance_read(1));
        assert_eq!(Ok(1), cursor.advance_read(1));
        assert_eq!(Err(Error::Underflow), cursor.advance_read(1));
    }

    #[test]
    fn test_check_bounds_against_limit() {
        let mut cursor = Cursor::new(10);
        cursor.set_limit(6).unwrap();
        assert!(cursor.check_bounds(2, 4).is_ok());
        assert_eq!(Err(Error::OutOfBounds), cursor.check_bounds(3, 4));
        assert_eq!(Err(Error::OutOfBounds), cursor.check_bounds(7, 0));
    }

    #[test]
    fn test_compact_position_formula() {
        let mut cursor = Cursor::new(8);
        cursor.set_limit(6).unwrap();
        cursor.set_position(2).unwrap();
        cursor.compact();
        assert_eq!(4, cursor.position());
        assert_eq!(8, cursor.limit());
        assert_eq!(Err(Error::InvalidArgument), cursor.reset());
    }
}
