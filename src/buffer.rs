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
use core::{cmp, hash};

use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::order::ByteOrder;
use crate::storage::{DirectStorage, HeapStorage, Storage};

/// A fixed-capacity byte buffer with a position/limit/mark cursor, an
/// endian-aware typed codec, and cheap aliasing views.
///
/// A `ByteBuffer` stages binary data for I/O: relative `get_*`/`put_*` calls
/// move the position through the readable or writable region, `flip` switches
/// from filling to draining, and `slice`/`duplicate`/`as_read_only` create
/// new buffers with independent cursors over the same underlying bytes.
///
/// Two backings exist behind the same API: a managed heap array and a raw
/// "direct" memory region obtained from the allocator (or wrapped from the
/// caller). Mutation through any view is visible through every alias at the
/// same absolute offset.
///
/// # Examples
///
/// ```
/// use rcbuf::ByteBuffer;
///
/// let mut buf = ByteBuffer::allocate(64);
/// buf.put_u32(42).unwrap();
/// buf.put_slice(b"hello").unwrap();
/// buf.flip();
///
/// assert_eq!(42, buf.get_u32().unwrap());
/// let mut word = [0u8; 5];
/// buf.copy_to_slice(&mut word).unwrap();
/// assert_eq!(b"hello", &word);
/// assert!(!buf.has_remaining());
/// ```
///
/// Buffers are single-threaded by construction (the shared storage is
/// `Rc`-based, so `ByteBuffer` is neither `Send` nor `Sync`). Mutating
/// aliases of the same storage is the caller's hazard to sequence.
pub struct ByteBuffer {
    cursor: Cursor,
    storage: Storage,
    order: ByteOrder,
    read_only: bool,
}

impl ByteBuffer {
    /// Creates a heap-backed buffer of `capacity` zero-initialized bytes,
    /// with `position = 0` and `limit = capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::allocate(10);
    /// assert_eq!(10, buf.capacity());
    /// assert_eq!(0, buf.position());
    /// assert_eq!(10, buf.limit());
    /// ```
    pub fn allocate(capacity: usize) -> ByteBuffer {
        ByteBuffer {
            cursor: Cursor::new(capacity),
            storage: Storage::Heap(HeapStorage::allocate(capacity)),
            order: ByteOrder::BigEndian,
            read_only: false,
        }
    }

    /// Creates a direct buffer over `capacity` zero-initialized bytes
    /// requested from the native allocator.
    ///
    /// The returned buffer owns the region: it is the only buffer on which
    /// [`release`](ByteBuffer::release) is defined, and the region is freed
    /// when the last alias is dropped if `release` was never called.
    pub fn allocate_direct(capacity: usize) -> ByteBuffer {
        ByteBuffer {
            cursor: Cursor::new(capacity),
            storage: Storage::Direct(DirectStorage::allocate(capacity)),
            order: ByteOrder::BigEndian,
            read_only: false,
        }
    }

    /// Adopts `bytes` as the backing array of a heap buffer, with
    /// `position = 0` and `limit = capacity = bytes.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::wrap(b"abc".to_vec());
    /// assert_eq!(b'a', buf.get_u8().unwrap());
    /// ```
    pub fn wrap(bytes: Vec<u8>) -> ByteBuffer {
        let capacity = bytes.len();
        ByteBuffer {
            cursor: Cursor::new(capacity),
            storage: Storage::Heap(HeapStorage::from_vec(bytes)),
            order: ByteOrder::BigEndian,
            read_only: false,
        }
    }

    /// Adopts `bytes` with the cursor placed on a sub-range: the capacity is
    /// the full array length, `position = offset` and
    /// `limit = offset + length`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the range does not fit the
    /// array.
    pub fn wrap_range(bytes: Vec<u8>, offset: usize, length: usize) -> Result<ByteBuffer> {
        let capacity = bytes.len();
        if offset > capacity || length > capacity - offset {
            return Err(Error::InvalidArgument);
        }
        Ok(ByteBuffer {
            cursor: Cursor::with_window(offset, offset + length, capacity),
            storage: Storage::Heap(HeapStorage::from_vec(bytes)),
            order: ByteOrder::BigEndian,
            read_only: false,
        })
    }

    /// Creates a heap buffer by copying `data`, ready for reading.
    pub fn copy_from_slice(data: &[u8]) -> ByteBuffer {
        ByteBuffer::wrap(data.to_vec())
    }

    /// Creates a direct buffer over `byte_count` bytes of caller-supplied
    /// memory starting at `ptr`.
    ///
    /// The buffer never frees the region, and calling
    /// [`release`](ByteBuffer::release) on it (or any view of it) panics.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `byte_count` bytes for
    /// the whole lifetime of the returned buffer and of every view derived
    /// from it, and must not be mutated through other pointers while the
    /// buffer is in use.
    pub unsafe fn wrap_raw(ptr: *mut u8, byte_count: usize) -> ByteBuffer {
        ByteBuffer {
            cursor: Cursor::new(byte_count),
            storage: Storage::Direct(DirectStorage::wrap(ptr, byte_count)),
            order: ByteOrder::BigEndian,
            read_only: false,
        }
    }

    // ===== cursor surface =====

    /// Returns the fixed capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    /// Returns the index the next relative access will use.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the first index that must not be read or written.
    pub fn limit(&self) -> usize {
        self.cursor.limit()
    }

    /// Returns `limit - position`.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Returns whether any bytes remain between position and limit.
    pub fn has_remaining(&self) -> bool {
        self.cursor.has_remaining()
    }

    /// Moves the position. A mark beyond the new position is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `position > limit`.
    pub fn set_position(&mut self, position: usize) -> Result<&mut Self> {
        self.cursor.set_position(position)?;
        Ok(self)
    }

    /// Moves the limit, clamping the position down to it if necessary and
    /// discarding a mark beyond it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `limit > capacity`.
    pub fn set_limit(&mut self, limit: usize) -> Result<&mut Self> {
        self.cursor.set_limit(limit)?;
        Ok(self)
    }

    /// Saves the current position; [`reset`](ByteBuffer::reset) returns to
    /// it.
    pub fn mark(&mut self) -> &mut Self {
        self.cursor.mark();
        self
    }

    /// Restores the position saved by [`mark`](ByteBuffer::mark).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when no mark is set.
    pub fn reset(&mut self) -> Result<&mut Self> {
        self.cursor.reset()?;
        Ok(self)
    }

    /// Prepares for a fresh sequence of writes: `position = 0`,
    /// `limit = capacity`, mark discarded. The bytes are untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.cursor.clear();
        self
    }

    /// Switches from writing to reading: `limit = position`,
    /// `position = 0`, mark discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::allocate(8);
    /// buf.put_u8(7).unwrap();
    /// buf.flip();
    /// assert_eq!(1, buf.remaining());
    /// assert_eq!(7, buf.get_u8().unwrap());
    /// ```
    pub fn flip(&mut self) -> &mut Self {
        self.cursor.flip();
        self
    }

    /// Re-reads from the start within the current limit: `position = 0`,
    /// mark discarded.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor.rewind();
        self
    }

    /// Returns the byte order applied by the multi-byte accessors.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Changes the byte order applied by the multi-byte accessors.
    pub fn set_order(&mut self, order: ByteOrder) -> &mut Self {
        self.order = order;
        self
    }

    /// Returns whether the buffer is backed by a raw memory region.
    pub fn is_direct(&self) -> bool {
        self.storage.is_direct()
    }

    /// Returns whether mutations through this buffer are rejected.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    // ===== single-byte and bulk access =====

    /// Reads the byte at the position and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] at the limit.
    pub fn get_u8(&mut self) -> Result<u8> {
        let start = self.cursor.advance_read(1)?;
        Ok(self.storage.read(start))
    }

    /// Writes a byte at the position and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] on a read-only buffer, otherwise
    /// [`Error::Overflow`] at the limit.
    pub fn put_u8(&mut self, byte: u8) -> Result<&mut Self> {
        self.check_writable()?;
        let start = self.cursor.advance_write(1)?;
        self.storage.write(start, byte);
        Ok(self)
    }

    /// Signed variant of [`get_u8`](ByteBuffer::get_u8).
    pub fn get_i8(&mut self) -> Result<i8> {
        self.get_u8().map(|byte| byte as i8)
    }

    /// Signed variant of [`put_u8`](ByteBuffer::put_u8).
    pub fn put_i8(&mut self, byte: i8) -> Result<&mut Self> {
        self.put_u8(byte as u8)
    }

    /// Reads the byte at `index` without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < limit`.
    pub fn get_u8_at(&self, index: usize) -> Result<u8> {
        self.cursor.check_bounds(index, 1)?;
        Ok(self.storage.read(index))
    }

    /// Writes the byte at `index` without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] on a read-only buffer, otherwise
    /// [`Error::OutOfBounds`] unless `index < limit`.
    pub fn put_u8_at(&mut self, index: usize, byte: u8) -> Result<&mut Self> {
        self.check_writable()?;
        self.cursor.check_bounds(index, 1)?;
        self.storage.write(index, byte);
        Ok(self)
    }

    /// Signed variant of [`get_u8_at`](ByteBuffer::get_u8_at).
    pub fn get_i8_at(&self, index: usize) -> Result<i8> {
        self.get_u8_at(index).map(|byte| byte as i8)
    }

    /// Signed variant of [`put_u8_at`](ByteBuffer::put_u8_at).
    pub fn put_i8_at(&mut self, index: usize, byte: i8) -> Result<&mut Self> {
        self.put_u8_at(index, byte as u8)
    }

    /// Fills `dst` from the readable region and advances by its length.
    ///
    /// The whole transfer is validated before any byte moves; on error the
    /// buffer and `dst` are untouched. To read into a sub-range of a larger
    /// array, pass a subslice (`&mut dst[off..off + len]`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] when `dst.len() > remaining()`.
    pub fn copy_to_slice(&mut self, dst: &mut [u8]) -> Result<&mut Self> {
        let start = self.cursor.advance_read(dst.len())?;
        self.storage.read_into(start, dst);
        Ok(self)
    }

    /// Writes all of `src` at the position and advances by its length.
    ///
    /// The whole transfer is validated before any byte moves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] on a read-only buffer, otherwise
    /// [`Error::Overflow`] when `src.len() > remaining()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::allocate(4);
    /// assert!(buf.put_slice(b"abcde").is_err());
    /// assert_eq!(0, buf.position());
    /// buf.put_slice(b"abcd").unwrap();
    /// assert_eq!(4, buf.position());
    /// ```
    pub fn put_slice(&mut self, src: &[u8]) -> Result<&mut Self> {
        self.check_writable()?;
        let start = self.cursor.advance_write(src.len())?;
        self.storage.write_from(start, src);
        Ok(self)
    }

    // ===== typed codec =====
    //
    // Every multi-byte value moves through a fixed-width scratch array in
    // the buffer's current order; signed forms are the bit-cast of the
    // unsigned read, floats the bit pattern of the matching-width integer.

    /// Reads a big- or little-endian `u16` and advances by 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::wrap(vec![0x12, 0x34]);
    /// assert_eq!(0x1234, buf.get_u16().unwrap());
    /// ```
    pub fn get_u16(&mut self) -> Result<u16> {
        let raw = self.get_array::<2>()?;
        Ok(self.order.read_u16(&raw))
    }

    /// Writes a `u16` in the buffer's order and advances by 2.
    pub fn put_u16(&mut self, value: u16) -> Result<&mut Self> {
        let mut raw = [0; 2];
        self.order.write_u16(&mut raw, value);
        self.put_array(raw)?;
        Ok(self)
    }

    /// Reads a `u16` at `index` without moving the cursor.
    pub fn get_u16_at(&self, index: usize) -> Result<u16> {
        let raw = self.get_array_at::<2>(index)?;
        Ok(self.order.read_u16(&raw))
    }

    /// Writes a `u16` at `index` without moving the cursor.
    pub fn put_u16_at(&mut self, index: usize, value: u16) -> Result<&mut Self> {
        let mut raw = [0; 2];
        self.order.write_u16(&mut raw, value);
        self.put_array_at(index, raw)?;
        Ok(self)
    }

    /// Reads an `i16` and advances by 2.
    pub fn get_i16(&mut self) -> Result<i16> {
        self.get_u16().map(|value| value as i16)
    }

    /// Writes an `i16` and advances by 2.
    pub fn put_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.put_u16(value as u16)
    }

    /// Reads an `i16` at `index` without moving the cursor.
    pub fn get_i16_at(&self, index: usize) -> Result<i16> {
        self.get_u16_at(index).map(|value| value as i16)
    }

    /// Writes an `i16` at `index` without moving the cursor.
    pub fn put_i16_at(&mut self, index: usize, value: i16) -> Result<&mut Self> {
        self.put_u16_at(index, value as u16)
    }

    /// Reads a `u32` and advances by 4.
    pub fn get_u32(&mut self) -> Result<u32> {
        let raw = self.get_array::<4>()?;
        Ok(self.order.read_u32(&raw))
    }

    /// Writes a `u32` and advances by 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::{ByteBuffer, ByteOrder};
    ///
    /// let mut buf = ByteBuffer::allocate(8);
    /// buf.set_order(ByteOrder::LittleEndian);
    /// buf.put_u32(0xAABBCCDD).unwrap();
    /// buf.flip();
    /// assert_eq!(0xDD, buf.get_u8().unwrap());
    /// ```
    pub fn put_u32(&mut self, value: u32) -> Result<&mut Self> {
        let mut raw = [0; 4];
        self.order.write_u32(&mut raw, value);
        self.put_array(raw)?;
        Ok(self)
    }

    /// Reads a `u32` at `index` without moving the cursor.
    pub fn get_u32_at(&self, index: usize) -> Result<u32> {
        let raw = self.get_array_at::<4>(index)?;
        Ok(self.order.read_u32(&raw))
    }

    /// Writes a `u32` at `index` without moving the cursor.
    pub fn put_u32_at(&mut self, index: usize, value: u32) -> Result<&mut Self> {
        let mut raw = [0; 4];
        self.order.write_u32(&mut raw, value);
        self.put_array_at(index, raw)?;
        Ok(self)
    }

    /// Reads an `i32` and advances by 4.
    pub fn get_i32(&mut self) -> Result<i32> {
        self.get_u32().map(|value| value as i32)
    }

    /// Writes an `i32` and advances by 4.
    pub fn put_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.put_u32(value as u32)
    }

    /// Reads an `i32` at `index` without moving the cursor.
    pub fn get_i32_at(&self, index: usize) -> Result<i32> {
        self.get_u32_at(index).map(|value| value as i32)
    }

    /// Writes an `i32` at `index` without moving the cursor.
    pub fn put_i32_at(&mut self, index: usize, value: i32) -> Result<&mut Self> {
        self.put_u32_at(index, value as u32)
    }

    /// Reads a `u64` and advances by 8.
    pub fn get_u64(&mut self) -> Result<u64> {
        let raw = self.get_array::<8>()?;
        Ok(self.order.read_u64(&raw))
    }

    /// Writes a `u64` and advances by 8.
    pub fn put_u64(&mut self, value: u64) -> Result<&mut Self> {
        let mut raw = [0; 8];
        self.order.write_u64(&mut raw, value);
        self.put_array(raw)?;
        Ok(self)
    }

    /// Reads a `u64` at `index` without moving the cursor.
    pub fn get_u64_at(&self, index: usize) -> Result<u64> {
        let raw = self.get_array_at::<8>(index)?;
        Ok(self.order.read_u64(&raw))
    }

    /// Writes a `u64` at `index` without moving the cursor.
    pub fn put_u64_at(&mut self, index: usize, value: u64) -> Result<&mut Self> {
        let mut raw = [0; 8];
        self.order.write_u64(&mut raw, value);
        self.put_array_at(index, raw)?;
        Ok(self)
    }

    /// Reads an `i64` and advances by 8.
    pub fn get_i64(&mut self) -> Result<i64> {
        self.get_u64().map(|value| value as i64)
    }

    /// Writes an `i64` and advances by 8.
    pub fn put_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.put_u64(value as u64)
    }

    /// Reads an `i64` at `index` without moving the cursor.
    pub fn get_i64_at(&self, index: usize) -> Result<i64> {
        self.get_u64_at(index).map(|value| value as i64)
    }

    /// Writes an `i64` at `index` without moving the cursor.
    pub fn put_i64_at(&mut self, index: usize, value: i64) -> Result<&mut Self> {
        self.put_u64_at(index, value as u64)
    }

    /// Reads an `f32` as the IEEE-754 bit pattern of a `u32` and advances
    /// by 4.
    pub fn get_f32(&mut self) -> Result<f32> {
        self.get_u32().map(f32::from_bits)
    }

    /// Writes an `f32` as the IEEE-754 bit pattern of a `u32` and advances
    /// by 4.
    pub fn put_f32(&mut self, value: f32) -> Result<&mut Self> {
        self.put_u32(value.to_bits())
    }

    /// Reads an `f32` at `index` without moving the cursor.
    pub fn get_f32_at(&self, index: usize) -> Result<f32> {
        self.get_u32_at(index).map(f32::from_bits)
    }

    /// Writes an `f32` at `index` without moving the cursor.
    pub fn put_f32_at(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        self.put_u32_at(index, value.to_bits())
    }

    /// Reads an `f64` as the IEEE-754 bit pattern of a `u64` and advances
    /// by 8.
    pub fn get_f64(&mut self) -> Result<f64> {
        self.get_u64().map(f64::from_bits)
    }

    /// Writes an `f64` as the IEEE-754 bit pattern of a `u64` and advances
    /// by 8.
    pub fn put_f64(&mut self, value: f64) -> Result<&mut Self> {
        self.put_u64(value.to_bits())
    }

    /// Reads an `f64` at `index` without moving the cursor.
    pub fn get_f64_at(&self, index: usize) -> Result<f64> {
        self.get_u64_at(index).map(f64::from_bits)
    }

    /// Writes an `f64` at `index` without moving the cursor.
    pub fn put_f64_at(&mut self, index: usize, value: f64) -> Result<&mut Self> {
        self.put_u64_at(index, value.to_bits())
    }

    // ===== views =====

    /// Creates a buffer over the readable region `[position, limit)`.
    ///
    /// The new buffer shares storage with this one, has
    /// `position = 0`, `limit = capacity = remaining()`, no mark, big-endian
    /// order, and inherits read-only-ness. Mutation through either buffer is
    /// visible through the other at the same absolute offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let mut parent = ByteBuffer::allocate(5);
    /// parent.set_position(1).unwrap();
    /// let mut child = parent.slice();
    /// assert_eq!(4, child.capacity());
    ///
    /// child.put_u8_at(0, 9).unwrap();
    /// assert_eq!(9, parent.get_u8_at(1).unwrap());
    /// ```
    pub fn slice(&self) -> ByteBuffer {
        let remaining = self.cursor.remaining();
        ByteBuffer {
            cursor: Cursor::new(remaining),
            storage: self.storage.window(self.cursor.position()),
            order: ByteOrder::BigEndian,
            read_only: self.read_only,
        }
    }

    /// Creates a buffer over `[index, index + length)` of this buffer's
    /// addressable range, independent of the position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the range does not lie within
    /// the limit.
    pub fn slice_range(&self, index: usize, length: usize) -> Result<ByteBuffer> {
        if index > self.cursor.limit() || length > self.cursor.limit() - index {
            return Err(Error::InvalidArgument);
        }
        Ok(ByteBuffer {
            cursor: Cursor::new(length),
            storage: self.storage.window(index),
            order: ByteOrder::BigEndian,
            read_only: self.read_only,
        })
    }

    /// Creates a buffer with this buffer's exact cursor state over the same
    /// storage. Cursors move independently afterwards; order resets to
    /// big-endian; read-only-ness is inherited.
    pub fn duplicate(&self) -> ByteBuffer {
        ByteBuffer {
            cursor: self.cursor.clone(),
            storage: self.storage.window(0),
            order: ByteOrder::BigEndian,
            read_only: self.read_only,
        }
    }

    /// Like [`duplicate`](ByteBuffer::duplicate), but the result rejects
    /// every mutation. On an already read-only buffer this is exactly
    /// `duplicate`.
    pub fn as_read_only(&self) -> ByteBuffer {
        let mut view = self.duplicate();
        view.read_only = true;
        view
    }

    /// Moves the unread bytes `[position, limit)` to the front, then sets
    /// `position = limit - old_position`, `limit = capacity`, and discards
    /// the mark, reclaiming the already-read space for writing.
    ///
    /// The byte move tolerates overlap (as if copied left to right). Other
    /// aliases see the moved bytes but keep their own cursors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] on a read-only buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::wrap(vec![1, 2, 3]);
    /// buf.get_u8().unwrap();
    /// buf.compact().unwrap();
    /// assert_eq!(2, buf.position());
    /// assert_eq!(3, buf.limit());
    /// assert_eq!(2, buf.get_u8_at(0).unwrap());
    /// assert_eq!(3, buf.get_u8_at(1).unwrap());
    /// ```
    pub fn compact(&mut self) -> Result<&mut Self> {
        self.check_writable()?;
        let position = self.cursor.position();
        let remaining = self.cursor.remaining();
        self.storage.shift_to_front(position, remaining);
        self.cursor.compact();
        Ok(self)
    }

    // ===== heap array access =====

    /// Returns whether [`array`](ByteBuffer::array) and
    /// [`array_offset`](ByteBuffer::array_offset) are usable: the buffer is
    /// heap-backed and writable.
    pub fn has_array(&self) -> bool {
        !self.storage.is_direct() && !self.read_only
    }

    /// Returns the entire backing array (not just this buffer's window).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] on a direct buffer and
    /// [`Error::ReadOnly`] on a read-only heap buffer.
    pub fn array(&self) -> Result<&[u8]> {
        match &self.storage {
            Storage::Direct(_) => Err(Error::Unsupported),
            Storage::Heap(heap) => {
                if self.read_only {
                    Err(Error::ReadOnly)
                } else {
                    Ok(heap.full_slice())
                }
            }
        }
    }

    /// Mutable form of [`array`](ByteBuffer::array).
    pub fn array_mut(&mut self) -> Result<&mut [u8]> {
        let read_only = self.read_only;
        match &mut self.storage {
            Storage::Direct(_) => Err(Error::Unsupported),
            Storage::Heap(heap) => {
                if read_only {
                    Err(Error::ReadOnly)
                } else {
                    Ok(heap.full_slice_mut())
                }
            }
        }
    }

    /// Returns the offset of this buffer's first byte within the backing
    /// array, under the same conditions as [`array`](ByteBuffer::array).
    pub fn array_offset(&self) -> Result<usize> {
        match &self.storage {
            Storage::Direct(_) => Err(Error::Unsupported),
            Storage::Heap(heap) => {
                if self.read_only {
                    Err(Error::ReadOnly)
                } else {
                    Ok(heap.array_offset())
                }
            }
        }
    }

    // ===== direct lifecycle =====

    /// Deallocates the direct region this buffer owns, consuming the buffer.
    ///
    /// Only the buffer returned by
    /// [`allocate_direct`](ByteBuffer::allocate_direct) owns its region.
    /// After release, any access through a view that still aliases the
    /// region panics instead of touching freed memory.
    ///
    /// # Panics
    ///
    /// Panics on a heap buffer, on a view, and on a buffer created with
    /// [`wrap_raw`](ByteBuffer::wrap_raw).
    ///
    /// ```should_panic
    /// use rcbuf::ByteBuffer;
    ///
    /// let owner = ByteBuffer::allocate_direct(16);
    /// let alias = owner.duplicate();
    /// owner.release();
    /// alias.get_u8_at(0).unwrap(); // panics: released
    /// ```
    pub fn release(self) {
        match self.storage {
            Storage::Direct(ref direct) => direct.release(),
            Storage::Heap(_) => panic!("rcbuf: release on a heap buffer"),
        }
    }

    // ===== internal =====

    #[inline]
    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::ReadOnly);
        }
        Ok(())
    }

    fn get_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let start = self.cursor.advance_read(N)?;
        let mut raw = [0; N];
        self.storage.read_into(start, &mut raw);
        Ok(raw)
    }

    fn get_array_at<const N: usize>(&self, index: usize) -> Result<[u8; N]> {
        self.cursor.check_bounds(index, N)?;
        let mut raw = [0; N];
        self.storage.read_into(index, &mut raw);
        Ok(raw)
    }

    fn put_array<const N: usize>(&mut self, raw: [u8; N]) -> Result<()> {
        self.check_writable()?;
        let start = self.cursor.advance_write(N)?;
        self.storage.write_from(start, &raw);
        Ok(())
    }

    fn put_array_at<const N: usize>(&self, index: usize, raw: [u8; N]) -> Result<()> {
        self.check_writable()?;
        self.cursor.check_bounds(index, N)?;
        self.storage.write_from(index, &raw);
        Ok(())
    }

    /// The readable region `[position, limit)` as a slice. Equality,
    /// ordering, hashing, Debug and serde all look only at this region.
    pub(crate) fn readable(&self) -> &[u8] {
        self.storage.as_slice(self.cursor.position(), self.cursor.remaining())
    }

    pub(crate) fn is_poisoned(&self) -> bool {
        self.storage.is_released()
    }
}

// Equality, ordering and hashing depend only on the readable region; two
// buffers with different capacities or backings but identical remaining
// content compare equal.

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &ByteBuffer) -> bool {
        self.readable() == other.readable()
    }
}

impl Eq for ByteBuffer {}

impl PartialOrd for ByteBuffer {
    fn partial_cmp(&self, other: &ByteBuffer) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteBuffer {
    fn cmp(&self, other: &ByteBuffer) -> cmp::Ordering {
        self.readable().cmp(other.readable())
    }
}

impl hash::Hash for ByteBuffer {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        self.readable().hash(state);
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.readable() == other
    }
}

impl PartialEq<ByteBuffer> for [u8] {
    fn eq(&self, other: &ByteBuffer) -> bool {
        *other == *self
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.readable() == *other
    }
}

impl PartialEq<ByteBuffer> for &[u8] {
    fn eq(&self, other: &ByteBuffer) -> bool {
        *other == **self
    }
}

impl PartialEq<Vec<u8>> for ByteBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.readable() == &other[..]
    }
}

impl PartialEq<ByteBuffer> for Vec<u8> {
    fn eq(&self, other: &ByteBuffer) -> bool {
        *other == *self
    }
}
