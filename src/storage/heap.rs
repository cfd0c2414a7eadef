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
use core::{ptr, slice};

use alloc::{
    alloc::{dealloc, Layout},
    boxed::Box,
    rc::Rc,
    vec::Vec,
};

/// The managed array behind one or more heap buffers.
///
/// The array's true lifetime is the longest-lived holder: every view created
/// by slice/duplicate clones the `Rc`, and the last drop frees the
/// allocation.
pub(crate) struct SharedArray {
    buf: *mut u8,
    cap: usize,
}

impl SharedArray {
    fn from_vec(vec: Vec<u8>) -> SharedArray {
        let boxed = vec.into_boxed_slice();
        let cap = boxed.len();
        let buf = Box::into_raw(boxed) as *mut u8;
        SharedArray { buf, cap }
    }
}

impl Drop for SharedArray {
    fn drop(&mut self) {
        if self.cap != 0 {
            unsafe { dealloc(self.buf, Layout::from_size_align(self.cap, 1).unwrap()) }
        }
    }
}

/// A window into a shared managed array.
///
/// `offset` is the window base within the array (the array offset of the
/// owning buffer); indices handed to the access methods are relative to it
/// and have already been validated against the buffer's cursor.
pub(crate) struct HeapStorage {
    shared: Rc<SharedArray>,
    offset: usize,
}

impl HeapStorage {
    /// Fresh zero-initialized array of `capacity` bytes.
    pub(crate) fn allocate(capacity: usize) -> HeapStorage {
        let mut vec = Vec::with_capacity(capacity);
        vec.resize(capacity, 0);
        HeapStorage::from_vec(vec)
    }

    /// Adopts the caller's bytes as the backing array.
    pub(crate) fn from_vec(vec: Vec<u8>) -> HeapStorage {
        HeapStorage {
            shared: Rc::new(SharedArray::from_vec(vec)),
            offset: 0,
        }
    }

    /// A view of the same array with the window base advanced by `advance`.
    pub(crate) fn window(&self, advance: usize) -> HeapStorage {
        debug_assert!(self.offset + advance <= self.shared.cap, "internal: window past array");
        HeapStorage {
            shared: Rc::clone(&self.shared),
            offset: self.offset + advance,
        }
    }

    pub(crate) fn array_offset(&self) -> usize {
        self.offset
    }

    /// The entire backing array, not just this window.
    pub(crate) fn full_slice(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.shared.buf, self.shared.cap) }
    }

    pub(crate) fn full_slice_mut(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.shared.buf, self.shared.cap) }
    }

    #[inline]
    fn base(&self) -> *mut u8 {
        debug_assert!(self.offset <= self.shared.cap, "internal: offset past array");
        unsafe { self.shared.buf.add(self.offset) }
    }

    #[inline]
    pub(crate) fn read(&self, index: usize) -> u8 {
        unsafe { *self.base().add(index) }
    }

    #[inline]
    pub(crate) fn write(&self, index: usize, byte: u8) {
        unsafe { *self.base().add(index) = byte }
    }

    pub(crate) fn read_into(&self, index: usize, dst: &mut [u8]) {
        unsafe { ptr::copy_nonoverlapping(self.base().add(index), dst.as_mut_ptr(), dst.len()) }
    }

    pub(crate) fn write_from(&self, index: usize, src: &[u8]) {
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), self.base().add(index), src.len()) }
    }

    /// Moves `[from, from + len)` to the front of the window. The ranges may
    /// overlap; the copy behaves as if it went left to right.
    pub(crate) fn shift_to_front(&self, from: usize, len: usize) {
        unsafe { ptr::copy(self.base().add(from), self.base(), len) }
    }

    pub(crate) fn as_slice(&self, start: usize, len: usize) -> &[u8] {
        unsafe { slice::from_raw_parts(self.base().add(start), len) }
    }
}
