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
mod direct;
mod heap;

pub(crate) use self::direct::DirectStorage;
pub(crate) use self::heap::HeapStorage;

/// The bytes behind a buffer. The variant set is closed: either a managed
/// array window or a raw memory window. Indices are relative to the window
/// base and have already been validated against the buffer's cursor.
pub(crate) enum Storage {
    Heap(HeapStorage),
    Direct(DirectStorage),
}

impl Storage {
    #[inline]
    pub(crate) fn read(&self, index: usize) -> u8 {
        match self {
            Storage::Heap(heap) => heap.read(index),
            Storage::Direct(direct) => direct.read(index),
        }
    }

    #[inline]
    pub(crate) fn write(&self, index: usize, byte: u8) {
        match self {
            Storage::Heap(heap) => heap.write(index, byte),
            Storage::Direct(direct) => direct.write(index, byte),
        }
    }

    pub(crate) fn read_into(&self, index: usize, dst: &mut [u8]) {
        match self {
            Storage::Heap(heap) => heap.read_into(index, dst),
            Storage::Direct(direct) => direct.read_into(index, dst),
        }
    }

    pub(crate) fn write_from(&self, index: usize, src: &[u8]) {
        match self {
            Storage::Heap(heap) => heap.write_from(index, src),
            Storage::Direct(direct) => direct.write_from(index, src),
        }
    }

    pub(crate) fn shift_to_front(&self, from: usize, len: usize) {
        match self {
            Storage::Heap(heap) => heap.shift_to_front(from, len),
            Storage::Direct(direct) => direct.shift_to_front(from, len),
        }
    }

    /// A view of the same bytes with the window base advanced by `advance`.
    /// Derived direct windows never own the region.
    pub(crate) fn window(&self, advance: usize) -> Storage {
        match self {
            Storage::Heap(heap) => Storage::Heap(heap.window(advance)),
            Storage::Direct(direct) => Storage::Direct(direct.window(advance)),
        }
    }

    pub(crate) fn as_slice(&self, start: usize, len: usize) -> &[u8] {
        match self {
            Storage::Heap(heap) => heap.as_slice(start, len),
            Storage::Direct(direct) => direct.as_slice(start, len),
        }
    }

    pub(crate) fn is_direct(&self) -> bool {
        matches!(self, Storage::Direct(_))
    }

    pub(crate) fn is_released(&self) -> bool {
        match self {
            Storage::Heap(_) => false,
            Storage::Direct(direct) => direct.is_released(),
        }
    }
}
