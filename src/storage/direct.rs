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
use core::cell::Cell;
use core::ptr::{self, NonNull};
use core::slice;

use alloc::{
    alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout},
    rc::Rc,
};

use log::trace;

/// The raw memory region behind one or more direct buffers.
///
/// The `Rc` around this struct is the single ownership token for the
/// allocation; views clone the token but never the region. `released` is the
/// tombstone: once set, every access path through any alias panics instead
/// of touching freed memory.
pub(crate) struct DirectRegion {
    buf: *mut u8,
    byte_count: usize,
    owned: bool,
    released: Cell<bool>,
}

impl DirectRegion {
    #[inline]
    fn check_live(&self) {
        if self.released.get() {
            panic!("rcbuf: access to a released direct buffer");
        }
    }

    pub(crate) fn is_released(&self) -> bool {
        self.released.get()
    }

    unsafe fn free(&self) {
        if self.byte_count != 0 {
            dealloc(self.buf, Layout::from_size_align(self.byte_count, 1).unwrap());
        }
    }
}

impl Drop for DirectRegion {
    fn drop(&mut self) {
        // Owned regions that were never explicitly released are freed when
        // the last alias goes away; released regions must not be freed again.
        if self.owned && !self.released.get() {
            trace!("direct region {:p} ({} bytes) freed on last drop", self.buf, self.byte_count);
            unsafe { self.free() }
        }
    }
}

/// A window into a raw memory region.
///
/// `owner` is true only on the storage built by the allocating constructor;
/// every derived view carries `owner == false`, so only the original
/// allocation can ever be released.
pub(crate) struct DirectStorage {
    region: Rc<DirectRegion>,
    offset: usize,
    owner: bool,
}

impl DirectStorage {
    /// Requests `byte_count` zero-initialized bytes from the allocator.
    pub(crate) fn allocate(byte_count: usize) -> DirectStorage {
        let buf = if byte_count == 0 {
            NonNull::<u8>::dangling().as_ptr()
        } else {
            let layout = Layout::from_size_align(byte_count, 1).unwrap();
            let ptr = unsafe { alloc_zeroed(layout) };
            if ptr.is_null() {
                handle_alloc_error(layout);
            }
            ptr
        };
        trace!("direct region {:p} ({} bytes) allocated", buf, byte_count);
        DirectStorage {
            region: Rc::new(DirectRegion {
                buf,
                byte_count,
                owned: true,
                released: Cell::new(false),
            }),
            offset: 0,
            owner: true,
        }
    }

    /// Wraps caller-supplied memory. The region is never freed by this
    /// crate; the caller keeps it alive for as long as any alias exists.
    pub(crate) unsafe fn wrap(buf: *mut u8, byte_count: usize) -> DirectStorage {
        trace!("direct region {:p} ({} bytes) wrapped", buf, byte_count);
        DirectStorage {
            region: Rc::new(DirectRegion {
                buf,
                byte_count,
                owned: false,
                released: Cell::new(false),
            }),
            offset: 0,
            owner: false,
        }
    }

    /// Frees the region and poisons the tombstone. Panics when invoked
    /// through anything but the original owning storage, or twice.
    pub(crate) fn release(&self) {
        if !self.owner {
            panic!("rcbuf: release on a non-owning direct buffer");
        }
        if self.region.released.replace(true) {
            panic!("rcbuf: direct buffer released twice");
        }
        trace!(
            "direct region {:p} ({} bytes) released",
            self.region.buf,
            self.region.byte_count
        );
        unsafe { self.region.free() }
    }

    pub(crate) fn is_released(&self) -> bool {
        self.region.is_released()
    }

    /// A view of the same region with the window base advanced by `advance`.
    pub(crate) fn window(&self, advance: usize) -> DirectStorage {
        self.region.check_live();
        debug_assert!(self.offset + advance <= self.region.byte_count, "internal: window past region");
        DirectStorage {
            region: Rc::clone(&self.region),
            offset: self.offset + advance,
            owner: false,
        }
    }

    #[inline]
    fn base(&self) -> *mut u8 {
        self.region.check_live();
        unsafe { self.region.buf.add(self.offset) }
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

    /// Moves `[from, from + len)` to the front of the window, tolerating
    /// overlap.
    pub(crate) fn shift_to_front(&self, from: usize, len: usize) {
        unsafe { ptr::copy(self.base().add(from), self.base(), len) }
    }

    pub(crate) fn as_slice(&self, start: usize, len: usize) -> &[u8] {
        unsafe { slice::from_raw_parts(self.base().add(start), len) }
    }
}
