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

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
#![no_std]

//! Fixed-capacity byte buffers for staging binary I/O.
//!
//! The `rcbuf` crate provides [`ByteBuffer`], a cursor-driven buffer over a
//! fixed byte region with endian-aware typed accessors and cheap aliasing
//! views. It is the staging area between producers of binary data and the
//! I/O collaborators that consume it; the buffer itself performs no file or
//! socket I/O and never grows.
//!
//! # Cursor discipline
//!
//! A buffer carries a *position* (next index used by a relative access), a
//! *limit* (first index that must not be touched) and an optional *mark*.
//! Writing then reading follows the classic fill/flip/drain rhythm:
//!
//! ```rust
//! use rcbuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::allocate(1024);
//! buf.put_u32(42).unwrap();
//! buf.put_slice(b"hello world").unwrap();
//!
//! buf.flip();
//! assert_eq!(42, buf.get_u32().unwrap());
//! assert_eq!(11, buf.remaining());
//! ```
//!
//! # Views
//!
//! [`slice`](ByteBuffer::slice), [`duplicate`](ByteBuffer::duplicate) and
//! [`as_read_only`](ByteBuffer::as_read_only) create new buffers with
//! independent cursors over the same underlying storage, tracked by a shared
//! `Rc`. Bytes written through one view are visible through every alias at
//! the same absolute offset, which is what makes zero-copy framing of a
//! larger staging region work:
//!
//! ```rust
//! use rcbuf::ByteBuffer;
//!
//! let mut region = ByteBuffer::allocate(16);
//! region.set_position(4).unwrap();
//! let mut frame = region.slice();
//! frame.put_u8(0xFF).unwrap();
//! assert_eq!(0xFF, region.get_u8_at(4).unwrap());
//! ```
//!
//! # Heap and direct backings
//!
//! [`ByteBuffer::allocate`] and the `wrap` constructors build buffers over a
//! managed heap array; [`ByteBuffer::allocate_direct`] requests raw memory
//! from the allocator and [`ByteBuffer::release`] returns it explicitly.
//! Both backings sit behind the same API. Accessing a released region
//! through a leftover view is a programming error and panics rather than
//! reading freed memory.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod buffer;
mod cursor;
mod error;
mod fmt;
mod order;
mod storage;

pub use crate::buffer::ByteBuffer;
pub use crate::error::{Error, Result};
pub use crate::order::ByteOrder;

// Optional Serde support
#[cfg(feature = "serde")]
mod serde;
