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
use core::fmt;

/// Errors raised by buffer operations that violate a contract precondition.
///
/// Every variant is reported synchronously at the offending call and leaves
/// the buffer unchanged; no operation is retried internally. Lifecycle
/// violations on released direct memory are not representable here, they
/// panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Indicates a read past the limit, more bytes were requested than remain.
    Underflow,
    /// Indicates a write past the limit, more space was requested than remains.
    Overflow,
    /// Indicates an absolute index that falls outside the readable range.
    OutOfBounds,
    /// Indicates a cursor mutation or slice bound that violates the cursor invariant.
    InvalidArgument,
    /// Indicates a mutation attempted through a read-only buffer.
    ReadOnly,
    /// Indicates backing-array access on a buffer that has no accessible array.
    Unsupported,
}

/// Shorthand result type for buffer operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Underflow => write!(f, "buffer underflow"),
            Error::Overflow => write!(f, "buffer overflow"),
            Error::OutOfBounds => write!(f, "index out of bounds"),
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::ReadOnly => write!(f, "buffer is read-only"),
            Error::Unsupported => write!(f, "operation unsupported by this buffer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
