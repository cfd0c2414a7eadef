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
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

/// Byte order applied by the multi-byte accessors of a buffer.
///
/// `BigEndian` is network byte order: the most significant byte occupies the
/// lowest index. `LittleEndian` reverses the byte order per field. Every
/// buffer starts out big-endian.
///
/// # Examples
///
/// ```
/// use rcbuf::{ByteBuffer, ByteOrder};
///
/// let mut buf = ByteBuffer::allocate(4);
/// buf.set_order(ByteOrder::LittleEndian);
/// buf.put_u16(0x0102).unwrap();
/// buf.flip();
/// assert_eq!(0x02, buf.get_u8().unwrap());
/// assert_eq!(0x01, buf.get_u8().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network byte order).
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl Default for ByteOrder {
    fn default() -> ByteOrder {
        ByteOrder::BigEndian
    }
}

// The codec moves every multi-byte value through a fixed-width scratch
// array; these helpers select the byteorder impl matching the runtime flag.
impl ByteOrder {
    pub(crate) fn read_u16(self, raw: &[u8]) -> u16 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u16(raw),
            ByteOrder::LittleEndian => LittleEndian::read_u16(raw),
        }
    }

    pub(crate) fn read_u32(self, raw: &[u8]) -> u32 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u32(raw),
            ByteOrder::LittleEndian => LittleEndian::read_u32(raw),
        }
    }

    pub(crate) fn read_u64(self, raw: &[u8]) -> u64 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u64(raw),
            ByteOrder::LittleEndian => LittleEndian::read_u64(raw),
        }
    }

    pub(crate) fn write_u16(self, raw: &mut [u8], value: u16) {
        match self {
            ByteOrder::BigEndian => BigEndian::write_u16(raw, value),
            ByteOrder::LittleEndian => LittleEndian::write_u16(raw, value),
        }
    }

    pub(crate) fn write_u32(self, raw: &mut [u8], value: u32) {
        match self {
            ByteOrder::BigEndian => BigEndian::write_u32(raw, value),
            ByteOrder::LittleEndian => LittleEndian::write_u32(raw, value),
        }
    }

    pub(crate) fn write_u64(self, raw: &mut [u8], value: u64) {
        match self {
            ByteOrder::BigEndian => BigEndian::write_u64(raw, value),
            ByteOrder::LittleEndian => LittleEndian::write_u64(raw, value),
        }
    }
}
