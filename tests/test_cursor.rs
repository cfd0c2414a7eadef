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
#![warn(rust_2018_idioms)]

use assert_matches::assert_matches;
use rcbuf::{ByteBuffer, Error};

#[test]
fn allocate_initial_state() {
    let buf = ByteBuffer::allocate(10);
    assert_eq!(10, buf.capacity());
    assert_eq!(0, buf.position());
    assert_eq!(10, buf.limit());
    assert_eq!(10, buf.remaining());
    assert!(buf.has_remaining());
    assert!(!buf.is_direct());
    assert!(!buf.is_read_only());
}

#[test]
fn allocate_is_zero_filled() {
    let mut buf = ByteBuffer::allocate(16);
    for _ in 0..16 {
        assert_eq!(0, buf.get_u8().unwrap());
    }
}

#[test]
fn position_validates_against_limit() {
    let mut buf = ByteBuffer::allocate(10);
    buf.set_limit(6).unwrap();
    buf.set_position(6).unwrap();
    assert_matches!(buf.set_position(7), Err(Error::InvalidArgument));
    assert_eq!(6, buf.position());
}

#[test]
fn limit_validates_against_capacity() {
    let mut buf = ByteBuffer::allocate(10);
    assert_matches!(buf.set_limit(11), Err(Error::InvalidArgument));
    assert_eq!(10, buf.limit());
}

#[test]
fn limit_clamps_position_and_discards_mark() {
    let mut buf = ByteBuffer::allocate(10);
    buf.set_position(8).unwrap();
    buf.mark();
    buf.set_limit(5).unwrap();
    assert_eq!(5, buf.position());
    assert_matches!(buf.reset(), Err(Error::InvalidArgument));
}

#[test]
fn mark_and_reset() {
    let mut buf = ByteBuffer::allocate(10);
    buf.set_position(3).unwrap();
    buf.mark();
    buf.set_position(7).unwrap();
    buf.reset().unwrap();
    assert_eq!(3, buf.position());
}

#[test]
fn reset_without_mark_is_invalid() {
    let mut buf = ByteBuffer::allocate(10);
    assert_matches!(buf.reset(), Err(Error::InvalidArgument));
}

#[test]
fn moving_position_below_mark_discards_it() {
    let mut buf = ByteBuffer::allocate(10);
    buf.set_position(5).unwrap();
    buf.mark();
    buf.set_position(2).unwrap();
    assert_matches!(buf.reset(), Err(Error::InvalidArgument));
}

#[test]
fn clear_restores_whole_capacity() {
    let mut buf = ByteBuffer::allocate(10);
    buf.put_slice(b"abc").unwrap();
    buf.mark();
    buf.clear();
    assert_eq!(0, buf.position());
    assert_eq!(10, buf.limit());
    assert_matches!(buf.reset(), Err(Error::InvalidArgument));
    // Clearing never touches the bytes.
    assert_eq!(b'a', buf.get_u8_at(0).unwrap());
}

#[test]
fn flip_switches_to_read_mode() {
    let mut buf = ByteBuffer::allocate(10);
    buf.put_slice(b"abcd").unwrap();
    buf.flip();
    assert_eq!(0, buf.position());
    assert_eq!(4, buf.limit());
    assert_eq!(4, buf.remaining());
}

#[test]
fn rewind_keeps_limit() {
    let mut buf = ByteBuffer::allocate(10);
    buf.put_slice(b"abcd").unwrap();
    buf.flip();
    buf.get_u8().unwrap();
    buf.rewind();
    assert_eq!(0, buf.position());
    assert_eq!(4, buf.limit());
}

#[test]
fn cursor_ops_chain() {
    let mut buf = ByteBuffer::allocate(10);
    buf.set_position(2).unwrap().set_limit(8).unwrap();
    assert_eq!(2, buf.position());
    assert_eq!(8, buf.limit());
    buf.clear().flip().rewind();
    assert_eq!(0, buf.limit());
}

#[test]
fn wrap_range_places_cursor() {
    let buf = ByteBuffer::wrap_range(vec![0; 10], 2, 5).unwrap();
    assert_eq!(10, buf.capacity());
    assert_eq!(2, buf.position());
    assert_eq!(7, buf.limit());
}

#[test]
fn wrap_range_validates_bounds() {
    assert_matches!(
        ByteBuffer::wrap_range(vec![0; 10], 11, 0),
        Err(Error::InvalidArgument)
    );
    assert_matches!(
        ByteBuffer::wrap_range(vec![0; 10], 4, 7),
        Err(Error::InvalidArgument)
    );
}
