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

use rcbuf::{ByteBuffer, ByteOrder};

#[test]
fn allocate_direct_is_zero_filled() {
    let mut buf = ByteBuffer::allocate_direct(32);
    assert!(buf.is_direct());
    assert_eq!(32, buf.capacity());
    for _ in 0..32 {
        assert_eq!(0, buf.get_u8().unwrap());
    }
}

#[test]
fn direct_codec_round_trip() {
    for &order in &[ByteOrder::BigEndian, ByteOrder::LittleEndian] {
        let mut buf = ByteBuffer::allocate_direct(64);
        buf.set_order(order);
        buf.put_i32(-42).unwrap();
        buf.put_f64(2.5).unwrap();
        buf.put_slice(b"direct").unwrap();
        buf.flip();
        assert_eq!(-42, buf.get_i32().unwrap());
        assert_eq!(2.5, buf.get_f64().unwrap());
        let mut tail = [0u8; 6];
        buf.copy_to_slice(&mut tail).unwrap();
        assert_eq!(b"direct", &tail);
    }
}

#[test]
fn direct_views_alias_the_region() {
    let mut owner = ByteBuffer::allocate_direct(8);
    owner.set_position(2).unwrap();
    let mut view = owner.slice();
    assert!(view.is_direct());
    view.put_u8(0x5A).unwrap();
    assert_eq!(0x5A, owner.get_u8_at(2).unwrap());
}

#[test]
fn direct_compact() {
    let mut buf = ByteBuffer::allocate_direct(8);
    buf.put_slice(b"abcd").unwrap();
    buf.flip();
    buf.get_u8().unwrap();
    buf.compact().unwrap();
    assert_eq!(3, buf.position());
    assert_eq!(8, buf.limit());
    assert_eq!(b'b', buf.get_u8_at(0).unwrap());
}

#[test]
fn heap_and_direct_compare_by_content() {
    let mut direct = ByteBuffer::allocate_direct(16);
    direct.put_slice(b"same").unwrap();
    direct.flip();
    let heap = ByteBuffer::wrap(b"same".to_vec());
    assert_eq!(heap, direct);
}

#[test]
fn release_owner_then_drop_views() {
    let owner = ByteBuffer::allocate_direct(16);
    let view = owner.duplicate();
    owner.release();
    // Dropping a view of a released region must not free it again.
    drop(view);
}

#[test]
#[should_panic(expected = "released")]
fn release_poisons_later_alias_reads() {
    let owner = ByteBuffer::allocate_direct(16);
    let alias = owner.duplicate();
    owner.release();
    let _ = alias.get_u8_at(0);
}

#[test]
#[should_panic(expected = "released")]
fn release_poisons_later_alias_writes() {
    let owner = ByteBuffer::allocate_direct(16);
    let mut alias = owner.duplicate();
    owner.release();
    let _ = alias.put_u8(1);
}

#[test]
#[should_panic(expected = "released")]
fn release_poisons_view_creation() {
    let owner = ByteBuffer::allocate_direct(16);
    let alias = owner.duplicate();
    owner.release();
    let _ = alias.slice();
}

#[test]
#[should_panic(expected = "non-owning")]
fn release_on_view_is_fatal() {
    let owner = ByteBuffer::allocate_direct(16);
    let view = owner.duplicate();
    view.release();
}

#[test]
#[should_panic(expected = "heap")]
fn release_on_heap_buffer_is_fatal() {
    ByteBuffer::allocate(16).release();
}

#[test]
fn released_buffer_debug_does_not_touch_memory() {
    let owner = ByteBuffer::allocate_direct(4);
    let alias = owner.duplicate();
    owner.release();
    assert_eq!("ByteBuffer[pos=0 lim=4 cap=4 <released>]", format!("{:?}", alias));
}

#[test]
fn wrap_raw_shares_caller_memory() {
    let mut backing = vec![0u8; 8];
    let ptr = backing.as_mut_ptr();
    {
        let mut buf = unsafe { ByteBuffer::wrap_raw(ptr, backing.len()) };
        assert!(buf.is_direct());
        buf.put_slice(b"wrapped!").unwrap();
        // Dropping the buffer must leave the caller's memory alone.
    }
    assert_eq!(b"wrapped!", &backing[..]);
}

#[test]
#[should_panic(expected = "non-owning")]
fn wrap_raw_buffers_cannot_release() {
    let mut backing = vec![0u8; 8];
    let ptr = backing.as_mut_ptr();
    let buf = unsafe { ByteBuffer::wrap_raw(ptr, 8) };
    buf.release();
}

#[test]
fn zero_capacity_direct_buffer() {
    let buf = ByteBuffer::allocate_direct(0);
    assert_eq!(0, buf.capacity());
    assert!(!buf.has_remaining());
    buf.release();
}
