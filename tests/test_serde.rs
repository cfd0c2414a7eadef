#![cfg(feature = "serde")]
#![warn(rust_2018_idioms)]

use serde_test::{assert_tokens, Token};

#[test]
fn test_ser_de_empty() {
    let b = rcbuf::ByteBuffer::allocate(0);
    assert_tokens(&b, &[Token::Bytes(b"")]);
}

#[test]
fn test_ser_de() {
    let b = rcbuf::ByteBuffer::copy_from_slice(b"bytes");
    assert_tokens(&b, &[Token::Bytes(b"bytes")]);
}

#[test]
fn test_ser_readable_region_only() {
    let mut b = rcbuf::ByteBuffer::copy_from_slice(b"xbytesx");
    b.set_position(1).unwrap();
    b.set_limit(6).unwrap();
    assert_tokens(&b, &[Token::Bytes(b"bytes")]);
}
