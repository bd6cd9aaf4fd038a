// Copyright (c) 2023 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! [Integer Representation] implementation of [HPACK].
//!
//! [Integer Representation]: https://httpwg.org/specs/rfc7541.html#integer.representation
//! [HPACK]: https://httpwg.org/specs/rfc7541.html
//!
//! # Introduction
//! HPACK writes table indices and string lengths as prefixed integers. A value
//! below `2^N - 1` fits into the `N` prefix bits of the first octet. Larger
//! values fill the prefix with ones and continue in octets carrying 7 bits
//! each, least significant group first, with the high bit set on all but the
//! last one.
//!
//! The codec only ever fills the low `prefix_bits` bits of the first octet.
//! The high bits belong to the representation type and are set by the caller.

use core::cmp::Ordering;

use crate::error::{ErrorKind, HpackError};

/// The largest prefix width accepted by [`integer_encode`] and
/// [`integer_decode`].
pub const MAX_PREFIX_BITS: u8 = 9;

/// Encodes `value` with an N-bit prefix and appends it to `dst`.
///
/// # Examples
///
/// ```
/// use ylong_hpack::integer::integer_encode;
///
/// let mut dst = Vec::new();
/// integer_encode(1337, 5, &mut dst).unwrap();
/// assert_eq!(dst, [0x1f, 0x9a, 0x0a]);
/// ```
pub fn integer_encode(value: usize, prefix_bits: u8, dst: &mut Vec<u8>) -> Result<(), HpackError> {
    let mut encoder = IntegerEncoder::new(value, prefix_bits)?;
    while let Some(byte) = encoder.next_byte() {
        dst.push(byte);
    }
    Ok(())
}

/// Decodes an integer with an N-bit prefix from the start of `src`.
///
/// Returns the value and the number of bytes consumed, which the caller uses
/// to advance its read cursor.
///
/// # Examples
///
/// ```
/// use ylong_hpack::integer::integer_decode;
///
/// assert_eq!(integer_decode(&[0x1f, 0x9a, 0x0a, 0xff], 5).unwrap(), (1337, 3));
/// ```
pub fn integer_decode(src: &[u8], prefix_bits: u8) -> Result<(usize, usize), HpackError> {
    let mask = prefix_mask(prefix_bits)?;
    let (first, rest) = src
        .split_first()
        .ok_or(HpackError::from(ErrorKind::TruncatedInput))?;

    let mut decoder = match IntegerDecoder::first_byte(*first, mask) {
        Ok(value) => return Ok((value, 1)),
        Err(decoder) => decoder,
    };
    for (n, byte) in rest.iter().enumerate() {
        if let Some(value) = decoder.next_byte(*byte)? {
            return Ok((value, n + 2));
        }
    }
    Err(ErrorKind::TruncatedInput.into())
}

/// Converts a prefix width into the mask of the bits it covers. An octet can
/// only carry 8 prefix bits, so a width of 9 shares the mask of 8.
pub fn prefix_mask(prefix_bits: u8) -> Result<u8, HpackError> {
    if prefix_bits > MAX_PREFIX_BITS {
        return Err(ErrorKind::OutOfRange(prefix_bits).into());
    }
    Ok((u8::MAX as u16 >> (8 - prefix_bits.min(8))) as u8)
}

/// Incremental decoder of one prefixed integer (`RFC7541 section-5.1`).
///
/// Continuation octets are accumulated with checked arithmetic, so a
/// representation that does not fit into `usize` is reported instead of
/// wrapping around.
pub struct IntegerDecoder {
    value: usize,
    shift: u32,
}

impl IntegerDecoder {
    /// Takes the first byte of a representation and the mask of its prefix.
    /// Returns the integer directly if it fits into the prefix, otherwise
    /// returns a decoder waiting for continuation bytes.
    pub fn first_byte(byte: u8, mask: u8) -> Result<usize, Self> {
        let value = byte & mask;
        match value.cmp(&mask) {
            Ordering::Less => Ok(value as usize),
            _ => Err(Self {
                value: value as usize,
                shift: 0,
            }),
        }
    }

    /// Adds a continuation byte. Returns `Ok(Some(value))` once the
    /// terminating byte has been seen and `Ok(None)` while more are needed.
    ///
    /// Octets with a zero payload never overflow, however far they are
    /// shifted, so overlong but well-formed representations still decode.
    pub fn next_byte(&mut self, byte: u8) -> Result<Option<usize>, HpackError> {
        let payload = (byte & 0x7f) as usize;
        if payload != 0 {
            self.value = 1usize
                .checked_shl(self.shift)
                .and_then(|res| res.checked_mul(payload))
                .and_then(|res| res.checked_add(self.value))
                .ok_or(HpackError::from(ErrorKind::IntegerOverflow))?;
        }
        self.shift = self.shift.saturating_add(7);
        match (byte & 0x80) == 0x00 {
            true => Ok(Some(self.value)),
            false => Ok(None),
        }
    }
}

/// Octet by octet encoder of one prefixed integer (`RFC7541 section-5.1`).
pub struct IntegerEncoder {
    value: usize,
    mask: u8,
    state: IntegerEncodeState,
}

enum IntegerEncodeState {
    First,
    Other,
    Finish,
}

impl IntegerEncoder {
    /// Creates a new `IntegerEncoder`, failing if `prefix_bits` is out of
    /// range.
    pub fn new(value: usize, prefix_bits: u8) -> Result<Self, HpackError> {
        Ok(Self {
            value,
            mask: prefix_mask(prefix_bits)?,
            state: IntegerEncodeState::First,
        })
    }

    /// Produces the next octet, or `None` once the representation is complete.
    pub fn next_byte(&mut self) -> Option<u8> {
        match self.state {
            IntegerEncodeState::First => {
                if self.value < self.mask as usize {
                    self.state = IntegerEncodeState::Finish;
                    return Some(self.value as u8);
                }
                self.value -= self.mask as usize;
                self.state = IntegerEncodeState::Other;
                Some(self.mask)
            }
            IntegerEncodeState::Other => Some(if self.value >= 128 {
                let res = (self.value & 0x7f) as u8;
                self.value >>= 7;
                res | 0x80
            } else {
                self.state = IntegerEncodeState::Finish;
                self.value as u8
            }),
            IntegerEncodeState::Finish => None,
        }
    }

    /// Checks whether every octet has been produced.
    pub fn is_finish(&self) -> bool {
        matches!(self.state, IntegerEncodeState::Finish)
    }
}

#[cfg(test)]
mod ut_integer {
    use crate::error::ErrorKind;
    use crate::integer::{integer_decode, integer_encode, IntegerDecoder, IntegerEncoder};

    macro_rules! encoded {
        ($value: expr, $bits: expr) => {{
            let mut dst = Vec::new();
            integer_encode($value, $bits, &mut dst).unwrap();
            dst
        }};
    }

    /// UT test cases for `integer_encode`.
    ///
    /// # Brief
    /// 1. Calls `integer_encode` with the examples of `RFC7541 Appendix C.1`.
    /// 2. Checks if the test results are correct.
    #[test]
    fn ut_integer_encode() {
        // C.1.1. Example 1: Encoding 10 Using a 5-Bit Prefix
        assert_eq!(encoded!(10, 5), [0x0a]);
        // C.1.2. Example 2: Encoding 1337 Using a 5-Bit Prefix
        assert_eq!(encoded!(1337, 5), [0x1f, 0x9a, 0x0a]);
        // C.1.3. Example 3: Encoding 42 Starting at an Octet Boundary
        assert_eq!(encoded!(42, 8), [0x2a]);

        for bits in 1..9 {
            assert!(!encoded!(10, bits).is_empty());
        }
        assert_eq!(encoded!(0, 0), [0x00, 0x00]);
        assert_eq!(encoded!(31, 5), [0x1f, 0x00]);
    }

    /// UT test cases for `integer_encode` with an invalid prefix.
    ///
    /// # Brief
    /// 1. Calls `integer_encode` with a prefix width of 10.
    /// 2. Checks that nothing is written and `OutOfRange` is returned.
    #[test]
    fn ut_integer_encode_out_of_range() {
        let mut dst = Vec::new();
        let err = integer_encode(1, 10, &mut dst).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::OutOfRange(10));
        assert!(dst.is_empty());
    }

    /// UT test cases for `integer_decode`.
    ///
    /// # Brief
    /// 1. Calls `integer_decode` with the examples of `RFC7541 Appendix C.1`.
    /// 2. Checks the values and the consumed lengths.
    #[test]
    fn ut_integer_decode() {
        assert_eq!(integer_decode(&[0x0a], 5).unwrap(), (10, 1));
        assert_eq!(integer_decode(&[0x1f, 0x9a, 0x0a], 5).unwrap(), (1337, 3));
        assert_eq!(integer_decode(&[0x2a], 8).unwrap(), (42, 1));
        // Flag bits above the prefix are ignored.
        assert_eq!(integer_decode(&[0xea], 5).unwrap(), (10, 1));
    }

    /// UT test cases for `integer_decode` failures.
    ///
    /// # Brief
    /// 1. Calls `integer_decode` with empty, truncated and overflowing input
    ///    and with an invalid prefix.
    /// 2. Checks the error kinds.
    #[test]
    fn ut_integer_decode_failures() {
        assert_eq!(
            integer_decode(&[], 8).unwrap_err().kind(),
            &ErrorKind::TruncatedInput
        );
        assert_eq!(
            integer_decode(&[0x1f], 5).unwrap_err().kind(),
            &ErrorKind::TruncatedInput
        );
        assert_eq!(
            integer_decode(&[0x1f, 0x9a], 5).unwrap_err().kind(),
            &ErrorKind::TruncatedInput
        );
        assert_eq!(
            integer_decode(&[0x1f], 10).unwrap_err().kind(),
            &ErrorKind::OutOfRange(10)
        );
        let mut overflow = vec![0x1f];
        overflow.extend_from_slice(&[0xff; 10]);
        overflow.push(0x01);
        assert_eq!(
            integer_decode(&overflow, 5).unwrap_err().kind(),
            &ErrorKind::IntegerOverflow
        );
    }

    /// UT test cases for overlong representations.
    ///
    /// # Brief
    /// 1. Decodes values padded with zero continuation octets, more than fit
    ///    into the bits of a `usize`.
    /// 2. Checks that the value is unchanged and every octet was consumed.
    #[test]
    fn ut_integer_decode_zero_continuations() {
        let mut src = vec![0x1f];
        src.extend_from_slice(&[0x80; 10]);
        src.push(0x00);
        assert_eq!(integer_decode(&src, 5).unwrap(), (31, 12));

        let mut src = vec![0x1f, 0x9a];
        src.extend_from_slice(&[0x8a; 1]);
        src.extend_from_slice(&[0x80; 20]);
        src.push(0x00);
        assert_eq!(integer_decode(&src, 5).unwrap(), (1337, 24));

        // A non-zero payload past the width of `usize` still overflows.
        let mut src = vec![0x1f];
        src.extend_from_slice(&[0x80; 10]);
        src.push(0x01);
        assert_eq!(
            integer_decode(&src, 5).unwrap_err().kind(),
            &ErrorKind::IntegerOverflow
        );
    }

    /// UT test cases for the round trip of `integer_encode` and
    /// `integer_decode`.
    ///
    /// # Brief
    /// 1. Encodes every value in `0..=100000` with every prefix width in
    ///    `1..=8`.
    /// 2. Decodes the result and checks value and consumed length.
    #[test]
    fn ut_integer_round_trip() {
        let mut dst = Vec::new();
        for bits in 1..=8 {
            for value in 0..=100_000 {
                dst.clear();
                integer_encode(value, bits, &mut dst).unwrap();
                assert_eq!(integer_decode(&dst, bits).unwrap(), (value, dst.len()));
            }
        }
        for bits in [0, 9] {
            for value in [0, 1, 254, 255, 256, 1337, usize::MAX] {
                dst.clear();
                integer_encode(value, bits, &mut dst).unwrap();
                assert_eq!(integer_decode(&dst, bits).unwrap(), (value, dst.len()));
            }
        }
    }

    /// UT test cases for `IntegerDecoder`.
    ///
    /// # Brief
    /// 1. Feeds `IntegerDecoder` byte by byte.
    /// 2. Checks the intermediate and final results.
    #[test]
    fn ut_integer_decoder() {
        assert!(matches!(IntegerDecoder::first_byte(0x0a, 0x1f), Ok(10)));
        match IntegerDecoder::first_byte(0x1f, 0x1f) {
            Err(mut decoder) => {
                assert_eq!(decoder.next_byte(0x9a).unwrap(), None);
                assert_eq!(decoder.next_byte(0x0a).unwrap(), Some(1337));
            }
            Ok(_) => panic!("IntegerDecoder::first_byte() failed!"),
        }
    }

    /// UT test cases for `IntegerEncoder`.
    ///
    /// # Brief
    /// 1. Creates an `IntegerEncoder` and pulls its bytes.
    /// 2. Checks the bytes and the finish state.
    #[test]
    fn ut_integer_encoder() {
        let mut encoder = IntegerEncoder::new(1337, 5).unwrap();
        assert!(!encoder.is_finish());
        assert_eq!(encoder.next_byte(), Some(0x1f));
        assert_eq!(encoder.next_byte(), Some(0x9a));
        assert_eq!(encoder.next_byte(), Some(0x0a));
        assert!(encoder.is_finish());
        assert_eq!(encoder.next_byte(), None);

        assert!(IntegerEncoder::new(1337, 10).is_err());
    }
}
