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

use ylong_hpack::integer::{integer_decode, integer_encode, IntegerEncoder};
use ylong_hpack::ErrorKind;

fn encode(value: usize, prefix_bits: u8) -> Vec<u8> {
    let mut dst = Vec::new();
    integer_encode(value, prefix_bits, &mut dst).unwrap();
    dst
}

/// SDV test cases for the integer representation boundary values.
///
/// # Brief
/// 1. Encodes and decodes the values of `RFC7541 appendix-C.1`.
/// 2. Checks the octets and the number of consumed bytes.
#[test]
fn sdv_integer_boundary_values() {
    assert_eq!(encode(10, 5), [0x0a]);
    assert_eq!(encode(1337, 5), [0x1f, 0x9a, 0x0a]);
    assert_eq!(encode(42, 8), [0x2a]);
    assert_eq!(encode(31, 5), [0x1f, 0x00]);

    assert_eq!(integer_decode(&[0x0a], 5).unwrap(), (10, 1));
    assert_eq!(integer_decode(&[0x1f, 0x9a, 0x0a], 5).unwrap(), (1337, 3));
    assert_eq!(integer_decode(&[0x2a], 8).unwrap(), (42, 1));
    // Bits above the prefix belong to the representation type.
    assert_eq!(integer_decode(&[0xea], 5).unwrap(), (10, 1));
}

/// SDV test cases for the widest prefix.
///
/// # Brief
/// 1. Encodes with a 9-bit prefix.
/// 2. Checks that it uses the full first octet like an 8-bit prefix.
#[test]
fn sdv_integer_nine_bit_prefix() {
    assert_eq!(encode(1337, 9), [0xff, 0xba, 0x08]);
    assert_eq!(encode(1337, 9), encode(1337, 8));
    assert_eq!(integer_decode(&[0xff, 0xba, 0x08], 9).unwrap(), (1337, 3));
}

/// SDV test cases for integer errors.
///
/// # Brief
/// 1. Uses out-of-range prefixes and truncated inputs.
/// 2. Checks the returned error kinds.
#[test]
fn sdv_integer_errors() {
    let mut dst = Vec::new();
    let err = integer_encode(1, 10, &mut dst).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::OutOfRange(10));
    assert!(dst.is_empty());
    assert!(IntegerEncoder::new(1, 200).is_err());

    let err = integer_decode(&[0x0a], 10).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::OutOfRange(10));

    let err = integer_decode(&[], 5).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TruncatedInput);
    assert!(err.is_decoding_error());
    let err = integer_decode(&[0x1f, 0x9a], 5).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TruncatedInput);

    let mut src = vec![0xff];
    src.extend([0xff; 12]);
    src.push(0x01);
    let err = integer_decode(&src, 8).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IntegerOverflow);
}

/// SDV test cases for decoding integers from a longer buffer.
///
/// # Brief
/// 1. Concatenates several encoded integers.
/// 2. Decodes them one after another by advancing the read cursor.
#[test]
fn sdv_integer_decode_sequence() {
    let values = [0, 30, 31, 127, 128, 16383, 1 << 20];
    let mut buf = Vec::new();
    for value in values {
        integer_encode(value, 5, &mut buf).unwrap();
    }

    let mut cursor = 0;
    for value in values {
        let (decoded, consumed) = integer_decode(&buf[cursor..], 5).unwrap();
        assert_eq!(decoded, value);
        cursor += consumed;
    }
    assert_eq!(cursor, buf.len());
}
