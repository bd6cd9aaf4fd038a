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

#![cfg(feature = "huffman")]

use ylong_hpack::huffman::{huffman_decode, huffman_encode, huffman_encoded_len, HuffmanDecoder};
use ylong_hpack::ErrorKind;

fn decode(src: &[u8]) -> Result<Vec<u8>, ErrorKind> {
    let mut dst = Vec::new();
    huffman_decode(src, &mut dst).map_err(|e| e.kind().clone())?;
    Ok(dst)
}

/// SDV test cases for the Huffman fixed vectors.
///
/// # Brief
/// 1. Decodes the literals of `RFC7541 appendix-C.4`.
/// 2. Encodes the same strings and compares the octets.
#[test]
fn sdv_huffman_fixed_vectors() {
    let www = [
        0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff,
    ];
    let no_cache = [0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf];

    assert_eq!(decode(&www).unwrap(), b"www.example.com");
    assert_eq!(decode(&no_cache).unwrap(), b"no-cache");

    let mut dst = Vec::new();
    huffman_encode(b"www.example.com", &mut dst);
    assert_eq!(dst, www);
    assert_eq!(huffman_encoded_len(b"www.example.com"), www.len());

    dst.clear();
    huffman_encode(b"no-cache", &mut dst);
    assert_eq!(dst, no_cache);
}

/// SDV test cases for empty Huffman strings.
///
/// # Brief
/// 1. Encodes and decodes an empty string.
/// 2. Checks that both sides are empty.
#[test]
fn sdv_huffman_empty() {
    let mut dst = Vec::new();
    huffman_encode(b"", &mut dst);
    assert!(dst.is_empty());
    assert_eq!(huffman_encoded_len(b""), 0);
    assert_eq!(decode(&[]).unwrap(), b"");
}

/// SDV test cases for malformed Huffman strings.
///
/// # Brief
/// 1. Decodes a string containing EOS and strings with bad padding.
/// 2. Checks the returned error kinds.
#[test]
fn sdv_huffman_malformed() {
    assert_eq!(
        decode(&[0x5f, 0xff, 0xff, 0xff, 0xff]),
        Err(ErrorKind::InvalidHuffmanString)
    );
    assert_eq!(
        decode(&[0xff, 0xff, 0xff, 0xff]),
        Err(ErrorKind::InvalidHuffmanString)
    );
    // Padding made of zeros, or longer than seven bits.
    assert_eq!(decode(&[0x00]), Err(ErrorKind::IncompleteHuffmanString));
    assert_eq!(decode(&[0xff]), Err(ErrorKind::IncompleteHuffmanString));
}

/// SDV test cases for `HuffmanDecoder` over fragmented input.
///
/// # Brief
/// 1. Feeds an encoded string to the decoder one octet at a time.
/// 2. Checks the output after `finish`.
#[test]
fn sdv_huffman_decoder_fragments() {
    let text = b"custom-value with some :punctuation; and 0123456789";
    let mut encoded = Vec::new();
    huffman_encode(text, &mut encoded);

    let mut decoder = HuffmanDecoder::new();
    for chunk in encoded.chunks(1) {
        decoder.decode(chunk).unwrap();
    }
    assert_eq!(decoder.finish().unwrap(), text);

    let mut decoder = HuffmanDecoder::new();
    decoder.decode(&[0x00]).unwrap();
    let err = decoder.finish().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IncompleteHuffmanString);
}

/// SDV test cases for decoding after a malformed piece.
///
/// # Brief
/// 1. Feeds `HuffmanDecoder` a valid piece followed by one that contains
///    `EOS`, then decodes the same input with `huffman_decode`.
/// 2. Checks that no partial string escapes either path.
#[test]
fn sdv_huffman_no_partial_output() {
    let mut decoder = HuffmanDecoder::new();
    decoder.decode(&[0xa8, 0xeb]).unwrap();
    assert!(decoder.decode(&[0x5f, 0xff, 0xff, 0xff, 0xff]).is_err());
    assert!(decoder.decode(&[]).is_err());
    assert_eq!(
        decoder.finish().unwrap_err().kind(),
        &ErrorKind::InvalidHuffmanString
    );

    let mut dst = Vec::new();
    let err = huffman_decode(&[0xa8, 0xeb, 0x5f, 0xff, 0xff, 0xff, 0xff], &mut dst).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidHuffmanString);
    assert!(dst.is_empty());
}
