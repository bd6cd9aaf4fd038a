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

//! Drives the primitives through the request examples of `RFC7541 Appendix
//! C.4`, playing the part of the header block encoder and decoder.

use ylong_hpack::huffman::{huffman_decode, huffman_encode};
use ylong_hpack::integer::{integer_decode, integer_encode};
use ylong_hpack::{ErrorKind, Header, HeaderListLimit, HeaderTable, HpackError};

const REQUESTS: [(&str, usize); 3] = [
    // C.4.1. First Request
    ("828684418cf1e3c2e5f23a6ba0ab90f4ff", 57),
    // C.4.2. Second Request
    ("828684be5886a8eb10649cbf", 110),
    // C.4.3. Third Request
    ("828785bf408825a849e95ba97d7f8925a849e95bb8e8b4bf", 164),
];

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn request_headers() -> [Vec<Header>; 3] {
    [
        vec![
            Header::new(":method", "GET"),
            Header::new(":scheme", "http"),
            Header::new(":path", "/"),
            Header::new(":authority", "www.example.com"),
        ],
        vec![
            Header::new(":method", "GET"),
            Header::new(":scheme", "http"),
            Header::new(":path", "/"),
            Header::new(":authority", "www.example.com"),
            Header::new("cache-control", "no-cache"),
        ],
        vec![
            Header::new(":method", "GET"),
            Header::new(":scheme", "https"),
            Header::new(":path", "/index.html"),
            Header::new(":authority", "www.example.com"),
            Header::new("custom-key", "custom-value"),
        ],
    ]
}

fn read_string(src: &[u8]) -> Result<(Vec<u8>, &[u8]), HpackError> {
    let is_huffman = src.first().map_or(false, |byte| byte & 0x80 == 0x80);
    let (len, consumed) = integer_decode(src, 7)?;
    let rest = &src[consumed..];
    if rest.len() < len {
        return Err(ErrorKind::TruncatedInput.into());
    }
    let (raw, rest) = rest.split_at(len);
    let mut string = Vec::new();
    match is_huffman {
        true => huffman_decode(raw, &mut string)?,
        false => string.extend_from_slice(raw),
    }
    Ok((string, rest))
}

fn write_string(string: &[u8], dst: &mut Vec<u8>) {
    let mut code = Vec::new();
    huffman_encode(string, &mut code);
    let start = dst.len();
    integer_encode(code.len(), 7, dst).unwrap();
    dst[start] |= 0x80;
    dst.extend_from_slice(&code);
}

/// Decodes indexed fields and literals with incremental indexing, the only
/// representations used by `RFC7541 Appendix C.4`.
fn decode_block(
    table: &mut HeaderTable,
    limit: &mut HeaderListLimit,
    mut src: &[u8],
) -> Result<Vec<Header>, HpackError> {
    let mut headers = Vec::new();
    limit.reset();
    while let Some(&first) = src.first() {
        let header = if first & 0x80 == 0x80 {
            let (index, consumed) = integer_decode(src, 7)?;
            src = &src[consumed..];
            table.get_by_index(index)?
        } else {
            assert_eq!(first & 0xc0, 0x40);
            let (index, consumed) = integer_decode(src, 6)?;
            src = &src[consumed..];
            let name = match index {
                0 => {
                    let (name, rest) = read_string(src)?;
                    src = rest;
                    name
                }
                _ => table.get_by_index(index)?.into_parts().0,
            };
            let (value, rest) = read_string(src)?;
            src = rest;
            let header = Header::new(name, value);
            table.add_header(&header)?;
            header
        };
        limit.check_header(&header)?;
        headers.push(header);
    }
    Ok(headers)
}

/// Encodes full matches as indexed fields and everything else as literals
/// with incremental indexing.
fn encode_block(table: &mut HeaderTable, headers: &[Header]) -> Vec<u8> {
    let mut dst = Vec::new();
    for header in headers {
        let value = header.value().unwrap();
        let start = dst.len();
        match table.search(header.name(), Some(value)) {
            Some((index, found)) if found.value().is_some() => {
                integer_encode(index, 7, &mut dst).unwrap();
                dst[start] |= 0x80;
                continue;
            }
            Some((index, _)) => {
                integer_encode(index, 6, &mut dst).unwrap();
                dst[start] |= 0x40;
            }
            None => {
                dst.push(0x40);
                write_string(header.name(), &mut dst);
            }
        }
        write_string(value, &mut dst);
        table.add_header(header).unwrap();
    }
    dst
}

/// SDV test cases for decoding `RFC7541 Appendix C.4`.
///
/// # Brief
/// 1. Creates a `HeaderTable` shared by three header blocks.
/// 2. Decodes each block with the integer, Huffman and table primitives.
/// 3. Checks the header lists and the table size after each block.
#[test]
fn sdv_hpack_decode_rfc7541_requests() {
    let mut table = HeaderTable::new();
    let mut limit = HeaderListLimit::default();
    for ((block, size), headers) in REQUESTS.iter().zip(request_headers()) {
        let decoded = decode_block(&mut table, &mut limit, &hex(block)).unwrap();
        assert_eq!(decoded, headers);
        assert_eq!(table.current_size(), *size);
    }
    assert_eq!(
        table.get_by_index(62).unwrap(),
        Header::new("custom-key", "custom-value")
    );
    assert_eq!(
        table.get_by_index(63).unwrap(),
        Header::new("cache-control", "no-cache")
    );
    assert_eq!(
        table.get_by_index(64).unwrap(),
        Header::new(":authority", "www.example.com")
    );
    assert!(table.get_by_index(65).is_err());
}

/// SDV test cases for encoding `RFC7541 Appendix C.4`.
///
/// # Brief
/// 1. Creates a `HeaderTable` shared by three header lists.
/// 2. Encodes each list with `HeaderTable::search` and the codecs.
/// 3. Checks the produced blocks against the RFC.
#[test]
fn sdv_hpack_encode_rfc7541_requests() {
    let mut table = HeaderTable::new();
    for ((block, size), headers) in REQUESTS.iter().zip(request_headers()) {
        assert_eq!(encode_block(&mut table, &headers), hex(block));
        assert_eq!(table.current_size(), *size);
    }
}

/// SDV test cases for the header list budget while decoding.
///
/// # Brief
/// 1. Decodes `RFC7541 Appendix C.4.3` with a budget below its list size.
/// 2. Checks that `OversizedHeaderList` is reported.
#[test]
fn sdv_hpack_decode_oversized_header_list() {
    let mut table = HeaderTable::new();
    let mut limit = HeaderListLimit::new(128);
    let err = decode_block(&mut table, &mut limit, &hex(REQUESTS[2].0)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::OversizedHeaderList { limit: 128, .. }));
    assert!(err.is_decoding_error());
}
