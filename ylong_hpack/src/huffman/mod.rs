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

//! [Huffman coding] implementation of the HPACK string literals.
//!
//! [Huffman coding]: https://en.wikipedia.org/wiki/Huffman_coding
//!
//! # Huffman code in HPACK
//! There is a table of Huffman code in `RFC7541 Appendix B`. It was generated
//! from statistics obtained on a large sample of HTTP headers. It is a
//! canonical Huffman code with 257 symbols (every octet plus `EOS`) and code
//! lengths from 5 to 30 bits. Both peers must use exactly this table.
//!
//! Encoding concatenates the codes of the input octets and pads the last
//! octet with the most significant bits of `EOS`, which are all `1`.
//! Decoding walks a precomputed state machine 4 bits at a time.

mod consts;

use core::cmp::Ordering;

use consts::{
    HUFFMAN_COMPLETE, HUFFMAN_DECODE, HUFFMAN_EMIT_SYMBOL, HUFFMAN_ENCODE, HUFFMAN_FAIL,
};

use crate::error::{ErrorKind, HpackError};

/// Appends the Huffman coded form of `src` to `dst`, padded to a whole
/// octet. An empty `src` appends nothing.
///
/// # Examples
///
/// ```
/// use ylong_hpack::huffman::huffman_encode;
///
/// let mut dst = Vec::new();
/// huffman_encode(b"no-cache", &mut dst);
/// assert_eq!(dst, [0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf]);
/// ```
pub fn huffman_encode(src: &[u8], dst: &mut Vec<u8>) {
    // `state` collects code bits from its most significant end, `unfilled` is
    // the number of low bits still free.
    //
    // `state`:
    // +----------+----------+----------------------------+
    // | Result A | Result B |          Unfilled          |
    // +----------+----------+----------------------------+
    // |<-------------------  64 bits  ------------------->
    //
    // A code longer than `Unfilled` is split: its high part completes `state`,
    // which is flushed, and its low part starts the next `state`.
    let mut state = 0u64;
    let mut unfilled = 64;

    for byte in src.iter() {
        let (nbits, code) = HUFFMAN_ENCODE[*byte as usize];
        match unfilled.cmp(&nbits) {
            Ordering::Greater => {
                state |= code << (unfilled - nbits);
                unfilled -= nbits;
            }
            Ordering::Equal => {
                state |= code;
                dst.extend_from_slice(&state.to_be_bytes());
                state = 0;
                unfilled = 64;
            }
            // Rotating moves the part that fits to the low end and the rest
            // to the high end of `rotate`.
            // `rotate`:
            // +---------+-----------------+----------+
            // | Parts B |                 |  Parts A |
            // +---------+-----------------+----------+
            Ordering::Less => {
                let rotate = code.rotate_right((nbits - unfilled) as u32);
                let mask = u64::MAX >> (64 - unfilled);
                state |= rotate & mask;
                dst.extend_from_slice(&state.to_be_bytes());
                state = rotate & !mask;
                unfilled = 64 - (nbits - unfilled);
            }
        }
    }

    // Pads the last octet with `1` bits and only outputs the octets that hold
    // code bits.
    if unfilled != 64 {
        state |= u64::MAX >> (64 - unfilled);
        let len = (8 - (unfilled >> 3)) as usize;
        dst.extend_from_slice(&state.to_be_bytes()[..len]);
    }
}

/// Gets the number of octets `huffman_encode` produces for `src`.
///
/// Callers compare it with `src.len()` to decide whether a string literal is
/// worth Huffman coding.
pub fn huffman_encoded_len(src: &[u8]) -> usize {
    let bits: u64 = src
        .iter()
        .map(|byte| HUFFMAN_ENCODE[*byte as usize].0)
        .sum();
    ((bits + 7) >> 3) as usize
}

/// Decodes a complete Huffman coded string literal and appends the octets to
/// `dst`.
///
/// # Errors
/// Returns `InvalidHuffmanString` if the input reaches `EOS` or a code that
/// does not exist, and `IncompleteHuffmanString` if it ends inside a code or
/// with padding that is not a prefix of `EOS`.
///
/// On failure `dst` is truncated back to its length on entry, so no partial
/// string is ever left behind.
///
/// # Examples
///
/// ```
/// use ylong_hpack::huffman::huffman_decode;
///
/// let mut dst = Vec::new();
/// huffman_decode(&[0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf], &mut dst).unwrap();
/// assert_eq!(dst, b"no-cache");
/// ```
pub fn huffman_decode(src: &[u8], dst: &mut Vec<u8>) -> Result<(), HpackError> {
    // `HUFFMAN_DECODE` is indexed by the current state and the next 4 input
    // bits. Each entry gives the next state, a decoded byte that is valid
    // only if `HUFFMAN_EMIT_SYMBOL` is set, and the flags.
    //
    // The flags of the last transition decide whether the string may end
    // there. An empty string never enters the state machine and is complete.
    let start = dst.len();
    let res = huffman_decode_inner(src, dst, 0, HUFFMAN_COMPLETE)
        .and_then(|(_, flags)| check_complete(flags));
    if res.is_err() {
        dst.truncate(start);
    }
    res
}

fn huffman_decode_inner(
    src: &[u8],
    dst: &mut Vec<u8>,
    state: u8,
    flags: u8,
) -> Result<(u8, u8), HpackError> {
    let (mut state, mut flags) = (state, flags);

    for byte in src.iter() {
        for nibble in [byte >> 4, byte & 0xf] {
            let (next, result, next_flags) = HUFFMAN_DECODE[state as usize][nibble as usize];
            if next_flags & HUFFMAN_FAIL == HUFFMAN_FAIL {
                tracing::debug!(state, nibble, "invalid huffman code");
                return Err(ErrorKind::InvalidHuffmanString.into());
            }
            if next_flags & HUFFMAN_EMIT_SYMBOL == HUFFMAN_EMIT_SYMBOL {
                dst.push(result);
            }
            (state, flags) = (next, next_flags);
        }
    }
    Ok((state, flags))
}

fn check_complete(flags: u8) -> Result<(), HpackError> {
    match flags & HUFFMAN_COMPLETE {
        HUFFMAN_COMPLETE => Ok(()),
        _ => {
            tracing::debug!("huffman string ends inside a code");
            Err(ErrorKind::IncompleteHuffmanString.into())
        }
    }
}

/// Incremental Huffman decoder for string literals that arrive in pieces.
///
/// The state machine position survives between calls to `decode`, so a code
/// may be split at any octet boundary. Only `finish` checks the padding.
///
/// A failed `decode` poisons the decoder: the octets decoded so far are
/// dropped, and every later `decode` or `finish` returns the same error.
///
/// # Examples
///
/// ```
/// use ylong_hpack::huffman::HuffmanDecoder;
///
/// let mut decoder = HuffmanDecoder::new();
/// decoder.decode(&[0xa8, 0xeb, 0x10]).unwrap();
/// decoder.decode(&[0x64, 0x9c, 0xbf]).unwrap();
/// assert_eq!(decoder.finish().unwrap(), b"no-cache");
/// ```
pub struct HuffmanDecoder {
    state: u8,
    flags: u8,
    vec: Vec<u8>,
    failed: Option<HpackError>,
}

impl HuffmanDecoder {
    /// Creates a new, empty `HuffmanDecoder`.
    pub fn new() -> Self {
        Self {
            state: 0,
            flags: HUFFMAN_COMPLETE,
            vec: Vec::new(),
            failed: None,
        }
    }

    /// Feeds the next piece of the coded string.
    pub fn decode(&mut self, src: &[u8]) -> Result<(), HpackError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        match huffman_decode_inner(src, &mut self.vec, self.state, self.flags) {
            Ok((state, flags)) => {
                (self.state, self.flags) = (state, flags);
                Ok(())
            }
            Err(err) => {
                self.vec.clear();
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Checks that the input ended on a complete code and returns the octets.
    pub fn finish(self) -> Result<Vec<u8>, HpackError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        check_complete(self.flags)?;
        Ok(self.vec)
    }
}

impl Default for HuffmanDecoder {
    fn default() -> Self {
        Self::new()
    }
}
