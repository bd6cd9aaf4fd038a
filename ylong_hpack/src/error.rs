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

//! Errors that may occur in this crate.
//!
//! [`HpackError`] encapsulates every failure the HPACK primitives can report.
//! None of them is transient: a decoding error means the peer sent data that
//! can not be interpreted, and the compression context it belongs to must be
//! considered broken by the caller.

use core::fmt::{Display, Formatter};
use std::error::Error;

/// Errors that may occur when using this crate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HpackError {
    kind: ErrorKind,
}

impl HpackError {
    /// Gets the kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ylong_hpack::{ErrorKind, HeaderTable};
    ///
    /// let table = HeaderTable::new();
    /// let err = table.get_by_index(0).unwrap_err();
    /// assert_eq!(err.kind(), &ErrorKind::InvalidTableIndex(0));
    /// ```
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Checks whether this error was caused by malformed input received from
    /// the peer, as opposed to a misuse of the API by the caller.
    pub fn is_decoding_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::IntegerOverflow
                | ErrorKind::TruncatedInput
                | ErrorKind::InvalidHuffmanString
                | ErrorKind::IncompleteHuffmanString
                | ErrorKind::InvalidTableIndex(_)
                | ErrorKind::OversizedHeaderList { .. }
        )
    }
}

impl From<ErrorKind> for HpackError {
    fn from(kind: ErrorKind) -> Self {
        HpackError { kind }
    }
}

impl Display for HpackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::OutOfRange(bits) => {
                write!(f, "Prefix bits must be between 0 and 9, got {bits}")
            }
            ErrorKind::IntegerOverflow => {
                write!(f, "HPACK integer representation exceeds usize")
            }
            ErrorKind::TruncatedInput => write!(f, "Unexpected end of HPACK input"),
            ErrorKind::InvalidHuffmanString => write!(f, "Invalid Huffman string"),
            ErrorKind::IncompleteHuffmanString => write!(f, "Incomplete Huffman string"),
            ErrorKind::InvalidTableIndex(index) => write!(f, "Invalid table index {index}"),
            ErrorKind::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            ErrorKind::OversizedHeaderList { size, limit } => write!(
                f,
                "Header list of {size} octets exceeds the limit of {limit} octets"
            ),
        }
    }
}

impl Error for HpackError {}

/// Possible kinds of [`HpackError`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// An integer prefix width outside `0..=9` was passed in.
    OutOfRange(u8),

    /// A decoded integer does not fit into `usize`.
    IntegerOverflow,

    /// The input ended before an integer representation was finished.
    TruncatedInput,

    /// A nibble sequence has no interpretation in the Huffman code, including
    /// an explicit `EOS` symbol.
    InvalidHuffmanString,

    /// The Huffman string ended in the middle of a code, or its padding was
    /// not a prefix of `EOS` of at most 7 bits.
    IncompleteHuffmanString,

    /// Index `0` or an index beyond the current extent of the table.
    InvalidTableIndex(usize),

    /// A table mutation was called with an unusable header.
    InvalidArgument(&'static str),

    /// The decoded header list grew past the configured budget.
    OversizedHeaderList {
        /// Size of the header list including the offending header.
        size: usize,
        /// Configured budget.
        limit: usize,
    },
}

#[cfg(test)]
mod ut_hpack_error {
    use crate::error::{ErrorKind, HpackError};

    /// UT test cases for `HpackError::fmt`.
    ///
    /// # Brief
    /// 1. Creates `HpackError`s of several kinds.
    /// 2. Checks that the messages echo the offending values.
    #[test]
    fn ut_hpack_error_display() {
        let err = HpackError::from(ErrorKind::InvalidTableIndex(62));
        assert_eq!(err.to_string(), "Invalid table index 62");

        let err = HpackError::from(ErrorKind::OutOfRange(10));
        assert_eq!(err.to_string(), "Prefix bits must be between 0 and 9, got 10");

        let err = HpackError::from(ErrorKind::OversizedHeaderList {
            size: 100,
            limit: 64,
        });
        assert_eq!(
            err.to_string(),
            "Header list of 100 octets exceeds the limit of 64 octets"
        );
    }

    /// UT test cases for `HpackError::is_decoding_error`.
    ///
    /// # Brief
    /// 1. Creates `HpackError`s caused by peer input and by API misuse.
    /// 2. Checks the classification of each of them.
    #[test]
    fn ut_hpack_error_is_decoding_error() {
        assert!(HpackError::from(ErrorKind::TruncatedInput).is_decoding_error());
        assert!(HpackError::from(ErrorKind::InvalidHuffmanString).is_decoding_error());
        assert!(HpackError::from(ErrorKind::InvalidTableIndex(0)).is_decoding_error());
        assert!(!HpackError::from(ErrorKind::OutOfRange(10)).is_decoding_error());
        assert!(!HpackError::from(ErrorKind::InvalidArgument("value")).is_decoding_error());
    }
}
