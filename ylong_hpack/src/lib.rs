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

//! `ylong_hpack` provides the compression primitives of [HPACK], the header
//! compression format of [HTTP/2].
//!
//! [HPACK]: https://httpwg.org/specs/rfc7541.html
//! [HTTP/2]: https://httpwg.org/specs/rfc9113.html
//!
//! # Components
//! - [`integer`]: the prefixed variable-length integer representation.
//! - [`huffman`]: the canonical Huffman code of `RFC7541 Appendix B`.
//! - [`table`]: the combined static and dynamic header table.
//! - [`limit`]: accounting for the decoded header list size.
//!
//! Reading representation bits and driving these primitives for a whole
//! header block is left to the caller. A `HeaderTable` belongs to exactly one
//! connection and must not be mutated from two places at once; the codecs
//! are stateless and can be shared freely.
//!
//! # Examples
//! ```
//! use ylong_hpack::integer::{integer_decode, integer_encode};
//! use ylong_hpack::{Header, HeaderTable};
//!
//! let mut table = HeaderTable::new();
//! table.add("custom-key", "custom-header");
//! assert_eq!(
//!     table.search(b"custom-key", Some(b"custom-header")),
//!     Some((62, Header::new("custom-key", "custom-header")))
//! );
//!
//! let mut bytes = Vec::new();
//! integer_encode(1337, 5, &mut bytes).unwrap();
//! assert_eq!(bytes, [0x1f, 0x9a, 0x0a]);
//! assert_eq!(integer_decode(&bytes, 5).unwrap(), (1337, 3));
//! ```

pub mod error;
pub mod header;
#[cfg(feature = "huffman")]
pub mod huffman;
pub mod integer;
pub mod limit;
pub mod table;

pub(crate) mod util;

pub use error::{ErrorKind, HpackError};
pub use header::Header;
pub use limit::HeaderListLimit;
pub use table::HeaderTable;
