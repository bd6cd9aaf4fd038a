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

//! Size accounting of decoded header lists.
//!
//! A peer can make a small, well-compressed header block expand into a very
//! large header list by repeatedly referencing table entries. The dynamic
//! table only bounds its own memory, so whoever decodes a header block has to
//! bound the list as well. `HeaderListLimit` counts the size of every decoded
//! header the way `SETTINGS_MAX_HEADER_LIST_SIZE` defines it: name length plus
//! value length plus 32 octets.

use crate::error::{ErrorKind, HpackError};
use crate::header::Header;
use crate::table::entry_size;

/// Accumulates the size of one header list and rejects it once it exceeds
/// the configured budget.
///
/// # Examples
///
/// ```
/// use ylong_hpack::{ErrorKind, HeaderListLimit};
///
/// let mut limit = HeaderListLimit::new(60);
/// limit.check(b"TestName", b"TestValue").unwrap();
/// let err = limit.check(b"TestName", b"TestValue").unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::OversizedHeaderList { size: 98, limit: 60 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderListLimit {
    max_size: usize,
    curr_size: usize,
}

impl HeaderListLimit {
    /// Default budget of a header list, 16 MiB.
    pub const DEFAULT_MAX_SIZE: usize = 16 << 20;

    /// Creates a `HeaderListLimit` with the given budget in octets.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            curr_size: 0,
        }
    }

    /// Adds a decoded header to the list.
    ///
    /// # Errors
    /// Returns `OversizedHeaderList` if the list including this header is
    /// larger than the budget. The header is still counted, so every later
    /// call fails too until [`HeaderListLimit::reset`] is called.
    pub fn check(&mut self, name: &[u8], value: &[u8]) -> Result<(), HpackError> {
        self.account(entry_size(name, value))
    }

    /// Adds a decoded `Header` to the list, like [`HeaderListLimit::check`].
    pub fn check_header(&mut self, header: &Header) -> Result<(), HpackError> {
        self.account(header.size())
    }

    fn account(&mut self, size: usize) -> Result<(), HpackError> {
        self.curr_size = self.curr_size.saturating_add(size);
        if self.curr_size > self.max_size {
            tracing::debug!(
                size = self.curr_size,
                limit = self.max_size,
                "header list exceeds its limit"
            );
            return Err(ErrorKind::OversizedHeaderList {
                size: self.curr_size,
                limit: self.max_size,
            }
            .into());
        }
        Ok(())
    }

    /// Starts a new header list.
    pub fn reset(&mut self) {
        self.curr_size = 0;
    }

    /// Updates the budget, e.g. after a new `SETTINGS` frame.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
    }

    /// Gets the budget of one header list.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Gets the size of the header list so far.
    pub fn curr_size(&self) -> usize {
        self.curr_size
    }
}

impl Default for HeaderListLimit {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIZE)
    }
}

#[cfg(test)]
mod ut_header_list_limit {
    use crate::error::ErrorKind;
    use crate::header::Header;
    use crate::limit::HeaderListLimit;

    /// UT test cases for `HeaderListLimit::check`.
    ///
    /// # Brief
    /// 1. Creates a `HeaderListLimit` of 98 octets.
    /// 2. Adds two headers of 49 octets, then a third one.
    /// 3. Checks that only the third one fails.
    #[test]
    fn ut_header_list_limit_check() {
        let mut limit = HeaderListLimit::new(98);
        assert!(limit.check(b"TestName", b"TestValue").is_ok());
        assert!(limit.check_header(&Header::new("TestName", "TestValue")).is_ok());
        assert_eq!(limit.curr_size(), 98);

        let err = limit.check(b"a", b"").unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::OversizedHeaderList {
                size: 131,
                limit: 98
            }
        );
        assert!(err.is_decoding_error());
    }

    /// UT test cases for `HeaderListLimit::reset`.
    ///
    /// # Brief
    /// 1. Exceeds the budget, then resets the limit.
    /// 2. Checks that a new list is accepted again.
    #[test]
    fn ut_header_list_limit_reset() {
        let mut limit = HeaderListLimit::new(40);
        assert!(limit.check(b"TestName", b"TestValue").is_err());
        limit.reset();
        assert_eq!(limit.curr_size(), 0);
        assert!(limit.check(b"name", b"").is_ok());

        limit.set_max_size(0);
        assert_eq!(limit.max_size(), 0);
        assert!(limit.check(b"", b"").is_err());
    }

    /// UT test cases for `HeaderListLimit::default`.
    ///
    /// # Brief
    /// 1. Creates a default `HeaderListLimit`.
    /// 2. Checks the default budget.
    #[test]
    fn ut_header_list_limit_default() {
        let limit = HeaderListLimit::default();
        assert_eq!(limit.max_size(), 16 << 20);
        assert_eq!(limit.curr_size(), 0);
    }
}
