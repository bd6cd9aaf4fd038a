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

//! Combined [static][static_table] and [dynamic][dynamic_table] header table
//! of [HPACK].
//!
//! [static_table]: https://httpwg.org/specs/rfc7541.html#static.table
//! [dynamic_table]: https://httpwg.org/specs/rfc7541.html#dynamic.table
//! [HPACK]: https://httpwg.org/specs/rfc7541.html
//!
//! # Index Address Space
//! The static table and the dynamic table are combined into a single index
//! address space. Indices between 1 and 61 address the static table, indices
//! from 62 on address the dynamic table, newest entry first. Index 0 is never
//! valid, it tells the caller that a literal follows.
//!
//! ```text
//! <----------  Index Address Space ---------->
//! <-- Static  Table -->  <-- Dynamic Table -->
//! +---+-----------+---+  +---+-----------+---+
//! | 1 |    ...    | s |  |s+1|    ...    |s+k|
//! +---+-----------+---+  +---+-----------+---+
//!                        ^                   |
//!                        |                   V
//!                 Insertion Point      Dropping Point
//! ```

use std::collections::VecDeque;

use crate::error::{ErrorKind, HpackError};
use crate::header::Header;

/// Number of entries in the static table.
pub const STATIC_TABLE_LEN: usize = 61;

/// Gets the size of a table entry as defined in `RFC7541 section-4.1`.
///
/// The additional 32 octets account for an estimated overhead associated with
/// an entry, e.g. two pointers and two reference counts. The constant is part
/// of the size negotiation between peers, it is not a measure of the memory
/// actually used.
///
/// # Examples
///
/// ```
/// use ylong_hpack::table::entry_size;
///
/// assert_eq!(entry_size(b"TestName", b"TestValue"), 49);
/// ```
pub fn entry_size(name: &[u8], value: &[u8]) -> usize {
    32 + name.len() + value.len()
}

/// The combined header table of one connection.
///
/// A `HeaderTable` is mutable state of a single HTTP/2 connection. Every
/// call has to be made by the owner of the connection's compression context
/// (or under one lock around each call), since an insertion and the eviction
/// it causes are not atomic.
///
/// # Examples
///
/// ```
/// use ylong_hpack::{Header, HeaderTable};
///
/// let mut table = HeaderTable::new();
/// assert_eq!(table.get_by_index(2).unwrap(), Header::new(":method", "GET"));
///
/// table.add("TestName", "TestValue");
/// assert_eq!(table.current_size(), 49);
/// assert_eq!(table.get_by_index(62).unwrap(), Header::new("TestName", "TestValue"));
///
/// table.set_max_size(0);
/// assert_eq!(table.dynamic_len(), 0);
/// assert!(table.take_resized());
/// ```
pub struct HeaderTable {
    dynamic: DynamicTable,
    resized: bool,
}

impl HeaderTable {
    /// Default maximum size of the dynamic table, see `SETTINGS_HEADER_TABLE_SIZE`
    /// in `RFC9113 section-6.5.2`.
    pub const DEFAULT_SIZE: usize = 4096;

    /// Creates a `HeaderTable` whose dynamic table holds at most
    /// `DEFAULT_SIZE` octets.
    pub fn new() -> Self {
        Self::with_max_size(Self::DEFAULT_SIZE)
    }

    /// Creates a `HeaderTable` based on the size limit. The limit is treated
    /// as already announced, so the table does not start out resized.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            dynamic: DynamicTable::with_max_size(max_size),
            resized: false,
        }
    }

    /// Gets the entry at `index` of the combined address space.
    ///
    /// # Errors
    /// Returns `InvalidTableIndex` for index 0 and for indices past the last
    /// dynamic entry.
    pub fn get_by_index(&self, index: usize) -> Result<Header, HpackError> {
        let entry = match index {
            0 => None,
            1..=STATIC_TABLE_LEN => StaticTable::get(index),
            _ => self.dynamic.get(index - STATIC_TABLE_LEN - 1),
        };
        entry
            .map(|(name, value)| Header::new(name, value))
            .ok_or_else(|| ErrorKind::InvalidTableIndex(index).into())
    }

    /// Adds a new entry to the dynamic table.
    ///
    /// An entry larger than the maximum size empties the table and is not
    /// inserted (`RFC7541 section-4.4`). Otherwise the oldest entries are
    /// evicted until the table fits again.
    pub fn add<N, V>(&mut self, name: N, value: V)
    where
        N: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
    {
        self.dynamic.update(name.into(), value.into());
    }

    /// Adds `header` to the dynamic table, like [`HeaderTable::add`].
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the header has no value or was created by
    /// [`Header::never_indexed`]; the table is left unchanged then.
    pub fn add_header(&mut self, header: &Header) -> Result<(), HpackError> {
        if !header.is_indexable() {
            return Err(ErrorKind::InvalidArgument("never-indexed header").into());
        }
        let value = header
            .value()
            .ok_or(HpackError::from(ErrorKind::InvalidArgument("header without value")))?;
        self.add(header.name(), value);
        Ok(())
    }

    /// Searches the table for `name` and `value`.
    ///
    /// The static table is scanned before the dynamic table, so a static
    /// entry wins over an identical dynamic one. Returns:
    /// - `Some((index, Header(name, value)))` for the first full match,
    /// - `Some((index, Header(name)))` with no value for the first entry that
    ///   only matches `name`, if there is no full match anywhere,
    /// - `None` if `name` is not in the table at all.
    ///
    /// A `value` of `None` only ever produces name matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ylong_hpack::{Header, HeaderTable};
    ///
    /// let table = HeaderTable::new();
    /// assert_eq!(
    ///     table.search(b":method", Some(b"POST")),
    ///     Some((3, Header::new(":method", "POST")))
    /// );
    /// assert_eq!(
    ///     table.search(b":method", Some(b"PUT")),
    ///     Some((2, Header::name_only(":method")))
    /// );
    /// assert_eq!(table.search(b"x-custom", Some(b"1")), None);
    /// ```
    pub fn search(&self, name: &[u8], value: Option<&[u8]>) -> Option<(usize, Header)> {
        let index = match (
            StaticTable::index(name, value),
            self.dynamic.index(name, value),
        ) {
            (x @ Some(TableIndex::Header(_)), _) => x,
            (_, Some(TableIndex::Header(i))) => Some(TableIndex::Header(i + STATIC_TABLE_LEN + 1)),
            (x @ Some(TableIndex::HeaderName(_)), _) => x,
            (_, Some(TableIndex::HeaderName(i))) => {
                Some(TableIndex::HeaderName(i + STATIC_TABLE_LEN + 1))
            }
            _ => None,
        };
        match (index?, value) {
            (TableIndex::Header(i), Some(v)) => Some((i, Header::new(name, v))),
            (TableIndex::Header(i) | TableIndex::HeaderName(i), _) => {
                Some((i, Header::name_only(name)))
            }
        }
    }

    /// Gets the maximum size of the dynamic table.
    pub fn max_size(&self) -> usize {
        self.dynamic.max_size()
    }

    /// Sets the maximum size of the dynamic table, evicting the oldest entries
    /// until the table fits. A size of 0 empties the table.
    ///
    /// Any change of the maximum marks the table as resized, so that the
    /// encoder knows it has to emit a dynamic table size update. Setting the
    /// current maximum again leaves the flag as it is.
    pub fn set_max_size(&mut self, max_size: usize) {
        let old = self.dynamic.max_size();
        if old != max_size {
            tracing::debug!(old, new = max_size, "dynamic table resized");
            self.resized = true;
        }
        self.dynamic.update_size(max_size);
    }

    /// Gets the sum of the entry sizes of the dynamic table.
    pub fn current_size(&self) -> usize {
        self.dynamic.curr_size()
    }

    /// Gets the number of entries in the dynamic table.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }

    /// Checks whether the maximum size changed since the flag was last taken.
    pub fn is_resized(&self) -> bool {
        self.resized
    }

    /// Gets and clears the resized flag.
    pub fn take_resized(&mut self) -> bool {
        core::mem::take(&mut self.resized)
    }
}

impl Default for HeaderTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an index search: a full match, or a match of the name only.
enum TableIndex {
    Header(usize),
    HeaderName(usize),
}

/// The [`Dynamic Table`][dynamic_table] implementation of [HPACK].
///
/// [dynamic_table]: https://httpwg.org/specs/rfc7541.html#dynamic.table
/// [HPACK]: https://httpwg.org/specs/rfc7541.html
///
/// New entries go to the front of `queue` and evictions take from the back,
/// so queue position 0 is unified index 62. Identical entries may be stored
/// more than once. `curr_size` always equals the summed entry sizes.
struct DynamicTable {
    queue: VecDeque<(Vec<u8>, Vec<u8>)>,
    curr_size: usize,
    max_size: usize,
}

impl DynamicTable {
    fn with_max_size(max_size: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            curr_size: 0,
            max_size,
        }
    }

    fn curr_size(&self) -> usize {
        self.curr_size
    }

    fn max_size(&self) -> usize {
        self.max_size
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    /// Gets the entry at `index`, 0 being the newest.
    fn get(&self, index: usize) -> Option<(&[u8], &[u8])> {
        self.queue
            .get(index)
            .map(|(n, v)| (n.as_slice(), v.as_slice()))
    }

    /// Inserts a new entry at the front, then evicts from the back until the
    /// table fits.
    fn update(&mut self, name: Vec<u8>, value: Vec<u8>) {
        let size = entry_size(&name, &value);
        if size > self.max_size {
            tracing::debug!(
                size,
                max_size = self.max_size,
                evicted = self.queue.len(),
                "entry larger than dynamic table, table emptied"
            );
            self.clear();
            return;
        }
        tracing::trace!(size, "dynamic table entry added");
        self.curr_size += size;
        self.queue.push_front((name, value));
        self.fit_size();
    }

    /// Sets a new maximum and evicts what no longer fits.
    fn update_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        if max_size == 0 {
            self.clear();
        } else {
            self.fit_size();
        }
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.curr_size = 0;
    }

    /// Adjusts dynamic table content to fit its size, oldest entries first.
    fn fit_size(&mut self) {
        let mut evicted = 0usize;
        while self.curr_size > self.max_size {
            match self.queue.pop_back() {
                Some((name, value)) => {
                    self.curr_size -= entry_size(&name, &value);
                    evicted += 1;
                }
                None => break,
            }
        }
        if evicted > 0 {
            tracing::trace!(
                evicted,
                curr_size = self.curr_size,
                max_size = self.max_size,
                "dynamic table entries evicted"
            );
        }
    }

    /// Tries to get the index of an entry, preferring full matches and then
    /// the newest name match.
    fn index(&self, name: &[u8], value: Option<&[u8]>) -> Option<TableIndex> {
        let mut index = None;
        for (n, (entry_name, entry_value)) in self.queue.iter().enumerate() {
            if entry_name.as_slice() != name {
                continue;
            }
            if value == Some(entry_value.as_slice()) {
                return Some(TableIndex::Header(n));
            }
            if index.is_none() {
                index = Some(TableIndex::HeaderName(n));
            }
        }
        index
    }
}

/// The [`Static Table`][static_table] implementation of [HPACK], as listed in
/// `RFC7541 Appendix A`.
///
/// [static_table]: https://httpwg.org/specs/rfc7541.html#static.table
/// [HPACK]: https://httpwg.org/specs/rfc7541.html
struct StaticTable;

impl StaticTable {
    const ENTRIES: [(&'static str, &'static str); STATIC_TABLE_LEN] = [
        (":authority", ""),
        (":method", "GET"),
        (":method", "POST"),
        (":path", "/"),
        (":path", "/index.html"),
        (":scheme", "http"),
        (":scheme", "https"),
        (":status", "200"),
        (":status", "204"),
        (":status", "206"),
        (":status", "304"),
        (":status", "400"),
        (":status", "404"),
        (":status", "500"),
        ("accept-charset", ""),
        ("accept-encoding", "gzip, deflate"),
        ("accept-language", ""),
        ("accept-ranges", ""),
        ("accept", ""),
        ("access-control-allow-origin", ""),
        ("age", ""),
        ("allow", ""),
        ("authorization", ""),
        ("cache-control", ""),
        ("content-disposition", ""),
        ("content-encoding", ""),
        ("content-language", ""),
        ("content-length", ""),
        ("content-location", ""),
        ("content-range", ""),
        ("content-type", ""),
        ("cookie", ""),
        ("date", ""),
        ("etag", ""),
        ("expect", ""),
        ("expires", ""),
        ("from", ""),
        ("host", ""),
        ("if-match", ""),
        ("if-modified-since", ""),
        ("if-none-match", ""),
        ("if-range", ""),
        ("if-unmodified-since", ""),
        ("last-modified", ""),
        ("link", ""),
        ("location", ""),
        ("max-forwards", ""),
        ("proxy-authenticate", ""),
        ("proxy-authorization", ""),
        ("range", ""),
        ("referer", ""),
        ("refresh", ""),
        ("retry-after", ""),
        ("server", ""),
        ("set-cookie", ""),
        ("strict-transport-security", ""),
        ("transfer-encoding", ""),
        ("user-agent", ""),
        ("vary", ""),
        ("via", ""),
        ("www-authenticate", ""),
    ];

    /// Gets the entry at the 1-based `index`.
    fn get(index: usize) -> Option<(&'static [u8], &'static [u8])> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ENTRIES.get(i))
            .map(|(n, v)| (n.as_bytes(), v.as_bytes()))
    }

    /// Tries to get the 1-based index of an entry. Entries sharing a name
    /// are adjacent, so the first name match has the lowest index.
    fn index(name: &[u8], value: Option<&[u8]>) -> Option<TableIndex> {
        let mut index = None;
        for (n, (entry_name, entry_value)) in Self::ENTRIES.iter().enumerate() {
            if entry_name.as_bytes() != name {
                continue;
            }
            if value == Some(entry_value.as_bytes()) {
                return Some(TableIndex::Header(n + 1));
            }
            if index.is_none() {
                index = Some(TableIndex::HeaderName(n + 1));
            }
        }
        index
    }
}

#[cfg(test)]
mod ut_header_table {
    use crate::error::ErrorKind;
    use crate::header::Header;
    use crate::table::{entry_size, DynamicTable, HeaderTable, StaticTable, STATIC_TABLE_LEN};

    /// UT test cases for `entry_size`.
    ///
    /// # Brief
    /// 1. Calls `entry_size` with a name and a value.
    /// 2. Checks the 32 octets overhead.
    #[test]
    fn ut_entry_size() {
        assert_eq!(entry_size(b"TestName", b"TestValue"), 49);
        assert_eq!(entry_size(b"", b""), 32);
    }

    /// UT test cases for `DynamicTable::with_max_size`.
    ///
    /// # Brief
    /// 1. Calls `DynamicTable::with_max_size` to create a `DynamicTable`.
    /// 2. Checks the results.
    #[test]
    fn ut_dynamic_table_with_max_size() {
        let table = DynamicTable::with_max_size(4096);
        assert_eq!(table.queue.len(), 0);
        assert_eq!(table.curr_size, 0);
        assert_eq!(table.max_size, 4096);
    }

    /// UT test cases for `DynamicTable::update`.
    ///
    /// # Brief
    /// 1. Creates a `DynamicTable` that fits exactly one entry.
    /// 2. Calls `DynamicTable::update` twice.
    /// 3. Checks that the second entry evicted the first one.
    #[test]
    fn ut_dynamic_table_update() {
        let mut table = DynamicTable::with_max_size(52);
        table.update(b":authority".to_vec(), b"Authority".to_vec());
        assert_eq!(table.queue.len(), 1);
        assert_eq!(table.get(0), Some((&b":authority"[..], &b"Authority"[..])));

        table.update(b":method".to_vec(), b"Method".to_vec());
        assert_eq!(table.queue.len(), 1);
        assert_eq!(table.get(0), Some((&b":method"[..], &b"Method"[..])));
        assert_eq!(table.curr_size, 45);
    }

    /// UT test cases for `DynamicTable::update_size`.
    ///
    /// # Brief
    /// 1. Creates a `DynamicTable` holding one entry.
    /// 2. Calls `DynamicTable::update_size` to update its max size to 0.
    /// 3. Checks that the table is empty.
    #[test]
    fn ut_dynamic_table_update_size() {
        let mut table = DynamicTable::with_max_size(52);
        table.update(b":authority".to_vec(), b"Authority".to_vec());
        assert_eq!(table.queue.len(), 1);

        table.update_size(0);
        assert_eq!(table.queue.len(), 0);
        assert_eq!(table.curr_size, 0);
        assert!(table.get(0).is_none());
    }

    /// UT test cases for `StaticTable::get`.
    ///
    /// # Brief
    /// 1. Iterates over indices 0 to 64.
    /// 2. Checks that exactly indices 1 to 61 are present.
    #[test]
    fn ut_static_table() {
        assert!(StaticTable::get(0).is_none());
        for index in 1..65 {
            assert_eq!(StaticTable::get(index).is_some(), index <= STATIC_TABLE_LEN);
        }
    }

    /// UT test cases for `HeaderTable::get_by_index`.
    ///
    /// # Brief
    /// 1. Creates a `HeaderTable`.
    /// 2. Gets static entries, the invalid index 0 and the first dynamic
    ///    index before and after an insertion.
    /// 3. Checks the results.
    #[test]
    fn ut_header_table_get_by_index() {
        let mut table = HeaderTable::new();
        assert_eq!(table.get_by_index(1).unwrap(), Header::new(":authority", ""));
        assert_eq!(table.get_by_index(61).unwrap(), Header::new("www-authenticate", ""));
        assert_eq!(
            table.get_by_index(0).unwrap_err().kind(),
            &ErrorKind::InvalidTableIndex(0)
        );
        assert_eq!(
            table.get_by_index(62).unwrap_err().kind(),
            &ErrorKind::InvalidTableIndex(62)
        );

        let header = Header::new("TestName", "TestValue");
        table.add_header(&header).unwrap();
        assert_eq!(table.get_by_index(62).unwrap(), header);
        assert_eq!(
            table.get_by_index(63).unwrap_err().to_string(),
            "Invalid table index 63"
        );
    }

    /// UT test cases for `HeaderTable::add` addressing.
    ///
    /// # Brief
    /// 1. Adds two entries.
    /// 2. Checks that the newest entry is always at index 62.
    #[test]
    fn ut_header_table_add_order() {
        let mut table = HeaderTable::new();
        table.add("first", "1");
        table.add("second", "2");
        assert_eq!(table.get_by_index(62).unwrap(), Header::new("second", "2"));
        assert_eq!(table.get_by_index(63).unwrap(), Header::new("first", "1"));
        assert_eq!(table.dynamic_len(), 2);
    }

    /// UT test cases for `HeaderTable::add` with an oversized entry.
    ///
    /// # Brief
    /// 1. Fills a table, then adds an entry larger than its maximum size.
    /// 2. Checks that the table is empty.
    #[test]
    fn ut_header_table_add_too_large() {
        let mut table = HeaderTable::with_max_size(100);
        table.add("TestName", "TestValue");
        assert_eq!(table.current_size(), 49);

        table.add("TestName", vec![b'v'; 100]);
        assert_eq!(table.dynamic_len(), 0);
        assert_eq!(table.current_size(), 0);

        let mut table = HeaderTable::new();
        table.set_max_size(1);
        table.add("TestName", "TestValue");
        assert_eq!(table.dynamic_len(), 0);
        assert_eq!(table.current_size(), 0);
    }

    /// UT test cases for `HeaderTable::add_header` with unusable headers.
    ///
    /// # Brief
    /// 1. Adds a never-indexed header and a header without value.
    /// 2. Checks that both are rejected and the table is unchanged.
    #[test]
    fn ut_header_table_add_header_invalid() {
        let mut table = HeaderTable::new();
        let err = table
            .add_header(&Header::never_indexed("authorization", "secret"))
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));

        let err = table.add_header(&Header::name_only("name")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));
        assert_eq!(table.dynamic_len(), 0);
    }

    /// UT test cases for `HeaderTable::add` copying its input.
    ///
    /// # Brief
    /// 1. Adds a header, then changes the header.
    /// 2. Checks that the table entry is unchanged.
    #[test]
    fn ut_header_table_owns_entries() {
        let mut table = HeaderTable::new();
        let mut header = Header::new("TestName", "TestValue");
        table.add_header(&header).unwrap();
        header.set_value("Changed");
        assert_eq!(
            table.get_by_index(62).unwrap(),
            Header::new("TestName", "TestValue")
        );
    }

    /// UT test cases for `HeaderTable::search`.
    ///
    /// # Brief
    /// 1. Searches full, partial and missing entries in both tables.
    /// 2. Checks indices and returned headers.
    #[test]
    fn ut_header_table_search() {
        let mut table = HeaderTable::new();
        assert_eq!(
            table.search(b":authority", Some(b"")),
            Some((1, Header::new(":authority", "")))
        );
        assert_eq!(
            table.search(b":authority", Some(b"nonexistent")),
            Some((1, Header::name_only(":authority")))
        );
        assert_eq!(
            table.search(b":status", Some(b"404")),
            Some((13, Header::new(":status", "404")))
        );
        assert_eq!(table.search(b"nonexistent-name", Some(b"")), None);
        assert_eq!(
            table.search(b":authority", None),
            Some((1, Header::name_only(":authority")))
        );

        table.add("TestName", "TestValue");
        assert_eq!(
            table.search(b"TestName", Some(b"TestValue")),
            Some((62, Header::new("TestName", "TestValue")))
        );
        assert_eq!(
            table.search(b"TestName", Some(b"not in table")),
            Some((62, Header::name_only("TestName")))
        );
    }

    /// UT test cases for `HeaderTable::search` order.
    ///
    /// # Brief
    /// 1. Adds dynamic entries that duplicate or extend static entries.
    /// 2. Checks that static full matches win, dynamic full matches beat
    ///    static name matches, and the newest dynamic name match is used.
    #[test]
    fn ut_header_table_search_order() {
        let mut table = HeaderTable::new();
        table.add(":method", "GET");
        assert_eq!(
            table.search(b":method", Some(b"GET")),
            Some((2, Header::new(":method", "GET")))
        );

        table.add(":method", "PUT");
        assert_eq!(
            table.search(b":method", Some(b"PUT")),
            Some((62, Header::new(":method", "PUT")))
        );

        table.add("x-name", "a");
        table.add("x-name", "b");
        assert_eq!(
            table.search(b"x-name", Some(b"a")),
            Some((63, Header::new("x-name", "a")))
        );
        assert_eq!(
            table.search(b"x-name", Some(b"c")),
            Some((62, Header::name_only("x-name")))
        );
    }

    /// UT test cases for `HeaderTable::set_max_size`.
    ///
    /// # Brief
    /// 1. Sets the default size again, then a different size.
    /// 2. Checks the resized flag and the maximum size.
    #[test]
    fn ut_header_table_set_max_size() {
        let mut table = HeaderTable::new();
        assert_eq!(table.max_size(), HeaderTable::DEFAULT_SIZE);
        table.set_max_size(HeaderTable::DEFAULT_SIZE);
        assert!(!table.is_resized());

        table.set_max_size(HeaderTable::DEFAULT_SIZE / 2);
        assert!(table.is_resized());
        assert_eq!(table.max_size(), HeaderTable::DEFAULT_SIZE / 2);

        // Setting the same value again keeps the pending flag.
        table.set_max_size(HeaderTable::DEFAULT_SIZE / 2);
        assert!(table.is_resized());

        assert!(table.take_resized());
        assert!(!table.is_resized());
        assert!(!table.take_resized());
    }

    /// UT test cases for `HeaderTable::set_max_size` shrinking the table.
    ///
    /// # Brief
    /// 1. Adds three entries of 49 octets.
    /// 2. Shrinks the table to 146, to 49, and to 0.
    /// 3. Checks the entries left and the current size after each step.
    #[test]
    fn ut_header_table_set_max_size_shrink() {
        let mut table = HeaderTable::new();
        for _ in 0..3 {
            table.add("TestName", "TestValue");
        }
        assert_eq!(table.current_size(), 147);

        table.set_max_size(146);
        assert_eq!(table.max_size(), 146);
        assert!(table.is_resized());
        assert_eq!(table.dynamic_len(), 2);
        assert_eq!(table.current_size(), 98);

        table.set_max_size(49);
        assert_eq!(table.dynamic_len(), 1);
        assert_eq!(table.current_size(), 49);

        table.set_max_size(0);
        assert_eq!(table.max_size(), 0);
        assert_eq!(table.dynamic_len(), 0);
        assert_eq!(table.current_size(), 0);
    }

    /// UT test cases for eviction order.
    ///
    /// # Brief
    /// 1. Adds entries of different sizes to a small table.
    /// 2. Checks that only the oldest entries are evicted.
    #[test]
    fn ut_header_table_evict_oldest_first() {
        let mut table = HeaderTable::with_max_size(120);
        table.add("a", "0123456789"); // 43
        table.add("b", ""); // 33
        table.add("c", "01234"); // 38
        assert_eq!(table.current_size(), 114);

        table.add("d", ""); // 33, evicts "a"
        assert_eq!(table.dynamic_len(), 3);
        assert_eq!(table.current_size(), 104);
        assert_eq!(table.get_by_index(64).unwrap(), Header::new("b", ""));
        assert!(table.search(b"a", None).is_none());
    }
}
