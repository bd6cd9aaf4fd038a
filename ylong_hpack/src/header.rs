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

//! Header field entity shared by the table and its callers.

use crate::table::entry_size;

/// A single header field: a name, an optional value and whether the field may
/// enter a compression context.
///
/// A `Header` without a value is produced by [`HeaderTable::search`] for
/// name-only matches. A header built by [`Header::never_indexed`] must never
/// be inserted into a dynamic table, neither by the encoder that sends it nor
/// by any intermediary that forwards it.
///
/// Tables store their own copies of names and values, so changing a `Header`
/// after it has been added has no effect on the table.
///
/// [`HeaderTable::search`]: crate::HeaderTable::search
///
/// # Examples
///
/// ```
/// use ylong_hpack::Header;
///
/// let header = Header::new("cache-control", "no-cache");
/// assert_eq!(header.name(), b"cache-control");
/// assert_eq!(header.value(), Some(&b"no-cache"[..]));
/// assert!(header.is_indexable());
///
/// let secret = Header::never_indexed("authorization", "Bearer 123");
/// assert!(!secret.is_indexable());
/// assert_ne!(secret, Header::new("authorization", "Bearer 123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    name: Vec<u8>,
    value: Option<Vec<u8>>,
    indexable: bool,
}

impl Header {
    /// Creates an indexable `Header` with the given name and value.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
    {
        Self {
            name: name.into(),
            value: Some(value.into()),
            indexable: true,
        }
    }

    /// Creates a `Header` that must never be added to a dynamic table.
    pub fn never_indexed<N, V>(name: N, value: V) -> Self
    where
        N: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
    {
        Self {
            name: name.into(),
            value: Some(value.into()),
            indexable: false,
        }
    }

    /// Creates an indexable `Header` carrying only a name.
    pub fn name_only<N: Into<Vec<u8>>>(name: N) -> Self {
        Self {
            name: name.into(),
            value: None,
            indexable: true,
        }
    }

    /// Gets the field name.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Gets the value, or `None` if this header only names a field.
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Checks whether this header may be inserted into a dynamic table.
    pub fn is_indexable(&self) -> bool {
        self.indexable
    }

    /// Replaces the field name.
    pub fn set_name<N: Into<Vec<u8>>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Sets the value, turning a name-only header into a full one.
    pub fn set_value<V: Into<Vec<u8>>>(&mut self, value: V) {
        self.value = Some(value.into());
    }

    /// Splits the header into its name and value.
    pub fn into_parts(self) -> (Vec<u8>, Option<Vec<u8>>) {
        (self.name, self.value)
    }

    /// Gets the size this header occupies in a table or a header list, with
    /// an absent value counted as empty.
    pub fn size(&self) -> usize {
        entry_size(&self.name, self.value().unwrap_or_default())
    }
}

impl<N, V> From<(N, V)> for Header
where
    N: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from((name, value): (N, V)) -> Self {
        Header::new(name, value)
    }
}
