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

use proptest::prelude::*;
use ylong_hpack::integer::{integer_decode, integer_encode};
use ylong_hpack::table::STATIC_TABLE_LEN;
use ylong_hpack::HeaderTable;

#[derive(Debug, Clone)]
enum TableOp {
    Add(Vec<u8>, Vec<u8>),
    Resize(usize),
}

fn table_op() -> impl Strategy<Value = TableOp> {
    prop_oneof![
        4 => (
            proptest::collection::vec(any::<u8>(), 0..24),
            proptest::collection::vec(any::<u8>(), 0..64),
        )
            .prop_map(|(name, value)| TableOp::Add(name, value)),
        1 => (0usize..512).prop_map(TableOp::Resize),
    ]
}

proptest! {
    /// Integers survive an encode and decode cycle for every prefix width.
    #[test]
    fn sdv_integer_prop_round_trip(value in any::<usize>(), prefix_bits in 1u8..=9) {
        let mut dst = Vec::new();
        integer_encode(value, prefix_bits, &mut dst).unwrap();
        prop_assert_eq!(integer_decode(&dst, prefix_bits).unwrap(), (value, dst.len()));
    }

    /// The dynamic table never exceeds its budget and its accounted size
    /// matches the entries it holds.
    #[test]
    fn sdv_header_table_prop_budget(ops in proptest::collection::vec(table_op(), 0..64)) {
        let mut table = HeaderTable::with_max_size(256);
        for op in ops {
            match op {
                TableOp::Add(name, value) => table.add(name, value),
                TableOp::Resize(size) => table.set_max_size(size),
            }
            prop_assert!(table.current_size() <= table.max_size());

            let mut size = 0;
            for n in 0..table.dynamic_len() {
                let header = table.get_by_index(STATIC_TABLE_LEN + 1 + n).unwrap();
                size += header.size();
            }
            prop_assert_eq!(size, table.current_size());
            prop_assert!(table.get_by_index(STATIC_TABLE_LEN + 1 + table.dynamic_len()).is_err());
        }
    }

    /// The newest entry is always found at the first dynamic index.
    #[test]
    fn sdv_header_table_prop_newest_first(
        name in proptest::collection::vec(b'a'..=b'z', 1..16),
        value in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut table = HeaderTable::new();
        table.add("x-previous", "entry");
        table.add(name.clone(), value.clone());
        let header = table.get_by_index(STATIC_TABLE_LEN + 1).unwrap();
        prop_assert_eq!(header.name(), &name[..]);
        prop_assert_eq!(header.value(), Some(&value[..]));
    }
}

#[cfg(feature = "huffman")]
mod huffman {
    use proptest::prelude::*;
    use ylong_hpack::huffman::{huffman_decode, huffman_encode, huffman_encoded_len};

    proptest! {
        /// Arbitrary octet strings survive a Huffman round trip, and the
        /// predicted length matches the encoder output.
        #[test]
        fn sdv_huffman_prop_round_trip(src in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut encoded = Vec::new();
            huffman_encode(&src, &mut encoded);
            prop_assert_eq!(encoded.len(), huffman_encoded_len(&src));

            let mut decoded = Vec::new();
            huffman_decode(&encoded, &mut decoded).unwrap();
            prop_assert_eq!(decoded, src);
        }
    }
}
