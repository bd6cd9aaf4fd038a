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

//! Constant tables of the Huffman codec.
//!
//! `HUFFMAN_ENCODE` is the code table of `RFC7541 Appendix B`, indexed by
//! symbol, as `(bit length, code)` with the code right-aligned.
//!
//! `HUFFMAN_DECODE` is a state machine that consumes 4 bits at a time. Row `n`
//! holds the transitions of state `n` for every nibble value as
//! `(next state, decoded byte, flags)`. State `0` is the root of the code
//! tree; the other states are the inner nodes of the tree, so a state stands
//! for the bits read since the last decoded symbol.

/// The state reached after the nibble is a valid place to stop: no bits are
/// pending, or the pending bits are at most 7 bits of `EOS` padding.
pub(crate) const HUFFMAN_COMPLETE: u8 = 0x1;

/// A symbol was completed by the nibble and must be emitted.
pub(crate) const HUFFMAN_EMIT_SYMBOL: u8 = 0x2;

/// The nibble can not continue any valid code, or it completed `EOS`.
pub(crate) const HUFFMAN_FAIL: u8 = 0x4;

pub(crate) static HUFFMAN_ENCODE: [(u64, u64); 257] = [
    (13, 0x1ff8),          // 0x00
    (23, 0x7fffd8),        // 0x01
    (28, 0xfffffe2),       // 0x02
    (28, 0xfffffe3),       // 0x03
    (28, 0xfffffe4),       // 0x04
    (28, 0xfffffe5),       // 0x05
    (28, 0xfffffe6),       // 0x06
    (28, 0xfffffe7),       // 0x07
    (28, 0xfffffe8),       // 0x08
    (24, 0xffffea),        // 0x09
    (30, 0x3ffffffc),      // 0x0a
    (28, 0xfffffe9),       // 0x0b
    (28, 0xfffffea),       // 0x0c
    (30, 0x3ffffffd),      // 0x0d
    (28, 0xfffffeb),       // 0x0e
    (28, 0xfffffec),       // 0x0f
    (28, 0xfffffed),       // 0x10
    (28, 0xfffffee),       // 0x11
    (28, 0xfffffef),       // 0x12
    (28, 0xffffff0),       // 0x13
    (28, 0xffffff1),       // 0x14
    (28, 0xffffff2),       // 0x15
    (30, 0x3ffffffe),      // 0x16
    (28, 0xffffff3),       // 0x17
    (28, 0xffffff4),       // 0x18
    (28, 0xffffff5),       // 0x19
    (28, 0xffffff6),       // 0x1a
    (28, 0xffffff7),       // 0x1b
    (28, 0xffffff8),       // 0x1c
    (28, 0xffffff9),       // 0x1d
    (28, 0xffffffa),       // 0x1e
    (28, 0xffffffb),       // 0x1f
    (6, 0x14),             // 0x20
    (10, 0x3f8),           // 0x21
    (10, 0x3f9),           // 0x22
    (12, 0xffa),           // 0x23
    (13, 0x1ff9),          // 0x24
    (6, 0x15),             // 0x25
    (8, 0xf8),             // 0x26
    (11, 0x7fa),           // 0x27
    (10, 0x3fa),           // 0x28
    (10, 0x3fb),           // 0x29
    (8, 0xf9),             // 0x2a
    (11, 0x7fb),           // 0x2b
    (8, 0xfa),             // 0x2c
    (6, 0x16),             // 0x2d
    (6, 0x17),             // 0x2e
    (6, 0x18),             // 0x2f
    (5, 0x0),              // 0x30
    (5, 0x1),              // 0x31
    (5, 0x2),              // 0x32
    (6, 0x19),             // 0x33
    (6, 0x1a),             // 0x34
    (6, 0x1b),             // 0x35
    (6, 0x1c),             // 0x36
    (6, 0x1d),             // 0x37
    (6, 0x1e),             // 0x38
    (6, 0x1f),             // 0x39
    (7, 0x5c),             // 0x3a
    (8, 0xfb),             // 0x3b
    (15, 0x7ffc),          // 0x3c
    (6, 0x20),             // 0x3d
    (12, 0xffb),           // 0x3e
    (10, 0x3fc),           // 0x3f
    (13, 0x1ffa),          // 0x40
    (6, 0x21),             // 0x41
    (7, 0x5d),             // 0x42
    (7, 0x5e),             // 0x43
    (7, 0x5f),             // 0x44
    (7, 0x60),             // 0x45
    (7, 0x61),             // 0x46
    (7, 0x62),             // 0x47
    (7, 0x63),             // 0x48
    (7, 0x64),             // 0x49
    (7, 0x65),             // 0x4a
    (7, 0x66),             // 0x4b
    (7, 0x67),             // 0x4c
    (7, 0x68),             // 0x4d
    (7, 0x69),             // 0x4e
    (7, 0x6a),             // 0x4f
    (7, 0x6b),             // 0x50
    (7, 0x6c),             // 0x51
    (7, 0x6d),             // 0x52
    (7, 0x6e),             // 0x53
    (7, 0x6f),             // 0x54
    (7, 0x70),             // 0x55
    (7, 0x71),             // 0x56
    (7, 0x72),             // 0x57
    (8, 0xfc),             // 0x58
    (7, 0x73),             // 0x59
    (8, 0xfd),             // 0x5a
    (13, 0x1ffb),          // 0x5b
    (19, 0x7fff0),         // 0x5c
    (13, 0x1ffc),          // 0x5d
    (14, 0x3ffc),          // 0x5e
    (6, 0x22),             // 0x5f
    (15, 0x7ffd),          // 0x60
    (5, 0x3),              // 0x61
    (6, 0x23),             // 0x62
    (5, 0x4),              // 0x63
    (6, 0x24),             // 0x64
    (5, 0x5),              // 0x65
    (6, 0x25),             // 0x66
    (6, 0x26),             // 0x67
    (6, 0x27),             // 0x68
    (5, 0x6),              // 0x69
    (7, 0x74),             // 0x6a
    (7, 0x75),             // 0x6b
    (6, 0x28),             // 0x6c
    (6, 0x29),             // 0x6d
    (6, 0x2a),             // 0x6e
    (5, 0x7),              // 0x6f
    (6, 0x2b),             // 0x70
    (7, 0x76),             // 0x71
    (6, 0x2c),             // 0x72
    (5, 0x8),              // 0x73
    (5, 0x9),              // 0x74
    (6, 0x2d),             // 0x75
    (7, 0x77),             // 0x76
    (7, 0x78),             // 0x77
    (7, 0x79),             // 0x78
    (7, 0x7a),             // 0x79
    (7, 0x7b),             // 0x7a
    (15, 0x7ffe),          // 0x7b
    (11, 0x7fc),           // 0x7c
    (14, 0x3ffd),          // 0x7d
    (13, 0x1ffd),          // 0x7e
    (28, 0xffffffc),       // 0x7f
    (20, 0xfffe6),         // 0x80
    (22, 0x3fffd2),        // 0x81
    (20, 0xfffe7),         // 0x82
    (20, 0xfffe8),         // 0x83
    (22, 0x3fffd3),        // 0x84
    (22, 0x3fffd4),        // 0x85
    (22, 0x3fffd5),        // 0x86
    (23, 0x7fffd9),        // 0x87
    (22, 0x3fffd6),        // 0x88
    (23, 0x7fffda),        // 0x89
    (23, 0x7fffdb),        // 0x8a
    (23, 0x7fffdc),        // 0x8b
    (23, 0x7fffdd),        // 0x8c
    (23, 0x7fffde),        // 0x8d
    (24, 0xffffeb),        // 0x8e
    (23, 0x7fffdf),        // 0x8f
    (24, 0xffffec),        // 0x90
    (24, 0xffffed),        // 0x91
    (22, 0x3fffd7),        // 0x92
    (23, 0x7fffe0),        // 0x93
    (24, 0xffffee),        // 0x94
    (23, 0x7fffe1),        // 0x95
    (23, 0x7fffe2),        // 0x96
    (23, 0x7fffe3),        // 0x97
    (23, 0x7fffe4),        // 0x98
    (21, 0x1fffdc),        // 0x99
    (22, 0x3fffd8),        // 0x9a
    (23, 0x7fffe5),        // 0x9b
    (22, 0x3fffd9),        // 0x9c
    (23, 0x7fffe6),        // 0x9d
    (23, 0x7fffe7),        // 0x9e
    (24, 0xffffef),        // 0x9f
    (22, 0x3fffda),        // 0xa0
    (21, 0x1fffdd),        // 0xa1
    (20, 0xfffe9),         // 0xa2
    (22, 0x3fffdb),        // 0xa3
    (22, 0x3fffdc),        // 0xa4
    (23, 0x7fffe8),        // 0xa5
    (23, 0x7fffe9),        // 0xa6
    (21, 0x1fffde),        // 0xa7
    (23, 0x7fffea),        // 0xa8
    (22, 0x3fffdd),        // 0xa9
    (22, 0x3fffde),        // 0xaa
    (24, 0xfffff0),        // 0xab
    (21, 0x1fffdf),        // 0xac
    (22, 0x3fffdf),        // 0xad
    (23, 0x7fffeb),        // 0xae
    (23, 0x7fffec),        // 0xaf
    (21, 0x1fffe0),        // 0xb0
    (21, 0x1fffe1),        // 0xb1
    (22, 0x3fffe0),        // 0xb2
    (21, 0x1fffe2),        // 0xb3
    (23, 0x7fffed),        // 0xb4
    (22, 0x3fffe1),        // 0xb5
    (23, 0x7fffee),        // 0xb6
    (23, 0x7fffef),        // 0xb7
    (20, 0xfffea),         // 0xb8
    (22, 0x3fffe2),        // 0xb9
    (22, 0x3fffe3),        // 0xba
    (22, 0x3fffe4),        // 0xbb
    (23, 0x7ffff0),        // 0xbc
    (22, 0x3fffe5),        // 0xbd
    (22, 0x3fffe6),        // 0xbe
    (23, 0x7ffff1),        // 0xbf
    (26, 0x3ffffe0),       // 0xc0
    (26, 0x3ffffe1),       // 0xc1
    (20, 0xfffeb),         // 0xc2
    (19, 0x7fff1),         // 0xc3
    (22, 0x3fffe7),        // 0xc4
    (23, 0x7ffff2),        // 0xc5
    (22, 0x3fffe8),        // 0xc6
    (25, 0x1ffffec),       // 0xc7
    (26, 0x3ffffe2),       // 0xc8
    (26, 0x3ffffe3),       // 0xc9
    (26, 0x3ffffe4),       // 0xca
    (27, 0x7ffffde),       // 0xcb
    (27, 0x7ffffdf),       // 0xcc
    (26, 0x3ffffe5),       // 0xcd
    (24, 0xfffff1),        // 0xce
    (25, 0x1ffffed),       // 0xcf
    (19, 0x7fff2),         // 0xd0
    (21, 0x1fffe3),        // 0xd1
    (26, 0x3ffffe6),       // 0xd2
    (27, 0x7ffffe0),       // 0xd3
    (27, 0x7ffffe1),       // 0xd4
    (26, 0x3ffffe7),       // 0xd5
    (27, 0x7ffffe2),       // 0xd6
    (24, 0xfffff2),        // 0xd7
    (21, 0x1fffe4),        // 0xd8
    (21, 0x1fffe5),        // 0xd9
    (26, 0x3ffffe8),       // 0xda
    (26, 0x3ffffe9),       // 0xdb
    (28, 0xffffffd),       // 0xdc
    (27, 0x7ffffe3),       // 0xdd
    (27, 0x7ffffe4),       // 0xde
    (27, 0x7ffffe5),       // 0xdf
    (20, 0xfffec),         // 0xe0
    (24, 0xfffff3),        // 0xe1
    (20, 0xfffed),         // 0xe2
    (21, 0x1fffe6),        // 0xe3
    (22, 0x3fffe9),        // 0xe4
    (21, 0x1fffe7),        // 0xe5
    (21, 0x1fffe8),        // 0xe6
    (23, 0x7ffff3),        // 0xe7
    (22, 0x3fffea),        // 0xe8
    (22, 0x3fffeb),        // 0xe9
    (25, 0x1ffffee),       // 0xea
    (25, 0x1ffffef),       // 0xeb
    (24, 0xfffff4),        // 0xec
    (24, 0xfffff5),        // 0xed
    (26, 0x3ffffea),       // 0xee
    (23, 0x7ffff4),        // 0xef
    (26, 0x3ffffeb),       // 0xf0
    (27, 0x7ffffe6),       // 0xf1
    (26, 0x3ffffec),       // 0xf2
    (26, 0x3ffffed),       // 0xf3
    (27, 0x7ffffe7),       // 0xf4
    (27, 0x7ffffe8),       // 0xf5
    (27, 0x7ffffe9),       // 0xf6
    (27, 0x7ffffea),       // 0xf7
    (27, 0x7ffffeb),       // 0xf8
    (28, 0xffffffe),       // 0xf9
    (27, 0x7ffffec),       // 0xfa
    (27, 0x7ffffed),       // 0xfb
    (27, 0x7ffffee),       // 0xfc
    (27, 0x7ffffef),       // 0xfd
    (27, 0x7fffff0),       // 0xfe
    (26, 0x3ffffee),       // 0xff
    (30, 0x3fffffff),      // EOS
];

pub(crate) static HUFFMAN_DECODE: [[(u8, u8, u8); 16]; 256] = [
    // 0
    [
        (15, 0, 0x00), (16, 0, 0x00), (17, 0, 0x00), (18, 0, 0x00),
        (19, 0, 0x00), (20, 0, 0x00), (21, 0, 0x00), (22, 0, 0x00),
        (23, 0, 0x00), (24, 0, 0x00), (25, 0, 0x00), (26, 0, 0x00),
        (27, 0, 0x00), (28, 0, 0x00), (29, 0, 0x00), (30, 0, 0x01),
    ],
    // 1
    [
        (0, 48, 0x03), (0, 49, 0x03), (0, 50, 0x03), (0, 97, 0x03),
        (0, 99, 0x03), (0, 101, 0x03), (0, 105, 0x03), (0, 111, 0x03),
        (0, 115, 0x03), (0, 116, 0x03), (31, 0, 0x00), (32, 0, 0x00),
        (33, 0, 0x00), (34, 0, 0x00), (35, 0, 0x00), (36, 0, 0x00),
    ],
    // 2
    [
        (37, 0, 0x00), (38, 0, 0x00), (39, 0, 0x00), (40, 0, 0x00),
        (41, 0, 0x00), (42, 0, 0x00), (43, 0, 0x00), (44, 0, 0x00),
        (45, 0, 0x00), (46, 0, 0x00), (47, 0, 0x00), (48, 0, 0x00),
        (49, 0, 0x00), (50, 0, 0x00), (51, 0, 0x00), (52, 0, 0x01),
    ],
    // 3
    [
        (1, 48, 0x02), (2, 48, 0x03), (1, 49, 0x02), (2, 49, 0x03),
        (1, 50, 0x02), (2, 50, 0x03), (1, 97, 0x02), (2, 97, 0x03),
        (1, 99, 0x02), (2, 99, 0x03), (1, 101, 0x02), (2, 101, 0x03),
        (1, 105, 0x02), (2, 105, 0x03), (1, 111, 0x02), (2, 111, 0x03),
    ],
    // 4
    [
        (1, 115, 0x02), (2, 115, 0x03), (1, 116, 0x02), (2, 116, 0x03),
        (0, 32, 0x03), (0, 37, 0x03), (0, 45, 0x03), (0, 46, 0x03),
        (0, 47, 0x03), (0, 51, 0x03), (0, 52, 0x03), (0, 53, 0x03),
        (0, 54, 0x03), (0, 55, 0x03), (0, 56, 0x03), (0, 57, 0x03),
    ],
    // 5
    [
        (0, 61, 0x03), (0, 65, 0x03), (0, 95, 0x03), (0, 98, 0x03),
        (0, 100, 0x03), (0, 102, 0x03), (0, 103, 0x03), (0, 104, 0x03),
        (0, 108, 0x03), (0, 109, 0x03), (0, 110, 0x03), (0, 112, 0x03),
        (0, 114, 0x03), (0, 117, 0x03), (53, 0, 0x00), (54, 0, 0x00),
    ],
    // 6
    [
        (55, 0, 0x00), (56, 0, 0x00), (57, 0, 0x00), (58, 0, 0x00),
        (59, 0, 0x00), (60, 0, 0x00), (61, 0, 0x00), (62, 0, 0x00),
        (63, 0, 0x00), (64, 0, 0x00), (65, 0, 0x00), (66, 0, 0x00),
        (67, 0, 0x00), (68, 0, 0x00), (69, 0, 0x00), (70, 0, 0x01),
    ],
    // 7
    [
        (3, 48, 0x02), (4, 48, 0x02), (5, 48, 0x02), (6, 48, 0x03),
        (3, 49, 0x02), (4, 49, 0x02), (5, 49, 0x02), (6, 49, 0x03),
        (3, 50, 0x02), (4, 50, 0x02), (5, 50, 0x02), (6, 50, 0x03),
        (3, 97, 0x02), (4, 97, 0x02), (5, 97, 0x02), (6, 97, 0x03),
    ],
    // 8
    [
        (3, 99, 0x02), (4, 99, 0x02), (5, 99, 0x02), (6, 99, 0x03),
        (3, 101, 0x02), (4, 101, 0x02), (5, 101, 0x02), (6, 101, 0x03),
        (3, 105, 0x02), (4, 105, 0x02), (5, 105, 0x02), (6, 105, 0x03),
        (3, 111, 0x02), (4, 111, 0x02), (5, 111, 0x02), (6, 111, 0x03),
    ],
    // 9
    [
        (3, 115, 0x02), (4, 115, 0x02), (5, 115, 0x02), (6, 115, 0x03),
        (3, 116, 0x02), (4, 116, 0x02), (5, 116, 0x02), (6, 116, 0x03),
        (1, 32, 0x02), (2, 32, 0x03), (1, 37, 0x02), (2, 37, 0x03),
        (1, 45, 0x02), (2, 45, 0x03), (1, 46, 0x02), (2, 46, 0x03),
    ],
    // 10
    [
        (1, 47, 0x02), (2, 47, 0x03), (1, 51, 0x02), (2, 51, 0x03),
        (1, 52, 0x02), (2, 52, 0x03), (1, 53, 0x02), (2, 53, 0x03),
        (1, 54, 0x02), (2, 54, 0x03), (1, 55, 0x02), (2, 55, 0x03),
        (1, 56, 0x02), (2, 56, 0x03), (1, 57, 0x02), (2, 57, 0x03),
    ],
    // 11
    [
        (1, 61, 0x02), (2, 61, 0x03), (1, 65, 0x02), (2, 65, 0x03),
        (1, 95, 0x02), (2, 95, 0x03), (1, 98, 0x02), (2, 98, 0x03),
        (1, 100, 0x02), (2, 100, 0x03), (1, 102, 0x02), (2, 102, 0x03),
        (1, 103, 0x02), (2, 103, 0x03), (1, 104, 0x02), (2, 104, 0x03),
    ],
    // 12
    [
        (1, 108, 0x02), (2, 108, 0x03), (1, 109, 0x02), (2, 109, 0x03),
        (1, 110, 0x02), (2, 110, 0x03), (1, 112, 0x02), (2, 112, 0x03),
        (1, 114, 0x02), (2, 114, 0x03), (1, 117, 0x02), (2, 117, 0x03),
        (0, 58, 0x03), (0, 66, 0x03), (0, 67, 0x03), (0, 68, 0x03),
    ],
    // 13
    [
        (0, 69, 0x03), (0, 70, 0x03), (0, 71, 0x03), (0, 72, 0x03),
        (0, 73, 0x03), (0, 74, 0x03), (0, 75, 0x03), (0, 76, 0x03),
        (0, 77, 0x03), (0, 78, 0x03), (0, 79, 0x03), (0, 80, 0x03),
        (0, 81, 0x03), (0, 82, 0x03), (0, 83, 0x03), (0, 84, 0x03),
    ],
    // 14
    [
        (0, 85, 0x03), (0, 86, 0x03), (0, 87, 0x03), (0, 89, 0x03),
        (0, 106, 0x03), (0, 107, 0x03), (0, 113, 0x03), (0, 118, 0x03),
        (0, 119, 0x03), (0, 120, 0x03), (0, 121, 0x03), (0, 122, 0x03),
        (71, 0, 0x00), (72, 0, 0x00), (73, 0, 0x00), (74, 0, 0x01),
    ],
    // 15
    [
        (7, 48, 0x02), (8, 48, 0x02), (9, 48, 0x02), (10, 48, 0x02),
        (11, 48, 0x02), (12, 48, 0x02), (13, 48, 0x02), (14, 48, 0x03),
        (7, 49, 0x02), (8, 49, 0x02), (9, 49, 0x02), (10, 49, 0x02),
        (11, 49, 0x02), (12, 49, 0x02), (13, 49, 0x02), (14, 49, 0x03),
    ],
    // 16
    [
        (7, 50, 0x02), (8, 50, 0x02), (9, 50, 0x02), (10, 50, 0x02),
        (11, 50, 0x02), (12, 50, 0x02), (13, 50, 0x02), (14, 50, 0x03),
        (7, 97, 0x02), (8, 97, 0x02), (9, 97, 0x02), (10, 97, 0x02),
        (11, 97, 0x02), (12, 97, 0x02), (13, 97, 0x02), (14, 97, 0x03),
    ],
    // 17
    [
        (7, 99, 0x02), (8, 99, 0x02), (9, 99, 0x02), (10, 99, 0x02),
        (11, 99, 0x02), (12, 99, 0x02), (13, 99, 0x02), (14, 99, 0x03),
        (7, 101, 0x02), (8, 101, 0x02), (9, 101, 0x02), (10, 101, 0x02),
        (11, 101, 0x02), (12, 101, 0x02), (13, 101, 0x02), (14, 101, 0x03),
    ],
    // 18
    [
        (7, 105, 0x02), (8, 105, 0x02), (9, 105, 0x02), (10, 105, 0x02),
        (11, 105, 0x02), (12, 105, 0x02), (13, 105, 0x02), (14, 105, 0x03),
        (7, 111, 0x02), (8, 111, 0x02), (9, 111, 0x02), (10, 111, 0x02),
        (11, 111, 0x02), (12, 111, 0x02), (13, 111, 0x02), (14, 111, 0x03),
    ],
    // 19
    [
        (7, 115, 0x02), (8, 115, 0x02), (9, 115, 0x02), (10, 115, 0x02),
        (11, 115, 0x02), (12, 115, 0x02), (13, 115, 0x02), (14, 115, 0x03),
        (7, 116, 0x02), (8, 116, 0x02), (9, 116, 0x02), (10, 116, 0x02),
        (11, 116, 0x02), (12, 116, 0x02), (13, 116, 0x02), (14, 116, 0x03),
    ],
    // 20
    [
        (3, 32, 0x02), (4, 32, 0x02), (5, 32, 0x02), (6, 32, 0x03),
        (3, 37, 0x02), (4, 37, 0x02), (5, 37, 0x02), (6, 37, 0x03),
        (3, 45, 0x02), (4, 45, 0x02), (5, 45, 0x02), (6, 45, 0x03),
        (3, 46, 0x02), (4, 46, 0x02), (5, 46, 0x02), (6, 46, 0x03),
    ],
    // 21
    [
        (3, 47, 0x02), (4, 47, 0x02), (5, 47, 0x02), (6, 47, 0x03),
        (3, 51, 0x02), (4, 51, 0x02), (5, 51, 0x02), (6, 51, 0x03),
        (3, 52, 0x02), (4, 52, 0x02), (5, 52, 0x02), (6, 52, 0x03),
        (3, 53, 0x02), (4, 53, 0x02), (5, 53, 0x02), (6, 53, 0x03),
    ],
    // 22
    [
        (3, 54, 0x02), (4, 54, 0x02), (5, 54, 0x02), (6, 54, 0x03),
        (3, 55, 0x02), (4, 55, 0x02), (5, 55, 0x02), (6, 55, 0x03),
        (3, 56, 0x02), (4, 56, 0x02), (5, 56, 0x02), (6, 56, 0x03),
        (3, 57, 0x02), (4, 57, 0x02), (5, 57, 0x02), (6, 57, 0x03),
    ],
    // 23
    [
        (3, 61, 0x02), (4, 61, 0x02), (5, 61, 0x02), (6, 61, 0x03),
        (3, 65, 0x02), (4, 65, 0x02), (5, 65, 0x02), (6, 65, 0x03),
        (3, 95, 0x02), (4, 95, 0x02), (5, 95, 0x02), (6, 95, 0x03),
        (3, 98, 0x02), (4, 98, 0x02), (5, 98, 0x02), (6, 98, 0x03),
    ],
    // 24
    [
        (3, 100, 0x02), (4, 100, 0x02), (5, 100, 0x02), (6, 100, 0x03),
        (3, 102, 0x02), (4, 102, 0x02), (5, 102, 0x02), (6, 102, 0x03),
        (3, 103, 0x02), (4, 103, 0x02), (5, 103, 0x02), (6, 103, 0x03),
        (3, 104, 0x02), (4, 104, 0x02), (5, 104, 0x02), (6, 104, 0x03),
    ],
    // 25
    [
        (3, 108, 0x02), (4, 108, 0x02), (5, 108, 0x02), (6, 108, 0x03),
        (3, 109, 0x02), (4, 109, 0x02), (5, 109, 0x02), (6, 109, 0x03),
        (3, 110, 0x02), (4, 110, 0x02), (5, 110, 0x02), (6, 110, 0x03),
        (3, 112, 0x02), (4, 112, 0x02), (5, 112, 0x02), (6, 112, 0x03),
    ],
    // 26
    [
        (3, 114, 0x02), (4, 114, 0x02), (5, 114, 0x02), (6, 114, 0x03),
        (3, 117, 0x02), (4, 117, 0x02), (5, 117, 0x02), (6, 117, 0x03),
        (1, 58, 0x02), (2, 58, 0x03), (1, 66, 0x02), (2, 66, 0x03),
        (1, 67, 0x02), (2, 67, 0x03), (1, 68, 0x02), (2, 68, 0x03),
    ],
    // 27
    [
        (1, 69, 0x02), (2, 69, 0x03), (1, 70, 0x02), (2, 70, 0x03),
        (1, 71, 0x02), (2, 71, 0x03), (1, 72, 0x02), (2, 72, 0x03),
        (1, 73, 0x02), (2, 73, 0x03), (1, 74, 0x02), (2, 74, 0x03),
        (1, 75, 0x02), (2, 75, 0x03), (1, 76, 0x02), (2, 76, 0x03),
    ],
    // 28
    [
        (1, 77, 0x02), (2, 77, 0x03), (1, 78, 0x02), (2, 78, 0x03),
        (1, 79, 0x02), (2, 79, 0x03), (1, 80, 0x02), (2, 80, 0x03),
        (1, 81, 0x02), (2, 81, 0x03), (1, 82, 0x02), (2, 82, 0x03),
        (1, 83, 0x02), (2, 83, 0x03), (1, 84, 0x02), (2, 84, 0x03),
    ],
    // 29
    [
        (1, 85, 0x02), (2, 85, 0x03), (1, 86, 0x02), (2, 86, 0x03),
        (1, 87, 0x02), (2, 87, 0x03), (1, 89, 0x02), (2, 89, 0x03),
        (1, 106, 0x02), (2, 106, 0x03), (1, 107, 0x02), (2, 107, 0x03),
        (1, 113, 0x02), (2, 113, 0x03), (1, 118, 0x02), (2, 118, 0x03),
    ],
    // 30
    [
        (1, 119, 0x02), (2, 119, 0x03), (1, 120, 0x02), (2, 120, 0x03),
        (1, 121, 0x02), (2, 121, 0x03), (1, 122, 0x02), (2, 122, 0x03),
        (0, 38, 0x03), (0, 42, 0x03), (0, 44, 0x03), (0, 59, 0x03),
        (0, 88, 0x03), (0, 90, 0x03), (75, 0, 0x00), (76, 0, 0x00),
    ],
    // 31
    [
        (7, 32, 0x02), (8, 32, 0x02), (9, 32, 0x02), (10, 32, 0x02),
        (11, 32, 0x02), (12, 32, 0x02), (13, 32, 0x02), (14, 32, 0x03),
        (7, 37, 0x02), (8, 37, 0x02), (9, 37, 0x02), (10, 37, 0x02),
        (11, 37, 0x02), (12, 37, 0x02), (13, 37, 0x02), (14, 37, 0x03),
    ],
    // 32
    [
        (7, 45, 0x02), (8, 45, 0x02), (9, 45, 0x02), (10, 45, 0x02),
        (11, 45, 0x02), (12, 45, 0x02), (13, 45, 0x02), (14, 45, 0x03),
        (7, 46, 0x02), (8, 46, 0x02), (9, 46, 0x02), (10, 46, 0x02),
        (11, 46, 0x02), (12, 46, 0x02), (13, 46, 0x02), (14, 46, 0x03),
    ],
    // 33
    [
        (7, 47, 0x02), (8, 47, 0x02), (9, 47, 0x02), (10, 47, 0x02),
        (11, 47, 0x02), (12, 47, 0x02), (13, 47, 0x02), (14, 47, 0x03),
        (7, 51, 0x02), (8, 51, 0x02), (9, 51, 0x02), (10, 51, 0x02),
        (11, 51, 0x02), (12, 51, 0x02), (13, 51, 0x02), (14, 51, 0x03),
    ],
    // 34
    [
        (7, 52, 0x02), (8, 52, 0x02), (9, 52, 0x02), (10, 52, 0x02),
        (11, 52, 0x02), (12, 52, 0x02), (13, 52, 0x02), (14, 52, 0x03),
        (7, 53, 0x02), (8, 53, 0x02), (9, 53, 0x02), (10, 53, 0x02),
        (11, 53, 0x02), (12, 53, 0x02), (13, 53, 0x02), (14, 53, 0x03),
    ],
    // 35
    [
        (7, 54, 0x02), (8, 54, 0x02), (9, 54, 0x02), (10, 54, 0x02),
        (11, 54, 0x02), (12, 54, 0x02), (13, 54, 0x02), (14, 54, 0x03),
        (7, 55, 0x02), (8, 55, 0x02), (9, 55, 0x02), (10, 55, 0x02),
        (11, 55, 0x02), (12, 55, 0x02), (13, 55, 0x02), (14, 55, 0x03),
    ],
    // 36
    [
        (7, 56, 0x02), (8, 56, 0x02), (9, 56, 0x02), (10, 56, 0x02),
        (11, 56, 0x02), (12, 56, 0x02), (13, 56, 0x02), (14, 56, 0x03),
        (7, 57, 0x02), (8, 57, 0x02), (9, 57, 0x02), (10, 57, 0x02),
        (11, 57, 0x02), (12, 57, 0x02), (13, 57, 0x02), (14, 57, 0x03),
    ],
    // 37
    [
        (7, 61, 0x02), (8, 61, 0x02), (9, 61, 0x02), (10, 61, 0x02),
        (11, 61, 0x02), (12, 61, 0x02), (13, 61, 0x02), (14, 61, 0x03),
        (7, 65, 0x02), (8, 65, 0x02), (9, 65, 0x02), (10, 65, 0x02),
        (11, 65, 0x02), (12, 65, 0x02), (13, 65, 0x02), (14, 65, 0x03),
    ],
    // 38
    [
        (7, 95, 0x02), (8, 95, 0x02), (9, 95, 0x02), (10, 95, 0x02),
        (11, 95, 0x02), (12, 95, 0x02), (13, 95, 0x02), (14, 95, 0x03),
        (7, 98, 0x02), (8, 98, 0x02), (9, 98, 0x02), (10, 98, 0x02),
        (11, 98, 0x02), (12, 98, 0x02), (13, 98, 0x02), (14, 98, 0x03),
    ],
    // 39
    [
        (7, 100, 0x02), (8, 100, 0x02), (9, 100, 0x02), (10, 100, 0x02),
        (11, 100, 0x02), (12, 100, 0x02), (13, 100, 0x02), (14, 100, 0x03),
        (7, 102, 0x02), (8, 102, 0x02), (9, 102, 0x02), (10, 102, 0x02),
        (11, 102, 0x02), (12, 102, 0x02), (13, 102, 0x02), (14, 102, 0x03),
    ],
    // 40
    [
        (7, 103, 0x02), (8, 103, 0x02), (9, 103, 0x02), (10, 103, 0x02),
        (11, 103, 0x02), (12, 103, 0x02), (13, 103, 0x02), (14, 103, 0x03),
        (7, 104, 0x02), (8, 104, 0x02), (9, 104, 0x02), (10, 104, 0x02),
        (11, 104, 0x02), (12, 104, 0x02), (13, 104, 0x02), (14, 104, 0x03),
    ],
    // 41
    [
        (7, 108, 0x02), (8, 108, 0x02), (9, 108, 0x02), (10, 108, 0x02),
        (11, 108, 0x02), (12, 108, 0x02), (13, 108, 0x02), (14, 108, 0x03),
        (7, 109, 0x02), (8, 109, 0x02), (9, 109, 0x02), (10, 109, 0x02),
        (11, 109, 0x02), (12, 109, 0x02), (13, 109, 0x02), (14, 109, 0x03),
    ],
    // 42
    [
        (7, 110, 0x02), (8, 110, 0x02), (9, 110, 0x02), (10, 110, 0x02),
        (11, 110, 0x02), (12, 110, 0x02), (13, 110, 0x02), (14, 110, 0x03),
        (7, 112, 0x02), (8, 112, 0x02), (9, 112, 0x02), (10, 112, 0x02),
        (11, 112, 0x02), (12, 112, 0x02), (13, 112, 0x02), (14, 112, 0x03),
    ],
    // 43
    [
        (7, 114, 0x02), (8, 114, 0x02), (9, 114, 0x02), (10, 114, 0x02),
        (11, 114, 0x02), (12, 114, 0x02), (13, 114, 0x02), (14, 114, 0x03),
        (7, 117, 0x02), (8, 117, 0x02), (9, 117, 0x02), (10, 117, 0x02),
        (11, 117, 0x02), (12, 117, 0x02), (13, 117, 0x02), (14, 117, 0x03),
    ],
    // 44
    [
        (3, 58, 0x02), (4, 58, 0x02), (5, 58, 0x02), (6, 58, 0x03),
        (3, 66, 0x02), (4, 66, 0x02), (5, 66, 0x02), (6, 66, 0x03),
        (3, 67, 0x02), (4, 67, 0x02), (5, 67, 0x02), (6, 67, 0x03),
        (3, 68, 0x02), (4, 68, 0x02), (5, 68, 0x02), (6, 68, 0x03),
    ],
    // 45
    [
        (3, 69, 0x02), (4, 69, 0x02), (5, 69, 0x02), (6, 69, 0x03),
        (3, 70, 0x02), (4, 70, 0x02), (5, 70, 0x02), (6, 70, 0x03),
        (3, 71, 0x02), (4, 71, 0x02), (5, 71, 0x02), (6, 71, 0x03),
        (3, 72, 0x02), (4, 72, 0x02), (5, 72, 0x02), (6, 72, 0x03),
    ],
    // 46
    [
        (3, 73, 0x02), (4, 73, 0x02), (5, 73, 0x02), (6, 73, 0x03),
        (3, 74, 0x02), (4, 74, 0x02), (5, 74, 0x02), (6, 74, 0x03),
        (3, 75, 0x02), (4, 75, 0x02), (5, 75, 0x02), (6, 75, 0x03),
        (3, 76, 0x02), (4, 76, 0x02), (5, 76, 0x02), (6, 76, 0x03),
    ],
    // 47
    [
        (3, 77, 0x02), (4, 77, 0x02), (5, 77, 0x02), (6, 77, 0x03),
        (3, 78, 0x02), (4, 78, 0x02), (5, 78, 0x02), (6, 78, 0x03),
        (3, 79, 0x02), (4, 79, 0x02), (5, 79, 0x02), (6, 79, 0x03),
        (3, 80, 0x02), (4, 80, 0x02), (5, 80, 0x02), (6, 80, 0x03),
    ],
    // 48
    [
        (3, 81, 0x02), (4, 81, 0x02), (5, 81, 0x02), (6, 81, 0x03),
        (3, 82, 0x02), (4, 82, 0x02), (5, 82, 0x02), (6, 82, 0x03),
        (3, 83, 0x02), (4, 83, 0x02), (5, 83, 0x02), (6, 83, 0x03),
        (3, 84, 0x02), (4, 84, 0x02), (5, 84, 0x02), (6, 84, 0x03),
    ],
    // 49
    [
        (3, 85, 0x02), (4, 85, 0x02), (5, 85, 0x02), (6, 85, 0x03),
        (3, 86, 0x02), (4, 86, 0x02), (5, 86, 0x02), (6, 86, 0x03),
        (3, 87, 0x02), (4, 87, 0x02), (5, 87, 0x02), (6, 87, 0x03),
        (3, 89, 0x02), (4, 89, 0x02), (5, 89, 0x02), (6, 89, 0x03),
    ],
    // 50
    [
        (3, 106, 0x02), (4, 106, 0x02), (5, 106, 0x02), (6, 106, 0x03),
        (3, 107, 0x02), (4, 107, 0x02), (5, 107, 0x02), (6, 107, 0x03),
        (3, 113, 0x02), (4, 113, 0x02), (5, 113, 0x02), (6, 113, 0x03),
        (3, 118, 0x02), (4, 118, 0x02), (5, 118, 0x02), (6, 118, 0x03),
    ],
    // 51
    [
        (3, 119, 0x02), (4, 119, 0x02), (5, 119, 0x02), (6, 119, 0x03),
        (3, 120, 0x02), (4, 120, 0x02), (5, 120, 0x02), (6, 120, 0x03),
        (3, 121, 0x02), (4, 121, 0x02), (5, 121, 0x02), (6, 121, 0x03),
        (3, 122, 0x02), (4, 122, 0x02), (5, 122, 0x02), (6, 122, 0x03),
    ],
    // 52
    [
        (1, 38, 0x02), (2, 38, 0x03), (1, 42, 0x02), (2, 42, 0x03),
        (1, 44, 0x02), (2, 44, 0x03), (1, 59, 0x02), (2, 59, 0x03),
        (1, 88, 0x02), (2, 88, 0x03), (1, 90, 0x02), (2, 90, 0x03),
        (77, 0, 0x00), (78, 0, 0x00), (79, 0, 0x00), (80, 0, 0x00),
    ],
    // 53
    [
        (7, 58, 0x02), (8, 58, 0x02), (9, 58, 0x02), (10, 58, 0x02),
        (11, 58, 0x02), (12, 58, 0x02), (13, 58, 0x02), (14, 58, 0x03),
        (7, 66, 0x02), (8, 66, 0x02), (9, 66, 0x02), (10, 66, 0x02),
        (11, 66, 0x02), (12, 66, 0x02), (13, 66, 0x02), (14, 66, 0x03),
    ],
    // 54
    [
        (7, 67, 0x02), (8, 67, 0x02), (9, 67, 0x02), (10, 67, 0x02),
        (11, 67, 0x02), (12, 67, 0x02), (13, 67, 0x02), (14, 67, 0x03),
        (7, 68, 0x02), (8, 68, 0x02), (9, 68, 0x02), (10, 68, 0x02),
        (11, 68, 0x02), (12, 68, 0x02), (13, 68, 0x02), (14, 68, 0x03),
    ],
    // 55
    [
        (7, 69, 0x02), (8, 69, 0x02), (9, 69, 0x02), (10, 69, 0x02),
        (11, 69, 0x02), (12, 69, 0x02), (13, 69, 0x02), (14, 69, 0x03),
        (7, 70, 0x02), (8, 70, 0x02), (9, 70, 0x02), (10, 70, 0x02),
        (11, 70, 0x02), (12, 70, 0x02), (13, 70, 0x02), (14, 70, 0x03),
    ],
    // 56
    [
        (7, 71, 0x02), (8, 71, 0x02), (9, 71, 0x02), (10, 71, 0x02),
        (11, 71, 0x02), (12, 71, 0x02), (13, 71, 0x02), (14, 71, 0x03),
        (7, 72, 0x02), (8, 72, 0x02), (9, 72, 0x02), (10, 72, 0x02),
        (11, 72, 0x02), (12, 72, 0x02), (13, 72, 0x02), (14, 72, 0x03),
    ],
    // 57
    [
        (7, 73, 0x02), (8, 73, 0x02), (9, 73, 0x02), (10, 73, 0x02),
        (11, 73, 0x02), (12, 73, 0x02), (13, 73, 0x02), (14, 73, 0x03),
        (7, 74, 0x02), (8, 74, 0x02), (9, 74, 0x02), (10, 74, 0x02),
        (11, 74, 0x02), (12, 74, 0x02), (13, 74, 0x02), (14, 74, 0x03),
    ],
    // 58
    [
        (7, 75, 0x02), (8, 75, 0x02), (9, 75, 0x02), (10, 75, 0x02),
        (11, 75, 0x02), (12, 75, 0x02), (13, 75, 0x02), (14, 75, 0x03),
        (7, 76, 0x02), (8, 76, 0x02), (9, 76, 0x02), (10, 76, 0x02),
        (11, 76, 0x02), (12, 76, 0x02), (13, 76, 0x02), (14, 76, 0x03),
    ],
    // 59
    [
        (7, 77, 0x02), (8, 77, 0x02), (9, 77, 0x02), (10, 77, 0x02),
        (11, 77, 0x02), (12, 77, 0x02), (13, 77, 0x02), (14, 77, 0x03),
        (7, 78, 0x02), (8, 78, 0x02), (9, 78, 0x02), (10, 78, 0x02),
        (11, 78, 0x02), (12, 78, 0x02), (13, 78, 0x02), (14, 78, 0x03),
    ],
    // 60
    [
        (7, 79, 0x02), (8, 79, 0x02), (9, 79, 0x02), (10, 79, 0x02),
        (11, 79, 0x02), (12, 79, 0x02), (13, 79, 0x02), (14, 79, 0x03),
        (7, 80, 0x02), (8, 80, 0x02), (9, 80, 0x02), (10, 80, 0x02),
        (11, 80, 0x02), (12, 80, 0x02), (13, 80, 0x02), (14, 80, 0x03),
    ],
    // 61
    [
        (7, 81, 0x02), (8, 81, 0x02), (9, 81, 0x02), (10, 81, 0x02),
        (11, 81, 0x02), (12, 81, 0x02), (13, 81, 0x02), (14, 81, 0x03),
        (7, 82, 0x02), (8, 82, 0x02), (9, 82, 0x02), (10, 82, 0x02),
        (11, 82, 0x02), (12, 82, 0x02), (13, 82, 0x02), (14, 82, 0x03),
    ],
    // 62
    [
        (7, 83, 0x02), (8, 83, 0x02), (9, 83, 0x02), (10, 83, 0x02),
        (11, 83, 0x02), (12, 83, 0x02), (13, 83, 0x02), (14, 83, 0x03),
        (7, 84, 0x02), (8, 84, 0x02), (9, 84, 0x02), (10, 84, 0x02),
        (11, 84, 0x02), (12, 84, 0x02), (13, 84, 0x02), (14, 84, 0x03),
    ],
    // 63
    [
        (7, 85, 0x02), (8, 85, 0x02), (9, 85, 0x02), (10, 85, 0x02),
        (11, 85, 0x02), (12, 85, 0x02), (13, 85, 0x02), (14, 85, 0x03),
        (7, 86, 0x02), (8, 86, 0x02), (9, 86, 0x02), (10, 86, 0x02),
        (11, 86, 0x02), (12, 86, 0x02), (13, 86, 0x02), (14, 86, 0x03),
    ],
    // 64
    [
        (7, 87, 0x02), (8, 87, 0x02), (9, 87, 0x02), (10, 87, 0x02),
        (11, 87, 0x02), (12, 87, 0x02), (13, 87, 0x02), (14, 87, 0x03),
        (7, 89, 0x02), (8, 89, 0x02), (9, 89, 0x02), (10, 89, 0x02),
        (11, 89, 0x02), (12, 89, 0x02), (13, 89, 0x02), (14, 89, 0x03),
    ],
    // 65
    [
        (7, 106, 0x02), (8, 106, 0x02), (9, 106, 0x02), (10, 106, 0x02),
        (11, 106, 0x02), (12, 106, 0x02), (13, 106, 0x02), (14, 106, 0x03),
        (7, 107, 0x02), (8, 107, 0x02), (9, 107, 0x02), (10, 107, 0x02),
        (11, 107, 0x02), (12, 107, 0x02), (13, 107, 0x02), (14, 107, 0x03),
    ],
    // 66
    [
        (7, 113, 0x02), (8, 113, 0x02), (9, 113, 0x02), (10, 113, 0x02),
        (11, 113, 0x02), (12, 113, 0x02), (13, 113, 0x02), (14, 113, 0x03),
        (7, 118, 0x02), (8, 118, 0x02), (9, 118, 0x02), (10, 118, 0x02),
        (11, 118, 0x02), (12, 118, 0x02), (13, 118, 0x02), (14, 118, 0x03),
    ],
    // 67
    [
        (7, 119, 0x02), (8, 119, 0x02), (9, 119, 0x02), (10, 119, 0x02),
        (11, 119, 0x02), (12, 119, 0x02), (13, 119, 0x02), (14, 119, 0x03),
        (7, 120, 0x02), (8, 120, 0x02), (9, 120, 0x02), (10, 120, 0x02),
        (11, 120, 0x02), (12, 120, 0x02), (13, 120, 0x02), (14, 120, 0x03),
    ],
    // 68
    [
        (7, 121, 0x02), (8, 121, 0x02), (9, 121, 0x02), (10, 121, 0x02),
        (11, 121, 0x02), (12, 121, 0x02), (13, 121, 0x02), (14, 121, 0x03),
        (7, 122, 0x02), (8, 122, 0x02), (9, 122, 0x02), (10, 122, 0x02),
        (11, 122, 0x02), (12, 122, 0x02), (13, 122, 0x02), (14, 122, 0x03),
    ],
    // 69
    [
        (3, 38, 0x02), (4, 38, 0x02), (5, 38, 0x02), (6, 38, 0x03),
        (3, 42, 0x02), (4, 42, 0x02), (5, 42, 0x02), (6, 42, 0x03),
        (3, 44, 0x02), (4, 44, 0x02), (5, 44, 0x02), (6, 44, 0x03),
        (3, 59, 0x02), (4, 59, 0x02), (5, 59, 0x02), (6, 59, 0x03),
    ],
    // 70
    [
        (3, 88, 0x02), (4, 88, 0x02), (5, 88, 0x02), (6, 88, 0x03),
        (3, 90, 0x02), (4, 90, 0x02), (5, 90, 0x02), (6, 90, 0x03),
        (0, 33, 0x03), (0, 34, 0x03), (0, 40, 0x03), (0, 41, 0x03),
        (0, 63, 0x03), (81, 0, 0x00), (82, 0, 0x00), (83, 0, 0x00),
    ],
    // 71
    [
        (7, 38, 0x02), (8, 38, 0x02), (9, 38, 0x02), (10, 38, 0x02),
        (11, 38, 0x02), (12, 38, 0x02), (13, 38, 0x02), (14, 38, 0x03),
        (7, 42, 0x02), (8, 42, 0x02), (9, 42, 0x02), (10, 42, 0x02),
        (11, 42, 0x02), (12, 42, 0x02), (13, 42, 0x02), (14, 42, 0x03),
    ],
    // 72
    [
        (7, 44, 0x02), (8, 44, 0x02), (9, 44, 0x02), (10, 44, 0x02),
        (11, 44, 0x02), (12, 44, 0x02), (13, 44, 0x02), (14, 44, 0x03),
        (7, 59, 0x02), (8, 59, 0x02), (9, 59, 0x02), (10, 59, 0x02),
        (11, 59, 0x02), (12, 59, 0x02), (13, 59, 0x02), (14, 59, 0x03),
    ],
    // 73
    [
        (7, 88, 0x02), (8, 88, 0x02), (9, 88, 0x02), (10, 88, 0x02),
        (11, 88, 0x02), (12, 88, 0x02), (13, 88, 0x02), (14, 88, 0x03),
        (7, 90, 0x02), (8, 90, 0x02), (9, 90, 0x02), (10, 90, 0x02),
        (11, 90, 0x02), (12, 90, 0x02), (13, 90, 0x02), (14, 90, 0x03),
    ],
    // 74
    [
        (1, 33, 0x02), (2, 33, 0x03), (1, 34, 0x02), (2, 34, 0x03),
        (1, 40, 0x02), (2, 40, 0x03), (1, 41, 0x02), (2, 41, 0x03),
        (1, 63, 0x02), (2, 63, 0x03), (0, 39, 0x03), (0, 43, 0x03),
        (0, 124, 0x03), (84, 0, 0x00), (85, 0, 0x00), (86, 0, 0x00),
    ],
    // 75
    [
        (3, 33, 0x02), (4, 33, 0x02), (5, 33, 0x02), (6, 33, 0x03),
        (3, 34, 0x02), (4, 34, 0x02), (5, 34, 0x02), (6, 34, 0x03),
        (3, 40, 0x02), (4, 40, 0x02), (5, 40, 0x02), (6, 40, 0x03),
        (3, 41, 0x02), (4, 41, 0x02), (5, 41, 0x02), (6, 41, 0x03),
    ],
    // 76
    [
        (3, 63, 0x02), (4, 63, 0x02), (5, 63, 0x02), (6, 63, 0x03),
        (1, 39, 0x02), (2, 39, 0x03), (1, 43, 0x02), (2, 43, 0x03),
        (1, 124, 0x02), (2, 124, 0x03), (0, 35, 0x03), (0, 62, 0x03),
        (87, 0, 0x00), (88, 0, 0x00), (89, 0, 0x00), (90, 0, 0x00),
    ],
    // 77
    [
        (7, 33, 0x02), (8, 33, 0x02), (9, 33, 0x02), (10, 33, 0x02),
        (11, 33, 0x02), (12, 33, 0x02), (13, 33, 0x02), (14, 33, 0x03),
        (7, 34, 0x02), (8, 34, 0x02), (9, 34, 0x02), (10, 34, 0x02),
        (11, 34, 0x02), (12, 34, 0x02), (13, 34, 0x02), (14, 34, 0x03),
    ],
    // 78
    [
        (7, 40, 0x02), (8, 40, 0x02), (9, 40, 0x02), (10, 40, 0x02),
        (11, 40, 0x02), (12, 40, 0x02), (13, 40, 0x02), (14, 40, 0x03),
        (7, 41, 0x02), (8, 41, 0x02), (9, 41, 0x02), (10, 41, 0x02),
        (11, 41, 0x02), (12, 41, 0x02), (13, 41, 0x02), (14, 41, 0x03),
    ],
    // 79
    [
        (7, 63, 0x02), (8, 63, 0x02), (9, 63, 0x02), (10, 63, 0x02),
        (11, 63, 0x02), (12, 63, 0x02), (13, 63, 0x02), (14, 63, 0x03),
        (3, 39, 0x02), (4, 39, 0x02), (5, 39, 0x02), (6, 39, 0x03),
        (3, 43, 0x02), (4, 43, 0x02), (5, 43, 0x02), (6, 43, 0x03),
    ],
    // 80
    [
        (3, 124, 0x02), (4, 124, 0x02), (5, 124, 0x02), (6, 124, 0x03),
        (1, 35, 0x02), (2, 35, 0x03), (1, 62, 0x02), (2, 62, 0x03),
        (0, 0, 0x03), (0, 36, 0x03), (0, 64, 0x03), (0, 91, 0x03),
        (0, 93, 0x03), (0, 126, 0x03), (91, 0, 0x00), (92, 0, 0x00),
    ],
    // 81
    [
        (7, 39, 0x02), (8, 39, 0x02), (9, 39, 0x02), (10, 39, 0x02),
        (11, 39, 0x02), (12, 39, 0x02), (13, 39, 0x02), (14, 39, 0x03),
        (7, 43, 0x02), (8, 43, 0x02), (9, 43, 0x02), (10, 43, 0x02),
        (11, 43, 0x02), (12, 43, 0x02), (13, 43, 0x02), (14, 43, 0x03),
    ],
    // 82
    [
        (7, 124, 0x02), (8, 124, 0x02), (9, 124, 0x02), (10, 124, 0x02),
        (11, 124, 0x02), (12, 124, 0x02), (13, 124, 0x02), (14, 124, 0x03),
        (3, 35, 0x02), (4, 35, 0x02), (5, 35, 0x02), (6, 35, 0x03),
        (3, 62, 0x02), (4, 62, 0x02), (5, 62, 0x02), (6, 62, 0x03),
    ],
    // 83
    [
        (1, 0, 0x02), (2, 0, 0x03), (1, 36, 0x02), (2, 36, 0x03),
        (1, 64, 0x02), (2, 64, 0x03), (1, 91, 0x02), (2, 91, 0x03),
        (1, 93, 0x02), (2, 93, 0x03), (1, 126, 0x02), (2, 126, 0x03),
        (0, 94, 0x03), (0, 125, 0x03), (93, 0, 0x00), (94, 0, 0x00),
    ],
    // 84
    [
        (7, 35, 0x02), (8, 35, 0x02), (9, 35, 0x02), (10, 35, 0x02),
        (11, 35, 0x02), (12, 35, 0x02), (13, 35, 0x02), (14, 35, 0x03),
        (7, 62, 0x02), (8, 62, 0x02), (9, 62, 0x02), (10, 62, 0x02),
        (11, 62, 0x02), (12, 62, 0x02), (13, 62, 0x02), (14, 62, 0x03),
    ],
    // 85
    [
        (3, 0, 0x02), (4, 0, 0x02), (5, 0, 0x02), (6, 0, 0x03),
        (3, 36, 0x02), (4, 36, 0x02), (5, 36, 0x02), (6, 36, 0x03),
        (3, 64, 0x02), (4, 64, 0x02), (5, 64, 0x02), (6, 64, 0x03),
        (3, 91, 0x02), (4, 91, 0x02), (5, 91, 0x02), (6, 91, 0x03),
    ],
    // 86
    [
        (3, 93, 0x02), (4, 93, 0x02), (5, 93, 0x02), (6, 93, 0x03),
        (3, 126, 0x02), (4, 126, 0x02), (5, 126, 0x02), (6, 126, 0x03),
        (1, 94, 0x02), (2, 94, 0x03), (1, 125, 0x02), (2, 125, 0x03),
        (0, 60, 0x03), (0, 96, 0x03), (0, 123, 0x03), (95, 0, 0x00),
    ],
    // 87
    [
        (7, 0, 0x02), (8, 0, 0x02), (9, 0, 0x02), (10, 0, 0x02),
        (11, 0, 0x02), (12, 0, 0x02), (13, 0, 0x02), (14, 0, 0x03),
        (7, 36, 0x02), (8, 36, 0x02), (9, 36, 0x02), (10, 36, 0x02),
        (11, 36, 0x02), (12, 36, 0x02), (13, 36, 0x02), (14, 36, 0x03),
    ],
    // 88
    [
        (7, 64, 0x02), (8, 64, 0x02), (9, 64, 0x02), (10, 64, 0x02),
        (11, 64, 0x02), (12, 64, 0x02), (13, 64, 0x02), (14, 64, 0x03),
        (7, 91, 0x02), (8, 91, 0x02), (9, 91, 0x02), (10, 91, 0x02),
        (11, 91, 0x02), (12, 91, 0x02), (13, 91, 0x02), (14, 91, 0x03),
    ],
    // 89
    [
        (7, 93, 0x02), (8, 93, 0x02), (9, 93, 0x02), (10, 93, 0x02),
        (11, 93, 0x02), (12, 93, 0x02), (13, 93, 0x02), (14, 93, 0x03),
        (7, 126, 0x02), (8, 126, 0x02), (9, 126, 0x02), (10, 126, 0x02),
        (11, 126, 0x02), (12, 126, 0x02), (13, 126, 0x02), (14, 126, 0x03),
    ],
    // 90
    [
        (3, 94, 0x02), (4, 94, 0x02), (5, 94, 0x02), (6, 94, 0x03),
        (3, 125, 0x02), (4, 125, 0x02), (5, 125, 0x02), (6, 125, 0x03),
        (1, 60, 0x02), (2, 60, 0x03), (1, 96, 0x02), (2, 96, 0x03),
        (1, 123, 0x02), (2, 123, 0x03), (96, 0, 0x00), (97, 0, 0x00),
    ],
    // 91
    [
        (7, 94, 0x02), (8, 94, 0x02), (9, 94, 0x02), (10, 94, 0x02),
        (11, 94, 0x02), (12, 94, 0x02), (13, 94, 0x02), (14, 94, 0x03),
        (7, 125, 0x02), (8, 125, 0x02), (9, 125, 0x02), (10, 125, 0x02),
        (11, 125, 0x02), (12, 125, 0x02), (13, 125, 0x02), (14, 125, 0x03),
    ],
    // 92
    [
        (3, 60, 0x02), (4, 60, 0x02), (5, 60, 0x02), (6, 60, 0x03),
        (3, 96, 0x02), (4, 96, 0x02), (5, 96, 0x02), (6, 96, 0x03),
        (3, 123, 0x02), (4, 123, 0x02), (5, 123, 0x02), (6, 123, 0x03),
        (98, 0, 0x00), (99, 0, 0x00), (100, 0, 0x00), (101, 0, 0x00),
    ],
    // 93
    [
        (7, 60, 0x02), (8, 60, 0x02), (9, 60, 0x02), (10, 60, 0x02),
        (11, 60, 0x02), (12, 60, 0x02), (13, 60, 0x02), (14, 60, 0x03),
        (7, 96, 0x02), (8, 96, 0x02), (9, 96, 0x02), (10, 96, 0x02),
        (11, 96, 0x02), (12, 96, 0x02), (13, 96, 0x02), (14, 96, 0x03),
    ],
    // 94
    [
        (7, 123, 0x02), (8, 123, 0x02), (9, 123, 0x02), (10, 123, 0x02),
        (11, 123, 0x02), (12, 123, 0x02), (13, 123, 0x02), (14, 123, 0x03),
        (102, 0, 0x00), (103, 0, 0x00), (104, 0, 0x00), (105, 0, 0x00),
        (106, 0, 0x00), (107, 0, 0x00), (108, 0, 0x00), (109, 0, 0x00),
    ],
    // 95
    [
        (0, 92, 0x03), (0, 195, 0x03), (0, 208, 0x03), (110, 0, 0x00),
        (111, 0, 0x00), (112, 0, 0x00), (113, 0, 0x00), (114, 0, 0x00),
        (115, 0, 0x00), (116, 0, 0x00), (117, 0, 0x00), (118, 0, 0x00),
        (119, 0, 0x00), (120, 0, 0x00), (121, 0, 0x00), (122, 0, 0x00),
    ],
    // 96
    [
        (1, 92, 0x02), (2, 92, 0x03), (1, 195, 0x02), (2, 195, 0x03),
        (1, 208, 0x02), (2, 208, 0x03), (0, 128, 0x03), (0, 130, 0x03),
        (0, 131, 0x03), (0, 162, 0x03), (0, 184, 0x03), (0, 194, 0x03),
        (0, 224, 0x03), (0, 226, 0x03), (123, 0, 0x00), (124, 0, 0x00),
    ],
    // 97
    [
        (125, 0, 0x00), (126, 0, 0x00), (127, 0, 0x00), (128, 0, 0x00),
        (129, 0, 0x00), (130, 0, 0x00), (131, 0, 0x00), (132, 0, 0x00),
        (133, 0, 0x00), (134, 0, 0x00), (135, 0, 0x00), (136, 0, 0x00),
        (137, 0, 0x00), (138, 0, 0x00), (139, 0, 0x00), (140, 0, 0x00),
    ],
    // 98
    [
        (3, 92, 0x02), (4, 92, 0x02), (5, 92, 0x02), (6, 92, 0x03),
        (3, 195, 0x02), (4, 195, 0x02), (5, 195, 0x02), (6, 195, 0x03),
        (3, 208, 0x02), (4, 208, 0x02), (5, 208, 0x02), (6, 208, 0x03),
        (1, 128, 0x02), (2, 128, 0x03), (1, 130, 0x02), (2, 130, 0x03),
    ],
    // 99
    [
        (1, 131, 0x02), (2, 131, 0x03), (1, 162, 0x02), (2, 162, 0x03),
        (1, 184, 0x02), (2, 184, 0x03), (1, 194, 0x02), (2, 194, 0x03),
        (1, 224, 0x02), (2, 224, 0x03), (1, 226, 0x02), (2, 226, 0x03),
        (0, 153, 0x03), (0, 161, 0x03), (0, 167, 0x03), (0, 172, 0x03),
    ],
    // 100
    [
        (0, 176, 0x03), (0, 177, 0x03), (0, 179, 0x03), (0, 209, 0x03),
        (0, 216, 0x03), (0, 217, 0x03), (0, 227, 0x03), (0, 229, 0x03),
        (0, 230, 0x03), (141, 0, 0x00), (142, 0, 0x00), (143, 0, 0x00),
        (144, 0, 0x00), (145, 0, 0x00), (146, 0, 0x00), (147, 0, 0x00),
    ],
    // 101
    [
        (148, 0, 0x00), (149, 0, 0x00), (150, 0, 0x00), (151, 0, 0x00),
        (152, 0, 0x00), (153, 0, 0x00), (154, 0, 0x00), (155, 0, 0x00),
        (156, 0, 0x00), (157, 0, 0x00), (158, 0, 0x00), (159, 0, 0x00),
        (160, 0, 0x00), (161, 0, 0x00), (162, 0, 0x00), (163, 0, 0x00),
    ],
    // 102
    [
        (7, 92, 0x02), (8, 92, 0x02), (9, 92, 0x02), (10, 92, 0x02),
        (11, 92, 0x02), (12, 92, 0x02), (13, 92, 0x02), (14, 92, 0x03),
        (7, 195, 0x02), (8, 195, 0x02), (9, 195, 0x02), (10, 195, 0x02),
        (11, 195, 0x02), (12, 195, 0x02), (13, 195, 0x02), (14, 195, 0x03),
    ],
    // 103
    [
        (7, 208, 0x02), (8, 208, 0x02), (9, 208, 0x02), (10, 208, 0x02),
        (11, 208, 0x02), (12, 208, 0x02), (13, 208, 0x02), (14, 208, 0x03),
        (3, 128, 0x02), (4, 128, 0x02), (5, 128, 0x02), (6, 128, 0x03),
        (3, 130, 0x02), (4, 130, 0x02), (5, 130, 0x02), (6, 130, 0x03),
    ],
    // 104
    [
        (3, 131, 0x02), (4, 131, 0x02), (5, 131, 0x02), (6, 131, 0x03),
        (3, 162, 0x02), (4, 162, 0x02), (5, 162, 0x02), (6, 162, 0x03),
        (3, 184, 0x02), (4, 184, 0x02), (5, 184, 0x02), (6, 184, 0x03),
        (3, 194, 0x02), (4, 194, 0x02), (5, 194, 0x02), (6, 194, 0x03),
    ],
    // 105
    [
        (3, 224, 0x02), (4, 224, 0x02), (5, 224, 0x02), (6, 224, 0x03),
        (3, 226, 0x02), (4, 226, 0x02), (5, 226, 0x02), (6, 226, 0x03),
        (1, 153, 0x02), (2, 153, 0x03), (1, 161, 0x02), (2, 161, 0x03),
        (1, 167, 0x02), (2, 167, 0x03), (1, 172, 0x02), (2, 172, 0x03),
    ],
    // 106
    [
        (1, 176, 0x02), (2, 176, 0x03), (1, 177, 0x02), (2, 177, 0x03),
        (1, 179, 0x02), (2, 179, 0x03), (1, 209, 0x02), (2, 209, 0x03),
        (1, 216, 0x02), (2, 216, 0x03), (1, 217, 0x02), (2, 217, 0x03),
        (1, 227, 0x02), (2, 227, 0x03), (1, 229, 0x02), (2, 229, 0x03),
    ],
    // 107
    [
        (1, 230, 0x02), (2, 230, 0x03), (0, 129, 0x03), (0, 132, 0x03),
        (0, 133, 0x03), (0, 134, 0x03), (0, 136, 0x03), (0, 146, 0x03),
        (0, 154, 0x03), (0, 156, 0x03), (0, 160, 0x03), (0, 163, 0x03),
        (0, 164, 0x03), (0, 169, 0x03), (0, 170, 0x03), (0, 173, 0x03),
    ],
    // 108
    [
        (0, 178, 0x03), (0, 181, 0x03), (0, 185, 0x03), (0, 186, 0x03),
        (0, 187, 0x03), (0, 189, 0x03), (0, 190, 0x03), (0, 196, 0x03),
        (0, 198, 0x03), (0, 228, 0x03), (0, 232, 0x03), (0, 233, 0x03),
        (164, 0, 0x00), (165, 0, 0x00), (166, 0, 0x00), (167, 0, 0x00),
    ],
    // 109
    [
        (168, 0, 0x00), (169, 0, 0x00), (170, 0, 0x00), (171, 0, 0x00),
        (172, 0, 0x00), (173, 0, 0x00), (174, 0, 0x00), (175, 0, 0x00),
        (176, 0, 0x00), (177, 0, 0x00), (178, 0, 0x00), (179, 0, 0x00),
        (180, 0, 0x00), (181, 0, 0x00), (182, 0, 0x00), (183, 0, 0x00),
    ],
    // 110
    [
        (7, 128, 0x02), (8, 128, 0x02), (9, 128, 0x02), (10, 128, 0x02),
        (11, 128, 0x02), (12, 128, 0x02), (13, 128, 0x02), (14, 128, 0x03),
        (7, 130, 0x02), (8, 130, 0x02), (9, 130, 0x02), (10, 130, 0x02),
        (11, 130, 0x02), (12, 130, 0x02), (13, 130, 0x02), (14, 130, 0x03),
    ],
    // 111
    [
        (7, 131, 0x02), (8, 131, 0x02), (9, 131, 0x02), (10, 131, 0x02),
        (11, 131, 0x02), (12, 131, 0x02), (13, 131, 0x02), (14, 131, 0x03),
        (7, 162, 0x02), (8, 162, 0x02), (9, 162, 0x02), (10, 162, 0x02),
        (11, 162, 0x02), (12, 162, 0x02), (13, 162, 0x02), (14, 162, 0x03),
    ],
    // 112
    [
        (7, 184, 0x02), (8, 184, 0x02), (9, 184, 0x02), (10, 184, 0x02),
        (11, 184, 0x02), (12, 184, 0x02), (13, 184, 0x02), (14, 184, 0x03),
        (7, 194, 0x02), (8, 194, 0x02), (9, 194, 0x02), (10, 194, 0x02),
        (11, 194, 0x02), (12, 194, 0x02), (13, 194, 0x02), (14, 194, 0x03),
    ],
    // 113
    [
        (7, 224, 0x02), (8, 224, 0x02), (9, 224, 0x02), (10, 224, 0x02),
        (11, 224, 0x02), (12, 224, 0x02), (13, 224, 0x02), (14, 224, 0x03),
        (7, 226, 0x02), (8, 226, 0x02), (9, 226, 0x02), (10, 226, 0x02),
        (11, 226, 0x02), (12, 226, 0x02), (13, 226, 0x02), (14, 226, 0x03),
    ],
    // 114
    [
        (3, 153, 0x02), (4, 153, 0x02), (5, 153, 0x02), (6, 153, 0x03),
        (3, 161, 0x02), (4, 161, 0x02), (5, 161, 0x02), (6, 161, 0x03),
        (3, 167, 0x02), (4, 167, 0x02), (5, 167, 0x02), (6, 167, 0x03),
        (3, 172, 0x02), (4, 172, 0x02), (5, 172, 0x02), (6, 172, 0x03),
    ],
    // 115
    [
        (3, 176, 0x02), (4, 176, 0x02), (5, 176, 0x02), (6, 176, 0x03),
        (3, 177, 0x02), (4, 177, 0x02), (5, 177, 0x02), (6, 177, 0x03),
        (3, 179, 0x02), (4, 179, 0x02), (5, 179, 0x02), (6, 179, 0x03),
        (3, 209, 0x02), (4, 209, 0x02), (5, 209, 0x02), (6, 209, 0x03),
    ],
    // 116
    [
        (3, 216, 0x02), (4, 216, 0x02), (5, 216, 0x02), (6, 216, 0x03),
        (3, 217, 0x02), (4, 217, 0x02), (5, 217, 0x02), (6, 217, 0x03),
        (3, 227, 0x02), (4, 227, 0x02), (5, 227, 0x02), (6, 227, 0x03),
        (3, 229, 0x02), (4, 229, 0x02), (5, 229, 0x02), (6, 229, 0x03),
    ],
    // 117
    [
        (3, 230, 0x02), (4, 230, 0x02), (5, 230, 0x02), (6, 230, 0x03),
        (1, 129, 0x02), (2, 129, 0x03), (1, 132, 0x02), (2, 132, 0x03),
        (1, 133, 0x02), (2, 133, 0x03), (1, 134, 0x02), (2, 134, 0x03),
        (1, 136, 0x02), (2, 136, 0x03), (1, 146, 0x02), (2, 146, 0x03),
    ],
    // 118
    [
        (1, 154, 0x02), (2, 154, 0x03), (1, 156, 0x02), (2, 156, 0x03),
        (1, 160, 0x02), (2, 160, 0x03), (1, 163, 0x02), (2, 163, 0x03),
        (1, 164, 0x02), (2, 164, 0x03), (1, 169, 0x02), (2, 169, 0x03),
        (1, 170, 0x02), (2, 170, 0x03), (1, 173, 0x02), (2, 173, 0x03),
    ],
    // 119
    [
        (1, 178, 0x02), (2, 178, 0x03), (1, 181, 0x02), (2, 181, 0x03),
        (1, 185, 0x02), (2, 185, 0x03), (1, 186, 0x02), (2, 186, 0x03),
        (1, 187, 0x02), (2, 187, 0x03), (1, 189, 0x02), (2, 189, 0x03),
        (1, 190, 0x02), (2, 190, 0x03), (1, 196, 0x02), (2, 196, 0x03),
    ],
    // 120
    [
        (1, 198, 0x02), (2, 198, 0x03), (1, 228, 0x02), (2, 228, 0x03),
        (1, 232, 0x02), (2, 232, 0x03), (1, 233, 0x02), (2, 233, 0x03),
        (0, 1, 0x03), (0, 135, 0x03), (0, 137, 0x03), (0, 138, 0x03),
        (0, 139, 0x03), (0, 140, 0x03), (0, 141, 0x03), (0, 143, 0x03),
    ],
    // 121
    [
        (0, 147, 0x03), (0, 149, 0x03), (0, 150, 0x03), (0, 151, 0x03),
        (0, 152, 0x03), (0, 155, 0x03), (0, 157, 0x03), (0, 158, 0x03),
        (0, 165, 0x03), (0, 166, 0x03), (0, 168, 0x03), (0, 174, 0x03),
        (0, 175, 0x03), (0, 180, 0x03), (0, 182, 0x03), (0, 183, 0x03),
    ],
    // 122
    [
        (0, 188, 0x03), (0, 191, 0x03), (0, 197, 0x03), (0, 231, 0x03),
        (0, 239, 0x03), (184, 0, 0x00), (185, 0, 0x00), (186, 0, 0x00),
        (187, 0, 0x00), (188, 0, 0x00), (189, 0, 0x00), (190, 0, 0x00),
        (191, 0, 0x00), (192, 0, 0x00), (193, 0, 0x00), (194, 0, 0x00),
    ],
    // 123
    [
        (7, 153, 0x02), (8, 153, 0x02), (9, 153, 0x02), (10, 153, 0x02),
        (11, 153, 0x02), (12, 153, 0x02), (13, 153, 0x02), (14, 153, 0x03),
        (7, 161, 0x02), (8, 161, 0x02), (9, 161, 0x02), (10, 161, 0x02),
        (11, 161, 0x02), (12, 161, 0x02), (13, 161, 0x02), (14, 161, 0x03),
    ],
    // 124
    [
        (7, 167, 0x02), (8, 167, 0x02), (9, 167, 0x02), (10, 167, 0x02),
        (11, 167, 0x02), (12, 167, 0x02), (13, 167, 0x02), (14, 167, 0x03),
        (7, 172, 0x02), (8, 172, 0x02), (9, 172, 0x02), (10, 172, 0x02),
        (11, 172, 0x02), (12, 172, 0x02), (13, 172, 0x02), (14, 172, 0x03),
    ],
    // 125
    [
        (7, 176, 0x02), (8, 176, 0x02), (9, 176, 0x02), (10, 176, 0x02),
        (11, 176, 0x02), (12, 176, 0x02), (13, 176, 0x02), (14, 176, 0x03),
        (7, 177, 0x02), (8, 177, 0x02), (9, 177, 0x02), (10, 177, 0x02),
        (11, 177, 0x02), (12, 177, 0x02), (13, 177, 0x02), (14, 177, 0x03),
    ],
    // 126
    [
        (7, 179, 0x02), (8, 179, 0x02), (9, 179, 0x02), (10, 179, 0x02),
        (11, 179, 0x02), (12, 179, 0x02), (13, 179, 0x02), (14, 179, 0x03),
        (7, 209, 0x02), (8, 209, 0x02), (9, 209, 0x02), (10, 209, 0x02),
        (11, 209, 0x02), (12, 209, 0x02), (13, 209, 0x02), (14, 209, 0x03),
    ],
    // 127
    [
        (7, 216, 0x02), (8, 216, 0x02), (9, 216, 0x02), (10, 216, 0x02),
        (11, 216, 0x02), (12, 216, 0x02), (13, 216, 0x02), (14, 216, 0x03),
        (7, 217, 0x02), (8, 217, 0x02), (9, 217, 0x02), (10, 217, 0x02),
        (11, 217, 0x02), (12, 217, 0x02), (13, 217, 0x02), (14, 217, 0x03),
    ],
    // 128
    [
        (7, 227, 0x02), (8, 227, 0x02), (9, 227, 0x02), (10, 227, 0x02),
        (11, 227, 0x02), (12, 227, 0x02), (13, 227, 0x02), (14, 227, 0x03),
        (7, 229, 0x02), (8, 229, 0x02), (9, 229, 0x02), (10, 229, 0x02),
        (11, 229, 0x02), (12, 229, 0x02), (13, 229, 0x02), (14, 229, 0x03),
    ],
    // 129
    [
        (7, 230, 0x02), (8, 230, 0x02), (9, 230, 0x02), (10, 230, 0x02),
        (11, 230, 0x02), (12, 230, 0x02), (13, 230, 0x02), (14, 230, 0x03),
        (3, 129, 0x02), (4, 129, 0x02), (5, 129, 0x02), (6, 129, 0x03),
        (3, 132, 0x02), (4, 132, 0x02), (5, 132, 0x02), (6, 132, 0x03),
    ],
    // 130
    [
        (3, 133, 0x02), (4, 133, 0x02), (5, 133, 0x02), (6, 133, 0x03),
        (3, 134, 0x02), (4, 134, 0x02), (5, 134, 0x02), (6, 134, 0x03),
        (3, 136, 0x02), (4, 136, 0x02), (5, 136, 0x02), (6, 136, 0x03),
        (3, 146, 0x02), (4, 146, 0x02), (5, 146, 0x02), (6, 146, 0x03),
    ],
    // 131
    [
        (3, 154, 0x02), (4, 154, 0x02), (5, 154, 0x02), (6, 154, 0x03),
        (3, 156, 0x02), (4, 156, 0x02), (5, 156, 0x02), (6, 156, 0x03),
        (3, 160, 0x02), (4, 160, 0x02), (5, 160, 0x02), (6, 160, 0x03),
        (3, 163, 0x02), (4, 163, 0x02), (5, 163, 0x02), (6, 163, 0x03),
    ],
    // 132
    [
        (3, 164, 0x02), (4, 164, 0x02), (5, 164, 0x02), (6, 164, 0x03),
        (3, 169, 0x02), (4, 169, 0x02), (5, 169, 0x02), (6, 169, 0x03),
        (3, 170, 0x02), (4, 170, 0x02), (5, 170, 0x02), (6, 170, 0x03),
        (3, 173, 0x02), (4, 173, 0x02), (5, 173, 0x02), (6, 173, 0x03),
    ],
    // 133
    [
        (3, 178, 0x02), (4, 178, 0x02), (5, 178, 0x02), (6, 178, 0x03),
        (3, 181, 0x02), (4, 181, 0x02), (5, 181, 0x02), (6, 181, 0x03),
        (3, 185, 0x02), (4, 185, 0x02), (5, 185, 0x02), (6, 185, 0x03),
        (3, 186, 0x02), (4, 186, 0x02), (5, 186, 0x02), (6, 186, 0x03),
    ],
    // 134
    [
        (3, 187, 0x02), (4, 187, 0x02), (5, 187, 0x02), (6, 187, 0x03),
        (3, 189, 0x02), (4, 189, 0x02), (5, 189, 0x02), (6, 189, 0x03),
        (3, 190, 0x02), (4, 190, 0x02), (5, 190, 0x02), (6, 190, 0x03),
        (3, 196, 0x02), (4, 196, 0x02), (5, 196, 0x02), (6, 196, 0x03),
    ],
    // 135
    [
        (3, 198, 0x02), (4, 198, 0x02), (5, 198, 0x02), (6, 198, 0x03),
        (3, 228, 0x02), (4, 228, 0x02), (5, 228, 0x02), (6, 228, 0x03),
        (3, 232, 0x02), (4, 232, 0x02), (5, 232, 0x02), (6, 232, 0x03),
        (3, 233, 0x02), (4, 233, 0x02), (5, 233, 0x02), (6, 233, 0x03),
    ],
    // 136
    [
        (1, 1, 0x02), (2, 1, 0x03), (1, 135, 0x02), (2, 135, 0x03),
        (1, 137, 0x02), (2, 137, 0x03), (1, 138, 0x02), (2, 138, 0x03),
        (1, 139, 0x02), (2, 139, 0x03), (1, 140, 0x02), (2, 140, 0x03),
        (1, 141, 0x02), (2, 141, 0x03), (1, 143, 0x02), (2, 143, 0x03),
    ],
    // 137
    [
        (1, 147, 0x02), (2, 147, 0x03), (1, 149, 0x02), (2, 149, 0x03),
        (1, 150, 0x02), (2, 150, 0x03), (1, 151, 0x02), (2, 151, 0x03),
        (1, 152, 0x02), (2, 152, 0x03), (1, 155, 0x02), (2, 155, 0x03),
        (1, 157, 0x02), (2, 157, 0x03), (1, 158, 0x02), (2, 158, 0x03),
    ],
    // 138
    [
        (1, 165, 0x02), (2, 165, 0x03), (1, 166, 0x02), (2, 166, 0x03),
        (1, 168, 0x02), (2, 168, 0x03), (1, 174, 0x02), (2, 174, 0x03),
        (1, 175, 0x02), (2, 175, 0x03), (1, 180, 0x02), (2, 180, 0x03),
        (1, 182, 0x02), (2, 182, 0x03), (1, 183, 0x02), (2, 183, 0x03),
    ],
    // 139
    [
        (1, 188, 0x02), (2, 188, 0x03), (1, 191, 0x02), (2, 191, 0x03),
        (1, 197, 0x02), (2, 197, 0x03), (1, 231, 0x02), (2, 231, 0x03),
        (1, 239, 0x02), (2, 239, 0x03), (0, 9, 0x03), (0, 142, 0x03),
        (0, 144, 0x03), (0, 145, 0x03), (0, 148, 0x03), (0, 159, 0x03),
    ],
    // 140
    [
        (0, 171, 0x03), (0, 206, 0x03), (0, 215, 0x03), (0, 225, 0x03),
        (0, 236, 0x03), (0, 237, 0x03), (195, 0, 0x00), (196, 0, 0x00),
        (197, 0, 0x00), (198, 0, 0x00), (199, 0, 0x00), (200, 0, 0x00),
        (201, 0, 0x00), (202, 0, 0x00), (203, 0, 0x00), (204, 0, 0x00),
    ],
    // 141
    [
        (7, 129, 0x02), (8, 129, 0x02), (9, 129, 0x02), (10, 129, 0x02),
        (11, 129, 0x02), (12, 129, 0x02), (13, 129, 0x02), (14, 129, 0x03),
        (7, 132, 0x02), (8, 132, 0x02), (9, 132, 0x02), (10, 132, 0x02),
        (11, 132, 0x02), (12, 132, 0x02), (13, 132, 0x02), (14, 132, 0x03),
    ],
    // 142
    [
        (7, 133, 0x02), (8, 133, 0x02), (9, 133, 0x02), (10, 133, 0x02),
        (11, 133, 0x02), (12, 133, 0x02), (13, 133, 0x02), (14, 133, 0x03),
        (7, 134, 0x02), (8, 134, 0x02), (9, 134, 0x02), (10, 134, 0x02),
        (11, 134, 0x02), (12, 134, 0x02), (13, 134, 0x02), (14, 134, 0x03),
    ],
    // 143
    [
        (7, 136, 0x02), (8, 136, 0x02), (9, 136, 0x02), (10, 136, 0x02),
        (11, 136, 0x02), (12, 136, 0x02), (13, 136, 0x02), (14, 136, 0x03),
        (7, 146, 0x02), (8, 146, 0x02), (9, 146, 0x02), (10, 146, 0x02),
        (11, 146, 0x02), (12, 146, 0x02), (13, 146, 0x02), (14, 146, 0x03),
    ],
    // 144
    [
        (7, 154, 0x02), (8, 154, 0x02), (9, 154, 0x02), (10, 154, 0x02),
        (11, 154, 0x02), (12, 154, 0x02), (13, 154, 0x02), (14, 154, 0x03),
        (7, 156, 0x02), (8, 156, 0x02), (9, 156, 0x02), (10, 156, 0x02),
        (11, 156, 0x02), (12, 156, 0x02), (13, 156, 0x02), (14, 156, 0x03),
    ],
    // 145
    [
        (7, 160, 0x02), (8, 160, 0x02), (9, 160, 0x02), (10, 160, 0x02),
        (11, 160, 0x02), (12, 160, 0x02), (13, 160, 0x02), (14, 160, 0x03),
        (7, 163, 0x02), (8, 163, 0x02), (9, 163, 0x02), (10, 163, 0x02),
        (11, 163, 0x02), (12, 163, 0x02), (13, 163, 0x02), (14, 163, 0x03),
    ],
    // 146
    [
        (7, 164, 0x02), (8, 164, 0x02), (9, 164, 0x02), (10, 164, 0x02),
        (11, 164, 0x02), (12, 164, 0x02), (13, 164, 0x02), (14, 164, 0x03),
        (7, 169, 0x02), (8, 169, 0x02), (9, 169, 0x02), (10, 169, 0x02),
        (11, 169, 0x02), (12, 169, 0x02), (13, 169, 0x02), (14, 169, 0x03),
    ],
    // 147
    [
        (7, 170, 0x02), (8, 170, 0x02), (9, 170, 0x02), (10, 170, 0x02),
        (11, 170, 0x02), (12, 170, 0x02), (13, 170, 0x02), (14, 170, 0x03),
        (7, 173, 0x02), (8, 173, 0x02), (9, 173, 0x02), (10, 173, 0x02),
        (11, 173, 0x02), (12, 173, 0x02), (13, 173, 0x02), (14, 173, 0x03),
    ],
    // 148
    [
        (7, 178, 0x02), (8, 178, 0x02), (9, 178, 0x02), (10, 178, 0x02),
        (11, 178, 0x02), (12, 178, 0x02), (13, 178, 0x02), (14, 178, 0x03),
        (7, 181, 0x02), (8, 181, 0x02), (9, 181, 0x02), (10, 181, 0x02),
        (11, 181, 0x02), (12, 181, 0x02), (13, 181, 0x02), (14, 181, 0x03),
    ],
    // 149
    [
        (7, 185, 0x02), (8, 185, 0x02), (9, 185, 0x02), (10, 185, 0x02),
        (11, 185, 0x02), (12, 185, 0x02), (13, 185, 0x02), (14, 185, 0x03),
        (7, 186, 0x02), (8, 186, 0x02), (9, 186, 0x02), (10, 186, 0x02),
        (11, 186, 0x02), (12, 186, 0x02), (13, 186, 0x02), (14, 186, 0x03),
    ],
    // 150
    [
        (7, 187, 0x02), (8, 187, 0x02), (9, 187, 0x02), (10, 187, 0x02),
        (11, 187, 0x02), (12, 187, 0x02), (13, 187, 0x02), (14, 187, 0x03),
        (7, 189, 0x02), (8, 189, 0x02), (9, 189, 0x02), (10, 189, 0x02),
        (11, 189, 0x02), (12, 189, 0x02), (13, 189, 0x02), (14, 189, 0x03),
    ],
    // 151
    [
        (7, 190, 0x02), (8, 190, 0x02), (9, 190, 0x02), (10, 190, 0x02),
        (11, 190, 0x02), (12, 190, 0x02), (13, 190, 0x02), (14, 190, 0x03),
        (7, 196, 0x02), (8, 196, 0x02), (9, 196, 0x02), (10, 196, 0x02),
        (11, 196, 0x02), (12, 196, 0x02), (13, 196, 0x02), (14, 196, 0x03),
    ],
    // 152
    [
        (7, 198, 0x02), (8, 198, 0x02), (9, 198, 0x02), (10, 198, 0x02),
        (11, 198, 0x02), (12, 198, 0x02), (13, 198, 0x02), (14, 198, 0x03),
        (7, 228, 0x02), (8, 228, 0x02), (9, 228, 0x02), (10, 228, 0x02),
        (11, 228, 0x02), (12, 228, 0x02), (13, 228, 0x02), (14, 228, 0x03),
    ],
    // 153
    [
        (7, 232, 0x02), (8, 232, 0x02), (9, 232, 0x02), (10, 232, 0x02),
        (11, 232, 0x02), (12, 232, 0x02), (13, 232, 0x02), (14, 232, 0x03),
        (7, 233, 0x02), (8, 233, 0x02), (9, 233, 0x02), (10, 233, 0x02),
        (11, 233, 0x02), (12, 233, 0x02), (13, 233, 0x02), (14, 233, 0x03),
    ],
    // 154
    [
        (3, 1, 0x02), (4, 1, 0x02), (5, 1, 0x02), (6, 1, 0x03),
        (3, 135, 0x02), (4, 135, 0x02), (5, 135, 0x02), (6, 135, 0x03),
        (3, 137, 0x02), (4, 137, 0x02), (5, 137, 0x02), (6, 137, 0x03),
        (3, 138, 0x02), (4, 138, 0x02), (5, 138, 0x02), (6, 138, 0x03),
    ],
    // 155
    [
        (3, 139, 0x02), (4, 139, 0x02), (5, 139, 0x02), (6, 139, 0x03),
        (3, 140, 0x02), (4, 140, 0x02), (5, 140, 0x02), (6, 140, 0x03),
        (3, 141, 0x02), (4, 141, 0x02), (5, 141, 0x02), (6, 141, 0x03),
        (3, 143, 0x02), (4, 143, 0x02), (5, 143, 0x02), (6, 143, 0x03),
    ],
    // 156
    [
        (3, 147, 0x02), (4, 147, 0x02), (5, 147, 0x02), (6, 147, 0x03),
        (3, 149, 0x02), (4, 149, 0x02), (5, 149, 0x02), (6, 149, 0x03),
        (3, 150, 0x02), (4, 150, 0x02), (5, 150, 0x02), (6, 150, 0x03),
        (3, 151, 0x02), (4, 151, 0x02), (5, 151, 0x02), (6, 151, 0x03),
    ],
    // 157
    [
        (3, 152, 0x02), (4, 152, 0x02), (5, 152, 0x02), (6, 152, 0x03),
        (3, 155, 0x02), (4, 155, 0x02), (5, 155, 0x02), (6, 155, 0x03),
        (3, 157, 0x02), (4, 157, 0x02), (5, 157, 0x02), (6, 157, 0x03),
        (3, 158, 0x02), (4, 158, 0x02), (5, 158, 0x02), (6, 158, 0x03),
    ],
    // 158
    [
        (3, 165, 0x02), (4, 165, 0x02), (5, 165, 0x02), (6, 165, 0x03),
        (3, 166, 0x02), (4, 166, 0x02), (5, 166, 0x02), (6, 166, 0x03),
        (3, 168, 0x02), (4, 168, 0x02), (5, 168, 0x02), (6, 168, 0x03),
        (3, 174, 0x02), (4, 174, 0x02), (5, 174, 0x02), (6, 174, 0x03),
    ],
    // 159
    [
        (3, 175, 0x02), (4, 175, 0x02), (5, 175, 0x02), (6, 175, 0x03),
        (3, 180, 0x02), (4, 180, 0x02), (5, 180, 0x02), (6, 180, 0x03),
        (3, 182, 0x02), (4, 182, 0x02), (5, 182, 0x02), (6, 182, 0x03),
        (3, 183, 0x02), (4, 183, 0x02), (5, 183, 0x02), (6, 183, 0x03),
    ],
    // 160
    [
        (3, 188, 0x02), (4, 188, 0x02), (5, 188, 0x02), (6, 188, 0x03),
        (3, 191, 0x02), (4, 191, 0x02), (5, 191, 0x02), (6, 191, 0x03),
        (3, 197, 0x02), (4, 197, 0x02), (5, 197, 0x02), (6, 197, 0x03),
        (3, 231, 0x02), (4, 231, 0x02), (5, 231, 0x02), (6, 231, 0x03),
    ],
    // 161
    [
        (3, 239, 0x02), (4, 239, 0x02), (5, 239, 0x02), (6, 239, 0x03),
        (1, 9, 0x02), (2, 9, 0x03), (1, 142, 0x02), (2, 142, 0x03),
        (1, 144, 0x02), (2, 144, 0x03), (1, 145, 0x02), (2, 145, 0x03),
        (1, 148, 0x02), (2, 148, 0x03), (1, 159, 0x02), (2, 159, 0x03),
    ],
    // 162
    [
        (1, 171, 0x02), (2, 171, 0x03), (1, 206, 0x02), (2, 206, 0x03),
        (1, 215, 0x02), (2, 215, 0x03), (1, 225, 0x02), (2, 225, 0x03),
        (1, 236, 0x02), (2, 236, 0x03), (1, 237, 0x02), (2, 237, 0x03),
        (0, 199, 0x03), (0, 207, 0x03), (0, 234, 0x03), (0, 235, 0x03),
    ],
    // 163
    [
        (205, 0, 0x00), (206, 0, 0x00), (207, 0, 0x00), (208, 0, 0x00),
        (209, 0, 0x00), (210, 0, 0x00), (211, 0, 0x00), (212, 0, 0x00),
        (213, 0, 0x00), (214, 0, 0x00), (215, 0, 0x00), (216, 0, 0x00),
        (217, 0, 0x00), (218, 0, 0x00), (219, 0, 0x00), (220, 0, 0x00),
    ],
    // 164
    [
        (7, 1, 0x02), (8, 1, 0x02), (9, 1, 0x02), (10, 1, 0x02),
        (11, 1, 0x02), (12, 1, 0x02), (13, 1, 0x02), (14, 1, 0x03),
        (7, 135, 0x02), (8, 135, 0x02), (9, 135, 0x02), (10, 135, 0x02),
        (11, 135, 0x02), (12, 135, 0x02), (13, 135, 0x02), (14, 135, 0x03),
    ],
    // 165
    [
        (7, 137, 0x02), (8, 137, 0x02), (9, 137, 0x02), (10, 137, 0x02),
        (11, 137, 0x02), (12, 137, 0x02), (13, 137, 0x02), (14, 137, 0x03),
        (7, 138, 0x02), (8, 138, 0x02), (9, 138, 0x02), (10, 138, 0x02),
        (11, 138, 0x02), (12, 138, 0x02), (13, 138, 0x02), (14, 138, 0x03),
    ],
    // 166
    [
        (7, 139, 0x02), (8, 139, 0x02), (9, 139, 0x02), (10, 139, 0x02),
        (11, 139, 0x02), (12, 139, 0x02), (13, 139, 0x02), (14, 139, 0x03),
        (7, 140, 0x02), (8, 140, 0x02), (9, 140, 0x02), (10, 140, 0x02),
        (11, 140, 0x02), (12, 140, 0x02), (13, 140, 0x02), (14, 140, 0x03),
    ],
    // 167
    [
        (7, 141, 0x02), (8, 141, 0x02), (9, 141, 0x02), (10, 141, 0x02),
        (11, 141, 0x02), (12, 141, 0x02), (13, 141, 0x02), (14, 141, 0x03),
        (7, 143, 0x02), (8, 143, 0x02), (9, 143, 0x02), (10, 143, 0x02),
        (11, 143, 0x02), (12, 143, 0x02), (13, 143, 0x02), (14, 143, 0x03),
    ],
    // 168
    [
        (7, 147, 0x02), (8, 147, 0x02), (9, 147, 0x02), (10, 147, 0x02),
        (11, 147, 0x02), (12, 147, 0x02), (13, 147, 0x02), (14, 147, 0x03),
        (7, 149, 0x02), (8, 149, 0x02), (9, 149, 0x02), (10, 149, 0x02),
        (11, 149, 0x02), (12, 149, 0x02), (13, 149, 0x02), (14, 149, 0x03),
    ],
    // 169
    [
        (7, 150, 0x02), (8, 150, 0x02), (9, 150, 0x02), (10, 150, 0x02),
        (11, 150, 0x02), (12, 150, 0x02), (13, 150, 0x02), (14, 150, 0x03),
        (7, 151, 0x02), (8, 151, 0x02), (9, 151, 0x02), (10, 151, 0x02),
        (11, 151, 0x02), (12, 151, 0x02), (13, 151, 0x02), (14, 151, 0x03),
    ],
    // 170
    [
        (7, 152, 0x02), (8, 152, 0x02), (9, 152, 0x02), (10, 152, 0x02),
        (11, 152, 0x02), (12, 152, 0x02), (13, 152, 0x02), (14, 152, 0x03),
        (7, 155, 0x02), (8, 155, 0x02), (9, 155, 0x02), (10, 155, 0x02),
        (11, 155, 0x02), (12, 155, 0x02), (13, 155, 0x02), (14, 155, 0x03),
    ],
    // 171
    [
        (7, 157, 0x02), (8, 157, 0x02), (9, 157, 0x02), (10, 157, 0x02),
        (11, 157, 0x02), (12, 157, 0x02), (13, 157, 0x02), (14, 157, 0x03),
        (7, 158, 0x02), (8, 158, 0x02), (9, 158, 0x02), (10, 158, 0x02),
        (11, 158, 0x02), (12, 158, 0x02), (13, 158, 0x02), (14, 158, 0x03),
    ],
    // 172
    [
        (7, 165, 0x02), (8, 165, 0x02), (9, 165, 0x02), (10, 165, 0x02),
        (11, 165, 0x02), (12, 165, 0x02), (13, 165, 0x02), (14, 165, 0x03),
        (7, 166, 0x02), (8, 166, 0x02), (9, 166, 0x02), (10, 166, 0x02),
        (11, 166, 0x02), (12, 166, 0x02), (13, 166, 0x02), (14, 166, 0x03),
    ],
    // 173
    [
        (7, 168, 0x02), (8, 168, 0x02), (9, 168, 0x02), (10, 168, 0x02),
        (11, 168, 0x02), (12, 168, 0x02), (13, 168, 0x02), (14, 168, 0x03),
        (7, 174, 0x02), (8, 174, 0x02), (9, 174, 0x02), (10, 174, 0x02),
        (11, 174, 0x02), (12, 174, 0x02), (13, 174, 0x02), (14, 174, 0x03),
    ],
    // 174
    [
        (7, 175, 0x02), (8, 175, 0x02), (9, 175, 0x02), (10, 175, 0x02),
        (11, 175, 0x02), (12, 175, 0x02), (13, 175, 0x02), (14, 175, 0x03),
        (7, 180, 0x02), (8, 180, 0x02), (9, 180, 0x02), (10, 180, 0x02),
        (11, 180, 0x02), (12, 180, 0x02), (13, 180, 0x02), (14, 180, 0x03),
    ],
    // 175
    [
        (7, 182, 0x02), (8, 182, 0x02), (9, 182, 0x02), (10, 182, 0x02),
        (11, 182, 0x02), (12, 182, 0x02), (13, 182, 0x02), (14, 182, 0x03),
        (7, 183, 0x02), (8, 183, 0x02), (9, 183, 0x02), (10, 183, 0x02),
        (11, 183, 0x02), (12, 183, 0x02), (13, 183, 0x02), (14, 183, 0x03),
    ],
    // 176
    [
        (7, 188, 0x02), (8, 188, 0x02), (9, 188, 0x02), (10, 188, 0x02),
        (11, 188, 0x02), (12, 188, 0x02), (13, 188, 0x02), (14, 188, 0x03),
        (7, 191, 0x02), (8, 191, 0x02), (9, 191, 0x02), (10, 191, 0x02),
        (11, 191, 0x02), (12, 191, 0x02), (13, 191, 0x02), (14, 191, 0x03),
    ],
    // 177
    [
        (7, 197, 0x02), (8, 197, 0x02), (9, 197, 0x02), (10, 197, 0x02),
        (11, 197, 0x02), (12, 197, 0x02), (13, 197, 0x02), (14, 197, 0x03),
        (7, 231, 0x02), (8, 231, 0x02), (9, 231, 0x02), (10, 231, 0x02),
        (11, 231, 0x02), (12, 231, 0x02), (13, 231, 0x02), (14, 231, 0x03),
    ],
    // 178
    [
        (7, 239, 0x02), (8, 239, 0x02), (9, 239, 0x02), (10, 239, 0x02),
        (11, 239, 0x02), (12, 239, 0x02), (13, 239, 0x02), (14, 239, 0x03),
        (3, 9, 0x02), (4, 9, 0x02), (5, 9, 0x02), (6, 9, 0x03),
        (3, 142, 0x02), (4, 142, 0x02), (5, 142, 0x02), (6, 142, 0x03),
    ],
    // 179
    [
        (3, 144, 0x02), (4, 144, 0x02), (5, 144, 0x02), (6, 144, 0x03),
        (3, 145, 0x02), (4, 145, 0x02), (5, 145, 0x02), (6, 145, 0x03),
        (3, 148, 0x02), (4, 148, 0x02), (5, 148, 0x02), (6, 148, 0x03),
        (3, 159, 0x02), (4, 159, 0x02), (5, 159, 0x02), (6, 159, 0x03),
    ],
    // 180
    [
        (3, 171, 0x02), (4, 171, 0x02), (5, 171, 0x02), (6, 171, 0x03),
        (3, 206, 0x02), (4, 206, 0x02), (5, 206, 0x02), (6, 206, 0x03),
        (3, 215, 0x02), (4, 215, 0x02), (5, 215, 0x02), (6, 215, 0x03),
        (3, 225, 0x02), (4, 225, 0x02), (5, 225, 0x02), (6, 225, 0x03),
    ],
    // 181
    [
        (3, 236, 0x02), (4, 236, 0x02), (5, 236, 0x02), (6, 236, 0x03),
        (3, 237, 0x02), (4, 237, 0x02), (5, 237, 0x02), (6, 237, 0x03),
        (1, 199, 0x02), (2, 199, 0x03), (1, 207, 0x02), (2, 207, 0x03),
        (1, 234, 0x02), (2, 234, 0x03), (1, 235, 0x02), (2, 235, 0x03),
    ],
    // 182
    [
        (0, 192, 0x03), (0, 193, 0x03), (0, 200, 0x03), (0, 201, 0x03),
        (0, 202, 0x03), (0, 205, 0x03), (0, 210, 0x03), (0, 213, 0x03),
        (0, 218, 0x03), (0, 219, 0x03), (0, 238, 0x03), (0, 240, 0x03),
        (0, 242, 0x03), (0, 243, 0x03), (0, 255, 0x03), (221, 0, 0x00),
    ],
    // 183
    [
        (222, 0, 0x00), (223, 0, 0x00), (224, 0, 0x00), (225, 0, 0x00),
        (226, 0, 0x00), (227, 0, 0x00), (228, 0, 0x00), (229, 0, 0x00),
        (230, 0, 0x00), (231, 0, 0x00), (232, 0, 0x00), (233, 0, 0x00),
        (234, 0, 0x00), (235, 0, 0x00), (236, 0, 0x00), (237, 0, 0x00),
    ],
    // 184
    [
        (7, 9, 0x02), (8, 9, 0x02), (9, 9, 0x02), (10, 9, 0x02),
        (11, 9, 0x02), (12, 9, 0x02), (13, 9, 0x02), (14, 9, 0x03),
        (7, 142, 0x02), (8, 142, 0x02), (9, 142, 0x02), (10, 142, 0x02),
        (11, 142, 0x02), (12, 142, 0x02), (13, 142, 0x02), (14, 142, 0x03),
    ],
    // 185
    [
        (7, 144, 0x02), (8, 144, 0x02), (9, 144, 0x02), (10, 144, 0x02),
        (11, 144, 0x02), (12, 144, 0x02), (13, 144, 0x02), (14, 144, 0x03),
        (7, 145, 0x02), (8, 145, 0x02), (9, 145, 0x02), (10, 145, 0x02),
        (11, 145, 0x02), (12, 145, 0x02), (13, 145, 0x02), (14, 145, 0x03),
    ],
    // 186
    [
        (7, 148, 0x02), (8, 148, 0x02), (9, 148, 0x02), (10, 148, 0x02),
        (11, 148, 0x02), (12, 148, 0x02), (13, 148, 0x02), (14, 148, 0x03),
        (7, 159, 0x02), (8, 159, 0x02), (9, 159, 0x02), (10, 159, 0x02),
        (11, 159, 0x02), (12, 159, 0x02), (13, 159, 0x02), (14, 159, 0x03),
    ],
    // 187
    [
        (7, 171, 0x02), (8, 171, 0x02), (9, 171, 0x02), (10, 171, 0x02),
        (11, 171, 0x02), (12, 171, 0x02), (13, 171, 0x02), (14, 171, 0x03),
        (7, 206, 0x02), (8, 206, 0x02), (9, 206, 0x02), (10, 206, 0x02),
        (11, 206, 0x02), (12, 206, 0x02), (13, 206, 0x02), (14, 206, 0x03),
    ],
    // 188
    [
        (7, 215, 0x02), (8, 215, 0x02), (9, 215, 0x02), (10, 215, 0x02),
        (11, 215, 0x02), (12, 215, 0x02), (13, 215, 0x02), (14, 215, 0x03),
        (7, 225, 0x02), (8, 225, 0x02), (9, 225, 0x02), (10, 225, 0x02),
        (11, 225, 0x02), (12, 225, 0x02), (13, 225, 0x02), (14, 225, 0x03),
    ],
    // 189
    [
        (7, 236, 0x02), (8, 236, 0x02), (9, 236, 0x02), (10, 236, 0x02),
        (11, 236, 0x02), (12, 236, 0x02), (13, 236, 0x02), (14, 236, 0x03),
        (7, 237, 0x02), (8, 237, 0x02), (9, 237, 0x02), (10, 237, 0x02),
        (11, 237, 0x02), (12, 237, 0x02), (13, 237, 0x02), (14, 237, 0x03),
    ],
    // 190
    [
        (3, 199, 0x02), (4, 199, 0x02), (5, 199, 0x02), (6, 199, 0x03),
        (3, 207, 0x02), (4, 207, 0x02), (5, 207, 0x02), (6, 207, 0x03),
        (3, 234, 0x02), (4, 234, 0x02), (5, 234, 0x02), (6, 234, 0x03),
        (3, 235, 0x02), (4, 235, 0x02), (5, 235, 0x02), (6, 235, 0x03),
    ],
    // 191
    [
        (1, 192, 0x02), (2, 192, 0x03), (1, 193, 0x02), (2, 193, 0x03),
        (1, 200, 0x02), (2, 200, 0x03), (1, 201, 0x02), (2, 201, 0x03),
        (1, 202, 0x02), (2, 202, 0x03), (1, 205, 0x02), (2, 205, 0x03),
        (1, 210, 0x02), (2, 210, 0x03), (1, 213, 0x02), (2, 213, 0x03),
    ],
    // 192
    [
        (1, 218, 0x02), (2, 218, 0x03), (1, 219, 0x02), (2, 219, 0x03),
        (1, 238, 0x02), (2, 238, 0x03), (1, 240, 0x02), (2, 240, 0x03),
        (1, 242, 0x02), (2, 242, 0x03), (1, 243, 0x02), (2, 243, 0x03),
        (1, 255, 0x02), (2, 255, 0x03), (0, 203, 0x03), (0, 204, 0x03),
    ],
    // 193
    [
        (0, 211, 0x03), (0, 212, 0x03), (0, 214, 0x03), (0, 221, 0x03),
        (0, 222, 0x03), (0, 223, 0x03), (0, 241, 0x03), (0, 244, 0x03),
        (0, 245, 0x03), (0, 246, 0x03), (0, 247, 0x03), (0, 248, 0x03),
        (0, 250, 0x03), (0, 251, 0x03), (0, 252, 0x03), (0, 253, 0x03),
    ],
    // 194
    [
        (0, 254, 0x03), (238, 0, 0x00), (239, 0, 0x00), (240, 0, 0x00),
        (241, 0, 0x00), (242, 0, 0x00), (243, 0, 0x00), (244, 0, 0x00),
        (245, 0, 0x00), (246, 0, 0x00), (247, 0, 0x00), (248, 0, 0x00),
        (249, 0, 0x00), (250, 0, 0x00), (251, 0, 0x00), (252, 0, 0x00),
    ],
    // 195
    [
        (7, 199, 0x02), (8, 199, 0x02), (9, 199, 0x02), (10, 199, 0x02),
        (11, 199, 0x02), (12, 199, 0x02), (13, 199, 0x02), (14, 199, 0x03),
        (7, 207, 0x02), (8, 207, 0x02), (9, 207, 0x02), (10, 207, 0x02),
        (11, 207, 0x02), (12, 207, 0x02), (13, 207, 0x02), (14, 207, 0x03),
    ],
    // 196
    [
        (7, 234, 0x02), (8, 234, 0x02), (9, 234, 0x02), (10, 234, 0x02),
        (11, 234, 0x02), (12, 234, 0x02), (13, 234, 0x02), (14, 234, 0x03),
        (7, 235, 0x02), (8, 235, 0x02), (9, 235, 0x02), (10, 235, 0x02),
        (11, 235, 0x02), (12, 235, 0x02), (13, 235, 0x02), (14, 235, 0x03),
    ],
    // 197
    [
        (3, 192, 0x02), (4, 192, 0x02), (5, 192, 0x02), (6, 192, 0x03),
        (3, 193, 0x02), (4, 193, 0x02), (5, 193, 0x02), (6, 193, 0x03),
        (3, 200, 0x02), (4, 200, 0x02), (5, 200, 0x02), (6, 200, 0x03),
        (3, 201, 0x02), (4, 201, 0x02), (5, 201, 0x02), (6, 201, 0x03),
    ],
    // 198
    [
        (3, 202, 0x02), (4, 202, 0x02), (5, 202, 0x02), (6, 202, 0x03),
        (3, 205, 0x02), (4, 205, 0x02), (5, 205, 0x02), (6, 205, 0x03),
        (3, 210, 0x02), (4, 210, 0x02), (5, 210, 0x02), (6, 210, 0x03),
        (3, 213, 0x02), (4, 213, 0x02), (5, 213, 0x02), (6, 213, 0x03),
    ],
    // 199
    [
        (3, 218, 0x02), (4, 218, 0x02), (5, 218, 0x02), (6, 218, 0x03),
        (3, 219, 0x02), (4, 219, 0x02), (5, 219, 0x02), (6, 219, 0x03),
        (3, 238, 0x02), (4, 238, 0x02), (5, 238, 0x02), (6, 238, 0x03),
        (3, 240, 0x02), (4, 240, 0x02), (5, 240, 0x02), (6, 240, 0x03),
    ],
    // 200
    [
        (3, 242, 0x02), (4, 242, 0x02), (5, 242, 0x02), (6, 242, 0x03),
        (3, 243, 0x02), (4, 243, 0x02), (5, 243, 0x02), (6, 243, 0x03),
        (3, 255, 0x02), (4, 255, 0x02), (5, 255, 0x02), (6, 255, 0x03),
        (1, 203, 0x02), (2, 203, 0x03), (1, 204, 0x02), (2, 204, 0x03),
    ],
    // 201
    [
        (1, 211, 0x02), (2, 211, 0x03), (1, 212, 0x02), (2, 212, 0x03),
        (1, 214, 0x02), (2, 214, 0x03), (1, 221, 0x02), (2, 221, 0x03),
        (1, 222, 0x02), (2, 222, 0x03), (1, 223, 0x02), (2, 223, 0x03),
        (1, 241, 0x02), (2, 241, 0x03), (1, 244, 0x02), (2, 244, 0x03),
    ],
    // 202
    [
        (1, 245, 0x02), (2, 245, 0x03), (1, 246, 0x02), (2, 246, 0x03),
        (1, 247, 0x02), (2, 247, 0x03), (1, 248, 0x02), (2, 248, 0x03),
        (1, 250, 0x02), (2, 250, 0x03), (1, 251, 0x02), (2, 251, 0x03),
        (1, 252, 0x02), (2, 252, 0x03), (1, 253, 0x02), (2, 253, 0x03),
    ],
    // 203
    [
        (1, 254, 0x02), (2, 254, 0x03), (0, 2, 0x03), (0, 3, 0x03),
        (0, 4, 0x03), (0, 5, 0x03), (0, 6, 0x03), (0, 7, 0x03),
        (0, 8, 0x03), (0, 11, 0x03), (0, 12, 0x03), (0, 14, 0x03),
        (0, 15, 0x03), (0, 16, 0x03), (0, 17, 0x03), (0, 18, 0x03),
    ],
    // 204
    [
        (0, 19, 0x03), (0, 20, 0x03), (0, 21, 0x03), (0, 23, 0x03),
        (0, 24, 0x03), (0, 25, 0x03), (0, 26, 0x03), (0, 27, 0x03),
        (0, 28, 0x03), (0, 29, 0x03), (0, 30, 0x03), (0, 31, 0x03),
        (0, 127, 0x03), (0, 220, 0x03), (0, 249, 0x03), (253, 0, 0x00),
    ],
    // 205
    [
        (7, 192, 0x02), (8, 192, 0x02), (9, 192, 0x02), (10, 192, 0x02),
        (11, 192, 0x02), (12, 192, 0x02), (13, 192, 0x02), (14, 192, 0x03),
        (7, 193, 0x02), (8, 193, 0x02), (9, 193, 0x02), (10, 193, 0x02),
        (11, 193, 0x02), (12, 193, 0x02), (13, 193, 0x02), (14, 193, 0x03),
    ],
    // 206
    [
        (7, 200, 0x02), (8, 200, 0x02), (9, 200, 0x02), (10, 200, 0x02),
        (11, 200, 0x02), (12, 200, 0x02), (13, 200, 0x02), (14, 200, 0x03),
        (7, 201, 0x02), (8, 201, 0x02), (9, 201, 0x02), (10, 201, 0x02),
        (11, 201, 0x02), (12, 201, 0x02), (13, 201, 0x02), (14, 201, 0x03),
    ],
    // 207
    [
        (7, 202, 0x02), (8, 202, 0x02), (9, 202, 0x02), (10, 202, 0x02),
        (11, 202, 0x02), (12, 202, 0x02), (13, 202, 0x02), (14, 202, 0x03),
        (7, 205, 0x02), (8, 205, 0x02), (9, 205, 0x02), (10, 205, 0x02),
        (11, 205, 0x02), (12, 205, 0x02), (13, 205, 0x02), (14, 205, 0x03),
    ],
    // 208
    [
        (7, 210, 0x02), (8, 210, 0x02), (9, 210, 0x02), (10, 210, 0x02),
        (11, 210, 0x02), (12, 210, 0x02), (13, 210, 0x02), (14, 210, 0x03),
        (7, 213, 0x02), (8, 213, 0x02), (9, 213, 0x02), (10, 213, 0x02),
        (11, 213, 0x02), (12, 213, 0x02), (13, 213, 0x02), (14, 213, 0x03),
    ],
    // 209
    [
        (7, 218, 0x02), (8, 218, 0x02), (9, 218, 0x02), (10, 218, 0x02),
        (11, 218, 0x02), (12, 218, 0x02), (13, 218, 0x02), (14, 218, 0x03),
        (7, 219, 0x02), (8, 219, 0x02), (9, 219, 0x02), (10, 219, 0x02),
        (11, 219, 0x02), (12, 219, 0x02), (13, 219, 0x02), (14, 219, 0x03),
    ],
    // 210
    [
        (7, 238, 0x02), (8, 238, 0x02), (9, 238, 0x02), (10, 238, 0x02),
        (11, 238, 0x02), (12, 238, 0x02), (13, 238, 0x02), (14, 238, 0x03),
        (7, 240, 0x02), (8, 240, 0x02), (9, 240, 0x02), (10, 240, 0x02),
        (11, 240, 0x02), (12, 240, 0x02), (13, 240, 0x02), (14, 240, 0x03),
    ],
    // 211
    [
        (7, 242, 0x02), (8, 242, 0x02), (9, 242, 0x02), (10, 242, 0x02),
        (11, 242, 0x02), (12, 242, 0x02), (13, 242, 0x02), (14, 242, 0x03),
        (7, 243, 0x02), (8, 243, 0x02), (9, 243, 0x02), (10, 243, 0x02),
        (11, 243, 0x02), (12, 243, 0x02), (13, 243, 0x02), (14, 243, 0x03),
    ],
    // 212
    [
        (7, 255, 0x02), (8, 255, 0x02), (9, 255, 0x02), (10, 255, 0x02),
        (11, 255, 0x02), (12, 255, 0x02), (13, 255, 0x02), (14, 255, 0x03),
        (3, 203, 0x02), (4, 203, 0x02), (5, 203, 0x02), (6, 203, 0x03),
        (3, 204, 0x02), (4, 204, 0x02), (5, 204, 0x02), (6, 204, 0x03),
    ],
    // 213
    [
        (3, 211, 0x02), (4, 211, 0x02), (5, 211, 0x02), (6, 211, 0x03),
        (3, 212, 0x02), (4, 212, 0x02), (5, 212, 0x02), (6, 212, 0x03),
        (3, 214, 0x02), (4, 214, 0x02), (5, 214, 0x02), (6, 214, 0x03),
        (3, 221, 0x02), (4, 221, 0x02), (5, 221, 0x02), (6, 221, 0x03),
    ],
    // 214
    [
        (3, 222, 0x02), (4, 222, 0x02), (5, 222, 0x02), (6, 222, 0x03),
        (3, 223, 0x02), (4, 223, 0x02), (5, 223, 0x02), (6, 223, 0x03),
        (3, 241, 0x02), (4, 241, 0x02), (5, 241, 0x02), (6, 241, 0x03),
        (3, 244, 0x02), (4, 244, 0x02), (5, 244, 0x02), (6, 244, 0x03),
    ],
    // 215
    [
        (3, 245, 0x02), (4, 245, 0x02), (5, 245, 0x02), (6, 245, 0x03),
        (3, 246, 0x02), (4, 246, 0x02), (5, 246, 0x02), (6, 246, 0x03),
        (3, 247, 0x02), (4, 247, 0x02), (5, 247, 0x02), (6, 247, 0x03),
        (3, 248, 0x02), (4, 248, 0x02), (5, 248, 0x02), (6, 248, 0x03),
    ],
    // 216
    [
        (3, 250, 0x02), (4, 250, 0x02), (5, 250, 0x02), (6, 250, 0x03),
        (3, 251, 0x02), (4, 251, 0x02), (5, 251, 0x02), (6, 251, 0x03),
        (3, 252, 0x02), (4, 252, 0x02), (5, 252, 0x02), (6, 252, 0x03),
        (3, 253, 0x02), (4, 253, 0x02), (5, 253, 0x02), (6, 253, 0x03),
    ],
    // 217
    [
        (3, 254, 0x02), (4, 254, 0x02), (5, 254, 0x02), (6, 254, 0x03),
        (1, 2, 0x02), (2, 2, 0x03), (1, 3, 0x02), (2, 3, 0x03),
        (1, 4, 0x02), (2, 4, 0x03), (1, 5, 0x02), (2, 5, 0x03),
        (1, 6, 0x02), (2, 6, 0x03), (1, 7, 0x02), (2, 7, 0x03),
    ],
    // 218
    [
        (1, 8, 0x02), (2, 8, 0x03), (1, 11, 0x02), (2, 11, 0x03),
        (1, 12, 0x02), (2, 12, 0x03), (1, 14, 0x02), (2, 14, 0x03),
        (1, 15, 0x02), (2, 15, 0x03), (1, 16, 0x02), (2, 16, 0x03),
        (1, 17, 0x02), (2, 17, 0x03), (1, 18, 0x02), (2, 18, 0x03),
    ],
    // 219
    [
        (1, 19, 0x02), (2, 19, 0x03), (1, 20, 0x02), (2, 20, 0x03),
        (1, 21, 0x02), (2, 21, 0x03), (1, 23, 0x02), (2, 23, 0x03),
        (1, 24, 0x02), (2, 24, 0x03), (1, 25, 0x02), (2, 25, 0x03),
        (1, 26, 0x02), (2, 26, 0x03), (1, 27, 0x02), (2, 27, 0x03),
    ],
    // 220
    [
        (1, 28, 0x02), (2, 28, 0x03), (1, 29, 0x02), (2, 29, 0x03),
        (1, 30, 0x02), (2, 30, 0x03), (1, 31, 0x02), (2, 31, 0x03),
        (1, 127, 0x02), (2, 127, 0x03), (1, 220, 0x02), (2, 220, 0x03),
        (1, 249, 0x02), (2, 249, 0x03), (254, 0, 0x00), (255, 0, 0x00),
    ],
    // 221
    [
        (7, 203, 0x02), (8, 203, 0x02), (9, 203, 0x02), (10, 203, 0x02),
        (11, 203, 0x02), (12, 203, 0x02), (13, 203, 0x02), (14, 203, 0x03),
        (7, 204, 0x02), (8, 204, 0x02), (9, 204, 0x02), (10, 204, 0x02),
        (11, 204, 0x02), (12, 204, 0x02), (13, 204, 0x02), (14, 204, 0x03),
    ],
    // 222
    [
        (7, 211, 0x02), (8, 211, 0x02), (9, 211, 0x02), (10, 211, 0x02),
        (11, 211, 0x02), (12, 211, 0x02), (13, 211, 0x02), (14, 211, 0x03),
        (7, 212, 0x02), (8, 212, 0x02), (9, 212, 0x02), (10, 212, 0x02),
        (11, 212, 0x02), (12, 212, 0x02), (13, 212, 0x02), (14, 212, 0x03),
    ],
    // 223
    [
        (7, 214, 0x02), (8, 214, 0x02), (9, 214, 0x02), (10, 214, 0x02),
        (11, 214, 0x02), (12, 214, 0x02), (13, 214, 0x02), (14, 214, 0x03),
        (7, 221, 0x02), (8, 221, 0x02), (9, 221, 0x02), (10, 221, 0x02),
        (11, 221, 0x02), (12, 221, 0x02), (13, 221, 0x02), (14, 221, 0x03),
    ],
    // 224
    [
        (7, 222, 0x02), (8, 222, 0x02), (9, 222, 0x02), (10, 222, 0x02),
        (11, 222, 0x02), (12, 222, 0x02), (13, 222, 0x02), (14, 222, 0x03),
        (7, 223, 0x02), (8, 223, 0x02), (9, 223, 0x02), (10, 223, 0x02),
        (11, 223, 0x02), (12, 223, 0x02), (13, 223, 0x02), (14, 223, 0x03),
    ],
    // 225
    [
        (7, 241, 0x02), (8, 241, 0x02), (9, 241, 0x02), (10, 241, 0x02),
        (11, 241, 0x02), (12, 241, 0x02), (13, 241, 0x02), (14, 241, 0x03),
        (7, 244, 0x02), (8, 244, 0x02), (9, 244, 0x02), (10, 244, 0x02),
        (11, 244, 0x02), (12, 244, 0x02), (13, 244, 0x02), (14, 244, 0x03),
    ],
    // 226
    [
        (7, 245, 0x02), (8, 245, 0x02), (9, 245, 0x02), (10, 245, 0x02),
        (11, 245, 0x02), (12, 245, 0x02), (13, 245, 0x02), (14, 245, 0x03),
        (7, 246, 0x02), (8, 246, 0x02), (9, 246, 0x02), (10, 246, 0x02),
        (11, 246, 0x02), (12, 246, 0x02), (13, 246, 0x02), (14, 246, 0x03),
    ],
    // 227
    [
        (7, 247, 0x02), (8, 247, 0x02), (9, 247, 0x02), (10, 247, 0x02),
        (11, 247, 0x02), (12, 247, 0x02), (13, 247, 0x02), (14, 247, 0x03),
        (7, 248, 0x02), (8, 248, 0x02), (9, 248, 0x02), (10, 248, 0x02),
        (11, 248, 0x02), (12, 248, 0x02), (13, 248, 0x02), (14, 248, 0x03),
    ],
    // 228
    [
        (7, 250, 0x02), (8, 250, 0x02), (9, 250, 0x02), (10, 250, 0x02),
        (11, 250, 0x02), (12, 250, 0x02), (13, 250, 0x02), (14, 250, 0x03),
        (7, 251, 0x02), (8, 251, 0x02), (9, 251, 0x02), (10, 251, 0x02),
        (11, 251, 0x02), (12, 251, 0x02), (13, 251, 0x02), (14, 251, 0x03),
    ],
    // 229
    [
        (7, 252, 0x02), (8, 252, 0x02), (9, 252, 0x02), (10, 252, 0x02),
        (11, 252, 0x02), (12, 252, 0x02), (13, 252, 0x02), (14, 252, 0x03),
        (7, 253, 0x02), (8, 253, 0x02), (9, 253, 0x02), (10, 253, 0x02),
        (11, 253, 0x02), (12, 253, 0x02), (13, 253, 0x02), (14, 253, 0x03),
    ],
    // 230
    [
        (7, 254, 0x02), (8, 254, 0x02), (9, 254, 0x02), (10, 254, 0x02),
        (11, 254, 0x02), (12, 254, 0x02), (13, 254, 0x02), (14, 254, 0x03),
        (3, 2, 0x02), (4, 2, 0x02), (5, 2, 0x02), (6, 2, 0x03),
        (3, 3, 0x02), (4, 3, 0x02), (5, 3, 0x02), (6, 3, 0x03),
    ],
    // 231
    [
        (3, 4, 0x02), (4, 4, 0x02), (5, 4, 0x02), (6, 4, 0x03),
        (3, 5, 0x02), (4, 5, 0x02), (5, 5, 0x02), (6, 5, 0x03),
        (3, 6, 0x02), (4, 6, 0x02), (5, 6, 0x02), (6, 6, 0x03),
        (3, 7, 0x02), (4, 7, 0x02), (5, 7, 0x02), (6, 7, 0x03),
    ],
    // 232
    [
        (3, 8, 0x02), (4, 8, 0x02), (5, 8, 0x02), (6, 8, 0x03),
        (3, 11, 0x02), (4, 11, 0x02), (5, 11, 0x02), (6, 11, 0x03),
        (3, 12, 0x02), (4, 12, 0x02), (5, 12, 0x02), (6, 12, 0x03),
        (3, 14, 0x02), (4, 14, 0x02), (5, 14, 0x02), (6, 14, 0x03),
    ],
    // 233
    [
        (3, 15, 0x02), (4, 15, 0x02), (5, 15, 0x02), (6, 15, 0x03),
        (3, 16, 0x02), (4, 16, 0x02), (5, 16, 0x02), (6, 16, 0x03),
        (3, 17, 0x02), (4, 17, 0x02), (5, 17, 0x02), (6, 17, 0x03),
        (3, 18, 0x02), (4, 18, 0x02), (5, 18, 0x02), (6, 18, 0x03),
    ],
    // 234
    [
        (3, 19, 0x02), (4, 19, 0x02), (5, 19, 0x02), (6, 19, 0x03),
        (3, 20, 0x02), (4, 20, 0x02), (5, 20, 0x02), (6, 20, 0x03),
        (3, 21, 0x02), (4, 21, 0x02), (5, 21, 0x02), (6, 21, 0x03),
        (3, 23, 0x02), (4, 23, 0x02), (5, 23, 0x02), (6, 23, 0x03),
    ],
    // 235
    [
        (3, 24, 0x02), (4, 24, 0x02), (5, 24, 0x02), (6, 24, 0x03),
        (3, 25, 0x02), (4, 25, 0x02), (5, 25, 0x02), (6, 25, 0x03),
        (3, 26, 0x02), (4, 26, 0x02), (5, 26, 0x02), (6, 26, 0x03),
        (3, 27, 0x02), (4, 27, 0x02), (5, 27, 0x02), (6, 27, 0x03),
    ],
    // 236
    [
        (3, 28, 0x02), (4, 28, 0x02), (5, 28, 0x02), (6, 28, 0x03),
        (3, 29, 0x02), (4, 29, 0x02), (5, 29, 0x02), (6, 29, 0x03),
        (3, 30, 0x02), (4, 30, 0x02), (5, 30, 0x02), (6, 30, 0x03),
        (3, 31, 0x02), (4, 31, 0x02), (5, 31, 0x02), (6, 31, 0x03),
    ],
    // 237
    [
        (3, 127, 0x02), (4, 127, 0x02), (5, 127, 0x02), (6, 127, 0x03),
        (3, 220, 0x02), (4, 220, 0x02), (5, 220, 0x02), (6, 220, 0x03),
        (3, 249, 0x02), (4, 249, 0x02), (5, 249, 0x02), (6, 249, 0x03),
        (0, 10, 0x03), (0, 13, 0x03), (0, 22, 0x03), (0, 0, 0x04),
    ],
    // 238
    [
        (7, 2, 0x02), (8, 2, 0x02), (9, 2, 0x02), (10, 2, 0x02),
        (11, 2, 0x02), (12, 2, 0x02), (13, 2, 0x02), (14, 2, 0x03),
        (7, 3, 0x02), (8, 3, 0x02), (9, 3, 0x02), (10, 3, 0x02),
        (11, 3, 0x02), (12, 3, 0x02), (13, 3, 0x02), (14, 3, 0x03),
    ],
    // 239
    [
        (7, 4, 0x02), (8, 4, 0x02), (9, 4, 0x02), (10, 4, 0x02),
        (11, 4, 0x02), (12, 4, 0x02), (13, 4, 0x02), (14, 4, 0x03),
        (7, 5, 0x02), (8, 5, 0x02), (9, 5, 0x02), (10, 5, 0x02),
        (11, 5, 0x02), (12, 5, 0x02), (13, 5, 0x02), (14, 5, 0x03),
    ],
    // 240
    [
        (7, 6, 0x02), (8, 6, 0x02), (9, 6, 0x02), (10, 6, 0x02),
        (11, 6, 0x02), (12, 6, 0x02), (13, 6, 0x02), (14, 6, 0x03),
        (7, 7, 0x02), (8, 7, 0x02), (9, 7, 0x02), (10, 7, 0x02),
        (11, 7, 0x02), (12, 7, 0x02), (13, 7, 0x02), (14, 7, 0x03),
    ],
    // 241
    [
        (7, 8, 0x02), (8, 8, 0x02), (9, 8, 0x02), (10, 8, 0x02),
        (11, 8, 0x02), (12, 8, 0x02), (13, 8, 0x02), (14, 8, 0x03),
        (7, 11, 0x02), (8, 11, 0x02), (9, 11, 0x02), (10, 11, 0x02),
        (11, 11, 0x02), (12, 11, 0x02), (13, 11, 0x02), (14, 11, 0x03),
    ],
    // 242
    [
        (7, 12, 0x02), (8, 12, 0x02), (9, 12, 0x02), (10, 12, 0x02),
        (11, 12, 0x02), (12, 12, 0x02), (13, 12, 0x02), (14, 12, 0x03),
        (7, 14, 0x02), (8, 14, 0x02), (9, 14, 0x02), (10, 14, 0x02),
        (11, 14, 0x02), (12, 14, 0x02), (13, 14, 0x02), (14, 14, 0x03),
    ],
    // 243
    [
        (7, 15, 0x02), (8, 15, 0x02), (9, 15, 0x02), (10, 15, 0x02),
        (11, 15, 0x02), (12, 15, 0x02), (13, 15, 0x02), (14, 15, 0x03),
        (7, 16, 0x02), (8, 16, 0x02), (9, 16, 0x02), (10, 16, 0x02),
        (11, 16, 0x02), (12, 16, 0x02), (13, 16, 0x02), (14, 16, 0x03),
    ],
    // 244
    [
        (7, 17, 0x02), (8, 17, 0x02), (9, 17, 0x02), (10, 17, 0x02),
        (11, 17, 0x02), (12, 17, 0x02), (13, 17, 0x02), (14, 17, 0x03),
        (7, 18, 0x02), (8, 18, 0x02), (9, 18, 0x02), (10, 18, 0x02),
        (11, 18, 0x02), (12, 18, 0x02), (13, 18, 0x02), (14, 18, 0x03),
    ],
    // 245
    [
        (7, 19, 0x02), (8, 19, 0x02), (9, 19, 0x02), (10, 19, 0x02),
        (11, 19, 0x02), (12, 19, 0x02), (13, 19, 0x02), (14, 19, 0x03),
        (7, 20, 0x02), (8, 20, 0x02), (9, 20, 0x02), (10, 20, 0x02),
        (11, 20, 0x02), (12, 20, 0x02), (13, 20, 0x02), (14, 20, 0x03),
    ],
    // 246
    [
        (7, 21, 0x02), (8, 21, 0x02), (9, 21, 0x02), (10, 21, 0x02),
        (11, 21, 0x02), (12, 21, 0x02), (13, 21, 0x02), (14, 21, 0x03),
        (7, 23, 0x02), (8, 23, 0x02), (9, 23, 0x02), (10, 23, 0x02),
        (11, 23, 0x02), (12, 23, 0x02), (13, 23, 0x02), (14, 23, 0x03),
    ],
    // 247
    [
        (7, 24, 0x02), (8, 24, 0x02), (9, 24, 0x02), (10, 24, 0x02),
        (11, 24, 0x02), (12, 24, 0x02), (13, 24, 0x02), (14, 24, 0x03),
        (7, 25, 0x02), (8, 25, 0x02), (9, 25, 0x02), (10, 25, 0x02),
        (11, 25, 0x02), (12, 25, 0x02), (13, 25, 0x02), (14, 25, 0x03),
    ],
    // 248
    [
        (7, 26, 0x02), (8, 26, 0x02), (9, 26, 0x02), (10, 26, 0x02),
        (11, 26, 0x02), (12, 26, 0x02), (13, 26, 0x02), (14, 26, 0x03),
        (7, 27, 0x02), (8, 27, 0x02), (9, 27, 0x02), (10, 27, 0x02),
        (11, 27, 0x02), (12, 27, 0x02), (13, 27, 0x02), (14, 27, 0x03),
    ],
    // 249
    [
        (7, 28, 0x02), (8, 28, 0x02), (9, 28, 0x02), (10, 28, 0x02),
        (11, 28, 0x02), (12, 28, 0x02), (13, 28, 0x02), (14, 28, 0x03),
        (7, 29, 0x02), (8, 29, 0x02), (9, 29, 0x02), (10, 29, 0x02),
        (11, 29, 0x02), (12, 29, 0x02), (13, 29, 0x02), (14, 29, 0x03),
    ],
    // 250
    [
        (7, 30, 0x02), (8, 30, 0x02), (9, 30, 0x02), (10, 30, 0x02),
        (11, 30, 0x02), (12, 30, 0x02), (13, 30, 0x02), (14, 30, 0x03),
        (7, 31, 0x02), (8, 31, 0x02), (9, 31, 0x02), (10, 31, 0x02),
        (11, 31, 0x02), (12, 31, 0x02), (13, 31, 0x02), (14, 31, 0x03),
    ],
    // 251
    [
        (7, 127, 0x02), (8, 127, 0x02), (9, 127, 0x02), (10, 127, 0x02),
        (11, 127, 0x02), (12, 127, 0x02), (13, 127, 0x02), (14, 127, 0x03),
        (7, 220, 0x02), (8, 220, 0x02), (9, 220, 0x02), (10, 220, 0x02),
        (11, 220, 0x02), (12, 220, 0x02), (13, 220, 0x02), (14, 220, 0x03),
    ],
    // 252
    [
        (7, 249, 0x02), (8, 249, 0x02), (9, 249, 0x02), (10, 249, 0x02),
        (11, 249, 0x02), (12, 249, 0x02), (13, 249, 0x02), (14, 249, 0x03),
        (1, 10, 0x02), (2, 10, 0x03), (1, 13, 0x02), (2, 13, 0x03),
        (1, 22, 0x02), (2, 22, 0x03), (0, 0, 0x04), (0, 0, 0x04),
    ],
    // 253
    [
        (3, 10, 0x02), (4, 10, 0x02), (5, 10, 0x02), (6, 10, 0x03),
        (3, 13, 0x02), (4, 13, 0x02), (5, 13, 0x02), (6, 13, 0x03),
        (3, 22, 0x02), (4, 22, 0x02), (5, 22, 0x02), (6, 22, 0x03),
        (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04),
    ],
    // 254
    [
        (7, 10, 0x02), (8, 10, 0x02), (9, 10, 0x02), (10, 10, 0x02),
        (11, 10, 0x02), (12, 10, 0x02), (13, 10, 0x02), (14, 10, 0x03),
        (7, 13, 0x02), (8, 13, 0x02), (9, 13, 0x02), (10, 13, 0x02),
        (11, 13, 0x02), (12, 13, 0x02), (13, 13, 0x02), (14, 13, 0x03),
    ],
    // 255
    [
        (7, 22, 0x02), (8, 22, 0x02), (9, 22, 0x02), (10, 22, 0x02),
        (11, 22, 0x02), (12, 22, 0x02), (13, 22, 0x02), (14, 22, 0x03),
        (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04),
        (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04), (0, 0, 0x04),
    ],
];
