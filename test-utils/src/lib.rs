// Copyright (c) 2021-2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod random;

use serialization::{WireDecodeAll, WireEncode};

/// All copies of `bytes` that differ from it in exactly one byte (each byte xor-ed with `mask`).
pub fn all_single_byte_mutations(bytes: &[u8], mask: u8) -> impl Iterator<Item = Vec<u8>> + '_ {
    assert_ne!(mask, 0, "a zero mask does not mutate anything");
    (0..bytes.len()).map(move |pos| {
        let mut mutated = bytes.to_vec();
        mutated[pos] ^= mask;
        mutated
    })
}

/// Get all variants of the object with single-bit flips (decoding may fail).
pub fn try_all_single_bit_mutations<T>(obj: &T) -> impl Iterator<Item = serialization::Result<T>>
where
    T: WireDecodeAll + WireEncode,
{
    let obj_enc = obj.wire_encode();
    (0..(obj_enc.len() * 8)).map(move |bit| {
        let (byte, bit) = (bit / 8, bit % 8);
        let mut mutated = obj_enc.clone();
        mutated[byte] ^= 1u8 << bit;
        T::wire_decode_all(&mutated)
    })
}
