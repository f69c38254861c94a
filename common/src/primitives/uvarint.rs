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

//! Unsigned LEB128 integers, the framing used inside CIDs and multihashes.

use super::cid::CidError;

/// A u64 never needs more than ten 7-bit groups.
pub const MAX_LEN: usize = 10;

pub fn encode_to(mut value: u64, dest: &mut Vec<u8>) {
    loop {
        let group = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            dest.push(group);
            return;
        }
        dest.push(group | 0x80);
    }
}

pub fn encoded_len(value: u64) -> usize {
    let significant_bits = u64::BITS - value.leading_zeros();
    (significant_bits.max(1) as usize).div_ceil(7)
}

/// Returns the value and the number of bytes it took. Only minimal encodings are accepted.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize), CidError> {
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate().take(MAX_LEN) {
        let group = (byte & 0x7f) as u64;
        if i == MAX_LEN - 1 && group > 1 {
            return Err(CidError::VarintOverflow);
        }
        value |= group << (7 * i);

        if byte & 0x80 == 0 {
            if byte == 0 && i > 0 {
                return Err(CidError::NonMinimalVarint);
            }
            return Ok((value, i + 1));
        }
    }

    if bytes.len() >= MAX_LEN {
        Err(CidError::VarintOverflow)
    } else {
        Err(CidError::Truncated)
    }
}
