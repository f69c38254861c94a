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

//! Compact-size unsigned integers.
//!
//! | value                   | encoding               |
//! |-------------------------|------------------------|
//! | `0..=0xfc`              | the value as one byte  |
//! | `0xfd..=0xffff`         | `0xfd` + 2 bytes LE    |
//! | `0x1_0000..=0xffff_ffff`| `0xfe` + 4 bytes LE    |
//! | larger                  | `0xff` + 8 bytes LE    |
//!
//! Decoding rejects values written in a longer form than necessary.

use crate::{read_array, Error, Input, Output, Result};

const MARKER_U16: u8 = 0xfd;
const MARKER_U32: u8 = 0xfe;
const MARKER_U64: u8 = 0xff;

/// Number of bytes `value` occupies once encoded: 1, 3, 5 or 9.
pub const fn encoded_len(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

pub fn encode_to<O: Output + ?Sized>(value: u64, dest: &mut O) {
    match value {
        0..=0xfc => dest.push_byte(value as u8),
        0xfd..=0xffff => {
            dest.push_byte(MARKER_U16);
            dest.write(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            dest.push_byte(MARKER_U32);
            dest.write(&(value as u32).to_le_bytes());
        }
        _ => {
            dest.push_byte(MARKER_U64);
            dest.write(&value.to_le_bytes());
        }
    }
}

pub fn encode(value: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(encoded_len(value));
    encode_to(value, &mut result);
    result
}

pub fn decode_from<I: Input>(input: &mut I) -> Result<u64> {
    let [marker] = read_array::<1, _>(input, "compact size marker")?;
    let value = match marker {
        MARKER_U16 => u16::from_le_bytes(read_array(input, "compact size")?) as u64,
        MARKER_U32 => u32::from_le_bytes(read_array(input, "compact size")?) as u64,
        MARKER_U64 => u64::from_le_bytes(read_array(input, "compact size")?),
        small => return Ok(small as u64),
    };

    let minimal_marker = match encoded_len(value) {
        1 => None,
        3 => Some(MARKER_U16),
        5 => Some(MARKER_U32),
        _ => Some(MARKER_U64),
    };
    if minimal_marker != Some(marker) {
        return Err(Error::NonCanonicalCompactSize { marker, value });
    }

    Ok(value)
}

/// Decodes a compact size from the front of `bytes`, returning the value and the number of
/// bytes it occupied.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut input = bytes;
    let value = decode_from(&mut input)?;
    Ok((value, bytes.len() - input.len()))
}
