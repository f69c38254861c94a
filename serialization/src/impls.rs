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

use crate::{compact_size, Error, Input, Output, Result, WireDecode, WireEncode};

// Upper bound on speculative pre-allocation when the item count comes from untrusted input.
const MAX_PREALLOCATED_ITEMS: usize = 1024;

macro_rules! impl_wire_for_le_int {
    ($($t:ty),*) => {
        $(
            impl WireEncode for $t {
                fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
                    dest.write(&self.to_le_bytes());
                }

                fn wire_size_hint(&self) -> usize {
                    std::mem::size_of::<$t>()
                }
            }

            impl WireDecode for $t {
                fn wire_decode<I: Input>(input: &mut I) -> Result<Self> {
                    read_array(input, stringify!($t)).map(<$t>::from_le_bytes)
                }
            }
        )*
    };
}

impl_wire_for_le_int!(u16, u32, u64, i32, i64);

impl<const N: usize> WireEncode for [u8; N] {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        dest.write(self);
    }

    fn wire_size_hint(&self) -> usize {
        N
    }
}

impl<const N: usize> WireDecode for [u8; N] {
    fn wire_decode<I: Input>(input: &mut I) -> Result<Self> {
        read_array(input, "fixed-size byte array")
    }
}

/// Sequences are written as a compact-size item count followed by the items.
impl<T: WireEncode> WireEncode for [T] {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        compact_size::encode_to(self.len() as u64, dest);
        self.iter().for_each(|item| item.wire_encode_to(dest));
    }

    fn wire_size_hint(&self) -> usize {
        compact_size::encoded_len(self.len() as u64)
            + self.iter().map(WireEncode::wire_size_hint).sum::<usize>()
    }
}

impl<T: WireEncode> WireEncode for Vec<T> {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.as_slice().wire_encode_to(dest)
    }

    fn wire_size_hint(&self) -> usize {
        self.as_slice().wire_size_hint()
    }
}

/// Fill `buf` from `input`, failing with [`Error::Truncated`] if not enough bytes remain.
pub fn read_exact<I: Input>(input: &mut I, buf: &mut [u8], what: &'static str) -> Result<()> {
    let needed = buf.len();
    let available = input.remaining_len().ok().flatten();
    let truncated = |available: usize| Error::Truncated {
        what,
        needed,
        available,
    };

    if let Some(available) = available {
        if available < needed {
            return Err(truncated(available));
        }
    }
    input.read(buf).map_err(|_| truncated(available.unwrap_or(0)))
}

pub fn read_array<const N: usize, I: Input>(input: &mut I, what: &'static str) -> Result<[u8; N]> {
    let mut result = [0u8; N];
    read_exact(input, &mut result, what)?;
    Ok(result)
}

/// Write a byte blob prefixed with its compact-size length.
pub fn encode_var_bytes<O: Output + ?Sized>(bytes: &[u8], dest: &mut O) {
    compact_size::encode_to(bytes.len() as u64, dest);
    dest.write(bytes);
}

/// Read a compact-size length prefixed byte blob of at most `limit` bytes.
pub fn decode_var_bytes<I: Input>(input: &mut I, limit: usize, what: &'static str) -> Result<Vec<u8>> {
    let len = decode_len(input, limit, what)?;
    if let Some(available) = input.remaining_len().ok().flatten() {
        if available < len {
            return Err(Error::Truncated {
                what,
                needed: len,
                available,
            });
        }
    }

    let mut result = vec![0u8; len];
    read_exact(input, &mut result, what)?;
    Ok(result)
}

/// Read a compact-size item count followed by at most `limit` items.
pub fn decode_vec<T: WireDecode, I: Input>(
    input: &mut I,
    limit: usize,
    what: &'static str,
) -> Result<Vec<T>> {
    decode_vec_with(input, limit, what, T::wire_decode)
}

/// Like [`decode_vec`], with each item read by `decode_item`.
pub fn decode_vec_with<T, I: Input>(
    input: &mut I,
    limit: usize,
    what: &'static str,
    mut decode_item: impl FnMut(&mut I) -> Result<T>,
) -> Result<Vec<T>> {
    let count = decode_len(input, limit, what)?;
    let mut result = Vec::with_capacity(count.min(MAX_PREALLOCATED_ITEMS));
    for _ in 0..count {
        result.push(decode_item(input)?);
    }
    Ok(result)
}

fn decode_len<I: Input>(input: &mut I, limit: usize, what: &'static str) -> Result<usize> {
    let len = compact_size::decode_from(input)?;
    if len > limit as u64 {
        return Err(Error::LengthLimitExceeded {
            what,
            len,
            limit: limit as u64,
        });
    }
    Ok(len as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use test_utils::random::{make_seedable_rng, random_bytes, Rng, Seed};

    #[test]
    fn integers_are_little_endian() {
        assert_eq!(0x0403_0201u32.wire_encode(), vec![1, 2, 3, 4]);
        assert_eq!(
            5_000_000_000u64.wire_encode(),
            vec![0x00, 0xf2, 0x05, 0x2a, 0x01, 0x00, 0x00, 0x00]
        );
        assert_eq!((-2i32).wire_encode(), vec![0xfe, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn truncated_integer() {
        let bytes = [1u8, 2, 3];
        assert_eq!(
            u32::wire_decode(&mut &bytes[..]),
            Err(Error::Truncated {
                what: "u32",
                needed: 4,
                available: 3
            })
        );
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn var_bytes(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let blob = random_bytes(&mut rng, 0..600);

        let mut encoded = Vec::new();
        encode_var_bytes(&blob, &mut encoded);
        assert_eq!(
            encoded.len(),
            compact_size::encoded_len(blob.len() as u64) + blob.len()
        );

        let decoded = decode_var_bytes(&mut encoded.as_slice(), 600, "blob").unwrap();
        assert_eq!(decoded, blob);

        if !blob.is_empty() {
            let cut = rng.gen_range(0..blob.len());
            let limit_err = decode_var_bytes(&mut encoded.as_slice(), cut, "blob").unwrap_err();
            assert!(matches!(limit_err, Error::LengthLimitExceeded { .. }));

            let short = &encoded[..encoded.len() - 1];
            let short_err = decode_var_bytes(&mut &short[..], 600, "blob").unwrap_err();
            assert!(matches!(short_err, Error::Truncated { .. }));
        }
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        // Count of u32::MAX items but only a single item present.
        let bytes = [0xfe, 0xff, 0xff, 0xff, 0xff, 1, 0, 0, 0];
        let err = decode_vec::<u32, _>(&mut &bytes[..], usize::MAX, "items").unwrap_err();
        assert!(matches!(err, Error::Truncated { what: "u32", .. }));
    }

    #[test]
    fn sequences_are_count_prefixed() {
        let items = vec![1u32, 2u32];
        let encoded = items.wire_encode();
        assert_eq!(encoded, vec![2, 1, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(
            decode_vec::<u32, _>(&mut encoded.as_slice(), 10, "items"),
            Ok(items)
        );
    }
}
