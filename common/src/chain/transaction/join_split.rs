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

//! Sprout join-split descriptions, the shielded part of version 2 transactions.

use serialization::{
    hex::{HexDecode, HexEncode},
    read_array, Input, Output, WireDecode, WireEncode,
};

pub const PROOF_SIZE: usize = 296;
pub const CIPHERTEXT_SIZE: usize = 601;
pub const ENCODED_SIZE: usize = 8 + 8 + 32 + 2 * 32 + 2 * 32 + 32 + 32 + 2 * 32 + PROOF_SIZE
    + 2 * CIPHERTEXT_SIZE;

/// Transfer of value into and out of the shielded pool, proven with a BCTV14 proof.
///
/// The transaction treats the description as one opaque unit; the fields are fixed-size and
/// appear on the wire in declaration order.
#[derive(Clone, PartialEq, Eq)]
pub struct JoinSplit {
    /// Value leaving the transparent pool.
    pub vpub_old: u64,
    /// Value entering the transparent pool.
    pub vpub_new: u64,
    pub anchor: [u8; 32],
    pub nullifiers: [[u8; 32]; 2],
    pub commitments: [[u8; 32]; 2],
    pub ephemeral_key: [u8; 32],
    pub random_seed: [u8; 32],
    pub macs: [[u8; 32]; 2],
    pub proof: [u8; PROOF_SIZE],
    pub ciphertexts: [[u8; CIPHERTEXT_SIZE]; 2],
}

impl WireEncode for JoinSplit {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.vpub_old.wire_encode_to(dest);
        self.vpub_new.wire_encode_to(dest);
        dest.write(&self.anchor);
        self.nullifiers.iter().for_each(|n| dest.write(n));
        self.commitments.iter().for_each(|c| dest.write(c));
        dest.write(&self.ephemeral_key);
        dest.write(&self.random_seed);
        self.macs.iter().for_each(|m| dest.write(m));
        dest.write(&self.proof);
        self.ciphertexts.iter().for_each(|c| dest.write(c));
    }

    fn wire_size_hint(&self) -> usize {
        ENCODED_SIZE
    }
}

impl WireDecode for JoinSplit {
    fn wire_decode<I: Input>(input: &mut I) -> serialization::Result<Self> {
        Ok(Self {
            vpub_old: u64::wire_decode(input)?,
            vpub_new: u64::wire_decode(input)?,
            anchor: read_array(input, "join-split anchor")?,
            nullifiers: [
                read_array(input, "join-split nullifier")?,
                read_array(input, "join-split nullifier")?,
            ],
            commitments: [
                read_array(input, "join-split commitment")?,
                read_array(input, "join-split commitment")?,
            ],
            ephemeral_key: read_array(input, "join-split ephemeral key")?,
            random_seed: read_array(input, "join-split random seed")?,
            macs: [
                read_array(input, "join-split mac")?,
                read_array(input, "join-split mac")?,
            ],
            proof: read_array(input, "join-split proof")?,
            ciphertexts: [
                read_array(input, "join-split ciphertext")?,
                read_array(input, "join-split ciphertext")?,
            ],
        })
    }
}

impl std::fmt::Debug for JoinSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoinSplit")
            .field("vpub_old", &self.vpub_old)
            .field("vpub_new", &self.vpub_new)
            .field("anchor", &hex::encode(self.anchor))
            .field("nullifiers", &self.nullifiers.map(hex::encode))
            .field("commitments", &self.commitments.map(hex::encode))
            .finish_non_exhaustive()
    }
}

// JSON carries the description as the hex of its wire encoding.
impl serde::Serialize for JoinSplit {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.hex_encode())
    }
}

impl<'de> serde::Deserialize<'de> for JoinSplit {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let encoded = <String as serde::Deserialize>::deserialize(d)?;
        Self::hex_decode_all(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) fn sample_join_split(fill: u8) -> JoinSplit {
    JoinSplit {
        vpub_old: 0x0102,
        vpub_new: 0,
        anchor: [fill; 32],
        nullifiers: [[fill ^ 1; 32], [fill ^ 2; 32]],
        commitments: [[fill ^ 3; 32], [fill ^ 4; 32]],
        ephemeral_key: [fill ^ 5; 32],
        random_seed: [fill ^ 6; 32],
        macs: [[fill ^ 7; 32], [fill ^ 8; 32]],
        proof: [fill ^ 9; PROOF_SIZE],
        ciphertexts: [[fill ^ 10; CIPHERTEXT_SIZE], [fill ^ 11; CIPHERTEXT_SIZE]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialization::WireDecodeAll;

    #[test]
    fn fixed_size_layout() {
        assert_eq!(ENCODED_SIZE, 1802);

        let js = sample_join_split(0x20);
        let encoded = js.wire_encode();
        assert_eq!(encoded.len(), ENCODED_SIZE);
        assert_eq!(js.wire_encoded_len(), ENCODED_SIZE);
        assert_eq!(&encoded[..16], &[2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&encoded[16..48], &[0x20; 32]);
        assert_eq!(&encoded[48..80], &[0x21; 32]);
        assert_eq!(&encoded[ENCODED_SIZE - CIPHERTEXT_SIZE..], &[0x20 ^ 11; CIPHERTEXT_SIZE]);

        assert_eq!(JoinSplit::wire_decode_all(&encoded), Ok(js));
    }

    #[test]
    fn truncated() {
        let encoded = sample_join_split(0).wire_encode();
        let err = JoinSplit::wire_decode_all(&encoded[..ENCODED_SIZE - 1]).unwrap_err();
        assert!(matches!(
            err,
            serialization::Error::Truncated {
                what: "join-split ciphertext",
                ..
            }
        ));
    }

    #[test]
    fn json_is_hex_of_encoding() {
        let js = sample_join_split(7);
        let json = serde_json::to_string(&js).unwrap();
        assert_eq!(json, format!("\"{}\"", hex::encode(js.wire_encode())));
        assert_eq!(serde_json::from_str::<JoinSplit>(&json).unwrap(), js);
    }
}
