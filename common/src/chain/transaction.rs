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

use std::sync::Arc;

use logging::log;
use serde::{Deserialize, Serialize};
use serialization::{decode_vec_with, read_array, Input, Output, WireDecode, WireEncode};
use utils::shallow_clone::ShallowClone;

use crate::{
    chain::TxDecodeConfig,
    dag::Link,
    primitives::{
        hash_encoded::double_sha256_encoded, Cid, Codec, ContentAddressed, HashCode, Multihash,
        H256,
    },
};

pub mod input;
pub use input::*;

pub mod output;
pub use output::*;

pub mod join_split;
pub use join_split::JoinSplit;

mod resolve;
pub use resolve::{ResolveError, Resolved, Scalar, SubNode};

mod tree;

/// Transactions of this version carry no shielded data on the wire.
pub const LEGACY_TX_VERSION: u32 = 1;

/// Length of the join-split public key.
pub const JS_PUB_KEY_LEN: usize = 32;
/// Length of the join-split signature.
pub const JS_SIG_LEN: usize = 64;

/// A Zcash transaction.
///
/// Clones share the input, output and join-split storage with the original. A transaction is
/// never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TransactionRepr", into = "TransactionRepr")]
pub struct Transaction {
    version: u32,
    inputs: Arc<[TxInput]>,
    outputs: Arc<[TxOutput]>,
    lock_time: u32,
    join_splits: Arc<[JoinSplit]>,
    js_pub_key: Arc<[u8]>,
    js_sig: Arc<[u8]>,
}

impl Transaction {
    pub fn new(version: u32, inputs: Vec<TxInput>, outputs: Vec<TxOutput>, lock_time: u32) -> Self {
        Self {
            version,
            inputs: inputs.into(),
            outputs: outputs.into(),
            lock_time,
            join_splits: Arc::new([]),
            js_pub_key: Arc::new([]),
            js_sig: Arc::new([]),
        }
    }

    /// Attach shielded data. It is only serialized when the version is not
    /// [`LEGACY_TX_VERSION`].
    pub fn with_join_splits(
        mut self,
        join_splits: Vec<JoinSplit>,
        js_pub_key: Vec<u8>,
        js_sig: Vec<u8>,
    ) -> Self {
        self.join_splits = join_splits.into();
        self.js_pub_key = js_pub_key.into();
        self.js_sig = js_sig.into();
        self
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn inputs(&self) -> &[TxInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    pub fn lock_time(&self) -> u32 {
        self.lock_time
    }

    pub fn join_splits(&self) -> &[JoinSplit] {
        &self.join_splits
    }

    pub fn js_pub_key(&self) -> &[u8] {
        &self.js_pub_key
    }

    pub fn js_sig(&self) -> &[u8] {
        &self.js_sig
    }

    pub fn has_shielded_data(&self) -> bool {
        self.version != LEGACY_TX_VERSION
    }

    /// The canonical encoding, i.e. the bytes the identifier is computed over.
    pub fn raw_data(&self) -> Vec<u8> {
        self.wire_encode()
    }

    /// Length of the canonical encoding.
    pub fn size(&self) -> u64 {
        self.wire_encoded_len() as u64
    }

    /// Double SHA-256 of the canonical encoding, in the byte order the chain stores it.
    pub fn chain_hash(&self) -> H256 {
        double_sha256_encoded(self)
    }

    /// The transaction hash as block explorers and RPC interfaces print it.
    pub fn display_hash(&self) -> String {
        self.chain_hash().as_bitcoin_uint256_hex()
    }

    /// One link per input that references a previous transaction, named
    /// `inputs/<index>/prevTx`.
    pub fn links(&self) -> Vec<Link> {
        self.inputs
            .iter()
            .enumerate()
            .filter_map(|(index, input)| {
                input
                    .prev_tx()
                    .map(|cid| Link::named(format!("inputs/{index}/prevTx"), *cid))
            })
            .collect()
    }

    pub fn decode_with_config<I: Input>(
        input: &mut I,
        config: &TxDecodeConfig,
    ) -> serialization::Result<Self> {
        let version = u32::wire_decode(input)?;
        let inputs = decode_vec_with(input, config.max_inputs, "transaction inputs", |i| {
            TxInput::decode_with_config(i, config)
        })?;
        let outputs = decode_vec_with(input, config.max_outputs, "transaction outputs", |i| {
            TxOutput::decode_with_config(i, config)
        })?;
        let lock_time = u32::wire_decode(input)?;

        let mut tx = Self::new(version, inputs, outputs, lock_time);

        if tx.has_shielded_data() {
            let join_splits = decode_vec_with(
                input,
                config.max_join_splits,
                "join-splits",
                JoinSplit::wire_decode,
            )?;
            // The key and signature are present only alongside at least one description.
            if !join_splits.is_empty() {
                let js_pub_key: [u8; JS_PUB_KEY_LEN] = read_array(input, "join-split public key")?;
                let js_sig: [u8; JS_SIG_LEN] = read_array(input, "join-split signature")?;
                tx = tx.with_join_splits(join_splits, js_pub_key.to_vec(), js_sig.to_vec());
            }
        }

        log::trace!(
            "Decoded transaction version {}: {} inputs, {} outputs, {} join-splits",
            tx.version,
            tx.inputs.len(),
            tx.outputs.len(),
            tx.join_splits.len(),
        );

        Ok(tx)
    }
}

/// Wrap a chain transaction hash into the identifier of the transaction.
pub fn tx_hash_to_cid(hash: H256) -> Cid {
    Cid::new_v1(
        Codec::ZcashTx,
        Multihash::new(HashCode::DoubleSha2_256, hash),
    )
}

/// Wrap a chain transaction hash into an unnamed link to the transaction.
pub fn tx_hash_to_link(hash: H256) -> Link {
    Link::new(tx_hash_to_cid(hash))
}

impl ContentAddressed for Transaction {
    fn cid(&self) -> Cid {
        tx_hash_to_cid(self.chain_hash())
    }
}

impl ShallowClone for Transaction {
    fn shallow_clone(&self) -> Self {
        self.clone()
    }
}

impl WireEncode for Transaction {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.version.wire_encode_to(dest);
        self.inputs.wire_encode_to(dest);
        self.outputs.wire_encode_to(dest);
        self.lock_time.wire_encode_to(dest);

        if self.has_shielded_data() {
            self.join_splits.wire_encode_to(dest);
            dest.write(&self.js_pub_key);
            dest.write(&self.js_sig);
        }
    }

    fn wire_size_hint(&self) -> usize {
        let shielded = if self.has_shielded_data() {
            self.join_splits.wire_size_hint() + self.js_pub_key.len() + self.js_sig.len()
        } else {
            0
        };
        4 + self.inputs.wire_size_hint() + self.outputs.wire_size_hint() + 4 + shielded
    }
}

impl WireDecode for Transaction {
    fn wire_decode<I: Input>(input: &mut I) -> serialization::Result<Self> {
        Self::decode_with_config(input, &TxDecodeConfig::default())
    }
}

#[derive(Serialize, Deserialize)]
struct TransactionRepr {
    version: u32,
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    locktime: u32,
    #[serde(rename = "joinSplits", default, skip_serializing_if = "Vec::is_empty")]
    join_splits: Vec<JoinSplit>,
    #[serde(
        rename = "jsPubKey",
        with = "hex::serde",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    js_pub_key: Vec<u8>,
    #[serde(
        rename = "jsSig",
        with = "hex::serde",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    js_sig: Vec<u8>,
}

impl From<Transaction> for TransactionRepr {
    fn from(tx: Transaction) -> Self {
        Self {
            version: tx.version,
            inputs: tx.inputs.to_vec(),
            outputs: tx.outputs.to_vec(),
            locktime: tx.lock_time,
            join_splits: tx.join_splits.to_vec(),
            js_pub_key: tx.js_pub_key.to_vec(),
            js_sig: tx.js_sig.to_vec(),
        }
    }
}

impl From<TransactionRepr> for Transaction {
    fn from(repr: TransactionRepr) -> Self {
        Transaction::new(repr.version, repr.inputs, repr.outputs, repr.locktime).with_join_splits(
            repr.join_splits,
            repr.js_pub_key,
            repr.js_sig,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::transaction::join_split::sample_join_split;
    use rstest::rstest;
    use serialization::{Error, WireDecodeAll};
    use test_utils::random::{make_seedable_rng, random_bytes, Rng, Seed};

    fn coinbase_tx() -> Transaction {
        Transaction::new(
            1,
            vec![TxInput::new(None, 0, vec![], SEQUENCE_FINAL)],
            vec![TxOutput::new(5_000_000_000, vec![])],
            0,
        )
    }

    fn shielded_tx(join_splits: usize) -> Transaction {
        let (pub_key, sig) = if join_splits > 0 {
            (vec![0x11; JS_PUB_KEY_LEN], vec![0x22; JS_SIG_LEN])
        } else {
            (vec![], vec![])
        };
        let join_splits = (0..join_splits).map(|i| sample_join_split(i as u8)).collect();
        Transaction::new(
            2,
            vec![TxInput::new(
                Some(tx_hash_to_cid(H256::repeat_byte(5))),
                1,
                vec![0x51],
                SEQUENCE_FINAL,
            )],
            vec![TxOutput::new(1000, vec![0x76, 0xa9])],
            77,
        )
        .with_join_splits(join_splits, pub_key, sig)
    }

    #[test]
    fn legacy_layout() {
        let tx = coinbase_tx();
        let expected = format!(
            "01000000 01 {} 00000000 00 ffffffff 01 00f2052a01000000 00 00000000",
            "00".repeat(32)
        )
        .replace(' ', "");

        assert_eq!(hex::encode(tx.raw_data()), expected);
        assert_eq!(tx.size(), 60);
        assert_eq!(Transaction::wire_decode_all(&tx.raw_data()), Ok(tx));
    }

    #[test]
    fn legacy_hashes() {
        let tx = coinbase_tx();
        assert_eq!(
            format!("{:x}", tx.chain_hash()),
            "101000c3f1e331b2b1a4db86e556b60e11c2346e3a986be13c4410f005dc6d7c"
        );
        assert_eq!(
            tx.display_hash(),
            "7c6ddc05f010443ce16b983a6e34c2110eb656e586dba4b1b231e3f1c3001010"
        );
        assert_eq!(
            tx.cid().to_string(),
            "f01c1015620101000c3f1e331b2b1a4db86e556b60e11c2346e3a986be13c4410f005dc6d7c"
        );
    }

    #[test]
    fn legacy_omits_shielded_data() {
        let plain = coinbase_tx();
        let with_data = plain.clone().with_join_splits(
            vec![sample_join_split(3)],
            vec![1; JS_PUB_KEY_LEN],
            vec![2; JS_SIG_LEN],
        );

        assert_eq!(with_data.raw_data(), plain.raw_data());
        assert_eq!(with_data.size(), plain.size());
        assert_eq!(with_data.cid(), plain.cid());
    }

    #[test]
    fn shielded_layout() {
        let tx = shielded_tx(1);
        let encoded = tx.raw_data();
        let legacy_part = 4 + 1 + (32 + 4 + 2 + 4) + 1 + (8 + 3) + 4;

        assert_eq!(encoded.len(), legacy_part + 1 + 1802 + 32 + 64);
        assert_eq!(encoded[legacy_part], 1);
        assert_eq!(&encoded[encoded.len() - 96..encoded.len() - 64], &[0x11; 32]);
        assert_eq!(&encoded[encoded.len() - 64..], &[0x22; 64]);
        assert_eq!(tx.size(), encoded.len() as u64);
        assert_eq!(Transaction::wire_decode_all(&encoded), Ok(tx));
    }

    #[test]
    fn shielded_version_without_join_splits() {
        let tx = shielded_tx(0);
        let encoded = tx.raw_data();
        assert_eq!(encoded.last(), Some(&0));
        assert_eq!(encoded.len(), coinbase_like_len(&tx) + 1);
        assert_eq!(Transaction::wire_decode_all(&encoded), Ok(tx));
    }

    fn coinbase_like_len(tx: &Transaction) -> usize {
        Transaction::new(
            LEGACY_TX_VERSION,
            tx.inputs().to_vec(),
            tx.outputs().to_vec(),
            tx.lock_time(),
        )
        .wire_encoded_len()
    }

    #[test]
    fn chain_hash_is_the_identifier_digest() {
        let tx = shielded_tx(2);
        let cid = tx.cid();
        let multihash = cid.hash().to_bytes();

        assert_eq!(cid.codec(), Codec::ZcashTx);
        assert_eq!(&multihash[..2], &[0x56, 0x20]);
        assert_eq!(&multihash[2..], tx.chain_hash().as_bytes());

        let mut reversed = tx.chain_hash().0;
        reversed.reverse();
        assert_eq!(tx.display_hash(), hex::encode(reversed));
    }

    #[test]
    fn hash_link_wraps_chain_hash() {
        let tx = coinbase_tx();
        let link = tx_hash_to_link(tx.chain_hash());
        assert_eq!(link.cid, tx.cid());
        assert!(link.name.is_empty());
    }

    #[test]
    fn links_follow_referencing_inputs() {
        let referenced = tx_hash_to_cid(H256::repeat_byte(9));
        let tx = Transaction::new(
            1,
            vec![
                TxInput::new(Some(referenced), 0, vec![], 0),
                TxInput::new(None, 0, vec![], 0),
                TxInput::new(Some(referenced), 1, vec![], 0),
            ],
            vec![],
            0,
        );

        let links = tx.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], Link::named("inputs/0/prevTx".to_owned(), referenced));
        assert_eq!(links[1], Link::named("inputs/2/prevTx".to_owned(), referenced));
    }

    #[test]
    fn clones_share_storage() {
        let tx = shielded_tx(1);
        let copy = tx.shallow_clone();
        assert!(Arc::ptr_eq(&tx.inputs, &copy.inputs));
        assert!(Arc::ptr_eq(&tx.join_splits, &copy.join_splits));
        assert_eq!(tx, copy);
    }

    #[test]
    fn truncated_signature() {
        let encoded = shielded_tx(1).raw_data();
        let err = Transaction::wire_decode_all(&encoded[..encoded.len() - 1]).unwrap_err();
        assert_eq!(
            err,
            Error::Truncated {
                what: "join-split signature",
                needed: 64,
                available: 63
            }
        );
    }

    #[test]
    fn decode_limits() {
        let encoded = shielded_tx(2).raw_data();

        let config = TxDecodeConfig::default().with_max_join_splits(1);
        let err = Transaction::decode_with_config(&mut encoded.as_slice(), &config).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthLimitExceeded {
                what: "join-splits",
                len: 2,
                limit: 1
            }
        ));

        let config = TxDecodeConfig::default().with_max_inputs(0);
        let err = Transaction::decode_with_config(&mut encoded.as_slice(), &config).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthLimitExceeded {
                what: "transaction inputs",
                ..
            }
        ));

        let config = TxDecodeConfig::default().with_max_outputs(0);
        let err = Transaction::decode_with_config(&mut encoded.as_slice(), &config).unwrap_err();
        assert_eq!(
            err,
            Error::LengthLimitExceeded {
                what: "transaction outputs",
                len: 1,
                limit: 0
            }
        );

        let config = TxDecodeConfig::default().with_max_outputs(1);
        assert_eq!(
            Transaction::decode_with_config(&mut encoded.as_slice(), &config),
            Ok(shielded_tx(2))
        );
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn byte_flip_changes_identifier(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let tx = Transaction::new(
            rng.gen_range(2..5),
            vec![TxInput::new(
                Some(tx_hash_to_cid(H256(rng.gen()))),
                rng.gen(),
                random_bytes(&mut rng, 1..40),
                rng.gen(),
            )],
            vec![TxOutput::new(rng.gen(), random_bytes(&mut rng, 1..40))],
            rng.gen(),
        );
        let original = tx.cid();

        // Flipped bits either fail to decode or decode into a differently named transaction.
        for other in test_utils::try_all_single_bit_mutations(&tx).flatten() {
            assert_ne!(other.cid(), original);
        }
    }

    #[test]
    fn json_view() {
        let tx = coinbase_tx();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": 1,
                "inputs": [{"vout": 0, "script": "", "sequence": 4294967295u32}],
                "outputs": [{"value": 5000000000u64, "script": ""}],
                "locktime": 0,
            })
        );

        let shielded = shielded_tx(1);
        let json = serde_json::to_string(&shielded).unwrap();
        assert!(json.contains("\"jsPubKey\":\"1111"));
        assert_eq!(serde_json::from_str::<Transaction>(&json).unwrap(), shielded);
    }
}
