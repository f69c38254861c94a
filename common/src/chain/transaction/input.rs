use serde::{Deserialize, Serialize};
use serialization::{
    decode_var_bytes, encode_var_bytes, read_array, Input, Output, WireDecode, WireEncode,
};

use crate::{
    chain::{transaction::tx_hash_to_cid, TxDecodeConfig},
    primitives::{Cid, H256},
};

/// Sequence number that disables lock-time and replacement semantics for the input.
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// A transparent input.
///
/// The absent reference is written as the all-zero hash, so a reference whose digest is all
/// zeros is indistinguishable from it and is stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// The transaction whose output is spent; `None` for the coinbase input.
    #[serde(
        rename = "txid",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_prev_tx"
    )]
    prev_tx: Option<Cid>,
    #[serde(rename = "vout")]
    prev_tx_index: u32,
    #[serde(with = "hex::serde")]
    script: Vec<u8>,
    #[serde(rename = "sequence")]
    seq_no: u32,
}

impl TxInput {
    pub fn new(prev_tx: Option<Cid>, prev_tx_index: u32, script: Vec<u8>, seq_no: u32) -> Self {
        Self {
            prev_tx: non_null_reference(prev_tx),
            prev_tx_index,
            script,
            seq_no,
        }
    }

    /// The input of a coinbase transaction: no previous transaction, index `u32::MAX`.
    pub fn coinbase(script: Vec<u8>) -> Self {
        Self::new(None, u32::MAX, script, SEQUENCE_FINAL)
    }

    pub fn prev_tx(&self) -> Option<&Cid> {
        self.prev_tx.as_ref()
    }

    pub fn prev_tx_index(&self) -> u32 {
        self.prev_tx_index
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn seq_no(&self) -> u32 {
        self.seq_no
    }

    pub(super) fn decode_with_config<I: Input>(
        input: &mut I,
        config: &TxDecodeConfig,
    ) -> serialization::Result<Self> {
        let prev_hash = H256(read_array(input, "previous transaction hash")?);
        let prev_tx_index = u32::wire_decode(input)?;
        let script = decode_var_bytes(input, config.max_script_len, "input script")?;
        let seq_no = u32::wire_decode(input)?;

        Ok(Self::new(
            Some(tx_hash_to_cid(prev_hash)),
            prev_tx_index,
            script,
            seq_no,
        ))
    }
}

// The null hash marks an input without a previous transaction.
fn non_null_reference(prev_tx: Option<Cid>) -> Option<Cid> {
    prev_tx.filter(|cid| !cid.digest().is_zero())
}

fn deserialize_prev_tx<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Cid>, D::Error> {
    Option::<Cid>::deserialize(deserializer).map(non_null_reference)
}

impl WireEncode for TxInput {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        match &self.prev_tx {
            Some(cid) => dest.write(cid.digest().as_bytes()),
            None => dest.write(H256::zero().as_bytes()),
        }
        self.prev_tx_index.wire_encode_to(dest);
        encode_var_bytes(&self.script, dest);
        self.seq_no.wire_encode_to(dest);
    }

    fn wire_size_hint(&self) -> usize {
        H256::len_bytes() + 4 + 1 + self.script.len() + 4
    }
}

impl WireDecode for TxInput {
    fn wire_decode<I: Input>(input: &mut I) -> serialization::Result<Self> {
        Self::decode_with_config(input, &TxDecodeConfig::default())
    }
}
