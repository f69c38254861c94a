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

use ipld_zcash::{
    Cid, Codec, ContentAddressed, DagError, DagNode, HexDecode, HexEncode, Resolved, Scalar,
    ShallowClone, SubNode, Transaction, TxInput, TxOutput, SEQUENCE_FINAL,
};
use rstest::rstest;
use test_helpers::random_shielded_transaction;
use test_utils::random::{make_seedable_rng, Seed};

fn coinbase() -> Transaction {
    Transaction::new(
        1,
        vec![TxInput::new(None, 0, vec![], SEQUENCE_FINAL)],
        vec![TxOutput::new(5_000_000_000, vec![])],
        0,
    )
}

#[test]
fn block_bytes_to_node() {
    ipld_zcash::init_logging();

    let raw = hex::decode(format!(
        "0100000001{}00000000 00ffffffff0100f2052a010000000000000000",
        "00".repeat(32)
    )
    .replace(' ', ""))
    .unwrap();
    let node = DagNode::decode(Codec::ZcashTx, &raw).unwrap();

    assert_eq!(node, DagNode::from(coinbase()));
    assert_eq!(node.raw_data(), raw);
    assert!(node.links().is_empty());
    assert_eq!(
        node.cid().to_string(),
        "f01c1015620101000c3f1e331b2b1a4db86e556b60e11c2346e3a986be13c4410f005dc6d7c"
    );

    let cid: Cid = node.cid().to_string().parse().unwrap();
    assert_eq!(DagNode::from_block(&cid, &raw), Ok(node));
}

#[test]
fn block_codec_is_not_a_transaction() {
    let raw = coinbase().raw_data();
    assert_eq!(
        DagNode::decode(Codec::ZcashBlock, &raw),
        Err(DagError::UnsupportedCodec(Codec::ZcashBlock))
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn navigate_random_transaction(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let tx = random_shielded_transaction(&mut rng, 2);
    let node = DagNode::from_block(&tx.cid(), &tx.raw_data()).unwrap();

    for path in node.tree("", 3) {
        let segments: Vec<&str> = path.split('/').collect();
        match node.resolve(segments.as_slice()) {
            Ok((_, rest)) => assert!(rest.is_empty(), "{path}"),
            // Listed paths that are not resolvable: the lock time key differs and coinbase
            // inputs have no previous transaction.
            Err(_) => assert!(path == "timeLock" || path.ends_with("/prevTx"), "{path}"),
        }
    }

    assert_eq!(
        node.resolve(&["version"]).unwrap().0,
        Resolved::Scalar(Scalar::U32(tx.version()))
    );
    assert_eq!(
        node.resolve(&["outputs"]).unwrap().0,
        Resolved::Node(SubNode::Outputs(tx.outputs()))
    );
    assert_eq!(node.links().len(), tx.links().len());
    assert_eq!(node.shallow_clone().cid(), node.cid());
}

#[test]
fn hex_view() {
    let tx = coinbase();
    let encoded = tx.hex_encode();
    assert_eq!(encoded.len(), 120);
    assert_eq!(Transaction::hex_decode_all(&encoded), Ok(tx));
}
