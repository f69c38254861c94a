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

//! Random chain objects for tests

use common::{
    chain::{
        transaction::{JS_PUB_KEY_LEN, JS_SIG_LEN, LEGACY_TX_VERSION},
        tx_hash_to_cid, JoinSplit, Transaction, TxInput, TxOutput,
    },
    primitives::H256,
};
use test_utils::random::{random_array, random_bytes, Rng};

pub fn random_tx_input(rng: &mut impl Rng) -> TxInput {
    // A random digest is never the null hash in practice, so the reference survives encoding.
    let prev_tx = rng.gen_bool(0.8).then(|| tx_hash_to_cid(H256(random_array(rng))));
    TxInput::new(prev_tx, rng.gen(), random_bytes(rng, 0..120), rng.gen())
}

pub fn random_tx_output(rng: &mut impl Rng) -> TxOutput {
    TxOutput::new(rng.gen(), random_bytes(rng, 0..60))
}

pub fn random_join_split(rng: &mut impl Rng) -> JoinSplit {
    JoinSplit {
        vpub_old: rng.gen(),
        vpub_new: rng.gen(),
        anchor: random_array(rng),
        nullifiers: [random_array(rng), random_array(rng)],
        commitments: [random_array(rng), random_array(rng)],
        ephemeral_key: random_array(rng),
        random_seed: random_array(rng),
        macs: [random_array(rng), random_array(rng)],
        proof: random_array(rng),
        ciphertexts: [random_array(rng), random_array(rng)],
    }
}

/// A transaction without shielded data.
pub fn random_legacy_transaction(rng: &mut impl Rng) -> Transaction {
    let inputs = (0..rng.gen_range(0..6)).map(|_| random_tx_input(rng)).collect();
    let outputs = (0..rng.gen_range(0..6)).map(|_| random_tx_output(rng)).collect();
    Transaction::new(LEGACY_TX_VERSION, inputs, outputs, rng.gen())
}

/// A transaction of a version that carries shielded data, with up to `max_join_splits`
/// join-split descriptions.
///
/// The key and signature are set exactly when there is at least one description, as on chain.
pub fn random_shielded_transaction(rng: &mut impl Rng, max_join_splits: usize) -> Transaction {
    let version = rng.gen_range(2..=4);
    let inputs = (0..rng.gen_range(0..6)).map(|_| random_tx_input(rng)).collect();
    let outputs = (0..rng.gen_range(0..6)).map(|_| random_tx_output(rng)).collect();
    let join_splits: Vec<_> =
        (0..rng.gen_range(0..=max_join_splits)).map(|_| random_join_split(rng)).collect();

    let (js_pub_key, js_sig) = if join_splits.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        (
            random_array::<JS_PUB_KEY_LEN>(rng).to_vec(),
            random_array::<JS_SIG_LEN>(rng).to_vec(),
        )
    };

    Transaction::new(version, inputs, outputs, rng.gen()).with_join_splits(
        join_splits,
        js_pub_key,
        js_sig,
    )
}
