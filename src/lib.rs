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

//! Zcash transactions as nodes of a content-addressed Merkle-DAG.
//!
//! [`Transaction`] holds the transaction fields and serializes them in the canonical
//! consensus layout. The double SHA-256 of that encoding, wrapped in a CIDv1 with the
//! `zcash-tx` codec, identifies the transaction. [`DagNode`] wraps a decoded block so it can
//! be navigated by path, and its links lead to the transactions it spends from.

pub use common::{
    chain::{
        config::TxDecodeConfig,
        transaction::{JS_PUB_KEY_LEN, JS_SIG_LEN},
        tx_hash_to_cid, tx_hash_to_link, JoinSplit, ResolveError, Resolved, Scalar, SubNode,
        Transaction, TxInput, TxOutput, LEGACY_TX_VERSION, SEQUENCE_FINAL,
    },
    dag::{DagError, DagNode, Link},
    primitives::{Cid, CidError, Codec, ContentAddressed, HashCode, Multihash, H256},
};
pub use logging::init_logging;
pub use serialization::{
    compact_size,
    hex::{HexDecode, HexEncode, HexError},
    WireDecode, WireDecodeAll, WireEncode,
};
pub use utils::shallow_clone::ShallowClone;
