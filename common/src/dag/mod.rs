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

//! Merkle-DAG nodes, dispatched on the codec of their identifier

mod link;

pub use link::Link;

use logging::log;
use utils::{ensure, shallow_clone::ShallowClone};

use crate::{
    chain::{ResolveError, Resolved, Transaction, TxDecodeConfig},
    primitives::{Cid, Codec, ContentAddressed},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DagError {
    #[error("Codec {0} has no node decoder")]
    UnsupportedCodec(Codec),
    #[error("Failed to decode node: {0}")]
    Decode(#[from] serialization::Error),
    #[error("Block content hashes to {actual} instead of {expected}")]
    HashMismatch { expected: Cid, actual: Cid },
}

/// A decoded DAG node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DagNode {
    ZcashTx(Transaction),
}

impl DagNode {
    /// Decode the raw bytes of a block of the given codec.
    pub fn decode(codec: Codec, bytes: &[u8]) -> Result<Self, DagError> {
        Self::decode_with_config(codec, bytes, &TxDecodeConfig::default())
    }

    pub fn decode_with_config(
        codec: Codec,
        bytes: &[u8],
        config: &TxDecodeConfig,
    ) -> Result<Self, DagError> {
        log::debug!("Decoding {} node of {} bytes", codec, bytes.len());

        match codec {
            Codec::ZcashTx => {
                let mut input = bytes;
                let tx = Transaction::decode_with_config(&mut input, config)?;
                ensure!(
                    input.is_empty(),
                    serialization::Error::TrailingBytes(input.len())
                );
                Ok(DagNode::ZcashTx(tx))
            }
            Codec::ZcashBlock => Err(DagError::UnsupportedCodec(codec)),
        }
    }

    /// Decode a block and check that its content matches the identifier it was fetched by.
    pub fn from_block(cid: &Cid, bytes: &[u8]) -> Result<Self, DagError> {
        let node = Self::decode(cid.codec(), bytes)?;
        let actual = node.cid();
        ensure!(
            actual == *cid,
            DagError::HashMismatch {
                expected: *cid,
                actual,
            }
        );
        Ok(node)
    }

    pub fn codec(&self) -> Codec {
        match self {
            DagNode::ZcashTx(_) => Codec::ZcashTx,
        }
    }

    pub fn links(&self) -> Vec<Link> {
        match self {
            DagNode::ZcashTx(tx) => tx.links(),
        }
    }

    pub fn raw_data(&self) -> Vec<u8> {
        match self {
            DagNode::ZcashTx(tx) => tx.raw_data(),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            DagNode::ZcashTx(tx) => tx.size(),
        }
    }

    pub fn resolve<'p, S: AsRef<str>>(
        &self,
        path: &'p [S],
    ) -> Result<(Resolved<'_>, &'p [S]), ResolveError> {
        match self {
            DagNode::ZcashTx(tx) => tx.resolve(path),
        }
    }

    pub fn resolve_link<'p, S: AsRef<str>>(
        &self,
        path: &'p [S],
    ) -> Result<(Link, &'p [S]), ResolveError> {
        match self {
            DagNode::ZcashTx(tx) => tx.resolve_link(path),
        }
    }

    pub fn tree(&self, prefix: &str, depth: i32) -> Vec<String> {
        match self {
            DagNode::ZcashTx(tx) => tx.tree(prefix, depth),
        }
    }

    pub fn shallow_copy(&self) -> Self {
        self.shallow_clone()
    }

    /// Fields identifying the node kind in structured log output.
    pub fn loggable(&self) -> serde_json::Value {
        match self {
            DagNode::ZcashTx(_) => serde_json::json!({ "type": "zcashTx" }),
        }
    }

    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            DagNode::ZcashTx(tx) => Some(tx),
        }
    }
}

impl ContentAddressed for DagNode {
    fn cid(&self) -> Cid {
        match self {
            DagNode::ZcashTx(tx) => tx.cid(),
        }
    }
}

impl ShallowClone for DagNode {
    fn shallow_clone(&self) -> Self {
        match self {
            DagNode::ZcashTx(tx) => DagNode::ZcashTx(tx.shallow_clone()),
        }
    }
}

impl From<Transaction> for DagNode {
    fn from(tx: Transaction) -> Self {
        DagNode::ZcashTx(tx)
    }
}

impl std::fmt::Display for DagNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DagNode::ZcashTx(_) => write!(f, "zcash transaction"),
        }
    }
}
