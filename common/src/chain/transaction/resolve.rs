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

//! Path resolution into the fields of a transaction

use crate::dag::Link;

use super::{JoinSplit, Transaction, TxInput, TxOutput};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Index {index} out of range for {field} of length {len}")]
    IndexOutOfRange {
        field: &'static str,
        index: String,
        len: usize,
    },
    #[error("No such link: {0}")]
    NoSuchLink(String),
    #[error("Value at {0} is not a link")]
    WrongType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    U32(u32),
    U64(u64),
}

/// A part of the transaction that can be resolved further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubNode<'a> {
    Inputs(&'a [TxInput]),
    Input(&'a TxInput),
    Outputs(&'a [TxOutput]),
    Output(&'a TxOutput),
    JoinSplits(&'a [JoinSplit]),
}

/// The value a path points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a> {
    Scalar(Scalar),
    Bytes(&'a [u8]),
    Node(SubNode<'a>),
    Link(Link),
}

impl Resolved<'_> {
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Resolved::Link(link) => Some(link),
            Resolved::Scalar(_) | Resolved::Bytes(_) | Resolved::Node(_) => None,
        }
    }
}

type ResolveResult<'a, 'p, S> = Result<(Resolved<'a>, &'p [S]), ResolveError>;

impl Transaction {
    /// Follow `path` into the transaction, returning the value reached and the segments that
    /// were not consumed.
    pub fn resolve<'p, S: AsRef<str>>(&self, path: &'p [S]) -> ResolveResult<'_, 'p, S> {
        let Some((first, rest)) = path.split_first() else {
            return Err(ResolveError::NoSuchLink(String::new()));
        };

        let field = match first.as_ref() {
            "version" => Resolved::Scalar(Scalar::U32(self.version())),
            "lockTime" => Resolved::Scalar(Scalar::U32(self.lock_time())),
            "joinSplits" => Resolved::Node(SubNode::JoinSplits(self.join_splits())),
            "jsPubKey" => Resolved::Bytes(self.js_pub_key()),
            "jsSig" => Resolved::Bytes(self.js_sig()),
            "inputs" => return self.resolve_input(rest),
            "outputs" => return self.resolve_output(rest),
            other => return Err(ResolveError::NoSuchLink(other.to_owned())),
        };
        Ok((field, rest))
    }

    /// Like [`Transaction::resolve`], but the value reached must be a link.
    pub fn resolve_link<'p, S: AsRef<str>>(
        &self,
        path: &'p [S],
    ) -> Result<(Link, &'p [S]), ResolveError> {
        let (resolved, rest) = self.resolve(path)?;
        match resolved {
            Resolved::Link(link) => Ok((link, rest)),
            Resolved::Scalar(_) | Resolved::Bytes(_) | Resolved::Node(_) => {
                Err(ResolveError::WrongType(join_path(path, path.len() - rest.len())))
            }
        }
    }

    fn resolve_input<'p, S: AsRef<str>>(&self, path: &'p [S]) -> ResolveResult<'_, 'p, S> {
        let Some((index, rest)) = path.split_first() else {
            return Ok((Resolved::Node(SubNode::Inputs(self.inputs())), path));
        };
        let input = &self.inputs()[parse_index("inputs", index.as_ref(), self.inputs().len())?];

        let Some((field, rest)) = rest.split_first() else {
            return Ok((Resolved::Node(SubNode::Input(input)), rest));
        };
        let resolved = match field.as_ref() {
            "prevTx" => match input.prev_tx() {
                Some(cid) => Resolved::Link(Link::new(*cid)),
                None => return Err(ResolveError::NoSuchLink("prevTx".to_owned())),
            },
            "seqNo" => Resolved::Scalar(Scalar::U32(input.seq_no())),
            "script" => Resolved::Bytes(input.script()),
            other => return Err(ResolveError::NoSuchLink(other.to_owned())),
        };
        Ok((resolved, rest))
    }

    fn resolve_output<'p, S: AsRef<str>>(&self, path: &'p [S]) -> ResolveResult<'_, 'p, S> {
        let Some((index, rest)) = path.split_first() else {
            return Ok((Resolved::Node(SubNode::Outputs(self.outputs())), path));
        };
        let output = &self.outputs()[parse_index("outputs", index.as_ref(), self.outputs().len())?];

        let Some((field, rest)) = rest.split_first() else {
            return Ok((Resolved::Node(SubNode::Output(output)), rest));
        };
        let resolved = match field.as_ref() {
            "value" => Resolved::Scalar(Scalar::U64(output.value())),
            "script" => Resolved::Bytes(output.script()),
            other => return Err(ResolveError::NoSuchLink(other.to_owned())),
        };
        Ok((resolved, rest))
    }
}

fn parse_index(field: &'static str, segment: &str, len: usize) -> Result<usize, ResolveError> {
    segment
        .parse::<i64>()
        .ok()
        .and_then(|index| usize::try_from(index).ok())
        .filter(|index| *index < len)
        .ok_or_else(|| ResolveError::IndexOutOfRange {
            field,
            index: segment.to_owned(),
            len,
        })
}

fn join_path<S: AsRef<str>>(path: &[S], consumed: usize) -> String {
    path[..consumed].iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/")
}
