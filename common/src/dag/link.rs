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

use serde::{Deserialize, Serialize};

use crate::primitives::Cid;

/// A named reference from one DAG node to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Path of the link within the node it belongs to; empty when unnamed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub cid: Cid,
}

impl Link {
    pub fn new(cid: Cid) -> Self {
        Self::named(String::new(), cid)
    }

    pub fn named(name: String, cid: Cid) -> Self {
        Self { name, cid }
    }
}

impl From<Cid> for Link {
    fn from(cid: Cid) -> Self {
        Self::new(cid)
    }
}
