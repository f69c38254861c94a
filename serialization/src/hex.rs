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

use crate::{WireDecodeAll, WireEncode};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Wire decode error: {0}")]
    WireDecodeError(#[from] crate::Error),
    #[error("Hex decode error: {0}")]
    HexDecodeError(#[from] ::hex::FromHexError),
}

pub trait HexEncode: WireEncode {
    #[must_use]
    fn hex_encode(&self) -> String {
        ::hex::encode(self.wire_encode())
    }
}

pub trait HexDecode: WireDecodeAll {
    fn hex_decode_all<T: AsRef<str>>(data: T) -> Result<Self, HexError> {
        let unhexed = ::hex::decode(data.as_ref())?;
        let decoded = Self::wire_decode_all(&unhexed)?;
        Ok(decoded)
    }
}

impl<T: WireEncode + ?Sized> HexEncode for T {}
impl<T: WireDecodeAll> HexDecode for T {}
