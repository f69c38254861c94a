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

use super::{cid::CidError, uvarint, H256};

/// Multihash function codes from the multicodec table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashCode {
    Sha2_256,
    DoubleSha2_256,
}

impl HashCode {
    pub const fn code(self) -> u64 {
        match self {
            HashCode::Sha2_256 => 0x12,
            HashCode::DoubleSha2_256 => 0x56,
        }
    }

    pub fn from_code(code: u64) -> Result<Self, CidError> {
        match code {
            0x12 => Ok(HashCode::Sha2_256),
            0x56 => Ok(HashCode::DoubleSha2_256),
            other => Err(CidError::UnsupportedHashCode(other)),
        }
    }
}

/// A self-describing digest. Only 256-bit digests are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash {
    code: HashCode,
    digest: H256,
}

impl Multihash {
    pub const DIGEST_LEN: usize = H256::len_bytes();

    pub const fn new(code: HashCode, digest: H256) -> Self {
        Self { code, digest }
    }

    /// Hash `data` with double SHA-256.
    pub fn double_sha2_256<T: AsRef<[u8]>>(data: T) -> Self {
        Self::new(
            HashCode::DoubleSha2_256,
            H256(crypto::hash::double_sha256(data)),
        )
    }

    pub const fn code(&self) -> HashCode {
        self.code
    }

    pub const fn digest(&self) -> &H256 {
        &self.digest
    }

    /// Length of the code and digest-length framing in front of the digest.
    pub fn framing_len(&self) -> usize {
        uvarint::encoded_len(self.code.code()) + uvarint::encoded_len(Self::DIGEST_LEN as u64)
    }

    pub fn encoded_len(&self) -> usize {
        self.framing_len() + Self::DIGEST_LEN
    }

    pub fn write_to(&self, dest: &mut Vec<u8>) {
        uvarint::encode_to(self.code.code(), dest);
        uvarint::encode_to(Self::DIGEST_LEN as u64, dest);
        dest.extend_from_slice(self.digest.as_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut result);
        result
    }

    /// Parses a multihash from the front of `bytes`, returning it with the number of bytes used.
    pub fn read_from(bytes: &[u8]) -> Result<(Self, usize), CidError> {
        let (code, code_len) = uvarint::decode(bytes)?;
        let code = HashCode::from_code(code)?;
        let (digest_len, digest_len_len) = uvarint::decode(&bytes[code_len..])?;
        if digest_len != Self::DIGEST_LEN as u64 {
            return Err(CidError::UnsupportedDigestLength(digest_len));
        }

        let start = code_len + digest_len_len;
        let digest = bytes
            .get(start..start + Self::DIGEST_LEN)
            .ok_or(CidError::Truncated)?;
        Ok((
            Self::new(code, H256::from_slice(digest)),
            start + Self::DIGEST_LEN,
        ))
    }
}
