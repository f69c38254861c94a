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

//! Version 1 content identifiers.
//!
//! Binary form: `<version><codec><multihash>`, every integer an unsigned varint. The text form
//! is the binary form in lowercase hex behind the `f` multibase prefix.

use std::{fmt, str::FromStr};

use super::{multihash::Multihash, uvarint, H256};

const BASE16_LOWER_PREFIX: char = 'f';

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CidError {
    #[error("Identifier ends prematurely")]
    Truncated,
    #[error("Varint does not fit into 64 bits")]
    VarintOverflow,
    #[error("Varint is not minimally encoded")]
    NonMinimalVarint,
    #[error("Unsupported identifier version {0}")]
    UnsupportedVersion(u64),
    #[error("Unsupported codec {0:#x}")]
    UnsupportedCodec(u64),
    #[error("Unsupported multihash function {0:#x}")]
    UnsupportedHashCode(u64),
    #[error("Unsupported digest length {0}")]
    UnsupportedDigestLength(u64),
    #[error("{0} trailing bytes after the identifier")]
    TrailingBytes(usize),
    #[error("Unsupported multibase prefix {0:?}")]
    UnsupportedMultibase(Option<char>),
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Multicodec tags of the formats this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Codec {
    ZcashBlock,
    ZcashTx,
}

impl Codec {
    pub const fn code(self) -> u64 {
        match self {
            Codec::ZcashBlock => 0xc0,
            Codec::ZcashTx => 0xc1,
        }
    }

    pub fn from_code(code: u64) -> Result<Self, CidError> {
        match code {
            0xc0 => Ok(Codec::ZcashBlock),
            0xc1 => Ok(Codec::ZcashTx),
            other => Err(CidError::UnsupportedCodec(other)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Codec::ZcashBlock => "zcash-block",
            Codec::ZcashTx => "zcash-tx",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid {
    codec: Codec,
    hash: Multihash,
}

impl Cid {
    pub const VERSION: u64 = 1;

    pub const fn new_v1(codec: Codec, hash: Multihash) -> Self {
        Self { codec, hash }
    }

    pub const fn codec(&self) -> Codec {
        self.codec
    }

    pub const fn hash(&self) -> &Multihash {
        &self.hash
    }

    /// The raw digest embedded in the multihash.
    pub const fn digest(&self) -> &H256 {
        self.hash.digest()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(
            uvarint::encoded_len(Self::VERSION)
                + uvarint::encoded_len(self.codec.code())
                + self.hash.encoded_len(),
        );
        uvarint::encode_to(Self::VERSION, &mut result);
        uvarint::encode_to(self.codec.code(), &mut result);
        self.hash.write_to(&mut result);
        result
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CidError> {
        let (version, version_len) = uvarint::decode(bytes)?;
        if version != Self::VERSION {
            return Err(CidError::UnsupportedVersion(version));
        }

        let rest = &bytes[version_len..];
        let (codec, codec_len) = uvarint::decode(rest)?;
        let codec = Codec::from_code(codec)?;

        let rest = &rest[codec_len..];
        let (hash, hash_len) = Multihash::read_from(rest)?;
        if rest.len() > hash_len {
            return Err(CidError::TrailingBytes(rest.len() - hash_len));
        }

        Ok(Self::new_v1(codec, hash))
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BASE16_LOWER_PREFIX}{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cid<{}>{{{self}}}", self.codec)
    }
}

impl FromStr for Cid {
    type Err = CidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(BASE16_LOWER_PREFIX) => Self::from_bytes(&hex::decode(chars.as_str())?),
            other => Err(CidError::UnsupportedMultibase(other)),
        }
    }
}

impl serde::Serialize for Cid {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Cid {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct CidVisitor;
        impl serde::de::Visitor<'_> for CidVisitor {
            type Value = Cid;
            fn expecting(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                fmt.write_str("a multibase-encoded content identifier")
            }
            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                s.parse().map_err(serde::de::Error::custom)
            }
        }
        d.deserialize_str(CidVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::multihash::HashCode;

    const HELLO_DIGEST: &str = "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50";

    fn hello_cid() -> Cid {
        Cid::new_v1(Codec::ZcashTx, Multihash::double_sha2_256(b"hello"))
    }

    #[test]
    fn binary_layout() {
        let bytes = hello_cid().to_bytes();
        assert_eq!(hex::encode(&bytes[..5]), "01c1015620");
        assert_eq!(hex::encode(&bytes[5..]), HELLO_DIGEST);
        assert_eq!(Cid::from_bytes(&bytes), Ok(hello_cid()));
    }

    #[test]
    fn text_form() {
        let cid = hello_cid();
        let text = cid.to_string();
        assert_eq!(text, format!("f01c1015620{HELLO_DIGEST}"));
        assert_eq!(text.parse::<Cid>(), Ok(cid));
        assert_eq!(
            format!("{cid:?}"),
            format!("Cid<zcash-tx>{{f01c1015620{HELLO_DIGEST}}}")
        );
    }

    #[test]
    fn accessors() {
        let cid = hello_cid();
        assert_eq!(cid.codec(), Codec::ZcashTx);
        assert_eq!(cid.hash().code(), HashCode::DoubleSha2_256);
        assert_eq!(hex::encode(cid.digest()), HELLO_DIGEST);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "bafy".parse::<Cid>(),
            Err(CidError::UnsupportedMultibase(Some('b')))
        );
        assert_eq!("".parse::<Cid>(), Err(CidError::UnsupportedMultibase(None)));
        assert!(matches!("fzz".parse::<Cid>(), Err(CidError::Hex(_))));

        let mut bytes = hello_cid().to_bytes();
        bytes.push(0);
        assert_eq!(Cid::from_bytes(&bytes), Err(CidError::TrailingBytes(1)));

        bytes[0] = 0x00;
        assert_eq!(Cid::from_bytes(&bytes), Err(CidError::UnsupportedVersion(0)));

        assert_eq!(
            Cid::from_bytes(&[0x01, 0x70, 0x56, 0x20]),
            Err(CidError::UnsupportedCodec(0x70))
        );
    }

    #[test]
    fn json() {
        let cid = hello_cid();
        let json = serde_json::to_string(&cid).unwrap();
        assert_eq!(json, format!("\"f01c1015620{HELLO_DIGEST}\""));
        assert_eq!(serde_json::from_str::<Cid>(&json).unwrap(), cid);
    }
}
