pub mod cid;
pub mod hash_encoded;
pub mod multihash;
pub mod uvarint;

pub use cid::{Cid, CidError, Codec};
pub use multihash::{HashCode, Multihash};

fixed_hash::construct_fixed_hash! {
    pub struct H256(32);
}

impl H256 {
    /// Bitcoin-derived chains display hashes as little-endian numbers, i.e. with the bytes in
    /// reverse order compared to how the digest is produced and serialized.
    pub fn as_bitcoin_uint256_hex(&self) -> String {
        let hex_length = self.0.len() * 2;
        self.as_bytes()
            .iter()
            .rev()
            .fold(String::with_capacity(hex_length), |mut current, b| {
                use std::fmt::Write;
                let _ = write!(current, "{b:02x}");
                current
            })
    }
}

impl serde::Serialize for H256 {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format!("{self:x}"))
    }
}

impl<'de> serde::Deserialize<'de> for H256 {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct HashVisitor;
        impl serde::de::Visitor<'_> for HashVisitor {
            type Value = H256;
            fn expecting(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                fmt.write_str("a hex-encoded hash")
            }
            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                s.parse().map_err(serde::de::Error::custom)
            }
        }
        d.deserialize_str(HashVisitor)
    }
}

/// Objects named by the hash of their canonical encoding.
pub trait ContentAddressed {
    fn cid(&self) -> Cid;
}

impl<T: ContentAddressed> ContentAddressed for &T {
    fn cid(&self) -> Cid {
        (*self).cid()
    }
}
