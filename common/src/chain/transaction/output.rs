use serde::{Deserialize, Serialize};
use serialization::{decode_var_bytes, encode_var_bytes, Input, Output, WireDecode, WireEncode};

use crate::chain::TxDecodeConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in zatoshi.
    value: u64,
    #[serde(with = "hex::serde")]
    script: Vec<u8>,
}

impl TxOutput {
    pub fn new(value: u64, script: Vec<u8>) -> Self {
        Self { value, script }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub(super) fn decode_with_config<I: Input>(
        input: &mut I,
        config: &TxDecodeConfig,
    ) -> serialization::Result<Self> {
        let value = u64::wire_decode(input)?;
        let script = decode_var_bytes(input, config.max_script_len, "output script")?;
        Ok(Self::new(value, script))
    }
}

impl WireEncode for TxOutput {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.value.wire_encode_to(dest);
        encode_var_bytes(&self.script, dest);
    }

    fn wire_size_hint(&self) -> usize {
        8 + 1 + self.script.len()
    }
}

impl WireDecode for TxOutput {
    fn wire_decode<I: Input>(input: &mut I) -> serialization::Result<Self> {
        Self::decode_with_config(input, &TxDecodeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialization::WireDecodeAll;

    #[test]
    fn layout() {
        let output = TxOutput::new(5_000_000_000, vec![0x76, 0xa9]);
        let encoded = output.wire_encode();
        assert_eq!(hex::encode(&encoded), "00f2052a010000000276a9");
        assert_eq!(TxOutput::wire_decode_all(&encoded), Ok(output));
    }

    #[test]
    fn long_script_uses_wide_length() {
        let output = TxOutput::new(1, vec![0x6a; 0xfd]);
        let encoded = output.wire_encode();
        assert_eq!(&encoded[8..11], &[0xfd, 0xfd, 0x00]);
        assert_eq!(encoded.len(), 8 + 3 + 0xfd);
    }

    #[test]
    fn truncated_value() {
        let err = TxOutput::wire_decode_all(&[0x01, 0x02]).unwrap_err();
        assert_eq!(
            err,
            serialization::Error::Truncated {
                what: "u64",
                needed: 8,
                available: 2
            }
        );
    }
}
