use serde::{Deserialize, Serialize};

/// Bounds applied while decoding transactions from untrusted bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TxDecodeConfig {
    /// The maximum length of an input or output script.
    pub max_script_len: usize,
    /// The maximum number of inputs of a single transaction.
    pub max_inputs: usize,
    /// The maximum number of outputs of a single transaction.
    pub max_outputs: usize,
    /// The maximum number of join-split descriptions of a single transaction.
    pub max_join_splits: usize,
}

impl TxDecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn with_max_script_len(mut self, max_script_len: usize) -> Self {
        self.max_script_len = max_script_len;
        self
    }

    pub fn with_max_inputs(mut self, max_inputs: usize) -> Self {
        self.max_inputs = max_inputs;
        self
    }

    pub fn with_max_outputs(mut self, max_outputs: usize) -> Self {
        self.max_outputs = max_outputs;
        self
    }

    pub fn with_max_join_splits(mut self, max_join_splits: usize) -> Self {
        self.max_join_splits = max_join_splits;
        self
    }
}

impl Default for TxDecodeConfig {
    fn default() -> Self {
        Self {
            max_script_len: 10_000,
            max_inputs: 100_000,
            max_outputs: 100_000,
            max_join_splits: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = TxDecodeConfig::from_toml_str("max_script_len = 520\n").unwrap();
        assert_eq!(config, TxDecodeConfig::new().with_max_script_len(520));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            TxDecodeConfig::from_toml_str("").unwrap(),
            TxDecodeConfig::default()
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(TxDecodeConfig::from_toml_str("max_inputs = \"many\"").is_err());
    }
}
