pub mod config;
pub mod transaction;

pub use config::TxDecodeConfig;
pub use transaction::{
    tx_hash_to_cid, tx_hash_to_link, JoinSplit, ResolveError, Resolved, Scalar, SubNode,
    Transaction, TxInput, TxOutput, LEGACY_TX_VERSION, SEQUENCE_FINAL,
};
