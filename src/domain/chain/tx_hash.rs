use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static TX_HASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]{64}$").expect("valid regex"));

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("transaction hash must be 0x followed by 64 hex digits")]
pub struct TxHashError;

/// Hash of the purchase transaction a learner submitted through their wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl TxHash {
    pub fn parse(raw: &str) -> Result<Self, TxHashError> {
        let trimmed = raw.trim();
        if !TX_HASH_RE.is_match(trimmed) {
            return Err(TxHashError);
        }
        Ok(Self(format!("0x{}", trimmed[2..].to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
