use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use sha3::{Digest, Keccak256};

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").expect("valid regex"));

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAddressError {
    #[error("wallet address must be 40 hex digits with an optional 0x prefix")]
    Malformed,
    #[error("wallet address does not match its EIP-55 checksum")]
    BadChecksum,
}

/// An EVM account address, always held in EIP-55 checksummed form.
///
/// Single-case input is accepted as-is; mixed-case input must already carry
/// a valid checksum. Two spellings of the same account compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, WalletAddressError> {
        let trimmed = raw.trim();
        if !ADDRESS_RE.is_match(trimmed) {
            return Err(WalletAddressError::Malformed);
        }
        let hex = &trimmed[trimmed.len() - 40..];
        let checksummed = checksum(hex);

        let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
        if has_upper && has_lower && checksummed[2..] != *hex {
            return Err(WalletAddressError::BadChecksum);
        }
        Ok(Self(checksummed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn checksum(hex: &str) -> String {
    let lower = hex.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
