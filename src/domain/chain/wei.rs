use std::fmt;

pub const ETH_DECIMALS: usize = 18;
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount must be a non-negative decimal number")]
    Malformed,
    #[error("amount has more than 18 fractional digits")]
    TooPrecise,
    #[error("amount is too large")]
    Overflow,
}

/// Amount of ether in its smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wei(u128);

impl Wei {
    pub const fn new(wei: u128) -> Self {
        Self(wei)
    }

    pub fn get(self) -> u128 {
        self.0
    }

    /// Parses an ether amount such as `"0.05"` or `"12"`.
    pub fn from_eth_str(raw: &str) -> Result<Self, AmountError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(AmountError::Malformed);
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AmountError::Malformed);
        }
        if frac.len() > ETH_DECIMALS {
            return Err(AmountError::TooPrecise);
        }

        let whole_wei = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u128>()
                .map_err(|_| AmountError::Overflow)?
                .checked_mul(WEI_PER_ETH)
                .ok_or(AmountError::Overflow)?
        };
        let frac_wei = if frac.is_empty() {
            0
        } else {
            let padded = format!("{frac:0<width$}", width = ETH_DECIMALS);
            padded.parse::<u128>().map_err(|_| AmountError::Malformed)?
        };
        whole_wei
            .checked_add(frac_wei)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Parses a plain integer amount of wei, as stored in the database.
    pub fn from_wei_str(raw: &str) -> Result<Self, AmountError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(AmountError::Malformed);
        }
        s.parse::<u128>().map(Self).map_err(|_| AmountError::Overflow)
    }

    pub fn to_eth_string(self) -> String {
        let whole = self.0 / WEI_PER_ETH;
        let frac = self.0 % WEI_PER_ETH;
        if frac == 0 {
            return whole.to_string();
        }
        let frac = format!("{frac:0>width$}", width = ETH_DECIMALS);
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
