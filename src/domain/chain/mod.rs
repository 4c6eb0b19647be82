pub mod tx_hash;
pub mod wallet;
pub mod wei;

pub use tx_hash::{TxHash, TxHashError};
pub use wallet::{WalletAddress, WalletAddressError};
pub use wei::{AmountError, Wei};
