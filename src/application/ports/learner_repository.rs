use async_trait::async_trait;

use crate::application::ports::insert_error::InsertError;
use crate::domain::accounts::learner::Learner;
use crate::domain::chain::WalletAddress;

pub const LEARNER_WALLET_UNIQUE: &str = "learners_wallet_address_key";

#[async_trait]
pub trait LearnerRepository: Send + Sync {
    async fn create(&self, wallet: &WalletAddress, name: &str) -> Result<Learner, InsertError>;
    async fn find_by_wallet(&self, wallet: &WalletAddress) -> anyhow::Result<Option<Learner>>;
}
