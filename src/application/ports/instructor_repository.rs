use async_trait::async_trait;

use crate::application::ports::insert_error::InsertError;
use crate::domain::accounts::instructor::Instructor;
use crate::domain::chain::WalletAddress;

pub const INSTRUCTOR_WALLET_UNIQUE: &str = "instructors_wallet_address_key";

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    async fn create(
        &self,
        wallet: &WalletAddress,
        name: &str,
        bio: Option<&str>,
    ) -> Result<Instructor, InsertError>;
    async fn find_by_wallet(&self, wallet: &WalletAddress) -> anyhow::Result<Option<Instructor>>;
}
