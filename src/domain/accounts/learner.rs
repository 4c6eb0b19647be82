use crate::domain::chain::WalletAddress;

#[derive(Debug, Clone)]
pub struct Learner {
    pub id: i32,
    pub wallet_address: WalletAddress,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
