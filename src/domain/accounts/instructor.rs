use crate::domain::chain::WalletAddress;

#[derive(Debug, Clone)]
pub struct Instructor {
    pub id: i32,
    pub wallet_address: WalletAddress,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
