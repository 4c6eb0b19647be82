use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::insert_error::InsertError;
use crate::application::ports::learner_repository::LearnerRepository;
use crate::domain::accounts::learner::Learner;
use crate::domain::chain::WalletAddress;
use crate::infrastructure::db::{PgPool, classify_insert_error};

pub struct SqlxLearnerRepository {
    pub pool: PgPool,
}

impl SqlxLearnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Column prefix lets enrollment joins reuse this mapping.
pub(crate) fn learner_from_row(r: &PgRow, prefix: &str) -> anyhow::Result<Learner> {
    let wallet: String = r.try_get(format!("{prefix}wallet_address").as_str())?;
    Ok(Learner {
        id: r.try_get(format!("{prefix}id").as_str())?,
        wallet_address: WalletAddress::parse(&wallet)?,
        name: r.try_get(format!("{prefix}name").as_str())?,
        created_at: r.try_get(format!("{prefix}created_at").as_str())?,
    })
}

#[async_trait]
impl LearnerRepository for SqlxLearnerRepository {
    async fn create(&self, wallet: &WalletAddress, name: &str) -> Result<Learner, InsertError> {
        let row = sqlx::query(
            r#"INSERT INTO learners (wallet_address, name) VALUES ($1, $2)
               RETURNING id, wallet_address, name, created_at"#,
        )
        .bind(wallet.as_str())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;
        Ok(learner_from_row(&row, "")?)
    }

    async fn find_by_wallet(&self, wallet: &WalletAddress) -> anyhow::Result<Option<Learner>> {
        let row = sqlx::query(
            r#"SELECT id, wallet_address, name, created_at FROM learners WHERE wallet_address = $1"#,
        )
        .bind(wallet.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(|r| learner_from_row(r, "")).transpose()
    }
}
