use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::insert_error::InsertError;
use crate::application::ports::instructor_repository::InstructorRepository;
use crate::domain::accounts::instructor::Instructor;
use crate::domain::chain::WalletAddress;
use crate::infrastructure::db::{PgPool, classify_insert_error};

pub struct SqlxInstructorRepository {
    pub pool: PgPool,
}

impl SqlxInstructorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn instructor_from_row(r: &PgRow) -> anyhow::Result<Instructor> {
    let wallet: String = r.get("wallet_address");
    Ok(Instructor {
        id: r.get("id"),
        wallet_address: WalletAddress::parse(&wallet)?,
        name: r.get("name"),
        bio: r.get("bio"),
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl InstructorRepository for SqlxInstructorRepository {
    async fn create(
        &self,
        wallet: &WalletAddress,
        name: &str,
        bio: Option<&str>,
    ) -> Result<Instructor, InsertError> {
        let row = sqlx::query(
            r#"INSERT INTO instructors (wallet_address, name, bio) VALUES ($1, $2, $3)
               RETURNING id, wallet_address, name, bio, created_at"#,
        )
        .bind(wallet.as_str())
        .bind(name)
        .bind(bio)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;
        Ok(instructor_from_row(&row)?)
    }

    async fn find_by_wallet(&self, wallet: &WalletAddress) -> anyhow::Result<Option<Instructor>> {
        let row = sqlx::query(
            r#"SELECT id, wallet_address, name, bio, created_at
               FROM instructors WHERE wallet_address = $1"#,
        )
        .bind(wallet.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(instructor_from_row).transpose()
    }
}
