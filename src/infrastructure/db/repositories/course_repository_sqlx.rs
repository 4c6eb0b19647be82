use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::course_repository::CourseRepository;
use crate::domain::chain::{WalletAddress, Wei};
use crate::domain::courses::course::{Course, CourseFilter, NewCourse};
use crate::infrastructure::db::PgPool;

// price_wei is NUMERIC(78,0); it crosses the wire as text
pub(crate) const COURSE_COLUMNS: &str = "c.id, c.title, c.description, c.start_time, c.end_time, \
     c.price_wei::text AS price_wei, c.instructor_id, i.wallet_address AS instructor_wallet, \
     c.is_active, c.created_at";

/// `SELECT` over `source` (a table or CTE name) aliased as `c`, joined to its instructor.
fn course_select(source: &str) -> String {
    format!(
        "SELECT {COURSE_COLUMNS} FROM {source} c LEFT JOIN instructors i ON i.id = c.instructor_id"
    )
}

pub(crate) fn course_from_row(r: &PgRow) -> anyhow::Result<Course> {
    let price: String = r.get("price_wei");
    let instructor_wallet: Option<String> = r.get("instructor_wallet");
    Ok(Course {
        id: r.get("id"),
        title: r.get("title"),
        description: r.get("description"),
        start_time: r.get("start_time"),
        end_time: r.get("end_time"),
        price: Wei::from_wei_str(&price)
            .map_err(|e| anyhow::anyhow!("invalid stored price {price:?}: {e}"))?,
        instructor_id: r.get("instructor_id"),
        instructor_wallet: instructor_wallet
            .as_deref()
            .map(WalletAddress::parse)
            .transpose()?,
        is_active: r.get("is_active"),
        created_at: r.get("created_at"),
    })
}

pub struct SqlxCourseRepository {
    pub pool: PgPool,
}

impl SqlxCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqlxCourseRepository {
    async fn list(&self, filter: &CourseFilter) -> anyhow::Result<Vec<Course>> {
        let sql = format!(
            r#"{}
               WHERE ($1::timestamptz IS NULL OR (c.is_active AND c.end_time > $1))
                 AND ($2::int IS NULL OR c.instructor_id = $2)
               ORDER BY c.start_time DESC, c.id DESC"#,
            course_select("courses")
        );
        let rows = sqlx::query(&sql)
            .bind(filter.open_at)
            .bind(filter.instructor_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(course_from_row).collect()
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Course>> {
        let sql = format!("{} WHERE c.id = $1", course_select("courses"));
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(course_from_row).transpose()
    }

    async fn create(&self, course: &NewCourse) -> anyhow::Result<Course> {
        let sql = format!(
            r#"WITH inserted AS (
                   INSERT INTO courses (title, description, start_time, end_time, price_wei, instructor_id)
                   VALUES ($1, $2, $3, $4, $5::numeric, $6)
                   RETURNING *
               )
               {}"#,
            course_select("inserted")
        );
        let row = sqlx::query(&sql)
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.start_time)
            .bind(course.end_time)
            .bind(course.price.to_string())
            .bind(course.instructor_id)
            .fetch_one(&self.pool)
            .await?;
        course_from_row(&row)
    }

    async fn deactivate(&self, id: i32) -> anyhow::Result<Option<Course>> {
        let sql = format!(
            r#"WITH updated AS (
                   UPDATE courses SET is_active = FALSE WHERE id = $1 RETURNING *
               )
               {}"#,
            course_select("updated")
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(course_from_row).transpose()
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
