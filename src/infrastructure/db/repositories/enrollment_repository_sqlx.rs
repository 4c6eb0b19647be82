use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::insert_error::InsertError;
use crate::domain::chain::TxHash;
use crate::domain::enrollments::enrollment::{CourseEnrollee, EnrolledCourse, Enrollment};
use crate::infrastructure::db::repositories::course_repository_sqlx::{
    COURSE_COLUMNS, course_from_row,
};
use crate::infrastructure::db::repositories::learner_repository_sqlx::learner_from_row;
use crate::infrastructure::db::{PgPool, classify_insert_error};

pub struct SqlxEnrollmentRepository {
    pub pool: PgPool,
}

impl SqlxEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn tx_hash_from_row(r: &PgRow) -> anyhow::Result<Option<TxHash>> {
    let raw: Option<String> = r.try_get("tx_hash")?;
    Ok(raw.as_deref().map(TxHash::parse).transpose()?)
}

fn enrollment_from_row(r: &PgRow) -> anyhow::Result<Enrollment> {
    Ok(Enrollment {
        id: r.get("id"),
        course_id: r.get("course_id"),
        learner_id: r.get("learner_id"),
        tx_hash: tx_hash_from_row(r)?,
        enrolled_at: r.get("enrolled_at"),
    })
}

#[async_trait]
impl EnrollmentRepository for SqlxEnrollmentRepository {
    async fn find(&self, course_id: i32, learner_id: i32) -> anyhow::Result<Option<Enrollment>> {
        let row = sqlx::query(
            r#"SELECT id, course_id, learner_id, tx_hash, enrolled_at FROM enrollments
               WHERE course_id = $1 AND learner_id = $2"#,
        )
        .bind(course_id)
        .bind(learner_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(enrollment_from_row).transpose()
    }

    async fn find_by_tx_hash(&self, tx_hash: &TxHash) -> anyhow::Result<Option<Enrollment>> {
        let row = sqlx::query(
            r#"SELECT id, course_id, learner_id, tx_hash, enrolled_at FROM enrollments
               WHERE tx_hash = $1"#,
        )
        .bind(tx_hash.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(enrollment_from_row).transpose()
    }

    async fn create(
        &self,
        course_id: i32,
        learner_id: i32,
        tx_hash: Option<&TxHash>,
    ) -> Result<Enrollment, InsertError> {
        let row = sqlx::query(
            r#"INSERT INTO enrollments (course_id, learner_id, tx_hash) VALUES ($1, $2, $3)
               RETURNING id, course_id, learner_id, tx_hash, enrolled_at"#,
        )
        .bind(course_id)
        .bind(learner_id)
        .bind(tx_hash.map(TxHash::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;
        Ok(enrollment_from_row(&row)?)
    }

    async fn list_for_course(&self, course_id: i32) -> anyhow::Result<Vec<CourseEnrollee>> {
        let rows = sqlx::query(
            r#"SELECT l.id AS l_id, l.wallet_address AS l_wallet_address, l.name AS l_name,
                      l.created_at AS l_created_at, e.tx_hash, e.enrolled_at
               FROM enrollments e
               JOIN learners l ON l.id = e.learner_id
               WHERE e.course_id = $1
               ORDER BY e.enrolled_at DESC, e.id DESC"#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|r| -> anyhow::Result<CourseEnrollee> {
                Ok(CourseEnrollee {
                    learner: learner_from_row(r, "l_")?,
                    tx_hash: tx_hash_from_row(r)?,
                    enrolled_at: r.get("enrolled_at"),
                })
            })
            .collect()
    }

    async fn list_for_learner(&self, learner_id: i32) -> anyhow::Result<Vec<EnrolledCourse>> {
        let sql = format!(
            r#"SELECT {COURSE_COLUMNS}, e.tx_hash, e.enrolled_at
               FROM enrollments e
               JOIN courses c ON c.id = e.course_id
               LEFT JOIN instructors i ON i.id = c.instructor_id
               WHERE e.learner_id = $1
               ORDER BY e.enrolled_at DESC, e.id DESC"#
        );
        let rows = sqlx::query(&sql)
            .bind(learner_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|r| -> anyhow::Result<EnrolledCourse> {
                Ok(EnrolledCourse {
                    course: course_from_row(r)?,
                    tx_hash: tx_hash_from_row(r)?,
                    enrolled_at: r.get("enrolled_at"),
                })
            })
            .collect()
    }
}
