use async_trait::async_trait;

use crate::application::ports::insert_error::InsertError;
use crate::domain::chain::TxHash;
use crate::domain::enrollments::enrollment::{CourseEnrollee, EnrolledCourse, Enrollment};

pub const ENROLLMENT_UNIQUE: &str = "enrollments_course_id_learner_id_key";
pub const ENROLLMENT_TX_HASH_UNIQUE: &str = "enrollments_tx_hash_key";

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find(&self, course_id: i32, learner_id: i32) -> anyhow::Result<Option<Enrollment>>;

    async fn find_by_tx_hash(&self, tx_hash: &TxHash) -> anyhow::Result<Option<Enrollment>>;

    async fn create(
        &self,
        course_id: i32,
        learner_id: i32,
        tx_hash: Option<&TxHash>,
    ) -> Result<Enrollment, InsertError>;

    // Most recent enrollment first
    async fn list_for_course(&self, course_id: i32) -> anyhow::Result<Vec<CourseEnrollee>>;

    // Most recent enrollment first
    async fn list_for_learner(&self, learner_id: i32) -> anyhow::Result<Vec<EnrolledCourse>>;
}
