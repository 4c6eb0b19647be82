use chrono::{DateTime, Utc};

use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::{
    ENROLLMENT_TX_HASH_UNIQUE, ENROLLMENT_UNIQUE, EnrollmentRepository,
};
use crate::application::ports::insert_error::InsertError;
use crate::application::ports::learner_repository::LearnerRepository;
use crate::application::use_cases::enrollments::EnrollmentError;
use crate::domain::chain::{TxHash, WalletAddress};
use crate::domain::enrollments::enrollment::Enrollment;

pub struct Enroll<'a, C, L, E>
where
    C: CourseRepository + ?Sized,
    L: LearnerRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub courses: &'a C,
    pub learners: &'a L,
    pub enrollments: &'a E,
}

#[derive(Debug, Clone, Default)]
pub struct EnrollRequest {
    pub wallet_address: String,
    /// Purchase transaction reported by the learner's wallet, if any.
    pub tx_hash: Option<String>,
}

impl<'a, C, L, E> Enroll<'a, C, L, E>
where
    C: CourseRepository + ?Sized,
    L: LearnerRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub async fn execute(
        &self,
        course_id: i32,
        req: &EnrollRequest,
        now: DateTime<Utc>,
    ) -> Result<Enrollment, EnrollmentError> {
        let wallet =
            WalletAddress::parse(&req.wallet_address).map_err(EnrollmentError::InvalidWallet)?;
        let tx_hash = req
            .tx_hash
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .map(TxHash::parse)
            .transpose()
            .map_err(EnrollmentError::InvalidTxHash)?;

        let course = self
            .courses
            .get_by_id(course_id)
            .await
            .map_err(EnrollmentError::Storage)?
            .ok_or(EnrollmentError::CourseNotFound)?;
        let learner = self
            .learners
            .find_by_wallet(&wallet)
            .await
            .map_err(EnrollmentError::Storage)?
            .ok_or(EnrollmentError::LearnerNotFound)?;

        if !course.is_open_for_enrollment(now) {
            return Err(EnrollmentError::CourseNotActive);
        }
        if self
            .enrollments
            .find(course.id, learner.id)
            .await
            .map_err(EnrollmentError::Storage)?
            .is_some()
        {
            return Err(EnrollmentError::AlreadyEnrolled);
        }
        if let Some(hash) = &tx_hash {
            if self
                .enrollments
                .find_by_tx_hash(hash)
                .await
                .map_err(EnrollmentError::Storage)?
                .is_some()
            {
                return Err(EnrollmentError::TransactionAlreadyUsed);
            }
        }

        match self
            .enrollments
            .create(course.id, learner.id, tx_hash.as_ref())
            .await
        {
            Ok(enrollment) => {
                tracing::info!(
                    course_id = course.id,
                    learner_id = learner.id,
                    tx_hash = ?enrollment.tx_hash.as_ref().map(TxHash::as_str),
                    "learner_enrolled"
                );
                Ok(enrollment)
            }
            Err(e) if e.is_conflict_on(ENROLLMENT_UNIQUE) => Err(EnrollmentError::AlreadyEnrolled),
            Err(e) if e.is_conflict_on(ENROLLMENT_TX_HASH_UNIQUE) => {
                Err(EnrollmentError::TransactionAlreadyUsed)
            }
            Err(InsertError::Conflict { constraint }) => Err(EnrollmentError::Storage(
                anyhow::anyhow!("unexpected unique violation on {constraint}"),
            )),
            Err(InsertError::Storage(e)) => Err(EnrollmentError::Storage(e)),
        }
    }
}
